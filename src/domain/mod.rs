// ==========================================
// 产线OEE效能分析系统 - 领域模型层
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 1. 数据模型
// ==========================================
// 职责: 定义领域实体与值对象
// 红线: 不含计算逻辑,不含数据访问逻辑
// ==========================================

pub mod downtime;
pub mod line;
pub mod oee;
pub mod shift;
pub mod types;

// 重导出核心类型
pub use downtime::DowntimeEvent;
pub use line::ProductionLine;
pub use oee::{AggregateOee, OeeComponents, OeeDelta, PreviousPeriod, ShiftOee};
pub use shift::Shift;
pub use types::{DowntimeType, OeeBand};
