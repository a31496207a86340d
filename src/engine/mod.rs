// ==========================================
// 产线OEE效能分析系统 - 引擎层
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 2/3/4 计算口径
// ==========================================
// 职责: 实现指标计算规则,纯函数无副作用
// 红线: 不持有全局状态;班次过滤一律显式传参
// ==========================================

pub mod classify;
pub mod downtime;
pub mod oee;

// 重导出核心引擎
pub use classify::{component_deltas, format_percent, status_band};
pub use downtime::{CategoryDowntime, DowntimeAggregator, DowntimeRow};
pub use oee::OeeEngine;
