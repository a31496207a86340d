// ==========================================
// 产线OEE效能分析系统 - 核心库
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 系统口径
// 系统定位: 决策支持系统 (指标计算核心,展示层外置)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 指标计算规则
pub mod engine;

// API 层 - 看板接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DowntimeType, OeeBand};

// 领域实体
pub use domain::{
    AggregateOee, DowntimeEvent, OeeComponents, OeeDelta, PreviousPeriod, ProductionLine, Shift,
    ShiftOee,
};

// 引擎
pub use engine::{
    component_deltas, format_percent, status_band, CategoryDowntime, DowntimeAggregator,
    DowntimeRow, OeeEngine,
};

// API
pub use api::{ApiError, ApiResult, DashboardApi, OeeDataset, ReportSnapshot, ShiftSelection, TrendPoint};
