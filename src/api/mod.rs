// ==========================================
// 产线OEE效能分析系统 - API层
// ==========================================
// 职责: 面向看板的聚合查询接口,输入校验
// 红线: 不持有选择状态,不做 I/O
// ==========================================

pub mod dashboard_api;
pub mod dto;
pub mod error;

pub use dashboard_api::DashboardApi;
pub use dto::{OeeDataset, ReportSnapshot, ShiftSelection, TrendPoint};
pub use error::{ApiError, ApiResult};
