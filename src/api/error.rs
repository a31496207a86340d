// ==========================================
// 产线OEE效能分析系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,错误信息包含显式原因
// ==========================================

use thiserror::Error;

/// API层错误类型
///
/// 口径说明: 分母为零 (零计划时间/零开动时间/零产量) 不是错误,
/// 由引擎按零值口径处理;这里只覆盖调用方的结构性输入问题
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("班次不存在: shift_id={0}")]
    ShiftNotFound(String),
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
