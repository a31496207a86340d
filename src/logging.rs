// ==========================================
// 产线OEE效能分析系统 - 日志系统初始化
// ==========================================
// 基于 tracing / tracing-subscriber
// 级别通过 RUST_LOG 环境变量控制
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// 指标计算全程纯函数,日志只用于引擎入口的调用追踪
///
/// # 环境变量
/// - RUST_LOG: 级别过滤器（默认 info）
///   例如: RUST_LOG=line_oee_analytics=trace
///
/// # 示例
/// ```no_run
/// use line_oee_analytics::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// debug 级别,输出接入测试捕获;重复初始化静默忽略
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
