// ==========================================
// 产线OEE效能分析系统 - 等级判定与展示格式化
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 4. 等级判定与展示
// ==========================================
// 职责: OEE 等级划分 / 百分比格式化 / 环比差值
// ==========================================

use crate::domain::oee::{OeeComponents, OeeDelta};
use crate::domain::types::OeeBand;

/// OEE 等级判定
///
/// # 规则 (下界含等号)
/// - oee ≥ 0.85 → WorldClass
/// - 0.65 ≤ oee < 0.85 → Acceptable
/// - 其余 → NeedsAttention
pub fn status_band(oee: f64) -> OeeBand {
    if oee >= 0.85 {
        OeeBand::WorldClass
    } else if oee >= 0.65 {
        OeeBand::Acceptable
    } else {
        OeeBand::NeedsAttention
    }
}

/// 比率格式化为百分比字符串
///
/// 乘以 100 后四舍五入到 digits 位小数,追加 "%"
/// 仅展示用途,不参与任何业务口径
pub fn format_percent(value: f64, digits: u32) -> String {
    let scale = 10f64.powi(digits as i32);
    let pct = (value * 100.0 * scale).round() / scale;
    format!("{:.*}%", digits as usize, pct)
}

/// 环比差值: 本期 - 上期,逐分量带符号,不归一不截断
pub fn component_deltas(current: &OeeComponents, previous: &OeeComponents) -> OeeDelta {
    OeeDelta {
        oee: current.oee - previous.oee,
        availability: current.availability - previous.availability,
        performance: current.performance - previous.performance,
        quality: current.quality - previous.quality,
    }
}
