// ==========================================
// 产线OEE效能分析系统 - 产线领域模型
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 1.1 产线主数据
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductionLine - 产线
// ==========================================
// 用途: 基准节拍来源,一次看板会话一条产线
// 红线: 只读参考数据,核心不做多产线汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionLine {
    pub id: String,                  // 产线ID
    pub name: String,                // 产线名称
    pub target_cycle_time_s: f64,    // 目标节拍 (秒/件)
    pub description: Option<String>, // 产线描述 (可选)
}
