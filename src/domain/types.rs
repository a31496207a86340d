// ==========================================
// 产线OEE效能分析系统 - 领域类型定义
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 0.1 指标口径
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 停机类型 (Downtime Type)
// ==========================================
// 红线: 只有非计划停机计入时间开动率损失
// 序列化格式: 小写 (与前端数据契约一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DowntimeType {
    Planned,   // 计划停机 (换型/保养)
    Unplanned, // 非计划停机 (故障/缺料)
}

impl fmt::Display for DowntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DowntimeType::Planned => write!(f, "planned"),
            DowntimeType::Unplanned => write!(f, "unplanned"),
        }
    }
}

// ==========================================
// OEE 等级 (OEE Band)
// ==========================================
// 依据: OEE_Metrics_Spec 4. 等级判定
// 顺序: NeedsAttention < Acceptable < WorldClass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OeeBand {
    #[serde(rename = "Needs Attention")]
    NeedsAttention, // 需关注
    #[serde(rename = "Acceptable")]
    Acceptable, // 合格
    #[serde(rename = "World-Class")]
    WorldClass, // 世界级
}

impl fmt::Display for OeeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OeeBand::NeedsAttention => write!(f, "Needs Attention"),
            OeeBand::Acceptable => write!(f, "Acceptable"),
            OeeBand::WorldClass => write!(f, "World-Class"),
        }
    }
}
