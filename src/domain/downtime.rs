// ==========================================
// 产线OEE效能分析系统 - 停机事件领域模型
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 1.3 停机事件日志
// ==========================================

use crate::domain::types::DowntimeType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// DowntimeEvent - 停机事件
// ==========================================
// 用途: 追加式停机日志,一个班次零到多条
// 红线: duration_minutes 与起止时间的一致性由采集方保证,核心不校验
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DowntimeEvent {
    pub id: String,       // 事件ID
    pub shift_id: String, // 所属班次ID
    pub category: String, // 停机类别 (粗粒度归因)
    pub reason: String,   // 停机原因 (自由文本)

    // ===== 时间窗口 =====
    pub start_time: DateTime<Utc>, // 停机开始时间
    pub end_time: DateTime<Utc>,   // 停机结束时间
    pub duration_minutes: f64,     // 停机时长 (分钟)

    // ===== 停机类型 =====
    #[serde(rename = "type")]
    pub downtime_type: DowntimeType, // 计划 / 非计划
}
