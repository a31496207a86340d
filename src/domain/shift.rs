// ==========================================
// 产线OEE效能分析系统 - 班次领域模型
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 1.2 班次生产记录
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Shift - 班次生产记录
// ==========================================
// 用途: 单班产量与计划生产时间,OEE 计算输入
// 红线: 构造后只读; good + defect == actual 由数据方保证,核心不校验
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,   // 班次ID
    pub name: String, // 班次名称 (如 "早班 06:00-14:00")

    // ===== 时间窗口 (仅展示用途) =====
    pub start_time: DateTime<Utc>, // 班次开始时间
    pub end_time: DateTime<Utc>,   // 班次结束时间

    // ===== 生产计划 =====
    pub planned_production_time_min: f64, // 计划生产时间 (分钟)
    pub target_quantity: u32,             // 目标产量 (件)

    // ===== 生产实绩 =====
    pub actual_quantity: u32, // 实际产量 (件)
    pub good_quantity: u32,   // 合格品数量 (件)
    pub defect_quantity: u32, // 不合格品数量 (件)
}
