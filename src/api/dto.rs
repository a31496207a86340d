// ==========================================
// 产线OEE效能分析系统 - 看板 DTO 定义
// ==========================================
// 依据: Dashboard_Contract_v1.0.md - 看板数据契约
// 职责: 定义看板查询的输入数据集与响应结构
// ==========================================

use crate::domain::downtime::DowntimeEvent;
use crate::domain::line::ProductionLine;
use crate::domain::oee::{OeeComponents, PreviousPeriod};
use crate::domain::shift::Shift;
use crate::engine::downtime::{CategoryDowntime, DowntimeRow};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// OeeDataset - 已加载的报表输入集
// ==========================================
// 来源: 调用方负责加载 (静态配置/文件),核心不做 I/O
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OeeDataset {
    pub production_line: ProductionLine,
    pub shifts: Vec<Shift>,
    pub downtime_events: Vec<DowntimeEvent>,
    pub previous_period: PreviousPeriod,
}

// ==========================================
// ShiftSelection - 班次选择过滤
// ==========================================
// 红线: 选择状态属于展示层,核心只接受显式传参
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftSelection {
    /// 全部班次 (产线级汇总)
    All,
    /// 指定班次
    Shift(String),
}

impl ShiftSelection {
    /// 过滤用班次ID; All 返回 None (语义: 全部班次)
    pub fn shift_id(&self) -> Option<&str> {
        match self {
            ShiftSelection::All => None,
            ShiftSelection::Shift(id) => Some(id),
        }
    }

    /// 快照中的选择标签: "all" 或班次ID
    pub fn label(&self) -> String {
        match self {
            ShiftSelection::All => "all".to_string(),
            ShiftSelection::Shift(id) => id.clone(),
        }
    }
}

impl fmt::Display for ShiftSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// TrendPoint - 趋势序列点
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String, // 班次短标签 (班次名首段)
    pub value: f64,    // 该班综合效率
}

// ==========================================
// ReportSnapshot - 报表导出快照
// ==========================================
// 用途: 调用方序列化落盘;落盘动作与文件命名不在核心职责内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// 选择标签 ("all" 或班次ID)
    pub selection: String,

    /// 产线主数据
    pub production_line: ProductionLine,

    /// 本期三因子与综合值
    pub metrics: OeeComponents,

    /// 上期三因子与综合值
    pub previous: OeeComponents,

    /// 停机明细 Top3 (按时长降序)
    pub downtime_top3: Vec<DowntimeRow>,

    /// 类别停机汇总
    pub downtime_by_category: Vec<CategoryDowntime>,
}
