// ==========================================
// 产线OEE效能分析系统 - 停机汇总引擎
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 3. 停机汇总
// ==========================================
// 职责: 按班次/类别过滤求和停机事件
// 输入: 停机事件全集 + 可选班次过滤
// 输出: 非计划停机合计 / 类别汇总 / 明细行
// 红线: 纯函数,不依赖全局状态;过滤缺省视为"全部班次"
// ==========================================

use crate::domain::downtime::DowntimeEvent;
use crate::domain::types::DowntimeType;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

// ==========================================
// CategoryDowntime - 类别停机汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDowntime {
    pub category: String,   // 停机类别
    pub total_minutes: f64, // 类别内时长合计 (计划 + 非计划)
    #[serde(rename = "type")]
    pub downtime_type: DowntimeType, // 类别内首次出现事件的类型
}

// ==========================================
// DowntimeRow - 停机明细行
// ==========================================
// 用途: 看板明细表与导出快照,一条事件一行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DowntimeRow {
    pub reason: String,     // 停机原因
    pub category: String,   // 停机类别
    pub total_minutes: f64, // 该事件时长
    #[serde(rename = "type")]
    pub downtime_type: DowntimeType,
}

// ==========================================
// DowntimeAggregator - 停机汇总引擎
// ==========================================
pub struct DowntimeAggregator;

impl DowntimeAggregator {
    /// 创建新的停机汇总引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 非计划停机时长合计 (分钟)
    ///
    /// # 参数
    /// - `events`: 停机事件全集
    /// - `shift_id`: 班次过滤,None 表示全部班次
    ///
    /// # 返回
    /// 匹配事件中 type == unplanned 的时长之和;无匹配返回 0
    pub fn unplanned_minutes(&self, events: &[DowntimeEvent], shift_id: Option<&str>) -> f64 {
        events
            .iter()
            .filter(|e| e.downtime_type == DowntimeType::Unplanned)
            .filter(|e| Self::matches_shift(e, shift_id))
            .map(|e| e.duration_minutes)
            .sum()
    }

    /// 按类别汇总停机时长 (计划 + 非计划均计入)
    ///
    /// # 规则
    /// - 每个类别的 type 取累加过程中首次遇到的事件类型,
    ///   同一类别混合计划/非计划时不做调和 (兼容既有导出消费方)
    /// - 按 total_minutes 降序;同值保持分组遇到的顺序
    ///
    /// # 返回
    /// 每个出现过的类别一条汇总记录
    #[instrument(skip(self, events), fields(count = events.len()))]
    pub fn group_by_category(
        &self,
        events: &[DowntimeEvent],
        shift_id: Option<&str>,
    ) -> Vec<CategoryDowntime> {
        let mut groups: Vec<CategoryDowntime> = Vec::new();

        for event in events.iter().filter(|e| Self::matches_shift(e, shift_id)) {
            match groups.iter_mut().find(|g| g.category == event.category) {
                Some(group) => group.total_minutes += event.duration_minutes,
                None => groups.push(CategoryDowntime {
                    category: event.category.clone(),
                    total_minutes: event.duration_minutes,
                    downtime_type: event.downtime_type,
                }),
            }
        }

        groups.sort_by(|a, b| Self::desc_by_minutes(a.total_minutes, b.total_minutes));
        groups
    }

    /// 停机明细行 (不分组,一条事件一行)
    ///
    /// 过滤语义与 group_by_category 相同,按 total_minutes 降序
    pub fn rows(&self, events: &[DowntimeEvent], shift_id: Option<&str>) -> Vec<DowntimeRow> {
        let mut rows: Vec<DowntimeRow> = events
            .iter()
            .filter(|e| Self::matches_shift(e, shift_id))
            .map(|e| DowntimeRow {
                reason: e.reason.clone(),
                category: e.category.clone(),
                total_minutes: e.duration_minutes,
                downtime_type: e.downtime_type,
            })
            .collect();

        rows.sort_by(|a, b| Self::desc_by_minutes(a.total_minutes, b.total_minutes));
        rows
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 班次过滤判定; shift_id 缺省视为全部班次
    fn matches_shift(event: &DowntimeEvent, shift_id: Option<&str>) -> bool {
        match shift_id {
            Some(id) => event.shift_id == id,
            None => true,
        }
    }

    /// 降序比较器;时长均来自有限输入,NaN 视为相等兜底
    fn desc_by_minutes(a: f64, b: f64) -> Ordering {
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    }
}

impl Default for DowntimeAggregator {
    fn default() -> Self {
        Self::new()
    }
}
