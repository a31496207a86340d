// ==========================================
// 产线OEE效能分析系统 - 看板 API
// ==========================================
// 依据: Dashboard_Contract_v1.0.md - 看板聚合查询
// 职责: 封装引擎层,按班次选择分发单班/汇总查询,组装导出快照
// 架构: API 层 → 引擎层 (OeeEngine / DowntimeAggregator)
// ==========================================

use crate::api::dto::{OeeDataset, ReportSnapshot, ShiftSelection, TrendPoint};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::oee::{AggregateOee, OeeComponents, OeeDelta, ShiftOee};
use crate::domain::shift::Shift;
use crate::engine::classify::component_deltas;
use crate::engine::downtime::{CategoryDowntime, DowntimeAggregator, DowntimeRow};
use crate::engine::oee::OeeEngine;

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 职责:
/// 1. 持有一次会话的已加载数据集 (加载由调用方完成)
/// 2. 按班次选择分发: All → 产线级汇总, Shift → 单班指标
/// 3. 组装导出快照 (序列化落盘由调用方完成)
///
/// 说明: 指定班次的查询先解析班次对象,悬空ID快速失败;
/// 停机过滤类查询对未知ID返回空结果 (过滤无命中,不算错误)
pub struct DashboardApi {
    dataset: OeeDataset,
    engine: OeeEngine,
    aggregator: DowntimeAggregator,
}

impl DashboardApi {
    /// 创建新的看板API实例
    ///
    /// # 参数
    /// - dataset: 已加载的报表输入集
    pub fn new(dataset: OeeDataset) -> Self {
        Self {
            dataset,
            engine: OeeEngine::new(),
            aggregator: DowntimeAggregator::new(),
        }
    }

    // ==========================================
    // 指标查询接口
    // ==========================================

    /// 单班 OEE 指标
    ///
    /// # 返回
    /// - Ok(ShiftOee): 单班指标
    /// - Err(ApiError): 班次ID为空或不存在
    pub fn shift_metrics(&self, shift_id: &str) -> ApiResult<ShiftOee> {
        let shift = self.find_shift(shift_id)?;
        Ok(self.engine.calculate_shift(
            shift,
            &self.dataset.production_line,
            &self.dataset.downtime_events,
        ))
    }

    /// 产线级汇总 OEE 指标 (全部班次)
    pub fn aggregate_metrics(&self) -> AggregateOee {
        self.engine.calculate_aggregate(
            &self.dataset.shifts,
            &self.dataset.production_line,
            &self.dataset.downtime_events,
        )
    }

    /// 按选择返回三因子与综合值
    ///
    /// All → 汇总口径; Shift → 单班口径
    pub fn metrics(&self, selection: &ShiftSelection) -> ApiResult<OeeComponents> {
        match selection {
            ShiftSelection::All => Ok(self.aggregate_metrics().components()),
            ShiftSelection::Shift(id) => Ok(self.shift_metrics(id)?.components()),
        }
    }

    // ==========================================
    // 停机查询接口
    // ==========================================

    /// 停机明细行 (按时长降序)
    pub fn downtime_rows(&self, selection: &ShiftSelection) -> Vec<DowntimeRow> {
        self.aggregator
            .rows(&self.dataset.downtime_events, selection.shift_id())
    }

    /// 类别停机汇总 (按时长降序)
    pub fn downtime_by_category(&self, selection: &ShiftSelection) -> Vec<CategoryDowntime> {
        self.aggregator
            .group_by_category(&self.dataset.downtime_events, selection.shift_id())
    }

    // ==========================================
    // 趋势与环比接口
    // ==========================================

    /// OEE 趋势序列
    ///
    /// All → 每班一个点; Shift → 仅该班一个点
    /// 标签取班次名称首个空白分隔段
    pub fn trend_points(&self, selection: &ShiftSelection) -> ApiResult<Vec<TrendPoint>> {
        let shifts: Vec<&Shift> = match selection {
            ShiftSelection::All => self.dataset.shifts.iter().collect(),
            ShiftSelection::Shift(id) => vec![self.find_shift(id)?],
        };

        Ok(shifts
            .into_iter()
            .map(|s| {
                let metrics = self.engine.calculate_shift(
                    s,
                    &self.dataset.production_line,
                    &self.dataset.downtime_events,
                );
                TrendPoint {
                    label: Self::shift_label(&s.name),
                    value: metrics.oee,
                }
            })
            .collect())
    }

    /// 上期三因子与综合值 (环比对照)
    pub fn previous_components(&self) -> OeeComponents {
        self.dataset.previous_period.components()
    }

    /// 本期相对上期的环比差值
    pub fn deltas(&self, selection: &ShiftSelection) -> ApiResult<OeeDelta> {
        let current = self.metrics(selection)?;
        Ok(component_deltas(&current, &self.previous_components()))
    }

    // ==========================================
    // 导出快照接口
    // ==========================================

    /// 组装报表导出快照
    ///
    /// # 返回
    /// 快照含: 选择标签 / 产线 / 本期与上期指标 / 停机Top3 / 类别汇总
    /// 序列化与落盘由调用方完成
    pub fn report_snapshot(&self, selection: &ShiftSelection) -> ApiResult<ReportSnapshot> {
        let metrics = self.metrics(selection)?;
        let rows = self.downtime_rows(selection);
        let downtime_top3 = rows.into_iter().take(3).collect();

        Ok(ReportSnapshot {
            selection: selection.label(),
            production_line: self.dataset.production_line.clone(),
            metrics,
            previous: self.previous_components(),
            downtime_top3,
            downtime_by_category: self.downtime_by_category(selection),
        })
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 解析班次对象;悬空ID快速失败
    fn find_shift(&self, shift_id: &str) -> ApiResult<&Shift> {
        if shift_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("班次ID不能为空".to_string()));
        }

        self.dataset
            .shifts
            .iter()
            .find(|s| s.id == shift_id)
            .ok_or_else(|| ApiError::ShiftNotFound(shift_id.to_string()))
    }

    /// 班次短标签: 名称首个空白分隔段
    fn shift_label(name: &str) -> String {
        name.split_whitespace()
            .next()
            .unwrap_or(name)
            .to_string()
    }
}
