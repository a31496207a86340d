// ==========================================
// 产线OEE效能分析系统 - OEE 计算引擎
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 2. 派生指标
// ==========================================
// 职责: 单班三因子计算 + 产线级加权汇总
// 输入: 班次记录 + 产线主数据 + 停机事件全集
// 输出: ShiftOee / AggregateOee
// 红线: 全程 f64,展示前不舍入;分母为零按零值口径,不报错
// ==========================================

use crate::domain::downtime::DowntimeEvent;
use crate::domain::line::ProductionLine;
use crate::domain::oee::{AggregateOee, ShiftOee};
use crate::domain::shift::Shift;
use crate::engine::downtime::DowntimeAggregator;
use tracing::instrument;

// ==========================================
// OeeEngine - OEE 计算引擎
// ==========================================
pub struct OeeEngine {
    aggregator: DowntimeAggregator,
}

impl OeeEngine {
    /// 创建新的 OEE 计算引擎
    pub fn new() -> Self {
        Self {
            aggregator: DowntimeAggregator::new(),
        }
    }

    // ==========================================
    // 单班计算
    // ==========================================

    /// 计算单班 OEE
    ///
    /// # 口径 (固定顺序)
    /// 1. 非计划停机 = 停机汇总引擎按本班过滤求和
    /// 2. 实际开动时间 = max(计划生产时间 - 非计划停机, 0)
    /// 3. 时间开动率 = 开动 / 计划 (计划为 0 时取 0)
    /// 4. 性能开动率 = (目标节拍秒 × 实际产量) / (开动分钟 × 60)
    ///    (开动为 0 时取 0;实际节拍快于目标时可 >1,不截断)
    /// 5. 合格品率 = 合格品 / 实际产量 (产量为 0 时取 0)
    /// 6. 综合效率 = 三因子乘积
    #[instrument(skip(self, shift, line, events), fields(shift_id = %shift.id))]
    pub fn calculate_shift(
        &self,
        shift: &Shift,
        line: &ProductionLine,
        events: &[DowntimeEvent],
    ) -> ShiftOee {
        let unplanned_downtime_min = self.aggregator.unplanned_minutes(events, Some(&shift.id));

        let planned_min = shift.planned_production_time_min;
        let operating_min = (planned_min - unplanned_downtime_min).max(0.0);

        let total_output = shift.actual_quantity;
        let good_output = shift.good_quantity;

        // 时间开动率: 开动时间 / 计划生产时间
        let availability = if planned_min > 0.0 {
            operating_min / planned_min
        } else {
            0.0
        };

        // 性能开动率: 理想生产时间 / 实际开动时间
        let operating_s = operating_min * 60.0;
        let ideal_s = line.target_cycle_time_s * f64::from(total_output);
        let performance = if operating_s > 0.0 {
            ideal_s / operating_s
        } else {
            0.0
        };

        // 合格品率: 合格品 / 实际产量
        let quality = if total_output > 0 {
            f64::from(good_output) / f64::from(total_output)
        } else {
            0.0
        };

        let oee = availability * performance * quality;

        ShiftOee {
            shift_id: shift.id.clone(),
            shift_name: shift.name.clone(),
            planned_production_time_min: planned_min,
            operating_time_min: operating_min,
            unplanned_downtime_min,
            total_output,
            good_output,
            availability,
            performance,
            quality,
            oee,
        }
    }

    // ==========================================
    // 产线级汇总
    // ==========================================

    /// 计算产线级汇总 OEE
    ///
    /// # 口径
    /// - 逐班调用单班计算,累加各班"已派生"的开动时间/停机时长
    ///   (先按班钳位再求和,不从原始合计重新推导)
    /// - 三因子用汇总分母加权,不做班次比率的简单平均:
    ///   时间开动率 = 开动合计 / 计划合计
    ///   性能开动率 = (目标节拍秒 × 产量合计) / (开动合计分钟 × 60)
    ///   合格品率   = 合格品合计 / 产量合计
    /// - 空班次列表 → 全部账目与比率为 0
    #[instrument(skip(self, shifts, line, events), fields(count = shifts.len()))]
    pub fn calculate_aggregate(
        &self,
        shifts: &[Shift],
        line: &ProductionLine,
        events: &[DowntimeEvent],
    ) -> AggregateOee {
        let mut total_planned_min = 0.0;
        let mut total_operating_min = 0.0;
        let mut total_unplanned_min = 0.0;
        let mut total_output: u32 = 0;
        let mut total_good_output: u32 = 0;

        for shift in shifts {
            let shift_oee = self.calculate_shift(shift, line, events);
            total_planned_min += shift.planned_production_time_min;
            total_operating_min += shift_oee.operating_time_min;
            total_unplanned_min += shift_oee.unplanned_downtime_min;
            total_output += shift_oee.total_output;
            total_good_output += shift_oee.good_output;
        }

        let availability = if total_planned_min > 0.0 {
            total_operating_min / total_planned_min
        } else {
            0.0
        };

        let performance = if total_operating_min > 0.0 {
            (line.target_cycle_time_s * f64::from(total_output)) / (total_operating_min * 60.0)
        } else {
            0.0
        };

        let quality = if total_output > 0 {
            f64::from(total_good_output) / f64::from(total_output)
        } else {
            0.0
        };

        let oee = availability * performance * quality;

        AggregateOee {
            total_planned_production_time_min: total_planned_min,
            total_operating_time_min: total_operating_min,
            total_unplanned_downtime_min: total_unplanned_min,
            total_output,
            total_good_output,
            availability,
            performance,
            quality,
            oee,
        }
    }
}

impl Default for OeeEngine {
    fn default() -> Self {
        Self::new()
    }
}
