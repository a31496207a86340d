// ==========================================
// 产线OEE效能分析系统 - OEE 指标值对象
// ==========================================
// 依据: OEE_Metrics_Spec_v1.0.md - 2. 派生指标
// ==========================================
// 红线: 指标每次调用重新计算,不缓存不原地修改
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// OeeComponents - OEE 三因子与综合值
// ==========================================
// 口径: 比率取值 [0,1]; 性能开动率在实际节拍快于目标节拍时可 >1,不截断
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeComponents {
    pub availability: f64, // 时间开动率
    pub performance: f64,  // 性能开动率
    pub quality: f64,      // 合格品率
    pub oee: f64,          // 综合效率 = 三因子乘积
}

// ==========================================
// ShiftOee - 单班 OEE 结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftOee {
    pub shift_id: String,   // 班次ID
    pub shift_name: String, // 班次名称

    // ===== 时间账目 (分钟) =====
    pub planned_production_time_min: f64, // 计划生产时间
    pub operating_time_min: f64,          // 实际开动时间 (计划 - 非计划停机, 下限 0)
    pub unplanned_downtime_min: f64,      // 非计划停机时长

    // ===== 产量账目 (件) =====
    pub total_output: u32, // 实际产量
    pub good_output: u32,  // 合格品产量

    // ===== 三因子与综合值 =====
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
}

impl ShiftOee {
    /// 取出三因子与综合值
    pub fn components(&self) -> OeeComponents {
        OeeComponents {
            availability: self.availability,
            performance: self.performance,
            quality: self.quality,
            oee: self.oee,
        }
    }
}

// ==========================================
// AggregateOee - 产线级汇总 OEE
// ==========================================
// 红线: 按时间/产量加权,不做班次比率的简单平均
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateOee {
    // ===== 汇总账目 =====
    pub total_planned_production_time_min: f64, // 计划生产时间合计
    pub total_operating_time_min: f64,          // 实际开动时间合计 (各班先钳位再求和)
    pub total_unplanned_downtime_min: f64,      // 非计划停机合计
    pub total_output: u32,                      // 实际产量合计
    pub total_good_output: u32,                 // 合格品合计

    // ===== 三因子与综合值 =====
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
}

impl AggregateOee {
    /// 取出三因子与综合值
    pub fn components(&self) -> OeeComponents {
        OeeComponents {
            availability: self.availability,
            performance: self.performance,
            quality: self.quality,
            oee: self.oee,
        }
    }
}

// ==========================================
// PreviousPeriod - 上期指标快照
// ==========================================
// 用途: 环比对照,由调用方提供,核心不负责其来源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviousPeriod {
    pub description: String, // 上期描述 (如 "上周均值")
    pub total_oee: f64,      // 上期综合效率
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}

impl PreviousPeriod {
    /// 转为三因子结构,供环比差值计算
    pub fn components(&self) -> OeeComponents {
        OeeComponents {
            availability: self.availability,
            performance: self.performance,
            quality: self.quality,
            oee: self.total_oee,
        }
    }
}

// ==========================================
// OeeDelta - 环比差值
// ==========================================
// 口径: 本期 - 上期,带符号,正值为改善;不归一不截断
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeDelta {
    pub oee: f64,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}
