// ==========================================
// OEE 计算引擎集成测试
// ==========================================
// 测试目标: 验证停机汇总与单班/汇总 OEE 口径
// 覆盖范围: 班次过滤 / 类别分组 / 零分母口径 / 加权汇总
// ==========================================

use chrono::{DateTime, TimeZone, Utc};
use line_oee_analytics::domain::types::DowntimeType;
use line_oee_analytics::domain::{DowntimeEvent, ProductionLine, Shift};
use line_oee_analytics::engine::{status_band, DowntimeAggregator, OeeEngine};
use line_oee_analytics::OeeBand;

// ==========================================
// 测试辅助函数
// ==========================================

fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 27, hour, min, 0).unwrap()
}

/// 创建测试用的产线 (目标节拍 45 秒/件)
fn create_test_line() -> ProductionLine {
    ProductionLine {
        id: "LINE_1".to_string(),
        name: "Test Line".to_string(),
        target_cycle_time_s: 45.0,
        description: None,
    }
}

/// 创建测试用的班次
fn create_test_shift(
    id: &str,
    name: &str,
    planned_min: f64,
    actual_quantity: u32,
    good_quantity: u32,
) -> Shift {
    Shift {
        id: id.to_string(),
        name: name.to_string(),
        start_time: ts(6, 0),
        end_time: ts(14, 0),
        planned_production_time_min: planned_min,
        target_quantity: 640,
        actual_quantity,
        good_quantity,
        defect_quantity: actual_quantity - good_quantity,
    }
}

/// 创建测试用的停机事件
fn create_test_event(
    id: &str,
    shift_id: &str,
    category: &str,
    reason: &str,
    duration_minutes: f64,
    downtime_type: DowntimeType,
) -> DowntimeEvent {
    DowntimeEvent {
        id: id.to_string(),
        shift_id: shift_id.to_string(),
        category: category.to_string(),
        reason: reason.to_string(),
        start_time: ts(8, 15),
        end_time: ts(9, 45),
        duration_minutes,
        downtime_type,
    }
}

/// 基准停机场景: 早班 90+30 分钟非计划 + 30 分钟计划保养
fn base_events() -> Vec<DowntimeEvent> {
    vec![
        create_test_event(
            "DT_001",
            "SHIFT_1",
            "Machine Failure",
            "Hydraulic pump failure",
            90.0,
            DowntimeType::Unplanned,
        ),
        create_test_event(
            "DT_002",
            "SHIFT_1",
            "Material Shortage",
            "Delayed parts delivery",
            30.0,
            DowntimeType::Unplanned,
        ),
        create_test_event(
            "DT_003",
            "SHIFT_1",
            "Planned Maintenance",
            "Routine maintenance",
            30.0,
            DowntimeType::Planned,
        ),
    ]
}

// ==========================================
// 停机汇总引擎测试
// ==========================================

#[test]
fn test_unplanned_minutes_all_shifts() {
    let aggregator = DowntimeAggregator::new();
    let total = aggregator.unplanned_minutes(&base_events(), None);

    // 计划保养 30 分钟不计入
    assert!((total - 120.0).abs() < 1e-9, "非计划停机应为 120 分钟");
}

#[test]
fn test_unplanned_minutes_filters_by_shift() {
    let mut events = base_events();
    events.push(create_test_event(
        "DT_004",
        "SHIFT_2",
        "Machine Failure",
        "Other failure",
        30.0,
        DowntimeType::Unplanned,
    ));

    let aggregator = DowntimeAggregator::new();
    assert!((aggregator.unplanned_minutes(&events, Some("SHIFT_1")) - 120.0).abs() < 1e-9);
    assert!((aggregator.unplanned_minutes(&events, Some("SHIFT_2")) - 30.0).abs() < 1e-9);
    assert!((aggregator.unplanned_minutes(&events, None) - 150.0).abs() < 1e-9);
}

#[test]
fn test_unknown_shift_filter_yields_empty_results() {
    let events = base_events();
    let aggregator = DowntimeAggregator::new();

    // 过滤无命中不是错误,返回零值/空集
    assert_eq!(aggregator.unplanned_minutes(&events, Some("SHIFT_99")), 0.0);
    assert!(aggregator.group_by_category(&events, Some("SHIFT_99")).is_empty());
    assert!(aggregator.rows(&events, Some("SHIFT_99")).is_empty());
}

#[test]
fn test_unplanned_minutes_empty_input() {
    let aggregator = DowntimeAggregator::new();
    assert_eq!(aggregator.unplanned_minutes(&[], None), 0.0);
}

#[test]
fn test_group_by_category_basic() {
    let aggregator = DowntimeAggregator::new();
    let groups = aggregator.group_by_category(&base_events(), None);

    assert_eq!(groups.len(), 3, "类别数应等于出现过的不同类别数");
    assert_eq!(groups[0].category, "Machine Failure");
    assert!((groups[0].total_minutes - 90.0).abs() < 1e-9);

    // 计划停机也参与分组
    let maintenance = groups
        .iter()
        .find(|g| g.category == "Planned Maintenance")
        .expect("计划保养类别应出现在分组中");
    assert_eq!(maintenance.downtime_type, DowntimeType::Planned);
}

#[test]
fn test_group_by_category_merges_same_category() {
    let mut events = base_events();
    events.push(create_test_event(
        "DT_005",
        "SHIFT_1",
        "Machine Failure",
        "Another failure",
        15.0,
        DowntimeType::Unplanned,
    ));

    let aggregator = DowntimeAggregator::new();
    let groups = aggregator.group_by_category(&events, None);
    let machine_failure = groups
        .iter()
        .find(|g| g.category == "Machine Failure")
        .expect("应存在 Machine Failure 类别");

    assert!((machine_failure.total_minutes - 105.0).abs() < 1e-9);
}

#[test]
fn test_group_by_category_keeps_first_seen_type() {
    // 同一类别混合计划/非计划时,类型取首次遇到的事件
    let events = vec![
        create_test_event(
            "DT_010",
            "SHIFT_1",
            "Changeover",
            "Scheduled changeover",
            10.0,
            DowntimeType::Planned,
        ),
        create_test_event(
            "DT_011",
            "SHIFT_1",
            "Changeover",
            "Changeover overrun",
            20.0,
            DowntimeType::Unplanned,
        ),
    ];

    let aggregator = DowntimeAggregator::new();
    let groups = aggregator.group_by_category(&events, None);

    assert_eq!(groups.len(), 1);
    assert!((groups[0].total_minutes - 30.0).abs() < 1e-9);
    assert_eq!(groups[0].downtime_type, DowntimeType::Planned);
}

#[test]
fn test_group_totals_cover_planned_and_unplanned() {
    let events = base_events();
    let aggregator = DowntimeAggregator::new();

    let grouped_total: f64 = aggregator
        .group_by_category(&events, None)
        .iter()
        .map(|g| g.total_minutes)
        .sum();
    let unplanned = aggregator.unplanned_minutes(&events, None);

    // 分组合计 = 非计划合计 + 计划合计
    assert!((grouped_total - (unplanned + 30.0)).abs() < 1e-9);
}

#[test]
fn test_groups_and_rows_sorted_descending() {
    let mut events = base_events();
    events.push(create_test_event(
        "DT_006",
        "SHIFT_1",
        "Quality Stop",
        "Inline inspection hold",
        45.0,
        DowntimeType::Unplanned,
    ));

    let aggregator = DowntimeAggregator::new();

    let groups = aggregator.group_by_category(&events, None);
    for pair in groups.windows(2) {
        assert!(pair[0].total_minutes >= pair[1].total_minutes, "分组应按时长降序");
    }

    let rows = aggregator.rows(&events, None);
    for pair in rows.windows(2) {
        assert!(pair[0].total_minutes >= pair[1].total_minutes, "明细应按时长降序");
    }
}

#[test]
fn test_rows_one_per_event() {
    let aggregator = DowntimeAggregator::new();
    let rows = aggregator.rows(&base_events(), None);

    assert_eq!(rows.len(), 3, "不分组,一条事件一行");
    assert_eq!(rows[0].reason, "Hydraulic pump failure");
    assert_eq!(rows[0].category, "Machine Failure");
    assert!((rows[0].total_minutes - 90.0).abs() < 1e-9);
}

// ==========================================
// 单班 OEE 测试
// ==========================================

#[test]
fn test_shift_oee_reference_values() {
    line_oee_analytics::logging::init_test();

    // 基准场景: 计划 480 分钟,非计划停机 120 分钟,产量 582/合格 571
    let engine = OeeEngine::new();
    let shift = create_test_shift("SHIFT_1", "Early Shift", 480.0, 582, 571);
    let result = engine.calculate_shift(&shift, &create_test_line(), &base_events());

    assert!((result.unplanned_downtime_min - 120.0).abs() < 1e-9);
    assert!((result.operating_time_min - 360.0).abs() < 1e-9);
    assert!((result.availability - 0.75).abs() < 1e-9, "时间开动率应为 0.75");
    assert!(
        (result.performance - 1.2125).abs() < 1e-9,
        "性能开动率应为 (45×582)/(360×60)"
    );
    assert!((result.quality - 571.0 / 582.0).abs() < 1e-9);

    // 综合效率恒等于三因子乘积
    let product = result.availability * result.performance * result.quality;
    assert!((result.oee - product).abs() < 1e-12);
    assert_eq!(status_band(result.oee), OeeBand::WorldClass);
}

#[test]
fn test_performance_not_clamped_above_one() {
    let engine = OeeEngine::new();
    let shift = create_test_shift("SHIFT_1", "Early Shift", 480.0, 582, 571);
    let result = engine.calculate_shift(&shift, &create_test_line(), &base_events());

    // 实际节拍快于目标节拍,性能开动率合法地超过 1
    assert!(result.performance > 1.0);
}

#[test]
fn test_shift_oee_zero_planned_time() {
    let engine = OeeEngine::new();
    let shift = create_test_shift("SHIFT_1", "Early Shift", 0.0, 100, 95);
    let result = engine.calculate_shift(&shift, &create_test_line(), &[]);

    // 零计划时间按零值口径,不报错
    assert_eq!(result.availability, 0.0);
    assert_eq!(result.performance, 0.0);
    assert!((result.quality - 0.95).abs() < 1e-9);
    assert_eq!(result.oee, 0.0);
}

#[test]
fn test_shift_oee_downtime_exceeds_planned_window() {
    let engine = OeeEngine::new();
    let shift = create_test_shift("SHIFT_1", "Early Shift", 100.0, 50, 50);
    let events = vec![create_test_event(
        "DT_007",
        "SHIFT_1",
        "Machine Failure",
        "Extended breakdown",
        120.0,
        DowntimeType::Unplanned,
    )];
    let result = engine.calculate_shift(&shift, &create_test_line(), &events);

    // 停机超出计划窗口,开动时间钳位到 0
    assert_eq!(result.operating_time_min, 0.0);
    assert_eq!(result.availability, 0.0);
    assert_eq!(result.performance, 0.0);
    assert_eq!(result.oee, 0.0);
    assert!((result.unplanned_downtime_min - 120.0).abs() < 1e-9);
}

#[test]
fn test_shift_oee_zero_output() {
    let engine = OeeEngine::new();
    let shift = create_test_shift("SHIFT_1", "Early Shift", 480.0, 0, 0);
    let result = engine.calculate_shift(&shift, &create_test_line(), &[]);

    assert_eq!(result.quality, 0.0);
    assert_eq!(result.performance, 0.0, "零产量时理想生产时间为 0");
    assert_eq!(result.oee, 0.0);
}

// ==========================================
// 产线级汇总测试
// ==========================================

#[test]
fn test_aggregate_single_shift_matches_shift_result() {
    let engine = OeeEngine::new();
    let line = create_test_line();
    let events = base_events();
    let shift = create_test_shift("SHIFT_1", "Early Shift", 480.0, 582, 571);

    let single = engine.calculate_shift(&shift, &line, &events);
    let aggregate = engine.calculate_aggregate(std::slice::from_ref(&shift), &line, &events);

    assert!((aggregate.availability - single.availability).abs() < 1e-12);
    assert!((aggregate.performance - single.performance).abs() < 1e-12);
    assert!((aggregate.quality - single.quality).abs() < 1e-12);
    assert!((aggregate.oee - single.oee).abs() < 1e-12);
    assert!((aggregate.total_operating_time_min - single.operating_time_min).abs() < 1e-12);
}

#[test]
fn test_aggregate_two_shifts_weighted_by_denominators() {
    let engine = OeeEngine::new();
    let line = create_test_line();
    let events = base_events(); // 全部停机都在 SHIFT_1
    let shifts = vec![
        create_test_shift("SHIFT_1", "Early Shift", 480.0, 582, 571),
        create_test_shift("SHIFT_2", "Late Shift", 480.0, 600, 588),
    ];

    let aggregate = engine.calculate_aggregate(&shifts, &line, &events);

    assert!((aggregate.total_planned_production_time_min - 960.0).abs() < 1e-9);
    // SHIFT_1 开动 360, SHIFT_2 无停机开动 480
    assert!((aggregate.total_operating_time_min - 840.0).abs() < 1e-9);
    assert!((aggregate.total_unplanned_downtime_min - 120.0).abs() < 1e-9);
    assert_eq!(aggregate.total_output, 1182);
    assert_eq!(aggregate.total_good_output, 1159);

    // 三因子按汇总分母加权
    assert!((aggregate.availability - 840.0 / 960.0).abs() < 1e-12);
    let expected_performance = (45.0 * 1182.0) / (840.0 * 60.0);
    assert!((aggregate.performance - expected_performance).abs() < 1e-12);
    assert!((aggregate.quality - 1159.0 / 1182.0).abs() < 1e-12);
    let product = aggregate.availability * aggregate.performance * aggregate.quality;
    assert!((aggregate.oee - product).abs() < 1e-12);
}

#[test]
fn test_aggregate_sums_clamped_per_shift_values() {
    let engine = OeeEngine::new();
    let line = create_test_line();
    // SHIFT_1 停机 600 分钟超出计划窗口
    let events = vec![create_test_event(
        "DT_008",
        "SHIFT_1",
        "Machine Failure",
        "Major breakdown",
        600.0,
        DowntimeType::Unplanned,
    )];
    let shifts = vec![
        create_test_shift("SHIFT_1", "Early Shift", 480.0, 100, 90),
        create_test_shift("SHIFT_2", "Late Shift", 480.0, 600, 588),
    ];

    let aggregate = engine.calculate_aggregate(&shifts, &line, &events);

    // 先按班钳位再求和: 0 + 480,而不是 960 - 600 = 360
    assert!((aggregate.total_operating_time_min - 480.0).abs() < 1e-9);
    assert!((aggregate.total_unplanned_downtime_min - 600.0).abs() < 1e-9);
    assert!((aggregate.availability - 480.0 / 960.0).abs() < 1e-12);
}

#[test]
fn test_aggregate_empty_shift_list() {
    let engine = OeeEngine::new();
    let aggregate = engine.calculate_aggregate(&[], &create_test_line(), &base_events());

    assert_eq!(aggregate.total_planned_production_time_min, 0.0);
    assert_eq!(aggregate.total_operating_time_min, 0.0);
    assert_eq!(aggregate.total_unplanned_downtime_min, 0.0);
    assert_eq!(aggregate.total_output, 0);
    assert_eq!(aggregate.total_good_output, 0);
    assert_eq!(aggregate.availability, 0.0);
    assert_eq!(aggregate.performance, 0.0);
    assert_eq!(aggregate.quality, 0.0);
    assert_eq!(aggregate.oee, 0.0);
}
