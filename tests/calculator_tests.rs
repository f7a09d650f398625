use retention_roi::calculator::{calculate, compare_presets, ReductionPreset, RoiInputs};
use retention_roi::reports::Breakdown;
use rust_decimal_macros::dec;

fn inputs(employees: f64, salary: f64, turnover: f64, reduction: f64) -> RoiInputs {
    RoiInputs::new(employees, salary, turnover, reduction)
}

#[test]
fn base_case_300_employees_50k_16pct_5pct() {
    let result = calculate(&inputs(300.0, 50000.0, 16.0, 5.0));
    assert_eq!(result.expected_turnover, 48);
    assert_eq!(result.employees_retained, 2);
    assert_eq!(result.replacement_cost, dec!(15000));
    assert_eq!(result.total_annual_savings, dec!(30000));
}

#[test]
fn higher_salary_80k() {
    let result = calculate(&inputs(300.0, 80000.0, 16.0, 5.0));
    assert_eq!(result.expected_turnover, 48);
    assert_eq!(result.employees_retained, 2);
    assert_eq!(result.replacement_cost, dec!(24000));
    assert_eq!(result.total_annual_savings, dec!(48000));
}

#[test]
fn replacement_cost_clamps_to_minimum() {
    let result = calculate(&inputs(300.0, 20000.0, 16.0, 5.0));
    assert_eq!(result.expected_turnover, 48);
    assert_eq!(result.employees_retained, 2);
    assert_eq!(result.replacement_cost, dec!(8000));
    assert_eq!(result.total_annual_savings, dec!(16000));
}

#[test]
fn replacement_cost_clamps_to_maximum() {
    let result = calculate(&inputs(300.0, 200000.0, 16.0, 5.0));
    assert_eq!(result.expected_turnover, 48);
    assert_eq!(result.employees_retained, 2);
    assert_eq!(result.replacement_cost, dec!(35000));
    assert_eq!(result.total_annual_savings, dec!(70000));
}

#[test]
fn default_salary_when_null_or_zero() {
    let without_salary = RoiInputs {
        avg_salary: None,
        ..inputs(300.0, 0.0, 16.0, 5.0)
    };
    for case in [without_salary, inputs(300.0, 0.0, 16.0, 5.0)] {
        let result = calculate(&case);
        assert_eq!(result.replacement_cost, dec!(15000));
        assert_eq!(result.total_annual_savings, dec!(30000));
    }
}

#[test]
fn default_salary_when_missing_from_json() {
    let parsed: RoiInputs =
        serde_json::from_str(r#"{"employeeCount": 300, "turnoverRatePct": 16, "reductionPct": 5}"#)
            .unwrap();
    let result = calculate(&parsed);
    assert_eq!(result.replacement_cost, dec!(15000));
    assert_eq!(result.total_annual_savings, dec!(30000));
}

#[test]
fn expected_turnover_rounds_to_nearest() {
    let result = calculate(&inputs(100.0, 50000.0, 12.7, 5.0));
    assert_eq!(result.expected_turnover, 13);
}

#[test]
fn employees_retained_is_floored() {
    let result = calculate(&inputs(100.0, 50000.0, 16.0, 7.5));
    assert_eq!(result.expected_turnover, 16);
    assert_eq!(result.employees_retained, 1);
}

#[test]
fn reduction_presets_on_300_employees() {
    let seven_and_half = calculate(&inputs(300.0, 50000.0, 16.0, 7.5));
    assert_eq!(seven_and_half.expected_turnover, 48);
    assert_eq!(seven_and_half.employees_retained, 3);
    assert_eq!(seven_and_half.total_annual_savings, dec!(45000));

    let ten = calculate(&inputs(300.0, 50000.0, 16.0, 10.0));
    assert_eq!(ten.expected_turnover, 48);
    assert_eq!(ten.employees_retained, 4);
    assert_eq!(ten.total_annual_savings, dec!(60000));
}

#[test]
fn zero_employee_count() {
    for salary in [0.0, 20000.0, 50000.0, 500000.0] {
        let result = calculate(&inputs(0.0, salary, 16.0, 5.0));
        assert_eq!(result.expected_turnover, 0);
        assert_eq!(result.employees_retained, 0);
        assert_eq!(result.total_annual_savings, dec!(0));
    }
}

#[test]
fn exact_clamp_boundaries() {
    assert_eq!(calculate(&inputs(300.0, 26667.0, 16.0, 5.0)).replacement_cost, dec!(8000));
    assert_eq!(calculate(&inputs(300.0, 116667.0, 16.0, 5.0)).replacement_cost, dec!(35000));
}

#[test]
fn garbage_inputs_degrade_to_defaults() {
    let parsed: RoiInputs = serde_json::from_str(
        r#"{"employeeCount": "lots", "avgSalary": [], "turnoverRatePct": {}, "reductionPct": null}"#,
    )
    .unwrap();
    let result = calculate(&parsed);
    assert_eq!(result.expected_turnover, 0);
    assert_eq!(result.employees_retained, 0);
    assert_eq!(result.replacement_cost, dec!(15000));
    assert_eq!(result.total_annual_savings, dec!(0));
}

#[test]
fn compare_presets_agrees_with_breakdowns() {
    let base = inputs(300.0, 50000.0, 16.0, 5.0);
    for (preset, outputs) in compare_presets(&base) {
        let breakdown = Breakdown::new(&base.with_reduction_pct(preset.pct()));
        assert_eq!(breakdown.outputs, outputs);
        assert_eq!(breakdown.reduction_pct, preset.pct_decimal());
    }
    assert_eq!(ReductionPreset::ALL.len(), 3);
}
