//! Turnover-reduction ROI calculation
//!
//! [`calculate`] is a pure, total function: every input record, however
//! malformed, produces a well-formed [`RoiOutputs`]. Inputs are normalized
//! first (see [`normalize`]), then derived in a fixed order because the
//! rounding of each step feeds the next.

pub mod normalize;
pub mod presets;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub use normalize::{normalize, NormalizedInputs, DEFAULT_AVG_SALARY};
pub use presets::{compare_presets, ReductionPreset};

/// Share of annual salary it costs to replace one departing employee
pub const REPLACEMENT_COST_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
/// Lower bound of the per-employee replacement cost
pub const MIN_REPLACEMENT_COST: Decimal = Decimal::from_parts(8_000, 0, 0, false, 0);
/// Upper bound of the per-employee replacement cost
pub const MAX_REPLACEMENT_COST: Decimal = Decimal::from_parts(35_000, 0, 0, false, 0);

/// Raw calculator inputs.
///
/// Every field is optional and deserializes leniently from JSON (numeric
/// strings, booleans, null and garbage are all accepted), so a form or
/// file can be handed over without pre-validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    #[serde(default, alias = "employee_count", deserialize_with = "normalize::lenient_number")]
    pub employee_count: Option<f64>,
    #[serde(default, alias = "avg_salary", deserialize_with = "normalize::lenient_number")]
    pub avg_salary: Option<f64>,
    #[serde(default, alias = "turnover_rate_pct", deserialize_with = "normalize::lenient_number")]
    pub turnover_rate_pct: Option<f64>,
    #[serde(default, alias = "reduction_pct", deserialize_with = "normalize::lenient_number")]
    pub reduction_pct: Option<f64>,
}

impl RoiInputs {
    pub fn new(
        employee_count: f64,
        avg_salary: f64,
        turnover_rate_pct: f64,
        reduction_pct: f64,
    ) -> Self {
        Self {
            employee_count: Some(employee_count),
            avg_salary: Some(avg_salary),
            turnover_rate_pct: Some(turnover_rate_pct),
            reduction_pct: Some(reduction_pct),
        }
    }

    /// Same inputs with a different turnover reduction
    pub fn with_reduction_pct(self, reduction_pct: f64) -> Self {
        Self {
            reduction_pct: Some(reduction_pct),
            ..self
        }
    }
}

/// Derived figures for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiOutputs {
    pub expected_turnover: u64,
    pub employees_retained: u64,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub replacement_cost: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_annual_savings: Decimal,
}

/// Estimate annual savings from reduced turnover
pub fn calculate(inputs: &RoiInputs) -> RoiOutputs {
    calculate_normalized(&normalize(inputs))
}

/// Derivation over already-normalized inputs
pub fn calculate_normalized(inputs: &NormalizedInputs) -> RoiOutputs {
    let headcount = Decimal::from(inputs.employee_count);

    let expected_turnover = round_whole(headcount * inputs.turnover_fraction)
        .to_u64()
        .unwrap_or(inputs.employee_count);

    // Floored, not rounded: 0.975 retained employees is 0
    let employees_retained = (Decimal::from(expected_turnover) * inputs.reduction_fraction)
        .floor()
        .to_u64()
        .unwrap_or(0);

    let replacement_cost_raw = inputs.avg_salary.saturating_mul(REPLACEMENT_COST_RATE);
    let replacement_cost =
        round_whole(replacement_cost_raw.clamp(MIN_REPLACEMENT_COST, MAX_REPLACEMENT_COST));

    let total_annual_savings = round_whole(Decimal::from(employees_retained) * replacement_cost);

    RoiOutputs {
        expected_turnover,
        employees_retained,
        replacement_cost,
        total_annual_savings,
    }
}

fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
