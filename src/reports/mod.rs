//! Report assembly
//!
//! Packages calculator results together with the assumptions that produced
//! them, so formatters can render a complete breakdown without re-deriving
//! anything.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculator::{
    calculate_normalized, compare_presets, normalize, NormalizedInputs, ReductionPreset, RoiInputs,
    RoiOutputs,
};

/// Caveat attached to every estimate
pub const DISCLAIMER: &str = "Illustrative only. Results vary by organization.";

/// Footnotes for the starred breakdown rows
pub const FOOTNOTES: [&str; 2] = [
    "Cost per replacement shown as a conservative estimate.",
    "Reduction in turnover depends on manager consistency and program adoption.",
];

/// Full breakdown of one ROI estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub employee_count: u64,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub avg_salary: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub turnover_rate_pct: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub reduction_pct: Decimal,
    #[serde(flatten)]
    pub outputs: RoiOutputs,
}

impl Breakdown {
    /// Calculate and record the normalized assumptions alongside the result
    pub fn new(inputs: &RoiInputs) -> Self {
        Self::from_normalized(&normalize(inputs))
    }

    pub fn from_normalized(normalized: &NormalizedInputs) -> Self {
        Self {
            employee_count: normalized.employee_count,
            avg_salary: normalized.avg_salary,
            turnover_rate_pct: normalized.turnover_rate_pct(),
            reduction_pct: normalized.reduction_pct(),
            outputs: calculate_normalized(normalized),
        }
    }
}

/// One row of a preset comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetRow {
    pub preset: ReductionPreset,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub reduction_pct: Decimal,
    #[serde(flatten)]
    pub outputs: RoiOutputs,
}

/// The same workforce evaluated under each reduction preset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetComparison {
    pub employee_count: u64,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub avg_salary: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub turnover_rate_pct: Decimal,
    pub rows: Vec<PresetRow>,
}

impl PresetComparison {
    pub fn new(inputs: &RoiInputs) -> Self {
        let normalized = normalize(inputs);
        let rows = compare_presets(inputs)
            .into_iter()
            .map(|(preset, outputs)| PresetRow {
                preset,
                reduction_pct: preset.pct_decimal(),
                outputs,
            })
            .collect();

        Self {
            employee_count: normalized.employee_count,
            avg_salary: normalized.avg_salary,
            turnover_rate_pct: normalized.turnover_rate_pct(),
            rows,
        }
    }

    /// Row with the highest savings (ties keep the most conservative preset)
    pub fn best(&self) -> Option<&PresetRow> {
        self.rows.iter().fold(None, |best: Option<&PresetRow>, row| match best {
            Some(b) if b.outputs.total_annual_savings >= row.outputs.total_annual_savings => {
                Some(b)
            }
            _ => Some(row),
        })
    }
}
