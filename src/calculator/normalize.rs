//! Input normalization
//!
//! Turns loosely-typed [`RoiInputs`] into [`NormalizedInputs`] with every
//! field guaranteed usable by the derivation. Nothing here can fail: invalid
//! values are replaced with 0 (or the default salary) and logged at debug.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use super::RoiInputs;

/// Annual salary assumed when none (or an unusable one) is supplied
pub const DEFAULT_AVG_SALARY: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Inputs after coercion, clamping and defaulting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInputs {
    pub employee_count: u64,
    pub avg_salary: Decimal,
    /// Turnover rate as a fraction in [0, 1]
    pub turnover_fraction: Decimal,
    /// Turnover reduction as a fraction in [0, 1]
    pub reduction_fraction: Decimal,
}

impl NormalizedInputs {
    pub fn turnover_rate_pct(&self) -> Decimal {
        (self.turnover_fraction * HUNDRED).normalize()
    }

    pub fn reduction_pct(&self) -> Decimal {
        (self.reduction_fraction * HUNDRED).normalize()
    }
}

/// Apply the normalization rules to every input field
pub fn normalize(inputs: &RoiInputs) -> NormalizedInputs {
    NormalizedInputs {
        employee_count: employee_count(inputs.employee_count),
        avg_salary: avg_salary(inputs.avg_salary),
        turnover_fraction: percent_fraction("turnover_rate_pct", inputs.turnover_rate_pct),
        reduction_fraction: percent_fraction("reduction_pct", inputs.reduction_pct),
    }
}

fn employee_count(raw: Option<f64>) -> u64 {
    match raw {
        // `as` saturates at u64::MAX for oversized counts
        Some(v) if v.is_finite() && v >= 0.0 => v.floor() as u64,
        Some(v) => {
            debug!(value = v, "invalid employee count, using 0");
            0
        }
        None => 0,
    }
}

fn avg_salary(raw: Option<f64>) -> Decimal {
    match raw {
        Some(v) if v.is_finite() && v > 0.0 => {
            // Only fails above Decimal::MAX; anything that large hits the ceiling clamp anyway
            Decimal::from_f64(v).unwrap_or(if v > 1.0 { Decimal::MAX } else { Decimal::ZERO })
        }
        other => {
            debug!(value = ?other, "average salary missing or invalid, using default");
            DEFAULT_AVG_SALARY
        }
    }
}

fn percent_fraction(field: &str, raw: Option<f64>) -> Decimal {
    let pct = match raw {
        Some(v) if v.is_finite() => {
            let clamped = v.clamp(0.0, 100.0);
            if clamped != v {
                debug!(field, value = v, clamped, "percentage out of range, clamping");
            }
            Decimal::from_f64(clamped).unwrap_or(Decimal::ZERO)
        }
        Some(v) => {
            debug!(field, value = v, "percentage is not finite, using 0");
            Decimal::ZERO
        }
        None => Decimal::ZERO,
    };
    pct / HUNDRED
}

/// Coerce a JSON value into a number the way a form field would be read.
///
/// Numbers pass through, numeric strings are parsed after trimming,
/// booleans become 1 or 0. Everything else (null, empty strings, arrays,
/// objects, unparseable text) is treated as absent.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// serde helper: deserialize an optional number from any JSON value
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_number))
}
