//! Internal command representation
//!
//! Commands here carry fully resolved calculator inputs, so the dispatcher
//! never has to know about flags, input files or config precedence.

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

use retention_roi::calculator::RoiInputs;
use retention_roi::config::{InputDefaults, LoadedConfig};
use retention_roi::error::{Result, RoiError};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Calculate { inputs: RoiInputs, breakdown: bool },
    Compare { inputs: RoiInputs },
    ConfigShow { loaded: LoadedConfig },
    ConfigPath,
}

/// Per-field values given explicitly on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputOverrides {
    pub employee_count: Option<f64>,
    pub avg_salary: Option<f64>,
    pub turnover_rate_pct: Option<f64>,
    pub reduction_pct: Option<f64>,
}

/// Combine overrides, an optional input record and config defaults.
///
/// An input record is used as-is, including absent fields, so the
/// calculator applies its own defaults to them. Without one, the config
/// defaults form the base. Explicit overrides always win.
pub fn resolve_inputs(
    overrides: InputOverrides,
    file_inputs: Option<RoiInputs>,
    defaults: &InputDefaults,
) -> RoiInputs {
    let base = file_inputs.unwrap_or_else(|| defaults.to_inputs());
    RoiInputs {
        employee_count: overrides.employee_count.or(base.employee_count),
        avg_salary: overrides.avg_salary.or(base.avg_salary),
        turnover_rate_pct: overrides.turnover_rate_pct.or(base.turnover_rate_pct),
        reduction_pct: overrides.reduction_pct.or(base.reduction_pct),
    }
}

/// Parse a JSON input record; the top level must be an object
pub fn parse_input_json(text: &str) -> Result<RoiInputs> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| RoiError::InputError(e.to_string()))?;
    if !value.is_object() {
        return Err(RoiError::InputError(
            "expected a JSON object with employeeCount, avgSalary, turnoverRatePct and reductionPct"
                .to_string(),
        )
        .into());
    }
    RoiInputs::deserialize(value).map_err(|e| RoiError::InputError(e.to_string()).into())
}

/// Read a JSON input record from a file, or stdin when `path` is "-"
pub fn read_input_file(path: &str) -> Result<RoiInputs> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(RoiError::from)
            .context("failed to read inputs from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(RoiError::from)
            .with_context(|| format!("failed to read input file {}", path))?
    };

    parse_input_json(&text).with_context(|| format!("invalid input file {}", path))
}
