use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{calculate, RoiInputs, RoiOutputs};

/// Conservative turnover reduction assumptions offered to users.
///
/// The calculator accepts any reduction percentage; these are the three
/// choices the estimate is normally quoted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReductionPreset {
    Five,
    SevenPointFive,
    Ten,
}

impl ReductionPreset {
    pub const ALL: [ReductionPreset; 3] = [
        ReductionPreset::Five,
        ReductionPreset::SevenPointFive,
        ReductionPreset::Ten,
    ];

    pub fn pct(&self) -> f64 {
        match self {
            ReductionPreset::Five => 5.0,
            ReductionPreset::SevenPointFive => 7.5,
            ReductionPreset::Ten => 10.0,
        }
    }

    pub fn pct_decimal(&self) -> Decimal {
        match self {
            ReductionPreset::Five => Decimal::new(5, 0),
            ReductionPreset::SevenPointFive => Decimal::new(75, 1),
            ReductionPreset::Ten => Decimal::new(10, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReductionPreset::Five => "5",
            ReductionPreset::SevenPointFive => "7.5",
            ReductionPreset::Ten => "10",
        }
    }
}

impl fmt::Display for ReductionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_str())
    }
}

impl FromStr for ReductionPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        match number {
            "5" | "5.0" => Ok(ReductionPreset::Five),
            "7.5" => Ok(ReductionPreset::SevenPointFive),
            "10" | "10.0" => Ok(ReductionPreset::Ten),
            _ => Err(format!("unknown reduction preset: {} (expected 5, 7.5 or 10)", s)),
        }
    }
}

/// Evaluate the same inputs under every reduction preset.
///
/// Whatever reduction the inputs carry is replaced by each preset in turn.
pub fn compare_presets(inputs: &RoiInputs) -> Vec<(ReductionPreset, RoiOutputs)> {
    ReductionPreset::ALL
        .iter()
        .map(|preset| (*preset, calculate(&inputs.with_reduction_pct(preset.pct()))))
        .collect()
}
