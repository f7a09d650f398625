//! Retention ROI - turnover reduction savings estimator
//!
//! This library provides the pure calculation core that turns four
//! workforce inputs into an illustrative annual savings estimate, plus the
//! formatting, reporting and configuration pieces used by the CLI.

pub mod calculator;
pub mod config;
pub mod error;
pub mod reports;
pub mod utils;

pub use calculator::{calculate, RoiInputs, RoiOutputs};
