//! Command dispatcher that routes internal commands to their handlers
//! and prints the formatted result.

use anyhow::Result;
use tracing::info;

use crate::cli::formatters;
use crate::commands::Command;
use retention_roi::config::default_config_path;
use retention_roi::reports::{Breakdown, PresetComparison};

/// Route a resolved command to its handler
pub fn dispatch_command(command: Command, json_output: bool) -> Result<()> {
    println!("{}", render(&command, json_output));
    Ok(())
}

/// Produce the output for a command without printing it
pub fn render(command: &Command, json_output: bool) -> String {
    match command {
        Command::Calculate { inputs, breakdown } => {
            info!(?inputs, "calculating ROI");
            let report = Breakdown::new(inputs);
            if json_output {
                formatters::format_calculation_json(inputs, &report)
            } else {
                formatters::format_calculation_table(&report, *breakdown)
            }
        }
        Command::Compare { inputs } => {
            info!(?inputs, "comparing reduction presets");
            let comparison = PresetComparison::new(inputs);
            if json_output {
                formatters::format_comparison_json(&comparison)
            } else {
                formatters::format_comparison_table(&comparison)
            }
        }
        Command::ConfigShow { loaded } => {
            if json_output {
                formatters::format_config_json(loaded)
            } else {
                formatters::format_config_table(loaded)
            }
        }
        Command::ConfigPath => {
            let path = default_config_path().map(|p| p.display().to_string());
            if json_output {
                serde_json::json!({ "path": path }).to_string()
            } else {
                path.unwrap_or_else(|| "no config directory available".to_string())
            }
        }
    }
}
