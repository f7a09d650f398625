use anyhow::Result;

use crate::cli::{Commands, ConfigCommands, InputArgs};
use crate::commands::{self as cmd, Command, InputOverrides};
use retention_roi::config::LoadedConfig;

impl From<&InputArgs> for InputOverrides {
    fn from(args: &InputArgs) -> Self {
        InputOverrides {
            employee_count: args.employees,
            avg_salary: args.salary,
            turnover_rate_pct: args.turnover,
            reduction_pct: args.reduction.or(args.preset.map(|p| p.pct())),
        }
    }
}

/// Convert clap `Commands` into the internal `commands::Command`.
/// Errors when an `--input` file cannot be read or parsed.
pub fn to_internal_command(c: &Commands, loaded: &LoadedConfig) -> Result<Command> {
    match c {
        Commands::Calculate { inputs, breakdown } => Ok(Command::Calculate {
            inputs: resolve(inputs, loaded)?,
            breakdown: *breakdown,
        }),
        Commands::Compare { inputs } => Ok(Command::Compare {
            inputs: resolve(inputs, loaded)?,
        }),
        Commands::Config { action } => match action {
            ConfigCommands::Show => Ok(Command::ConfigShow {
                loaded: loaded.clone(),
            }),
            ConfigCommands::Path => Ok(Command::ConfigPath),
        },
    }
}

fn resolve(args: &InputArgs, loaded: &LoadedConfig) -> Result<retention_roi::RoiInputs> {
    let file_inputs = match args.input.as_deref() {
        Some(path) => Some(cmd::read_input_file(path)?),
        None => None,
    };
    Ok(cmd::resolve_inputs(
        InputOverrides::from(args),
        file_inputs,
        &loaded.config.defaults,
    ))
}
