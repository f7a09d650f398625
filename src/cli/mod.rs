use clap::{Args, Parser, Subcommand};
use retention_roi::calculator::ReductionPreset;
use std::path::PathBuf;

pub mod formatters;
pub mod runner;

#[derive(Parser)]
#[command(name = "retention-roi")]
#[command(
    version,
    about = "Estimate annual savings from reduced turnover with effective recognition"
)]
#[command(
    long_about = "Estimate the annual savings of reducing employee turnover. Expected leavers are derived from headcount and turnover rate, a conservative share of them is retained, and each retained employee saves a replacement cost of 30% of salary bounded to $8,000-$35,000. Illustrative only. Results vary by organization."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Path to a TOML config file with default inputs
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Calculator inputs shared by every calculating command
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Current employee count
    #[arg(short, long, allow_negative_numbers = true)]
    pub employees: Option<f64>,

    /// Average annual employee salary
    #[arg(short, long, allow_negative_numbers = true)]
    pub salary: Option<f64>,

    /// Average annual turnover rate, in percent
    #[arg(short, long, allow_negative_numbers = true)]
    pub turnover: Option<f64>,

    /// Reduction in turnover, in percent (usually 5, 7.5 or 10)
    #[arg(short, long, allow_negative_numbers = true)]
    pub reduction: Option<f64>,

    /// Reduction preset to apply instead of --reduction (5, 7.5 or 10)
    #[arg(short, long, conflicts_with = "reduction")]
    pub preset: Option<ReductionPreset>,

    /// Read inputs from a JSON file ("-" for stdin); flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate annual savings for one set of inputs
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Show the full breakdown of the estimate
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Compare savings across the 5%, 7.5% and 10% reduction presets
    Compare {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective default inputs and where they came from
    Show,

    /// Print the default config file location
    Path,
}
