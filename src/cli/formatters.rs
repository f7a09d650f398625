//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of calculation from presentation.

use colored::Colorize;
use retention_roi::calculator::{ReductionPreset, RoiInputs};
use retention_roi::config::{ConfigSource, LoadedConfig};
use retention_roi::reports::{Breakdown, PresetComparison, DISCLAIMER, FOOTNOTES};
use retention_roi::utils::{format_count, format_percent, format_usd};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
}

fn employees(count: u64) -> String {
    if count == 1 {
        "1 employee".to_string()
    } else {
        format!("{} employees", format_count(count))
    }
}

/// Format a calculation for JSON output
pub fn format_calculation_json(inputs: &RoiInputs, breakdown: &Breakdown) -> String {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct JsonFormatted {
        replacement_cost: String,
        total_annual_savings: String,
    }

    #[derive(Serialize)]
    struct JsonCalculation<'a> {
        inputs: &'a RoiInputs,
        breakdown: &'a Breakdown,
        formatted: JsonFormatted,
        disclaimer: &'static str,
    }

    to_json(&JsonCalculation {
        inputs,
        breakdown,
        formatted: JsonFormatted {
            replacement_cost: format_usd(breakdown.outputs.replacement_cost),
            total_annual_savings: format_usd(breakdown.outputs.total_annual_savings),
        },
        disclaimer: DISCLAIMER,
    })
}

/// Format a calculation for the terminal: savings headline, optional breakdown
pub fn format_calculation_table(breakdown: &Breakdown, show_breakdown: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", "Annual Savings".bold()));
    output.push_str(&format!(
        "  {} annually\n",
        format_usd(breakdown.outputs.total_annual_savings)
            .green()
            .bold()
    ));

    if show_breakdown {
        output.push_str(&format!("\n{}\n\n", "Breakdown of ROI".cyan().bold()));

        #[derive(Tabled)]
        struct BreakdownRow {
            #[tabled(rename = "Item")]
            item: &'static str,
            #[tabled(rename = "Value")]
            value: String,
        }

        let outputs = &breakdown.outputs;
        let rows = vec![
            BreakdownRow {
                item: "Employee count",
                value: employees(breakdown.employee_count),
            },
            BreakdownRow {
                item: "Turnover rate",
                value: format_percent(breakdown.turnover_rate_pct),
            },
            BreakdownRow {
                item: "Expected turnover",
                value: employees(outputs.expected_turnover),
            },
            BreakdownRow {
                item: "Cost to replace*",
                value: format!("{} per employee", format_usd(outputs.replacement_cost)),
            },
            BreakdownRow {
                item: "Reduction in turnover*",
                value: format_percent(breakdown.reduction_pct),
            },
            BreakdownRow {
                item: "Employees retained",
                value: employees(outputs.employees_retained),
            },
            BreakdownRow {
                item: "Total Annual Savings",
                value: format_usd(outputs.total_annual_savings),
            },
        ];

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        output.push_str(&table);
        output.push('\n');

        output.push('\n');
        for note in FOOTNOTES {
            output.push_str(&format!("* {}\n", note).dimmed().to_string());
        }
    }

    output.push_str(&format!("\n{}\n", DISCLAIMER.dimmed()));
    output
}

/// Format a preset comparison for JSON output
pub fn format_comparison_json(comparison: &PresetComparison) -> String {
    #[derive(Serialize)]
    struct JsonComparison<'a> {
        #[serde(flatten)]
        comparison: &'a PresetComparison,
        best: Option<ReductionPreset>,
        disclaimer: &'static str,
    }

    to_json(&JsonComparison {
        comparison,
        best: comparison.best().map(|row| row.preset),
        disclaimer: DISCLAIMER,
    })
}

/// Format a preset comparison for terminal table output
pub fn format_comparison_table(comparison: &PresetComparison) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{} {} at {} turnover, {} average salary\n\n",
        "Reduction presets for".cyan().bold(),
        employees(comparison.employee_count),
        format_percent(comparison.turnover_rate_pct),
        format_usd(comparison.avg_salary),
    ));

    #[derive(Tabled)]
    struct PresetLine {
        #[tabled(rename = "Reduction")]
        reduction: String,
        #[tabled(rename = "Expected Turnover")]
        expected: String,
        #[tabled(rename = "Retained")]
        retained: String,
        #[tabled(rename = "Cost to Replace")]
        cost: String,
        #[tabled(rename = "Annual Savings")]
        savings: String,
        #[tabled(rename = "Best")]
        best: &'static str,
    }

    let best = comparison.best().map(|row| row.preset);
    let rows: Vec<PresetLine> = comparison
        .rows
        .iter()
        .map(|row| PresetLine {
            reduction: format_percent(row.reduction_pct),
            expected: format_count(row.outputs.expected_turnover),
            retained: format_count(row.outputs.employees_retained),
            cost: format_usd(row.outputs.replacement_cost),
            savings: format_usd(row.outputs.total_annual_savings),
            best: if best == Some(row.preset) { "*" } else { "" },
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..5)).with(Alignment::right()))
        .to_string();
    output.push_str(&table);
    output.push('\n');

    if let Some(preset) = best {
        output.push_str(&format!(
            "\n{}\n",
            format!("* Highest savings at {} reduction", preset).dimmed()
        ));
    }
    output.push_str(&format!("\n{}\n", DISCLAIMER.dimmed()));
    output
}

/// Format effective configuration for JSON output
pub fn format_config_json(loaded: &LoadedConfig) -> String {
    #[derive(Serialize)]
    struct JsonConfig<'a> {
        source: Option<String>,
        defaults: &'a retention_roi::config::InputDefaults,
    }

    to_json(&JsonConfig {
        source: match &loaded.source {
            ConfigSource::File(path) => Some(path.display().to_string()),
            ConfigSource::BuiltIn => None,
        },
        defaults: &loaded.config.defaults,
    })
}

/// Format effective configuration for terminal output
pub fn format_config_table(loaded: &LoadedConfig) -> String {
    let mut output = String::new();

    let source = match &loaded.source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::BuiltIn => "built-in defaults".to_string(),
    };
    output.push_str(&format!("\n{} {}\n\n", "Config:".cyan().bold(), source));

    #[derive(Tabled)]
    struct DefaultRow {
        #[tabled(rename = "Input")]
        input: &'static str,
        #[tabled(rename = "Default")]
        value: String,
    }

    let d = &loaded.config.defaults;
    let rows = vec![
        DefaultRow {
            input: "employee_count",
            value: d.employee_count.to_string(),
        },
        DefaultRow {
            input: "avg_salary",
            value: d.avg_salary.to_string(),
        },
        DefaultRow {
            input: "turnover_rate_pct",
            value: d.turnover_rate_pct.to_string(),
        },
        DefaultRow {
            input: "reduction_pct",
            value: d.reduction_pct.to_string(),
        },
    ];

    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use retention_roi::config::Config;

    fn sample() -> (RoiInputs, Breakdown) {
        let inputs = RoiInputs::new(300.0, 50000.0, 16.0, 5.0);
        let breakdown = Breakdown::new(&inputs);
        (inputs, breakdown)
    }

    #[test]
    fn test_headline_only_by_default() {
        colored::control::set_override(false);
        let (_, breakdown) = sample();
        let out = format_calculation_table(&breakdown, false);
        assert!(out.contains("Annual Savings"));
        assert!(out.contains("$30,000 annually"));
        assert!(!out.contains("Breakdown of ROI"));
        assert!(out.contains(DISCLAIMER));
    }

    #[test]
    fn test_breakdown_table_rows() {
        colored::control::set_override(false);
        let (_, breakdown) = sample();
        let out = format_calculation_table(&breakdown, true);
        assert!(out.contains("Breakdown of ROI"));
        assert!(out.contains("48 employees"));
        assert!(out.contains("$15,000 per employee"));
        assert!(out.contains("2 employees"));
        assert!(out.contains("16%"));
        for note in FOOTNOTES {
            assert!(out.contains(note));
        }
    }

    #[test]
    fn test_singular_employee() {
        assert_eq!(employees(1), "1 employee");
        assert_eq!(employees(0), "0 employees");
        assert_eq!(employees(1500), "1,500 employees");
    }

    #[test]
    fn test_calculation_json_shape() {
        let (inputs, breakdown) = sample();
        let json: serde_json::Value =
            serde_json::from_str(&format_calculation_json(&inputs, &breakdown)).unwrap();
        assert_eq!(json["inputs"]["employeeCount"], 300.0);
        assert_eq!(json["breakdown"]["employeesRetained"], 2);
        assert_eq!(json["formatted"]["totalAnnualSavings"], "$30,000");
        assert_eq!(json["disclaimer"], DISCLAIMER);
    }

    #[test]
    fn test_comparison_table_lists_presets() {
        colored::control::set_override(false);
        let comparison = PresetComparison::new(&RoiInputs::new(300.0, 50000.0, 16.0, 5.0));
        let out = format_comparison_table(&comparison);
        assert!(out.contains("7.5%"));
        assert!(out.contains("$45,000"));
        assert!(out.contains("$60,000"));
    }

    #[test]
    fn test_comparison_table_marks_best_preset() {
        colored::control::set_override(false);
        let comparison = PresetComparison::new(&RoiInputs::new(300.0, 50000.0, 16.0, 5.0));
        let out = format_comparison_table(&comparison);
        assert!(out.contains("Best"));
        assert!(out.contains("* Highest savings at 10% reduction"));

        let ten_line = out.lines().find(|l| l.contains("$60,000")).unwrap();
        assert!(ten_line.contains('*'));
        let five_line = out.lines().find(|l| l.contains("$30,000")).unwrap();
        assert!(!five_line.contains('*'));
    }

    #[test]
    fn test_comparison_json_names_best_preset() {
        // Nobody leaves, so every preset saves nothing and 5% is kept
        let comparison = PresetComparison::new(&RoiInputs::new(0.0, 50000.0, 16.0, 5.0));
        let json: serde_json::Value =
            serde_json::from_str(&format_comparison_json(&comparison)).unwrap();
        assert_eq!(json["best"], "Five");
        assert_eq!(json["rows"].as_array().map(|r| r.len()), Some(3));
        assert_eq!(json["employeeCount"], 0);
        assert_eq!(json["disclaimer"], DISCLAIMER);
    }

    #[test]
    fn test_config_json_builtin_source() {
        let loaded = LoadedConfig {
            config: Config::default(),
            source: ConfigSource::BuiltIn,
        };
        let json: serde_json::Value = serde_json::from_str(&format_config_json(&loaded)).unwrap();
        assert!(json["source"].is_null());
        assert_eq!(json["defaults"]["employee_count"], 250.0);
    }
}
