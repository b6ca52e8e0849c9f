use colored::*;
use std::fmt::Write as _;

use crate::cli::OutputFormat;
use crate::core::data::RecommendationBundle;
use crate::utils::format::format_currency;
use anyhow::{Context, Result};

pub const TOP_TIER_MESSAGE: &str = "You're already in one of the top-paying roles for your background!";

pub struct OutputStyle;

impl OutputStyle {
    pub fn salary(text: &str) -> ColoredString {
        text.bright_green().bold()
    }

    pub fn role(text: &str) -> ColoredString {
        text.bright_cyan().bold()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "=".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: fn(&str) -> ColoredString) {
        println!("  {}: {}", Self::label(label), color_fn(value));
    }
}

/// Turn colored output on or off for the rest of the process
pub fn configure_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Renders recommendation bundles for the terminal
pub struct BundleFormatter;

impl BundleFormatter {
    /// Print a bundle in the requested format
    pub fn print(bundle: &RecommendationBundle, format: &OutputFormat, symbol: &str) -> Result<()> {
        match format {
            OutputFormat::Text => print!("{}", Self::render_text(bundle, symbol)),
            OutputFormat::Json => println!("{}", Self::render_json(bundle)?),
        }
        Ok(())
    }

    /// Render the estimate followed by the three advice sections
    pub fn render_text(bundle: &RecommendationBundle, symbol: &str) -> String {
        let mut out = String::new();

        let salary = format_currency(bundle.predicted_salary, symbol);
        let _ = writeln!(out, "💰 Estimated Salary: {}", OutputStyle::salary(&salary));

        let _ = writeln!(out, "\n🎯 {}", OutputStyle::header("Career Recommendations"));
        if bundle.already_top_tier {
            let _ = writeln!(out, "  {}", OutputStyle::info(TOP_TIER_MESSAGE));
        } else {
            let _ = writeln!(out, "  You might consider these high-paying roles:");
            for role in &bundle.better_roles {
                let _ = writeln!(
                    out,
                    "  - {} {} Avg Salary: {}",
                    OutputStyle::role(&role.job_title),
                    OutputStyle::muted("|"),
                    format_currency(role.average_salary, symbol)
                );
            }
        }

        let _ = writeln!(
            out,
            "\n💡 {} {}",
            OutputStyle::header("Career Advice"),
            OutputStyle::muted(&format!("({})", bundle.bracket.label()))
        );
        for tip in &bundle.tips {
            let _ = writeln!(out, "  - {}", tip);
        }

        let _ = writeln!(out, "\n📚 {}", OutputStyle::header("Suggested Courses to Upskill"));
        for course in &bundle.courses {
            let _ = writeln!(out, "  - {}", course);
        }

        out
    }

    pub fn render_json(bundle: &RecommendationBundle) -> Result<String> {
        serde_json::to_string_pretty(bundle).context("Failed to serialize recommendation to JSON")
    }
}
