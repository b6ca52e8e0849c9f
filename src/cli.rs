use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;
use crate::config::Config;
use crate::commands::{configure, form, predict, titles};
use crate::core::data::{DEFAULT_AGE, DEFAULT_EXPERIENCE, EDUCATION_OPTIONS};

#[derive(Parser)]
#[command(name = "salary-advisor")]
#[command(about = "Estimate a salary and get ranked career advice")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Form => form::handle_form_command(config)?,
            Commands::Predict(args) => predict::handle_predict_command(config, &args)?,
            Commands::Titles(args) => titles::handle_titles_command(config, &args)?,
            Commands::Config(args) => configure::handle_config_command(config, args.command)?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the salary form interactively (default)
    Form,

    /// Estimate a salary for a single profile
    Predict(PredictArgs),

    /// List the job titles known to the dataset
    Titles(TitlesArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[arg(long, default_value_t = DEFAULT_AGE, value_parser = clap::value_parser!(u32).range(18..=70))]
    pub age: u32,

    #[arg(short = 'e', long, default_value_t = DEFAULT_EXPERIENCE, value_parser = clap::value_parser!(u32).range(0..=50))]
    pub experience: u32,

    #[arg(short, long, default_value = "Male")]
    pub gender: String,

    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(EDUCATION_OPTIONS))]
    pub education: String,

    #[arg(short = 't', long)]
    pub job_title: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct TitlesArgs {
    #[arg(long, help = "Print one title per line without paging")]
    pub plain: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}
