use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::interactive::prompt_yes_no;
use crate::utils::output::{OutputStyle, print_success};
use anyhow::Result;

pub fn handle_config_command(
    mut config: Config,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(),
        Some(ConfigCommands::Reset) => handle_reset_command(&mut config),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    OutputStyle::print_header("⚙️  Salary Advisor Configuration");

    println!("General:");
    OutputStyle::print_field_colored("Model file", &config.general.model_file.display().to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Data file", &config.general.data_file.display().to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Currency symbol", &config.general.currency_symbol, OutputStyle::info);
    OutputStyle::print_field_colored("Color", &config.general.color.to_string(), OutputStyle::info);

    println!("Input:");
    OutputStyle::print_field_colored("Free-text gender", &config.input.free_text_gender.to_string(), OutputStyle::info);
    OutputStyle::print_field_colored("Free-text job title", &config.input.free_text_job_title.to_string(), OutputStyle::info);

    println!("Advice:");
    OutputStyle::print_field_colored("Experience window", &format!("±{} years", config.advice.experience_window), OutputStyle::info);
    OutputStyle::print_field_colored("Max roles", &config.advice.max_roles.to_string(), OutputStyle::info);

    Ok(())
}

fn handle_config_help() -> Result<()> {
    OutputStyle::print_header("⚙️  Configuration Management");
    println!("Available configuration commands:");
    println!("  salary-advisor config show    - Show current configuration");
    println!("  salary-advisor config path    - Print configuration file location");
    println!("  salary-advisor config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", Config::config_file_path().display());
    Ok(())
}

fn handle_path_command() -> Result<()> {
    println!("{}", Config::config_file_path().display());
    Ok(())
}

fn handle_reset_command(config: &mut Config) -> Result<()> {
    if prompt_yes_no("Are you sure you want to reset configuration to defaults? This will overwrite your current settings.")? {
        *config = Config::default();
        config.save()?;
        print_success("Configuration reset to defaults!");
    } else {
        println!("{}", OutputStyle::muted("Reset cancelled."));
    }
    Ok(())
}
