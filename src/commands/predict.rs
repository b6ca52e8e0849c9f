use crate::cli::PredictArgs;
use crate::commands::{check_query, load_operations};
use crate::config::Config;
use crate::core::data::QueryInput;
use crate::utils::output::BundleFormatter;
use anyhow::Result;

pub fn handle_predict_command(config: Config, args: &PredictArgs) -> Result<()> {
    let operations = load_operations(&config)?;

    let query = QueryInput::new(
        args.age,
        args.experience,
        args.gender.trim(),
        args.education.as_str(),
        args.job_title.trim(),
    );
    check_query(&query, &config.input, operations.dataset())?;

    let bundle = operations.evaluate(&query)?;
    BundleFormatter::print(&bundle, &args.format, &config.general.currency_symbol)?;

    Ok(())
}
