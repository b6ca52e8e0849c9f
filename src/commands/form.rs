use crate::commands::{check_query, load_operations};
use crate::config::Config;
use crate::core::data::{
    DEFAULT_AGE, DEFAULT_EXPERIENCE, EDUCATION_OPTIONS, GENDER_OPTIONS, MAX_AGE, MAX_EXPERIENCE,
    MIN_AGE, MIN_EXPERIENCE, QueryInput,
};
use crate::utils::error::{FlowResult, handle_flow, report_error};
use crate::utils::interactive::{
    prompt_choice, prompt_input, prompt_input_with_autocomplete, prompt_number_in_range,
    prompt_yes_no,
};
use crate::utils::output::{BundleFormatter, OutputStyle, print_warning};
use crate::cli::OutputFormat;
use anyhow::Result;

pub fn handle_form_command(config: Config) -> Result<()> {
    let operations = load_operations(&config)?;
    let titles = operations.dataset().job_titles();

    OutputStyle::print_header("💼 Employee Salary Predictor");
    println!(
        "{}",
        OutputStyle::muted(&session_banner(operations.dataset().len(), titles.len()))
    );

    let mut submissions = 0usize;
    loop {
        println!();
        let query = match read_query(&config, &titles) {
            Ok(query) => query,
            Err(e) => {
                handle_flow(FlowResult::Cancelled(format!("Form closed: {}", e)));
                break;
            }
        };

        if let Err(e) = check_query(&query, &config.input, operations.dataset()) {
            report_error(&e);
            continue;
        }

        println!();
        match operations.evaluate(&query) {
            Ok(bundle) => {
                submissions += 1;
                BundleFormatter::print(&bundle, &OutputFormat::Text, &config.general.currency_symbol)?;
            }
            // The session stays usable after a failed prediction
            Err(e) => report_error(&e),
        }

        println!("\n{}", OutputStyle::separator());
        if !prompt_yes_no("Predict another salary?")? {
            break;
        }
    }

    tracing::debug!(submissions, "form session finished");
    if submissions > 0 {
        handle_flow(FlowResult::Success(format!(
            "{} estimate{} produced",
            submissions,
            if submissions == 1 { "" } else { "s" }
        )));
    }

    Ok(())
}

/// Any read failure ends the session, so the banner says so
fn session_banner(records: usize, titles: usize) -> String {
    format!(
        "{} records, {} job titles loaded. Esc at the job title prompt closes the form.",
        records, titles
    )
}

fn read_query(config: &Config, titles: &[String]) -> Result<QueryInput> {
    let age = prompt_number_in_range("Age", MIN_AGE, MAX_AGE, DEFAULT_AGE)?;
    let experience =
        prompt_number_in_range("Years of Experience", MIN_EXPERIENCE, MAX_EXPERIENCE, DEFAULT_EXPERIENCE)?;

    let gender = if config.input.free_text_gender {
        read_non_empty(&format!("{}: ", OutputStyle::label("Gender")))?
    } else {
        prompt_choice("Gender", &GENDER_OPTIONS)?
    };

    let education = prompt_choice("Education Level", &EDUCATION_OPTIONS)?;
    let job_title = read_job_title(config, titles)?;

    Ok(QueryInput::new(age, experience, gender, education, job_title))
}

fn read_non_empty(prompt: &str) -> Result<String> {
    loop {
        let value = prompt_input(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        print_warning("A value is required");
    }
}

fn read_job_title(config: &Config, titles: &[String]) -> Result<String> {
    let prompt = format!("{} (Tab to complete): ", OutputStyle::label("Job Title"));

    loop {
        let title = prompt_input_with_autocomplete(&prompt, titles)?;

        if title.is_empty() {
            print_warning("A job title is required");
        } else if config.input.free_text_job_title || titles.binary_search(&title).is_ok() {
            return Ok(title);
        } else {
            print_warning(&format!("'{}' is not a known job title", title));
        }
    }
}
