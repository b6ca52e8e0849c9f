use crate::cli::TitlesArgs;
use crate::commands::load_dataset;
use crate::config::Config;
use crate::utils::format::truncate_string;
use crate::utils::pagination::print_paged;
use anyhow::Result;

const MAX_TITLE_WIDTH: usize = 60;

pub fn handle_titles_command(config: Config, args: &TitlesArgs) -> Result<()> {
    let dataset = load_dataset(&config)?;
    let titles = dataset.job_titles();

    if args.plain {
        for title in &titles {
            println!("{}", title);
        }
        return Ok(());
    }

    print_paged(&render_titles(&titles))?;
    Ok(())
}

fn render_titles(titles: &[String]) -> String {
    let mut out = format!("📋 Job Titles ({})\n{}\n", titles.len(), "=".repeat(20));
    for title in titles {
        out.push_str("  ");
        out.push_str(&truncate_string(title, MAX_TITLE_WIDTH));
        out.push('\n');
    }
    out
}
