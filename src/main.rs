//! Fetches a single webpage and saves its readable text (title, paragraphs,
//! h1/h2 headings) as a width-wrapped plain-text report, with inline links
//! rewritten to `text [url]` references.

mod config;
mod extract;
mod fetch;
mod format;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pagetext", about = "Fetch a webpage and save its readable text")]
struct Cli {
    /// URL of the page to fetch
    #[arg(long)]
    url: String,

    /// Path to the JSON options file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Folder the output file is written under
    #[arg(long, default_value = "generated")]
    output_folder: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load(&cli.config)?;
    info!("Loaded options from {}", cli.config.display());

    let html = fetch::fetch_html(&cli.url)?;
    let content = extract::extract_content(&html, &cli.url, &config.link_format);
    let formatted = format::apply_formatting(&content.body, &config);

    let path =
        output::generate_output_filename(&cli.url, &config.output_format, &cli.output_folder);
    match output::save_to_file(&content, &formatted, &path) {
        Ok(()) => info!("Saved report to {}", path.display()),
        Err(err) => error!("Could not save {}: {err:#}", path.display()),
    }

    output::print_report(&content, &formatted);
    Ok(())
}
