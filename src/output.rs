use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;

use crate::extract::PageContent;

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").unwrap());

const TITLE_LABEL: &str = "Заголовок: ";
const URL_LABEL: &str = "Адрес    : ";

const BANNER: &str = r" ____                          _____              _
|  _ \   __ _   __ _   ___    |_   _|  ___ __  __| |_
| |_) | / _` | / _` | / _ \     | |   / _ \\ \/ /| __|
|  __/ | (_| || (_| ||  __/     | |  |  __/ >  < | |_
|_|     \__,_| \__, | \___|     |_|   \___|/_/\_\ \__|
               |___/";

/// Derives the output path for `url`: scheme stripped, every `/` replaced
/// with `_`, the configured extension appended, all under `output_folder`.
pub fn generate_output_filename(url: &str, output_format: &str, output_folder: &str) -> PathBuf {
    let stripped = SCHEME.replace(url, "");
    let name = stripped.replace('/', "_");
    Path::new(output_folder).join(format!("{name}.{output_format}"))
}

/// Writes the report file, creating the output directory when missing.
/// Overwrites any previous file at the same path.
pub fn save_to_file(content: &PageContent, formatted: &str, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    fs::write(path, render_file(content, formatted))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn render_file(content: &PageContent, formatted: &str) -> String {
    format!(
        "{TITLE_LABEL}{}\n\n{URL_LABEL}{}\n\n{}\n",
        content.title, content.url, formatted
    )
}

/// Echoes the saved report to the console, with decoration.
pub fn print_report(content: &PageContent, formatted: &str) {
    println!("{}", format!("{TITLE_LABEL}{}", content.title).blue());
    println!();
    println!("{}", format!("{URL_LABEL}{}", content.url).green());
    println!();
    println!("{formatted}");
    println!();
    println!("{}", BANNER.bright_magenta());
}
