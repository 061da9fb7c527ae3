use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "configs/config.json";

const DEFAULT_LINE_LENGTH: usize = 80;
const DEFAULT_LINK_FORMAT: &str = "[{url}]";
const DEFAULT_OUTPUT_FORMAT: &str = "txt";

/// Formatting and output options, loaded once per run and read-only after.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target width in characters for wrapped lines.
    pub line_length: usize,
    /// Emit a blank line between paragraphs.
    pub paragraph_spacing: bool,
    /// Template for inline link references, with a `{url}` placeholder.
    pub link_format: String,
    /// File extension of the saved output.
    pub output_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            line_length: DEFAULT_LINE_LENGTH,
            paragraph_spacing: true,
            link_format: DEFAULT_LINK_FORMAT.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
        }
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in config file {}", path.display()))?;
    Ok(config)
}
