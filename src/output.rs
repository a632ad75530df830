use anyhow::{Error, Result};
use strum_macros::AsRefStr;

use crate::resolver::{ConfigPathEntry, PathTable};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// An absent result is empty text or a json `null`.
pub fn render(entries: Option<&[ConfigPathEntry]>, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for entry in entries.unwrap_or_default() {
                out.push_str(&entry.source);
                out.push('\t');
                out.push_str(&entry.destination);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&entries)?;
            out.push('\n');
            Ok(out)
        }
    }
}

pub fn render_names(table: &PathTable, format: OutputFormat) -> Result<String, Error> {
    let names = table.names();
    match format {
        OutputFormat::Text => Ok(names.iter().map(|name| format!("{}\n", name)).collect()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&names)?;
            out.push('\n');
            Ok(out)
        }
    }
}
