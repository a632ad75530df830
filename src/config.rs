use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{anyhow, Context, Error};
use serde::Deserialize;

use crate::resolver::{ConfigPathEntry, PathTable};

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub configurations: HashMap<String, Vec<ConfigPathEntry>>,
}

fn read_config_file(path: &PathBuf) -> Result<Config, Error> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read table file {}", path.display()))?;

    let config: Config = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse table file {}", path.display()))?;

    check_entries(config).with_context(|| format!("invalid table file {}", path.display()))
}

fn read_config_str(config_str: &str) -> Result<Config, Error> {
    let config: Config =
        serde_json::from_str(config_str).context("failed to parse table json str")?;

    check_entries(config).context("invalid table json str")
}

// an empty list would be indistinguishable from an unknown name
fn check_entries(config: Config) -> Result<Config, Error> {
    let mut empty = config
        .configurations
        .iter()
        .filter(|(_, entries)| entries.is_empty())
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>();

    if !empty.is_empty() {
        empty.sort_unstable();
        return Err(anyhow!(
            "configuration(s) with no path entries: {}",
            empty.join(", ")
        ));
    }

    Ok(config)
}

/// Builtin table, then the file, then the string. Later sources win per configuration name.
pub fn load_table(
    table_file: Option<PathBuf>,
    table_str: Option<String>,
) -> Result<PathTable, Error> {
    let mut table = PathTable::builtin();

    if let Some(path) = table_file {
        let config = read_config_file(&path)?;
        log::info!(
            "loaded {} configuration(s) from {}",
            config.configurations.len(),
            path.display()
        );
        table = table.extend(config.configurations.into());
    }

    if let Some(config_str) = table_str {
        let config = read_config_str(&config_str)?;
        log::info!(
            "loaded {} configuration(s) from --table-str",
            config.configurations.len()
        );
        table = table.extend(config.configurations.into());
    }

    log::debug!("path table:{}", table);

    Ok(table)
}
