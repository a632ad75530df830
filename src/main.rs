use anyhow::{anyhow, Context, Error, Result};
use clap::{ArgAction, Parser};
use lottie_deploy_paths::{
    config, logging,
    output::{self, OutputFormat},
};
use std::{io::Write, path::PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Build configuration to resolve copy paths for (DEBUG or RELEASE)
    config: Option<String>,

    /// path to json file of configurations to add or replace
    /// format: { "configurations": { "NAME": [ { "source": "..", "destination": ".." } ] } }
    #[arg(long)]
    table_file: Option<PathBuf>,

    /// string in json format of configurations to add or replace
    /// same format as --table-file, applied after it
    #[arg(long)]
    table_str: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the known configuration names instead of resolving one
    #[arg(short, long, default_value_t = false, conflicts_with = "config")]
    list: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Error> {
    let args = Cli::parse();

    logging::init_logger(args.verbose).context("failed to initialize logger")?;

    let table = config::load_table(args.table_file, args.table_str)?;

    let rendered = if args.list {
        output::render_names(&table, args.format)?
    } else {
        let config = args
            .config
            .ok_or_else(|| anyhow!("no configuration given, pass DEBUG, RELEASE or --list"))?;

        let entries = table.get(&config);
        match entries {
            Some(entries) => log::info!("{} resolved to {} path(s)", config, entries.len()),
            None => log::warn!(
                "unrecognized configuration {:?}, known: {}",
                config,
                table.names().join(", ")
            ),
        }

        output::render(entries, args.format)?
    };

    log::trace!("output format {}", args.format.as_ref());

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
