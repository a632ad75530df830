use anyhow::{Error, Result};
use fern::Dispatch;
use log::LevelFilter;

/// Maps repeated `-v` flags to a level. Warnings are always shown.
pub fn level_from_occurrences(occurrences: u8) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs go to stderr so stdout only carries the resolved paths.
pub fn init_logger(verbosity: u8) -> Result<(), Error> {
    let level = level_from_occurrences(verbosity);

    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    log::debug!("logger initialized at {}", level);

    Ok(())
}
