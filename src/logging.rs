//! Logger backend for the `log` facade used by the core and the window.

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Map `-v` / `-q` flags to a level filter.
pub fn level_for(
    verbose: u8,
    quiet: bool,
) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Install the global logger. `[LEVEL target] message` per line on stderr.
pub fn init_logging(
    verbose: u8,
    quiet: bool,
) {
    Builder::new()
        .filter_level(level_for(verbose, quiet))
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
