//! Leveled logging to stderr.

use std::io::{self, Write};

use log::{Level, LevelFilter, Metadata, Record};
use owo_colors::OwoColorize;

struct StderrLogger {
    color: bool,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let tag = level_tag(record.level(), self.color);
            let _ = writeln!(io::stderr().lock(), "[{tag}] {}", record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn level_tag(level: Level, color: bool) -> String {
    let name = level.as_str();
    if !color {
        return name.to_owned();
    }
    match level {
        Level::Error => name.red().to_string(),
        Level::Warn => name.yellow().to_string(),
        Level::Info => name.green().to_string(),
        Level::Debug => name.blue().to_string(),
        Level::Trace => name.dimmed().to_string(),
    }
}

/// Map the `-v`/`-q` flags to a level. Warnings show by default.
#[must_use]
pub const fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. A logger installed earlier wins.
pub fn init(level: LevelFilter, color: bool) {
    if log::set_boxed_logger(Box::new(StderrLogger { color })).is_ok() {
        log::set_max_level(level);
    }
}
