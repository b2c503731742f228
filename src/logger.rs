use log::{Level, LevelFilter, Log, Metadata, Record};

/// Sends log records to stderr so stdout stays clean for command output.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the logger. Calling it a second time only changes the level.
    pub fn init(level: LevelFilter) {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(level);
    }

    pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
        match (quiet, verbose) {
            (true, _) => LevelFilter::Error,
            (false, true) => LevelFilter::Debug,
            (false, false) => LevelFilter::Info,
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => eprintln!("Error: {}", record.args()),
            Level::Warn => eprintln!("Warning: {}", record.args()),
            Level::Info => eprintln!("{}", record.args()),
            Level::Debug | Level::Trace => {
                eprintln!("[{}] {}", record.target(), record.args())
            }
        }
    }

    fn flush(&self) {}
}
