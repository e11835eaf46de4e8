use std::sync::{Mutex, OnceLock, RwLock};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    let level = log::Level::Warn;
    // let level = log::Level::Debug;

    LOGGER.get_or_init(|| AppLogger::new(level))
}

pub fn init() {
    log::set_logger(get_logger()).unwrap();
    log::set_max_level(log::LevelFilter::Trace);
}

struct Message {
    level: log::Level,
    message: String,
    source: String,
}

/// Collects log records while the alternate screen is up, so they never tear
/// the frame. [`flush`](Log::flush) prints them to stderr, once the terminal
/// is back to normal.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
    buffered: Mutex<Vec<Message>>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            buffered: Mutex::new(Vec::new()),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap()
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffered.lock().unwrap().push(Message {
                level: record.level(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {
        let mut buffered = self.buffered.lock().unwrap();
        for message in buffered.drain(..) {
            eprintln!(
                "{:>5} [{}] {}",
                message.level, message.source, message.message
            );
        }
    }
}
