use std::{
    cell::Cell,
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

/// Maximum number of entries kept by a log repository.
pub const MAX_ENTRIES: usize = 100;

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Write log records to stderr and to the given repository.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(
    repository: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

thread_local! {
    /// Set while the current thread writes an entry to the repository.
    static WRITING: Cell<bool> = const { Cell::new(false) };
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        eprintln!("[{}] {}: {message}", record.level(), record.target());

        // Records emitted by the repository itself are only printed.
        if WRITING.with(Cell::get) {
            return;
        }
        let Some(repository) = LOG.lock().ok().and_then(|log| log.clone()) else {
            return;
        };

        WRITING.with(|writing| writing.set(true));
        let result = repository
            .lock()
            .map_err(|err| Error::Unknown(err.to_string()))
            .and_then(|repository| {
                repository.write_entry(Entry {
                    time: Local::now().format("%b %d %H:%M:%S").to_string(),
                    level: record.level(),
                    message,
                })
            });
        WRITING.with(|writing| writing.set(false));

        if let Err(err) = result {
            eprintln!("failed to store log entry: {err}");
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::Log;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Memory(Mutex<VecDeque<Entry>>);

    impl Repository for Memory {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            Ok(self.0.lock().map_err(|e| Error::Unknown(e.to_string()))?.clone())
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            let mut entries = self.0.lock().map_err(|e| Error::Unknown(e.to_string()))?;
            entries.push_front(entry);
            entries.truncate(MAX_ENTRIES);
            Ok(())
        }
    }

    #[test]
    fn test_log_writes_entry() {
        let memory = Arc::new(Mutex::new(Memory::default()));
        let repository: Arc<Mutex<dyn Repository>> = memory.clone();
        *LOG.lock().unwrap() = Some(repository);
        log::set_max_level(LevelFilter::Info);

        Logger.log(
            &Record::builder()
                .args(format_args!("assistant unavailable"))
                .level(Level::Warn)
                .build(),
        );
        Logger.log(
            &Record::builder()
                .args(format_args!("ignored"))
                .level(Level::Debug)
                .build(),
        );

        let entries = memory.lock().unwrap().read_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Warn);
        assert_eq!(entries[0].message, "assistant unavailable");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = Entry {
            time: "Jan 20 10:00:00".to_string(),
            level: Level::Error,
            message: "failed".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({"time": "Jan 20 10:00:00", "level": "Error", "message": "failed"})
        );
    }
}
