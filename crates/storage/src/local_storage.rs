use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};

use ::log::{debug, error};
use repset_app::{Settings, SettingsRepository, log};
use repset_domain::{
    self as domain, ProgramRepository, ReadError, StorageError, TrainingLogRepository, WriteError,
};
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

use crate::dto;

/// Key-value store keeping one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "training_log")]
    TrainingLog,
    #[strum(serialize = "program")]
    Program,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| StorageError::Other(Box::new(err)))?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: Key) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_ref()))
    }

    pub fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, StorageError> {
        let content = match fs::read_to_string(self.path(key)) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no entry for key {:?}", key.as_ref());
                return Ok(None);
            }
            Err(err) => return Err(StorageError::Other(Box::new(err))),
        };
        serde_json::from_str(&content).map(Some).map_err(|err| {
            error!("failed to parse entry for key {:?}: {err}", key.as_ref());
            StorageError::Corrupt(key.as_ref().to_string())
        })
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> Result<(), StorageError> {
        let content =
            serde_json::to_string(value).map_err(|err| StorageError::Other(Box::new(err)))?;
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|err| StorageError::Other(Box::new(err)))
    }

    pub fn remove(&self, key: Key) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => {
                Err(StorageError::Other(Box::new(err)))
            }
            _ => Ok(()),
        }
    }
}

impl TrainingLogRepository for LocalStorage {
    fn read_training_log(&self) -> Result<domain::TrainingLog, ReadError> {
        Ok(self
            .get::<dto::TrainingLog>(Key::TrainingLog)?
            .map(domain::TrainingLog::from)
            .unwrap_or_default())
    }

    fn write_training_log(&self, log: &domain::TrainingLog) -> Result<(), WriteError> {
        Ok(self.set(Key::TrainingLog, &dto::TrainingLog::from(log))?)
    }
}

impl ProgramRepository for LocalStorage {
    fn read_program(&self) -> Result<Option<domain::Program>, ReadError> {
        self.get::<dto::Program>(Key::Program)?
            .map(|program| {
                domain::Program::try_from(program).map_err(|err| {
                    error!("failed to convert program: {err}");
                    ReadError::Storage(StorageError::Corrupt(Key::Program.as_ref().to_string()))
                })
            })
            .transpose()
    }

    fn write_program(&self, program: &domain::Program) -> Result<(), WriteError> {
        Ok(self.set(Key::Program, &dto::Program::from(program))?)
    }
}

impl SettingsRepository for LocalStorage {
    fn read_settings(&self) -> Result<Settings, ReadError> {
        Ok(self.get(Key::Settings)?.unwrap_or_default())
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), WriteError> {
        Ok(self.set(Key::Settings, settings)?)
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.get(Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        self.set(Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
