#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("unsupported number of training days per week: {0} (expected 2 to 6)")]
    UnsupportedDaysPerWeek(u8),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for WriteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => WriteError::Storage(storage),
            ReadError::Other(other) => WriteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("corrupt entry for key {0:?}")]
    Corrupt(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
