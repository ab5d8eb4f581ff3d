#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod dto;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;

pub use dto::ConversionError;
pub use local_storage::{Key, LocalStorage};
