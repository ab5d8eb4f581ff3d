#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
pub mod service;
mod settings;

pub use service::{
    AssistError, AssistedProgram, AssistedToday, AssistedWorkout, Generated, NoAssistant,
    ProgramAssistant, ProgramPrompt, Service, ServiceError, Source, TodayPrompt, ValidationError,
};
pub use settings::{Settings, SettingsRepository};
