#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod equipment;
mod error;
mod exercise;
mod muscle;
pub mod program;
mod recency;
mod scheme;
mod selector;
pub mod today;
mod training_log;
mod workout;

pub use catalog::{Catalog, CatalogError};
pub use equipment::{EquipmentTier, fits_equipment};
pub use error::{GenerateError, ReadError, StorageError, WriteError};
pub use exercise::{
    CatalogEntry, CatalogID, Equipment, Movement, Muscles, Property, PropertyError, Tag, Unit,
};
pub use muscle::{MuscleGroup, MuscleGroupError};
pub use program::{
    Focus, GeneratedProgram, ProgramRequest, SplitDay, generate_day, generate_program,
    split_layout,
};
pub use recency::{
    DaysAgo, HistorySummary, MuscleRecency, RECENCY_WINDOW, analyze_muscle_recency, days_since,
};
pub use scheme::{Goal, Scheme, SetsReps, parse_scheme};
pub use selector::{
    MAX_EXERCISES, MIN_EXERCISES, MINUTES_PER_EXERCISE, pick_exercises, target_exercise_count,
};
pub use today::{TodayRequest, TodayWorkout, generate_today_workout};
pub use training_log::{LoggedExercise, LoggedSet, TrainingLog, TrainingLogRepository};
pub use workout::{
    CATEGORY_WORKOUT, InstanceID, Program, ProgramExercise, ProgramRepository, ProgramWorkout,
    WorkoutID,
};
