use std::collections::BTreeMap;

use chrono::NaiveDate;
use repset_domain::{self as domain, Property};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct TrainingLog(BTreeMap<NaiveDate, BTreeMap<String, LoggedExercise>>);

impl From<&domain::TrainingLog> for TrainingLog {
    fn from(value: &domain::TrainingLog) -> Self {
        Self(
            value
                .iter()
                .map(|(date, exercises)| {
                    (
                        *date,
                        exercises
                            .iter()
                            .map(|(id, exercise)| (id.to_string(), LoggedExercise::from(exercise)))
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

impl From<TrainingLog> for domain::TrainingLog {
    fn from(value: TrainingLog) -> Self {
        value
            .0
            .into_iter()
            .flat_map(|(date, exercises)| {
                exercises.into_iter().map(move |(id, exercise)| {
                    (
                        date,
                        domain::InstanceID::from(id),
                        domain::LoggedExercise::from(exercise),
                    )
                })
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub sets: Vec<LoggedSet>,
}

impl From<&domain::LoggedExercise> for LoggedExercise {
    fn from(value: &domain::LoggedExercise) -> Self {
        Self {
            sets: value.sets.iter().map(LoggedSet::from).collect(),
        }
    }
}

impl From<LoggedExercise> for domain::LoggedExercise {
    fn from(value: LoggedExercise) -> Self {
        Self {
            sets: value.sets.into_iter().map(domain::LoggedSet::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LoggedSet {
    pub reps: u32,
    pub weight: f32,
    #[serde(default)]
    pub completed: bool,
}

impl From<&domain::LoggedSet> for LoggedSet {
    fn from(value: &domain::LoggedSet) -> Self {
        Self {
            reps: value.reps,
            weight: value.weight,
            completed: value.completed,
        }
    }
}

impl From<LoggedSet> for domain::LoggedSet {
    fn from(value: LoggedSet) -> Self {
        Self {
            reps: value.reps,
            weight: value.weight,
            completed: value.completed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub workouts: Vec<Workout>,
    #[serde(default)]
    pub overrides: BTreeMap<NaiveDate, Workout>,
}

impl From<&domain::Program> for Program {
    fn from(value: &domain::Program) -> Self {
        Self {
            workouts: value.workouts.iter().map(Workout::from).collect(),
            overrides: value
                .overrides
                .iter()
                .map(|(date, workout)| (*date, Workout::from(workout)))
                .collect(),
        }
    }
}

impl TryFrom<Program> for domain::Program {
    type Error = ConversionError;

    fn try_from(value: Program) -> Result<Self, Self::Error> {
        Ok(Self {
            workouts: value
                .workouts
                .into_iter()
                .map(domain::ProgramWorkout::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            overrides: value
                .overrides
                .into_iter()
                .map(|(date, workout)| Ok((date, domain::ProgramWorkout::try_from(workout)?)))
                .collect::<Result<BTreeMap<_, _>, ConversionError>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub scheme: String,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::ProgramWorkout> for Workout {
    fn from(value: &domain::ProgramWorkout) -> Self {
        Self {
            id: *value.id,
            name: value.name.clone(),
            category: value.category.clone(),
            scheme: value.scheme.to_string(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::ProgramWorkout {
    type Error = ConversionError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            category: value.category,
            scheme: domain::Scheme::new(&value.scheme),
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ProgramExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub catalog_id: Option<String>,
}

impl From<&domain::ProgramExercise> for Exercise {
    fn from(value: &domain::ProgramExercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            unit: value.unit.name().to_string(),
            catalog_id: value.catalog_id.as_ref().map(ToString::to_string),
        }
    }
}

impl TryFrom<Exercise> for domain::ProgramExercise {
    type Error = ConversionError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        if value.id.trim().is_empty() {
            return Err(ConversionError::EmptyExerciseId(value.name));
        }
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            unit: domain::Unit::try_from(value.unit.as_str())?,
            catalog_id: value.catalog_id.map(domain::CatalogID::from),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    InvalidProperty(#[from] domain::PropertyError),
    #[error("exercise {0:?} has no id")]
    EmptyExerciseId(String),
}
