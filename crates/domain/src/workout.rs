use std::{borrow::Borrow, collections::BTreeMap};

use chrono::NaiveDate;
use derive_more::{AsRef, Deref, Display};
use uuid::Uuid;

use crate::{CatalogEntry, CatalogID, ReadError, Scheme, Unit, WriteError};

pub const CATEGORY_WORKOUT: &str = "Workout";

pub trait ProgramRepository {
    fn read_program(&self) -> Result<Option<Program>, ReadError>;
    fn write_program(&self, program: &Program) -> Result<(), WriteError>;
}

/// The user's accepted weekly program together with per-day edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub workouts: Vec<ProgramWorkout>,
    pub overrides: BTreeMap<NaiveDate, ProgramWorkout>,
}

impl Program {
    /// Every exercise instance of the weekly workouts and of the per-day overrides.
    pub fn instances(&self) -> impl Iterator<Item = &ProgramExercise> {
        self.workouts
            .iter()
            .chain(self.overrides.values())
            .flat_map(|w| w.exercises.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramWorkout {
    pub id: WorkoutID,
    pub name: String,
    pub category: String,
    pub scheme: Scheme,
    pub exercises: Vec<ProgramExercise>,
}

impl ProgramWorkout {
    #[must_use]
    pub fn new(name: impl Into<String>, scheme: Scheme, entries: &[&CatalogEntry]) -> Self {
        Self {
            id: WorkoutID::random(),
            name: name.into(),
            category: CATEGORY_WORKOUT.to_string(),
            scheme,
            exercises: entries
                .iter()
                .map(|e| ProgramExercise::from_entry(e))
                .collect(),
        }
    }

    pub fn catalog_ids(&self) -> impl Iterator<Item = &CatalogID> {
        self.exercises.iter().filter_map(|e| e.catalog_id.as_ref())
    }
}

/// Lightweight exercise instance referencing its catalog entry by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramExercise {
    pub id: InstanceID,
    pub name: String,
    pub unit: Unit,
    pub catalog_id: Option<CatalogID>,
}

impl ProgramExercise {
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: InstanceID::random(),
            name: entry.name.clone(),
            unit: entry.default_unit,
            catalog_id: Some(entry.id.clone()),
        }
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Key of an exercise instance, also used as key in the training log.
#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstanceID(String);

impl InstanceID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for InstanceID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for InstanceID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for InstanceID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Catalog;

    fn instance(id: &str, catalog_id: Option<&str>) -> ProgramExercise {
        ProgramExercise {
            id: id.into(),
            name: id.to_string(),
            unit: Unit::Reps,
            catalog_id: catalog_id.map(CatalogID::from),
        }
    }

    fn workout(exercises: Vec<ProgramExercise>) -> ProgramWorkout {
        ProgramWorkout {
            id: 1.into(),
            name: "A".to_string(),
            category: CATEGORY_WORKOUT.to_string(),
            scheme: Scheme::new("3x10"),
            exercises,
        }
    }

    #[test]
    fn test_program_instances_include_overrides() {
        let program = Program {
            workouts: vec![workout(vec![instance("a", Some("push_up"))])],
            overrides: BTreeMap::from([(
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                workout(vec![instance("b", None), instance("c", Some("plank"))]),
            )]),
        };

        assert_eq!(
            program
                .instances()
                .map(|e| e.id.to_string())
                .collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_program_workout_new() {
        let catalog = Catalog::builtin();
        let entries = ["push_up", "plank"]
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect::<Vec<_>>();

        let workout = ProgramWorkout::new("Push", Scheme::new("3x10"), &entries);

        assert_eq!(workout.name, "Push");
        assert_eq!(workout.category, CATEGORY_WORKOUT);
        assert!(!workout.id.is_nil());
        assert_eq!(
            workout
                .catalog_ids()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec!["push_up", "plank"]
        );
        assert_eq!(workout.exercises[1].unit, Unit::Sec);
        assert_ne!(workout.exercises[0].id, workout.exercises[1].id);
    }

    #[test]
    fn test_workout_id_nil() {
        assert!(WorkoutID::nil().is_nil());
        assert!(!WorkoutID::from(1).is_nil());
    }
}
