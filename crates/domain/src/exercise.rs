use std::{borrow::Borrow, collections::BTreeSet, slice::Iter};

use derive_more::{AsRef, Deref, Display};

use crate::MuscleGroup;

/// Reference definition of a trainable movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: CatalogID,
    pub name: String,
    pub default_unit: Unit,
    pub muscles: Muscles,
    /// Empty means no equipment is required.
    pub equipment: BTreeSet<Equipment>,
    pub tags: BTreeSet<Tag>,
    pub movement: Movement,
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.tags.contains(&Tag::Compound)
    }

    #[must_use]
    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.muscles.primary.contains(&muscle)
    }

    #[must_use]
    pub fn targets_any(&self, muscles: &[MuscleGroup]) -> bool {
        muscles.iter().any(|m| self.targets(*m))
    }

    /// Case-insensitive match against the name and all aliases.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(&query))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Muscles {
    pub primary: BTreeSet<MuscleGroup>,
    pub secondary: BTreeSet<MuscleGroup>,
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogID(String);

impl From<&str> for CatalogID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CatalogID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for CatalogID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Unit {
    Reps,
    Sec,
    Min,
    Miles,
    Yards,
    Laps,
    Steps,
    Hrs,
}

impl Property for Unit {
    fn iter() -> Iter<'static, Unit> {
        static UNIT: [Unit; 8] = [
            Unit::Reps,
            Unit::Sec,
            Unit::Min,
            Unit::Miles,
            Unit::Yards,
            Unit::Laps,
            Unit::Steps,
            Unit::Hrs,
        ];
        UNIT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Unit::Reps => "reps",
            Unit::Sec => "sec",
            Unit::Min => "min",
            Unit::Miles => "miles",
            Unit::Yards => "yards",
            Unit::Laps => "laps",
            Unit::Steps => "steps",
            Unit::Hrs => "hrs",
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value, "unit", Unit::name)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Bench,
    Box,
    Cable,
    Dumbbell,
    EzBar,
    JumpRope,
    Kettlebell,
    Machine,
    MedicineBall,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    TrapBar,
}

impl Equipment {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "bodyweight",
            Equipment::Barbell => "barbell",
            Equipment::Bench => "bench",
            Equipment::Box => "box",
            Equipment::Cable => "cable",
            Equipment::Dumbbell => "dumbbell",
            Equipment::EzBar => "ez-bar",
            Equipment::JumpRope => "jump-rope",
            Equipment::Kettlebell => "kettlebell",
            Equipment::Machine => "machine",
            Equipment::MedicineBall => "medicine-ball",
            Equipment::ParallelBars => "parallel-bars",
            Equipment::PullUpBar => "pull-up-bar",
            Equipment::ResistanceBand => "resistance-band",
            Equipment::TrapBar => "trap-bar",
        }
    }
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 15] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Box,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::EzBar,
            Equipment::JumpRope,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::MedicineBall,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Box => "Box",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::EzBar => "EZ Bar",
            Equipment::JumpRope => "Jump Rope",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

impl TryFrom<&str> for Equipment {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value, "equipment", Equipment::tag)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Tag {
    Compound,
    Isolation,
    Bodyweight,
    Cardio,
    Plyometric,
    Unilateral,
}

impl Property for Tag {
    fn iter() -> Iter<'static, Tag> {
        static TAG: [Tag; 6] = [
            Tag::Compound,
            Tag::Isolation,
            Tag::Bodyweight,
            Tag::Cardio,
            Tag::Plyometric,
            Tag::Unilateral,
        ];
        TAG.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Tag::Compound => "compound",
            Tag::Isolation => "isolation",
            Tag::Bodyweight => "bodyweight",
            Tag::Cardio => "cardio",
            Tag::Plyometric => "plyometric",
            Tag::Unilateral => "unilateral",
        }
    }
}

impl TryFrom<&str> for Tag {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value, "tag", Tag::name)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Movement {
    Push,
    Pull,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
    Sport,
    Mobility,
    Stretch,
}

impl Property for Movement {
    fn iter() -> Iter<'static, Movement> {
        static MOVEMENT: [Movement; 10] = [
            Movement::Push,
            Movement::Pull,
            Movement::Legs,
            Movement::Shoulders,
            Movement::Arms,
            Movement::Core,
            Movement::Cardio,
            Movement::Sport,
            Movement::Mobility,
            Movement::Stretch,
        ];
        MOVEMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Movement::Push => "push",
            Movement::Pull => "pull",
            Movement::Legs => "legs",
            Movement::Shoulders => "shoulders",
            Movement::Arms => "arms",
            Movement::Core => "core",
            Movement::Cardio => "cardio",
            Movement::Sport => "sport",
            Movement::Mobility => "mobility",
            Movement::Stretch => "stretch",
        }
    }
}

impl TryFrom<&str> for Movement {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value, "movement", Movement::name)
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PropertyError {
    #[error("unknown {kind} {value:?}")]
    Unknown { kind: &'static str, value: String },
}

pub(crate) fn parse<P: Property + 'static>(
    value: &str,
    kind: &'static str,
    tag: impl Fn(P) -> &'static str,
) -> Result<P, PropertyError> {
    let normalized = value.trim().to_lowercase();
    P::iter()
        .find(|p| tag(**p) == normalized)
        .copied()
        .ok_or_else(|| PropertyError::Unknown {
            kind,
            value: value.to_string(),
        })
}
