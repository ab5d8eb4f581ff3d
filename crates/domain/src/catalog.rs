use std::{collections::BTreeMap, slice::Iter};

use crate::{
    CatalogEntry, CatalogID, Equipment, EquipmentTier, Movement, MuscleGroup, Muscles, Tag, Unit,
    fits_equipment,
};

/// Immutable, id-indexed collection of exercises.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: BTreeMap<CatalogID, usize>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();
        for entry in entries {
            if entry.id.is_empty() {
                return Err(CatalogError::EmptyId(entry.name));
            }
            if catalog.index.contains_key(&entry.id) {
                return Err(CatalogError::DuplicateId(entry.id.to_string()));
            }
            catalog.push(entry);
        }
        Ok(catalog)
    }

    /// Catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|i| &self.entries[*i])
    }

    pub fn iter(&self) -> Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        if query.trim().is_empty() {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|e| e.matches(query)).collect()
    }

    #[must_use]
    pub fn filter(&self, tier: EquipmentTier) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| fits_equipment(e, tier))
            .collect()
    }

    fn push(&mut self, entry: CatalogEntry) {
        self.index.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog id {0:?}")]
    DuplicateId(String),
    #[error("catalog entry {0:?} has no id")]
    EmptyId(String),
}

struct BaseEntry {
    id: &'static str,
    name: &'static str,
    unit: Unit,
    primary: &'static [MuscleGroup],
    secondary: &'static [MuscleGroup],
    equipment: &'static [Equipment],
    tags: &'static [Tag],
    movement: Movement,
    aliases: &'static [&'static str],
}

impl From<&BaseEntry> for CatalogEntry {
    fn from(value: &BaseEntry) -> Self {
        CatalogEntry {
            id: value.id.into(),
            name: value.name.to_string(),
            default_unit: value.unit,
            muscles: Muscles {
                primary: value.primary.iter().copied().collect(),
                secondary: value.secondary.iter().copied().collect(),
            },
            equipment: value.equipment.iter().copied().collect(),
            tags: value.tags.iter().copied().collect(),
            movement: value.movement,
            aliases: value.aliases.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

static BUILTIN: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    let mut catalog = Catalog::default();
    for entry in BASE_ENTRIES {
        catalog.push(entry.into());
    }
    catalog
});

const BASE_ENTRIES: &[BaseEntry] = &[
    BaseEntry {
        id: "barbell_bench_press",
        name: "Barbell Bench Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::Triceps, MuscleGroup::AnteriorDelt],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Push,
        aliases: &["bench press", "flat bench"],
    },
    BaseEntry {
        id: "incline_barbell_bench_press",
        name: "Incline Barbell Bench Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest, MuscleGroup::AnteriorDelt],
        secondary: &[MuscleGroup::Triceps],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Push,
        aliases: &["incline bench"],
    },
    BaseEntry {
        id: "dumbbell_bench_press",
        name: "Dumbbell Bench Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::Triceps, MuscleGroup::AnteriorDelt],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Compound],
        movement: Movement::Push,
        aliases: &["db bench"],
    },
    BaseEntry {
        id: "incline_dumbbell_press",
        name: "Incline Dumbbell Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest, MuscleGroup::AnteriorDelt],
        secondary: &[MuscleGroup::Triceps],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        tags: &[Tag::Compound],
        movement: Movement::Push,
        aliases: &["incline db press"],
    },
    BaseEntry {
        id: "machine_chest_press",
        name: "Machine Chest Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::Triceps],
        equipment: &[Equipment::Machine],
        tags: &[Tag::Compound],
        movement: Movement::Push,
        aliases: &[],
    },
    BaseEntry {
        id: "push_up",
        name: "Push Up",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::Triceps, MuscleGroup::AnteriorDelt, MuscleGroup::Abs],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Push,
        aliases: &["pushup", "press up"],
    },
    BaseEntry {
        id: "diamond_push_up",
        name: "Diamond Push Up",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Triceps],
        secondary: &[MuscleGroup::Chest],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Push,
        aliases: &["close grip push up"],
    },
    BaseEntry {
        id: "dip",
        name: "Dip",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest, MuscleGroup::Triceps],
        secondary: &[MuscleGroup::AnteriorDelt],
        equipment: &[Equipment::ParallelBars],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Push,
        aliases: &["parallel bar dip", "dips"],
    },
    BaseEntry {
        id: "cable_fly",
        name: "Cable Fly",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest],
        secondary: &[MuscleGroup::AnteriorDelt],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Isolation],
        movement: Movement::Push,
        aliases: &["cable crossover"],
    },
    BaseEntry {
        id: "dumbbell_fly",
        name: "Dumbbell Fly",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Chest],
        secondary: &[],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Push,
        aliases: &["chest fly"],
    },
    BaseEntry {
        id: "close_grip_bench_press",
        name: "Close Grip Bench Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Triceps, MuscleGroup::Chest],
        secondary: &[MuscleGroup::AnteriorDelt],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Push,
        aliases: &[],
    },
    BaseEntry {
        id: "overhead_press",
        name: "Overhead Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::AnteriorDelt, MuscleGroup::LateralDelt],
        secondary: &[MuscleGroup::Triceps],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Shoulders,
        aliases: &["ohp", "military press"],
    },
    BaseEntry {
        id: "dumbbell_shoulder_press",
        name: "Dumbbell Shoulder Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::AnteriorDelt, MuscleGroup::LateralDelt],
        secondary: &[MuscleGroup::Triceps],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Compound],
        movement: Movement::Shoulders,
        aliases: &["seated dumbbell press"],
    },
    BaseEntry {
        id: "pike_push_up",
        name: "Pike Push Up",
        unit: Unit::Reps,
        primary: &[MuscleGroup::AnteriorDelt, MuscleGroup::Triceps],
        secondary: &[MuscleGroup::Chest, MuscleGroup::LateralDelt],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Shoulders,
        aliases: &[],
    },
    BaseEntry {
        id: "lateral_raise",
        name: "Lateral Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::LateralDelt],
        secondary: &[],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Shoulders,
        aliases: &["side raise"],
    },
    BaseEntry {
        id: "cable_lateral_raise",
        name: "Cable Lateral Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::LateralDelt],
        secondary: &[],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Isolation],
        movement: Movement::Shoulders,
        aliases: &[],
    },
    BaseEntry {
        id: "band_lateral_raise",
        name: "Band Lateral Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::LateralDelt],
        secondary: &[],
        equipment: &[Equipment::ResistanceBand],
        tags: &[Tag::Isolation],
        movement: Movement::Shoulders,
        aliases: &[],
    },
    BaseEntry {
        id: "front_raise",
        name: "Front Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::AnteriorDelt],
        secondary: &[],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Shoulders,
        aliases: &[],
    },
    BaseEntry {
        id: "face_pull",
        name: "Face Pull",
        unit: Unit::Reps,
        primary: &[MuscleGroup::PosteriorDelt],
        secondary: &[MuscleGroup::Back],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Isolation],
        movement: Movement::Pull,
        aliases: &[],
    },
    BaseEntry {
        id: "reverse_fly",
        name: "Reverse Fly",
        unit: Unit::Reps,
        primary: &[MuscleGroup::PosteriorDelt],
        secondary: &[MuscleGroup::Back],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Pull,
        aliases: &["rear delt fly"],
    },
    BaseEntry {
        id: "band_pull_apart",
        name: "Band Pull Apart",
        unit: Unit::Reps,
        primary: &[MuscleGroup::PosteriorDelt],
        secondary: &[MuscleGroup::Back],
        equipment: &[Equipment::ResistanceBand],
        tags: &[Tag::Isolation],
        movement: Movement::Pull,
        aliases: &[],
    },
    BaseEntry {
        id: "triceps_pushdown",
        name: "Triceps Pushdown",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Triceps],
        secondary: &[],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &["rope pushdown"],
    },
    BaseEntry {
        id: "skull_crusher",
        name: "Skull Crusher",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Triceps],
        secondary: &[],
        equipment: &[Equipment::EzBar],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &["lying triceps extension"],
    },
    BaseEntry {
        id: "overhead_triceps_extension",
        name: "Overhead Triceps Extension",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Triceps],
        secondary: &[],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &[],
    },
    BaseEntry {
        id: "bench_dip",
        name: "Bench Dip",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Triceps],
        secondary: &[MuscleGroup::Chest, MuscleGroup::AnteriorDelt],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Arms,
        aliases: &[],
    },
    BaseEntry {
        id: "pull_up",
        name: "Pull Up",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::PosteriorDelt],
        equipment: &[Equipment::PullUpBar],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Pull,
        aliases: &["pullup"],
    },
    BaseEntry {
        id: "chin_up",
        name: "Chin Up",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back, MuscleGroup::Biceps],
        secondary: &[],
        equipment: &[Equipment::PullUpBar],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Pull,
        aliases: &["chinup"],
    },
    BaseEntry {
        id: "barbell_row",
        name: "Barbell Row",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::PosteriorDelt],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Pull,
        aliases: &["bent over row"],
    },
    BaseEntry {
        id: "dumbbell_row",
        name: "Dumbbell Row",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::PosteriorDelt],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Compound, Tag::Unilateral],
        movement: Movement::Pull,
        aliases: &["one arm row"],
    },
    BaseEntry {
        id: "lat_pulldown",
        name: "Lat Pulldown",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Biceps],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Compound],
        movement: Movement::Pull,
        aliases: &["pulldown"],
    },
    BaseEntry {
        id: "seated_cable_row",
        name: "Seated Cable Row",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::PosteriorDelt],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Compound],
        movement: Movement::Pull,
        aliases: &["cable row"],
    },
    BaseEntry {
        id: "band_row",
        name: "Band Row",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Biceps],
        equipment: &[Equipment::ResistanceBand],
        tags: &[Tag::Compound],
        movement: Movement::Pull,
        aliases: &[],
    },
    BaseEntry {
        id: "inverted_row",
        name: "Inverted Row",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Biceps, MuscleGroup::PosteriorDelt],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Pull,
        aliases: &["bodyweight row", "australian pull up"],
    },
    BaseEntry {
        id: "superman",
        name: "Superman",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back],
        secondary: &[MuscleGroup::Glutes],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Pull,
        aliases: &[],
    },
    BaseEntry {
        id: "deadlift",
        name: "Deadlift",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Back, MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Quads, MuscleGroup::Forearms],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &["conventional deadlift"],
    },
    BaseEntry {
        id: "kettlebell_swing",
        name: "Kettlebell Swing",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Glutes, MuscleGroup::Hamstrings],
        secondary: &[MuscleGroup::Back],
        equipment: &[Equipment::Kettlebell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &["kb swing"],
    },
    BaseEntry {
        id: "barbell_curl",
        name: "Barbell Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Biceps],
        secondary: &[MuscleGroup::Forearms],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &[],
    },
    BaseEntry {
        id: "dumbbell_curl",
        name: "Dumbbell Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Biceps],
        secondary: &[MuscleGroup::Forearms],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &["bicep curl"],
    },
    BaseEntry {
        id: "hammer_curl",
        name: "Hammer Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Biceps, MuscleGroup::Forearms],
        secondary: &[],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &[],
    },
    BaseEntry {
        id: "cable_curl",
        name: "Cable Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Biceps],
        secondary: &[],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &[],
    },
    BaseEntry {
        id: "band_curl",
        name: "Band Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Biceps],
        secondary: &[],
        equipment: &[Equipment::ResistanceBand],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &[],
    },
    BaseEntry {
        id: "wrist_curl",
        name: "Wrist Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Forearms],
        secondary: &[],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Arms,
        aliases: &[],
    },
    BaseEntry {
        id: "farmers_walk",
        name: "Farmer's Walk",
        unit: Unit::Yards,
        primary: &[MuscleGroup::Forearms],
        secondary: &[MuscleGroup::Back, MuscleGroup::Abs],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Compound],
        movement: Movement::Arms,
        aliases: &["farmer carry"],
    },
    BaseEntry {
        id: "back_squat",
        name: "Back Squat",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings, MuscleGroup::Abs],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &["squat"],
    },
    BaseEntry {
        id: "front_squat",
        name: "Front Squat",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads],
        secondary: &[MuscleGroup::Glutes, MuscleGroup::Abs],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "goblet_squat",
        name: "Goblet Squat",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[],
        equipment: &[Equipment::Dumbbell, Equipment::Kettlebell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "bodyweight_squat",
        name: "Bodyweight Squat",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight],
        movement: Movement::Legs,
        aliases: &["air squat"],
    },
    BaseEntry {
        id: "jump_squat",
        name: "Jump Squat",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Calves],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight, Tag::Plyometric],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "walking_lunge",
        name: "Walking Lunge",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Compound, Tag::Unilateral],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "reverse_lunge",
        name: "Reverse Lunge",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight, Tag::Unilateral],
        movement: Movement::Legs,
        aliases: &["lunge"],
    },
    BaseEntry {
        id: "bulgarian_split_squat",
        name: "Bulgarian Split Squat",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        tags: &[Tag::Compound, Tag::Unilateral],
        movement: Movement::Legs,
        aliases: &["split squat"],
    },
    BaseEntry {
        id: "leg_press",
        name: "Leg Press",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads, MuscleGroup::Glutes],
        secondary: &[],
        equipment: &[Equipment::Machine],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "leg_extension",
        name: "Leg Extension",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Quads],
        secondary: &[],
        equipment: &[Equipment::Machine],
        tags: &[Tag::Isolation],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "romanian_deadlift",
        name: "Romanian Deadlift",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Back],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &["rdl"],
    },
    BaseEntry {
        id: "dumbbell_romanian_deadlift",
        name: "Dumbbell Romanian Deadlift",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Hamstrings, MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Back],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &["db rdl"],
    },
    BaseEntry {
        id: "leg_curl",
        name: "Leg Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Hamstrings],
        secondary: &[],
        equipment: &[Equipment::Machine],
        tags: &[Tag::Isolation],
        movement: Movement::Legs,
        aliases: &["hamstring curl"],
    },
    BaseEntry {
        id: "nordic_curl",
        name: "Nordic Curl",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Hamstrings],
        secondary: &[],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Legs,
        aliases: &["nordic hamstring curl"],
    },
    BaseEntry {
        id: "hip_thrust",
        name: "Hip Thrust",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
        equipment: &[Equipment::Barbell],
        tags: &[Tag::Compound],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "glute_bridge",
        name: "Glute Bridge",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Glutes],
        secondary: &[MuscleGroup::Hamstrings],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Legs,
        aliases: &["hip bridge"],
    },
    BaseEntry {
        id: "standing_calf_raise",
        name: "Standing Calf Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Calves],
        secondary: &[],
        equipment: &[Equipment::Machine],
        tags: &[Tag::Isolation],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "dumbbell_calf_raise",
        name: "Dumbbell Calf Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Calves],
        secondary: &[],
        equipment: &[Equipment::Dumbbell],
        tags: &[Tag::Isolation],
        movement: Movement::Legs,
        aliases: &[],
    },
    BaseEntry {
        id: "bodyweight_calf_raise",
        name: "Bodyweight Calf Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Calves],
        secondary: &[],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Legs,
        aliases: &["calf raise"],
    },
    BaseEntry {
        id: "plank",
        name: "Plank",
        unit: Unit::Sec,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Obliques],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Core,
        aliases: &["front plank"],
    },
    BaseEntry {
        id: "side_plank",
        name: "Side Plank",
        unit: Unit::Sec,
        primary: &[MuscleGroup::Obliques],
        secondary: &[MuscleGroup::Abs],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Core,
        aliases: &[],
    },
    BaseEntry {
        id: "crunch",
        name: "Crunch",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Abs],
        secondary: &[],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Core,
        aliases: &["sit up"],
    },
    BaseEntry {
        id: "cable_crunch",
        name: "Cable Crunch",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Abs],
        secondary: &[],
        equipment: &[Equipment::Cable],
        tags: &[Tag::Isolation],
        movement: Movement::Core,
        aliases: &[],
    },
    BaseEntry {
        id: "hanging_leg_raise",
        name: "Hanging Leg Raise",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Obliques, MuscleGroup::Forearms],
        equipment: &[Equipment::PullUpBar],
        tags: &[Tag::Isolation],
        movement: Movement::Core,
        aliases: &[],
    },
    BaseEntry {
        id: "russian_twist",
        name: "Russian Twist",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Obliques],
        secondary: &[MuscleGroup::Abs],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Isolation, Tag::Bodyweight],
        movement: Movement::Core,
        aliases: &[],
    },
    BaseEntry {
        id: "mountain_climber",
        name: "Mountain Climber",
        unit: Unit::Reps,
        primary: &[MuscleGroup::Abs],
        secondary: &[MuscleGroup::Quads],
        equipment: &[Equipment::Bodyweight],
        tags: &[Tag::Compound, Tag::Bodyweight, Tag::Cardio],
        movement: Movement::Core,
        aliases: &[],
    },
    BaseEntry {
        id: "running",
        name: "Running",
        unit: Unit::Miles,
        primary: &[],
        secondary: &[],
        equipment: &[],
        tags: &[Tag::Cardio],
        movement: Movement::Cardio,
        aliases: &["run", "jog"],
    },
    BaseEntry {
        id: "cycling",
        name: "Cycling",
        unit: Unit::Min,
        primary: &[],
        secondary: &[MuscleGroup::Quads],
        equipment: &[],
        tags: &[Tag::Cardio],
        movement: Movement::Cardio,
        aliases: &["bike", "spin"],
    },
    BaseEntry {
        id: "swimming",
        name: "Swimming",
        unit: Unit::Laps,
        primary: &[],
        secondary: &[],
        equipment: &[],
        tags: &[Tag::Cardio],
        movement: Movement::Cardio,
        aliases: &["swim"],
    },
    BaseEntry {
        id: "walking",
        name: "Walking",
        unit: Unit::Steps,
        primary: &[],
        secondary: &[],
        equipment: &[],
        tags: &[Tag::Cardio],
        movement: Movement::Cardio,
        aliases: &["walk"],
    },
    BaseEntry {
        id: "rowing_machine",
        name: "Rowing Machine",
        unit: Unit::Min,
        primary: &[],
        secondary: &[MuscleGroup::Back, MuscleGroup::Quads],
        equipment: &[Equipment::Machine],
        tags: &[Tag::Cardio],
        movement: Movement::Cardio,
        aliases: &["erg", "rower"],
    },
    BaseEntry {
        id: "jump_rope",
        name: "Jump Rope",
        unit: Unit::Min,
        primary: &[],
        secondary: &[MuscleGroup::Calves],
        equipment: &[Equipment::JumpRope],
        tags: &[Tag::Cardio, Tag::Plyometric],
        movement: Movement::Cardio,
        aliases: &["skipping"],
    },
    BaseEntry {
        id: "basketball",
        name: "Basketball",
        unit: Unit::Hrs,
        primary: &[],
        secondary: &[],
        equipment: &[],
        tags: &[Tag::Cardio],
        movement: Movement::Sport,
        aliases: &["hoops"],
    },
    BaseEntry {
        id: "tennis",
        name: "Tennis",
        unit: Unit::Hrs,
        primary: &[],
        secondary: &[],
        equipment: &[],
        tags: &[Tag::Cardio],
        movement: Movement::Sport,
        aliases: &[],
    },
    BaseEntry {
        id: "yoga",
        name: "Yoga",
        unit: Unit::Min,
        primary: &[],
        secondary: &[],
        equipment: &[],
        tags: &[],
        movement: Movement::Mobility,
        aliases: &["vinyasa"],
    },
    BaseEntry {
        id: "hamstring_stretch",
        name: "Hamstring Stretch",
        unit: Unit::Sec,
        primary: &[],
        secondary: &[MuscleGroup::Hamstrings],
        equipment: &[],
        tags: &[],
        movement: Movement::Stretch,
        aliases: &[],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.into(),
            name: id.to_uppercase(),
            default_unit: Unit::Reps,
            muscles: Muscles::default(),
            equipment: [].into(),
            tags: [].into(),
            movement: Movement::Push,
            aliases: vec![],
        }
    }

    #[test]
    fn test_catalog_new() {
        let catalog = Catalog::new([entry("a"), entry("b")]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("b"), Some(&entry("b")));
        assert_eq!(catalog.get("c"), None);
        assert_eq!(
            catalog.iter().map(|e| e.id.to_string()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_catalog_new_duplicate_id() {
        assert_eq!(
            Catalog::new([entry("a"), entry("b"), entry("a")]),
            Err(CatalogError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn test_catalog_new_empty_id() {
        assert_eq!(
            Catalog::new([entry("")]),
            Err(CatalogError::EmptyId(String::new()))
        );
    }

    #[test]
    fn test_builtin_ids_unique() {
        let mut ids = HashSet::new();

        for entry in BASE_ENTRIES {
            assert!(!entry.id.is_empty());
            assert!(ids.insert(entry.id), "duplicate id {}", entry.id);
        }

        assert_eq!(Catalog::builtin().len(), BASE_ENTRIES.len());
        assert_eq!(
            Catalog::new(BASE_ENTRIES.iter().map(CatalogEntry::from)).as_ref(),
            Ok(Catalog::builtin())
        );
    }

    #[test]
    fn test_builtin_strength_entries_have_primary_muscles() {
        for entry in Catalog::builtin() {
            if entry.tags.contains(&Tag::Compound) || entry.tags.contains(&Tag::Isolation) {
                assert!(
                    !entry.muscles.primary.is_empty(),
                    "{} has no primary muscles",
                    entry.id
                );
            }
        }
    }

    #[test]
    fn test_builtin_covers_every_muscle_group() {
        for muscle in <MuscleGroup as crate::Property>::iter() {
            assert!(
                Catalog::builtin().iter().any(|e| e.targets(*muscle)),
                "no exercise for {muscle:?}"
            );
        }
    }

    #[rstest]
    #[case::name("bench press", "barbell_bench_press")]
    #[case::alias("ohp", "overhead_press")]
    #[case::alias_upper_case("RDL", "romanian_deadlift")]
    fn test_builtin_search(#[case] query: &str, #[case] expected_first: &str) {
        assert_eq!(
            Catalog::builtin()
                .search(query)
                .first()
                .map(|e| e.id.to_string()),
            Some(expected_first.to_string())
        );
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        assert_eq!(
            Catalog::builtin().search("  ").len(),
            Catalog::builtin().len()
        );
    }

    #[test]
    fn test_filter_home_tier() {
        let home = Catalog::builtin().filter(EquipmentTier::Home);

        assert!(!home.is_empty());
        assert!(
            home.iter()
                .all(|e| e.equipment.iter().all(|eq| *eq == Equipment::Bodyweight))
        );
        assert_eq!(
            Catalog::builtin().filter(EquipmentTier::Gym).len(),
            Catalog::builtin().len()
        );
    }
}
