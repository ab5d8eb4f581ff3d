use log::{debug, info};
use rand::Rng;

use crate::{
    Catalog, EquipmentTier, GenerateError, Goal, MuscleGroup, ProgramWorkout, Scheme,
    pick_exercises, target_exercise_count,
};

/// Muscle focus of a training day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
    Push,
    Pull,
    Legs,
    Upper,
    Lower,
    FullBody,
}

impl Focus {
    #[must_use]
    pub fn muscles(self) -> &'static [MuscleGroup] {
        match self {
            Focus::Push => PUSH,
            Focus::Pull => PULL,
            Focus::Legs | Focus::Lower => LEGS,
            Focus::Upper => UPPER,
            Focus::FullBody => FULL_BODY,
        }
    }
}

pub(crate) const PUSH: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::AnteriorDelt,
    MuscleGroup::LateralDelt,
    MuscleGroup::Triceps,
];

pub(crate) const PULL: &[MuscleGroup] = &[
    MuscleGroup::Back,
    MuscleGroup::Biceps,
    MuscleGroup::PosteriorDelt,
];

pub(crate) const LEGS: &[MuscleGroup] = &[
    MuscleGroup::Quads,
    MuscleGroup::Hamstrings,
    MuscleGroup::Glutes,
    MuscleGroup::Calves,
];

const UPPER: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::AnteriorDelt,
    MuscleGroup::LateralDelt,
    MuscleGroup::Triceps,
    MuscleGroup::Back,
    MuscleGroup::Biceps,
    MuscleGroup::PosteriorDelt,
];

pub(crate) const FULL_BODY: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Quads,
    MuscleGroup::Hamstrings,
    MuscleGroup::Glutes,
    MuscleGroup::AnteriorDelt,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitDay {
    pub name: &'static str,
    pub focus: Focus,
}

const fn day(name: &'static str, focus: Focus) -> SplitDay {
    SplitDay { name, focus }
}

static TWO_DAYS: [SplitDay; 2] = [
    day("Full Body A", Focus::FullBody),
    day("Full Body B", Focus::FullBody),
];

static THREE_DAYS: [SplitDay; 3] = [
    day("Push", Focus::Push),
    day("Pull", Focus::Pull),
    day("Legs", Focus::Legs),
];

static FOUR_DAYS: [SplitDay; 4] = [
    day("Upper A", Focus::Upper),
    day("Lower A", Focus::Lower),
    day("Upper B", Focus::Upper),
    day("Lower B", Focus::Lower),
];

static FIVE_DAYS: [SplitDay; 5] = [
    day("Push", Focus::Push),
    day("Pull", Focus::Pull),
    day("Legs", Focus::Legs),
    day("Upper", Focus::Upper),
    day("Lower", Focus::Lower),
];

static SIX_DAYS: [SplitDay; 6] = [
    day("Push A", Focus::Push),
    day("Pull A", Focus::Pull),
    day("Legs A", Focus::Legs),
    day("Push B", Focus::Push),
    day("Pull B", Focus::Pull),
    day("Legs B", Focus::Legs),
];

/// Weekly split for the given number of training days.
pub fn split_layout(days_per_week: u8) -> Result<&'static [SplitDay], GenerateError> {
    match days_per_week {
        2 => Ok(&TWO_DAYS),
        3 => Ok(&THREE_DAYS),
        4 => Ok(&FOUR_DAYS),
        5 => Ok(&FIVE_DAYS),
        6 => Ok(&SIX_DAYS),
        _ => Err(GenerateError::UnsupportedDaysPerWeek(days_per_week)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramRequest {
    pub goal: Option<Goal>,
    pub days_per_week: u8,
    pub equipment: EquipmentTier,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProgram {
    pub workouts: Vec<ProgramWorkout>,
    pub scheme: Scheme,
}

/// Build a complete weekly program from the catalog.
pub fn generate_program<R: Rng + ?Sized>(
    request: &ProgramRequest,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<GeneratedProgram, GenerateError> {
    let layout = split_layout(request.days_per_week)?;
    let scheme = Scheme::for_goal(request.goal);
    let workouts = layout
        .iter()
        .map(|split_day| build_workout(split_day, &scheme, request, catalog, rng))
        .collect::<Vec<_>>();

    info!(
        "generated {}-day program with {} exercises",
        workouts.len(),
        workouts.iter().map(|w| w.exercises.len()).sum::<usize>()
    );

    Ok(GeneratedProgram { workouts, scheme })
}

/// Build a fresh workout for a single day of the split, e.g. to replace one the user dislikes.
pub fn generate_day<R: Rng + ?Sized>(
    index: usize,
    request: &ProgramRequest,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Option<ProgramWorkout>, GenerateError> {
    let layout = split_layout(request.days_per_week)?;
    let scheme = Scheme::for_goal(request.goal);
    Ok(layout
        .get(index)
        .map(|split_day| build_workout(split_day, &scheme, request, catalog, rng)))
}

fn build_workout<R: Rng + ?Sized>(
    split_day: &SplitDay,
    scheme: &Scheme,
    request: &ProgramRequest,
    catalog: &Catalog,
    rng: &mut R,
) -> ProgramWorkout {
    let entries = pick_exercises(
        split_day.focus.muscles(),
        request.equipment,
        catalog,
        target_exercise_count(request.duration_minutes),
        rng,
    );
    debug!("{}: {} exercises", split_day.name, entries.len());
    ProgramWorkout::new(split_day.name, scheme.clone(), &entries)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;
    use crate::fits_equipment;

    fn request(days_per_week: u8) -> ProgramRequest {
        ProgramRequest {
            goal: Some(Goal::BuildMuscle),
            days_per_week,
            equipment: EquipmentTier::Gym,
            duration_minutes: 60,
        }
    }

    #[rstest]
    #[case(2, &["Full Body A", "Full Body B"])]
    #[case(3, &["Push", "Pull", "Legs"])]
    #[case(4, &["Upper A", "Lower A", "Upper B", "Lower B"])]
    #[case(5, &["Push", "Pull", "Legs", "Upper", "Lower"])]
    #[case(6, &["Push A", "Pull A", "Legs A", "Push B", "Pull B", "Legs B"])]
    fn test_generate_program_layout(#[case] days_per_week: u8, #[case] names: &[&str]) {
        let program = generate_program(
            &request(days_per_week),
            Catalog::builtin(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(
            program.workouts.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            names
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(u8::MAX)]
    fn test_generate_program_unsupported_days(#[case] days_per_week: u8) {
        assert_eq!(
            generate_program(
                &request(days_per_week),
                Catalog::builtin(),
                &mut StdRng::seed_from_u64(1),
            ),
            Err(GenerateError::UnsupportedDaysPerWeek(days_per_week))
        );
    }

    #[rstest]
    #[case(Some(Goal::GetStronger), "4x3-5")]
    #[case(None, "3x10")]
    fn test_generate_program_scheme(#[case] goal: Option<Goal>, #[case] expected: &str) {
        let program = generate_program(
            &ProgramRequest {
                goal,
                ..request(3)
            },
            Catalog::builtin(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(program.scheme, Scheme::new(expected));
        assert!(program.workouts.iter().all(|w| w.scheme == program.scheme));
    }

    #[rstest]
    #[case(EquipmentTier::Home, 30)]
    #[case(EquipmentTier::Basic, 45)]
    #[case(EquipmentTier::Gym, 60)]
    #[case(EquipmentTier::Gym, 120)]
    fn test_generate_program_invariants(
        #[case] equipment: EquipmentTier,
        #[case] duration_minutes: u32,
    ) {
        let catalog = Catalog::builtin();
        for days_per_week in 2..=6 {
            for seed in 0..10 {
                let program = generate_program(
                    &ProgramRequest {
                        goal: None,
                        days_per_week,
                        equipment,
                        duration_minutes,
                    },
                    catalog,
                    &mut StdRng::seed_from_u64(seed),
                )
                .unwrap();

                assert_eq!(program.workouts.len(), usize::from(days_per_week));
                for workout in &program.workouts {
                    assert!(workout.exercises.len() <= target_exercise_count(duration_minutes));
                    let ids = workout.catalog_ids().collect::<Vec<_>>();
                    assert_eq!(ids.len(), workout.exercises.len());
                    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
                    assert!(
                        ids.iter()
                            .filter_map(|id| catalog.get(id))
                            .all(|e| fits_equipment(e, equipment))
                    );
                }
            }
        }
    }

    #[test]
    fn test_generate_day() {
        let workout = generate_day(
            2,
            &request(3),
            Catalog::builtin(),
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap()
        .unwrap();

        assert_eq!(workout.name, "Legs");
        assert!(
            workout
                .catalog_ids()
                .filter_map(|id| Catalog::builtin().get(id))
                .all(|e| e.targets_any(LEGS))
        );
        assert_eq!(
            generate_day(3, &request(3), Catalog::builtin(), &mut StdRng::seed_from_u64(5)),
            Ok(None)
        );
    }

    #[test]
    fn test_focus_muscles() {
        assert_eq!(Focus::Upper.muscles().len(), PUSH.len() + PULL.len());
        assert_eq!(Focus::Lower.muscles(), Focus::Legs.muscles());
        assert_eq!(Focus::FullBody.muscles(), FULL_BODY);
    }
}
