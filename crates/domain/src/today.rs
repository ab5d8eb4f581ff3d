use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use log::debug;
use rand::Rng;

use crate::{
    Catalog, DaysAgo, EquipmentTier, Goal, MuscleGroup, Program, ProgramWorkout, Property, Scheme,
    TrainingLog, analyze_muscle_recency, days_since,
    program::{FULL_BODY, LEGS, PULL, PUSH},
    pick_exercises, target_exercise_count,
};

pub const TODAY_DURATION_MINUTES: u32 = 60;
/// Muscle groups trained fewer days ago are considered not yet recovered.
pub const MIN_REST_DAYS: i64 = 2;
pub const MAX_TARGET_MUSCLES: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct TodayRequest<'a> {
    pub log: &'a TrainingLog,
    pub program: &'a Program,
    pub equipment: EquipmentTier,
    pub goal: Option<Goal>,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayWorkout {
    pub workout: ProgramWorkout,
    pub target_muscles: Vec<MuscleGroup>,
    pub note: String,
}

/// Build a single workout for today favoring the muscle groups which were not trained recently.
pub fn generate_today_workout<R: Rng + ?Sized>(
    request: &TodayRequest,
    catalog: &Catalog,
    rng: &mut R,
) -> TodayWorkout {
    let recency = analyze_muscle_recency(request.log, request.program.instances(), catalog);
    let days_ago = days_since(&recency, request.today);
    let stale = select_target_muscles(&days_ago);
    let target_muscles = if stale.is_empty() {
        debug!("all muscle groups trained recently, falling back to full body");
        FULL_BODY.to_vec()
    } else {
        stale
    };

    let entries = pick_exercises(
        &target_muscles,
        request.equipment,
        catalog,
        target_exercise_count(TODAY_DURATION_MINUTES),
        rng,
    );
    let workout = ProgramWorkout::new(
        workout_name(&target_muscles),
        Scheme::for_goal(request.goal),
        &entries,
    );
    let note = note(&target_muscles, &days_ago);

    debug!(
        "today's workout {:?} with {} exercises",
        workout.name,
        workout.exercises.len()
    );

    TodayWorkout {
        workout,
        target_muscles,
        note,
    }
}

/// Stalest muscle groups which have rested long enough, at most [`MAX_TARGET_MUSCLES`].
///
/// Muscle groups with the same number of rest days keep their relative order.
#[must_use]
pub fn select_target_muscles(days_ago: &BTreeMap<MuscleGroup, DaysAgo>) -> Vec<MuscleGroup> {
    let mut rested = days_ago
        .iter()
        .filter(|(_, d)| **d >= DaysAgo::Days(MIN_REST_DAYS))
        .map(|(m, d)| (*m, *d))
        .collect::<Vec<_>>();
    rested.sort_by(|(_, a), (_, b)| b.cmp(a));
    rested
        .into_iter()
        .take(MAX_TARGET_MUSCLES)
        .map(|(m, _)| m)
        .collect()
}

#[must_use]
pub fn workout_name(target_muscles: &[MuscleGroup]) -> String {
    let targets = target_muscles.iter().copied().collect::<BTreeSet<_>>();
    let is = |muscles: &[MuscleGroup]| targets == muscles.iter().copied().collect::<BTreeSet<_>>();
    let any_of = |muscles: &[MuscleGroup]| muscles.iter().any(|m| targets.contains(m));

    if is(PUSH) {
        "Push".to_string()
    } else if is(PULL) {
        "Pull".to_string()
    } else if is(LEGS) {
        "Legs".to_string()
    } else if is(FULL_BODY) {
        "Full Body".to_string()
    } else if any_of(PUSH) && any_of(PULL) {
        "Upper Body".to_string()
    } else if targets.len() >= 5 {
        "Full Body".to_string()
    } else {
        target_muscles
            .iter()
            .take(MAX_TARGET_MUSCLES)
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

fn note(target_muscles: &[MuscleGroup], days_ago: &BTreeMap<MuscleGroup, DaysAgo>) -> String {
    let rested = target_muscles
        .iter()
        .all(|m| days_ago.get(m).is_some_and(|d| *d >= DaysAgo::Days(MIN_REST_DAYS)));
    let labels = target_muscles
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ");

    if rested {
        let details = target_muscles
            .iter()
            .filter_map(|m| days_ago.get(m).map(|d| format!("{}: {d}", m.name())))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Targeting {labels} because they haven't been worked recently ({details}).")
    } else {
        format!(
            "Every muscle group was worked within the last day, so today is a full body session targeting {labels}."
        )
    }
}
