use std::collections::HashSet;

use log::debug;
use rand::{Rng, seq::SliceRandom};

use crate::{Catalog, CatalogEntry, EquipmentTier, MuscleGroup, fits_equipment};

pub const MIN_EXERCISES: usize = 3;
pub const MAX_EXERCISES: usize = 10;
pub const MINUTES_PER_EXERCISE: u32 = 7;

/// Number of exercises fitting into a session of the given length.
#[must_use]
pub fn target_exercise_count(duration_minutes: u32) -> usize {
    let rounded = duration_minutes
        .saturating_mul(2)
        .saturating_add(MINUTES_PER_EXERCISE)
        / (2 * MINUTES_PER_EXERCISE);
    usize::try_from(rounded)
        .unwrap_or(MAX_EXERCISES)
        .clamp(MIN_EXERCISES, MAX_EXERCISES)
}

/// Pick up to `target_count` distinct exercises covering `target_muscles`.
///
/// Every target muscle first gets a compound anchor, muscles still uncovered afterwards get any
/// exercise working them, and the remaining slots are filled with exercises hitting at least one
/// target muscle. Candidates are shuffled within each phase. The result is shorter than
/// `target_count` if the catalog does not offer enough suitable exercises.
pub fn pick_exercises<'a, R: Rng + ?Sized>(
    target_muscles: &[MuscleGroup],
    equipment: EquipmentTier,
    catalog: &'a Catalog,
    target_count: usize,
    rng: &mut R,
) -> Vec<&'a CatalogEntry> {
    let available = catalog
        .iter()
        .filter(|e| fits_equipment(e, equipment))
        .collect::<Vec<_>>();
    let mut picked: Vec<&'a CatalogEntry> = vec![];
    let mut picked_ids: HashSet<&'a str> = HashSet::new();

    for muscle in target_muscles {
        let mut candidates = available
            .iter()
            .copied()
            .filter(|e| !picked_ids.contains(e.id.as_str()) && e.targets(*muscle) && e.is_compound())
            .collect::<Vec<_>>();
        candidates.shuffle(rng);
        if let Some(anchor) = candidates.first().copied() {
            picked_ids.insert(anchor.id.as_str());
            picked.push(anchor);
        }
    }

    let uncovered = target_muscles
        .iter()
        .filter(|m| !picked.iter().any(|e| e.targets(**m)))
        .copied()
        .collect::<Vec<_>>();

    for muscle in uncovered {
        if picked.len() >= target_count {
            break;
        }
        let mut candidates = available
            .iter()
            .copied()
            .filter(|e| !picked_ids.contains(e.id.as_str()) && e.targets(muscle))
            .collect::<Vec<_>>();
        candidates.shuffle(rng);
        if let Some(entry) = candidates.first().copied() {
            picked_ids.insert(entry.id.as_str());
            picked.push(entry);
        }
    }

    if picked.len() < target_count {
        let mut candidates = available
            .iter()
            .copied()
            .filter(|e| !picked_ids.contains(e.id.as_str()) && e.targets_any(target_muscles))
            .collect::<Vec<_>>();
        candidates.shuffle(rng);
        for entry in candidates {
            if picked.len() >= target_count {
                break;
            }
            picked_ids.insert(entry.id.as_str());
            picked.push(entry);
        }
    }

    picked.truncate(target_count);

    debug!(
        "picked {} of {target_count} exercises for {} muscle groups",
        picked.len(),
        target_muscles.len()
    );

    picked
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;
    use crate::{Equipment, Movement, Muscles, Tag, Unit};

    const PUSH: &[MuscleGroup] = &[
        MuscleGroup::Chest,
        MuscleGroup::AnteriorDelt,
        MuscleGroup::LateralDelt,
        MuscleGroup::Triceps,
    ];

    fn entry(id: &str, primary: &[MuscleGroup], tags: &[Tag], equipment: &[Equipment]) -> CatalogEntry {
        CatalogEntry {
            id: id.into(),
            name: id.to_string(),
            default_unit: Unit::Reps,
            muscles: Muscles {
                primary: primary.iter().copied().collect(),
                secondary: BTreeSet::new(),
            },
            equipment: equipment.iter().copied().collect(),
            tags: tags.iter().copied().collect(),
            movement: Movement::Push,
            aliases: vec![],
        }
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.to_string()).collect()
    }

    #[rstest]
    #[case(0, 3)]
    #[case(15, 3)]
    #[case(24, 3)]
    #[case(25, 4)]
    #[case(30, 4)]
    #[case(45, 6)]
    #[case(60, 9)]
    #[case(70, 10)]
    #[case(90, 10)]
    #[case(u32::MAX, 10)]
    fn test_target_exercise_count(#[case] duration: u32, #[case] expected: usize) {
        assert_eq!(target_exercise_count(duration), expected);
    }

    #[test]
    fn test_compound_anchor_first() {
        let catalog = Catalog::new([
            entry("fly", &[MuscleGroup::Chest], &[Tag::Isolation], &[]),
            entry("press", &[MuscleGroup::Chest], &[Tag::Compound], &[]),
            entry("row", &[MuscleGroup::Back], &[Tag::Compound], &[]),
        ])
        .unwrap();

        for seed in 0..20 {
            let picked = pick_exercises(
                &[MuscleGroup::Chest],
                EquipmentTier::Gym,
                &catalog,
                1,
                &mut StdRng::seed_from_u64(seed),
            );
            assert_eq!(ids(&picked), vec!["press"]);
        }
    }

    #[test]
    fn test_isolation_backfill_for_uncovered_muscle() {
        let catalog = Catalog::new([
            entry("press", &[MuscleGroup::Chest], &[Tag::Compound], &[]),
            entry("curl", &[MuscleGroup::Biceps], &[Tag::Isolation], &[]),
            entry("extension", &[MuscleGroup::Triceps], &[Tag::Isolation], &[]),
        ])
        .unwrap();

        let picked = pick_exercises(
            &[MuscleGroup::Chest, MuscleGroup::Biceps],
            EquipmentTier::Gym,
            &catalog,
            2,
            &mut StdRng::seed_from_u64(7),
        );

        assert_eq!(ids(&picked), vec!["press", "curl"]);
    }

    #[test]
    fn test_fill_uses_any_overlap() {
        let catalog = Catalog::new([
            entry("press", &[MuscleGroup::Chest], &[Tag::Compound], &[]),
            entry("dip", &[MuscleGroup::Chest, MuscleGroup::Triceps], &[Tag::Compound], &[]),
            entry("fly", &[MuscleGroup::Chest], &[Tag::Isolation], &[]),
            entry("squat", &[MuscleGroup::Quads], &[Tag::Compound], &[]),
        ])
        .unwrap();

        let picked = pick_exercises(
            &[MuscleGroup::Chest],
            EquipmentTier::Gym,
            &catalog,
            5,
            &mut StdRng::seed_from_u64(3),
        );

        assert_eq!(
            ids(&picked).into_iter().collect::<BTreeSet<_>>(),
            BTreeSet::from(["dip".to_string(), "fly".to_string(), "press".to_string()])
        );
    }

    #[test]
    fn test_short_list_when_catalog_too_small() {
        let catalog = Catalog::new([entry("press", &[MuscleGroup::Chest], &[Tag::Compound], &[])]).unwrap();

        let picked = pick_exercises(
            PUSH,
            EquipmentTier::Gym,
            &catalog,
            6,
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(ids(&picked), vec!["press"]);
    }

    #[test]
    fn test_equipment_filter_applies_to_all_phases() {
        let catalog = Catalog::new([
            entry("bench", &[MuscleGroup::Chest], &[Tag::Compound], &[Equipment::Barbell]),
            entry("push_up", &[MuscleGroup::Chest], &[Tag::Compound], &[Equipment::Bodyweight]),
            entry("cable_fly", &[MuscleGroup::Chest], &[Tag::Isolation], &[Equipment::Cable]),
        ])
        .unwrap();

        let picked = pick_exercises(
            &[MuscleGroup::Chest],
            EquipmentTier::Home,
            &catalog,
            3,
            &mut StdRng::seed_from_u64(1),
        );

        assert_eq!(ids(&picked), vec!["push_up"]);
    }

    #[test]
    fn test_truncated_to_target_count() {
        let picked = pick_exercises(
            &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Quads,
                MuscleGroup::Hamstrings,
                MuscleGroup::Glutes,
                MuscleGroup::AnteriorDelt,
            ],
            EquipmentTier::Gym,
            Catalog::builtin(),
            3,
            &mut StdRng::seed_from_u64(11),
        );

        assert_eq!(picked.len(), 3);
        assert!(picked[0].targets(MuscleGroup::Chest) && picked[0].is_compound());
    }

    #[test]
    fn test_zero_target_count() {
        let picked = pick_exercises(
            PUSH,
            EquipmentTier::Gym,
            Catalog::builtin(),
            0,
            &mut StdRng::seed_from_u64(0),
        );

        assert!(picked.is_empty());
    }

    #[rstest]
    #[case(EquipmentTier::Home)]
    #[case(EquipmentTier::Basic)]
    #[case(EquipmentTier::Gym)]
    fn test_invariants_hold_for_builtin_catalog(#[case] equipment: EquipmentTier) {
        for seed in 0..50 {
            let target = target_exercise_count(60);
            let picked = pick_exercises(
                PUSH,
                equipment,
                Catalog::builtin(),
                target,
                &mut StdRng::seed_from_u64(seed),
            );

            let unique = picked.iter().map(|e| e.id.as_str()).collect::<HashSet<_>>();
            assert_eq!(unique.len(), picked.len());
            assert!(picked.len() <= target);
            assert!(picked.len() >= MIN_EXERCISES);
            assert!(picked.iter().all(|e| fits_equipment(e, equipment)));
            assert!(picked.iter().all(|e| e.targets_any(PUSH)));
        }
    }

    #[test]
    fn test_same_seed_same_selection() {
        let pick = |seed| {
            ids(&pick_exercises(
                PUSH,
                EquipmentTier::Gym,
                Catalog::builtin(),
                9,
                &mut StdRng::seed_from_u64(seed),
            ))
        };

        assert_eq!(pick(42), pick(42));
    }
}
