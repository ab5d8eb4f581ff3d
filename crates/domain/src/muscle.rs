use std::slice::Iter;

use crate::Property;

/// Coarse muscle group used for coverage accounting.
///
/// The declaration order is the canonical iteration order; ties between equally stale muscles
/// are resolved by it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    AnteriorDelt,
    LateralDelt,
    PosteriorDelt,
    Chest,
    Triceps,
    Back,
    Biceps,
    Forearms,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Abs,
    Obliques,
}

impl MuscleGroup {
    /// Tag as stored in catalog data and saved workouts.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            MuscleGroup::AnteriorDelt => "ANTERIOR_DELT",
            MuscleGroup::LateralDelt => "LATERAL_DELT",
            MuscleGroup::PosteriorDelt => "POSTERIOR_DELT",
            MuscleGroup::Chest => "CHEST",
            MuscleGroup::Triceps => "TRICEPS",
            MuscleGroup::Back => "BACK",
            MuscleGroup::Biceps => "BICEPS",
            MuscleGroup::Forearms => "FOREARMS",
            MuscleGroup::Quads => "QUADS",
            MuscleGroup::Hamstrings => "HAMSTRINGS",
            MuscleGroup::Glutes => "GLUTES",
            MuscleGroup::Calves => "CALVES",
            MuscleGroup::Abs => "ABS",
            MuscleGroup::Obliques => "OBLIQUES",
        }
    }
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 14] = [
            MuscleGroup::AnteriorDelt,
            MuscleGroup::LateralDelt,
            MuscleGroup::PosteriorDelt,
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Forearms,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::Abs,
            MuscleGroup::Obliques,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::AnteriorDelt => "Front Delts",
            MuscleGroup::LateralDelt => "Side Delts",
            MuscleGroup::PosteriorDelt => "Rear Delts",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Obliques => "Obliques",
        }
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let tag = value.trim().to_ascii_uppercase();
        MuscleGroup::iter()
            .find(|m| m.tag() == tag)
            .copied()
            .ok_or_else(|| MuscleGroupError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MuscleGroupError {
    #[error("unknown muscle group {0:?}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_muscle_group_name() {
        let mut names = HashSet::new();

        for muscle in MuscleGroup::iter() {
            let name = muscle.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_muscle_group_iter_is_sorted() {
        let muscles = MuscleGroup::iter().copied().collect::<Vec<_>>();
        let mut sorted = muscles.clone();
        sorted.sort();
        assert_eq!(muscles, sorted);
    }

    #[test]
    fn test_muscle_group_try_from_tag() {
        for muscle in MuscleGroup::iter() {
            assert_eq!(MuscleGroup::try_from(muscle.tag()), Ok(*muscle));
        }
    }

    #[rstest]
    #[case("chest", Ok(MuscleGroup::Chest))]
    #[case(" posterior_delt ", Ok(MuscleGroup::PosteriorDelt))]
    #[case("NECK", Err(MuscleGroupError::Invalid("NECK".to_string())))]
    #[case("", Err(MuscleGroupError::Invalid(String::new())))]
    fn test_muscle_group_try_from(
        #[case] value: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(MuscleGroup::try_from(value), expected);
    }
}
