use std::slice::Iter;

use derive_more::{AsRef, Display};

use crate::{Property, PropertyError};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Goal {
    BuildMuscle,
    GetStronger,
    LoseFat,
    #[default]
    GeneralFitness,
    SportPerformance,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOAL: [Goal; 5] = [
            Goal::BuildMuscle,
            Goal::GetStronger,
            Goal::LoseFat,
            Goal::GeneralFitness,
            Goal::SportPerformance,
        ];
        GOAL.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::BuildMuscle => "Build Muscle",
            Goal::GetStronger => "Get Stronger",
            Goal::LoseFat => "Lose Fat",
            Goal::GeneralFitness => "General Fitness",
            Goal::SportPerformance => "Sport Performance",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Goal::iter()
            .find(|g| g.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| PropertyError::Unknown {
                kind: "goal",
                value: value.to_string(),
            })
    }
}

/// Sets × reps (or sets × duration) prescription such as `4x8-12`.
#[derive(AsRef, Display, Debug, Clone, PartialEq, Eq)]
pub struct Scheme(String);

impl Scheme {
    pub const DEFAULT: &'static str = "3x10";

    #[must_use]
    pub fn new(scheme: &str) -> Self {
        Self(scheme.trim().to_string())
    }

    /// Scheme prescribed for a goal. Unknown goals get [`Scheme::DEFAULT`].
    #[must_use]
    pub fn for_goal(goal: Option<Goal>) -> Self {
        Self::new(match goal {
            Some(Goal::BuildMuscle) => "4x8-12",
            Some(Goal::GetStronger) => "4x3-5",
            Some(Goal::LoseFat) => "3x15-20",
            Some(Goal::GeneralFitness) => "3x10-12",
            Some(Goal::SportPerformance) => "3x6-8",
            None => Self::DEFAULT,
        })
    }

    #[must_use]
    pub fn sets_reps(&self) -> Option<SetsReps> {
        parse_scheme(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetsReps {
    pub sets: u32,
    /// Lower bound of the rep range.
    pub reps: u32,
}

#[must_use]
pub fn parse_scheme(scheme: &str) -> Option<SetsReps> {
    let (sets, reps) = scheme.trim().split_once(['x', 'X'])?;
    let sets = sets.trim().parse::<u32>().ok()?;
    let reps = reps
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse::<u32>()
        .ok()?;
    Some(SetsReps { sets, reps })
}
