use std::time::Duration;

use repset_domain::{EquipmentTier, Goal, ProgramRequest, ReadError, WriteError};

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, ReadError>;
    fn write_settings(&self, settings: &Settings) -> Result<(), WriteError>;
}

/// Generation preferences of the user.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "GoalDef")]
    pub goal: Goal,
    pub days_per_week: u8,
    #[serde(with = "EquipmentTierDef")]
    pub equipment: EquipmentTier,
    pub duration_minutes: u32,
    pub use_assistant: bool,
    pub assistant_timeout_seconds: u64,
}

impl Settings {
    #[must_use]
    pub fn program_request(&self) -> ProgramRequest {
        ProgramRequest {
            goal: Some(self.goal),
            days_per_week: self.days_per_week,
            equipment: self.equipment,
            duration_minutes: self.duration_minutes,
        }
    }

    #[must_use]
    pub fn assistant_timeout(&self) -> Duration {
        Duration::from_secs(self.assistant_timeout_seconds)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            days_per_week: 3,
            equipment: EquipmentTier::default(),
            duration_minutes: 60,
            use_assistant: true,
            assistant_timeout_seconds: 30,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "Goal", rename_all = "snake_case")]
enum GoalDef {
    BuildMuscle,
    GetStronger,
    LoseFat,
    GeneralFitness,
    SportPerformance,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "EquipmentTier", rename_all = "snake_case")]
enum EquipmentTierDef {
    Home,
    Basic,
    Gym,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_program_request() {
        assert_eq!(
            Settings::default().program_request(),
            ProgramRequest {
                goal: Some(Goal::GeneralFitness),
                days_per_week: 3,
                equipment: EquipmentTier::Gym,
                duration_minutes: 60,
            }
        );
    }

    #[test]
    fn test_serialize() {
        let settings = Settings {
            goal: Goal::BuildMuscle,
            equipment: EquipmentTier::Home,
            ..Settings::default()
        };

        assert_eq!(
            serde_json::to_value(settings).unwrap(),
            serde_json::json!({
                "goal": "build_muscle",
                "days_per_week": 3,
                "equipment": "home",
                "duration_minutes": 60,
                "use_assistant": true,
                "assistant_timeout_seconds": 30,
            })
        );
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"goal": "lose_fat", "days_per_week": 5}"#).unwrap();

        assert_eq!(
            settings,
            Settings {
                goal: Goal::LoseFat,
                days_per_week: 5,
                ..Settings::default()
            }
        );
    }
}
