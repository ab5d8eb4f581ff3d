use std::slice::Iter;

use crate::{CatalogEntry, Equipment, Property, PropertyError, exercise::parse};

/// Coarse equipment availability profile.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EquipmentTier {
    Home,
    Basic,
    #[default]
    Gym,
}

impl EquipmentTier {
    /// Equipment usable in this tier, or `None` if nothing is filtered.
    #[must_use]
    pub fn allowed(self) -> Option<&'static [Equipment]> {
        match self {
            EquipmentTier::Home => Some(&[Equipment::Bodyweight]),
            EquipmentTier::Basic => Some(&[
                Equipment::Bodyweight,
                Equipment::Dumbbell,
                Equipment::Kettlebell,
                Equipment::PullUpBar,
                Equipment::ResistanceBand,
            ]),
            EquipmentTier::Gym => None,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            EquipmentTier::Home => "home",
            EquipmentTier::Basic => "basic",
            EquipmentTier::Gym => "gym",
        }
    }
}

impl Property for EquipmentTier {
    fn iter() -> Iter<'static, EquipmentTier> {
        static EQUIPMENT_TIER: [EquipmentTier; 3] =
            [EquipmentTier::Home, EquipmentTier::Basic, EquipmentTier::Gym];
        EQUIPMENT_TIER.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EquipmentTier::Home => "Home (bodyweight)",
            EquipmentTier::Basic => "Basic (dumbbells, bands, bar)",
            EquipmentTier::Gym => "Full Gym",
        }
    }
}

impl TryFrom<&str> for EquipmentTier {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value, "equipment tier", EquipmentTier::tag)
    }
}

/// Whether `entry` can be performed with the equipment of `tier`.
///
/// Entries without equipment are always available. Otherwise at least one listed piece of
/// equipment has to be part of the tier.
#[must_use]
pub fn fits_equipment(entry: &CatalogEntry, tier: EquipmentTier) -> bool {
    let Some(allowed) = tier.allowed() else {
        return true;
    };

    entry.equipment.is_empty() || entry.equipment.iter().any(|e| allowed.contains(e))
}
