use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use chrono::NaiveDate;
use log::debug;

use crate::{Catalog, CatalogEntry, MuscleGroup, ProgramExercise, Property, TrainingLog};

/// Number of most recent log dates taken into account.
pub const RECENCY_WINDOW: usize = 14;

/// Most recent date each muscle group was trained, `None` if not within the window.
pub type MuscleRecency = BTreeMap<MuscleGroup, Option<NaiveDate>>;

/// Determine when each muscle group was last trained.
///
/// Logged exercises are resolved to catalog entries via the exercise instances of the user's
/// program. Keys which are not known instances but match a catalog id directly are resolved as
/// well. Anything else is ignored. Only primary muscles count.
pub fn analyze_muscle_recency<'a>(
    log: &TrainingLog,
    instances: impl IntoIterator<Item = &'a ProgramExercise>,
    catalog: &Catalog,
) -> MuscleRecency {
    let mut recency: MuscleRecency = MuscleGroup::iter().map(|m| (*m, None)).collect();

    let lookup: HashMap<&str, &CatalogEntry> = instances
        .into_iter()
        .filter_map(|instance| {
            let entry = catalog.get(instance.catalog_id.as_ref()?)?;
            Some((instance.id.as_str(), entry))
        })
        .collect();

    for date in log.recent_dates(RECENCY_WINDOW) {
        let Some(day) = log.day(date) else {
            continue;
        };
        for id in day.keys() {
            let Some(entry) = lookup.get(id.as_str()).copied().or_else(|| catalog.get(id))
            else {
                continue;
            };
            for muscle in &entry.muscles.primary {
                recency.entry(*muscle).or_insert(None).get_or_insert(date);
            }
        }
    }

    debug!(
        "muscle recency: {} of {} muscle groups trained recently",
        recency.values().filter(|d| d.is_some()).count(),
        recency.len()
    );

    recency
}

/// Elapsed days since a muscle group was trained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DaysAgo {
    Days(i64),
    Never,
}

impl fmt::Display for DaysAgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysAgo::Days(0) => write!(f, "today"),
            DaysAgo::Days(1) => write!(f, "yesterday"),
            DaysAgo::Days(days) => write!(f, "{days} days ago"),
            DaysAgo::Never => write!(f, "not in the last {RECENCY_WINDOW} sessions"),
        }
    }
}

#[must_use]
pub fn days_since(recency: &MuscleRecency, today: NaiveDate) -> BTreeMap<MuscleGroup, DaysAgo> {
    recency
        .iter()
        .map(|(muscle, date)| {
            let days_ago = match date {
                Some(date) => DaysAgo::Days((today - *date).num_days()),
                None => DaysAgo::Never,
            };
            (*muscle, days_ago)
        })
        .collect()
}

/// Per-muscle training history in a compact, human-readable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySummary(BTreeMap<MuscleGroup, DaysAgo>);

impl HistorySummary {
    #[must_use]
    pub fn new(recency: &MuscleRecency, today: NaiveDate) -> Self {
        Self(days_since(recency, today))
    }

    #[must_use]
    pub fn days_ago(&self, muscle: MuscleGroup) -> Option<DaysAgo> {
        self.0.get(&muscle).copied()
    }
}

impl fmt::Display for HistorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (muscle, days_ago) in &self.0 {
            writeln!(f, "{}: {days_ago}", muscle.name())?;
        }
        Ok(())
    }
}
