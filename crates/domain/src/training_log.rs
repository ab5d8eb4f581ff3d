use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{InstanceID, ReadError, WriteError};

pub trait TrainingLogRepository {
    fn read_training_log(&self) -> Result<TrainingLog, ReadError>;
    fn write_training_log(&self, log: &TrainingLog) -> Result<(), WriteError>;
}

/// Logged sets per date and exercise instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingLog(BTreeMap<NaiveDate, BTreeMap<InstanceID, LoggedExercise>>);

impl TrainingLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, id: InstanceID, exercise: LoggedExercise) {
        self.0.entry(date).or_default().insert(id, exercise);
    }

    pub fn record(&mut self, date: NaiveDate, id: InstanceID, set: LoggedSet) {
        self.0
            .entry(date)
            .or_default()
            .entry(id)
            .or_default()
            .sets
            .push(set);
    }

    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&BTreeMap<InstanceID, LoggedExercise>> {
        self.0.get(&date)
    }

    /// The `n` most recent dates with log entries, most recent first.
    #[must_use]
    pub fn recent_dates(&self, n: usize) -> Vec<NaiveDate> {
        self.0.keys().rev().take(n).copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &BTreeMap<InstanceID, LoggedExercise>)> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, InstanceID, LoggedExercise)> for TrainingLog {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, InstanceID, LoggedExercise)>>(iter: T) -> Self {
        let mut log = TrainingLog::new();
        for (date, id, exercise) in iter {
            log.insert(date, id, exercise);
        }
        log
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggedExercise {
    pub sets: Vec<LoggedSet>,
}

impl LoggedExercise {
    pub fn completed_sets(&self) -> impl Iterator<Item = &LoggedSet> {
        self.sets.iter().filter(|s| s.completed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoggedSet {
    pub reps: u32,
    pub weight: f32,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_recent_dates() {
        let log = (1..=20)
            .map(|day| (date(day), InstanceID::from("a"), LoggedExercise::default()))
            .collect::<TrainingLog>();

        assert_eq!(
            log.recent_dates(3),
            vec![date(20), date(19), date(18)]
        );
        assert_eq!(log.recent_dates(30).len(), 20);
    }

    #[test]
    fn test_record() {
        let mut log = TrainingLog::new();
        let set = LoggedSet {
            reps: 10,
            weight: 20.0,
            completed: true,
        };

        log.record(date(1), "a".into(), set);
        log.record(
            date(1),
            "a".into(),
            LoggedSet {
                completed: false,
                ..set
            },
        );

        let day = log.day(date(1)).unwrap();
        assert_eq!(day["a"].sets.len(), 2);
        assert_eq!(day["a"].completed_sets().count(), 1);
        assert!(log.day(date(2)).is_none());
    }

    #[test]
    fn test_empty() {
        assert!(TrainingLog::new().is_empty());
        assert!(TrainingLog::new().recent_dates(14).is_empty());
    }
}
