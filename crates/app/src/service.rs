use std::{
    collections::HashSet,
    sync::{Mutex, PoisonError},
};

use chrono::NaiveDate;
use log::{debug, error, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use repset_domain::{
    Catalog, CatalogEntry, CatalogID, EquipmentTier, GenerateError, GeneratedProgram, Goal,
    HistorySummary, InstanceID, LoggedSet, MuscleGroup, Program, ProgramRepository,
    ProgramRequest, ProgramWorkout, ReadError, Scheme, StorageError, TodayRequest, TodayWorkout,
    TrainingLog, TrainingLogRepository, WriteError, analyze_muscle_recency, fits_equipment,
    generate_day, parse_scheme, split_layout, target_exercise_count,
    today::TODAY_DURATION_MINUTES,
};

use crate::{Settings, SettingsRepository};

/// External, non-deterministic generator which may produce programs and workouts.
#[allow(async_fn_in_trait)]
pub trait ProgramAssistant {
    async fn generate_program(
        &self,
        prompt: &ProgramPrompt<'_>,
    ) -> Result<AssistedProgram, AssistError>;
    async fn generate_today_workout(
        &self,
        prompt: &TodayPrompt<'_>,
    ) -> Result<AssistedToday, AssistError>;
}

/// Assistant used when none is configured.
pub struct NoAssistant;

impl ProgramAssistant for NoAssistant {
    async fn generate_program(&self, _: &ProgramPrompt<'_>) -> Result<AssistedProgram, AssistError> {
        Err(AssistError::Unavailable)
    }

    async fn generate_today_workout(&self, _: &TodayPrompt<'_>) -> Result<AssistedToday, AssistError> {
        Err(AssistError::Unavailable)
    }
}

#[derive(Debug)]
pub struct ProgramPrompt<'a> {
    pub request: ProgramRequest,
    /// Exercises usable with the requested equipment.
    pub exercises: Vec<&'a CatalogEntry>,
    pub history: HistorySummary,
}

#[derive(Debug)]
pub struct TodayPrompt<'a> {
    pub goal: Goal,
    pub equipment: EquipmentTier,
    pub today: NaiveDate,
    pub exercises: Vec<&'a CatalogEntry>,
    pub history: HistorySummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistedProgram {
    pub workouts: Vec<AssistedWorkout>,
    pub scheme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistedWorkout {
    pub name: String,
    pub exercises: Vec<CatalogID>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistedToday {
    pub workout: AssistedWorkout,
    pub target_muscles: Vec<MuscleGroup>,
    pub note: String,
}

#[derive(thiserror::Error, Debug)]
pub enum AssistError {
    #[error("assistant unavailable")]
    Unavailable,
    #[error("assistant timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("invalid response: {0}")]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {expected} workouts, got {actual}")]
    WorkoutCount { expected: usize, actual: usize },
    #[error("{workout:?} has {count} exercises (expected 1 to {max})")]
    ExerciseCount {
        workout: String,
        count: usize,
        max: usize,
    },
    #[error("unknown exercise {0:?}")]
    UnknownExercise(String),
    #[error("exercise {0:?} requires unavailable equipment")]
    UnavailableEquipment(String),
    #[error("exercise {0:?} occurs more than once")]
    DuplicateExercise(String),
    #[error("invalid scheme {0:?}")]
    InvalidScheme(String),
    #[error("no target muscles")]
    NoTargetMuscles,
}

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Assistant,
    Generator,
}

/// Generation result together with a user-visible warning if the assistant could not be used.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub value: T,
    pub source: Source,
    pub warning: Option<String>,
}

pub struct Service<R, A = NoAssistant> {
    repository: R,
    assistant: Option<A>,
    catalog: Catalog,
    rng: Mutex<StdRng>,
}

macro_rules! log_on_error {
    ($result: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $result;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Service<R, NoAssistant>
where
    R: TrainingLogRepository + ProgramRepository + SettingsRepository,
{
    pub fn new(repository: R, catalog: Catalog) -> Self {
        Self {
            repository,
            assistant: None,
            catalog,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl<R, A> Service<R, A>
where
    R: TrainingLogRepository + ProgramRepository + SettingsRepository,
    A: ProgramAssistant,
{
    pub fn with_assistant(repository: R, catalog: Catalog, assistant: A) -> Self {
        Self {
            repository,
            assistant: Some(assistant),
            catalog,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replace the random source, e.g. to get reproducible results.
    #[must_use]
    pub fn with_rng(self, rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            ..self
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    pub fn set_settings(&self, settings: &Settings) -> Result<(), WriteError> {
        log_on_error!(
            self.repository.write_settings(settings),
            WriteError,
            "set",
            "settings"
        )
    }

    pub fn get_training_log(&self) -> Result<TrainingLog, ReadError> {
        log_on_error!(
            self.repository.read_training_log(),
            ReadError,
            "get",
            "training log"
        )
    }

    pub fn get_program(&self) -> Result<Option<Program>, ReadError> {
        log_on_error!(
            self.repository.read_program(),
            ReadError,
            "get",
            "program"
        )
    }

    /// Append a set to the training log.
    pub fn record_set(
        &self,
        date: NaiveDate,
        id: InstanceID,
        set: LoggedSet,
    ) -> Result<(), WriteError> {
        let mut log = self.get_training_log()?;
        log.record(date, id, set);
        log_on_error!(
            self.repository.write_training_log(&log),
            WriteError,
            "write",
            "training log"
        )
    }

    /// Store a generated program as the user's program, keeping existing per-day overrides.
    pub fn accept_program(&self, generated: GeneratedProgram) -> Result<Program, WriteError> {
        let overrides = self.get_program()?.map(|p| p.overrides).unwrap_or_default();
        let program = Program {
            workouts: generated.workouts,
            overrides,
        };
        log_on_error!(
            self.repository.write_program(&program),
            WriteError,
            "write",
            "program"
        )?;
        info!("accepted program with {} workouts", program.workouts.len());
        Ok(program)
    }

    /// Replace the workout of a single date.
    pub fn set_override(&self, date: NaiveDate, workout: ProgramWorkout) -> Result<(), WriteError> {
        let mut program = self.get_program()?.unwrap_or_default();
        program.overrides.insert(date, workout);
        log_on_error!(
            self.repository.write_program(&program),
            WriteError,
            "write",
            "program"
        )
    }

    /// Generate a weekly program according to the current settings.
    ///
    /// If the assistant is enabled but fails, the built-in generator is used and the failure is
    /// reported as warning.
    pub async fn generate_program(
        &self,
        today: NaiveDate,
    ) -> Result<Generated<GeneratedProgram>, ServiceError> {
        let settings = self.get_settings()?;
        let request = settings.program_request();
        split_layout(request.days_per_week)?;

        let mut warning = None;
        if let Some(assistant) = self.enabled_assistant(&settings) {
            let prompt = ProgramPrompt {
                request,
                exercises: self.catalog.filter(request.equipment),
                history: self.history(today)?,
            };
            let result = tokio::time::timeout(
                settings.assistant_timeout(),
                assistant.generate_program(&prompt),
            )
            .await
            .unwrap_or(Err(AssistError::Timeout))
            .and_then(|assisted| self.validate_program(&assisted, &request));
            match result {
                Ok(program) => {
                    info!("assistant generated program");
                    return Ok(Generated {
                        value: program,
                        source: Source::Assistant,
                        warning: None,
                    });
                }
                Err(err) => {
                    warn!("failed to generate program by assistant: {err}");
                    warning = Some(fallback_warning(&err));
                }
            }
        }

        let program = repset_domain::generate_program(&request, &self.catalog, &mut *self.rng())?;
        Ok(Generated {
            value: program,
            source: Source::Generator,
            warning,
        })
    }

    /// Generate a single workout for today favoring muscle groups which were not trained recently.
    pub async fn generate_today_workout(
        &self,
        today: NaiveDate,
    ) -> Result<Generated<TodayWorkout>, ServiceError> {
        let settings = self.get_settings()?;
        let log = self.get_training_log()?;
        let program = self.get_program()?.unwrap_or_default();

        let mut warning = None;
        if let Some(assistant) = self.enabled_assistant(&settings) {
            let prompt = TodayPrompt {
                goal: settings.goal,
                equipment: settings.equipment,
                today,
                exercises: self.catalog.filter(settings.equipment),
                history: self.history(today)?,
            };
            let result = tokio::time::timeout(
                settings.assistant_timeout(),
                assistant.generate_today_workout(&prompt),
            )
            .await
            .unwrap_or(Err(AssistError::Timeout))
            .and_then(|assisted| self.validate_today(assisted, &settings));
            match result {
                Ok(workout) => {
                    info!("assistant generated today's workout");
                    return Ok(Generated {
                        value: workout,
                        source: Source::Assistant,
                        warning: None,
                    });
                }
                Err(err) => {
                    warn!("failed to generate today's workout by assistant: {err}");
                    warning = Some(fallback_warning(&err));
                }
            }
        }

        let workout = repset_domain::generate_today_workout(
            &TodayRequest {
                log: &log,
                program: &program,
                equipment: settings.equipment,
                goal: Some(settings.goal),
                today,
            },
            &self.catalog,
            &mut *self.rng(),
        );
        Ok(Generated {
            value: workout,
            source: Source::Generator,
            warning,
        })
    }

    /// Generate a new workout for one day of the split and store it in the user's program.
    ///
    /// Returns `None` if the split has no such day.
    pub fn regenerate_day(&self, index: usize) -> Result<Option<ProgramWorkout>, ServiceError> {
        let settings = self.get_settings()?;
        let Some(workout) = generate_day(
            index,
            &settings.program_request(),
            &self.catalog,
            &mut *self.rng(),
        )?
        else {
            return Ok(None);
        };

        if let Some(mut program) = self.get_program()? {
            if let Some(existing) = program.workouts.get_mut(index) {
                *existing = workout.clone();
                log_on_error!(
                    self.repository.write_program(&program),
                    WriteError,
                    "write",
                    "program"
                )?;
            }
        }

        debug!("regenerated day {index}: {}", workout.name);
        Ok(Some(workout))
    }

    fn enabled_assistant(&self, settings: &Settings) -> Option<&A> {
        if settings.use_assistant {
            self.assistant.as_ref()
        } else {
            None
        }
    }

    fn rng(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn history(&self, today: NaiveDate) -> Result<HistorySummary, ReadError> {
        let log = self.get_training_log()?;
        let program = self.get_program()?.unwrap_or_default();
        let recency = analyze_muscle_recency(&log, program.instances(), &self.catalog);
        Ok(HistorySummary::new(&recency, today))
    }

    fn validate_program(
        &self,
        assisted: &AssistedProgram,
        request: &ProgramRequest,
    ) -> Result<GeneratedProgram, AssistError> {
        let expected = usize::from(request.days_per_week);
        if assisted.workouts.len() != expected {
            return Err(ValidationError::WorkoutCount {
                expected,
                actual: assisted.workouts.len(),
            }
            .into());
        }

        let scheme = match &assisted.scheme {
            Some(scheme) if parse_scheme(scheme).is_some() => Scheme::new(scheme),
            Some(scheme) => return Err(ValidationError::InvalidScheme(scheme.clone()).into()),
            None => Scheme::for_goal(request.goal),
        };
        let max = target_exercise_count(request.duration_minutes);
        let workouts = assisted
            .workouts
            .iter()
            .map(|w| resolve_workout(w, &scheme, request.equipment, max, &self.catalog))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GeneratedProgram { workouts, scheme })
    }

    fn validate_today(
        &self,
        assisted: AssistedToday,
        settings: &Settings,
    ) -> Result<TodayWorkout, AssistError> {
        if assisted.target_muscles.is_empty() {
            return Err(ValidationError::NoTargetMuscles.into());
        }
        let workout = resolve_workout(
            &assisted.workout,
            &Scheme::for_goal(Some(settings.goal)),
            settings.equipment,
            target_exercise_count(TODAY_DURATION_MINUTES),
            &self.catalog,
        )?;
        Ok(TodayWorkout {
            workout,
            target_muscles: assisted.target_muscles,
            note: assisted.note,
        })
    }
}

fn resolve_workout(
    assisted: &AssistedWorkout,
    scheme: &Scheme,
    equipment: EquipmentTier,
    max: usize,
    catalog: &Catalog,
) -> Result<ProgramWorkout, ValidationError> {
    let count = assisted.exercises.len();
    if count == 0 || count > max {
        return Err(ValidationError::ExerciseCount {
            workout: assisted.name.clone(),
            count,
            max,
        });
    }

    let mut seen = HashSet::new();
    let mut entries = vec![];
    for id in &assisted.exercises {
        let entry = catalog
            .get(id)
            .ok_or_else(|| ValidationError::UnknownExercise(id.to_string()))?;
        if !fits_equipment(entry, equipment) {
            return Err(ValidationError::UnavailableEquipment(id.to_string()));
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateExercise(id.to_string()));
        }
        entries.push(entry);
    }

    Ok(ProgramWorkout::new(
        assisted.name.trim(),
        scheme.clone(),
        &entries,
    ))
}

fn fallback_warning(err: &AssistError) -> String {
    format!("The assistant could not create a plan ({err}). Using the built-in generator instead.")
}
