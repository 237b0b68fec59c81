use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::exercise::{Exercise, ExerciseDraft};

/// One set of tracking data. Weight and reps are free-form strings owned by
/// the entry form, forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub weight: String,
    pub reps: String,
}

/// The exercise behind a draft entry: a catalog reference when it already
/// carries a backend id, otherwise the full client-authored payload.
#[derive(Debug, Clone)]
pub enum EntryExercise {
    Saved { item_id: Uuid, details: Exercise },
    New(ExerciseDraft),
}

impl EntryExercise {
    pub fn name(&self) -> &str {
        match self {
            EntryExercise::Saved { details, .. } => &details.name,
            EntryExercise::New(draft) => &draft.name,
        }
    }

    pub fn item_id(&self) -> Option<Uuid> {
        match self {
            EntryExercise::Saved { item_id, .. } => Some(*item_id),
            EntryExercise::New(_) => None,
        }
    }
}

/// An exercise entry being composed into a workout or plan.
///
/// `added_at` gives entries a stable order; it is never used as identity.
#[derive(Debug, Clone)]
pub struct WorkoutEntry {
    pub exercise: EntryExercise,
    pub sets: Vec<SetRecord>,
    pub added_at: DateTime<Utc>,
}

impl WorkoutEntry {
    /// An entry always starts with at least one (blank) set.
    pub fn new(exercise: EntryExercise, sets: Vec<SetRecord>) -> Self {
        let sets = if sets.is_empty() {
            vec![SetRecord::default()]
        } else {
            sets
        };
        Self {
            exercise,
            sets,
            added_at: Utc::now(),
        }
    }
}

/// A fully resolved entry as submitted in a `workout_list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPayload {
    pub item_id: Uuid,
    pub name: String,
    pub sets: Vec<SetRecord>,
    #[serde(rename = "exerciseDetails")]
    pub details: Exercise,
}

/// A committed workout. Immutable once it lands in the historical list;
/// the only remaining operation is deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub item_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Uuid>,
    #[serde(default)]
    pub exercise_performances: Vec<Value>,
    pub user_id: Uuid,
}

/// A committed planned workout. Same shape as [`Workout`] minus the
/// time-tracking fields — a plan has no start or end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedWorkout {
    pub item_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Uuid>,
    #[serde(default)]
    pub exercise_performances: Vec<Value>,
    pub user_id: Uuid,
}

/// `POST /workouts` payload.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutCreate {
    pub name: String,
    pub date: NaiveDateTime,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    pub workout_list: Vec<EntryPayload>,
    pub user_id: Uuid,
}

/// `POST /planned-workouts` payload.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedWorkoutCreate {
    pub name: String,
    pub notes: String,
    pub workout_list: Vec<EntryPayload>,
    pub user_id: Uuid,
}

/// Compact view of a plan for list rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub id: Uuid,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub exercise_count: usize,
}
