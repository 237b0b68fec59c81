use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;

/// Default category supplied when a client-authored exercise omits one.
pub const DEFAULT_CATEGORY: &str = "Strength";
/// Default equipment supplied when a client-authored exercise omits one.
pub const DEFAULT_EQUIPMENT: &str = "None";

/// A catalog exercise acknowledged by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub item_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub muscles: Vec<String>,
    #[serde(default)]
    pub sub_muscles: Vec<String>,
}

/// A client-authored exercise not yet submitted to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub muscles: Vec<String>,
    #[serde(default)]
    pub sub_muscles: Vec<String>,
}

impl ExerciseDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Creation payload for `POST /exercises`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseCreate {
    pub name: String,
    pub description: String,
    pub category: String,
    pub equipment: String,
    pub muscles: Vec<String>,
    pub sub_muscles: Vec<String>,
}

impl ExerciseCreate {
    /// Build a creation payload from a draft, supplying catalog defaults
    /// for everything the draft left blank.
    pub fn from_draft(draft: &ExerciseDraft) -> Self {
        Self {
            name: draft.name.clone(),
            description: draft.description.clone().unwrap_or_default(),
            category: draft
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            equipment: draft
                .equipment
                .clone()
                .unwrap_or_else(|| DEFAULT_EQUIPMENT.to_string()),
            muscles: draft.muscles.clone(),
            sub_muscles: draft.sub_muscles.clone(),
        }
    }
}

/// One entry in the exercise catalog.
///
/// `Pending` entries exist only on the client, keyed by a temporary id until
/// an explicit commit promotes them to `Saved`.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    Saved(Exercise),
    Pending { temp_id: Uuid, draft: ExerciseDraft },
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Saved(exercise) => &exercise.name,
            CatalogEntry::Pending { draft, .. } => &draft.name,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogEntry::Pending { .. })
    }
}

/// A pending exercise in the staged list, waiting for a batch commit.
#[derive(Debug, Clone)]
pub struct StagedExercise {
    pub temp_id: Uuid,
    pub draft: ExerciseDraft,
}

/// Per-item result of a staged-catalog commit. One outcome per staged
/// exercise, in staging order, successes and failures alike.
#[derive(Debug)]
pub struct StagedOutcome {
    pub temp_id: Uuid,
    pub name: String,
    pub result: Result<Exercise>,
}

/// `GET /exercises` response. The category and equipment lists may contain
/// nulls; the catalog store filters them out before adopting.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub categories: Vec<Option<String>>,
    #[serde(default)]
    pub equipment: Vec<Option<String>>,
}
