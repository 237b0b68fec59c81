//! Exercise catalog store.
//!
//! The single source of truth for exercise identity across the session.
//! Pending (client-only) entries sit next to saved ones so the UI sees
//! them immediately; an explicit batch commit promotes them.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use liftlog_types::exercise::{
    CatalogEntry, Exercise, ExerciseCreate, ExerciseDraft, StagedExercise, StagedOutcome,
};
use liftlog_types::Result;

use crate::loading::LoadingFlag;
use crate::ports::GatewayPort;

pub struct CatalogStore {
    entries: RefCell<Vec<CatalogEntry>>,
    categories: RefCell<Vec<String>>,
    equipment: RefCell<Vec<String>>,
    staged: RefCell<Vec<StagedExercise>>,
    pub loading: LoadingFlag,
    error: RefCell<Option<String>>,
    gateway: Rc<dyn GatewayPort>,
}

impl CatalogStore {
    pub fn new(gateway: Rc<dyn GatewayPort>) -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            categories: RefCell::new(Vec::new()),
            equipment: RefCell::new(Vec::new()),
            staged: RefCell::new(Vec::new()),
            loading: LoadingFlag::new(),
            error: RefCell::new(None),
            gateway,
        }
    }

    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.entries.borrow().clone()
    }

    pub fn exercise_names(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.name().to_string())
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<CatalogEntry> {
        self.entries
            .borrow()
            .iter()
            .find(|e| e.name() == name)
            .cloned()
    }

    pub fn categories(&self) -> Vec<String> {
        self.categories.borrow().clone()
    }

    pub fn equipment(&self) -> Vec<String> {
        self.equipment.borrow().clone()
    }

    pub fn staged_count(&self) -> usize {
        self.staged.borrow().len()
    }

    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Replace the full catalog from the backend. The category and
    /// equipment lists are normalized by dropping null entries.
    pub async fn fetch_all(&self) -> Result<Vec<Exercise>> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.get_exercises().await {
            Ok(response) => {
                let saved = response.exercises;
                *self.entries.borrow_mut() =
                    saved.iter().cloned().map(CatalogEntry::Saved).collect();
                *self.categories.borrow_mut() =
                    response.categories.into_iter().flatten().collect();
                *self.equipment.borrow_mut() =
                    response.equipment.into_iter().flatten().collect();
                Ok(saved)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Append a pending exercise to the catalog for immediate UI
    /// visibility. The backend is not contacted.
    pub fn stage_new(&self, draft: ExerciseDraft) -> Uuid {
        let temp_id = Uuid::new_v4();
        self.staged.borrow_mut().push(StagedExercise {
            temp_id,
            draft: draft.clone(),
        });
        self.entries
            .borrow_mut()
            .push(CatalogEntry::Pending { temp_id, draft });
        temp_id
    }

    /// Persist every staged exercise, one create call per item in staging
    /// order. Not transactional: each item's outcome is recorded
    /// independently and a failure neither blocks nor rolls back the rest.
    /// The staged list is cleared in full regardless of outcomes, so a
    /// failed item's draft is dropped from staging (its pending catalog
    /// entry remains visible).
    pub async fn commit_staged(&self) -> Vec<StagedOutcome> {
        let staged = self.staged.borrow().clone();
        let mut outcomes = Vec::with_capacity(staged.len());

        for item in &staged {
            let payload = ExerciseCreate::from_draft(&item.draft);
            match self.gateway.create_exercise(&payload).await {
                Ok(saved) => {
                    let mut entries = self.entries.borrow_mut();
                    let slot = entries.iter().position(|e| {
                        matches!(e, CatalogEntry::Pending { temp_id, .. } if *temp_id == item.temp_id)
                    });
                    if let Some(slot) = slot {
                        entries[slot] = CatalogEntry::Saved(saved.clone());
                    }
                    outcomes.push(StagedOutcome {
                        temp_id: item.temp_id,
                        name: item.draft.name.clone(),
                        result: Ok(saved),
                    });
                }
                Err(e) => {
                    log::warn!(
                        "staged exercise '{}' failed to save and is dropped from staging: {e}",
                        item.draft.name
                    );
                    outcomes.push(StagedOutcome {
                        temp_id: item.temp_id,
                        name: item.draft.name.clone(),
                        result: Err(e),
                    });
                }
            }
        }

        self.staged.borrow_mut().clear();
        outcomes
    }
}
