//! Planned workout store.
//!
//! Same composition state and commit pipeline as the live store, minus the
//! time tracking — a plan has no start or end.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use uuid::Uuid;

use liftlog_types::workout::{
    EntryExercise, PlanSummary, PlannedWorkout, PlannedWorkoutCreate, SetRecord, WorkoutEntry,
};
use liftlog_types::{Result, StoreError};

use crate::catalog::CatalogStore;
use crate::draft::WorkoutDraft;
use crate::loading::LoadingFlag;
use crate::pipeline::resolve_entries;
use crate::ports::GatewayPort;
use crate::session::SessionStore;

pub struct PlannedWorkoutStore {
    planned: RefCell<Vec<PlannedWorkout>>,
    current: RefCell<WorkoutDraft>,
    selected: RefCell<Option<PlannedWorkout>>,
    pub loading: LoadingFlag,
    error: RefCell<Option<String>>,
    gateway: Rc<dyn GatewayPort>,
    session: Rc<SessionStore>,
    catalog: Rc<CatalogStore>,
}

impl PlannedWorkoutStore {
    pub fn new(
        gateway: Rc<dyn GatewayPort>,
        session: Rc<SessionStore>,
        catalog: Rc<CatalogStore>,
    ) -> Self {
        Self {
            planned: RefCell::new(Vec::new()),
            current: RefCell::new(WorkoutDraft::default()),
            selected: RefCell::new(None),
            loading: LoadingFlag::new(),
            error: RefCell::new(None),
            gateway,
            session,
            catalog,
        }
    }

    // ─── Read accessors ──────────────────────────────────────

    pub fn all_planned(&self) -> Vec<PlannedWorkout> {
        self.planned.borrow().clone()
    }

    pub fn plan_summaries(&self) -> Vec<PlanSummary> {
        self.planned
            .borrow()
            .iter()
            .map(|plan| PlanSummary {
                id: plan.item_id,
                name: plan.name.clone(),
                notes: plan.notes.clone(),
                exercise_count: plan.exercises.len(),
            })
            .collect()
    }

    pub fn find_by_id(&self, plan_id: Uuid) -> Option<PlannedWorkout> {
        self.planned
            .borrow()
            .iter()
            .find(|plan| plan.item_id == plan_id)
            .cloned()
    }

    pub fn current_draft(&self) -> WorkoutDraft {
        self.current.borrow().clone()
    }

    pub fn selected(&self) -> Option<PlannedWorkout> {
        self.selected.borrow().clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    // ─── List operations ─────────────────────────────────────

    /// Restore the session if needed, then fetch the user's plans.
    pub async fn initialize(&self) {
        if !self.session.is_logged_in() {
            self.session.restore_session().await;
        }
        if let Some(user) = self.session.current_user() {
            let _ = self.fetch_user_planned_workouts(user.item_id).await;
        }
    }

    pub async fn fetch_user_planned_workouts(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<PlannedWorkout>> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.get_planned_workouts(user_id).await {
            Ok(planned) => {
                *self.planned.borrow_mut() = planned.clone();
                Ok(planned)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn fetch_planned_workout_by_id(&self, plan_id: Uuid) -> Result<PlannedWorkout> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.get_planned_workout(plan_id).await {
            Ok(plan) => {
                *self.selected.borrow_mut() = Some(plan.clone());
                Ok(plan)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_planned_workout(&self, plan_id: Uuid) -> Result<()> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.delete_planned_workout(plan_id).await {
            Ok(()) => {
                self.planned.borrow_mut().retain(|p| p.item_id != plan_id);
                Ok(())
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ─── Composition ─────────────────────────────────────────

    pub fn start_planning(&self) {
        self.current.borrow_mut().clear();
    }

    pub fn clear_current(&self) {
        self.current.borrow_mut().clear();
    }

    pub fn add_entry(&self, exercise: EntryExercise, sets: Vec<SetRecord>) {
        self.current.borrow_mut().add_entry(exercise, sets);
    }

    pub fn replace_entry(&self, index: usize, exercise: EntryExercise, sets: Vec<SetRecord>) {
        self.current.borrow_mut().replace_entry(index, exercise, sets);
    }

    pub fn remove_entry(&self, index: usize) {
        self.current.borrow_mut().remove_entry(index);
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.current.borrow_mut().name = name.into();
    }

    pub fn set_notes(&self, notes: impl Into<String>) {
        self.current.borrow_mut().notes = notes.into();
    }

    // ─── Commit pipeline ─────────────────────────────────────

    /// Persist the current plan: resolve every entry's exercise against
    /// the catalog, then create the plan as a single call. The draft is
    /// reset only on success; a late failure keeps the entered data for
    /// retry and does not roll back created catalog exercises.
    pub async fn save_planned_workout(&self) -> Result<PlannedWorkout> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        let Some(user) = self.session.current_user() else {
            *self.error.borrow_mut() = Some(StoreError::NotLoggedIn.to_string());
            return Err(StoreError::NotLoggedIn);
        };
        if self.current.borrow().is_empty() {
            *self.error.borrow_mut() = Some(StoreError::EmptyWorkout.to_string());
            return Err(StoreError::EmptyWorkout);
        }

        let entries: Vec<WorkoutEntry> = self.current.borrow().entries.clone();
        let resolved = match resolve_entries(&self.gateway, &self.catalog, &entries).await {
            Ok(resolved) => resolved,
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                return Err(e);
            }
        };

        let payload = {
            let draft = self.current.borrow();
            PlannedWorkoutCreate {
                name: if draft.name.is_empty() {
                    format!("Workout Plan {}", Utc::now().naive_utc().format("%Y-%m-%d"))
                } else {
                    draft.name.clone()
                },
                notes: draft.notes.clone(),
                workout_list: resolved,
                user_id: user.item_id,
            }
        };

        match self.gateway.create_planned_workout(&payload).await {
            Ok(saved) => {
                self.planned.borrow_mut().push(saved.clone());
                self.current.borrow_mut().clear();
                Ok(saved)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }
}
