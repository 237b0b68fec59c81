//! Live workout store.
//!
//! Tracks the in-progress workout (NotStarted → InProgress → Finished via
//! the start/end timestamps), the historical list, and runs the commit
//! pipeline on finish. Reads the session and catalog stores through
//! injected handles; never writes to either beyond the catalog re-fetch
//! the pipeline triggers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use liftlog_types::workout::{EntryExercise, SetRecord, Workout, WorkoutCreate, WorkoutEntry};
use liftlog_types::{Result, StoreError};

use crate::catalog::CatalogStore;
use crate::draft::WorkoutDraft;
use crate::loading::LoadingFlag;
use crate::pipeline::resolve_entries;
use crate::ports::GatewayPort;
use crate::session::SessionStore;

pub struct WorkoutStore {
    workouts: RefCell<Vec<Workout>>,
    current: RefCell<WorkoutDraft>,
    start_time: Cell<Option<NaiveDateTime>>,
    end_time: Cell<Option<NaiveDateTime>>,
    last_completed_id: Cell<Option<Uuid>>,
    selected: RefCell<Option<Workout>>,
    pub loading: LoadingFlag,
    error: RefCell<Option<String>>,
    gateway: Rc<dyn GatewayPort>,
    session: Rc<SessionStore>,
    catalog: Rc<CatalogStore>,
}

impl WorkoutStore {
    pub fn new(
        gateway: Rc<dyn GatewayPort>,
        session: Rc<SessionStore>,
        catalog: Rc<CatalogStore>,
    ) -> Self {
        Self {
            workouts: RefCell::new(Vec::new()),
            current: RefCell::new(WorkoutDraft::default()),
            start_time: Cell::new(None),
            end_time: Cell::new(None),
            last_completed_id: Cell::new(None),
            selected: RefCell::new(None),
            loading: LoadingFlag::new(),
            error: RefCell::new(None),
            gateway,
            session,
            catalog,
        }
    }

    // ─── Read accessors ──────────────────────────────────────

    pub fn all_workouts(&self) -> Vec<Workout> {
        self.workouts.borrow().clone()
    }

    pub fn current_draft(&self) -> WorkoutDraft {
        self.current.borrow().clone()
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_time.get()
    }

    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.end_time.get()
    }

    pub fn is_in_progress(&self) -> bool {
        self.start_time.get().is_some() && self.end_time.get().is_none()
    }

    pub fn last_completed_id(&self) -> Option<Uuid> {
        self.last_completed_id.get()
    }

    pub fn selected(&self) -> Option<Workout> {
        self.selected.borrow().clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    // ─── List operations ─────────────────────────────────────

    /// Restore the session if needed, then fetch the user's history.
    pub async fn initialize(&self) {
        if !self.session.is_logged_in() {
            self.session.restore_session().await;
        }
        if let Some(user) = self.session.current_user() {
            let _ = self.fetch_user_workouts(user.item_id).await;
        }
    }

    pub async fn fetch_user_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.get_workouts(user_id).await {
            Ok(workouts) => {
                *self.workouts.borrow_mut() = workouts.clone();
                Ok(workouts)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn fetch_workout_by_id(&self, workout_id: Uuid) -> Result<Workout> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.get_workout(workout_id).await {
            Ok(workout) => {
                *self.selected.borrow_mut() = Some(workout.clone());
                Ok(workout)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn delete_workout(&self, workout_id: Uuid) -> Result<()> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        match self.gateway.delete_workout(workout_id).await {
            Ok(()) => {
                self.workouts.borrow_mut().retain(|w| w.item_id != workout_id);
                Ok(())
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ─── Composition ─────────────────────────────────────────

    /// Reset the draft and stamp the start time: NotStarted → InProgress.
    pub fn start_workout(&self) {
        self.current.borrow_mut().clear();
        self.start_time.set(Some(Utc::now().naive_utc()));
        self.end_time.set(None);
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

    /// Finish the live workout: stamp the end time, resolve every entry's
    /// exercise against the catalog, then persist the workout as a single
    /// create call. On failure after exercise resolution the entered data
    /// is preserved for retry and the created catalog exercises are not
    /// rolled back.
    pub async fn finish_workout(&self) -> Result<Workout> {
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

        // live variant: the end stamp lands before any entry is processed
        let end = Utc::now().naive_utc();
        self.end_time.set(Some(end));

        let entries: Vec<WorkoutEntry> = self.current.borrow().entries.clone();
        let resolved = match resolve_entries(&self.gateway, &self.catalog, &entries).await {
            Ok(resolved) => resolved,
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                return Err(e);
            }
        };

        let start = self.start_time.get();
        let date = start.unwrap_or(end);
        let payload = {
            let draft = self.current.borrow();
            WorkoutCreate {
                name: if draft.name.is_empty() {
                    format!("Workout {}", date.format("%Y-%m-%d"))
                } else {
                    draft.name.clone()
                },
                date,
                notes: draft.notes.clone(),
                start_time: start,
                end_time: Some(end),
                duration: start.map(|s| (end - s).num_minutes()),
                workout_list: resolved,
                user_id: user.item_id,
            }
        };

        match self.gateway.create_workout(&payload).await {
            Ok(saved) => {
                self.workouts.borrow_mut().push(saved.clone());
                self.last_completed_id.set(Some(saved.item_id));
                self.current.borrow_mut().clear();
                self.start_time.set(None);
                self.end_time.set(None);
                Ok(saved)
            }
            Err(e) => {
                *self.error.borrow_mut() = Some(e.to_string());
                Err(e)
            }
        }
    }
}
