//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `liftlog-core` (pure Rust).
//! Implementations live in `liftlog-platform` (browser adapters).
//! The stores never import platform code; they only depend on these traits.

use async_trait::async_trait;
use uuid::Uuid;

use liftlog_types::analysis::{AnalysisRequest, AnalysisResponse};
use liftlog_types::exercise::{CatalogResponse, Exercise, ExerciseCreate};
use liftlog_types::user::{Credentials, SignupProfile, User, UserUpdate};
use liftlog_types::workout::{
    PlannedWorkout, PlannedWorkoutCreate, Workout, WorkoutCreate,
};
use liftlog_types::Result;

// ─── Gateway Port ────────────────────────────────────────────

/// Typed surface over the backend's REST resources, one call per endpoint.
/// List envelopes (`{workouts}`, `{planned_workouts}`, …) are unwrapped by
/// the adapter; stores only ever see domain types.
#[async_trait(?Send)]
pub trait GatewayPort {
    // Users
    async fn get_usernames(&self) -> Result<Vec<String>>;
    async fn create_user(&self, profile: &SignupProfile) -> Result<User>;
    async fn login_user(&self, credentials: &Credentials) -> Result<User>;
    async fn update_user(&self, user_id: Uuid, update: &UserUpdate) -> Result<User>;

    // Exercise catalog
    async fn get_exercises(&self) -> Result<CatalogResponse>;
    async fn create_exercise(&self, payload: &ExerciseCreate) -> Result<Exercise>;

    // Workouts
    async fn get_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>>;
    async fn get_workout(&self, workout_id: Uuid) -> Result<Workout>;
    async fn create_workout(&self, payload: &WorkoutCreate) -> Result<Workout>;
    async fn update_workout(&self, workout_id: Uuid, payload: &WorkoutCreate)
        -> Result<Workout>;
    async fn delete_workout(&self, workout_id: Uuid) -> Result<()>;

    // Planned workouts
    async fn get_planned_workouts(&self, user_id: Uuid) -> Result<Vec<PlannedWorkout>>;
    async fn get_planned_workout(&self, workout_id: Uuid) -> Result<PlannedWorkout>;
    async fn create_planned_workout(
        &self,
        payload: &PlannedWorkoutCreate,
    ) -> Result<PlannedWorkout>;
    async fn update_planned_workout(
        &self,
        workout_id: Uuid,
        payload: &PlannedWorkoutCreate,
    ) -> Result<PlannedWorkout>;
    async fn delete_planned_workout(&self, workout_id: Uuid) -> Result<()>;

    // Analysis
    async fn analysis_chat(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;
}

// ─── Storage Port ────────────────────────────────────────────

/// Durable key/value persistence. String-valued because the browser
/// collaborator is `localStorage`.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value
    async fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Navigator Port ──────────────────────────────────────────

/// Navigation collaborator. The session store issues exactly one call,
/// on logout.
pub trait NavigatorPort {
    fn to_root(&self);
}
