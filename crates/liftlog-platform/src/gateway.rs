//! REST gateway adapter.
//!
//! One method per backend resource endpoint, using browser `fetch()` via
//! gloo-net for WASM compatibility. Wire envelopes are unwrapped here so
//! the stores only ever see domain types.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use liftlog_core::ports::GatewayPort;
use liftlog_types::analysis::{AnalysisRequest, AnalysisResponse};
use liftlog_types::exercise::{CatalogResponse, Exercise, ExerciseCreate};
use liftlog_types::user::{Credentials, SignupProfile, User, UserUpdate};
use liftlog_types::workout::{
    PlannedWorkout, PlannedWorkoutCreate, Workout, WorkoutCreate,
};
use liftlog_types::{Result, StoreError};

pub struct RestGateway {
    base_url: String,
}

impl RestGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        value: &str,
    ) -> Result<T> {
        let response = Request::get(&self.url(path))
            .query([(key, value)])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| StoreError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = Request::put(&self.url(path))
            .json(body)
            .map_err(|e| StoreError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        check_status(&response).await
    }
}

async fn check_status(response: &Response) -> Result<()> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(StoreError::Backend { status, message })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    check_status(&response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Serialization(e.to_string()))
}

// Wire envelopes the backend wraps its list responses in.

#[derive(Deserialize)]
struct UsernamesEnvelope {
    usernames: Vec<String>,
}

#[derive(Deserialize)]
struct WorkoutsEnvelope {
    workouts: Vec<Workout>,
}

#[derive(Deserialize)]
struct PlannedWorkoutsEnvelope {
    planned_workouts: Vec<PlannedWorkout>,
}

#[async_trait(?Send)]
impl GatewayPort for RestGateway {
    async fn get_usernames(&self) -> Result<Vec<String>> {
        let envelope: UsernamesEnvelope = self.get_json("/usernames").await?;
        Ok(envelope.usernames)
    }

    async fn create_user(&self, profile: &SignupProfile) -> Result<User> {
        self.post_json("/create", profile).await
    }

    async fn login_user(&self, credentials: &Credentials) -> Result<User> {
        self.post_json("/login", credentials).await
    }

    async fn update_user(&self, user_id: Uuid, update: &UserUpdate) -> Result<User> {
        self.put_json(&format!("/users/{user_id}"), update).await
    }

    async fn get_exercises(&self) -> Result<CatalogResponse> {
        self.get_json("/exercises").await
    }

    async fn create_exercise(&self, payload: &ExerciseCreate) -> Result<Exercise> {
        self.post_json("/exercises", payload).await
    }

    async fn get_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        let envelope: WorkoutsEnvelope = self
            .get_json_query("/workouts", "item_id", &user_id.to_string())
            .await?;
        Ok(envelope.workouts)
    }

    async fn get_workout(&self, workout_id: Uuid) -> Result<Workout> {
        self.get_json(&format!("/workouts/{workout_id}")).await
    }

    async fn create_workout(&self, payload: &WorkoutCreate) -> Result<Workout> {
        self.post_json("/workouts", payload).await
    }

    async fn update_workout(
        &self,
        workout_id: Uuid,
        payload: &WorkoutCreate,
    ) -> Result<Workout> {
        self.put_json(&format!("/workouts/{workout_id}"), payload).await
    }

    async fn delete_workout(&self, workout_id: Uuid) -> Result<()> {
        self.delete(&format!("/workouts/{workout_id}")).await
    }

    async fn get_planned_workouts(&self, user_id: Uuid) -> Result<Vec<PlannedWorkout>> {
        let envelope: PlannedWorkoutsEnvelope = self
            .get_json_query("/planned-workouts", "user_id", &user_id.to_string())
            .await?;
        Ok(envelope.planned_workouts)
    }

    async fn get_planned_workout(&self, workout_id: Uuid) -> Result<PlannedWorkout> {
        self.get_json(&format!("/planned-workouts/{workout_id}"))
            .await
    }

    async fn create_planned_workout(
        &self,
        payload: &PlannedWorkoutCreate,
    ) -> Result<PlannedWorkout> {
        self.post_json("/planned-workouts", payload).await
    }

    async fn update_planned_workout(
        &self,
        workout_id: Uuid,
        payload: &PlannedWorkoutCreate,
    ) -> Result<PlannedWorkout> {
        self.put_json(&format!("/planned-workouts/{workout_id}"), payload)
            .await
    }

    async fn delete_planned_workout(&self, workout_id: Uuid) -> Result<()> {
        self.delete(&format!("/planned-workouts/{workout_id}")).await
    }

    async fn analysis_chat(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        self.post_json("/analysis/chat", request).await
    }
}
