use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user record as the backend returns it.
///
/// The session store is the sole writer; everyone else reads a clone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub item_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub height: i64,
    pub weight: i64,
    pub sex: String,
    pub experience: i64,
    pub last_use: NaiveDateTime,
    #[serde(default)]
    pub goal: Vec<String>,
    pub item_created: NaiveDateTime,
    pub item_modified: NaiveDateTime,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Login payload. The password is an opaque value forwarded to the backend;
/// no hashing happens on the client.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup payload (`POST /create`).
#[derive(Debug, Clone, Serialize)]
pub struct SignupProfile {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub height: i64,
    pub weight: i64,
    pub sex: String,
    pub experience: i64,
    pub last_use: NaiveDateTime,
    #[serde(default)]
    pub goal: Vec<String>,
}

/// Partial profile update, used both for `PUT /users/{id}` and for the
/// session store's local shallow-merge. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Vec<String>>,
}

impl UserUpdate {
    /// Shallow-merge the set fields into `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(v) = &self.first_name {
            user.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            user.last_name = v.clone();
        }
        if let Some(v) = self.age {
            user.age = v;
        }
        if let Some(v) = self.height {
            user.height = v;
        }
        if let Some(v) = self.weight {
            user.weight = v;
        }
        if let Some(v) = &self.sex {
            user.sex = v.clone();
        }
        if let Some(v) = self.experience {
            user.experience = v;
        }
        if let Some(v) = &self.goal {
            user.goal = v.clone();
        }
    }
}
