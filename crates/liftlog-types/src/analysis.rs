use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages a user may send per day before the UI starts warning.
pub const SOFT_DAILY_LIMIT: u32 = 5;
/// Hard ceiling on user messages per calendar day.
pub const HARD_DAILY_LIMIT: u32 = 100;

/// Role in the analysis conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single exchange in the analysis conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Client-side timestamp, RFC 3339. The backend never sees or sets it.
    pub timestamp: String,
}

/// Conversation history entry in the wire format the analysis endpoint
/// expects: `Human` / `Assistant` role labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for HistoryEntry {
    fn from(msg: &ChatMessage) -> Self {
        let role = match msg.role {
            ChatRole::User => "Human",
            ChatRole::Assistant => "Assistant",
        };
        Self {
            role: role.to_string(),
            content: msg.content.clone(),
        }
    }
}

/// The persisted `analysisStore` blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSnapshot {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub daily_message_count: u32,
    #[serde(default)]
    pub last_message_date: Option<String>,
    #[serde(default)]
    pub has_active_conversation: bool,
    #[serde(default)]
    pub last_selected_option: Option<String>,
}

/// What a caller hands to `send_turn`: a canned option or a free-form
/// message, plus the context the backend wants alongside it.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPrompt {
    pub option: Option<String>,
    pub message: Option<String>,
    pub user_data: Value,
    pub workouts: Vec<Value>,
}

/// `POST /analysis/chat` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user_data: Value,
    pub workouts: Vec<Value>,
    pub conversation_history: Vec<HistoryEntry>,
}

/// `POST /analysis/chat` response body. A body with `success: false` is
/// treated the same as a transport failure, whatever the HTTP status said.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
