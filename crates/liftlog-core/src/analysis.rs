//! Analysis conversation store.
//!
//! A bounded, persisted exchange with the backend's analysis endpoint.
//! The conversation is bounded indirectly by the daily user-message cap;
//! day-rollover is evaluated once, when the store restores its state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use liftlog_types::analysis::{
    AnalysisPrompt, AnalysisRequest, AnalysisSnapshot, ChatMessage, ChatRole, HistoryEntry,
    HARD_DAILY_LIMIT, SOFT_DAILY_LIMIT,
};
use liftlog_types::{Result, StoreError};

use crate::loading::LoadingFlag;
use crate::ports::{GatewayPort, StoragePort};

pub const ANALYSIS_KEY: &str = "analysisStore";

const FALLBACK_REPLY: &str = "I apologize, but I encountered an error. Please try again.";

/// Today as a calendar-day string. Only ever compared for equality.
fn today_string() -> String {
    chrono::Local::now().format("%a %b %d %Y").to_string()
}

pub struct AnalysisStore {
    messages: RefCell<Vec<ChatMessage>>,
    daily_message_count: Cell<u32>,
    last_message_date: RefCell<Option<String>>,
    has_active_conversation: Cell<bool>,
    last_selected_option: RefCell<Option<String>>,
    pub loading: LoadingFlag,
    error: RefCell<Option<String>>,
    gateway: Rc<dyn GatewayPort>,
    storage: Rc<dyn StoragePort>,
}

impl AnalysisStore {
    pub fn new(gateway: Rc<dyn GatewayPort>, storage: Rc<dyn StoragePort>) -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
            daily_message_count: Cell::new(0),
            last_message_date: RefCell::new(None),
            has_active_conversation: Cell::new(false),
            last_selected_option: RefCell::new(None),
            loading: LoadingFlag::new(),
            error: RefCell::new(None),
            gateway,
            storage,
        }
    }

    // ─── Read accessors ──────────────────────────────────────

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }

    pub fn daily_message_count(&self) -> u32 {
        self.daily_message_count.get()
    }

    pub fn has_active_conversation(&self) -> bool {
        self.has_active_conversation.get()
    }

    pub fn last_selected_option(&self) -> Option<String> {
        self.last_selected_option.borrow().clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// User messages left before the soft limit the UI warns at.
    pub fn remaining_messages(&self) -> u32 {
        SOFT_DAILY_LIMIT.saturating_sub(self.daily_message_count.get())
    }

    /// Whether the hard daily cap has been reached.
    pub fn has_reached_limit(&self) -> bool {
        self.daily_message_count.get() >= HARD_DAILY_LIMIT
    }

    /// The conversation in the wire format the analysis endpoint expects.
    pub fn conversation_history(&self) -> Vec<HistoryEntry> {
        self.messages.borrow().iter().map(HistoryEntry::from).collect()
    }

    // ─── Persistence ─────────────────────────────────────────

    /// Rehydrate persisted state. A persisted date that no longer matches
    /// today resets the counter and clears the conversation — the rollover
    /// happens here, once, not on every access.
    pub async fn restore(&self) {
        let today = today_string();

        match self.storage.get(ANALYSIS_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<AnalysisSnapshot>(&raw) {
                Ok(snapshot) => {
                    if snapshot.last_message_date.as_deref() == Some(today.as_str()) {
                        *self.messages.borrow_mut() = snapshot.messages;
                        self.daily_message_count.set(snapshot.daily_message_count);
                        *self.last_message_date.borrow_mut() = snapshot.last_message_date;
                        self.has_active_conversation
                            .set(snapshot.has_active_conversation);
                        *self.last_selected_option.borrow_mut() =
                            snapshot.last_selected_option;
                    } else {
                        self.daily_message_count.set(0);
                        *self.last_message_date.borrow_mut() = Some(today);
                        self.clear_conversation_state();
                    }
                }
                Err(e) => {
                    log::warn!("discarding unreadable analysis state: {e}");
                    *self.last_message_date.borrow_mut() = Some(today);
                }
            },
            Ok(None) => {
                *self.last_message_date.borrow_mut() = Some(today);
            }
            Err(e) => {
                log::warn!("analysis state unavailable: {e}");
                *self.last_message_date.borrow_mut() = Some(today);
            }
        }

        self.persist().await;
    }

    async fn persist(&self) {
        let snapshot = AnalysisSnapshot {
            messages: self.messages.borrow().clone(),
            daily_message_count: self.daily_message_count.get(),
            last_message_date: self.last_message_date.borrow().clone(),
            has_active_conversation: self.has_active_conversation.get(),
            last_selected_option: self.last_selected_option.borrow().clone(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if let Err(e) = self.storage.set(ANALYSIS_KEY, &json).await {
                    log::warn!("failed to persist analysis state: {e}");
                }
            }
            Err(e) => log::warn!("failed to serialize analysis state: {e}"),
        }
    }

    // ─── Conversation ────────────────────────────────────────

    /// Append a message with a client-side timestamp. Only user messages
    /// count against the daily limit; assistant messages are free.
    pub async fn append_message(&self, role: ChatRole, content: &str) {
        self.messages.borrow_mut().push(ChatMessage {
            role,
            content: content.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        if role == ChatRole::User {
            self.daily_message_count
                .set(self.daily_message_count.get() + 1);
            self.has_active_conversation.set(true);
        }

        self.persist().await;
    }

    /// Submit one turn: the full remapped history plus the new prompt.
    /// A `success: false` body counts as a failure. Every failure path
    /// appends the fixed apologetic placeholder to the conversation *and*
    /// returns the real error — both effects, not one or the other.
    pub async fn send_turn(&self, prompt: &AnalysisPrompt) -> Result<()> {
        let _busy = self.loading.begin();
        *self.error.borrow_mut() = None;

        if let Some(option) = &prompt.option {
            *self.last_selected_option.borrow_mut() = Some(option.clone());
        }

        let request = AnalysisRequest {
            option: prompt.option.clone(),
            message: prompt.message.clone(),
            user_data: prompt.user_data.clone(),
            workouts: prompt.workouts.clone(),
            conversation_history: self.conversation_history(),
        };

        let err = match self.gateway.analysis_chat(&request).await {
            Ok(response) if response.success => match response.message {
                Some(reply) => {
                    self.append_message(ChatRole::Assistant, &reply).await;
                    return Ok(());
                }
                // success-shaped but empty: treat like any other failure
                None => StoreError::Other("Failed to get response".to_string()),
            },
            Ok(response) => StoreError::Other(
                response
                    .error
                    .unwrap_or_else(|| "Failed to get response".to_string()),
            ),
            Err(e) => e,
        };

        *self.error.borrow_mut() = Some(err.to_string());
        self.append_message(ChatRole::Assistant, FALLBACK_REPLY).await;
        Err(err)
    }

    fn clear_conversation_state(&self) {
        self.messages.borrow_mut().clear();
        self.has_active_conversation.set(false);
        *self.last_selected_option.borrow_mut() = None;
        *self.error.borrow_mut() = None;
    }

    pub async fn clear_conversation(&self) {
        self.clear_conversation_state();
        self.persist().await;
    }

    /// Manual override, independent of the date-based auto-reset.
    pub async fn reset_daily_limit(&self) {
        self.daily_message_count.set(0);
        *self.last_message_date.borrow_mut() = Some(today_string());
        self.persist().await;
    }
}
