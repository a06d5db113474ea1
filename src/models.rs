// src/models.rs

use crate::constants::{ASSISTANT_SENDER, USER_SENDER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a chat message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Assistance,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => USER_SENDER,
            Sender::Assistance => ASSISTANT_SENDER,
        }
    }

    /// Maps a sender label from the history endpoint. Anything that is not
    /// `"User"` is shown as the assistant.
    pub fn from_label(label: &str) -> Self {
        if label == USER_SENDER {
            Sender::User
        } else {
            Sender::Assistance
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored message as returned by `GET /get_history`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub sender: String,
    // The store route saves whatever it is given, including null
    #[serde(default)]
    pub message: Option<String>,
}

impl HistoryEntry {
    pub fn display_text(&self) -> String {
        format!(
            "{}: {}",
            self.sender,
            self.message.as_deref().unwrap_or("null")
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub reply: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoreRequest<'a> {
    pub message: &'a str,
    pub sender: &'a str,
}
