use crate::{
    api::ApiClient,
    chat_panel::ChatPanel,
    constants::{FALLBACK_REPLY, HISTORY_ERROR_MESSAGE, SEND_ERROR_MESSAGE, WELCOME_MESSAGE},
    models::Sender,
};
use log::{debug, error, info};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

/// Drives the chat panel from user actions and backend responses.
///
/// Cloning is cheap and every clone shares the same panel. The panel lock is
/// only taken for short synchronous updates, never across a request.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    panel: Arc<Mutex<ChatPanel>>,
    api: ApiClient,
}

impl ChatWidget {
    pub fn new(api: ApiClient) -> Self {
        Self {
            panel: Arc::new(Mutex::new(ChatPanel::new())),
            api,
        }
    }

    pub fn panel(&self) -> MutexGuard<'_, ChatPanel> {
        self.panel.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Shows the stored conversation, or a welcome message when there is none.
    pub async fn load_chat_history(&self) {
        match self.api.get_history().await {
            Ok(history) if history.is_empty() => {
                info!("No chat history, showing welcome message");
                self.save_message_to_server(WELCOME_MESSAGE, Sender::Assistance);
                self.display_message(WELCOME_MESSAGE, Sender::Assistance);
                self.display_divider();
            }
            Ok(history) => {
                info!("Loaded {} history messages", history.len());
                for entry in &history {
                    self.display_message(&entry.display_text(), Sender::from_label(&entry.sender));
                    self.display_divider();
                }
            }
            Err(e) => {
                error!("Error loading chat history: {}", e);
                self.save_message_to_server(HISTORY_ERROR_MESSAGE, Sender::Assistance);
                self.display_message(HISTORY_ERROR_MESSAGE, Sender::Assistance);
            }
        }
    }

    /// Sends the current input. The user message is shown and the input
    /// cleared before this returns; the reply is handled by the returned task.
    /// Returns `None` without touching anything when the input is blank.
    pub fn send_message(&self) -> Option<JoinHandle<()>> {
        let user_message = {
            let mut panel = self.panel();
            let user_message = panel.input().trim().to_string();
            if user_message.is_empty() {
                return None;
            }

            panel.push_message(&format!("User: {}", user_message), Sender::User);
            panel.clear_input();
            panel.begin_request();
            user_message
        };

        let widget = self.clone();
        Some(tokio::spawn(async move {
            widget.request_reply(&user_message).await;
            widget.panel().end_request();
        }))
    }

    async fn request_reply(&self, user_message: &str) {
        match self.api.send_message(user_message).await {
            Ok(reply) => {
                let reply = reply
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| FALLBACK_REPLY.to_string());
                debug!("Received reply ({} chars)", reply.chars().count());
                self.display_message(&format!("Assistance: {}", reply), Sender::Assistance);
                self.display_divider();
            }
            Err(e) => {
                error!("Error fetching response: {}", e);
                self.display_message(SEND_ERROR_MESSAGE, Sender::Assistance);
                self.save_message_to_server(SEND_ERROR_MESSAGE, Sender::Assistance);
            }
        }
    }

    /// Appends a message and scrolls the panel to the bottom.
    pub fn display_message(&self, content: &str, sender: Sender) {
        self.panel().push_message(content, sender);
    }

    pub fn display_divider(&self) {
        self.panel().push_divider();
    }

    /// Stores a message on the backend in the background. The outcome is only
    /// logged; callers may drop the handle.
    pub fn save_message_to_server(&self, content: &str, sender: Sender) -> JoinHandle<()> {
        let api = self.api.clone();
        let content = content.to_string();

        tokio::spawn(async move {
            match api.store_message(&content, sender).await {
                Ok(ack) => info!("Message saved: {}", ack),
                Err(e) => error!("Error saving message: {}", e),
            }
        })
    }
}
