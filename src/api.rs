use crate::{
    constants::{HISTORY_ENDPOINT, SEND_ENDPOINT, STORE_ENDPOINT},
    errors::{ChatError, ChatResult},
    logging::{log_api_call, ApiCallLog},
    models::{HistoryEntry, HistoryResponse, SendRequest, SendResponse, Sender, StoreRequest},
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Instant;

/// HTTP client for the chat backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ChatResult<Self> {
        // Endpoints are joined relative to the base, so it must end in a slash
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base_url = Url::parse(&normalized)
            .map_err(|e| ChatError::config_error(format!("Invalid base URL: {}", e)))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> ChatResult<Url> {
        self.base_url
            .join(name)
            .map_err(|e| ChatError::api_error(format!("Invalid endpoint {}: {}", name, e)))
    }

    /// Fetches the stored conversation, oldest first.
    pub async fn get_history(&self) -> ChatResult<Vec<HistoryEntry>> {
        let request = self.client.get(self.endpoint(HISTORY_ENDPOINT)?);
        let response: HistoryResponse =
            self.execute(request, HISTORY_ENDPOINT, "GET history").await?;
        Ok(response.history)
    }

    /// Posts a user message and returns the assistant reply, if the backend
    /// sent one.
    pub async fn send_message(&self, message: &str) -> ChatResult<Option<String>> {
        let request = self
            .client
            .post(self.endpoint(SEND_ENDPOINT)?)
            .json(&SendRequest { message });
        let summary = format!("POST message ({} chars)", message.chars().count());
        let response: SendResponse = self.execute(request, SEND_ENDPOINT, &summary).await?;
        Ok(response.reply)
    }

    /// Asks the backend to persist a message. Returns the acknowledgement.
    pub async fn store_message(&self, content: &str, sender: Sender) -> ChatResult<Value> {
        let request = self
            .client
            .post(self.endpoint(STORE_ENDPOINT)?)
            .json(&StoreRequest {
                message: content,
                sender: sender.as_str(),
            });
        let summary = format!("POST {} message", sender);
        self.execute(request, STORE_ENDPOINT, &summary).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        summary: &str,
    ) -> ChatResult<T> {
        let started = Instant::now();
        let result = request.send().await;

        log_api_call(&ApiCallLog {
            endpoint: endpoint.to_string(),
            request_summary: summary.to_string(),
            response_status: result.as_ref().ok().map(|r| r.status().as_u16()),
            elapsed: started.elapsed(),
        });

        let response =
            result.map_err(|e| ChatError::api_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::api_error(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::api_error(format!("Failed to parse API response: {}", e)))
    }
}
