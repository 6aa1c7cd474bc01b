use crate::models::*;
use crate::retry::{retry_with_backoff, RetryError, RetryPolicy, Sleeper};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Why a single generate attempt failed.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error("generate endpoint responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct WebhookService {
    client: Client,
    generate_url: String,
    policy: RetryPolicy,
}

impl WebhookService {
    pub fn new(client: Client, generate_url: impl Into<String>) -> Self {
        Self {
            client,
            generate_url: generate_url.into(),
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Asks the generate endpoint for a webhook, retrying per the service's policy.
    ///
    /// `Ok(None)` means the endpoint answered 2xx with an empty or `null` body.
    pub async fn request_webhook<S: Sleeper>(
        &self,
        identity: &IdentityPayload,
        sleeper: &S,
    ) -> Result<Option<WebhookResponse>, RetryError<AttemptError>> {
        let max_attempts = self.policy.max_attempts;

        retry_with_backoff(&self.policy, sleeper, |attempt| async move {
            log::info!(
                "Requesting webhook (attempt {}/{}): {}",
                attempt,
                max_attempts,
                self.generate_url
            );

            let result = self.send(identity).await;
            if let Err(e) = &result {
                log::error!("GenerateWebhook request failed on attempt {}: {}", attempt, e);
            }
            result
        })
        .await
    }

    async fn send(&self, identity: &IdentityPayload) -> Result<Option<WebhookResponse>, AttemptError> {
        let response = self
            .client
            .post(&self.generate_url)
            .json(identity)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptError::Status { status, body });
        }

        log::info!("GenerateWebhook responded with status {}", status);

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(serde_json::from_slice::<Option<WebhookResponse>>(&bytes)?)
    }
}
