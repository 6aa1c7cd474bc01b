use crate::error::RunError;
use crate::models::*;
use reqwest::{header, Client};

pub struct SubmitService {
    client: Client,
    test_url: String,
}

impl SubmitService {
    pub fn new(client: Client, test_url: impl Into<String>) -> Self {
        Self {
            client,
            test_url: test_url.into(),
        }
    }

    /// Logs what would be sent without touching the network.
    pub fn dry_run(&self, access_token: &str, request: &SubmitRequest) -> RunOutcome {
        let body = serde_json::to_string(request).unwrap_or_else(|_| format!("{:?}", request));

        log::info!("DRY_RUN=true - not submitting to remote endpoint");
        log::info!(
            "Would POST to {} with headers Authorization=[{}] and body: {}",
            self.test_url,
            access_token,
            body
        );

        RunOutcome::DryRun
    }

    /// Posts the answer using the token verbatim as the `Authorization` value.
    ///
    /// Any completed HTTP exchange counts as submitted, whatever its status. Failing
    /// to read the response body is a transport failure.
    pub async fn submit(&self, access_token: &str, request: &SubmitRequest) -> Result<RunOutcome, RunError> {
        log::info!("Submitting final query to {}", self.test_url);

        let response = self
            .client
            .post(&self.test_url)
            .header(header::AUTHORIZATION, access_token)
            .json(request)
            .send()
            .await
            .map_err(RunError::SubmissionFailed)?;

        let status = response.status();
        let body = response.text().await.map_err(RunError::SubmissionFailed)?;

        if status.is_success() {
            log::info!("Submission response status: {}", status);
        } else {
            log::warn!("Submission response status: {}", status);
        }
        log::info!("Submission response body: {}", body);

        Ok(RunOutcome::Submitted {
            status: status.as_u16(),
        })
    }
}
