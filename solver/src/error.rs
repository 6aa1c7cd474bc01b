use thiserror::Error;

/// Fatal conditions that end a run. Each one maps to its own process exit code.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("FINAL_QUERY not set. Set environment variable FINAL_QUERY or property -Dfinal.query")]
    MissingFinalQuery,

    #[error("failed to generate webhook: {0}")]
    WebhookGenerationFailed(String),

    #[error("missing 'webhook' in response")]
    MissingWebhook,

    #[error("missing 'accessToken' in response")]
    MissingAccessToken,

    #[error("submission failed: {0}")]
    SubmissionFailed(#[source] reqwest::Error),

    #[error("interrupted")]
    Interrupted,
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::MissingFinalQuery => 2,
            RunError::WebhookGenerationFailed(_) => 3,
            RunError::MissingWebhook => 4,
            RunError::MissingAccessToken => 5,
            RunError::SubmissionFailed(_) => 6,
            RunError::Interrupted => 130,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            RunError::MissingFinalQuery.exit_code(),
            RunError::WebhookGenerationFailed("exhausted".to_string()).exit_code(),
            RunError::MissingWebhook.exit_code(),
            RunError::MissingAccessToken.exit_code(),
            RunError::SubmissionFailed(unbuildable_request_error()).exit_code(),
            RunError::Interrupted.exit_code(),
        ];

        assert_eq!(codes, [2, 3, 4, 5, 6, 130]);
    }

    fn unbuildable_request_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("http://[::1")
            .build()
            .unwrap_err()
    }
}
