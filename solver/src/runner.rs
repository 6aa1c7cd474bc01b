use crate::client;
use crate::config::RuntimeConfig;
use crate::error::RunError;
use crate::models::*;
use crate::pdf_fetcher::{self, PdfFetcher, QUESTION_PDF_LINK};
use crate::retry::{RetryError, Sleeper};
use crate::submit_service::SubmitService;
use crate::validation::validate_webhook;
use crate::webhook_service::WebhookService;
use anyhow::Result;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// One end-to-end run: optional PDF fetch, webhook request, validation, submission.
pub struct Solver {
    config: RuntimeConfig,
    pdf_fetcher: PdfFetcher,
    pdf_output: PathBuf,
    webhook_service: WebhookService,
    submit_service: SubmitService,
}

impl Solver {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let api_client = client::api_client()?;

        Ok(Self {
            pdf_fetcher: PdfFetcher::new(client::pdf_client()?),
            pdf_output: pdf_fetcher::default_output_path(),
            webhook_service: WebhookService::new(api_client.clone(), config.generate_url.clone()),
            submit_service: SubmitService::new(api_client, config.test_url.clone()),
            config,
        })
    }

    pub fn with_pdf_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.pdf_output = path.into();
        self
    }

    /// Like [`Solver::run`], but stops with [`RunError::Interrupted`] once `cancel` fires.
    ///
    /// A cancellation seen by the sleeper during a backoff still ends as a failed
    /// webhook request, since the run is polled first.
    pub async fn run_until_cancelled<S: Sleeper>(
        &self,
        sleeper: &S,
        cancel: &CancellationToken,
    ) -> Result<RunOutcome, RunError> {
        tokio::select! {
            biased;
            result = self.run(sleeper) => result,
            _ = cancel.cancelled() => {
                log::warn!("Interrupted - stopping before the run completes");
                Err(RunError::Interrupted)
            }
        }
    }

    pub async fn run<S: Sleeper>(&self, sleeper: &S) -> Result<RunOutcome, RunError> {
        log::info!(
            "Starting Webhook Solver for regNo {} (even regNo - using Question 2)",
            self.config.identity.reg_no
        );
        log::info!("Question 2 PDF: {}", QUESTION_PDF_LINK);

        if self.config.download_pdf {
            self.pdf_fetcher
                .try_download(&self.config.pdf_url, &self.pdf_output)
                .await;
        }

        let response = match self
            .webhook_service
            .request_webhook(&self.config.identity, sleeper)
            .await
        {
            Ok(Some(response)) => response,
            Ok(None) => {
                return Err(RunError::WebhookGenerationFailed(
                    "generate endpoint returned an empty body".to_string(),
                ))
            }
            Err(RetryError::Exhausted { attempts, last }) => {
                return Err(RunError::WebhookGenerationFailed(format!(
                    "{} attempt(s) failed, last error: {}",
                    attempts, last
                )))
            }
            Err(RetryError::Interrupted { attempts, .. }) => {
                return Err(RunError::WebhookGenerationFailed(format!(
                    "interrupted after {} attempt(s)",
                    attempts
                )))
            }
        };

        let webhook = validate_webhook(response)?;

        let final_query = self
            .config
            .final_query
            .clone()
            .ok_or(RunError::MissingFinalQuery)?;
        let request = SubmitRequest { final_query };

        if self.config.dry_run {
            return Ok(self.submit_service.dry_run(&webhook.access_token, &request));
        }

        self.submit_service
            .submit(&webhook.access_token, &request)
            .await
    }
}
