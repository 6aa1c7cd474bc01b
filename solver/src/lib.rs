pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pdf_fetcher;
pub mod retry;
pub mod runner;
pub mod submit_service;
pub mod validation;
pub mod webhook_service;

pub use config::{Environment, RuntimeConfig};
pub use error::RunError;
pub use models::*;
pub use pdf_fetcher::PdfFetcher;
pub use retry::{Backoff, RetryPolicy, Sleeper, TokioSleeper};
pub use runner::Solver;
pub use submit_service::SubmitService;
pub use webhook_service::WebhookService;
