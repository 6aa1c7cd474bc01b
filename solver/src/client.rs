use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

pub const API_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const API_TIMEOUT: Duration = Duration::from_secs(20);
pub const PDF_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const PDF_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the generate and test endpoints.
pub fn api_client() -> Result<Client> {
    build(API_CONNECT_TIMEOUT, API_TIMEOUT)
}

/// Client for the question PDF download.
pub fn pdf_client() -> Result<Client> {
    build(PDF_CONNECT_TIMEOUT, PDF_TIMEOUT)
}

fn build(connect_timeout: Duration, timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(timeout)
        .build()?;
    Ok(client)
}
