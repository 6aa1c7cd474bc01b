use serde::{Deserialize, Serialize};

/// Identity sent to the generate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityPayload {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

/// Body returned by the generate endpoint. Either field may be missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    #[serde(default)]
    pub webhook: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// A webhook response whose fields have both been checked non-blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedWebhook {
    pub webhook: String,
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub final_query: String,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Submitted { status: u16 },
    DryRun,
}
