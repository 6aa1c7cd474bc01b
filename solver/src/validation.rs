use crate::error::RunError;
use crate::models::{ValidatedWebhook, WebhookResponse};

/// True when `value` holds a character other than blank-space. Non-breaking
/// spaces (U+00A0, U+2007, U+202F) count as text.
pub fn has_text(value: &str) -> bool {
    value.chars().any(|c| !is_blank_char(c))
}

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

/// Checks that both fields carry text; `webhook` is checked first.
pub fn validate_webhook(response: WebhookResponse) -> Result<ValidatedWebhook, RunError> {
    if !response.webhook.as_deref().is_some_and(has_text) {
        return Err(RunError::MissingWebhook);
    }
    if !response.access_token.as_deref().is_some_and(has_text) {
        return Err(RunError::MissingAccessToken);
    }

    let validated = ValidatedWebhook {
        webhook: response.webhook.unwrap_or_default(),
        access_token: response.access_token.unwrap_or_default(),
    };

    log::info!("Received webhook: {}", validated.webhook);
    log::info!(
        "Received accessToken (redacted length={}): {}",
        validated.access_token.chars().count(),
        redact_token(&validated.access_token)
    );

    Ok(validated)
}

/// Masks a token for logging, keeping the first and last three characters of long tokens.
pub fn redact_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    match chars.len() {
        0 => String::new(),
        len if len <= 6 => "***".to_string(),
        len => {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[len - 3..].iter().collect();
            format!("{head}***{tail}")
        }
    }
}
