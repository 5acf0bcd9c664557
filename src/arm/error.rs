use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub type ArmResult<T> = Result<T, ArmError>;

#[derive(Debug, Error)]
pub enum ArmError {
    #[error("token request rejected ({status}): {message}")]
    Auth { status: StatusCode, message: String },
    #[error("Azure Resource Manager returned {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("invalid resource manager endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("'{0}' is not a subscription ID")]
    InvalidSubscriptionId(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse Azure response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    // ARM: {"error": {"code": "...", "message": "..."}}
    Arm { error: ArmErrorDetail },
    // Entra token endpoint: {"error": "...", "error_description": "..."}
    OAuth {
        error: String,
        error_description: Option<String>,
    },
}

#[derive(Deserialize)]
struct ArmErrorDetail {
    code: String,
    message: String,
}

/// Pulls a readable message out of an Azure error payload, falling back to
/// the raw body.
pub(super) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Arm { error }) => format!("{}: {}", error.code, error.message),
        Ok(ErrorBody::OAuth {
            error,
            error_description,
        }) => match error_description {
            Some(description) => format!("{error}: {}", first_line(&description)),
            None => error,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_arm_error() {
        let body = r#"{"error":{"code":"SubscriptionNotFound","message":"The subscription 'x' could not be found."}}"#;
        assert_eq!(
            error_message(body),
            "SubscriptionNotFound: The subscription 'x' could not be found."
        );
    }

    #[test]
    fn reads_token_error_first_line() {
        let body = r#"{"error":"invalid_client","error_description":"AADSTS7000215: Invalid client secret provided.\r\nTrace ID: abc"}"#;
        assert_eq!(
            error_message(body),
            "invalid_client: AADSTS7000215: Invalid client secret provided."
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message(""), "empty response body");
    }
}
