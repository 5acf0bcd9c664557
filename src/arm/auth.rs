use super::error::{ArmError, ArmResult, error_message};
use super::cloud::CloudEndpoints;
use crate::creds::Credentials;
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Bearer token for the management plane. Valid for this run only.
pub struct Authorizer {
    access_token: String,
}

impl Authorizer {
    pub fn bearer(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorizer").finish_non_exhaustive()
    }
}

pub(super) fn acquire(
    http: &Client,
    endpoints: &CloudEndpoints,
    creds: &Credentials,
) -> ArmResult<Authorizer> {
    let token_url = format!(
        "{}/{}/oauth2/v2.0/token",
        endpoints.authority_host, creds.tenant_id
    );
    let scope = endpoints.scope();

    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", creds.client_id.as_str()),
        ("client_secret", creds.client_secret.as_str()),
        ("scope", scope.as_str()),
    ];

    debug!("requesting token from {token_url}");
    let response = http.post(&token_url).form(&params).send()?;

    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        return Err(ArmError::Auth {
            status,
            message: error_message(&body),
        });
    }

    let token: TokenResponse = serde_json::from_str(&body)?;
    if let Some(seconds) = token.expires_in {
        debug!("token acquired, expires in {seconds}s");
    }

    Ok(Authorizer {
        access_token: token.access_token,
    })
}
