use super::auth::{self, Authorizer};
use super::cloud::CloudEndpoints;
use super::error::{ArmError, ArmResult, error_message};
use super::subscription::{Subscription, SubscriptionPage};
use crate::creds::Credentials;
use log::{debug, warn};
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

const API_VERSION: &str = "2022-12-01";

pub struct ArmClient {
    http: Client,
    endpoints: CloudEndpoints,
}

impl ArmClient {
    pub fn new(endpoints: CloudEndpoints) -> ArmResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("azsub/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoints })
    }

    pub fn authorize(&self, creds: &Credentials) -> ArmResult<Authorizer> {
        auth::acquire(&self.http, &self.endpoints, creds)
    }

    /// Lists the subscriptions visible to the principal. Only the first page
    /// the service returns is used.
    pub fn list_subscriptions(&self, auth: &Authorizer) -> ArmResult<Vec<Subscription>> {
        let url = self.subscriptions_url(None)?;
        let page: SubscriptionPage = self.send(self.http.get(url), auth)?;

        if let Some(next) = page.next_link.as_deref() {
            warn!("more subscriptions are available than listed (next page: {next})");
        }
        debug!("listed {} subscription(s)", page.value.len());

        Ok(page.value)
    }

    pub fn get_subscription(&self, auth: &Authorizer, id: &str) -> ArmResult<Subscription> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(ArmError::InvalidSubscriptionId(id.to_owned()));
        }

        let url = self.subscriptions_url(Some(id))?;
        self.send(self.http.get(url), auth)
    }

    /// `{resource_manager}/subscriptions[/{id}]` with the ID escaped as a
    /// single path segment.
    fn subscriptions_url(&self, id: Option<&str>) -> ArmResult<Url> {
        let base = &self.endpoints.resource_manager;
        let mut url = Url::parse(base)
            .map_err(|err| ArmError::InvalidEndpoint(format!("{base}: {err}")))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ArmError::InvalidEndpoint(base.clone()))?;
            segments.pop_if_empty().push("subscriptions");
            if let Some(id) = id {
                segments.push(id);
            }
        }

        Ok(url)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, auth: &Authorizer) -> ArmResult<T> {
        let response = request
            .query(&[("api-version", API_VERSION)])
            .bearer_auth(auth.bearer())
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(ArmError::Api {
                status,
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
