use super::{SwitchError, SwitchResult, Switcher};
use crate::arm::{ArmClient, Authorizer, Subscription};
use crate::state::{ActiveSubscription, StateStore};
use log::{debug, info, warn};

/// Confirms access through Resource Manager and records the choice locally.
pub struct ApiSwitcher<'a> {
    client: &'a ArmClient,
    auth: &'a Authorizer,
    known: &'a [Subscription],
    store: &'a StateStore,
}

impl<'a> ApiSwitcher<'a> {
    pub fn new(
        client: &'a ArmClient,
        auth: &'a Authorizer,
        known: &'a [Subscription],
        store: &'a StateStore,
    ) -> Self {
        Self {
            client,
            auth,
            known,
            store,
        }
    }

    /// An ID wins over a display name. A name shared by several listed
    /// subscriptions is refused.
    fn resolve<'t>(&self, target: &'t str) -> SwitchResult<&'t str>
    where
        'a: 't,
    {
        if let Some(sub) = self.known.iter().find(|sub| sub.has_id(target)) {
            return Ok(sub.subscription_id.as_str());
        }

        let named: Vec<&'a str> = self
            .known
            .iter()
            .filter(|sub| sub.has_name(target))
            .map(|sub| sub.subscription_id.as_str())
            .collect();

        match named.as_slice() {
            [] => {
                debug!("'{target}' is not in the listing, treating it as an ID");
                Ok(target)
            }
            [id] => Ok(*id),
            _ => Err(SwitchError::AmbiguousName {
                name: target.to_owned(),
                ids: named.iter().map(|id| id.to_string()).collect(),
            }),
        }
    }
}

impl Switcher for ApiSwitcher<'_> {
    fn switch(&self, target: &str) -> SwitchResult<()> {
        let id = self.resolve(target)?;
        let sub = self.client.get_subscription(self.auth, id)?;

        if let Some(state) = sub.state.as_deref().filter(|state| *state != "Enabled") {
            warn!("subscription {} is {state}", sub.subscription_id);
        }

        info!("activating {} ({})", sub.display_name, sub.subscription_id);
        self.store.save(ActiveSubscription::from(sub))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::CloudEndpoints;
    use crate::creds::Credentials;
    use crate::switch::{Outcome, apply};
    use serde_json::json;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SUB_ID: &str = "22222222-2222-2222-2222-222222222222";
    const OTHER_ID: &str = "33333333-3333-3333-3333-333333333333";

    fn subscription(id: &str, name: &str) -> Subscription {
        Subscription {
            subscription_id: id.into(),
            display_name: name.into(),
            tenant_id: "tenant".into(),
            state: Some("Enabled".into()),
        }
    }

    // Token endpoint plus `GET /subscriptions/{SUB_ID}`, expected `lookups` times.
    fn mock_arm(runtime: &Runtime, lookups: u64) -> (MockServer, ArmClient, Authorizer) {
        let server = runtime.block_on(MockServer::start());
        runtime.block_on(async {
            Mock::given(method("POST"))
                .and(path("/tenant/oauth2/v2.0/token"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({ "access_token": "t" })),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path(format!("/subscriptions/{SUB_ID}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "subscriptionId": SUB_ID,
                    "tenantId": "tenant",
                    "displayName": "Dev Sandbox",
                    "state": "Enabled"
                })))
                .expect(lookups)
                .mount(&server)
                .await;
        });

        let client = ArmClient::new(CloudEndpoints::new(server.uri(), server.uri())).unwrap();
        let auth = client
            .authorize(&Credentials {
                client_id: "c".into(),
                client_secret: "s".into(),
                tenant_id: "tenant".into(),
            })
            .unwrap();

        (server, client, auth)
    }

    #[test]
    fn resolves_display_name_and_records_it() {
        let runtime = Runtime::new().unwrap();
        let (_server, client, auth) = mock_arm(&runtime, 1);
        let known = vec![subscription(SUB_ID, "Dev Sandbox")];
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at(dir.path().join("active.toml"));

        let switcher = ApiSwitcher::new(&client, &auth, &known, &store);
        let outcome = apply("dev sandbox\n", &switcher).unwrap();

        assert_eq!(outcome, Outcome::Switched("dev sandbox".into()));
        let active = store.load().unwrap().unwrap();
        assert_eq!(active.subscription_id, SUB_ID);
        assert_eq!(active.display_name, "Dev Sandbox");
    }

    #[test]
    fn shared_display_name_is_refused() {
        let runtime = Runtime::new().unwrap();
        let (_server, client, auth) = mock_arm(&runtime, 0);
        let known = vec![
            subscription(SUB_ID, "Dev Sandbox"),
            subscription(OTHER_ID, "dev sandbox"),
        ];
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at(dir.path().join("active.toml"));

        let switcher = ApiSwitcher::new(&client, &auth, &known, &store);
        let err = apply("Dev Sandbox\n", &switcher).unwrap_err();

        match err {
            SwitchError::AmbiguousName { name, ids } => {
                assert_eq!(name, "Dev Sandbox");
                assert_eq!(ids, vec![SUB_ID.to_string(), OTHER_ID.to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn id_wins_over_a_matching_name() {
        let runtime = Runtime::new().unwrap();
        let (_server, client, auth) = mock_arm(&runtime, 1);
        let known = vec![
            subscription(OTHER_ID, SUB_ID),
            subscription(SUB_ID, "Dev Sandbox"),
        ];
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::at(dir.path().join("active.toml"));

        let switcher = ApiSwitcher::new(&client, &auth, &known, &store);
        apply(SUB_ID, &switcher).unwrap();

        assert_eq!(store.load().unwrap().unwrap().subscription_id, SUB_ID);
    }
}
