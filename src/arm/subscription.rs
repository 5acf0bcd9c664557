use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_id: String,
    pub display_name: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl Subscription {
    pub fn has_id(&self, id: &str) -> bool {
        self.subscription_id.eq_ignore_ascii_case(id)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.display_name.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SubscriptionPage {
    #[serde(default)]
    pub value: Vec<Subscription>,
    #[serde(rename = "nextLink")]
    pub next_link: Option<String>,
}
