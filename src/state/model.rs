use crate::arm::Subscription;
use serde::{Deserialize, Serialize};

/// Subscription chosen through the API backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSubscription {
    pub subscription_id: String,
    pub display_name: String,
    pub tenant_id: String,
}

impl From<Subscription> for ActiveSubscription {
    fn from(sub: Subscription) -> Self {
        Self {
            subscription_id: sub.subscription_id,
            display_name: sub.display_name,
            tenant_id: sub.tenant_id,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct StateFile {
    pub active: Option<ActiveSubscription>,
}
