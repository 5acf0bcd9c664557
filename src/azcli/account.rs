use super::error::AzCliResult;
use super::run::{az, az_status};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

pub fn show() -> AzCliResult<Account> {
    az(&["account", "show", "-o", "json"])
}

pub fn set(subscription: &str) -> AzCliResult<()> {
    az_status(&["account", "set", "--subscription", subscription])
}
