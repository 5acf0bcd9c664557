use super::{SwitchResult, Switcher};
use crate::azcli::account;

/// Switches through `az account set`.
pub struct AzCliSwitcher;

impl Switcher for AzCliSwitcher {
    fn switch(&self, target: &str) -> SwitchResult<()> {
        Ok(account::set(target)?)
    }
}
