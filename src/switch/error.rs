use crate::{arm::ArmError, azcli::AzCliError, state::StateError};
use thiserror::Error;

pub type SwitchResult<T> = Result<T, SwitchError>;

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error(transparent)]
    AzCli(#[from] AzCliError),
    #[error(transparent)]
    Arm(#[from] ArmError),
    #[error("'{name}' names more than one subscription ({}); use the subscription ID", .ids.join(", "))]
    AmbiguousName { name: String, ids: Vec<String> },
    #[error("could not record active subscription: {0}")]
    State(#[from] StateError),
}
