use crate::{arm::ArmError, creds::CredsError, switch::SwitchError};
use std::io;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read credentials: {0}")]
    Credentials(#[from] CredsError),
    #[error("Failed to get Azure authorizer: {0}")]
    Authorize(#[source] ArmError),
    #[error("Failed to list Azure subscriptions: {0}")]
    List(#[source] ArmError),
    #[error("Failed to render subscriptions: {0}")]
    Render(#[from] serde_json::Error),
    #[error("Failed to read selection: {0}")]
    Prompt(#[source] io::Error),
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
    #[error("Failed to set Azure subscription: {0}")]
    Switch(#[from] SwitchError),
}
