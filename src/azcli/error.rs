use std::io;
use thiserror::Error;

pub type AzCliResult<T> = Result<T, AzCliError>;

#[derive(Debug, Error)]
pub enum AzCliError {
    #[error("`az` was not found on PATH; install the Azure CLI or use --backend api")]
    NotInstalled,
    #[error("`{command}` needs an Azure CLI login; run `az login`")]
    NotLoggedIn { command: String },
    #[error("`{command}` exited with code {}: {stderr}", exit_code(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("unexpected output from `{command}`: {source}")]
    Output {
        command: String,
        source: serde_json::Error,
    },
    #[error("could not start `{command}`: {source}")]
    Spawn { command: String, source: io::Error },
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}
