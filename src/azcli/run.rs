use super::error::{AzCliError, AzCliResult};
use log::debug;
use serde::de::DeserializeOwned;
use std::io;
use std::process::{Command, Output};

/// One `az` call, labelled the way it would be typed in a shell.
struct Invocation<'a> {
    args: &'a [&'a str],
    label: String,
}

impl<'a> Invocation<'a> {
    fn new(args: &'a [&'a str]) -> Self {
        let mut label = String::from("az");
        for arg in args {
            label.push(' ');
            label.push_str(arg);
        }

        Self { args, label }
    }

    fn output(&self) -> AzCliResult<Output> {
        debug!("running `{}`", self.label);

        Command::new("az")
            .args(self.args)
            .output()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => AzCliError::NotInstalled,
                _ => AzCliError::Spawn {
                    command: self.label.clone(),
                    source: err,
                },
            })
    }

    fn failure(&self, output: &Output) -> AzCliError {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        classify(self.label.clone(), output.status.code(), stderr)
    }
}

fn classify(command: String, code: Option<i32>, stderr: String) -> AzCliError {
    if stderr.contains("az login") {
        return AzCliError::NotLoggedIn { command };
    }

    AzCliError::Failed {
        command,
        code,
        stderr,
    }
}

/// Runs a command whose output is of no interest.
pub fn az_status(args: &[&str]) -> AzCliResult<()> {
    let invocation = Invocation::new(args);
    let output = invocation.output()?;

    match output.status.success() {
        true => Ok(()),
        false => Err(invocation.failure(&output)),
    }
}

pub fn az<T: DeserializeOwned>(args: &[&str]) -> AzCliResult<T> {
    let invocation = Invocation::new(args);
    let output = invocation.output()?;

    if !output.status.success() {
        return Err(invocation.failure(&output));
    }

    serde_json::from_slice(&output.stdout).map_err(|source| AzCliError::Output {
        command: invocation.label,
        source,
    })
}
