mod api;
mod cli;
mod error;

pub use api::ApiSwitcher;
pub use cli::AzCliSwitcher;
pub use error::*;

use clap::ValueEnum;
use log::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// `az account set --subscription <value>`; the listing runs `az account show` to mark the default
    #[default]
    Cli,
    /// Resource Manager lookup, remembered in the azsub config directory; no `az` calls
    Api,
}

pub trait Switcher {
    fn switch(&self, target: &str) -> SwitchResult<()>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Kept,
    Switched(String),
}

/// The subscription named by a raw input line, or `None` to keep the current
/// one. Only the line terminator is removed.
pub fn selection(line: &str) -> Option<&str> {
    let value = match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    };

    (!value.is_empty()).then_some(value)
}

pub fn apply(line: &str, switcher: &dyn Switcher) -> SwitchResult<Outcome> {
    let Some(target) = selection(line) else {
        debug!("empty selection, nothing to switch");
        return Ok(Outcome::Kept);
    };

    switcher.switch(target)?;
    Ok(Outcome::Switched(target.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azcli::AzCliError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Switcher for Recorder {
        fn switch(&self, target: &str) -> SwitchResult<()> {
            self.calls.borrow_mut().push(target.to_owned());
            if self.fail {
                return Err(AzCliError::Failed {
                    command: format!("az account set --subscription {target}"),
                    code: Some(1),
                    stderr: "boom".into(),
                }
                .into());
            }
            Ok(())
        }
    }

    #[test]
    fn backend_help_names_the_az_calls() {
        let help = |backend: Backend| {
            backend
                .to_possible_value()
                .and_then(|value| value.get_help().map(ToString::to_string))
                .unwrap_or_default()
        };

        assert!(help(Backend::Cli).contains("az account show"));
        assert!(help(Backend::Api).contains("no `az` calls"));
    }

    #[test]
    fn empty_input_keeps_current_without_calling() {
        for line in ["", "\n", "\r\n"] {
            let recorder = Recorder::default();
            assert_eq!(apply(line, &recorder).unwrap(), Outcome::Kept);
            assert!(recorder.calls.borrow().is_empty());
        }
    }

    #[test]
    fn switches_once_with_newline_stripped() {
        let recorder = Recorder::default();
        let id = "22222222-2222-2222-2222-222222222222";

        let outcome = apply(&format!("{id}\n"), &recorder).unwrap();

        assert_eq!(outcome, Outcome::Switched(id.to_string()));
        assert_eq!(*recorder.calls.borrow(), vec![id.to_string()]);
    }

    #[test]
    fn only_the_line_terminator_is_removed() {
        assert_eq!(selection("My Sub \r\n"), Some("My Sub "));
        assert_eq!(selection("name"), Some("name"));
        assert_eq!(selection("  \n"), Some("  "));
    }

    #[test]
    fn failure_is_returned_after_one_call() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };

        let err = apply("dev\n", &recorder).unwrap_err();

        assert!(matches!(err, SwitchError::AzCli(_)));
        assert_eq!(recorder.calls.borrow().len(), 1);
    }
}
