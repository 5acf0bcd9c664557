use crate::arm::Subscription;
use inquire::{InquireError, Select};
use std::fmt;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Activate which subscription?  (enter==don't change) >> ";

/// Prompts on `output` and returns the raw line read from `input`, newline
/// included. End of input yields an empty string.
pub fn read_selection<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line)
}

enum Choice<'a> {
    Keep,
    Subscription(&'a Subscription),
}

impl fmt::Display for Choice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Keep => write!(f, "(keep current subscription)"),
            Choice::Subscription(sub) => write!(f, "{} ({})", sub.display_name, sub.subscription_id),
        }
    }
}

/// Interactive list of subscriptions. Returns the chosen ID as an input line,
/// or an empty line to keep the current subscription.
pub fn pick(subscriptions: &[Subscription]) -> io::Result<String> {
    let mut options = vec![Choice::Keep];
    options.extend(subscriptions.iter().map(Choice::Subscription));

    match Select::new("Activate which subscription?", options).prompt() {
        Ok(Choice::Subscription(sub)) => Ok(format!("{}\n", sub.subscription_id)),
        Ok(Choice::Keep) => Ok(String::new()),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(String::new())
        }
        Err(InquireError::IO(err)) => Err(err),
        Err(err) => Err(io::Error::other(err)),
    }
}
