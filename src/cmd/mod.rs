mod error;
pub mod run;

pub use error::*;

use crate::arm::Cloud;
use crate::creds::DEFAULT_CREDENTIALS_FILE;
use crate::output::OutputFormat;
use crate::switch::Backend;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "azsub",
    version,
    about = "list and switch azure subscriptions with a service principal",
    long_about = "Authenticates with service principal credentials from a local file, lists the subscriptions it can see and optionally activates one."
)]
pub struct Cli {
    /// File with AZURE_CLIENT_ID=, AZURE_CLIENT_SECRET= and AZURE_TENANT_ID= lines
    #[arg(short, long, default_value = DEFAULT_CREDENTIALS_FILE)]
    pub config: PathBuf,
    /// Azure cloud to authenticate against
    #[arg(long, value_enum, default_value_t = Cloud::Public)]
    pub cloud: Cloud,
    /// How the active subscription is changed
    #[arg(long, value_enum, default_value_t = Backend::Cli)]
    pub backend: Backend,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
    /// Subscription ID or name to activate instead of prompting
    #[arg(short, long, conflicts_with = "pick")]
    pub subscription: Option<String>,
    /// Choose the subscription from an interactive list
    #[arg(long)]
    pub pick: bool,
    /// Only list subscriptions
    #[arg(long, conflicts_with_all = ["subscription", "pick"])]
    pub list_only: bool,
    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
