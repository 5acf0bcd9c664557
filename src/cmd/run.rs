use super::{AppError, AppResult, Cli};
use crate::arm::{ArmClient, CloudEndpoints};
use crate::output::{self, OutputFormat};
use crate::state::{StateResult, StateStore};
use crate::switch::{self, ApiSwitcher, AzCliSwitcher, Backend, Outcome, SwitchError};
use crate::{azcli, creds, prompt};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Where the run reads the selection and writes its output.
pub struct Console<R, W, E> {
    pub input: R,
    pub out: W,
    pub err: E,
}

pub fn handle(cli: Cli) -> AppResult<()> {
    let endpoints = CloudEndpoints::from(cli.cloud);
    let mut console = Console {
        input: io::stdin().lock(),
        out: io::stdout(),
        err: io::stderr(),
    };

    execute(cli, endpoints, StateStore::new, &mut console)
}

/// Runs every step once, top to bottom. With JSON output only the listing
/// goes to `out`; the prompt and the outcome go to `err`.
pub fn execute<R, W, E, S>(
    cli: Cli,
    endpoints: CloudEndpoints,
    open_store: S,
    console: &mut Console<R, W, E>,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
    S: Fn() -> StateResult<StateStore>,
{
    let creds = creds::load(&cli.config)?;
    debug!("loaded {:?} from {}", creds, cli.config.display());

    let client = ArmClient::new(endpoints).map_err(AppError::Authorize)?;
    let auth = with_spinner("Authenticating", || client.authorize(&creds))
        .map_err(AppError::Authorize)?;
    let subscriptions = with_spinner("Listing subscriptions", || {
        client.list_subscriptions(&auth)
    })
    .map_err(AppError::List)?;

    let active = active_subscription(cli.backend, &open_store);
    let rows = output::rows(&subscriptions, active.as_deref());
    let rendered = output::render(&rows, cli.output)?;

    let Console { input, out, err } = console;
    writeln!(out, "{}", rendered.trim_end_matches('\n')).map_err(AppError::Output)?;

    if cli.list_only {
        return Ok(());
    }

    let status: &mut dyn Write = if cli.output == OutputFormat::Json {
        err
    } else {
        writeln!(out, "\n{}\n", output::SEPARATOR).map_err(AppError::Output)?;
        out
    };

    let line = match cli.subscription {
        Some(value) => value,
        None if cli.pick => prompt::pick(&subscriptions).map_err(AppError::Prompt)?,
        None => prompt::read_selection(&mut *input, &mut *status).map_err(AppError::Prompt)?,
    };

    let outcome = match cli.backend {
        Backend::Cli => switch::apply(&line, &AzCliSwitcher)?,
        Backend::Api => {
            let store = open_store().map_err(SwitchError::from)?;
            let switcher = ApiSwitcher::new(&client, &auth, &subscriptions, &store);
            switch::apply(&line, &switcher)?
        }
    };

    let written = match outcome {
        Outcome::Kept => writeln!(status, "Keeping current subscription."),
        Outcome::Switched(target) => {
            info!("switched to '{target}' via {:?} backend", cli.backend);
            writeln!(status, "{}", "Subscription changed.".green())
        }
    };

    written.map_err(AppError::Output)
}

/// ID of the subscription the backend currently treats as active. Lookup
/// failures only cost the Is_Default marker.
fn active_subscription(
    backend: Backend,
    open_store: &dyn Fn() -> StateResult<StateStore>,
) -> Option<String> {
    match backend {
        Backend::Cli => match azcli::account::show() {
            Ok(account) => {
                debug!("az CLI default subscription: {} ({})", account.name, account.id);
                Some(account.id)
            }
            Err(err) => {
                warn!("cannot read az CLI default subscription: {err}");
                None
            }
        },
        Backend::Api => match open_store().and_then(|store| store.load()) {
            Ok(active) => active.map(|sub| sub.subscription_id),
            Err(err) => {
                warn!("cannot read recorded active subscription: {err}");
                None
            }
        },
    }
}

fn with_spinner<T>(message: &'static str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work();

    spinner.finish_and_clear();
    result
}
