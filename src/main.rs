mod arm;
mod azcli;
mod cmd;
mod creds;
mod output;
mod prompt;
mod state;
mod switch;

use clap::Parser;
use cmd::Cli;
use env_logger::Env;
use owo_colors::OwoColorize;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Failures are reported on stdout and still exit 0.
    if let Err(err) = cmd::run::handle(cli) {
        println!("{}", err.red());
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
