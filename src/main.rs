mod apps;
mod cli;
mod common;
mod config;
mod defaults;
mod error;
mod selector;
mod utils;

use cli::{Cli, Cmd};
use config::Config;
use error::{Error, Result};

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;

#[mutants::skip] // Cannot test directly at the moment
fn main() -> Result<()> {
    CompleteEnv::with_factory(|| Cli::command().name("defaultr"))
        .completer("defaultr")
        .complete();

    let cli = Cli::parse();
    let mut config = Config::new()?;
    config.override_selector(cli.selector);
    let mut stdout = std::io::stdout().lock();

    let res = match cli.cmd {
        None | Some(Cmd::Pick) => config.pick_defaults(),
        Some(Cmd::List { json }) => config.list_apps(&mut stdout, json),
        Some(Cmd::Get { json }) => config.show_defaults(&mut stdout, json),
        Some(Cmd::Set {
            browser,
            mailer,
            file_manager,
        }) => config.set_defaults(browser, mailer, file_manager),
    };

    // Backing out of the selection is a normal way to leave the program,
    // not a reportable failure
    let res = match res {
        Err(Error::Cancelled) => Ok(()),
        res => res,
    };

    // Issue a notification if defaultr is not being run in a terminal
    if let Err(ref e) = res {
        if !config.terminal_output {
            utils::notify("defaultr error", &e.to_string())?
        }
    }

    res
}
