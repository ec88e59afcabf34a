use std::fmt::Write;

use crate::{apps, common::DesktopFileId};
use clap::{builder::StyledStr, Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};

/// Pick default applications
///
/// A thin front end over xdg-settings and xdg-mime: scans the installed
/// desktop entries for web browsers, mail clients, and file managers,
/// shows what is currently set, and applies new choices.
///
/// Run without a subcommand to get the interactive selection.
#[deny(missing_docs)]
#[derive(Parser)]
#[clap(disable_help_subcommand = true)]
#[clap(version, about)]
pub struct Cli {
    /// Override the configured selector command
    #[clap(long, short)]
    pub selector: Option<String>,

    /// What to do; without a subcommand the interactive selection runs
    #[clap(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Interactively pick the default browser, mailer, and file manager
    ///
    /// The entries of each category are piped to a dmenu-style selector
    /// (rofi by default, see the `selector` config key), with the
    /// currently configured default on top. Backing out of any selection
    /// leaves every default untouched.
    Pick,

    /// List the applications available for each category
    ///
    /// Output is one row per scanned desktop file with its category,
    /// display name, desktop-file id, and icon.
    ///
    /// When using `--json`, output will be in the form:
    ///
    /// [
    ///   {
    ///     "category": "browser",
    ///     "name": "Firefox Web Browser",
    ///     "file": "firefox.desktop",
    ///     "icon": "firefox"
    ///   },
    ///   ...
    /// ]
    #[clap(verbatim_doc_comment)]
    List {
        /// Output application info as json
        #[clap(long)]
        json: bool,
    },

    /// Show the currently configured default for each category
    ///
    /// An empty value means the system reports no default. When using
    /// `--json`, output will be in the form:
    ///
    /// {
    ///   "browser": "firefox.desktop",
    ///   "mailer": "",
    ///   "file_manager": "pcmanfm.desktop"
    /// }
    #[clap(verbatim_doc_comment)]
    Get {
        /// Output handler info as json
        #[clap(long)]
        json: bool,
    },

    /// Set defaults without going through the selection
    ///
    /// Only the categories given are touched. Ids must name desktop
    /// files found by the scan, e.g. `firefox.desktop`.
    Set {
        /// Desktop file of the web browser
        #[clap(long, add = ArgValueCompleter::new(autocomplete_desktop_files))]
        browser: Option<DesktopFileId>,
        /// Desktop file of the mail client
        #[clap(long, add = ArgValueCompleter::new(autocomplete_desktop_files))]
        mailer: Option<DesktopFileId>,
        /// Desktop file of the file manager
        #[clap(long, add = ArgValueCompleter::new(autocomplete_desktop_files))]
        file_manager: Option<DesktopFileId>,
    },
}

/// Generate candidates for installed desktop files
#[mutants::skip] // Cannot test directly, relies on system state
fn autocomplete_desktop_files(
    current: &std::ffi::OsStr,
) -> Vec<CompletionCandidate> {
    apps::all_entries()
        .expect("Could not scan desktop entries")
        .into_iter()
        .filter(|(file, _)| {
            file.starts_with(current.to_string_lossy().as_ref())
        })
        .map(|(file, name)| {
            let mut help = StyledStr::new();
            write!(help, "{name}")
                .expect("Could not write desktop entry name");
            CompletionCandidate::new(file).help(Some(help))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }
}
