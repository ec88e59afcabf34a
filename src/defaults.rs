use crate::{
    common::DesktopFileId,
    error::{Error, Result},
};
use mime::Mime;
use std::process::{Command, Stdio};

/// The current defaults, as desktop-file ids.
/// An empty string means no default is configured for that category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentDefaults {
    pub mailer: String,
    pub browser: String,
    pub file_manager: String,
}

/// Ids chosen to become the new defaults; `None` leaves a category alone
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub browser: Option<DesktopFileId>,
    pub mailer: Option<DesktopFileId>,
    pub file_manager: Option<DesktopFileId>,
}

impl CurrentDefaults {
    /// Ask xdg-settings and xdg-mime for the currently configured
    /// handlers.
    ///
    /// A query that cannot be spawned at all is fatal. One that runs but
    /// reports nothing, or fails, yields an empty string.
    #[mutants::skip] // Cannot test directly, runs external commands
    pub fn query() -> Result<Self> {
        let directory: Mime = "inode/directory".parse()?;

        Ok(Self {
            mailer: query_output(
                "xdg-settings",
                &["get", "default-url-scheme-handler", "mailto"],
            )?,
            browser: query_output(
                "xdg-settings",
                &["get", "default-web-browser"],
            )?,
            file_manager: query_output(
                "xdg-mime",
                &["query", "default", directory.as_ref()],
            )?,
        })
    }
}

/// Hand the chosen ids to the system tools.
///
/// The invocations are sequential and fire-and-forget; their outcomes are
/// not checked.
#[mutants::skip] // Cannot test directly, alters system state
pub fn apply_changes(selection: &Selection) -> Result<()> {
    let mailto: Mime = "x-scheme-handler/mailto".parse()?;
    let directory: Mime = "inode/directory".parse()?;

    if let Some(id) = &selection.browser {
        set_command(
            "xdg-settings",
            &["set", "default-web-browser", id.as_str()],
        );
    }
    if let Some(id) = &selection.file_manager {
        set_command("xdg-mime", &["default", id.as_str(), directory.as_ref()]);
    }
    if let Some(id) = &selection.mailer {
        set_command("xdg-mime", &["default", id.as_str(), mailto.as_ref()]);
    }

    Ok(())
}

/// Trimmed stdout of a query command.
/// Only a spawn failure is reported; exit status is ignored.
#[mutants::skip] // Cannot test directly, runs external commands
fn query_output(cmd: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| Error::Spawn {
            cmd: cmd.to_owned(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

/// Fire-and-forget invocation of a set-default command
#[mutants::skip] // Cannot test directly, alters system state
fn set_command(cmd: &str, args: &[&str]) {
    let _ = Command::new(cmd).args(args).status();
}
