use crate::{
    apps::{AppList, AppLists},
    common::{Category, DesktopEntry, DesktopFileId},
    defaults::{CurrentDefaults, Selection},
    error::{Error, Result},
};
use itertools::Itertools;
use std::{
    io::{Read, Write},
    process::{Command, Stdio},
};

/// Run the selection for all three categories.
///
/// Cancelling any of them abandons the whole selection. Categories
/// without a single candidate are skipped and left unchanged.
#[mutants::skip] // Cannot test directly, runs external commands
pub fn pick_all(
    apps: &AppLists,
    current: &CurrentDefaults,
    selector: &str,
) -> Result<Selection> {
    Ok(Selection {
        browser: pick_one(
            &apps.browsers,
            &current.browser,
            selector,
            Category::Browser,
        )?,
        mailer: pick_one(
            &apps.mailers,
            &current.mailer,
            selector,
            Category::Mailer,
        )?,
        file_manager: pick_one(
            &apps.file_managers,
            &current.file_manager,
            selector,
            Category::FileManager,
        )?,
    })
}

/// Present one category's list and resolve the answer back to an entry
#[mutants::skip] // Cannot test directly, runs external commands
fn pick_one(
    entries: &AppList,
    current: &str,
    selector: &str,
    category: Category,
) -> Result<Option<DesktopFileId>> {
    if entries.is_empty() {
        return Ok(None);
    }

    let options = ordered_options(entries, current);
    let chosen = select(
        selector,
        category.prompt(),
        options.iter().map(|entry| entry.name.clone()),
    )?;

    let entry = options
        .into_iter()
        .find(|entry| entry.name == chosen)
        .ok_or(Error::NotFound(chosen))?;

    Ok(Some(DesktopFileId::from(entry.file.as_str())))
}

/// Index of the first entry matching the currently configured default;
/// the first entry when nothing matches
pub fn preselect(entries: &[DesktopEntry], current: &str) -> usize {
    entries
        .iter()
        .position(|entry| entry.file == current)
        .unwrap_or(0)
}

/// The list as presented: scan order, rotated so the pre-selected entry
/// comes first and is what a bare confirmation picks
fn ordered_options<'a>(
    entries: &'a [DesktopEntry],
    current: &str,
) -> Vec<&'a DesktopEntry> {
    entries
        .iter()
        .cycle()
        .skip(preselect(entries, current))
        .take(entries.len())
        .collect()
}

/// Run given selector command with the options piped in one per line.
/// An empty answer, or none at all, counts as backing out.
#[mutants::skip] // Cannot test directly, runs external command
fn select<O: Iterator<Item = String>>(
    selector: &str,
    prompt: &str,
    mut opts: O,
) -> Result<String> {
    let process = {
        let mut split = shlex::split(selector)
            .filter(|words| !words.is_empty())
            .ok_or_else(|| Error::BadCmd(selector.to_string()))?;
        let (cmd, args) = (split.remove(0), split);
        Command::new(cmd)
            .args(args)
            .arg(prompt)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                cmd: selector.to_owned(),
                source,
            })?
    };

    let output = {
        process
            .stdin
            .ok_or_else(|| Error::Selector(selector.to_string()))?
            .write_all(opts.join("\n").as_bytes())?;

        let mut output = String::with_capacity(24);

        process
            .stdout
            .ok_or_else(|| Error::Selector(selector.to_string()))?
            .read_to_string(&mut output)?;

        output.trim_end().to_owned()
    };

    if output.is_empty() {
        Err(Error::Cancelled)
    } else {
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries() -> Vec<DesktopEntry> {
        ["netsurf.desktop", "firefox.desktop", "epiphany.desktop"]
            .iter()
            .enumerate()
            .map(|(i, file)| DesktopEntry {
                name: format!("Browser {i}"),
                path: PathBuf::from("/usr/local/share/applications")
                    .join(file),
                file: (*file).to_owned(),
                icon: None,
            })
            .collect()
    }

    #[test]
    fn matching_default_is_preselected() {
        assert_eq!(preselect(&entries(), "firefox.desktop"), 1);
        assert_eq!(preselect(&entries(), "epiphany.desktop"), 2);
    }

    #[test]
    fn first_entry_without_a_match() {
        assert_eq!(preselect(&entries(), "chromium.desktop"), 0);
        assert_eq!(preselect(&entries(), ""), 0);
        assert_eq!(preselect(&[], "whatever.desktop"), 0);
    }

    #[test]
    fn options_rotate_around_the_preselection() {
        let entries = entries();

        let files = |current: &str| {
            ordered_options(&entries, current)
                .iter()
                .map(|entry| entry.file.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(
            files("firefox.desktop"),
            ["firefox.desktop", "epiphany.desktop", "netsurf.desktop"]
        );
        // No match: presented in plain scan order
        assert_eq!(
            files(""),
            ["netsurf.desktop", "firefox.desktop", "epiphany.desktop"]
        );
    }
}
