use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Represents one entry of the applications menu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Display name, localized when the file provides one
    pub name: String,
    /// Location of the source file
    pub path: PathBuf,
    /// Base filename, the identifier handed to xdg-settings/xdg-mime
    pub file: String,
    /// Icon theme identifier
    pub icon: Option<String>,
}

impl DesktopEntry {
    /// Read the `[Desktop Entry]` section of the file at `path`.
    ///
    /// `locale` is the primary subtag of the system locale ("de", "fr", ...)
    /// and selects the localized name key; an empty locale skips the
    /// localized lookup entirely. Returns `None` if the file cannot be
    /// opened. Lines that match no recognized key are ignored.
    pub fn parse(path: &Path, locale: &str) -> Option<Self> {
        let file = File::open(path).ok()?;
        let localized_key =
            (!locale.is_empty()).then(|| format!("Name[{locale}]"));

        let mut in_entry_section = false;
        let mut name: Option<String> = None;
        let mut fallback_name: Option<String> = None;
        let mut icon: Option<String> = None;

        for line in BufReader::new(file).lines().map_while(Result::ok) {
            if !in_entry_section {
                in_entry_section = line == "[Desktop Entry]";
                continue;
            }
            // Keys of other groups, e.g. [Desktop Action ...], must not
            // leak into the entry
            if line.starts_with('[') {
                break;
            }
            if name.is_none() {
                if let Some(value) = localized_key
                    .as_deref()
                    .and_then(|key| key_value(&line, key))
                {
                    name = Some(value.to_owned());
                    continue;
                }
                if let Some(value) = key_value(&line, "Name") {
                    fallback_name = Some(value.to_owned());
                    continue;
                }
            }
            if icon.is_none() {
                if let Some(value) = key_value(&line, "Icon") {
                    icon = Some(value.to_owned());
                }
            }
        }

        let file_name = path.file_name()?.to_string_lossy().into_owned();

        Some(DesktopEntry {
            name: name
                .or(fallback_name)
                .unwrap_or_else(|| file_name.clone()),
            path: path.to_path_buf(),
            file: file_name,
            icon,
        })
    }
}

/// Value of `line` if it has exactly the form `<key>=<value>`
fn key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?.strip_prefix('=')
}
