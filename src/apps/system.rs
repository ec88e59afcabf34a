use crate::{
    common::{classify, Category, DesktopEntry, CATEGORY_PRIORITY},
    config::{ConfigFile, ScanConfig},
    error::Result,
};
use derive_more::{Deref, DerefMut};
use itertools::Itertools;
use std::{fs, path::Path};

/// Entries of one category, in scan order
#[derive(Debug, Default, Clone, Deref, DerefMut, PartialEq, Eq)]
pub struct AppList(Vec<DesktopEntry>);

/// Applications found on the system, grouped by matched category
#[derive(Debug, Default, Clone)]
pub struct AppLists {
    pub mailers: AppList,
    pub browsers: AppList,
    pub file_managers: AppList,
}

impl AppLists {
    /// Walk the configured application directories and classify every
    /// regular file found there.
    ///
    /// Missing directories and unreadable files are skipped silently.
    /// Subdirectories are not descended into. A file present under more
    /// than one root is listed once per occurrence.
    pub fn scan(config: &ScanConfig) -> Self {
        let mut lists = Self::default();

        for root in &config.search_roots {
            let Ok(dir) = fs::read_dir(root) else {
                continue;
            };

            let files = dir
                .filter_map(|dirent| Some(dirent.ok()?.path()))
                .filter(|path| path.is_file())
                .sorted();

            for path in files {
                let Some(category) = classify_file(&path) else {
                    continue;
                };
                if let Some(entry) = DesktopEntry::parse(&path, &config.locale)
                {
                    lists.list_mut(category).push(entry);
                }
            }
        }

        lists
    }

    /// The entries matched to a given category
    pub fn list(&self, category: Category) -> &AppList {
        match category {
            Category::Mailer => &self.mailers,
            Category::Browser => &self.browsers,
            Category::FileManager => &self.file_managers,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut AppList {
        match category {
            Category::Mailer => &mut self.mailers,
            Category::Browser => &mut self.browsers,
            Category::FileManager => &mut self.file_managers,
        }
    }
}

/// First category in priority order whose tag appears on a `Categories=`
/// line of the file. Unreadable files match nothing.
fn classify_file(path: &Path) -> Option<Category> {
    let contents = fs::read_to_string(path).ok()?;
    classify(&contents)
}

/// Desktop-file ids and display names of every entry a default scan
/// turns up, for shell completion
#[mutants::skip] // Cannot test directly, depends on system state
pub fn all_entries() -> Result<Vec<(String, String)>> {
    let config = ConfigFile::load().unwrap_or_default();
    let lists = AppLists::scan(&ScanConfig::from_env(&config.prefix)?);

    Ok(CATEGORY_PRIORITY
        .into_iter()
        .flat_map(|category| {
            lists
                .list(category)
                .iter()
                .map(|entry| (entry.file.clone(), entry.name.clone()))
                .collect_vec()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture_config(roots: &[&str]) -> ScanConfig {
        ScanConfig {
            locale: String::new(),
            search_roots: roots.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn one_entry_per_category() {
        let lists =
            AppLists::scan(&fixture_config(&["tests/apps/simple"]));

        assert_eq!(lists.mailers.len(), 1);
        assert_eq!(lists.browsers.len(), 1);
        assert_eq!(lists.file_managers.len(), 1);

        let mailer = &lists.mailers[0];
        assert_eq!(mailer.name, "Claws Mail");
        assert_eq!(mailer.file, "claws-mail.desktop");
        assert_eq!(mailer.icon.as_deref(), Some("claws-mail"));

        let browser = &lists.browsers[0];
        assert_eq!(browser.name, "NetSurf");
        assert_eq!(browser.file, "netsurf.desktop");
        assert_eq!(browser.icon.as_deref(), Some("netsurf"));

        let fm = &lists.file_managers[0];
        assert_eq!(fm.name, "PCMan File Manager");
        assert_eq!(fm.file, "pcmanfm.desktop");
        assert_eq!(fm.icon.as_deref(), Some("system-file-manager"));
    }

    #[test]
    fn browsers_appear_exactly_once() {
        let lists =
            AppLists::scan(&fixture_config(&["tests/apps/system"]));

        let shadowed: Vec<_> = lists
            .browsers
            .iter()
            .filter(|entry| entry.file == "shadowed.desktop")
            .collect();
        assert_eq!(shadowed.len(), 1);
    }

    #[test]
    fn shadowed_files_are_listed_twice() {
        // No de-duplication across roots: a user-local file with the
        // same name as a system one yields two list rows.
        let lists = AppLists::scan(&fixture_config(&[
            "tests/apps/system",
            "tests/apps/user",
        ]));

        let shadowed: Vec<_> = lists
            .browsers
            .iter()
            .filter(|entry| entry.file == "shadowed.desktop")
            .collect();
        assert_eq!(shadowed.len(), 2);
        assert_eq!(shadowed[0].name, "GNOME Web");
        assert_eq!(shadowed[1].name, "GNOME Web (user build)");
    }

    #[test]
    fn multi_category_files_land_in_one_list() {
        // seamonkey.desktop declares WebBrowser and Email; the mailer
        // filter runs first and claims it
        let lists =
            AppLists::scan(&fixture_config(&["tests/apps/system"]));

        assert!(lists
            .mailers
            .iter()
            .any(|entry| entry.file == "seamonkey.desktop"));
        assert!(!lists
            .browsers
            .iter()
            .any(|entry| entry.file == "seamonkey.desktop"));
    }

    #[test]
    fn subdirectories_and_plain_files_are_skipped() {
        let lists =
            AppLists::scan(&fixture_config(&["tests/apps/system"]));

        for category in CATEGORY_PRIORITY {
            assert!(!lists
                .list(category)
                .iter()
                .any(|entry| entry.file == "nested-browser.desktop"
                    || entry.file == "notes.txt"));
        }
    }

    #[test]
    fn missing_roots_are_skipped() {
        let with_missing = AppLists::scan(&fixture_config(&[
            "tests/apps/does-not-exist",
            "tests/apps/simple",
        ]));

        assert_eq!(with_missing.browsers.len(), 1);
        assert_eq!(with_missing.mailers.len(), 1);
    }
}
