use serde::Serialize;
use std::{
    env,
    io::{IsTerminal, Write},
    path::{Path, PathBuf},
};
use tabled::Tabled;

use crate::{
    apps::AppLists,
    common::{render_table, Category, DesktopFileId, CATEGORY_PRIORITY},
    config::ConfigFile,
    defaults::{self, CurrentDefaults, Selection},
    error::{Error, Result},
    selector, utils,
};

/// Inputs the scanner and parser need, resolved once at startup.
/// Keeping them explicit here spares the lower layers any environment
/// lookups of their own.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Primary subtag of the system locale, empty when none is set
    pub locale: String,
    /// Application directories, in scan order
    pub search_roots: Vec<PathBuf>,
}

impl ScanConfig {
    /// Resolve from `LANG` and the xdg base directories
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn from_env(prefix: &Path) -> Result<Self> {
        let user_apps = xdg::BaseDirectories::new()?
            .get_data_home()
            .join("applications");

        Ok(Self {
            locale: primary_subtag(&env::var("LANG").unwrap_or_default())
                .to_owned(),
            search_roots: vec![prefix.join("share/applications"), user_apps],
        })
    }
}

/// `de` out of `de_DE.UTF-8`; empty input stays empty
fn primary_subtag(lang: &str) -> &str {
    lang.split(['_', '.', '@']).next().unwrap_or_default()
}

/// A single struct that holds the scanned applications and config.
/// Used to streamline explicitly passing state.
#[derive(Debug, Default)]
pub struct Config {
    /// Applications discovered on the system
    pub apps: AppLists,
    /// Defaultr-specific config file
    config: ConfigFile,
    /// Whether or not stdout is a terminal
    pub terminal_output: bool,
}

impl Config {
    /// Create a new instance of Config
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn new() -> Result<Self> {
        let config = ConfigFile::load();
        let terminal_output = std::io::stdout().is_terminal();

        // Issue a notification if defaultr is not being run in a terminal.
        // Config's errors are not able to be handled by `main`'s similar
        // error handling.
        if let Err(ref e) = config {
            if !terminal_output {
                utils::notify("defaultr error", &e.to_string())?
            }
        }

        let config = config?;
        let scan = ScanConfig::from_env(&config.prefix)?;

        Ok(Self {
            apps: AppLists::scan(&scan),
            config,
            terminal_output,
        })
    }

    /// Override the configured selector command
    pub fn override_selector(&mut self, selector: Option<String>) {
        if let Some(selector) = selector {
            self.config.selector = selector;
        }
    }

    /// Query the current defaults, run the three-category selection, and
    /// hand the chosen ids to the system tools
    #[mutants::skip] // Cannot test directly, runs external commands
    pub fn pick_defaults(&self) -> Result<()> {
        let current = CurrentDefaults::query()?;
        let selection =
            selector::pick_all(&self.apps, &current, &self.config.selector)?;
        defaults::apply_changes(&selection)
    }

    /// Apply the given ids without going through the selection surface
    #[mutants::skip] // Cannot test directly, runs external commands
    pub fn set_defaults(
        &self,
        browser: Option<DesktopFileId>,
        mailer: Option<DesktopFileId>,
        file_manager: Option<DesktopFileId>,
    ) -> Result<()> {
        let selection = Selection {
            browser,
            mailer,
            file_manager,
        };
        self.validate_selection(&selection)?;
        defaults::apply_changes(&selection)
    }

    /// Check that every id in the selection names a scanned entry of the
    /// matching category
    fn validate_selection(&self, selection: &Selection) -> Result<()> {
        let pairs = [
            (&selection.mailer, Category::Mailer),
            (&selection.browser, Category::Browser),
            (&selection.file_manager, Category::FileManager),
        ];

        for (id, category) in pairs {
            if let Some(id) = id {
                if !self
                    .apps
                    .list(category)
                    .iter()
                    .any(|entry| entry.file == id.as_str())
                {
                    return Err(Error::NotFound(id.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Print the scanned applications of every category in a table
    pub fn list_apps<W: Write>(
        &self,
        writer: &mut W,
        output_json: bool,
    ) -> Result<()> {
        let rows: Vec<AppRow> = CATEGORY_PRIORITY
            .into_iter()
            .flat_map(|category| {
                self.apps.list(category).iter().map(move |entry| AppRow {
                    category: category.to_string(),
                    name: entry.name.clone(),
                    file: entry.file.clone(),
                    icon: entry.icon.clone().unwrap_or_default(),
                })
            })
            .collect();

        if output_json {
            writeln!(writer, "{}", serde_json::to_string(&rows)?)?
        } else {
            writeln!(writer, "{}", render_table(&rows, self.terminal_output))?
        }

        Ok(())
    }

    /// Print the currently configured default of every category
    #[mutants::skip] // Cannot test directly, runs external commands
    pub fn show_defaults<W: Write>(
        &self,
        writer: &mut W,
        output_json: bool,
    ) -> Result<()> {
        let current = CurrentDefaults::query()?;
        self.write_defaults(writer, &current, output_json)
    }

    /// Render the given defaults; an empty handler cell means nothing is
    /// currently configured for that category
    fn write_defaults<W: Write>(
        &self,
        writer: &mut W,
        current: &CurrentDefaults,
        output_json: bool,
    ) -> Result<()> {
        let output = if output_json {
            serde_json::json!({
                "browser": current.browser,
                "mailer": current.mailer,
                "file_manager": current.file_manager,
            })
            .to_string()
        } else {
            let rows = vec![
                DefaultRow::new(Category::Mailer, &current.mailer),
                DefaultRow::new(Category::Browser, &current.browser),
                DefaultRow::new(Category::FileManager, &current.file_manager),
            ];
            render_table(&rows, self.terminal_output)
        };

        writeln!(writer, "{output}")?;
        Ok(())
    }
}

/// Internal helper struct for turning scanned entries into tabular data
#[derive(Tabled, Serialize)]
struct AppRow {
    category: String,
    name: String,
    file: String,
    icon: String,
}

/// Internal helper struct for turning current defaults into tabular data
#[derive(Tabled, Serialize)]
struct DefaultRow {
    category: String,
    handler: String,
}

impl DefaultRow {
    fn new(category: Category, handler: &str) -> Self {
        Self {
            category: category.to_string(),
            handler: handler.to_owned(),
        }
    }
}
