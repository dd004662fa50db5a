use crate::core::pagination::{DEFAULT_PAGE_SIZE, validate_page_size};
use crate::core::sort::SortState;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// Grid preferences remembered between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub sort: SortState,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort: SortState::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub preferences: Preferences,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            preferences: Preferences::default(),
        }
    }
}

/// Where the grid keeps its sort and page size.
pub trait PreferenceStore {
    fn load_sort(&self) -> SortState;
    fn save_sort(&mut self, sort: SortState) -> AppResult<()>;
    fn load_page_size(&self) -> usize;
    fn save_page_size(&mut self, page_size: usize) -> AppResult<()>;
}

impl Config {
    /// `~/.leadgrid`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".leadgrid")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("leadgrid.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("leadgrid.sqlite")
    }

    /// Load the configuration file. A missing file yields the defaults; an
    /// unreadable one is reported and the defaults are used as well.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Invalid configuration file {}: {e}. Using defaults.",
                        path.display()
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Cannot read configuration file {}: {e}. Using defaults.",
                    path.display()
                ));
                Config::default()
            }
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Resolve the database path: absolute paths and `~/` are taken as is,
    /// bare names land in the config directory.
    pub fn resolve_db_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() || p.parent().is_some_and(|d| !d.as_os_str().is_empty()) {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Create the configuration file (unless in test mode) and an empty
    /// database file. Returns the configuration now in effect.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let db_path = Self::resolve_db_path(custom_db);

        let mut config = if is_test {
            Config::default()
        } else {
            Self::load()
        };
        config.database = db_path.to_string_lossy().to_string();

        if !is_test {
            config.save()?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(dir) = db_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}

impl PreferenceStore for Config {
    fn load_sort(&self) -> SortState {
        self.preferences.sort
    }

    fn save_sort(&mut self, sort: SortState) -> AppResult<()> {
        self.preferences.sort = sort;
        self.save()
    }

    /// Falls back to the default when the stored value is out of range.
    fn load_page_size(&self) -> usize {
        validate_page_size(self.preferences.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    fn save_page_size(&mut self, page_size: usize) -> AppResult<()> {
        self.preferences.page_size = validate_page_size(page_size)?;
        self.save()
    }
}
