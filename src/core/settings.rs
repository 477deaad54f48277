//! Runtime settings
//!
//! Settings are resolved with the following priority (highest to lowest):
//! 1. Environment variables
//! 2. Defaults relative to the project directory

use std::path::{Path, PathBuf};

use crate::platform::github::DEFAULT_API_URL;

/// Where backups are written, relative to the project
pub const DEFAULT_BACKUP_DIR: &str = "tmp/db_backups";
/// Rails database configuration, relative to the project
pub const DEFAULT_DATABASE_CONFIG: &str = "config/database.yml";
/// database.yml environment used when `RAILS_ENV` is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `pre_review_*.sql.gz` files
    pub backup_dir: PathBuf,
    /// Path of database.yml
    pub database_config: PathBuf,
    /// database.yml environment to back up and restore
    pub environment: String,
    /// Base URL of the GitHub REST API
    pub github_api: String,
    /// Token sent with API requests, if any
    pub github_token: Option<String>,
    project_root: PathBuf,
}

impl Settings {
    /// Defaults for a project rooted at `root`
    pub fn for_project<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            backup_dir: root.join(DEFAULT_BACKUP_DIR),
            database_config: root.join(DEFAULT_DATABASE_CONFIG),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            github_api: DEFAULT_API_URL.to_string(),
            github_token: None,
            project_root: root.to_path_buf(),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - PRREVIEW_BACKUP_DIR: backup directory
    /// - PRREVIEW_DATABASE_CONFIG: database.yml path
    /// - RAILS_ENV: database.yml environment
    /// - PRREVIEW_GITHUB_API: GitHub API base URL
    /// - GITHUB_TOKEN, GH_TOKEN: API token
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = get("PRREVIEW_BACKUP_DIR") {
            self.backup_dir = self.project_root.join(dir);
        }
        if let Some(path) = get("PRREVIEW_DATABASE_CONFIG") {
            self.database_config = self.project_root.join(path);
        }
        if let Some(environment) = get("RAILS_ENV") {
            self.environment = environment;
        }
        if let Some(api) = get("PRREVIEW_GITHUB_API") {
            self.github_api = api;
        }
        if let Some(token) = get("GITHUB_TOKEN").or_else(|| get("GH_TOKEN")) {
            self.github_token = Some(token);
        }
        self
    }
}
