//! Review context passed to command handlers
//!
//! Bundles the project, settings and the injectable capabilities (process
//! runner, prompt, pull request source) into a single struct built once per
//! invocation.

use once_cell::unsync::OnceCell;
use std::path::Path;

use crate::core::{BackupPath, DatabaseConfig, DatabaseEntry, DatabaseError, Project, Settings};
use crate::platform::{GitHubClient, PullRequestSource};
use crate::util::{ProcessRunner, Prompt, SystemRunner, TerminalPrompt};

/// Context available to all command handlers.
pub struct ReviewContext {
    /// Project being reviewed
    pub project: Project,
    /// Resolved settings
    pub settings: Settings,
    runner: Box<dyn ProcessRunner>,
    prompt: Box<dyn Prompt>,
    pull_requests: Box<dyn PullRequestSource>,
    database: OnceCell<DatabaseConfig>,
}

impl ReviewContext {
    pub fn new(
        project: Project,
        settings: Settings,
        runner: Box<dyn ProcessRunner>,
        prompt: Box<dyn Prompt>,
        pull_requests: Box<dyn PullRequestSource>,
    ) -> Self {
        Self {
            project,
            settings,
            runner,
            prompt,
            pull_requests,
            database: OnceCell::new(),
        }
    }

    /// Context for a project directory, running real commands and talking to GitHub
    pub fn for_project<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        let project = Project::from_dir(root);
        let settings = Settings::for_project(root).with_env_overrides();
        let pull_requests = GitHubClient::new(&settings.github_api, settings.github_token.clone());

        Self::new(
            project,
            settings,
            Box::new(SystemRunner::new(root)),
            Box::new(TerminalPrompt),
            Box::new(pull_requests),
        )
    }

    pub fn runner(&self) -> &dyn ProcessRunner {
        self.runner.as_ref()
    }

    pub fn prompt(&self) -> &dyn Prompt {
        self.prompt.as_ref()
    }

    pub fn pull_requests(&self) -> &dyn PullRequestSource {
        self.pull_requests.as_ref()
    }

    /// Whether the project has a database config to back up from
    pub fn has_database_config(&self) -> bool {
        self.settings.database_config.is_file()
    }

    /// Database settings of the active environment.
    ///
    /// database.yml is read on first use and cached for the invocation.
    pub fn database(&self) -> Result<DatabaseEntry, DatabaseError> {
        let config = self
            .database
            .get_or_try_init(|| DatabaseConfig::load(&self.settings.database_config))?;
        config.entry(&self.settings.environment)
    }

    /// Backup file for `suffix`
    pub fn backup_path(&self, suffix: &str) -> BackupPath {
        BackupPath::new(&self.settings.backup_dir, suffix)
    }
}
