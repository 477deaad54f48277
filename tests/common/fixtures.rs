//! Test fixtures for creating project directories and review contexts.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

use prreview::cli::ReviewContext;
use prreview::core::{Project, Settings};
use prreview::util::ScriptedPrompt;

use super::mock_platform::StaticPullRequests;
use super::mock_runner::ScriptedRunner;

pub const DATABASE_YML: &str = r#"
default: &default
  adapter: postgresql
  username: foreman

development:
  <<: *default
  database: foreman_dev

test:
  <<: *default
  database: foreman_test
"#;

/// A temporary project directory named after the project under review.
pub struct ProjectFixture {
    pub _temp: TempDir,
    pub root: PathBuf,
}

impl ProjectFixture {
    /// Create `<tmp>/<name>`
    pub fn new(name: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join(name);
        fs::create_dir_all(&root).unwrap();
        Self { _temp: temp, root }
    }

    /// Add a `config/database.yml`
    pub fn with_database_config(self) -> Self {
        let config_dir = self.root.join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("database.yml"), DATABASE_YML).unwrap();
        self
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join("tmp").join("db_backups")
    }

    pub fn backup_file(&self, suffix: &str) -> PathBuf {
        self.backup_dir()
            .join(format!("pre_review_{}.sql.gz", suffix))
    }

    /// Place an existing backup for `suffix`
    pub fn create_backup(&self, suffix: &str) -> PathBuf {
        let path = self.backup_file(suffix);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"\x1f\x8b fake dump").unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}

/// Handles to the doubles wired into a context
pub struct Harness {
    pub ctx: ReviewContext,
    pub runner: Rc<ScriptedRunner>,
    pub prompt: Rc<ScriptedPrompt>,
}

/// Build a context for `fixture` with default settings (no environment overrides)
pub fn harness(
    fixture: &ProjectFixture,
    runner: ScriptedRunner,
    answers: &[&str],
    pulls: StaticPullRequests,
) -> Harness {
    let runner = Rc::new(runner);
    let prompt = Rc::new(ScriptedPrompt::new(answers.iter().copied()));
    let ctx = ReviewContext::new(
        Project::from_dir(fixture.path()),
        Settings::for_project(fixture.path()),
        Box::new(runner.clone()),
        Box::new(prompt.clone()),
        Box::new(pulls),
    );
    Harness {
        ctx,
        runner,
        prompt,
    }
}
