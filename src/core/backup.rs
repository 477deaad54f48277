//! Database backup files and the shell pipelines that write and read them

use chrono::{DateTime, Local};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::{command_line, shell_quote, CommandOutput, ProcessRunner};

/// File name prefix of every backup
pub const BACKUP_PREFIX: &str = "pre_review_";
/// File name extension of every backup
pub const BACKUP_EXTENSION: &str = ".sql.gz";

/// Location of a gzip-compressed SQL dump taken before a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupPath(PathBuf);

impl BackupPath {
    /// `<backup_dir>/pre_review_<suffix>.sql.gz`
    pub fn new<P: AsRef<Path>>(backup_dir: P, suffix: &str) -> Self {
        Self(
            backup_dir
                .as_ref()
                .join(format!("{}{}{}", BACKUP_PREFIX, suffix, BACKUP_EXTENSION)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn exists(&self) -> bool {
        self.0.exists()
    }

    /// Last modification time, if the file exists
    pub fn modified(&self) -> Option<DateTime<Local>> {
        let modified = std::fs::metadata(&self.0).and_then(|m| m.modified()).ok()?;
        Some(DateTime::<Local>::from(modified))
    }
}

impl fmt::Display for BackupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// `pg_dump --clean <database> | gzip > <path>`
pub fn dump_pipeline(database: &str, backup: &BackupPath) -> String {
    format!(
        "pg_dump --clean {} | gzip > {}",
        shell_quote(database),
        shell_quote(&backup.path().to_string_lossy())
    )
}

/// `zcat <path> | psql <database>`
pub fn restore_pipeline(backup: &BackupPath, database: &str) -> String {
    format!(
        "zcat {} | psql {}",
        shell_quote(&backup.path().to_string_lossy()),
        shell_quote(database)
    )
}

/// Run a shell pipeline as the database-owning system user.
///
/// pipefail makes a failing `pg_dump` or `zcat` fail the whole pipeline
/// instead of being masked by the last command's status.
pub fn run_as(
    runner: &dyn ProcessRunner,
    user: &str,
    pipeline: &str,
) -> io::Result<CommandOutput> {
    runner.run("sudo", &["-u", user, "bash", "-o", "pipefail", "-c", pipeline])
}

/// The command line [`run_as`] executes, for error messages
pub fn run_as_command_line(user: &str, pipeline: &str) -> String {
    command_line(
        "sudo",
        &["-u", user, "bash", "-o", "pipefail", "-c", &shell_quote(pipeline)],
    )
}
