//! External process execution
//!
//! Every git and database command goes through [`ProcessRunner`], so the
//! command handlers never touch `std::process` directly and tests can
//! substitute a scripted runner.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::rc::Rc;

use super::cmd::log_cmd;

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run that printed `stdout`
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and error output
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Stdout followed by stderr, trimmed, for error reports
    pub fn combined(&self) -> String {
        let stdout = self.stdout.trim();
        let stderr = self.stderr.trim();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, _) => stderr.to_string(),
            (false, true) => stdout.to_string(),
            (false, false) => format!("{}\n{}", stdout, stderr),
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Runs an external program to completion and captures its output.
///
/// `Err` is reserved for failing to start the process at all; a process that
/// ran and exited non-zero is reported through [`CommandOutput::status`].
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for Rc<R> {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        (**self).run(program, args)
    }
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for Box<R> {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        (**self).run(program, args)
    }
}

/// Runs real processes inside the project directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    workdir: PathBuf,
}

impl SystemRunner {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(&self.workdir);
        log_cmd(&cmd);
        let output = cmd.output()?;
        Ok(CommandOutput::from(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_combined_output() {
        assert_eq!(CommandOutput::ok("done\n").combined(), "done");
        assert_eq!(CommandOutput::failed(1, " boom ").combined(), "boom");

        let both = CommandOutput {
            status: Some(1),
            stdout: "partial\n".to_string(),
            stderr: "fatal: nope\n".to_string(),
        };
        assert_eq!(both.combined(), "partial\nfatal: nope");
        assert!(!both.success());
    }

    #[test]
    fn test_system_runner_captures_stdout() {
        let temp = TempDir::new().unwrap();
        let runner = SystemRunner::new(temp.path());
        let output = runner.run("git", &["--version"]).unwrap();
        assert!(output.success());
        assert!(output.stdout.starts_with("git version"));
    }

    #[test]
    fn test_system_runner_reports_failure_status() {
        let temp = TempDir::new().unwrap();
        let runner = SystemRunner::new(temp.path());
        // Not a repository, so rev-parse must fail
        let output = runner
            .run("git", &["rev-parse", "--abbrev-ref", "HEAD"])
            .unwrap();
        assert!(!output.success());
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn test_system_runner_missing_program() {
        let temp = TempDir::new().unwrap();
        let runner = SystemRunner::new(temp.path());
        assert!(runner
            .run("definitely-not-a-real-program-prreview", &[])
            .is_err());
    }
}
