//! Scripted process runner for offline command tests.
//!
//! Records every command line and answers from a list of prefix rules, so
//! review flows can be exercised without git, sudo or PostgreSQL.

use std::cell::RefCell;
use std::io;

use prreview::util::{command_line, CommandOutput, ProcessRunner};

/// Records calls; the first rule whose prefix matches the command line wins.
/// Unmatched commands succeed with no output.
#[derive(Default)]
pub struct ScriptedRunner {
    rules: RefCell<Vec<(String, CommandOutput)>>,
    missing: RefCell<Vec<String>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands starting with `prefix` with `output`
    pub fn respond(&self, prefix: &str, output: CommandOutput) -> &Self {
        self.rules.borrow_mut().push((prefix.to_string(), output));
        self
    }

    /// Succeed with `stdout` for commands starting with `prefix`
    pub fn stdout(&self, prefix: &str, stdout: &str) -> &Self {
        self.respond(prefix, CommandOutput::ok(stdout))
    }

    /// Fail with exit code 1 and `stderr` for commands starting with `prefix`
    pub fn fail(&self, prefix: &str, stderr: &str) -> &Self {
        self.respond(prefix, CommandOutput::failed(1, stderr))
    }

    /// Commands starting with `prefix` cannot be started at all
    pub fn missing(&self, prefix: &str) -> &Self {
        self.missing.borrow_mut().push(prefix.to_string());
        self
    }

    /// Every command line run so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Command lines starting with `prefix`
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    pub fn ran(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let line = command_line(program, args);
        self.calls.borrow_mut().push(line.clone());

        if self.missing.borrow().iter().any(|p| line.starts_with(p.as_str())) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", program),
            ));
        }

        let output = self
            .rules
            .borrow()
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| CommandOutput::ok(""));
        Ok(output)
    }
}
