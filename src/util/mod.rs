//! Utility functions and helpers

pub mod cmd;
pub mod prompt;
pub mod runner;

pub use cmd::{command_line, log_cmd, shell_quote};
pub use prompt::{Prompt, ScriptedPrompt, TerminalPrompt};
pub use runner::{CommandOutput, ProcessRunner, SystemRunner};
