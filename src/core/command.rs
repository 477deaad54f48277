//! Selecting the operation from the invoked program name

use std::fmt;
use std::path::Path;

use super::error::ReviewError;

/// Name of the multi-call binary that takes the operation as first argument
pub const MULTICALL_NAME: &str = "prreview";

/// The three review operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCommand {
    /// `rpr`: back up the database and check out a PR
    Review,
    /// `crp`: cherry-pick a PR onto the current branch
    CherryPick,
    /// `rrpr`: restore the database and drop the review branch
    Restore,
}

impl ReviewCommand {
    /// Select the operation from `argv[0]`, ignoring any directory and `.exe`
    pub fn from_program_name(program: &str) -> Option<Self> {
        let name = Path::new(program)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        match name.as_str() {
            "rpr" => Some(ReviewCommand::Review),
            "crp" => Some(ReviewCommand::CherryPick),
            "rrpr" => Some(ReviewCommand::Restore),
            _ => None,
        }
    }

    /// Select the operation from the first argument of the multi-call binary
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "rpr" | "review" => Some(ReviewCommand::Review),
            "crp" | "cherry-pick" | "cherry_pick" => Some(ReviewCommand::CherryPick),
            "rrpr" | "restore" => Some(ReviewCommand::Restore),
            _ => None,
        }
    }

    /// Executable name the operation is installed as
    pub fn program_name(&self) -> &'static str {
        match self {
            ReviewCommand::Review => "rpr",
            ReviewCommand::CherryPick => "crp",
            ReviewCommand::Restore => "rrpr",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            ReviewCommand::Review => "Usage: rpr <pr-number|backup-name>",
            ReviewCommand::CherryPick => "Usage: crp <pr-number>",
            ReviewCommand::Restore => "Usage: rrpr [backup-name]",
        }
    }

    /// Check the positional argument count: exactly one, or at most one for restore
    pub fn check_args(&self, args: &[String]) -> Result<(), ReviewError> {
        let valid = match self {
            ReviewCommand::Review | ReviewCommand::CherryPick => args.len() == 1,
            ReviewCommand::Restore => args.len() <= 1,
        };
        if valid {
            Ok(())
        } else {
            Err(ReviewError::Usage(self.usage().to_string()))
        }
    }
}

impl fmt::Display for ReviewCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program_name())
    }
}

/// Pick the operation for a full argument vector.
///
/// Under one of the three operation names `argv` is returned as is. Under the
/// multi-call name the operation argument is consumed and `argv[0]` becomes
/// the operation's program name, so clap's usage output matches.
pub fn select_command(mut argv: Vec<String>) -> Result<(ReviewCommand, Vec<String>), ReviewError> {
    let program = argv.first().cloned().unwrap_or_default();
    if let Some(command) = ReviewCommand::from_program_name(&program) {
        return Ok((command, argv));
    }

    let stem = Path::new(&program)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if stem == MULTICALL_NAME {
        if let Some(command) = argv.get(1).and_then(|a| ReviewCommand::from_alias(a)) {
            argv.remove(1);
            argv[0] = command.program_name().to_string();
            return Ok((command, argv));
        }
    }

    Err(ReviewError::UnknownCommand(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_from_program_name() {
        assert_eq!(
            ReviewCommand::from_program_name("rpr"),
            Some(ReviewCommand::Review)
        );
        assert_eq!(
            ReviewCommand::from_program_name("/usr/local/bin/crp"),
            Some(ReviewCommand::CherryPick)
        );
        assert_eq!(
            ReviewCommand::from_program_name("rrpr.exe"),
            Some(ReviewCommand::Restore)
        );
        assert_eq!(ReviewCommand::from_program_name("review"), None);
        assert_eq!(ReviewCommand::from_program_name(""), None);
    }

    #[test]
    fn test_check_args() {
        let one = argv(&["42"]);
        let two = argv(&["42", "43"]);
        assert!(ReviewCommand::Review.check_args(&one).is_ok());
        assert!(ReviewCommand::Review.check_args(&[]).is_err());
        assert!(ReviewCommand::CherryPick.check_args(&two).is_err());
        assert!(ReviewCommand::Restore.check_args(&[]).is_ok());
        assert!(ReviewCommand::Restore.check_args(&one).is_ok());

        let err = ReviewCommand::Restore.check_args(&two).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("rrpr [backup-name]"));
    }

    #[test]
    fn test_select_command_by_program_name() {
        let (command, args) = select_command(argv(&["/usr/bin/rrpr", "42"])).unwrap();
        assert_eq!(command, ReviewCommand::Restore);
        assert_eq!(args, argv(&["/usr/bin/rrpr", "42"]));
    }

    #[test]
    fn test_select_command_multicall() {
        let (command, args) = select_command(argv(&["prreview", "cherry-pick", "42"])).unwrap();
        assert_eq!(command, ReviewCommand::CherryPick);
        assert_eq!(args, argv(&["crp", "42"]));
    }

    #[test]
    fn test_select_command_unknown() {
        let err = select_command(argv(&["/usr/bin/review-pr", "42"])).unwrap_err();
        assert!(matches!(err, ReviewError::UnknownCommand(ref name) if name == "review-pr"));
        assert!(select_command(argv(&["prreview"])).is_err());
        assert!(select_command(argv(&["prreview", "merge"])).is_err());
        assert!(select_command(Vec::new()).is_err());
    }
}
