//! CLI command implementations
//!
//! Each command is implemented in its own module.

pub mod cherry_pick;
pub mod pull_request;
pub mod restore;
pub mod review;

use crate::cli::context::ReviewContext;
use crate::core::{ReviewCommand, ReviewError};

/// Run the selected operation with its positional arguments
pub async fn run_command(
    ctx: &ReviewContext,
    command: ReviewCommand,
    args: &[String],
) -> Result<(), ReviewError> {
    match command {
        ReviewCommand::Review => review::run_review(ctx, args).await,
        ReviewCommand::CherryPick => cherry_pick::run_cherry_pick(ctx, args).await,
        ReviewCommand::Restore => restore::run_restore(ctx, args),
    }
}
