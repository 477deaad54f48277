//! Restore command implementation
//!
//! Restores the database snapshot taken before a review and returns to the
//! project's main branch, deleting the review branch.

use tracing::{debug, instrument};

use crate::cli::context::ReviewContext;
use crate::cli::output::Output;
use crate::core::backup::{restore_pipeline, run_as, run_as_command_line};
use crate::core::project::suffix_from_branch;
use crate::core::{BackupPath, ReviewCommand, ReviewError};
use crate::git;
use crate::util::prompt::normalize_answer;

/// Run the restore command
#[instrument(skip(ctx), fields(project = %ctx.project.name))]
pub fn run_restore(ctx: &ReviewContext, args: &[String]) -> Result<(), ReviewError> {
    ReviewCommand::Restore.check_args(args)?;

    // Without an explicit suffix the branch names the backup and must be known
    let (current, suffix) = match args.first() {
        Some(suffix) => {
            let current = git::get_current_branch(ctx.runner())
                .map_err(|e| debug!(error = %e, "current branch unknown"))
                .ok();
            (current, suffix.clone())
        }
        None => {
            let current = git::get_current_branch(ctx.runner())?;
            let suffix = suffix_from_branch(&current).to_string();
            (Some(current), suffix)
        }
    };
    debug!(?current, %suffix, "restoring");

    let backup = ctx.backup_path(&suffix);
    if backup.exists() {
        let created = backup
            .modified()
            .map(|t| format!(" (taken {})", t.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        let answer = ctx.prompt().ask(&format!(
            "Restore database from {}{}? (y/n)",
            backup, created
        ))?;
        if normalize_answer(&answer) == "y" {
            restore_database(ctx, &backup)?;
        } else {
            Output::info("Leaving the database as it is");
        }
    } else {
        Output::warning(&format!("No backup file found at {}", backup));
    }

    match current {
        Some(current) => cleanup_review_branch(ctx, &current),
        None => Output::warning("Current branch unknown, skipping branch cleanup"),
    }
    Ok(())
}

/// Load `backup` into the database. Failure is fatal (exit 6).
fn restore_database(ctx: &ReviewContext, backup: &BackupPath) -> Result<(), ReviewError> {
    let database = ctx
        .database()
        .map_err(|e| ReviewError::Restore(e.to_string()))?;
    let pipeline = restore_pipeline(backup, &database.database);

    let spinner = Output::spinner(&format!("Restoring {}...", database.database));
    let result = spinner.suspend(|| run_as(ctx.runner(), &database.username, &pipeline));
    spinner.finish_and_clear();

    let command = run_as_command_line(&database.username, &pipeline);
    let output = result.map_err(|e| ReviewError::Restore(format!("`{}`: {}", command, e)))?;
    if !output.success() {
        return Err(ReviewError::Restore(format!(
            "`{}` failed:\n{}",
            command,
            output.combined()
        )));
    }

    Output::success(&format!(
        "Database {} restored from {}",
        database.database,
        Output::path(&backup.to_string())
    ));
    Ok(())
}

/// Return to the main branch and force-delete `current`. Failures only warn.
fn cleanup_review_branch(ctx: &ReviewContext, current: &str) {
    let main_branch = ctx.project.main_branch();
    if current == main_branch {
        Output::info(&format!(
            "Already on {}, no branch to clean up",
            Output::branch_name(main_branch)
        ));
        return;
    }

    let runner = ctx.runner();
    if let Err(e) = git::checkout_branch(runner, main_branch) {
        Output::warning(&format!(
            "Could not check out {}, run `git checkout {} && git branch -D {}` manually: {}",
            main_branch, main_branch, current, e
        ));
        return;
    }

    match git::force_delete_branch(runner, current) {
        Ok(()) => Output::success(&format!(
            "Back on {}, deleted {}",
            Output::branch_name(main_branch),
            Output::branch_name(current)
        )),
        Err(e) => Output::warning(&format!(
            "Could not delete {}, run `git branch -D {}` manually: {}",
            current, current, e
        )),
    }
}
