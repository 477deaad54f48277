//! Review command implementation
//!
//! Backs up the development database, then checks out the PR into a
//! `review/pr<N>` branch. A non-numeric argument only names the backup.

use std::fs;
use tracing::instrument;

use super::pull_request::{resolve_pull_request_remote, update_current_branch};
use crate::cli::context::ReviewContext;
use crate::cli::output::Output;
use crate::core::backup::{dump_pipeline, run_as, run_as_command_line};
use crate::core::project::{is_pr_number, review_branch};
use crate::core::{ReviewCommand, ReviewError};
use crate::git;
use crate::util::prompt::normalize_answer;

/// What happened to the database backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// A new dump was written
    Created,
    /// An existing backup was kept
    Skipped,
    /// The dump command failed; the review continues without a backup
    Failed,
}

/// Run the review command
#[instrument(skip(ctx), fields(project = %ctx.project.name))]
pub async fn run_review(ctx: &ReviewContext, args: &[String]) -> Result<(), ReviewError> {
    ReviewCommand::Review.check_args(args)?;
    let pr_arg = args[0].as_str();

    if ctx.has_database_config() {
        backup_database(ctx, pr_arg)?;
    } else {
        Output::info(&format!(
            "No database config at {}, skipping backup",
            ctx.settings.database_config.display()
        ));
    }

    if !is_pr_number(pr_arg) {
        Output::info(&format!(
            "'{}' is not a PR number, nothing to check out",
            pr_arg
        ));
        return Ok(());
    }

    checkout_pull_request(ctx, pr_arg).await
}

/// Pull the current branch, then check out PR `number` into `review/pr<N>`
async fn checkout_pull_request(ctx: &ReviewContext, number: &str) -> Result<(), ReviewError> {
    update_current_branch(ctx)?;
    let pr = resolve_pull_request_remote(ctx, number).await?;

    let branch = review_branch(number);
    git::create_and_checkout_branch(ctx.runner(), &branch).map_err(|source| {
        ReviewError::Checkout {
            branch: branch.clone(),
            source,
        }
    })?;

    git::pull_from(ctx.runner(), &pr.remote_name, &pr.remote_branch).map_err(|source| {
        ReviewError::PullRequestBranch {
            remote: pr.remote_name.clone(),
            branch: pr.remote_branch.clone(),
            source,
        }
    })?;

    Output::success(&format!(
        "PR #{} ({}/{}) checked out into {}",
        number,
        Output::remote_name(&pr.remote_name),
        pr.remote_branch,
        Output::branch_name(&branch)
    ));
    Ok(())
}

/// Dump the database to `pre_review_<suffix>.sql.gz`.
///
/// An existing backup prompts for override, skip or exit. A failing dump
/// is reported but does not stop the review.
pub fn backup_database(ctx: &ReviewContext, suffix: &str) -> Result<BackupOutcome, ReviewError> {
    let backup = ctx.backup_path(suffix);
    fs::create_dir_all(&ctx.settings.backup_dir)?;

    if backup.exists() {
        let answer = ctx.prompt().ask(&format!(
            "Backup {} already exists. (y)es override / (s)kip / (*) exit",
            backup
        ))?;
        match normalize_answer(&answer).as_str() {
            "y" => {}
            "s" => {
                Output::info(&format!("Keeping existing backup {}", backup));
                return Ok(BackupOutcome::Skipped);
            }
            _ => return Err(ReviewError::Aborted(backup.to_string())),
        }
    }

    let database = ctx.database()?;
    let pipeline = dump_pipeline(&database.database, &backup);

    // sudo may ask for a password on the terminal, keep the spinner off it
    let spinner = Output::spinner(&format!("Backing up {}...", database.database));
    let result = spinner.suspend(|| run_as(ctx.runner(), &database.username, &pipeline));
    spinner.finish_and_clear();

    let command = run_as_command_line(&database.username, &pipeline);
    match result {
        Ok(output) if output.success() => {
            Output::success(&format!(
                "Database {} backed up to {}",
                database.database,
                Output::path(&backup.to_string())
            ));
            Ok(BackupOutcome::Created)
        }
        Ok(output) => {
            Output::error(&format!("Backup failed: {}", command));
            Output::command_output(&output.combined());
            tracing::error!(
                database = %database.database,
                status = ?output.status,
                "database backup failed"
            );
            Ok(BackupOutcome::Failed)
        }
        Err(e) => {
            Output::error(&format!("Backup failed: {}: {}", command, e));
            tracing::error!(
                database = %database.database,
                error = %e,
                "database backup could not be started"
            );
            Ok(BackupOutcome::Failed)
        }
    }
}
