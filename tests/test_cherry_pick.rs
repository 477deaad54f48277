//! Integration tests for the cherry-pick command (crp)

mod common;

use common::fixtures::{harness, ProjectFixture};
use common::mock_platform::StaticPullRequests;
use common::mock_runner::ScriptedRunner;
use prreview::cli::commands::cherry_pick::run_cherry_pick;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn pr_42() -> StaticPullRequests {
    StaticPullRequests::new().with_pull("42", "octocat", "smart-proxy", "fix-things")
}

#[tokio::test]
async fn test_cherry_pick_applies_pull_request_head() {
    let fx = ProjectFixture::new("smart-proxy");
    let runner = ScriptedRunner::new();
    runner.fail("git remote get-url", "");

    let h = harness(&fx, runner, &[], pr_42());
    run_cherry_pick(&h.ctx, &args(&["42"])).await.unwrap();

    assert_eq!(
        h.runner.calls(),
        vec![
            "git pull",
            "git remote get-url octocat",
            "git remote add octocat git@github.com:octocat/smart-proxy.git",
            "git fetch octocat",
            "git cherry-pick octocat/fix-things",
        ]
    );
}

#[tokio::test]
async fn test_cherry_pick_does_not_touch_database() {
    let fx = ProjectFixture::new("smart-proxy").with_database_config();
    let runner = ScriptedRunner::new();
    runner.fail("git remote get-url", "");

    let h = harness(&fx, runner, &[], pr_42());
    run_cherry_pick(&h.ctx, &args(&["42"])).await.unwrap();

    assert!(h.runner.calls_starting_with("sudo").is_empty());
    assert!(!fx.backup_dir().exists());
}

#[tokio::test]
async fn test_cherry_pick_conflict_exits_4() {
    let fx = ProjectFixture::new("smart-proxy");
    let runner = ScriptedRunner::new();
    runner
        .fail("git remote get-url", "")
        .fail("git cherry-pick", "error: could not apply 1a2b3c4... Fix things");

    let h = harness(&fx, runner, &[], pr_42());
    let err = run_cherry_pick(&h.ctx, &args(&["42"])).await.unwrap_err();

    assert_eq!(err.exit_code(), 4);
    assert!(err.to_string().contains("git cherry-pick octocat/fix-things"));
}

#[tokio::test]
async fn test_cherry_pick_update_failure_exits_5() {
    let fx = ProjectFixture::new("smart-proxy");
    let runner = ScriptedRunner::new();
    runner.fail("git pull", "fatal: Not possible to fast-forward, aborting.");

    let h = harness(&fx, runner, &[], pr_42());
    let err = run_cherry_pick(&h.ctx, &args(&["42"])).await.unwrap_err();

    assert_eq!(err.exit_code(), 5);
    assert!(h.runner.calls_starting_with("git cherry-pick").is_empty());
}

#[tokio::test]
async fn test_cherry_pick_requires_one_argument() {
    let fx = ProjectFixture::new("smart-proxy");
    let h = harness(&fx, ScriptedRunner::new(), &[], pr_42());

    let err = run_cherry_pick(&h.ctx, &args(&[])).await.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("Usage: crp"));
    assert!(h.runner.calls().is_empty());
}
