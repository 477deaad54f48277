//! prreview - Pull request review helper
//!
//! Backs up the local development database before a review, checks out or
//! cherry-picks a pull request, and restores the snapshot afterwards while
//! cleaning up the review branch. Installed as three commands: `rpr`
//! (review), `crp` (cherry-pick) and `rrpr` (restore).

pub mod cli;
pub mod core;
pub mod git;
pub mod platform;
pub mod telemetry;
pub mod util;

pub use cli::ReviewContext;
pub use core::{ReviewCommand, ReviewError};
pub use platform::PullRequestRef;
