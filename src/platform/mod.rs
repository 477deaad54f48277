//! Hosting platform access
//!
//! Resolves a pull request number to the fork and branch it comes from.

pub mod github;
pub mod traits;
pub mod types;

pub use github::GitHubClient;
pub use traits::{PlatformError, PullRequestSource};
pub use types::PullRequestRef;
