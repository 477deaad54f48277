//! Core business logic for prreview

pub mod backup;
pub mod command;
pub mod database;
pub mod error;
pub mod project;
pub mod settings;

pub use backup::BackupPath;
pub use command::ReviewCommand;
pub use database::{DatabaseConfig, DatabaseEntry, DatabaseError};
pub use error::ReviewError;
pub use project::Project;
pub use settings::Settings;
