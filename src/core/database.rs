//! Rails-style `config/database.yml` parsing
//!
//! Only the `database` and `username` keys of each environment are read.
//! YAML merge keys (`<<: *default`) are honoured, since most database.yml
//! files share settings that way.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the database configuration
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse database config YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("No '{0}' environment in the database config")]
    MissingEnvironment(String),

    #[error("Invalid '{environment}' entry in the database config: {source}")]
    InvalidEntry {
        environment: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Connection settings of one environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseEntry {
    /// Database name passed to pg_dump and psql
    pub database: String,
    /// System user the database commands run as
    #[serde(default = "default_username")]
    pub username: String,
}

fn default_username() -> String {
    "postgres".to_string()
}

/// Parsed database.yml, keyed by environment name
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    environments: Mapping,
}

impl DatabaseConfig {
    /// Load from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DatabaseError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse YAML content
    pub fn parse(content: &str) -> Result<Self, DatabaseError> {
        let environments = match serde_yaml::from_str::<Value>(content)? {
            Value::Mapping(map) => map,
            Value::Null => Mapping::new(),
            other => {
                return Err(DatabaseError::ParseError(
                    <serde_yaml::Error as serde::de::Error>::custom(format!(
                        "expected a mapping of environments, found {:?}",
                        other
                    )),
                ))
            }
        };
        Ok(Self { environments })
    }

    /// Settings of `environment`
    pub fn entry(&self, environment: &str) -> Result<DatabaseEntry, DatabaseError> {
        let value = self
            .environments
            .get(environment)
            .ok_or_else(|| DatabaseError::MissingEnvironment(environment.to_string()))?;

        serde_yaml::from_value(resolve_merge(value)).map_err(|source| {
            DatabaseError::InvalidEntry {
                environment: environment.to_string(),
                source,
            }
        })
    }

    /// Names of all configured environments
    pub fn environments(&self) -> Vec<String> {
        self.environments
            .keys()
            .filter_map(|k| k.as_str().map(|s| s.to_string()))
            .collect()
    }
}

/// Fold a `<<` merge key into its mapping; explicit keys win.
fn resolve_merge(value: &Value) -> Value {
    let Value::Mapping(map) = value else {
        return value.clone();
    };

    let mut merged = Mapping::new();
    if let Some(Value::Mapping(base)) = map.get("<<") {
        for (k, v) in base {
            merged.insert(k.clone(), v.clone());
        }
    }
    for (k, v) in map {
        if k.as_str() != Some("<<") {
            merged.insert(k.clone(), v.clone());
        }
    }
    Value::Mapping(merged)
}
