use std::{io, path::PathBuf};

use serde::Serialize;
use thiserror::Error;

/// A permutation token that cannot be read as `Attribute:Value`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    #[error("malformed token '{token}': missing ':' between attribute and value")]
    MissingSeparator { token: String },

    #[error("malformed token '{token}': attribute name is empty")]
    EmptyAttribute { token: String },
}

impl ParseError {
    pub fn token(&self) -> &str {
        match self {
            ParseError::MissingSeparator { token } | ParseError::EmptyAttribute { token } => token,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("attribute '{0}' is not part of the schema")]
    UnknownAttribute(String),

    #[error("required attribute '{0}' is not part of the schema")]
    UnknownRequiredAttribute(String),

    #[error("query context has no value for attribute '{0}'")]
    MissingContextValue(String),

    #[error("'{value}' is not a legal value for attribute '{attribute}'")]
    IllegalValue { attribute: String, value: String },

    #[error("weight {weight} for attribute '{attribute}' exceeds maximum {max}")]
    WeightOutOfRange {
        attribute: String,
        weight: u32,
        max: u32,
    },

    #[error("invalid assignment '{0}': expected NAME=VALUE")]
    InvalidAssignment(String),
}
