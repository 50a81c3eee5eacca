//! Error type shared by every public operation of the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The payload could not be mapped onto the resource: malformed JSON, a type mismatch,
    /// a missing required field or an unknown enum literal.
    #[error("failed to decode {resource} at `{path}`: {source}")]
    Decode {
        resource: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {resource}: {source}")]
    Encode {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown {kind} literal {literal:?}")]
    UnknownLiteral { kind: &'static str, literal: String },

    #[error("invalid date {value:?}, expected yyyy-MM-dd: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("not a FreeAgent resource URL: {0}")]
    InvalidResourceUrl(String),

    #[error("invalid configuration value for {key}: {message}")]
    Config { key: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
