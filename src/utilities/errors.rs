//! Error types for the capability catalogue and conformance checking.

use thiserror::Error;

use crate::conformance::Mismatch;

/// Errors raised while declaring, loading or registering protocols.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Declaration validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A different declaration is already registered under this name.
    #[error("Conflicting declaration for protocol {name}")]
    Conflict { name: String },

    /// A name is already taken as an alias of a different protocol, or an
    /// alias would shadow another protocol's canonical name.
    #[error("Alias {alias} already refers to protocol {owner}")]
    AliasTaken { alias: String, owner: String },
}

/// Errors raised by structural conformance checks.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// The protocol name resolves to nothing in the catalogue.
    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),

    /// The type is missing required methods or exposes incompatible ones.
    #[error("{type_name} does not conform to {protocol}: {}", describe(.mismatches))]
    NotConforming {
        type_name: String,
        protocol: String,
        mismatches: Vec<Mismatch>,
    },
}

fn describe(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
