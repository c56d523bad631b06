//! Error types for the svm-ix CLI

use svm_ix_base::{CodecError, DerivationError, InstructionError};
use thiserror::Error;

/// Main error type for the svm-ix CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Cryptographic errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Instruction builder errors
    #[error("Instruction error: {0}")]
    Instruction(#[from] InstructionError),

    /// Address derivation errors
    #[error("Derivation error: {0}")]
    Derivation(#[from] DerivationError),

    /// Instruction data errors
    #[error("Decode error: {0}")]
    Decode(#[from] CodecError),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid config format
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] serde_yaml::Error),

    /// Config file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// A program id that must be set was zeroed out
    #[error("Invalid program id: {0}")]
    InvalidProgramId(String),
}
