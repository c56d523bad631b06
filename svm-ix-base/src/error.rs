use crate::derivation::DerivationError;
use crate::signer::SignerError;
use thiserror::Error;

/// Errors returned by instruction builders
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstructionError {
    /// A required address was left at the zero value
    #[error("{0} not set")]
    MissingField(&'static str),

    /// Address derivation found no off-curve bump
    #[error("address derivation failed: {0}")]
    Derivation(#[from] DerivationError),

    /// The signing collaborator failed
    #[error("signing failed: {0}")]
    Signature(#[from] SignerError),
}
