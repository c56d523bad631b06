//! Signing collaborators

use crate::address::{Address, Signature};
use ed25519_dalek::{Signer, SigningKey};
use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignerError {
    #[error("key unavailable: {0}")]
    KeyUnavailable(String),
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("signing failed: {0}")]
    SigningFailed(String),
}

/// Anything that can produce an ed25519 signature for its public key.
pub trait MessageSigner {
    fn pubkey(&self) -> Address;
    fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError>;
}

/// In-memory ed25519 key pair
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    pub fn generate() -> Result<Self, SignerError> {
        let mut secret = [0u8; 32];
        let mut rng = OsRng;
        rng.try_fill_bytes(&mut secret)
            .map_err(|e| SignerError::KeyUnavailable(e.to_string()))?;
        Ok(Self::from_secret_bytes(&secret))
    }

    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(secret),
        }
    }

    pub fn from_hex<P: AsRef<[u8]>>(hex_private_key: P) -> Result<Self, SignerError> {
        let bytes = hex::decode(hex_private_key)
            .map_err(|e| SignerError::InvalidPrivateKey(e.to_string()))?;
        let secret: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            SignerError::InvalidPrivateKey(format!(
                "private key must be 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self::from_secret_bytes(&secret))
    }

    pub fn secret_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl MessageSigner for Keypair {
    fn pubkey(&self) -> Address {
        Address::new(self.signing_key.verifying_key().to_bytes())
    }

    fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        let sig = self
            .signing_key
            .try_sign(message)
            .map_err(|e| SignerError::SigningFailed(e.to_string()))?;
        Ok(Signature::new(sig.to_bytes()))
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("pubkey", &self.pubkey())
            .finish_non_exhaustive()
    }
}
