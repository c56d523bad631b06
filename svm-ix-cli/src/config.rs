//! Configuration management for the svm-ix CLI
//!
//! The config file is optional. Every key is optional too; omitted program
//! ids keep their well-known mainnet values.
//!
//! ```yaml
//! program_ids:
//!   token_program: TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use svm_ix_base::ProgramIds;
use tracing::debug;

use crate::error::{CliError, ConfigError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program ids used by builders and the decoder
    pub program_ids: ProgramIds,
}

impl Config {
    /// Loads `path` if given, otherwise returns the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, CliError> {
        // an empty document parses as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content).map_err(ConfigError::InvalidFormat)?;
        config.validate()?;
        Ok(config)
    }

    /// The system program is legitimately all zeros; nothing else is.
    pub fn validate(&self) -> Result<(), CliError> {
        let ids = &self.program_ids;
        let required = [
            ("token_program", ids.token_program),
            ("associated_token_program", ids.associated_token_program),
            ("rent_sysvar", ids.rent_sysvar),
            ("ed25519_program", ids.ed25519_program),
        ];
        for (name, id) in required {
            if id.is_zero() {
                return Err(ConfigError::InvalidProgramId(format!("{} is zero", name)).into());
            }
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
