//! Well-known program and sysvar identifiers

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// System program (`11111111111111111111111111111111`)
pub const SYSTEM_PROGRAM: [u8; 32] = [0u8; 32];

/// SPL token program (`TokenkegQfeZyiNwAJbNbGYPFXCWuBvf9Ss623VQ5DA`)
pub const TOKEN_PROGRAM: [u8; 32] = [
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79, 0xac,
    0x1e, 0x85, 0x31, 0x31, 0x9c, 0x97, 0x88, 0x81, 0x15, 0x74, 0x09, 0xbc, 0x8c, 0xcf, 0x00, 0xa9,
];

/// SPL token-2022 program (`TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`)
pub const TOKEN_2022_PROGRAM: [u8; 32] = [
    0x06, 0xdd, 0xf6, 0xe1, 0xee, 0x75, 0x8f, 0xde, 0x18, 0x42, 0x5d, 0xbc, 0xe4, 0x6c, 0xcd, 0xda,
    0xb6, 0x1a, 0xfc, 0x4d, 0x83, 0xb9, 0x0d, 0x27, 0xfe, 0xbd, 0xf9, 0x28, 0xd8, 0xa1, 0x8b, 0xfc,
];

/// Associated token account program (`ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`)
pub const ASSOCIATED_TOKEN_PROGRAM: [u8; 32] = [
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d, 0x83,
    0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9, 0xf8, 0x59,
];

/// Rent sysvar (`SysvarRent111111111111111111111111111111111`)
pub const RENT_SYSVAR: [u8; 32] = [
    0x06, 0xa7, 0xd5, 0x17, 0x19, 0x2c, 0x5c, 0x51, 0x21, 0x8c, 0xc9, 0x4c, 0x3d, 0x4a, 0xf1, 0x7f,
    0x58, 0xda, 0xee, 0x08, 0x9b, 0xa1, 0xfd, 0x44, 0xe3, 0xdb, 0xd9, 0x8a, 0x00, 0x00, 0x00, 0x00,
];

/// Native ed25519 signature verification program (`Ed25519SigVerify111111111111111111111111111`)
pub const ED25519_PROGRAM: [u8; 32] = [
    0x03, 0x7d, 0x46, 0xd6, 0x7c, 0x93, 0xfb, 0xbe, 0x12, 0xf9, 0x42, 0x8f, 0x83, 0x8d, 0x40, 0xff,
    0x05, 0x70, 0x74, 0x49, 0x27, 0xf4, 0x8a, 0x64, 0xfc, 0xca, 0x70, 0x44, 0x80, 0x00, 0x00, 0x00,
];

/// The protocol constants instruction builders depend on.
///
/// Defaults to the mainnet deployments. A configuration file only needs to
/// name the identifiers it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramIds {
    pub system_program: Address,
    pub token_program: Address,
    pub associated_token_program: Address,
    pub rent_sysvar: Address,
    pub ed25519_program: Address,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            system_program: Address::new(SYSTEM_PROGRAM),
            token_program: Address::new(TOKEN_PROGRAM),
            associated_token_program: Address::new(ASSOCIATED_TOKEN_PROGRAM),
            rent_sysvar: Address::new(RENT_SYSVAR),
            ed25519_program: Address::new(ED25519_PROGRAM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_ids_match_base58() {
        let cases: [(&[u8; 32], &str); 6] = [
            (&SYSTEM_PROGRAM, "11111111111111111111111111111111"),
            (&TOKEN_PROGRAM, "TokenkegQfeZyiNwAJbNbGYPFXCWuBvf9Ss623VQ5DA"),
            (&TOKEN_2022_PROGRAM, "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"),
            (&ASSOCIATED_TOKEN_PROGRAM, "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
            (&RENT_SYSVAR, "SysvarRent111111111111111111111111111111111"),
            (&ED25519_PROGRAM, "Ed25519SigVerify111111111111111111111111111"),
        ];
        for (bytes, text) in cases {
            assert_eq!(Address::new(*bytes).to_string(), text);
        }
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{"token_program":"TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"}"#;
        let ids: ProgramIds = serde_json::from_str(json).unwrap();
        assert_eq!(ids.token_program, Address::new(TOKEN_2022_PROGRAM));
        assert_eq!(ids.system_program, Address::new(SYSTEM_PROGRAM));
        assert_eq!(
            ids.associated_token_program,
            Address::new(ASSOCIATED_TOKEN_PROGRAM)
        );
    }
}
