//! The unit handed to transaction assembly

use crate::account_meta::AccountMetaList;
use crate::address::Address;
use serde::{Serialize, Serializer};

/// A fully assembled program invocation.
///
/// Builders are the only producers; once built the program id, account order
/// and data bytes cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    program_id: Address,
    accounts: AccountMetaList,
    #[serde(serialize_with = "serialize_hex")]
    data: Vec<u8>,
}

impl Instruction {
    pub fn new(program_id: Address, accounts: AccountMetaList, data: Vec<u8>) -> Self {
        Self {
            program_id,
            accounts,
            data,
        }
    }

    pub fn program_id(&self) -> &Address {
        &self.program_id
    }

    pub fn accounts(&self) -> &AccountMetaList {
        &self.accounts
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Leading discriminant byte, if the program uses one
    pub fn discriminant(&self) -> Option<u8> {
        self.data.first().copied()
    }

    pub fn into_parts(self) -> (Address, AccountMetaList, Vec<u8>) {
        (self.program_id, self.accounts, self.data)
    }
}

fn serialize_hex<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&hex::encode(data))
}
