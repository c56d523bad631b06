//! Ordered account lists attached to instructions

use crate::address::Address;
use serde::Serialize;

/// One account participating in an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountMeta {
    pub address: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    pub fn writable(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: true,
        }
    }

    pub fn readonly(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: false,
        }
    }

    /// Short flag string used in diagnostic output, e.g. `WRITE, SIGN`
    pub fn flags(&self) -> String {
        let mut flags = Vec::with_capacity(2);
        if self.is_writable {
            flags.push("WRITE");
        }
        if self.is_signer {
            flags.push("SIGN");
        }
        flags.join(", ")
    }
}

/// Positional account list. The order is what the target program resolves
/// against, so it is fixed once the list is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccountMetaList(Vec<AccountMeta>);

impl AccountMetaList {
    pub fn new(metas: Vec<AccountMeta>) -> Self {
        Self(metas)
    }

    pub fn get(&self, index: usize) -> Option<&AccountMeta> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccountMeta> {
        self.0.iter()
    }

    pub fn signers(&self) -> impl Iterator<Item = &AccountMeta> {
        self.0.iter().filter(|meta| meta.is_signer)
    }

    pub fn as_slice(&self) -> &[AccountMeta] {
        &self.0
    }
}

impl From<Vec<AccountMeta>> for AccountMetaList {
    fn from(metas: Vec<AccountMeta>) -> Self {
        Self(metas)
    }
}

impl<'a> IntoIterator for &'a AccountMetaList {
    type Item = &'a AccountMeta;
    type IntoIter = std::slice::Iter<'a, AccountMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
