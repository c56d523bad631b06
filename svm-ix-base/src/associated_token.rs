//! Associated token account program instructions
//!
//! Every instruction is a single discriminant byte with no payload; what the
//! program does is determined entirely by the positional account list.
//!
//! | disc | instruction        | builder                    |
//! |------|--------------------|----------------------------|
//! | 0    | `Create`           | [`CreateBuilder`]          |
//! | 1    | `CreateIdempotent` | [`CreateIdempotentBuilder`]|
//! | 2    | `RecoverNested`    | [`RecoverNestedBuilder`]   |

use crate::account_meta::{AccountMeta, AccountMetaList};
use crate::address::Address;
use crate::codec::{CodecError, InstructionDecoder, InstructionEncoder};
use crate::derivation::{DerivationError, find_associated_token_address_with_programs};
use crate::error::InstructionError;
use crate::instruction::Instruction;
use crate::program_ids::ProgramIds;
use crate::tree::{TreeNode, accounts_node, instruction_node, params_node, program_node};
use tracing::debug;

pub const PROGRAM_NAME: &str = "AssociatedTokenAccount";

pub const INSTRUCTION_CREATE: u8 = 0;
pub const INSTRUCTION_CREATE_IDEMPOTENT: u8 = 1;
pub const INSTRUCTION_RECOVER_NESTED: u8 = 2;

const CREATE_ACCOUNT_LABELS: [&str; 7] = [
    "payer",
    "associated_token",
    "wallet",
    "mint",
    "system_program",
    "token_program",
    "rent_sysvar",
];

const RECOVER_NESTED_ACCOUNT_LABELS: [&str; 7] = [
    "nested_associated_token",
    "nested_mint",
    "destination_associated_token",
    "owner_associated_token",
    "owner_mint",
    "wallet",
    "token_program",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociatedTokenInstruction {
    Create,
    CreateIdempotent,
    RecoverNested,
}

impl AssociatedTokenInstruction {
    pub fn discriminant(self) -> u8 {
        match self {
            Self::Create => INSTRUCTION_CREATE,
            Self::CreateIdempotent => INSTRUCTION_CREATE_IDEMPOTENT,
            Self::RecoverNested => INSTRUCTION_RECOVER_NESTED,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::CreateIdempotent => "CreateIdempotent",
            Self::RecoverNested => "RecoverNested",
        }
    }

    pub fn from_discriminant(disc: u8) -> Result<Self, CodecError> {
        match disc {
            INSTRUCTION_CREATE => Ok(Self::Create),
            INSTRUCTION_CREATE_IDEMPOTENT => Ok(Self::CreateIdempotent),
            INSTRUCTION_RECOVER_NESTED => Ok(Self::RecoverNested),
            other => Err(CodecError::UnknownDiscriminant(other)),
        }
    }

    pub fn encode(self) -> Vec<u8> {
        let mut enc = InstructionEncoder::with_capacity(1);
        enc.put_u8(self.discriminant());
        enc.finish()
    }

    /// Parses instruction data. The program tolerates an empty buffer as
    /// `Create`, the legacy encoding from before discriminants existed.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.is_empty() {
            return Ok(Self::Create);
        }
        let mut dec = InstructionDecoder::new(data);
        let kind = Self::from_discriminant(dec.read_u8()?)?;
        dec.finish()?;
        Ok(kind)
    }

    fn account_labels(self) -> &'static [&'static str; 7] {
        match self {
            Self::Create | Self::CreateIdempotent => &CREATE_ACCOUNT_LABELS,
            Self::RecoverNested => &RECOVER_NESTED_ACCOUNT_LABELS,
        }
    }

    /// Labelled dump of `accounts` as this instruction interprets them.
    /// Missing positions render as `<nil>`.
    pub fn to_tree(self, program_id: &Address, accounts: &AccountMetaList) -> TreeNode {
        let entries = self
            .account_labels()
            .iter()
            .enumerate()
            .map(|(i, label)| (*label, accounts.get(i)))
            .collect::<Vec<_>>();
        program_node(
            PROGRAM_NAME,
            program_id,
            vec![instruction_node(
                self.name(),
                vec![params_node(Vec::new()), accounts_node(&entries)],
            )],
        )
    }
}

/// Decodes `ix` and renders it, used for instructions of unknown origin
pub fn describe(ix: &Instruction) -> Result<TreeNode, CodecError> {
    let kind = AssociatedTokenInstruction::decode(ix.data())?;
    Ok(kind.to_tree(ix.program_id(), ix.accounts()))
}

/// The payer/wallet/mint triple shared by both create variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonAccounts {
    pub payer: Address,
    pub wallet: Address,
    pub mint: Address,
}

impl CommonAccounts {
    fn check(&self) -> Result<(), InstructionError> {
        if self.payer.is_zero() {
            return Err(InstructionError::MissingField("payer"));
        }
        if self.wallet.is_zero() {
            return Err(InstructionError::MissingField("wallet"));
        }
        if self.mint.is_zero() {
            return Err(InstructionError::MissingField("mint"));
        }
        Ok(())
    }

    fn create_accounts(
        &self,
        associated_token: Address,
        token_program: Address,
        program_ids: &ProgramIds,
    ) -> AccountMetaList {
        AccountMetaList::new(vec![
            AccountMeta::writable(self.payer, true),
            AccountMeta::writable(associated_token, false),
            AccountMeta::readonly(self.wallet, false),
            AccountMeta::readonly(self.mint, false),
            AccountMeta::readonly(program_ids.system_program, false),
            AccountMeta::readonly(token_program, false),
            AccountMeta::readonly(program_ids.rent_sysvar, false),
        ])
    }
}

/// Non-idempotent create: fails on-chain if the account already exists.
/// The associated address is derived here from wallet and mint.
#[derive(Debug, Clone, Default)]
pub struct CreateBuilder {
    accounts: CommonAccounts,
    program_ids: ProgramIds,
}

impl CreateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payer(mut self, payer: Address) -> Self {
        self.accounts.payer = payer;
        self
    }

    pub fn with_wallet(mut self, wallet: Address) -> Self {
        self.accounts.wallet = wallet;
        self
    }

    pub fn with_mint(mut self, mint: Address) -> Self {
        self.accounts.mint = mint;
        self
    }

    pub fn with_program_ids(mut self, program_ids: ProgramIds) -> Self {
        self.program_ids = program_ids;
        self
    }

    pub fn common_accounts(&self) -> &CommonAccounts {
        &self.accounts
    }

    fn associated_token(&self) -> Result<Address, DerivationError> {
        let (address, _) = find_associated_token_address_with_programs(
            &self.accounts.wallet,
            &self.accounts.mint,
            &self.program_ids.token_program,
            &self.program_ids.associated_token_program,
        )?;
        Ok(address)
    }

    pub fn validate(&self) -> Result<(), InstructionError> {
        self.accounts.check()?;
        self.associated_token()?;
        Ok(())
    }

    pub fn build(&self) -> Result<Instruction, InstructionError> {
        let associated_token = self.associated_token()?;
        debug!(%associated_token, wallet = %self.accounts.wallet, "building Create");
        let accounts = self.accounts.create_accounts(
            associated_token,
            self.program_ids.token_program,
            &self.program_ids,
        );
        Ok(Instruction::new(
            self.program_ids.associated_token_program,
            accounts,
            AssociatedTokenInstruction::Create.encode(),
        ))
    }

    pub fn validate_and_build(&self) -> Result<Instruction, InstructionError> {
        self.accounts.check()?;
        self.build()
    }

    pub fn to_tree(&self) -> Result<TreeNode, InstructionError> {
        let ix = self.build()?;
        Ok(AssociatedTokenInstruction::Create.to_tree(ix.program_id(), ix.accounts()))
    }
}

/// Create that succeeds when the account already exists.
///
/// **The associated address is taken as given.** `build` neither derives
/// nor checks it, so a caller that passes the wrong address (or forgets to
/// set it) gets an instruction the program will reject. Use
/// [`find_associated_token_address_with_programs`] to obtain it, or
/// [`CreateIdempotentBuilder::with_derived_associated_token`] to have the
/// builder do so explicitly.
#[derive(Debug, Clone, Default)]
pub struct CreateIdempotentBuilder {
    accounts: CommonAccounts,
    associated_token: Address,
    token_program: Option<Address>,
    program_ids: ProgramIds,
}

impl CreateIdempotentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payer(mut self, payer: Address) -> Self {
        self.accounts.payer = payer;
        self
    }

    pub fn with_wallet(mut self, wallet: Address) -> Self {
        self.accounts.wallet = wallet;
        self
    }

    pub fn with_mint(mut self, mint: Address) -> Self {
        self.accounts.mint = mint;
        self
    }

    pub fn with_associated_token(mut self, associated_token: Address) -> Self {
        self.associated_token = associated_token;
        self
    }

    /// Token program owning the new account, e.g. token-2022. Defaults to
    /// `ProgramIds::token_program`.
    pub fn with_token_program(mut self, token_program: Address) -> Self {
        self.token_program = Some(token_program);
        self
    }

    pub fn with_program_ids(mut self, program_ids: ProgramIds) -> Self {
        self.program_ids = program_ids;
        self
    }

    /// Derives the associated address from wallet, mint and token program
    /// and stores it. Set those three first.
    pub fn with_derived_associated_token(mut self) -> Result<Self, InstructionError> {
        let (address, _) = find_associated_token_address_with_programs(
            &self.accounts.wallet,
            &self.accounts.mint,
            &self.token_program(),
            &self.program_ids.associated_token_program,
        )?;
        self.associated_token = address;
        Ok(self)
    }

    pub fn common_accounts(&self) -> &CommonAccounts {
        &self.accounts
    }

    pub fn token_program(&self) -> Address {
        self.token_program.unwrap_or(self.program_ids.token_program)
    }

    pub fn build(&self) -> Instruction {
        debug!(
            associated_token = %self.associated_token,
            wallet = %self.accounts.wallet,
            "building CreateIdempotent"
        );
        let accounts = self.accounts.create_accounts(
            self.associated_token,
            self.token_program(),
            &self.program_ids,
        );
        Instruction::new(
            self.program_ids.associated_token_program,
            accounts,
            AssociatedTokenInstruction::CreateIdempotent.encode(),
        )
    }

    pub fn to_tree(&self) -> TreeNode {
        let ix = self.build();
        AssociatedTokenInstruction::CreateIdempotent.to_tree(ix.program_id(), ix.accounts())
    }
}

/// The three associated accounts a `RecoverNested` touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedAddresses {
    /// Associated account of `(wallet, owner_mint)`
    pub owner_associated_token: Address,
    /// Associated account of `(wallet, nested_mint)`, where funds go
    pub destination_associated_token: Address,
    /// Associated account of `(owner_associated_token, nested_mint)`
    pub nested_associated_token: Address,
}

/// Moves tokens out of an associated account whose owner is itself an
/// associated account, back to the wallet's own associated account, and
/// closes the nested one.
#[derive(Debug, Clone, Default)]
pub struct RecoverNestedBuilder {
    wallet: Address,
    owner_mint: Address,
    nested_mint: Address,
    program_ids: ProgramIds,
}

impl RecoverNestedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wallet(mut self, wallet: Address) -> Self {
        self.wallet = wallet;
        self
    }

    pub fn with_owner_mint(mut self, owner_mint: Address) -> Self {
        self.owner_mint = owner_mint;
        self
    }

    pub fn with_nested_mint(mut self, nested_mint: Address) -> Self {
        self.nested_mint = nested_mint;
        self
    }

    pub fn with_program_ids(mut self, program_ids: ProgramIds) -> Self {
        self.program_ids = program_ids;
        self
    }

    fn check_fields(&self) -> Result<(), InstructionError> {
        if self.wallet.is_zero() {
            return Err(InstructionError::MissingField("wallet"));
        }
        if self.owner_mint.is_zero() {
            return Err(InstructionError::MissingField("owner_mint"));
        }
        if self.nested_mint.is_zero() {
            return Err(InstructionError::MissingField("nested_mint"));
        }
        Ok(())
    }

    fn derive(&self, wallet: &Address, mint: &Address) -> Result<Address, DerivationError> {
        let (address, _) = find_associated_token_address_with_programs(
            wallet,
            mint,
            &self.program_ids.token_program,
            &self.program_ids.associated_token_program,
        )?;
        Ok(address)
    }

    pub fn derive_addresses(&self) -> Result<NestedAddresses, DerivationError> {
        let owner_associated_token = self.derive(&self.wallet, &self.owner_mint)?;
        let destination_associated_token = self.derive(&self.wallet, &self.nested_mint)?;
        // the owner's associated account stands in for the wallet here
        let nested_associated_token = self.derive(&owner_associated_token, &self.nested_mint)?;
        Ok(NestedAddresses {
            owner_associated_token,
            destination_associated_token,
            nested_associated_token,
        })
    }

    pub fn validate(&self) -> Result<(), InstructionError> {
        self.check_fields()?;
        self.derive_addresses()?;
        Ok(())
    }

    /// Builds without the zero-address checks. Derivation failures are still
    /// reported since there is no address to put in their place.
    pub fn build(&self) -> Result<Instruction, InstructionError> {
        let addrs = self.derive_addresses()?;
        debug!(
            nested = %addrs.nested_associated_token,
            destination = %addrs.destination_associated_token,
            owner = %addrs.owner_associated_token,
            "building RecoverNested"
        );
        let accounts = AccountMetaList::new(vec![
            AccountMeta::writable(addrs.nested_associated_token, false),
            AccountMeta::readonly(self.nested_mint, false),
            AccountMeta::writable(addrs.destination_associated_token, false),
            AccountMeta::readonly(addrs.owner_associated_token, false),
            AccountMeta::readonly(self.owner_mint, false),
            AccountMeta::writable(self.wallet, true),
            AccountMeta::readonly(self.program_ids.token_program, false),
        ]);
        Ok(Instruction::new(
            self.program_ids.associated_token_program,
            accounts,
            AssociatedTokenInstruction::RecoverNested.encode(),
        ))
    }

    pub fn validate_and_build(&self) -> Result<Instruction, InstructionError> {
        self.check_fields()?;
        self.build()
    }

    pub fn to_tree(&self) -> Result<TreeNode, InstructionError> {
        let ix = self.build()?;
        Ok(AssociatedTokenInstruction::RecoverNested.to_tree(ix.program_id(), ix.accounts()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::find_associated_token_address;
    use crate::program_ids::{
        ASSOCIATED_TOKEN_PROGRAM, RENT_SYSVAR, SYSTEM_PROGRAM, TOKEN_2022_PROGRAM, TOKEN_PROGRAM,
    };
    use crate::tree::render_tree;
    use assert_matches::assert_matches;

    fn addr(b: u8) -> Address {
        Address::new([b; 32])
    }

    fn flags(ix: &Instruction) -> Vec<(bool, bool)> {
        ix.accounts()
            .iter()
            .map(|m| (m.is_signer, m.is_writable))
            .collect()
    }

    #[test]
    fn test_create_idempotent_layout() {
        let payer = addr(1);
        let wallet = addr(2);
        let mint = addr(3);
        let ata = addr(4);
        let ix = CreateIdempotentBuilder::new()
            .with_payer(payer)
            .with_wallet(wallet)
            .with_mint(mint)
            .with_associated_token(ata)
            .with_token_program(Address::new(TOKEN_2022_PROGRAM))
            .build();

        assert_eq!(ix.program_id(), &Address::new(ASSOCIATED_TOKEN_PROGRAM));
        assert_eq!(ix.data(), &[INSTRUCTION_CREATE_IDEMPOTENT]);

        let addresses: Vec<Address> = ix.accounts().iter().map(|m| m.address).collect();
        assert_eq!(
            addresses,
            vec![
                payer,
                ata,
                wallet,
                mint,
                Address::new(SYSTEM_PROGRAM),
                Address::new(TOKEN_2022_PROGRAM),
                Address::new(RENT_SYSVAR),
            ]
        );
        assert_eq!(
            flags(&ix),
            vec![
                (true, true),
                (false, true),
                (false, false),
                (false, false),
                (false, false),
                (false, false),
                (false, false),
            ]
        );
        assert_eq!(ix.accounts().signers().count(), 1);
    }

    #[test]
    fn test_create_idempotent_trusts_supplied_address() {
        // deliberately not the derived address
        let bogus = addr(9);
        let ix = CreateIdempotentBuilder::new()
            .with_payer(addr(1))
            .with_wallet(addr(2))
            .with_mint(addr(3))
            .with_associated_token(bogus)
            .build();
        assert_eq!(ix.accounts().get(1).unwrap().address, bogus);
        assert_eq!(
            ix.accounts().get(5).unwrap().address,
            Address::new(TOKEN_PROGRAM)
        );
    }

    #[test]
    fn test_create_idempotent_derived_helper() {
        let wallet = addr(0x11);
        let mint = addr(0x22);
        let ix = CreateIdempotentBuilder::new()
            .with_payer(addr(1))
            .with_wallet(wallet)
            .with_mint(mint)
            .with_derived_associated_token()
            .unwrap()
            .build();
        let (expected, _) = find_associated_token_address(&wallet, &mint).unwrap();
        assert_eq!(ix.accounts().get(1).unwrap().address, expected);
    }

    #[test]
    fn test_create_derives_address() {
        let wallet = addr(0x11);
        let mint = addr(0x22);
        let ix = CreateBuilder::new()
            .with_payer(addr(1))
            .with_wallet(wallet)
            .with_mint(mint)
            .validate_and_build()
            .unwrap();
        assert_eq!(ix.data(), &[INSTRUCTION_CREATE]);
        assert_eq!(ix.accounts().len(), 7);
        assert_eq!(
            ix.accounts().get(1).unwrap().address.to_string(),
            "Dw2zjT3heDk3kqoZTxGXAfSc5UjgGSSAk5yYs8Cx4izJ"
        );
        assert_eq!(
            ix.accounts().get(5).unwrap().address,
            Address::new(TOKEN_PROGRAM)
        );
    }

    #[test]
    fn test_create_validation() {
        let builder = CreateBuilder::new().with_wallet(addr(2)).with_mint(addr(3));
        assert_eq!(
            builder.validate(),
            Err(InstructionError::MissingField("payer"))
        );
        assert_matches!(
            builder.validate_and_build(),
            Err(InstructionError::MissingField("payer"))
        );
        let builder = builder.with_payer(addr(1));
        assert!(builder.validate().is_ok());
        assert_eq!(
            builder.common_accounts(),
            &CommonAccounts {
                payer: addr(1),
                wallet: addr(2),
                mint: addr(3),
            }
        );
    }

    #[test]
    fn test_recover_nested_layout() {
        let wallet = addr(7);
        let owner_mint = addr(8);
        let nested_mint = addr(9);
        let ix = RecoverNestedBuilder::new()
            .with_wallet(wallet)
            .with_owner_mint(owner_mint)
            .with_nested_mint(nested_mint)
            .validate_and_build()
            .unwrap();

        assert_eq!(ix.data(), &[INSTRUCTION_RECOVER_NESTED]);
        assert_eq!(ix.program_id(), &Address::new(ASSOCIATED_TOKEN_PROGRAM));

        let a = ix.accounts();
        assert_eq!(a.len(), 7);
        assert_eq!(
            a.get(0).unwrap().address.to_string(),
            "AeHtE7P3vK7MoaujrxeKz73845rbnJ4HFqsHgFGH4mN9"
        );
        assert_eq!(a.get(1).unwrap().address, nested_mint);
        assert_eq!(
            a.get(2).unwrap().address.to_string(),
            "6NfTjHPpLgpH7ptC7iuxmooLW9MCsTnYTnykGT9AVvtV"
        );
        assert_eq!(
            a.get(3).unwrap().address.to_string(),
            "2cmbePSeousd5oVtdZByqX3RTAHow5Yti4VJzNt2bnkf"
        );
        assert_eq!(a.get(4).unwrap().address, owner_mint);
        assert_eq!(a.get(5).unwrap().address, wallet);
        assert_eq!(a.get(6).unwrap().address, Address::new(TOKEN_PROGRAM));

        assert_eq!(
            flags(&ix),
            vec![
                (false, true),
                (false, false),
                (false, true),
                (false, false),
                (false, false),
                (true, true),
                (false, false),
            ]
        );
        assert_eq!(a.signers().count(), 1);
    }

    #[test]
    fn test_recover_nested_consistency() {
        let wallet = addr(0x31);
        let owner_mint = addr(0x32);
        let nested_mint = addr(0x33);
        let builder = RecoverNestedBuilder::new()
            .with_wallet(wallet)
            .with_owner_mint(owner_mint)
            .with_nested_mint(nested_mint);
        let addrs = builder.derive_addresses().unwrap();

        let (owner_ata, _) = find_associated_token_address(&wallet, &owner_mint).unwrap();
        let (nested_ata, _) = find_associated_token_address(&owner_ata, &nested_mint).unwrap();
        let (dst_ata, _) = find_associated_token_address(&wallet, &nested_mint).unwrap();
        assert_eq!(addrs.owner_associated_token, owner_ata);
        assert_eq!(addrs.nested_associated_token, nested_ata);
        assert_eq!(addrs.destination_associated_token, dst_ata);

        let ix = builder.build().unwrap();
        assert_eq!(ix.accounts().get(0).unwrap().address, nested_ata);
    }

    #[test]
    fn test_recover_nested_validation_gating() {
        let full = RecoverNestedBuilder::new()
            .with_wallet(addr(1))
            .with_owner_mint(addr(2))
            .with_nested_mint(addr(3));

        let cases = [
            (full.clone().with_wallet(Address::default()), "wallet"),
            (full.clone().with_owner_mint(Address::default()), "owner_mint"),
            (full.clone().with_nested_mint(Address::default()), "nested_mint"),
        ];
        for (builder, field) in cases {
            assert_eq!(
                builder.validate_and_build(),
                Err(InstructionError::MissingField(field))
            );
            assert_eq!(builder.validate(), Err(InstructionError::MissingField(field)));
        }
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            AssociatedTokenInstruction::decode(&[]),
            Ok(AssociatedTokenInstruction::Create)
        );
        assert_eq!(
            AssociatedTokenInstruction::decode(&[1]),
            Ok(AssociatedTokenInstruction::CreateIdempotent)
        );
        assert_eq!(
            AssociatedTokenInstruction::decode(&[2]),
            Ok(AssociatedTokenInstruction::RecoverNested)
        );
        assert_eq!(
            AssociatedTokenInstruction::decode(&[3]),
            Err(CodecError::UnknownDiscriminant(3))
        );
        assert_eq!(
            AssociatedTokenInstruction::decode(&[1, 0]),
            Err(CodecError::TrailingBytes(1))
        );
    }

    #[test]
    fn test_tree_labels() {
        let builder = CreateIdempotentBuilder::new()
            .with_payer(addr(1))
            .with_wallet(addr(2))
            .with_mint(addr(3))
            .with_associated_token(addr(4));
        let tree = builder.to_tree();
        let text = render_tree(&tree);
        assert!(text.starts_with(&format!(
            "Program: {} {}",
            PROGRAM_NAME,
            Address::new(ASSOCIATED_TOKEN_PROGRAM)
        )));
        assert!(text.contains("Instruction: CreateIdempotent"));
        assert!(text.contains("Params[len=0]"));
        assert!(text.contains("Accounts[len=7]"));
        assert!(text.contains(&format!("           payer: {} [WRITE, SIGN]", addr(1))));

        let described = describe(&builder.build()).unwrap();
        assert_eq!(described, tree);
    }

    #[test]
    fn test_create_tree() {
        let tree = CreateBuilder::new()
            .with_payer(addr(1))
            .with_wallet(addr(0x11))
            .with_mint(addr(0x22))
            .to_tree()
            .unwrap();
        let text = render_tree(&tree);
        assert!(text.contains("Instruction: Create\n"));
        assert!(text.contains("Accounts[len=7]"));
        assert!(text.contains(
            "associated_token: Dw2zjT3heDk3kqoZTxGXAfSc5UjgGSSAk5yYs8Cx4izJ [WRITE]"
        ));
    }

    #[test]
    fn test_program_ids_override() {
        let ids = ProgramIds {
            associated_token_program: addr(0xaa),
            ..ProgramIds::default()
        };
        let ix = RecoverNestedBuilder::new()
            .with_wallet(addr(1))
            .with_owner_mint(addr(2))
            .with_nested_mint(addr(3))
            .with_program_ids(ids)
            .build()
            .unwrap();
        assert_eq!(ix.program_id(), &addr(0xaa));
        let default_ix = RecoverNestedBuilder::new()
            .with_wallet(addr(1))
            .with_owner_mint(addr(2))
            .with_nested_mint(addr(3))
            .build()
            .unwrap();
        assert_ne!(
            ix.accounts().get(0).unwrap().address,
            default_ix.accounts().get(0).unwrap().address
        );
    }
}
