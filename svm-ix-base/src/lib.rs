pub mod account_meta;
pub mod address;
pub mod associated_token;
pub mod codec;
pub mod derivation;
pub mod error;
pub mod instruction;
pub mod program_ids;
pub mod sig_verify;
pub mod signer;
pub mod tree;

// re-export types
pub use account_meta::{AccountMeta, AccountMetaList};
pub use address::{Address, AddressError, Signature};
pub use instruction::Instruction;
pub use program_ids::ProgramIds;
pub use signer::{Keypair, MessageSigner, SignerError};
pub use tree::{TreeNode, render_tree};

// re-export builders
pub use associated_token::{
    AssociatedTokenInstruction, CommonAccounts, CreateBuilder, CreateIdempotentBuilder,
    NestedAddresses, RecoverNestedBuilder,
};
pub use sig_verify::{SigVerifyInstruction, SignatureVerifyError};

// re-export derivation and errors
pub use codec::{CodecError, InstructionDecoder, InstructionEncoder};
pub use derivation::{
    DerivationError, create_program_address, find_associated_token_address,
    find_associated_token_address_with_programs, find_program_address,
};
pub use error::InstructionError;
