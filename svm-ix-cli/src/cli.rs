//! CLI argument parsing and command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use svm_ix_base::{Address, Signature};

/// svm-ix - build and inspect SVM instructions offline
#[derive(Parser)]
#[command(name = "svm-ix")]
#[command(about = "Build and inspect associated token and Ed25519 verify instructions")]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// YAML file overriding well-known program ids
    #[arg(long, global = true, env = "SVM_IX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Address derivation commands
    #[command(name = "derive")]
    Derive {
        #[command(subcommand)]
        subcommand: DeriveCommands,
    },

    /// Instruction building commands
    #[command(name = "build")]
    Build {
        #[command(subcommand)]
        subcommand: BuildCommands,
    },

    /// Decode raw instruction data for a known program
    #[command(name = "decode")]
    Decode {
        /// Program id the data is addressed to
        #[arg(long)]
        program: Address,

        /// Instruction data as hex
        #[arg(long)]
        data: String,
    },
}

/// Address derivation subcommands
#[derive(Subcommand)]
pub enum DeriveCommands {
    /// Derive the associated token account of a wallet and mint
    #[command(name = "ata")]
    Ata {
        /// Wallet address
        #[arg(long)]
        wallet: Address,

        /// Token mint address
        #[arg(long)]
        mint: Address,

        /// Token program (defaults to the configured token program)
        #[arg(long)]
        token_program: Option<Address>,
    },
}

/// Instruction building subcommands
#[derive(Subcommand)]
pub enum BuildCommands {
    /// Non-idempotent associated account creation
    #[command(name = "create")]
    Create {
        /// Fee payer, funds the new account
        #[arg(long)]
        payer: Address,

        /// Wallet that will own the account
        #[arg(long)]
        wallet: Address,

        /// Token mint address
        #[arg(long)]
        mint: Address,
    },

    /// Associated account creation that tolerates an existing account
    #[command(name = "create-idempotent")]
    CreateIdempotent {
        /// Fee payer, funds the new account
        #[arg(long)]
        payer: Address,

        /// Wallet that will own the account
        #[arg(long)]
        wallet: Address,

        /// Token mint address
        #[arg(long)]
        mint: Address,

        /// Associated account address (derived when omitted)
        #[arg(long)]
        associated_token: Option<Address>,

        /// Token program owning the account
        #[arg(long)]
        token_program: Option<Address>,
    },

    /// Recover tokens from an associated account owned by another one
    #[command(name = "recover-nested")]
    RecoverNested {
        /// Wallet owning the outer associated account
        #[arg(long)]
        wallet: Address,

        /// Mint of the outer associated account
        #[arg(long)]
        owner_mint: Address,

        /// Mint of the nested associated account
        #[arg(long)]
        nested_mint: Address,
    },

    /// Ed25519 signature verification instruction
    #[command(name = "sig-verify")]
    SigVerify {
        /// Signing key as 64 hex characters
        #[arg(long, conflicts_with_all = ["signer", "signature"])]
        private_key: Option<String>,

        /// Public key of a pre-computed signature
        #[arg(long, requires = "signature")]
        signer: Option<Address>,

        /// Pre-computed signature
        #[arg(long, requires = "signer")]
        signature: Option<Signature>,

        /// Message that was signed (UTF-8)
        #[arg(long)]
        message: String,
    },
}
