//! Instruction building commands

use serde_json::{Value, json};
use svm_ix_base::associated_token::describe;
use svm_ix_base::{
    Address, CreateBuilder, CreateIdempotentBuilder, Instruction, Keypair, RecoverNestedBuilder,
    SigVerifyInstruction, Signature, render_tree,
};
use tracing::{debug, warn};

use crate::cli::BuildCommands;
use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Execute build commands
pub fn handle_build_command(
    config: &Config,
    subcommand: BuildCommands,
    json_format: bool,
) -> Result<(), CliError> {
    let result = match subcommand {
        BuildCommands::Create {
            payer,
            wallet,
            mint,
        } => build_create(config, payer, wallet, mint)?,
        BuildCommands::CreateIdempotent {
            payer,
            wallet,
            mint,
            associated_token,
            token_program,
        } => build_create_idempotent(
            config,
            payer,
            wallet,
            mint,
            associated_token,
            token_program,
        )?,
        BuildCommands::RecoverNested {
            wallet,
            owner_mint,
            nested_mint,
        } => build_recover_nested(config, wallet, owner_mint, nested_mint)?,
        BuildCommands::SigVerify {
            private_key,
            signer,
            signature,
            message,
        } => build_sig_verify(
            config,
            private_key.as_deref(),
            signer,
            signature,
            &message,
        )?,
    };
    output::print_output(result, json_format);
    Ok(())
}

fn associated_token_output(ix: &Instruction) -> Result<Value, CliError> {
    let tree = describe(ix)?;
    Ok(json!({
        "instruction": ix,
        "tree": render_tree(&tree),
    }))
}

pub fn build_create(
    config: &Config,
    payer: Address,
    wallet: Address,
    mint: Address,
) -> Result<Value, CliError> {
    let ix = CreateBuilder::new()
        .with_payer(payer)
        .with_wallet(wallet)
        .with_mint(mint)
        .with_program_ids(config.program_ids)
        .validate_and_build()?;
    associated_token_output(&ix)
}

/// Without `associated_token` the address is derived here; the builder
/// itself always uses what it is given.
pub fn build_create_idempotent(
    config: &Config,
    payer: Address,
    wallet: Address,
    mint: Address,
    associated_token: Option<Address>,
    token_program: Option<Address>,
) -> Result<Value, CliError> {
    for (name, value) in [("payer", payer), ("wallet", wallet), ("mint", mint)] {
        if value.is_zero() {
            return Err(CliError::Validation(format!("{} must not be zero", name)));
        }
    }

    let mut builder = CreateIdempotentBuilder::new()
        .with_payer(payer)
        .with_wallet(wallet)
        .with_mint(mint)
        .with_program_ids(config.program_ids);
    if let Some(token_program) = token_program {
        builder = builder.with_token_program(token_program);
    }
    builder = match associated_token {
        Some(address) => builder.with_associated_token(address),
        None => {
            debug!("no associated token given, deriving");
            builder.with_derived_associated_token()?
        }
    };

    let ix = builder.build();
    associated_token_output(&ix)
}

pub fn build_recover_nested(
    config: &Config,
    wallet: Address,
    owner_mint: Address,
    nested_mint: Address,
) -> Result<Value, CliError> {
    let ix = RecoverNestedBuilder::new()
        .with_wallet(wallet)
        .with_owner_mint(owner_mint)
        .with_nested_mint(nested_mint)
        .with_program_ids(config.program_ids)
        .validate_and_build()?;
    associated_token_output(&ix)
}

/// Either signs `message` with `private_key` or wraps a pre-computed
/// `signer`/`signature` pair. The pair is checked before output, but an
/// invalid one is still emitted so that negative cases can be built.
pub fn build_sig_verify(
    config: &Config,
    private_key: Option<&str>,
    signer: Option<Address>,
    signature: Option<Signature>,
    message: &str,
) -> Result<Value, CliError> {
    let sig_verify = match (private_key, signer, signature) {
        (Some(key), None, None) => {
            let keypair = Keypair::from_hex(key).map_err(|e| CliError::Crypto(e.to_string()))?;
            SigVerifyInstruction::new_with_signer(&keypair, message.as_bytes())?
        }
        (None, Some(signer), Some(signature)) => {
            SigVerifyInstruction::new(signer, signature, message.as_bytes())
        }
        _ => {
            return Err(CliError::Validation(
                "provide either --private-key or both --signer and --signature".to_string(),
            ));
        }
    };

    let sig_verify = sig_verify.with_program_ids(config.program_ids);
    let verified = sig_verify.verify().is_ok();
    if !verified {
        warn!(signer = %sig_verify.signer(), "signature does not verify");
    }

    let ix = sig_verify.to_instruction()?;
    Ok(json!({
        "instruction": ix,
        "verified": verified,
        "tree": render_tree(&sig_verify.to_tree()),
    }))
}
