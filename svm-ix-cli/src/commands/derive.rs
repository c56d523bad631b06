//! Address derivation commands

use serde_json::{Value, json};
use svm_ix_base::{Address, find_associated_token_address_with_programs};

use crate::cli::DeriveCommands;
use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Execute derive commands
pub fn handle_derive_command(
    config: &Config,
    subcommand: DeriveCommands,
    json_format: bool,
) -> Result<(), CliError> {
    let result = match subcommand {
        DeriveCommands::Ata {
            wallet,
            mint,
            token_program,
        } => derive_associated_token(config, &wallet, &mint, token_program)?,
    };
    output::print_output(result, json_format);
    Ok(())
}

/// Derives the associated token account of `wallet` for `mint`
pub fn derive_associated_token(
    config: &Config,
    wallet: &Address,
    mint: &Address,
    token_program: Option<Address>,
) -> Result<Value, CliError> {
    let ids = &config.program_ids;
    let token_program = token_program.unwrap_or(ids.token_program);
    let (address, bump) = find_associated_token_address_with_programs(
        wallet,
        mint,
        &token_program,
        &ids.associated_token_program,
    )?;

    Ok(json!({
        "derived": {
            "wallet": wallet.to_string(),
            "mint": mint.to_string(),
            "token_program": token_program.to_string(),
            "associated_token": address.to_string(),
            "bump": bump,
        }
    }))
}
