//! Instruction data decoding

use serde_json::{Value, json};
use svm_ix_base::{
    AccountMetaList, Address, AssociatedTokenInstruction, SigVerifyInstruction, render_tree,
};

use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Execute the decode command
pub fn handle_decode_command(
    config: &Config,
    program: &Address,
    data_hex: &str,
    json_format: bool,
) -> Result<(), CliError> {
    let result = decode_instruction(config, program, data_hex)?;
    output::print_output(result, json_format);
    Ok(())
}

/// Decodes `data_hex` according to `program`, which must be one of the
/// configured associated token or ed25519 program ids.
pub fn decode_instruction(
    config: &Config,
    program: &Address,
    data_hex: &str,
) -> Result<Value, CliError> {
    let data = hex::decode(data_hex.trim_start_matches("0x"))
        .map_err(|e| CliError::Validation(format!("Invalid hex data: {}", e)))?;
    let ids = &config.program_ids;

    if *program == ids.associated_token_program {
        let kind = AssociatedTokenInstruction::decode(&data)?;
        // only the data is known, so every account renders as missing
        let tree = kind.to_tree(program, &AccountMetaList::default());
        Ok(json!({
            "decoded": {
                "program": svm_ix_base::associated_token::PROGRAM_NAME,
                "instruction": kind.name(),
                "discriminant": kind.discriminant(),
            },
            "tree": render_tree(&tree),
        }))
    } else if *program == ids.ed25519_program {
        let sig_verify = SigVerifyInstruction::decode(&data)?.with_program_ids(*ids);
        Ok(json!({
            "decoded": {
                "program": svm_ix_base::sig_verify::PROGRAM_NAME,
                "signer": sig_verify.signer().to_string(),
                "signature": sig_verify.signature().to_string(),
                "message": hex::encode(sig_verify.message()),
                "verified": sig_verify.verify().is_ok(),
            },
            "tree": render_tree(&sig_verify.to_tree()),
        }))
    } else {
        Err(CliError::Validation(format!(
            "Unsupported program {}",
            program
        )))
    }
}
