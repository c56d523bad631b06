//! Ed25519 signature-verification precompile instruction
//!
//! Data layout (little-endian), single signature set:
//!
//! ```text
//! [0]      count = 1
//! [1]      padding
//! [2..4]   signature offset        [4..6]   0xFFFF (this instruction)
//! [6..8]   public key offset       [8..10]  0xFFFF
//! [10..12] message offset          [12..14] message length
//! [14..16] 0xFFFF
//! [16..48] public key  [48..112] signature  [112..] message
//! ```

use crate::account_meta::AccountMetaList;
use crate::address::{ADDRESS_BYTES, Address, SIGNATURE_BYTES, Signature};
use crate::codec::{CodecError, InstructionDecoder, InstructionEncoder};
use crate::error::InstructionError;
use crate::instruction::Instruction;
use crate::program_ids::{ED25519_PROGRAM, ProgramIds};
use crate::signer::MessageSigner;
use crate::tree::{TreeNode, accounts_node, instruction_node, param_node, params_node, program_node};
use ed25519_dalek::VerifyingKey;
use thiserror::Error;
use tracing::debug;

pub const PROGRAM_NAME: &str = "Ed25519SigVerify";

pub const HEADER_LEN: usize = 16;
pub const SIGNER_OFFSET: u16 = HEADER_LEN as u16;
pub const SIGNATURE_OFFSET: u16 = SIGNER_OFFSET + ADDRESS_BYTES as u16;
pub const MESSAGE_OFFSET: u16 = SIGNATURE_OFFSET + SIGNATURE_BYTES as u16;
/// Instruction index meaning "the instruction carrying these offsets"
pub const CURRENT_INSTRUCTION: u16 = u16::MAX;
pub const MAX_MESSAGE_LEN: usize = u16::MAX as usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureVerifyError {
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature")]
    InvalidSignature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigVerifyInstruction {
    signer: Address,
    signature: Signature,
    message: Vec<u8>,
    program_id: Address,
}

impl SigVerifyInstruction {
    pub fn new(signer: Address, signature: Signature, message: impl Into<Vec<u8>>) -> Self {
        Self {
            signer,
            signature,
            message: message.into(),
            program_id: Address::new(ED25519_PROGRAM),
        }
    }

    /// Targets `ProgramIds::ed25519_program` instead of the well-known id
    pub fn with_program_ids(mut self, program_ids: ProgramIds) -> Self {
        self.program_id = program_ids.ed25519_program;
        self
    }

    /// Signs `message` with `signer` and wraps the result.
    pub fn new_with_signer<S: MessageSigner + ?Sized>(
        signer: &S,
        message: impl Into<Vec<u8>>,
    ) -> Result<Self, InstructionError> {
        let message = message.into();
        let signature = signer.sign_message(&message)?;
        Ok(Self::new(signer.pubkey(), signature, message))
    }

    pub fn program_id(&self) -> &Address {
        &self.program_id
    }

    pub fn signer(&self) -> &Address {
        &self.signer
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Encodes the precompile payload. Only fails when the message does not
    /// fit the 16-bit length field.
    pub fn data(&self) -> Result<Vec<u8>, CodecError> {
        let message_len = u16::try_from(self.message.len()).map_err(|_| {
            CodecError::InvalidOffsets(format!(
                "message of {} bytes exceeds {} byte limit",
                self.message.len(),
                MAX_MESSAGE_LEN
            ))
        })?;

        let mut enc =
            InstructionEncoder::with_capacity(MESSAGE_OFFSET as usize + self.message.len());
        enc.put_u8(1)
            .put_u8(0)
            .put_u16(SIGNATURE_OFFSET)
            .put_u16(CURRENT_INSTRUCTION)
            .put_u16(SIGNER_OFFSET)
            .put_u16(CURRENT_INSTRUCTION)
            .put_u16(MESSAGE_OFFSET)
            .put_u16(message_len)
            .put_u16(CURRENT_INSTRUCTION)
            .put_bytes(self.signer.as_bytes())
            .put_bytes(self.signature.as_bytes())
            .put_bytes(&self.message);
        Ok(enc.finish())
    }

    /// Parses a single-signature payload, following the encoded offsets.
    /// Signature sets referencing other instructions are rejected since their
    /// contents cannot be recovered from this data alone.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let mut dec = InstructionDecoder::new(data);
        let count = dec.read_u8()?;
        if count != 1 {
            return Err(CodecError::InvalidOffsets(format!(
                "expected 1 signature set, found {}",
                count
            )));
        }
        let _padding = dec.read_u8()?;

        let signature_offset = dec.read_u16()?;
        expect_current(dec.read_u16()?, "signature")?;
        let signer_offset = dec.read_u16()?;
        expect_current(dec.read_u16()?, "public key")?;
        let message_offset = dec.read_u16()?;
        let message_len = dec.read_u16()?;
        expect_current(dec.read_u16()?, "message")?;

        let signer =
            InstructionDecoder::new(dec.peek_at(signer_offset as usize, ADDRESS_BYTES)?)
                .read_address()?;
        let signature =
            InstructionDecoder::new(dec.peek_at(signature_offset as usize, SIGNATURE_BYTES)?)
                .read_signature()?;
        let message = dec.peek_at(message_offset as usize, message_len as usize)?;

        Ok(Self::new(signer, signature, message))
    }

    /// Checks the signature the way the runtime will, before submitting.
    pub fn verify(&self) -> Result<(), SignatureVerifyError> {
        let key = VerifyingKey::from_bytes(self.signer.as_bytes())
            .map_err(|_| SignatureVerifyError::InvalidPublicKey)?;
        let sig = ed25519_dalek::Signature::from_bytes(self.signature.as_bytes());
        key.verify_strict(&self.message, &sig)
            .map_err(|_| SignatureVerifyError::InvalidSignature)
    }

    pub fn to_instruction(&self) -> Result<Instruction, CodecError> {
        let data = self.data()?;
        debug!(signer = %self.signer, len = data.len(), "building Ed25519 verify");
        Ok(Instruction::new(
            self.program_id,
            AccountMetaList::default(),
            data,
        ))
    }

    pub fn to_tree(&self) -> TreeNode {
        program_node(
            PROGRAM_NAME,
            &self.program_id,
            vec![instruction_node(
                "Verify",
                vec![
                    params_node(vec![
                        param_node("signer", self.signer),
                        param_node("signature", self.signature),
                        param_node("message", hex::encode(&self.message)),
                    ]),
                    accounts_node(&[]),
                ],
            )],
        )
    }
}

fn expect_current(index: u16, what: &str) -> Result<(), CodecError> {
    if index == CURRENT_INSTRUCTION {
        Ok(())
    } else {
        Err(CodecError::InvalidOffsets(format!(
            "{} refers to instruction {}",
            what, index
        )))
    }
}
