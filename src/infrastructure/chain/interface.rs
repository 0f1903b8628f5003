//! Published program interface handling.
//!
//! The deployed program publishes its interface in a derived account:
//! an 8-byte prefix, the 32-byte upgrade authority, then a little-endian
//! length and that many bytes of zlib-deflated JSON. The client fetches
//! and parses it before every operation and refuses to build calls the
//! interface does not list.

use std::io::Read;

use flate2::read::ZlibDecoder;
use serde::Deserialize;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

use crate::domain::entities::GifList;
use crate::domain::errors::PortalError;

use super::codec;

const INTERFACE_SEED: &str = "anchor:idl";
const INTERFACE_HEADER_LEN: usize = 8 + 32 + 4;

/// Derives the address the interface account lives at.
///
/// # Errors
/// Returns `PortalError::InterfaceUnavailable` if the derivation fails.
pub fn interface_address(program_id: &Pubkey) -> Result<Pubkey, PortalError> {
    let (base, _) = Pubkey::find_program_address(&[], program_id);
    Pubkey::create_with_seed(&base, INTERFACE_SEED, program_id)
        .map_err(|e| PortalError::interface_unavailable(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct RawInterface {
    name: String,
    version: String,
    #[serde(default)]
    instructions: Vec<RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    name: String,
}

/// A parsed program interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInterface {
    name: String,
    version: String,
    authority: Pubkey,
    operations: Vec<String>,
}

impl ProgramInterface {
    /// Returns the program name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the interface version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the upgrade authority recorded in the account.
    #[must_use]
    pub const fn authority(&self) -> Pubkey {
        self.authority
    }

    /// Returns whether the interface lists the operation. Names are
    /// compared in snake case, so the published casing does not matter.
    #[must_use]
    pub fn supports(&self, operation: &str) -> bool {
        let wanted = to_snake_case(operation);
        self.operations.iter().any(|op| *op == wanted)
    }
}

/// Parses a raw interface account.
///
/// # Errors
/// Returns `PortalError::MalformedInterface` if the header, compression,
/// or JSON does not parse.
pub fn parse_interface_account(data: &[u8]) -> Result<ProgramInterface, PortalError> {
    if data.len() < INTERFACE_HEADER_LEN {
        return Err(PortalError::malformed_interface(
            "interface account shorter than its header",
        ));
    }

    let authority = Pubkey::try_from(&data[8..40])
        .map_err(|_| PortalError::malformed_interface("authority key is not 32 bytes"))?;

    let mut length_bytes = [0u8; 4];
    length_bytes.copy_from_slice(&data[40..44]);
    let declared_len = u32::from_le_bytes(length_bytes) as usize;

    let deflated = &data[INTERFACE_HEADER_LEN..];
    if declared_len > deflated.len() {
        return Err(PortalError::malformed_interface(
            "declared length exceeds account data",
        ));
    }

    let mut json = Vec::new();
    ZlibDecoder::new(&deflated[..declared_len])
        .read_to_end(&mut json)
        .map_err(|e| PortalError::malformed_interface(e.to_string()))?;

    let raw: RawInterface = serde_json::from_slice(&json)
        .map_err(|e| PortalError::malformed_interface(e.to_string()))?;

    Ok(ProgramInterface {
        name: raw.name,
        version: raw.version,
        authority,
        operations: raw
            .instructions
            .into_iter()
            .map(|instruction| to_snake_case(&instruction.name))
            .collect(),
    })
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// A callable handle to the portal program, built from a fetched
/// interface. Instruction builders check the interface first.
#[derive(Debug, Clone)]
pub struct ProgramHandle {
    program_id: Pubkey,
    interface: ProgramInterface,
}

impl ProgramHandle {
    /// Creates a handle for the program behind the interface.
    #[must_use]
    pub const fn new(program_id: Pubkey, interface: ProgramInterface) -> Self {
        Self {
            program_id,
            interface,
        }
    }

    /// Returns the parsed interface.
    #[must_use]
    pub const fn interface(&self) -> &ProgramInterface {
        &self.interface
    }

    /// Builds the feed-creation instruction.
    ///
    /// # Errors
    /// Returns `PortalError::UnsupportedOperation` if the interface does
    /// not list the operation.
    pub fn initialize_instruction(
        &self,
        base_account: &Pubkey,
        user: &Pubkey,
    ) -> Result<Instruction, PortalError> {
        self.ensure_operation(codec::OP_INITIALIZE)?;
        Ok(codec::initialize_instruction(
            &self.program_id,
            base_account,
            user,
        ))
    }

    /// Builds the append instruction.
    ///
    /// # Errors
    /// Returns `PortalError::UnsupportedOperation` if the interface does
    /// not list the operation, or `PortalError::Encoding` if the link
    /// cannot be serialized.
    pub fn append_instruction(
        &self,
        base_account: &Pubkey,
        user: &Pubkey,
        link: &str,
    ) -> Result<Instruction, PortalError> {
        self.ensure_operation(codec::OP_ADD_GIF)?;
        codec::add_gif_instruction(&self.program_id, base_account, user, link)
    }

    /// Decodes the feed account into the domain list.
    ///
    /// # Errors
    /// Returns `PortalError::MalformedAccount` if the data does not
    /// decode.
    pub fn decode_entries(&self, data: &[u8]) -> Result<GifList, PortalError> {
        codec::decode_base_account(data).map(Into::into)
    }

    fn ensure_operation(&self, operation: &str) -> Result<(), PortalError> {
        if self.interface.supports(operation) {
            Ok(())
        } else {
            Err(PortalError::unsupported(operation))
        }
    }
}
