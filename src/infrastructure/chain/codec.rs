//! Wire codec for the portal program.
//!
//! The program follows the Anchor conventions: account data starts with
//! an 8-byte discriminator derived from the account name, instruction
//! data starts with an 8-byte sighash derived from the operation name,
//! and everything after either prefix is borsh.

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use crate::domain::entities::{GifEntry, GifList};
use crate::domain::errors::PortalError;

/// Name of the account type holding the feed.
pub const BASE_ACCOUNT: &str = "BaseAccount";
/// Name of the operation creating the feed account.
pub const OP_INITIALIZE: &str = "initialize";
/// Name of the operation appending an entry.
pub const OP_ADD_GIF: &str = "add_gif";

const PREFIX_LEN: usize = 8;

/// Computes the discriminator for an account name.
#[must_use]
pub fn account_discriminator(name: &str) -> [u8; PREFIX_LEN] {
    prefix("account", name)
}

/// Computes the sighash for a global operation name.
#[must_use]
pub fn instruction_sighash(name: &str) -> [u8; PREFIX_LEN] {
    prefix("global", name)
}

fn prefix(namespace: &str, name: &str) -> [u8; PREFIX_LEN] {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; PREFIX_LEN];
    out.copy_from_slice(&digest[..PREFIX_LEN]);
    out
}

/// Borsh layout of the feed account, after the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BaseAccountState {
    /// Running submission counter.
    pub total_gifs: u64,
    /// Stored entries in submission order.
    pub gif_list: Vec<StoredGif>,
}

/// Borsh layout of a single stored entry.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StoredGif {
    /// The submitted link.
    pub gif_link: String,
    /// Raw submitter key bytes.
    pub user_address: [u8; 32],
}

impl From<BaseAccountState> for GifList {
    fn from(state: BaseAccountState) -> Self {
        let entries = state
            .gif_list
            .into_iter()
            .map(|gif| GifEntry::new(gif.gif_link, Pubkey::new_from_array(gif.user_address)))
            .collect();
        Self::new(state.total_gifs, entries)
    }
}

/// Decodes the feed account data.
///
/// The program over-allocates the account, so bytes past the borsh
/// payload are zero padding and are left untouched.
///
/// # Errors
/// Returns `PortalError::MalformedAccount` if the discriminator or the
/// layout does not match.
pub fn decode_base_account(data: &[u8]) -> Result<BaseAccountState, PortalError> {
    if data.len() < PREFIX_LEN {
        return Err(PortalError::malformed_account(
            "account data shorter than its discriminator",
        ));
    }

    let (discriminator, payload) = data.split_at(PREFIX_LEN);
    if discriminator != account_discriminator(BASE_ACCOUNT) {
        return Err(PortalError::malformed_account(
            "account discriminator does not match the feed account",
        ));
    }

    let mut payload = payload;
    BaseAccountState::deserialize(&mut payload)
        .map_err(|e| PortalError::malformed_account(e.to_string()))
}

/// Builds the feed-creation instruction.
///
/// The feed account and the paying user both sign; the system program is
/// read-only and funds nothing itself.
#[must_use]
pub fn initialize_instruction(
    program_id: &Pubkey,
    base_account: &Pubkey,
    user: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*base_account, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: instruction_sighash(OP_INITIALIZE).to_vec(),
    }
}

/// Builds the append instruction carrying the link as its only argument.
///
/// # Errors
/// Returns `PortalError::Encoding` if the argument cannot be serialized.
pub fn add_gif_instruction(
    program_id: &Pubkey,
    base_account: &Pubkey,
    user: &Pubkey,
    link: &str,
) -> Result<Instruction, PortalError> {
    let mut data = instruction_sighash(OP_ADD_GIF).to_vec();
    let argument =
        borsh::to_vec(&link.to_string()).map_err(|e| PortalError::encoding(e.to_string()))?;
    data.extend_from_slice(&argument);

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*base_account, false),
            AccountMeta::new(*user, true),
        ],
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_bytes(total: u64, entries: &[(&str, Pubkey)], padding: usize) -> Vec<u8> {
        let mut data = account_discriminator(BASE_ACCOUNT).to_vec();
        data.extend_from_slice(&total.to_le_bytes());
        data.extend_from_slice(&u32::try_from(entries.len()).unwrap().to_le_bytes());
        for (link, submitter) in entries {
            data.extend_from_slice(&u32::try_from(link.len()).unwrap().to_le_bytes());
            data.extend_from_slice(link.as_bytes());
            data.extend_from_slice(submitter.as_ref());
        }
        data.resize(data.len() + padding, 0);
        data
    }

    #[test]
    fn test_prefix_values_are_stable() {
        assert_eq!(
            account_discriminator(BASE_ACCOUNT),
            [16, 90, 130, 242, 159, 10, 232, 133]
        );
        assert_eq!(
            instruction_sighash(OP_INITIALIZE),
            [175, 175, 109, 31, 13, 152, 155, 237]
        );
        assert_eq!(
            instruction_sighash(OP_ADD_GIF),
            [171, 74, 141, 100, 33, 70, 87, 155]
        );
    }

    #[test]
    fn test_decode_reads_entries_in_stored_order() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let data = feed_bytes(2, &[("https://a.gif", alice), ("https://b.gif", bob)], 0);

        let state = decode_base_account(&data).unwrap();

        assert_eq!(state.total_gifs, 2);
        let list = GifList::from(state);
        assert_eq!(list.entries()[0].link(), "https://a.gif");
        assert_eq!(list.entries()[0].submitter(), alice);
        assert_eq!(list.entries()[1].link(), "https://b.gif");
        assert_eq!(list.entries()[1].submitter(), bob);
    }

    #[test]
    fn test_decode_tolerates_trailing_padding() {
        let submitter = Pubkey::new_unique();
        let data = feed_bytes(1, &[("https://giphy.com/x.gif", submitter)], 8_900);

        let state = decode_base_account(&data).unwrap();

        assert_eq!(state.total_gifs, 1);
        assert_eq!(state.gif_list.len(), 1);
    }

    #[test]
    fn test_decode_rejects_wrong_discriminator() {
        let mut data = feed_bytes(0, &[], 0);
        data[0] ^= 0xff;

        let result = decode_base_account(&data);

        assert!(matches!(result, Err(PortalError::MalformedAccount { .. })));
    }

    #[test]
    fn test_decode_rejects_short_data() {
        let result = decode_base_account(&[1, 2, 3]);

        assert!(matches!(result, Err(PortalError::MalformedAccount { .. })));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let submitter = Pubkey::new_unique();
        let mut data = feed_bytes(1, &[("https://giphy.com/x.gif", submitter)], 0);
        data.truncate(data.len() - 16);

        let result = decode_base_account(&data);

        assert!(matches!(result, Err(PortalError::MalformedAccount { .. })));
    }

    #[test]
    fn test_initialize_instruction_signs_feed_and_payer() {
        let program = Pubkey::new_unique();
        let feed = Pubkey::new_unique();
        let user = Pubkey::new_unique();

        let instruction = initialize_instruction(&program, &feed, &user);

        assert_eq!(instruction.program_id, program);
        assert_eq!(instruction.data, instruction_sighash(OP_INITIALIZE));
        assert_eq!(instruction.accounts.len(), 3);
        assert_eq!(instruction.accounts[0].pubkey, feed);
        assert!(instruction.accounts[0].is_signer);
        assert!(instruction.accounts[0].is_writable);
        assert!(instruction.accounts[1].is_signer);
        assert_eq!(instruction.accounts[2].pubkey, system_program::id());
        assert!(!instruction.accounts[2].is_signer);
        assert!(!instruction.accounts[2].is_writable);
    }

    #[test]
    fn test_add_gif_instruction_encodes_link_argument() {
        let program = Pubkey::new_unique();
        let feed = Pubkey::new_unique();
        let user = Pubkey::new_unique();
        let link = "https://media.giphy.com/media/abc/giphy.gif";

        let instruction = add_gif_instruction(&program, &feed, &user, link).unwrap();

        assert_eq!(&instruction.data[..8], instruction_sighash(OP_ADD_GIF));
        let len = u32::from_le_bytes(instruction.data[8..12].try_into().unwrap());
        assert_eq!(len as usize, link.len());
        assert_eq!(&instruction.data[12..], link.as_bytes());

        assert_eq!(instruction.accounts.len(), 2);
        assert!(!instruction.accounts[0].is_signer);
        assert!(instruction.accounts[0].is_writable);
        assert_eq!(instruction.accounts[1].pubkey, user);
        assert!(instruction.accounts[1].is_signer);
        assert!(instruction.accounts[1].is_writable);
    }
}
