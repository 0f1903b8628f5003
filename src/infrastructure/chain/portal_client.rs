//! Portal program client.

use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::account::Account;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use crate::domain::entities::WalletSession;
use crate::domain::errors::PortalError;
use crate::domain::ports::{FetchOutcome, PortalPort, WalletPort};
use crate::infrastructure::config::{ChainConfig, ConfigError};

use super::base_account::BaseAccount;
use super::context::ClientContext;
use super::interface::{self, ProgramHandle};

/// Client for the deployed portal program.
///
/// Opens a fresh rpc context and re-fetches the published interface for
/// every operation; nothing is cached between calls.
pub struct PortalClient {
    chain: ChainConfig,
    program_id: Pubkey,
    base_account: BaseAccount,
    wallet: Arc<dyn WalletPort>,
}

impl PortalClient {
    /// Creates a client for the configured program.
    ///
    /// # Errors
    /// Returns `ConfigError` if the configured program id does not parse.
    pub fn new(
        chain: ChainConfig,
        wallet: Arc<dyn WalletPort>,
        base_account: BaseAccount,
    ) -> Result<Self, ConfigError> {
        let program_id = chain.program_id()?;
        Ok(Self {
            chain,
            program_id,
            base_account,
            wallet,
        })
    }

    /// Returns the feed account address this client reads and writes.
    #[must_use]
    pub fn feed_address(&self) -> Pubkey {
        self.base_account.address()
    }

    async fn program_handle(&self, context: &ClientContext) -> Result<ProgramHandle, PortalError> {
        let address = interface::interface_address(&self.program_id)?;

        let Some(account) = self.read_account(context, &address).await? else {
            return Err(PortalError::interface_unavailable(
                "no interface account published for the program",
            ));
        };

        let parsed = interface::parse_interface_account(&account.data)?;
        debug!(
            name = %parsed.name(),
            version = %parsed.version(),
            authority = %parsed.authority(),
            "Fetched program interface"
        );
        Ok(ProgramHandle::new(self.program_id, parsed))
    }

    async fn read_account(
        &self,
        context: &ClientContext,
        address: &Pubkey,
    ) -> Result<Option<Account>, PortalError> {
        context
            .rpc()
            .get_account_with_commitment(address, context.commitment())
            .await
            .map(|response| response.value)
            .map_err(|e| PortalError::rpc(e.to_string()))
    }

    async fn send_signed(
        &self,
        context: &ClientContext,
        instruction: Instruction,
        session: &WalletSession,
        co_signer: Option<&Keypair>,
    ) -> Result<(), PortalError> {
        let blockhash = context
            .rpc()
            .get_latest_blockhash()
            .await
            .map_err(|e| PortalError::rpc(e.to_string()))?;

        let payer = session.identity();
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer));

        if let Some(keypair) = co_signer {
            transaction
                .try_partial_sign(&[keypair], blockhash)
                .map_err(|e| PortalError::bundled_keypair(e.to_string()))?;
        }
        self.wallet
            .sign_transaction(&mut transaction, blockhash)
            .await?;

        let signature = context
            .rpc()
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(|e| PortalError::rpc(e.to_string()))?;

        info!(signature = %signature, "Transaction confirmed");
        Ok(())
    }
}

#[async_trait]
impl PortalPort for PortalClient {
    async fn fetch_entries(&self) -> Result<FetchOutcome, PortalError> {
        let context = ClientContext::open(&self.chain);
        let handle = self.program_handle(&context).await?;

        let feed = self.base_account.address();
        let Some(account) = self.read_account(&context, &feed).await? else {
            debug!(address = %feed, "Feed account does not exist yet");
            return Ok(FetchOutcome::NotInitialized);
        };

        let list = handle.decode_entries(&account.data)?;
        Ok(FetchOutcome::Entries(list))
    }

    async fn initialize_account(&self, session: &WalletSession) -> Result<(), PortalError> {
        let context = ClientContext::open(&self.chain);
        let handle = self.program_handle(&context).await?;

        let feed = self.base_account.address();
        let instruction = handle.initialize_instruction(&feed, &session.identity())?;

        info!(address = %feed, "Creating feed account");
        self.send_signed(
            &context,
            instruction,
            session,
            Some(self.base_account.keypair()),
        )
        .await
    }

    async fn append_entry(&self, session: &WalletSession, link: &str) -> Result<(), PortalError> {
        let context = ClientContext::open(&self.chain);
        let handle = self.program_handle(&context).await?;

        let instruction =
            handle.append_instruction(&self.base_account.address(), &session.identity(), link)?;

        self.send_signed(&context, instruction, session, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockWalletPort;

    #[test]
    fn test_new_rejects_malformed_program_id() {
        let chain = ChainConfig {
            program_id: "not-a-key".to_string(),
            ..ChainConfig::default()
        };
        let wallet = Arc::new(MockWalletPort::trusted());

        let result = PortalClient::new(chain, wallet, BaseAccount::bundled().unwrap());

        assert!(result.is_err());
    }

    #[test]
    fn test_feed_address_is_the_bundled_account() {
        let wallet = Arc::new(MockWalletPort::trusted());
        let client =
            PortalClient::new(ChainConfig::default(), wallet, BaseAccount::bundled().unwrap())
                .unwrap();

        assert_eq!(
            client.feed_address(),
            BaseAccount::bundled().unwrap().address()
        );
    }
}
