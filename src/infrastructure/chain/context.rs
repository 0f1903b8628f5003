//! Per-operation RPC context.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::infrastructure::config::ChainConfig;

/// A connection to the configured cluster.
///
/// Every portal operation opens its own context, so endpoint and
/// commitment changes take effect on the next call. Nothing is shared
/// or pooled between operations.
pub struct ClientContext {
    rpc: RpcClient,
}

impl ClientContext {
    /// Opens a context against the configured endpoint.
    #[must_use]
    pub fn open(config: &ChainConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(
                config.rpc_url.clone(),
                config.commitment_config(),
            ),
        }
    }

    /// Returns the rpc client.
    #[must_use]
    pub const fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Returns the commitment level operations run at.
    #[must_use]
    pub fn commitment(&self) -> CommitmentConfig {
        self.rpc.commitment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::CommitmentLevel;

    #[test]
    fn test_open_carries_configured_commitment() {
        let config = ChainConfig {
            commitment: CommitmentLevel::Confirmed,
            ..ChainConfig::default()
        };

        let context = ClientContext::open(&config);

        assert_eq!(context.commitment(), CommitmentConfig::confirmed());
    }
}
