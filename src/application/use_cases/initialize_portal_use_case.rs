//! Portal initialization use case.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::WalletSession;
use crate::domain::errors::PortalError;
use crate::domain::ports::PortalPort;

/// Handles the one-time creation of the portal account.
#[derive(Clone)]
pub struct InitializePortalUseCase {
    portal_port: Arc<dyn PortalPort>,
}

impl InitializePortalUseCase {
    /// Creates new initialize use case.
    #[must_use]
    pub const fn new(portal_port: Arc<dyn PortalPort>) -> Self {
        Self { portal_port }
    }

    /// Creates the portal account with the session wallet as payer.
    ///
    /// # Errors
    /// Returns error if the transaction fails.
    pub async fn execute(&self, session: WalletSession) -> Result<(), PortalError> {
        info!(payer = %session.identity(), "Creating portal account");

        match self.portal_port.initialize_account(&session).await {
            Ok(()) => {
                info!("Portal account created");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to create portal account");
                Err(e)
            }
        }
    }
}
