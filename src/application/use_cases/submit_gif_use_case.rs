//! GIF submission use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::WalletSession;
use crate::domain::errors::PortalError;
use crate::domain::ports::PortalPort;

/// Outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The entry was sent and confirmed.
    Submitted,
    /// The link was empty; nothing was sent.
    EmptyLink,
}

/// Handles recording a new GIF link on the portal.
#[derive(Clone)]
pub struct SubmitGifUseCase {
    portal_port: Arc<dyn PortalPort>,
}

impl SubmitGifUseCase {
    /// Creates new submit use case.
    #[must_use]
    pub const fn new(portal_port: Arc<dyn PortalPort>) -> Self {
        Self { portal_port }
    }

    /// Submits a gif link under the session identity.
    ///
    /// An empty link is dropped before any remote call is made. No other
    /// validation happens on this side; the link travels to the program
    /// as typed.
    ///
    /// # Errors
    /// Returns error if the transaction fails.
    pub async fn execute(
        &self,
        session: WalletSession,
        link: &str,
    ) -> Result<SubmitOutcome, PortalError> {
        if link.is_empty() {
            debug!("Empty gif link given, nothing to submit");
            return Ok(SubmitOutcome::EmptyLink);
        }

        info!(link = %link, "Submitting gif link");

        self.portal_port
            .append_entry(&session, link)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to submit gif link");
                e
            })?;

        info!("Gif link recorded on the portal");
        Ok(SubmitOutcome::Submitted)
    }
}
