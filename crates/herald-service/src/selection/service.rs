//! Selection service wrapper with observability.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::{Result, SelectionProvider, SelectionQuery, TRACING_TARGET};
use crate::integration::Integration;

/// Selection service wrapper with observability.
///
/// This wrapper adds structured logging to any selection provider and folds
/// absence errors into `Ok(None)`. The inner provider is wrapped in `Arc` for
/// cheap cloning.
#[derive(Clone)]
pub struct SelectionService {
    inner: Arc<dyn SelectionProvider>,
}

impl fmt::Debug for SelectionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionService").finish_non_exhaustive()
    }
}

impl SelectionService {
    /// Create a new selection service wrapper.
    pub fn new<P>(provider: P) -> Self
    where
        P: SelectionProvider + 'static,
    {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Create a selection service from an already shared provider.
    pub fn from_arc(provider: Arc<dyn SelectionProvider>) -> Self {
        Self { inner: provider }
    }

    /// Selects the winning integration for the query.
    ///
    /// Returns `Ok(None)` when the provider reports no winner, either directly
    /// or through an absence error. Other errors are returned unchanged.
    pub async fn select(&self, query: &SelectionQuery) -> Result<Option<Integration>> {
        let started_at = Instant::now();
        let result = self.inner.select(query).await;
        let elapsed = started_at.elapsed();

        match result {
            Ok(Some(integration)) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    environment_id = %query.environment_id,
                    channel = %query.channel,
                    integration_id = %integration.id,
                    provider_id = %integration.provider_id,
                    elapsed_ms = elapsed.as_millis(),
                    "Integration selected"
                );
                Ok(Some(integration))
            }
            Ok(None) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    environment_id = %query.environment_id,
                    channel = %query.channel,
                    elapsed_ms = elapsed.as_millis(),
                    "No integration selected"
                );
                Ok(None)
            }
            Err(error) if error.is_absence() => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    environment_id = %query.environment_id,
                    channel = %query.channel,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Selection failed without a winner, treating as absent"
                );
                Ok(None)
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    environment_id = %query.environment_id,
                    channel = %query.channel,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Selection error"
                );
                Err(error)
            }
        }
    }
}
