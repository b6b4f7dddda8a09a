//! Active integration resolver with selection fan-out.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use futures_util::TryStreamExt;
use futures_util::stream::FuturesUnordered;
use uuid::Uuid;

use super::{ResolveCommand, Result, TRACING_TARGET};
use crate::integration::{ChannelType, Integration, ResolvedIntegration};
use crate::selection::SelectionService;
use crate::store::{EnvironmentStore, IntegrationFilter, IntegrationStore};

/// Resolves active integrations and their selection state.
///
/// Dependencies are injected at construction; the resolver keeps no state
/// between calls.
#[derive(Clone)]
pub struct ActiveIntegrationResolver {
    integrations: Arc<dyn IntegrationStore>,
    environments: Arc<dyn EnvironmentStore>,
    selection: SelectionService,
}

impl fmt::Debug for ActiveIntegrationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveIntegrationResolver")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl ActiveIntegrationResolver {
    /// Creates a resolver over the given stores and selection service.
    pub fn new<I, E>(integrations: I, environments: E, selection: SelectionService) -> Self
    where
        I: IntegrationStore + 'static,
        E: EnvironmentStore + 'static,
    {
        Self {
            integrations: Arc::new(integrations),
            environments: Arc::new(environments),
            selection,
        }
    }

    /// Returns the organization's active integrations, each marked with
    /// whether it won a selection query in any environment.
    ///
    /// The output follows the integration store's order one-to-one. Any
    /// fatal error from a store or the selection service aborts the whole
    /// call; dropping the returned future abandons outstanding queries.
    pub async fn resolve(&self, command: &ResolveCommand) -> Result<Vec<ResolvedIntegration>> {
        let started_at = Instant::now();

        let active = self
            .integrations
            .find_integrations(&IntegrationFilter::active(command.organization_id))
            .await?;

        if active.is_empty() {
            tracing::debug!(
                target: TRACING_TARGET,
                organization_id = %command.organization_id,
                "No active integrations"
            );
            return Ok(Vec::new());
        }

        let channels = distinct_channels(&active);
        let selected = self.selected_integrations(command, &channels).await?;
        let resolved = merge_selected(active, &selected);

        tracing::debug!(
            target: TRACING_TARGET,
            organization_id = %command.organization_id,
            active = resolved.len(),
            selected = resolved.iter().filter(|r| r.selected).count(),
            elapsed_ms = started_at.elapsed().as_millis(),
            "Resolved active integrations"
        );

        Ok(resolved)
    }

    /// Collects the identities of every integration winning a selection
    /// query over all (environment, channel) pairs.
    async fn selected_integrations(
        &self,
        command: &ResolveCommand,
        channels: &[ChannelType],
    ) -> Result<HashSet<Uuid>> {
        let environments = self
            .environments
            .find_organization_environments(command.organization_id)
            .await?;

        tracing::debug!(
            target: TRACING_TARGET,
            organization_id = %command.organization_id,
            environments = environments.len(),
            channels = channels.len(),
            queries = environments.len() * channels.len(),
            "Fanning out selection queries"
        );

        let selection = &self.selection;
        let mut pending: FuturesUnordered<_> = environments
            .iter()
            .flat_map(move |environment| {
                channels
                    .iter()
                    .map(move |&channel| command.selection_query(environment.id, channel))
            })
            .map(move |query| async move { selection.select(&query).await })
            .collect();

        // Returning early drops every query still in flight.
        let mut selected = HashSet::new();
        loop {
            match pending.try_next().await {
                Ok(Some(Some(integration))) => {
                    selected.insert(integration.id);
                }
                Ok(Some(None)) => {}
                Ok(None) => break,
                Err(error) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        organization_id = %command.organization_id,
                        outstanding = pending.len(),
                        error = %error,
                        "Selection fan-out aborted"
                    );
                    return Err(error);
                }
            }
        }

        Ok(selected)
    }
}

/// Returns the channel types of the integrations, deduplicated in order of
/// first appearance.
pub fn distinct_channels(integrations: &[Integration]) -> Vec<ChannelType> {
    let mut seen = HashSet::new();
    integrations
        .iter()
        .map(|integration| integration.channel)
        .filter(|channel| seen.insert(*channel))
        .collect()
}

fn merge_selected(active: Vec<Integration>, selected: &HashSet<Uuid>) -> Vec<ResolvedIntegration> {
    active
        .into_iter()
        .map(|integration| {
            let is_selected = selected.contains(&integration.id);
            ResolvedIntegration::new(integration, is_selected)
        })
        .collect()
}
