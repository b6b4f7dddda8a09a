//! Resolve command.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::integration::ChannelType;
use crate::selection::SelectionQuery;

/// Request for the active integrations of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveCommand {
    /// Organization whose integrations are resolved.
    pub organization_id: Uuid,
    /// Requesting user, forwarded to every selection query.
    pub user_id: Uuid,
    /// Optional provider restriction, forwarded unchanged.
    #[serde(default)]
    pub provider_id: Option<String>,
}

impl ResolveCommand {
    /// Creates a command without a provider restriction.
    pub fn new(organization_id: Uuid, user_id: Uuid) -> Self {
        Self {
            organization_id,
            user_id,
            provider_id: None,
        }
    }

    /// Restricts selection to one provider.
    pub fn with_provider(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = Some(provider_id.into());
        self
    }

    /// Builds the selection query for one (environment, channel) pair.
    pub fn selection_query(&self, environment_id: Uuid, channel: ChannelType) -> SelectionQuery {
        SelectionQuery {
            environment_id,
            organization_id: self.organization_id,
            user_id: self.user_id,
            channel,
            provider_id: self.provider_id.clone(),
        }
    }
}
