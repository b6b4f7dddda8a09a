//! Integration records and their resolved (selection-annotated) form.

use derive_more::Deref;
use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ChannelType;

/// A configured delivery-provider integration.
///
/// Integrations are owned by the integration store and are read-only from
/// the resolver's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    /// Unique integration identifier.
    pub id: Uuid,

    /// Reference to the organization this integration belongs to.
    pub organization_id: Uuid,

    /// Reference to the environment this integration is scoped to.
    pub environment_id: Uuid,

    /// Provider identity (e.g. "sendgrid", "twilio").
    pub provider_id: String,

    /// Delivery medium of the provider.
    pub channel: ChannelType,

    /// Human-readable name for the integration.
    #[serde(default)]
    pub name: String,

    /// User-facing unique identifier within the environment.
    #[serde(default)]
    pub identifier: String,

    /// Whether the integration is currently enabled for sending.
    pub active: bool,

    /// Whether the integration was marked as the primary one for its channel.
    #[serde(default)]
    pub primary: bool,

    /// Ordering hint among non-primary integrations; higher wins.
    #[serde(default)]
    pub priority: i32,

    /// Timestamp when this integration was first created.
    pub created_at: Timestamp,
}

impl Integration {
    /// Creates a new active integration with a generated identifier.
    pub fn new(
        organization_id: Uuid,
        environment_id: Uuid,
        channel: ChannelType,
        provider_id: impl Into<String>,
    ) -> Self {
        let provider_id = provider_id.into();

        Self {
            id: Uuid::now_v7(),
            organization_id,
            environment_id,
            name: provider_id.clone(),
            identifier: provider_id.clone(),
            provider_id,
            channel,
            active: true,
            primary: false,
            priority: 0,
            created_at: Timestamp::now(),
        }
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the primary flag.
    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Active integration annotated with whether it is selected for its channel.
///
/// Serializes as the integration's fields plus a `selected` flag.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Deref)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResolvedIntegration {
    /// The unchanged integration record.
    #[deref]
    #[serde(flatten)]
    pub integration: Integration,

    /// Whether the integration won a selection query in any environment.
    pub selected: bool,
}

impl ResolvedIntegration {
    /// Annotates an integration with its selection state.
    pub fn new(integration: Integration, selected: bool) -> Self {
        Self {
            integration,
            selected,
        }
    }
}
