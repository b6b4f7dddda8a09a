//! In-memory store over an organization snapshot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EnvironmentStore, IntegrationFilter, IntegrationStore, Result, TRACING_TARGET};
use crate::integration::{Environment, Integration};

/// Serialized set of environments and integrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Known environments, in any order.
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// Known integrations, in store order.
    #[serde(default)]
    pub integrations: Vec<Integration>,
}

/// Store backed by a [`Snapshot`].
///
/// Lookups return records in snapshot order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    /// Creates a store over the given snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Decodes a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    /// Adds an environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.snapshot.environments.push(environment);
        self
    }

    /// Adds an integration after the existing ones.
    pub fn with_integration(mut self, integration: Integration) -> Self {
        self.snapshot.integrations.push(integration);
        self
    }

    /// Returns the underlying snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait::async_trait]
impl IntegrationStore for MemoryStore {
    async fn find_integrations(&self, filter: &IntegrationFilter) -> Result<Vec<Integration>> {
        let integrations: Vec<_> = self
            .snapshot
            .integrations
            .iter()
            .filter(|integration| filter.matches(integration))
            .cloned()
            .collect();

        tracing::trace!(
            target: TRACING_TARGET,
            organization_id = %filter.organization_id,
            matched = integrations.len(),
            "Filtered in-memory integrations"
        );

        Ok(integrations)
    }
}

#[async_trait::async_trait]
impl EnvironmentStore for MemoryStore {
    async fn find_organization_environments(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Environment>> {
        let environments = self
            .snapshot
            .environments
            .iter()
            .filter(|environment| environment.organization_id == organization_id)
            .cloned()
            .collect();

        Ok(environments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::integration::ChannelType;

    #[tokio::test]
    async fn finds_in_snapshot_order() {
        let organization_id = Uuid::now_v7();
        let environment = Environment::new(organization_id, "Production");
        let sms = Integration::new(organization_id, environment.id, ChannelType::Sms, "twilio");
        let email = Integration::new(organization_id, environment.id, ChannelType::Email, "ses");
        let off = Integration::new(organization_id, environment.id, ChannelType::Push, "fcm")
            .with_active(false);

        let store = MemoryStore::default()
            .with_environment(environment)
            .with_integration(sms.clone())
            .with_integration(off)
            .with_integration(email.clone());

        let found = store
            .find_integrations(&IntegrationFilter::active(organization_id))
            .await
            .unwrap();
        assert_eq!(found, vec![sms, email]);
    }

    #[tokio::test]
    async fn environments_are_scoped_to_organization() {
        let organization_id = Uuid::now_v7();
        let store = MemoryStore::default()
            .with_environment(Environment::new(organization_id, "Development"))
            .with_environment(Environment::new(Uuid::now_v7(), "Elsewhere"));

        let found = store
            .find_organization_environments(organization_id)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Development");
    }

    #[test]
    fn decodes_json_snapshot() {
        let json = r#"{
            "environments": [
                {
                    "id": "0190a5f4-0000-7000-8000-000000000001",
                    "organizationId": "0190a5f4-0000-7000-8000-0000000000aa",
                    "name": "Development"
                }
            ],
            "integrations": [
                {
                    "id": "0190a5f4-0000-7000-8000-000000000101",
                    "organizationId": "0190a5f4-0000-7000-8000-0000000000aa",
                    "environmentId": "0190a5f4-0000-7000-8000-000000000001",
                    "providerId": "sendgrid",
                    "channel": "email",
                    "active": true,
                    "createdAt": "2024-07-01T12:00:00Z"
                }
            ]
        }"#;

        let store = MemoryStore::from_json(json).unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.environments.len(), 1);
        assert_eq!(snapshot.integrations[0].provider_id, "sendgrid");
        assert!(!snapshot.integrations[0].primary);
        assert_eq!(snapshot.integrations[0].priority, 0);
    }

    #[test]
    fn rejects_malformed_json() {
        let error = MemoryStore::from_json("{\"integrations\": 3}").unwrap_err();
        assert_eq!(error.kind, ErrorKind::Serialization);
    }
}
