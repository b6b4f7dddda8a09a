//! Organization environments.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deployment context (development, production) owned by an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Unique environment identifier.
    pub id: Uuid,

    /// Reference to the organization this environment belongs to.
    pub organization_id: Uuid,

    /// Human-readable environment name.
    #[serde(default)]
    pub name: String,
}

impl Environment {
    /// Creates a new environment with a generated identifier.
    pub fn new(organization_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            organization_id,
            name: name.into(),
        }
    }
}
