//! Read-only storage interfaces for integrations and environments.
//!
//! This module provides the lookups the resolver depends on:
//! - [`IntegrationStore`]: filtered integration lookups
//! - [`EnvironmentStore`]: environment enumeration per organization
//!
//! [`MemoryStore`] implements both over an in-memory snapshot.

mod filter;
mod memory;

use std::sync::Arc;

pub use filter::IntegrationFilter;
pub use memory::{MemoryStore, Snapshot};
use uuid::Uuid;

pub use crate::{Error, Result};
use crate::integration::{Environment, Integration};

/// Tracing target for store operations.
pub const TRACING_TARGET: &str = "herald_service::store";

/// Integration lookups.
///
/// Implementations must return integrations in a stable, store-defined order.
#[async_trait::async_trait]
pub trait IntegrationStore: Send + Sync {
    /// Returns every integration matching the filter.
    async fn find_integrations(&self, filter: &IntegrationFilter) -> Result<Vec<Integration>>;
}

/// Environment lookups.
#[async_trait::async_trait]
pub trait EnvironmentStore: Send + Sync {
    /// Returns the environments belonging to the organization.
    async fn find_organization_environments(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Environment>>;
}

#[async_trait::async_trait]
impl<T> IntegrationStore for Arc<T>
where
    T: IntegrationStore + ?Sized,
{
    async fn find_integrations(&self, filter: &IntegrationFilter) -> Result<Vec<Integration>> {
        (**self).find_integrations(filter).await
    }
}

#[async_trait::async_trait]
impl<T> EnvironmentStore for Arc<T>
where
    T: EnvironmentStore + ?Sized,
{
    async fn find_organization_environments(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Environment>> {
        (**self).find_organization_environments(organization_id).await
    }
}
