//! Selection of the winning integration per environment and channel.
//!
//! This module provides:
//! - [`SelectionProvider`]: the selection function the resolver consults
//! - [`SelectionService`]: service wrapper with observability and the
//!   absence policy
//! - [`PrioritySelector`]: store-backed provider picking primary, then
//!   highest-priority integrations

mod priority;
mod query;
mod service;

pub use priority::PrioritySelector;
pub use query::SelectionQuery;
pub use service::SelectionService;

pub use crate::{Error, Result};
use crate::integration::Integration;

/// Tracing target for selection operations.
pub const TRACING_TARGET: &str = "herald_service::selection";

/// Core trait for integration selection.
///
/// Implementations return at most one winning integration per query.
/// `Ok(None)` and errors of an absence kind ([`Error::is_absence`]) both mean
/// "no winner"; any other error is fatal to the caller's operation.
#[async_trait::async_trait]
pub trait SelectionProvider: Send + Sync {
    /// Selects the winning integration for the query, if any.
    async fn select(&self, query: &SelectionQuery) -> Result<Option<Integration>>;
}
