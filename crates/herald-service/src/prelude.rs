//! Commonly used items from herald-service.
//!
//! This prelude module exports the most commonly used types, traits, and services
//! to simplify imports in consuming code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use herald_service::prelude::*;
//! ```

// Domain types
pub use crate::integration::{ChannelType, Environment, Integration, ResolvedIntegration};
// Resolution
pub use crate::resolver::{ActiveIntegrationResolver, ResolveCommand, distinct_channels};
// Selection types and traits
pub use crate::selection::{
    PrioritySelector, SelectionProvider, SelectionQuery, SelectionService,
};
// Storage types and traits
pub use crate::store::{
    EnvironmentStore, IntegrationFilter, IntegrationStore, MemoryStore, Snapshot,
};
pub use crate::{BoxedError, Error, ErrorKind, Result};
