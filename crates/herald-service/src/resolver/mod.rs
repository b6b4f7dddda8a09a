//! Active integration resolution.
//!
//! [`ActiveIntegrationResolver`] loads an organization's active integrations,
//! fans out one selection query per (environment, channel) pair and marks the
//! integrations that won any of them as selected.
//!
//! # Example
//!
//! ```rust,ignore
//! use herald_service::resolver::{ActiveIntegrationResolver, ResolveCommand};
//!
//! let resolver = ActiveIntegrationResolver::new(integrations, environments, selection);
//! let command = ResolveCommand::new(organization_id, user_id).with_provider("sendgrid");
//! for integration in resolver.resolve(&command).await? {
//!     println!("{} selected={}", integration.provider_id, integration.selected);
//! }
//! ```

mod command;
mod service;

pub use command::ResolveCommand;
pub use service::{ActiveIntegrationResolver, distinct_channels};

pub use crate::{Error, Result};

/// Tracing target for resolver operations.
pub const TRACING_TARGET: &str = "herald_service::resolver";
