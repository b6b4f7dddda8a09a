//! Domain types for delivery-provider integrations and the environments
//! they are scoped to.

mod channel;
mod environment;
mod model;

pub use channel::ChannelType;
pub use environment::Environment;
pub use model::{Integration, ResolvedIntegration};
