#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod integration;
#[doc(hidden)]
pub mod prelude;
pub mod resolver;
pub mod selection;
pub mod store;

pub use error::{BoxedError, Error, ErrorKind, Result};
pub use integration::{ChannelType, Environment, Integration, ResolvedIntegration};
pub use resolver::{ActiveIntegrationResolver, ResolveCommand};
pub use selection::{PrioritySelector, SelectionProvider, SelectionQuery, SelectionService};
pub use store::{EnvironmentStore, IntegrationFilter, IntegrationStore, MemoryStore, Snapshot};
