//! Selection query value object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::integration::ChannelType;

/// Input of a single selection call.
///
/// Built fresh for every (environment, channel) pair of a fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionQuery {
    /// Environment the winner is selected in.
    pub environment_id: Uuid,
    /// Organization of the requesting user.
    pub organization_id: Uuid,
    /// Requesting user.
    pub user_id: Uuid,
    /// Channel the winner is selected for.
    pub channel: ChannelType,
    /// Optional provider restriction, passed through from the command.
    pub provider_id: Option<String>,
}
