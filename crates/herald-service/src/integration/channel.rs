//! Channel type enumeration for notification delivery media.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Delivery medium an integration sends notifications through.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChannelType {
    /// Transactional and marketing email (SendGrid, SES, Mailgun)
    #[default]
    Email,

    /// Text messages (Twilio, Vonage)
    Sms,

    /// Mobile and web push (FCM, APNs, Expo)
    Push,

    /// Team chat (Slack, Discord, Teams)
    Chat,

    /// Notification center rendered inside the product
    InApp,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(ChannelType::InApp.to_string(), "in_app");
        assert_eq!(ChannelType::from_str("sms").ok(), Some(ChannelType::Sms));
        assert_eq!(
            serde_json::to_string(&ChannelType::InApp).ok().as_deref(),
            Some("\"in_app\"")
        );
    }

    #[test]
    fn every_variant_round_trips_through_display() {
        for channel in ChannelType::iter() {
            assert_eq!(ChannelType::from_str(&channel.to_string()).ok(), Some(channel));
        }
    }
}
