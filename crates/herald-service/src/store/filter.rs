//! Integration lookup filter.

use uuid::Uuid;

use crate::integration::{ChannelType, Integration};

/// Criteria for [`IntegrationStore::find_integrations`].
///
/// Unset optional fields match any value.
///
/// [`IntegrationStore::find_integrations`]: super::IntegrationStore::find_integrations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationFilter {
    /// Organization the integrations belong to.
    pub organization_id: Uuid,
    /// Restricts to one environment.
    pub environment_id: Option<Uuid>,
    /// Restricts to one channel type.
    pub channel: Option<ChannelType>,
    /// Restricts by the active flag.
    pub active: Option<bool>,
    /// Restricts to one provider.
    pub provider_id: Option<String>,
}

impl IntegrationFilter {
    /// Matches every integration of the organization.
    pub fn organization(organization_id: Uuid) -> Self {
        Self {
            organization_id,
            environment_id: None,
            channel: None,
            active: None,
            provider_id: None,
        }
    }

    /// Matches the active integrations of the organization.
    pub fn active(organization_id: Uuid) -> Self {
        Self::organization(organization_id).with_active(true)
    }

    /// Restricts to one environment.
    pub fn with_environment(mut self, environment_id: Uuid) -> Self {
        self.environment_id = Some(environment_id);
        self
    }

    /// Restricts to one channel type.
    pub fn with_channel(mut self, channel: ChannelType) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Restricts by the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Restricts to one provider when `provider_id` is set.
    pub fn with_provider(mut self, provider_id: Option<String>) -> Self {
        self.provider_id = provider_id;
        self
    }

    /// Returns true if the integration satisfies every set criterion.
    pub fn matches(&self, integration: &Integration) -> bool {
        integration.organization_id == self.organization_id
            && self
                .environment_id
                .is_none_or(|id| integration.environment_id == id)
            && self.channel.is_none_or(|c| integration.channel == c)
            && self.active.is_none_or(|a| integration.active == a)
            && self
                .provider_id
                .as_deref()
                .is_none_or(|p| integration.provider_id == p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_filter_rejects_inactive_and_foreign() {
        let organization_id = Uuid::now_v7();
        let environment_id = Uuid::now_v7();
        let filter = IntegrationFilter::active(organization_id);

        let active = Integration::new(organization_id, environment_id, ChannelType::Email, "ses");
        let inactive = active.clone().with_active(false);
        let foreign = Integration::new(Uuid::now_v7(), environment_id, ChannelType::Email, "ses");

        assert!(filter.matches(&active));
        assert!(!filter.matches(&inactive));
        assert!(!filter.matches(&foreign));
    }

    #[test]
    fn narrowed_filter() {
        let organization_id = Uuid::now_v7();
        let environment_id = Uuid::now_v7();
        let integration =
            Integration::new(organization_id, environment_id, ChannelType::Sms, "twilio");

        let filter = IntegrationFilter::active(organization_id)
            .with_environment(environment_id)
            .with_channel(ChannelType::Sms);
        assert!(filter.matches(&integration));
        assert!(
            filter
                .clone()
                .with_provider(Some("twilio".into()))
                .matches(&integration)
        );
        assert!(
            !filter
                .clone()
                .with_provider(Some("vonage".into()))
                .matches(&integration)
        );
        assert!(
            !filter
                .with_channel(ChannelType::Push)
                .matches(&integration)
        );
    }
}
