//! Store-backed selection by primary flag and priority.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::{Error, Result, SelectionProvider, SelectionQuery, TRACING_TARGET};
use crate::integration::Integration;
use crate::store::{IntegrationFilter, IntegrationStore};

/// Selects the default integration of an environment and channel.
///
/// Candidates are the active integrations of the queried organization,
/// environment and channel (narrowed to the provider when the query names
/// one). The winner is the primary integration, then the one with the
/// highest priority, then the oldest.
#[derive(Clone)]
pub struct PrioritySelector {
    store: Arc<dyn IntegrationStore>,
}

impl fmt::Debug for PrioritySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrioritySelector").finish_non_exhaustive()
    }
}

impl PrioritySelector {
    /// Creates a selector reading candidates from the store.
    pub fn new<S>(store: S) -> Self
    where
        S: IntegrationStore + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Orders winners first.
fn precedence(a: &Integration, b: &Integration) -> Ordering {
    b.primary
        .cmp(&a.primary)
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

#[async_trait::async_trait]
impl SelectionProvider for PrioritySelector {
    async fn select(&self, query: &SelectionQuery) -> Result<Option<Integration>> {
        if query
            .provider_id
            .as_deref()
            .is_some_and(|provider_id| provider_id.trim().is_empty())
        {
            return Err(Error::invalid_input().with_message("provider id must not be blank"));
        }

        let filter = IntegrationFilter::active(query.organization_id)
            .with_environment(query.environment_id)
            .with_channel(query.channel)
            .with_provider(query.provider_id.clone());

        let candidates = self.store.find_integrations(&filter).await?;

        tracing::trace!(
            target: TRACING_TARGET,
            environment_id = %query.environment_id,
            channel = %query.channel,
            candidates = candidates.len(),
            "Ranking selection candidates"
        );

        Ok(candidates.into_iter().min_by(precedence))
    }
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use uuid::Uuid;

    use super::*;
    use crate::ErrorKind;
    use crate::integration::ChannelType;
    use crate::store::MemoryStore;

    struct Fixture {
        organization_id: Uuid,
        environment_id: Uuid,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                organization_id: Uuid::now_v7(),
                environment_id: Uuid::now_v7(),
            }
        }

        fn integration(&self, channel: ChannelType, provider_id: &str) -> Integration {
            Integration::new(self.organization_id, self.environment_id, channel, provider_id)
        }

        fn query(&self, channel: ChannelType, provider_id: Option<&str>) -> SelectionQuery {
            SelectionQuery {
                environment_id: self.environment_id,
                organization_id: self.organization_id,
                user_id: Uuid::now_v7(),
                channel,
                provider_id: provider_id.map(Into::into),
            }
        }
    }

    #[tokio::test]
    async fn primary_beats_priority() {
        let fixture = Fixture::new();
        let primary = fixture
            .integration(ChannelType::Email, "ses")
            .with_primary(true);
        let urgent = fixture
            .integration(ChannelType::Email, "sendgrid")
            .with_priority(10);

        let store = MemoryStore::default()
            .with_integration(urgent)
            .with_integration(primary.clone());
        let selector = PrioritySelector::new(store);

        let winner = selector
            .select(&fixture.query(ChannelType::Email, None))
            .await
            .unwrap();
        assert_eq!(winner, Some(primary));
    }

    #[tokio::test]
    async fn highest_priority_then_oldest() {
        let fixture = Fixture::new();
        let now = Timestamp::now();
        let mut older = fixture
            .integration(ChannelType::Sms, "twilio")
            .with_priority(5);
        older.created_at = now - SignedDuration::from_hours(1);
        let mut newer = fixture
            .integration(ChannelType::Sms, "vonage")
            .with_priority(5);
        newer.created_at = now;
        let low = fixture.integration(ChannelType::Sms, "plivo");

        let store = MemoryStore::default()
            .with_integration(low)
            .with_integration(newer)
            .with_integration(older.clone());
        let selector = PrioritySelector::new(store);

        let winner = selector
            .select(&fixture.query(ChannelType::Sms, None))
            .await
            .unwrap();
        assert_eq!(winner.map(|w| w.id), Some(older.id));
    }

    #[tokio::test]
    async fn inactive_and_other_channels_never_win() {
        let fixture = Fixture::new();
        let store = MemoryStore::default()
            .with_integration(
                fixture
                    .integration(ChannelType::Push, "fcm")
                    .with_active(false),
            )
            .with_integration(fixture.integration(ChannelType::Chat, "slack"));
        let selector = PrioritySelector::new(store);

        let winner = selector
            .select(&fixture.query(ChannelType::Push, None))
            .await
            .unwrap();
        assert!(winner.is_none());
    }

    #[tokio::test]
    async fn provider_filter_narrows_candidates() {
        let fixture = Fixture::new();
        let primary = fixture
            .integration(ChannelType::Email, "ses")
            .with_primary(true);
        let sendgrid = fixture.integration(ChannelType::Email, "sendgrid");

        let store = MemoryStore::default()
            .with_integration(primary)
            .with_integration(sendgrid.clone());
        let selector = PrioritySelector::new(store);

        let winner = selector
            .select(&fixture.query(ChannelType::Email, Some("sendgrid")))
            .await
            .unwrap();
        assert_eq!(winner, Some(sendgrid));
    }

    #[tokio::test]
    async fn blank_provider_is_malformed() {
        let fixture = Fixture::new();
        let selector = PrioritySelector::new(MemoryStore::default());

        let error = selector
            .select(&fixture.query(ChannelType::Email, Some("  ")))
            .await
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidInput);
    }
}
