//! Resolution input configuration.

use std::path::PathBuf;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use herald_service::ResolveCommand;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::TRACING_TARGET_CONFIG;

/// Resolution input configuration.
///
/// # Environment Variables
///
/// - `HERALD_SNAPSHOT` - Path to the JSON snapshot of environments and integrations
/// - `HERALD_ORGANIZATION_ID` - Organization to resolve
/// - `HERALD_USER_ID` - Requesting user
/// - `HERALD_PROVIDER_ID` - Optional provider restriction
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ResolveConfig {
    /// Path to the JSON snapshot of environments and integrations.
    #[arg(long, env = "HERALD_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Organization whose active integrations are resolved.
    #[arg(long, env = "HERALD_ORGANIZATION_ID")]
    pub organization_id: Uuid,

    /// User on whose behalf selection runs.
    #[arg(long, env = "HERALD_USER_ID")]
    pub user_id: Uuid,

    /// Restricts selection to a single provider.
    #[arg(long, env = "HERALD_PROVIDER_ID")]
    pub provider_id: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long, env = "HERALD_PRETTY")]
    #[serde(default)]
    pub pretty: bool,
}

impl ResolveConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the organization id is nil, the provider id is
    /// blank, or the snapshot path does not point to a file.
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.organization_id.is_nil() {
            return Err(anyhow!("Organization id must not be nil"));
        }

        if let Some(ref provider_id) = self.provider_id
            && provider_id.trim().is_empty()
        {
            return Err(anyhow!("Provider id must not be blank when provided"));
        }

        if !self.snapshot.is_file() {
            return Err(anyhow!(
                "Snapshot '{}' does not exist or is not a file",
                self.snapshot.display()
            ));
        }

        Ok(())
    }

    /// Builds the resolve command described by this configuration.
    pub fn command(&self) -> ResolveCommand {
        let command = ResolveCommand::new(self.organization_id, self.user_id);
        match self.provider_id {
            Some(ref provider_id) => command.with_provider(provider_id.clone()),
            None => command,
        }
    }

    /// Logs the configuration.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            snapshot = %self.snapshot.display(),
            organization_id = %self.organization_id,
            user_id = %self.user_id,
            provider_id = ?self.provider_id,
            "Resolve configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(snapshot: PathBuf) -> ResolveConfig {
        ResolveConfig {
            snapshot,
            organization_id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            provider_id: None,
            pretty: false,
        }
    }

    #[test]
    fn validation_works_correctly() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let valid = config(file.path().to_path_buf());
        assert!(valid.validate().is_ok());

        let mut invalid = valid.clone();
        invalid.provider_id = Some("   ".into());
        assert!(invalid.validate().is_err());

        let mut invalid = valid.clone();
        invalid.organization_id = Uuid::nil();
        assert!(invalid.validate().is_err());

        let missing = config(file.path().with_extension("missing"));
        assert!(missing.validate().is_err());
    }

    #[test]
    fn command_carries_provider() {
        let mut config = config(PathBuf::from("snapshot.json"));
        assert_eq!(config.command().provider_id, None);

        config.provider_id = Some("twilio".into());
        let command = config.command();
        assert_eq!(command.organization_id, config.organization_id);
        assert_eq!(command.user_id, config.user_id);
        assert_eq!(command.provider_id.as_deref(), Some("twilio"));
    }
}
