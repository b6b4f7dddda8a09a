//! Snapshot loading, resolver wiring and output.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use herald_service::{
    ActiveIntegrationResolver, MemoryStore, PrioritySelector, ResolvedIntegration,
    SelectionService,
};

use crate::TRACING_TARGET_STARTUP;

/// Reads and decodes the snapshot file.
pub async fn load_store(path: &Path) -> anyhow::Result<MemoryStore> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read snapshot '{}'", path.display()))?;

    let store = MemoryStore::from_json(&json)
        .with_context(|| format!("failed to decode snapshot '{}'", path.display()))?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        environments = store.snapshot().environments.len(),
        integrations = store.snapshot().integrations.len(),
        "Snapshot loaded"
    );

    Ok(store)
}

/// Wires a resolver whose stores and selector all read the snapshot.
pub fn create_resolver(store: MemoryStore) -> ActiveIntegrationResolver {
    let store = Arc::new(store);
    let selection = SelectionService::new(PrioritySelector::new(store.clone()));
    ActiveIntegrationResolver::new(store.clone(), store, selection)
}

/// Serializes the resolved integrations as JSON.
pub fn write_output<W: Write>(
    mut writer: W,
    resolved: &[ResolvedIntegration],
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, resolved)?;
    } else {
        serde_json::to_writer(&mut writer, resolved)?;
    }

    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the resolved integrations to stdout.
pub fn print_output(resolved: &[ResolvedIntegration], pretty: bool) -> anyhow::Result<()> {
    write_output(io::stdout().lock(), resolved, pretty).context("failed to write output")
}
