//! YAML ledger — the command layer's persistence for the item store.
//!
//! The store itself is purely in memory; persisting it is this layer's
//! job. The whole collection lives in one YAML file whose location comes
//! from the `STRATA_STORE` env var (default `.strata/items.yaml`). All
//! I/O goes through the `FileSystem` port.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::model::WorkItem;
use crate::store::ItemStore;

/// On-disk shape of the ledger file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// All work items, in insertion order.
    #[serde(default)]
    pub items: Vec<WorkItem>,
}

/// Resolves the ledger file path from `STRATA_STORE`.
#[must_use]
pub fn ledger_path() -> PathBuf {
    env::var("STRATA_STORE").map_or_else(|_| PathBuf::from(".strata/items.yaml"), PathBuf::from)
}

/// Loads the ledger and rebuilds a store from it. A missing ledger file
/// is an empty store, not an error.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or parsed, or if
/// its contents fail the store's integrity checks.
pub fn load_store(ctx: &ServiceContext) -> Result<ItemStore<'_>, String> {
    let path = ledger_path();
    if !ctx.fs.exists(&path) {
        return Ok(ItemStore::new(ctx));
    }
    let contents = ctx
        .fs
        .read_to_string(&path)
        .map_err(|e| format!("Failed to read ledger {}: {e}", path.display()))?;
    let ledger: Ledger = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse ledger {}: {e}", path.display()))?;
    ItemStore::from_items(ctx, ledger.items)
        .map_err(|e| format!("Ledger {} is inconsistent: {e}", path.display()))
}

/// Saves the store's items back to the ledger file.
///
/// # Errors
///
/// Returns an error string if serialization or the write fails.
pub fn save_store(ctx: &ServiceContext, store: &ItemStore<'_>) -> Result<(), String> {
    let ledger = Ledger { items: store.items().into_iter().cloned().collect() };
    let yaml =
        serde_yaml::to_string(&ledger).map_err(|e| format!("Failed to serialize ledger: {e}"))?;
    let path = ledger_path();
    ctx.fs
        .write(&path, &yaml)
        .map_err(|e| format!("Failed to write ledger {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemKind, ItemPatch};

    #[test]
    fn missing_ledger_loads_an_empty_store() {
        let _env = crate::commands::env_lock();
        std::env::set_var("STRATA_STORE", "/tmp/strata_test_ledger_missing/items.yaml");
        let ctx = ServiceContext::live();
        let store = load_store(&ctx).unwrap();
        std::env::remove_var("STRATA_STORE");
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let _env = crate::commands::env_lock();
        let dir = std::env::temp_dir().join("strata_test_ledger_round_trip");
        let path = dir.join("items.yaml");
        std::env::set_var("STRATA_STORE", path.to_str().unwrap());

        let ctx = ServiceContext::live();
        let mut store = load_store(&ctx).unwrap();
        let patch = ItemPatch { title: Some("Auth".to_string()), ..ItemPatch::default() };
        let epic = store.create(ItemKind::Epic, None, &patch).unwrap();
        save_store(&ctx, &store).unwrap();

        let reloaded = load_store(&ctx).unwrap();
        std::env::remove_var("STRATA_STORE");
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(&epic.id).unwrap().title, "Auth");
    }

    #[test]
    fn corrupt_ledger_is_reported_not_loaded() {
        let _env = crate::commands::env_lock();
        let dir = std::env::temp_dir().join("strata_test_ledger_corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("items.yaml");
        std::fs::write(&path, "items: [not-an-item]\n").unwrap();
        std::env::set_var("STRATA_STORE", path.to_str().unwrap());

        let ctx = ServiceContext::live();
        let result = load_store(&ctx);
        std::env::remove_var("STRATA_STORE");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(result.is_err());
    }
}
