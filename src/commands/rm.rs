//! `strata rm` command.

use crate::commands::{ledger, render_store_error};
use crate::context::ServiceContext;

/// Execute the `rm` command: cascade-delete one item and persist the
/// ledger, printing every removed id.
///
/// # Errors
///
/// Returns an error string when the ledger cannot be loaded or saved, or
/// when the id does not exist.
pub fn run(id: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let mut store = ledger::load_store(&ctx)?;

    let removed = store.delete(id).map_err(|e| render_store_error(&e))?;
    ledger::save_store(&ctx, &store)?;

    println!("Removed {} item(s):", removed.len());
    for removed_id in &removed {
        println!("  {removed_id}");
    }
    Ok(())
}
