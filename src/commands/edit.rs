//! `strata edit` command.

use crate::cli::FieldArgs;
use crate::commands::{ledger, render_store_error};
use crate::context::ServiceContext;

/// Execute the `edit` command: patch one item and persist the ledger.
///
/// A call with no field flags changes nothing and leaves the ledger
/// untouched.
///
/// # Errors
///
/// Returns an error string when the ledger cannot be loaded or saved, or
/// when the store rejects the update (unknown id or validation).
pub fn run(id: &str, fields: &FieldArgs) -> Result<(), String> {
    let patch = fields.patch();
    if patch.is_empty() {
        println!("No changes requested.");
        return Ok(());
    }

    let ctx = ServiceContext::live();
    let mut store = ledger::load_store(&ctx)?;

    let item = store.update(id, &patch).map_err(|e| render_store_error(&e))?;
    ledger::save_store(&ctx, &store)?;

    println!("Updated {} {} \"{}\"", item.kind, item.id, item.title);
    Ok(())
}
