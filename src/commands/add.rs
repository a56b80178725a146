//! `strata add` command.

use crate::cli::FieldArgs;
use crate::commands::{ledger, render_store_error};
use crate::context::ServiceContext;
use crate::model::ItemKind;

/// Execute the `add` command: create one item and persist the ledger.
///
/// # Errors
///
/// Returns an error string when the ledger cannot be loaded or saved, or
/// when the store rejects the creation (validation or linkage).
pub fn run(kind: ItemKind, parent: Option<&str>, fields: &FieldArgs) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let mut store = ledger::load_store(&ctx)?;

    let item =
        store.create(kind, parent, &fields.patch()).map_err(|e| render_store_error(&e))?;
    ledger::save_store(&ctx, &store)?;

    println!("Created {} {} \"{}\"", item.kind, item.id, item.title);
    Ok(())
}
