//! `strata attach` command.

use crate::commands::{ledger, render_store_error};
use crate::context::ServiceContext;

/// Execute the `attach` command: record one attachment filename and
/// persist the ledger.
///
/// # Errors
///
/// Returns an error string when the ledger cannot be loaded or saved, or
/// when the id does not exist.
pub fn run(id: &str, file: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let mut store = ledger::load_store(&ctx)?;

    let item = store.add_attachment(id, file).map_err(|e| render_store_error(&e))?;
    ledger::save_store(&ctx, &store)?;

    println!("Attached \"{}\" to {} ({} total)", file, item.id, item.attachments.len());
    Ok(())
}
