//! `strata comment` command.

use crate::commands::{ledger, render_store_error};
use crate::context::ServiceContext;

/// Execute the `comment` command: append one comment and persist the
/// ledger.
///
/// # Errors
///
/// Returns an error string when the ledger cannot be loaded or saved, or
/// when the id does not exist.
pub fn run(id: &str, author: &str, text: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let mut store = ledger::load_store(&ctx)?;

    let comment = store.add_comment(id, author, text).map_err(|e| render_store_error(&e))?;
    ledger::save_store(&ctx, &store)?;

    println!("Added comment {} by {}", comment.id, comment.author);
    Ok(())
}
