//! Command dispatch and handlers.

pub mod add;
pub mod attach;
pub mod comment;
pub mod edit;
pub mod ledger;
pub mod rm;
pub mod show;
pub mod status;
pub mod tree;

use crate::cli::Command;
use crate::store::StoreError;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Add { kind, parent, fields } => add::run(*kind, parent.as_deref(), fields),
        Command::Edit { id, fields } => edit::run(id, fields),
        Command::Rm { id } => rm::run(id),
        Command::Show { id, json } => show::run(id, *json),
        Command::Status => status::run(),
        Command::Tree => tree::run(),
        Command::Comment { id, author, text } => comment::run(id, author, text),
        Command::Attach { id, file } => attach::run(id, file),
    }
}

/// Renders a store failure for the terminal, expanding field-level
/// validation reasons onto their own lines.
pub(crate) fn render_store_error(err: &StoreError) -> String {
    match err {
        StoreError::Validation(errors) => {
            let mut lines = vec!["validation failed:".to_string()];
            for (field, reason) in errors.iter() {
                lines.push(format!("  {field}: {reason}"));
            }
            lines.join("\n")
        }
        other => other.to_string(),
    }
}

/// Serializes tests that set `STRATA_STORE`; the process environment is
/// shared across test threads.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
