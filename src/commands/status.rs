//! `strata status` command.

use crate::commands::ledger;
use crate::context::ServiceContext;

/// Execute the `status` command.
///
/// Displays a table of all items showing id, kind, title, status,
/// priority, and progress.
///
/// # Errors
///
/// Returns an error string if the ledger cannot be loaded.
pub fn run() -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = ledger::load_store(&ctx)?;

    if store.is_empty() {
        println!("No items in store.");
        return Ok(());
    }

    // Collect rows for column-width calculation.
    let mut rows: Vec<(String, String, String, String, String, String)> = Vec::new();
    for item in store.items() {
        rows.push((
            item.id.clone(),
            item.kind.to_string(),
            item.title.clone(),
            item.status.to_string(),
            item.priority.to_string(),
            format!("{}%", item.progress),
        ));
    }

    // Calculate column widths.
    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(2).max(2);
    let kind_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(4).max(4);
    let title_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(5).max(5);
    let status_width = rows.iter().map(|r| r.3.len()).max().unwrap_or(6).max(6);
    let priority_width = rows.iter().map(|r| r.4.len()).max().unwrap_or(8).max(8);

    // Print header.
    println!(
        "{:<id_width$}  {:<kind_width$}  {:<title_width$}  {:<status_width$}  {:<priority_width$}  PROGRESS",
        "ID", "KIND", "TITLE", "STATUS", "PRIORITY",
    );
    println!(
        "{:-<id_width$}  {:-<kind_width$}  {:-<title_width$}  {:-<status_width$}  {:-<priority_width$}  --------",
        "", "", "", "", "",
    );

    // Print rows.
    for (id, kind, title, status, priority, progress) in &rows {
        println!(
            "{id:<id_width$}  {kind:<kind_width$}  {title:<title_width$}  {status:<status_width$}  {priority:<priority_width$}  {progress}",
        );
    }

    println!("\n{} item(s) total.", rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FieldArgs;
    use crate::model::ItemKind;

    #[test]
    fn status_command_empty_store() {
        let _env = crate::commands::env_lock();
        let dir = std::env::temp_dir().join("strata_cmd_status_empty");
        std::env::set_var("STRATA_STORE", dir.join("items.yaml").to_str().unwrap());

        let result = run();

        std::env::remove_var("STRATA_STORE");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(result.is_ok());
    }

    #[test]
    fn status_command_with_items() {
        let _env = crate::commands::env_lock();
        let dir = std::env::temp_dir().join("strata_cmd_status_items");
        std::env::set_var("STRATA_STORE", dir.join("items.yaml").to_str().unwrap());

        let ctx = ServiceContext::live();
        let mut store = ledger::load_store(&ctx).unwrap();
        let titled = |t: &str| FieldArgs { title: Some(t.to_string()), ..FieldArgs::default() };
        let epic = store.create(ItemKind::Epic, None, &titled("Auth").patch()).unwrap();
        store.create(ItemKind::Story, Some(&epic.id), &titled("Login").patch()).unwrap();
        ledger::save_store(&ctx, &store).unwrap();

        let result = run();

        std::env::remove_var("STRATA_STORE");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(result.is_ok());
    }
}
