//! `strata tree` command.

use crate::commands::ledger;
use crate::context::ServiceContext;
use crate::model::WorkItem;
use crate::store::ItemStore;

/// Execute the `tree` command: render the whole forest, epics first,
/// children indented under their parents in insertion order.
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

    for root in store.roots() {
        print_subtree(&store, root, 0);
    }
    Ok(())
}

// Recursion depth is bounded by the fixed four-level hierarchy.
fn print_subtree(store: &ItemStore<'_>, item: &WorkItem, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}- [{}] {} ({}, {}%)  {}",
        item.kind, item.title, item.status, item.progress, item.id
    );
    for child in store.children_of(&item.id) {
        print_subtree(store, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::FieldArgs;
    use crate::model::ItemKind;

    #[test]
    fn tree_command_empty_store() {
        let _env = crate::commands::env_lock();
        let dir = std::env::temp_dir().join("strata_cmd_tree_empty");
        std::env::set_var("STRATA_STORE", dir.join("items.yaml").to_str().unwrap());

        let result = run();

        std::env::remove_var("STRATA_STORE");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(result.is_ok());
    }

    #[test]
    fn tree_command_renders_nested_items() {
        let _env = crate::commands::env_lock();
        let dir = std::env::temp_dir().join("strata_cmd_tree_nested");
        std::env::set_var("STRATA_STORE", dir.join("items.yaml").to_str().unwrap());

        let ctx = ServiceContext::live();
        let mut store = ledger::load_store(&ctx).unwrap();
        let titled = |t: &str| FieldArgs { title: Some(t.to_string()), ..FieldArgs::default() };
        let epic = store.create(ItemKind::Epic, None, &titled("Auth").patch()).unwrap();
        let story =
            store.create(ItemKind::Story, Some(&epic.id), &titled("Login").patch()).unwrap();
        let task =
            store.create(ItemKind::Task, Some(&story.id), &titled("Validate").patch()).unwrap();
        store.create(ItemKind::Subtask, Some(&task.id), &titled("Email regex").patch()).unwrap();
        ledger::save_store(&ctx, &store).unwrap();

        let result = run();

        std::env::remove_var("STRATA_STORE");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(result.is_ok());
    }
}
