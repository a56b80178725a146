//! `strata show` command.

use crate::commands::ledger;
use crate::context::ServiceContext;
use crate::model::WorkItem;
use crate::store::ItemStore;

/// Execute the `show` command: print one item in full detail, or as JSON
/// when `--json` is given.
///
/// # Errors
///
/// Returns an error string if the ledger cannot be loaded, the id is
/// unknown, or JSON serialization fails.
pub fn run(id: &str, json: bool) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = ledger::load_store(&ctx)?;

    let item = store.get(id).ok_or_else(|| format!("no item with id '{id}'"))?;
    if json {
        let rendered = serde_json::to_string_pretty(item)
            .map_err(|e| format!("Failed to serialize item {id}: {e}"))?;
        println!("{rendered}");
        return Ok(());
    }

    print_item(item, &store);
    Ok(())
}

fn print_item(item: &WorkItem, store: &ItemStore<'_>) {
    println!("{} [{}]", item.title, item.kind);
    println!("Id: {}", item.id);
    if let Some(parent_id) = &item.parent_id {
        println!("Parent: {parent_id}");
    }
    println!("Status: {}", item.status);
    println!("Priority: {}", item.priority);
    if item.assignee.is_empty() {
        println!("Assignee: Unassigned");
    } else {
        println!("Assignee: {}", item.assignee);
    }
    println!("Progress: {}%", item.progress);
    println!("Estimate: {}h", item.estimated_time);
    if let Some(date) = item.estimated_start_date {
        println!("Planned start: {date}");
    }
    if let Some(date) = item.estimated_end_date {
        println!("Planned end: {date}");
    }
    if let Some(date) = item.actual_start_date {
        println!("Actual start: {date}");
    }
    if let Some(date) = item.actual_end_date {
        println!("Actual end: {date}");
    }
    if !item.description.is_empty() {
        println!("\n{}", item.description);
    }

    let children = store.children_of(&item.id);
    if !children.is_empty() {
        println!("\nChildren ({}):", children.len());
        for child in children {
            println!("  [{}] {} ({}%)  {}", child.kind, child.title, child.progress, child.id);
        }
    }

    println!("\nAttachments ({}):", item.attachments.len());
    for attachment in &item.attachments {
        println!("  {attachment}");
    }

    println!("\nComments ({}):", item.comments.len());
    for comment in &item.comments {
        println!("  {} at {}:", comment.author, comment.timestamp.format("%Y-%m-%d %H:%M"));
        println!("    {}", comment.text);
    }
}
