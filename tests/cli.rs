//! Integration tests for top-level CLI behavior.
//!
//! Each test gets its own ledger path via the `STRATA_STORE` env var on
//! the spawned process, so tests stay independent.

use std::path::{Path, PathBuf};
use std::process::Command;

fn store_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("strata_it_{name}")).join("items.yaml")
}

fn run_strata(store: &Path, args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_strata");
    Command::new(bin)
        .env("STRATA_STORE", store)
        .args(args)
        .output()
        .expect("failed to run strata binary")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parses the new item id out of `Created <kind> <id> "<title>"`.
fn created_id(output: &std::process::Output) -> String {
    let text = stdout(output);
    text.split_whitespace().nth(2).unwrap_or_else(|| panic!("no id in: {text}")).to_string()
}

fn cleanup(store: &Path) {
    if let Some(dir) = store.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[test]
fn full_lifecycle_create_tree_and_cascade_delete() {
    let store = store_dir("lifecycle");
    cleanup(&store);

    let epic = run_strata(&store, &["add", "epic", "--title", "User Auth"]);
    assert!(epic.status.success(), "{}", stderr(&epic));
    let epic_id = created_id(&epic);

    let story =
        run_strata(&store, &["add", "story", "--parent", &epic_id, "--title", "Login Page"]);
    assert!(story.status.success(), "{}", stderr(&story));
    let story_id = created_id(&story);

    // Skipping the story level must fail with a linkage error.
    let skipped =
        run_strata(&store, &["add", "task", "--parent", &epic_id, "--title", "Validation"]);
    assert!(!skipped.status.success());
    assert!(stderr(&skipped).contains("wrong parent kind"));

    let task =
        run_strata(&store, &["add", "task", "--parent", &story_id, "--title", "Validation"]);
    assert!(task.status.success(), "{}", stderr(&task));

    let tree = run_strata(&store, &["tree"]);
    let tree_out = stdout(&tree);
    assert!(tree.status.success());
    assert!(tree_out.contains("- [epic] User Auth"));
    assert!(tree_out.contains("  - [story] Login Page"));
    assert!(tree_out.contains("    - [task] Validation"));

    let removed = run_strata(&store, &["rm", &epic_id]);
    assert!(removed.status.success(), "{}", stderr(&removed));
    assert!(stdout(&removed).contains("Removed 3 item(s)"));

    let status = run_strata(&store, &["status"]);
    assert!(status.status.success());
    assert!(stdout(&status).contains("No items in store."));

    cleanup(&store);
}

#[test]
fn story_without_parent_is_rejected() {
    let store = store_dir("orphan_story");
    cleanup(&store);

    let output = run_strata(&store, &["add", "story", "--title", "Orphan"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("require a parent of kind epic"));

    cleanup(&store);
}

#[test]
fn reversed_dates_are_rejected_with_the_field_name() {
    let store = store_dir("reversed_dates");
    cleanup(&store);

    let output = run_strata(
        &store,
        &[
            "add",
            "epic",
            "--title",
            "Analytics",
            "--est-start",
            "2024-02-01",
            "--est-end",
            "2024-01-01",
        ],
    );
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("estimated_end_date"), "unexpected stderr: {err}");

    // Nothing was created.
    let status = run_strata(&store, &["status"]);
    assert!(stdout(&status).contains("No items in store."));

    cleanup(&store);
}

#[test]
fn missing_title_and_reversed_dates_report_both_fields() {
    let store = store_dir("multi_error");
    cleanup(&store);

    let output = run_strata(
        &store,
        &["add", "epic", "--est-start", "2024-02-01", "--est-end", "2024-01-01"],
    );
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("title: Title is required"));
    assert!(err.contains("estimated_end_date: End date must be after start date"));

    cleanup(&store);
}

#[test]
fn edit_then_show_reflects_the_change() {
    let store = store_dir("edit_show");
    cleanup(&store);

    let epic = run_strata(&store, &["add", "epic", "--title", "Auth"]);
    let epic_id = created_id(&epic);

    let edited = run_strata(
        &store,
        &["edit", &epic_id, "--status", "in-progress", "--progress", "65"],
    );
    assert!(edited.status.success(), "{}", stderr(&edited));

    let shown = run_strata(&store, &["show", &epic_id]);
    let text = stdout(&shown);
    assert!(shown.status.success());
    assert!(text.contains("Status: in progress"));
    assert!(text.contains("Progress: 65%"));

    cleanup(&store);
}

#[test]
fn show_json_emits_parseable_output() {
    let store = store_dir("show_json");
    cleanup(&store);

    let epic = run_strata(&store, &["add", "epic", "--title", "Auth", "--assignee", "John Doe"]);
    let epic_id = created_id(&epic);

    let shown = run_strata(&store, &["show", &epic_id, "--json"]);
    assert!(shown.status.success(), "{}", stderr(&shown));

    let value: serde_json::Value = serde_json::from_str(&stdout(&shown)).unwrap();
    assert_eq!(value["id"], serde_json::json!(epic_id));
    assert_eq!(value["kind"], serde_json::json!("epic"));
    assert_eq!(value["title"], serde_json::json!("Auth"));
    assert_eq!(value["assignee"], serde_json::json!("John Doe"));

    cleanup(&store);
}

#[test]
fn comment_and_attach_show_up_in_detail_view() {
    let store = store_dir("comment_attach");
    cleanup(&store);

    let epic = run_strata(&store, &["add", "epic", "--title", "Auth"]);
    let epic_id = created_id(&epic);

    let commented = run_strata(
        &store,
        &["comment", &epic_id, "--author", "Jane Smith", "--text", "Looks good"],
    );
    assert!(commented.status.success(), "{}", stderr(&commented));

    let attached = run_strata(&store, &["attach", &epic_id, "auth-wireframes.pdf"]);
    assert!(attached.status.success(), "{}", stderr(&attached));

    let shown = run_strata(&store, &["show", &epic_id]);
    let text = stdout(&shown);
    assert!(text.contains("Attachments (1):"));
    assert!(text.contains("auth-wireframes.pdf"));
    assert!(text.contains("Comments (1):"));
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Looks good"));

    cleanup(&store);
}

#[test]
fn rm_unknown_id_reports_not_found() {
    let store = store_dir("rm_unknown");
    cleanup(&store);

    let output = run_strata(&store, &["rm", "ghost"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no item with id 'ghost'"));

    cleanup(&store);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let store = store_dir("bad_subcommand");
    let output = run_strata(&store, &["nonsense"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unrecognized subcommand"));
}
