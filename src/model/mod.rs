//! Work-item model types.
//!
//! Defines the Rust types that mirror the ledger's YAML schema. These are
//! serialized/deserialized by the command layer and mutated by the store.

mod fields;
mod item;
mod kind;
mod status;

pub use fields::{ItemFields, ItemPatch};
pub use item::{Comment, WorkItem};
pub use kind::ItemKind;
pub use status::{Priority, Status};
