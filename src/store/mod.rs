//! Item store — the in-memory arena owning all work items.
//!
//! A flat `id → item` map plus an insertion-order index; parent/child
//! navigation goes through `parent_id` back-references, never embedded
//! child lists, so any subtree can be recomputed on demand from a single
//! source of truth.
//!
//! All mutations validate first and write second: a failed operation
//! leaves the collection exactly as it was.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use thiserror::Error;

use crate::context::ServiceContext;
use crate::model::{Comment, ItemFields, ItemKind, ItemPatch, WorkItem};
use crate::validate::{validate, ValidationErrors};

/// A parent/type linkage violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkageError {
    /// An epic was given a parent; epics are roots.
    #[error("an epic cannot have a parent")]
    UnexpectedParent,
    /// A non-epic was created without a parent.
    #[error("{kind} items require a parent of kind {expected}")]
    MissingParent {
        /// Kind of the item being created.
        kind: ItemKind,
        /// Kind the parent must have.
        expected: ItemKind,
    },
    /// The referenced parent id does not exist.
    #[error("parent item '{parent_id}' does not exist")]
    ParentNotFound {
        /// The dangling parent id.
        parent_id: String,
    },
    /// The referenced parent exists but has the wrong kind.
    #[error("wrong parent kind for {kind}: expected {expected}, found {found}")]
    WrongParentKind {
        /// Kind of the item being created.
        kind: ItemKind,
        /// Kind the parent must have.
        expected: ItemKind,
        /// Kind the referenced parent actually has.
        found: ItemKind,
    },
}

/// Failure of a store operation. No variant is fatal: the collection is
/// unchanged after any error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The candidate field set failed validation; recoverable by
    /// re-prompting with the per-field reasons.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The parent linkage was invalid; recoverable by supplying a valid
    /// parent.
    #[error(transparent)]
    Linkage(#[from] LinkageError),
    /// No item with the given id; recoverable by refreshing the caller's
    /// view.
    #[error("no item with id '{0}'")]
    NotFound(String),
    /// Two items claimed the same id while rebuilding from a ledger.
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),
}

/// In-memory collection of work items.
///
/// Owns identity, parent/child relationships, and all mutation
/// operations. Single-writer: callers serialize mutations; the read
/// views are pure and may be called freely between them.
pub struct ItemStore<'a> {
    ctx: &'a ServiceContext,
    items: HashMap<String, WorkItem>,
    order: Vec<String>,
}

impl<'a> ItemStore<'a> {
    /// Creates an empty store using the given context's clock and ID
    /// generator.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx, items: HashMap::new(), order: Vec::new() }
    }

    /// Rebuilds a store from previously serialized items.
    ///
    /// The ledger is hand-editable, so nothing is trusted: id uniqueness
    /// and every item's parent linkage are re-checked before the store is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] or a [`StoreError::Linkage`]
    /// if the items do not form a valid forest.
    pub fn from_items(ctx: &'a ServiceContext, items: Vec<WorkItem>) -> Result<Self, StoreError> {
        let mut store = Self::new(ctx);
        for item in items {
            if store.items.contains_key(&item.id) {
                return Err(StoreError::DuplicateId(item.id));
            }
            store.order.push(item.id.clone());
            store.items.insert(item.id.clone(), item);
        }
        for id in &store.order {
            if let Some(item) = store.items.get(id) {
                store.check_linkage(item.kind, item.parent_id.as_deref())?;
            }
        }
        Ok(store)
    }

    /// Creates a new item of `kind` under `parent_id`, with `patch`
    /// applied over default fields.
    ///
    /// On success the item is appended to the collection and returned;
    /// no other item is affected.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] when the field set is
    /// inconsistent, or [`StoreError::Linkage`] when `parent_id` does not
    /// reference an existing item of the immediate parent kind.
    pub fn create(
        &mut self,
        kind: ItemKind,
        parent_id: Option<&str>,
        patch: &ItemPatch,
    ) -> Result<WorkItem, StoreError> {
        let fields = patch.apply(&ItemFields::default());
        validate(&fields)?;
        self.check_linkage(kind, parent_id)?;

        let id = self.ctx.id_gen.generate_id();
        if self.items.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        let now = self.ctx.clock.now();
        let item = WorkItem {
            id: id.clone(),
            kind,
            parent_id: parent_id.map(ToString::to_string),
            title: fields.title,
            description: fields.description,
            assignee: fields.assignee,
            status: fields.status,
            priority: fields.priority,
            estimated_time: fields.estimated_time,
            progress: fields.progress,
            estimated_start_date: fields.estimated_start_date,
            estimated_end_date: fields.estimated_end_date,
            actual_start_date: fields.actual_start_date,
            actual_end_date: fields.actual_end_date,
            attachments: Vec::new(),
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.order.push(id.clone());
        self.items.insert(id, item.clone());
        Ok(item)
    }

    /// Applies `patch` to the identified item after validating the merged
    /// field set, refreshing `updated_at`. `id`, `kind`, `parent_id`, and
    /// `created_at` are not patchable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or
    /// [`StoreError::Validation`] when the merged fields are
    /// inconsistent; the item is unchanged in either case.
    pub fn update(&mut self, id: &str, patch: &ItemPatch) -> Result<WorkItem, StoreError> {
        let merged = match self.items.get(id) {
            Some(current) => patch.apply(&current.fields()),
            None => return Err(StoreError::NotFound(id.to_string())),
        };
        validate(&merged)?;

        let now = self.ctx.clock.now();
        match self.items.get_mut(id) {
            Some(item) => {
                item.set_fields(merged);
                item.updated_at = now;
                Ok(item.clone())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Deletes the identified item together with its full descendant
    /// closure, in one logical step, returning the removed ids.
    ///
    /// The closure is computed iteratively with a visited set, so even a
    /// corrupted parent graph cannot loop forever.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<BTreeSet<String>, StoreError> {
        if !self.items.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }

        let mut closure = BTreeSet::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([id.to_string()]);
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for child in self.children_of(&current) {
                queue.push_back(child.id.clone());
            }
            closure.insert(current);
        }

        self.items.retain(|item_id, _| !closure.contains(item_id));
        self.order.retain(|item_id| !closure.contains(item_id));
        Ok(closure)
    }

    /// Appends a comment to the identified item, minting the comment id
    /// and timestamp, and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn add_comment(
        &mut self,
        id: &str,
        author: &str,
        text: &str,
    ) -> Result<Comment, StoreError> {
        if !self.items.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let comment = Comment {
            id: self.ctx.id_gen.generate_id(),
            author: author.to_string(),
            text: text.to_string(),
            timestamp: self.ctx.clock.now(),
        };
        match self.items.get_mut(id) {
            Some(item) => {
                item.comments.push(comment.clone());
                item.updated_at = comment.timestamp;
                Ok(comment)
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Appends an attachment filename to the identified item and
    /// refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn add_attachment(&mut self, id: &str, filename: &str) -> Result<WorkItem, StoreError> {
        let now = self.ctx.clock.now();
        match self.items.get_mut(id) {
            Some(item) => {
                item.attachments.push(filename.to_string());
                item.updated_at = now;
                Ok(item.clone())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// All items whose `parent_id` is `id`, in insertion order. Pure.
    #[must_use]
    pub fn children_of(&self, id: &str) -> Vec<&WorkItem> {
        self.order
            .iter()
            .filter_map(|item_id| self.items.get(item_id))
            .filter(|item| item.parent_id.as_deref() == Some(id))
            .collect()
    }

    /// All items with no parent (by construction, epics), in insertion
    /// order. Pure.
    #[must_use]
    pub fn roots(&self) -> Vec<&WorkItem> {
        self.order
            .iter()
            .filter_map(|item_id| self.items.get(item_id))
            .filter(|item| item.parent_id.is_none())
            .collect()
    }

    /// Looks up one item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WorkItem> {
        self.items.get(id)
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<&WorkItem> {
        self.order.iter().filter_map(|item_id| self.items.get(item_id)).collect()
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_linkage(&self, kind: ItemKind, parent_id: Option<&str>) -> Result<(), LinkageError> {
        match (kind.parent(), parent_id) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(LinkageError::UnexpectedParent),
            (Some(expected), None) => Err(LinkageError::MissingParent { kind, expected }),
            (Some(expected), Some(pid)) => {
                let parent = self
                    .items
                    .get(pid)
                    .ok_or_else(|| LinkageError::ParentNotFound { parent_id: pid.to_string() })?;
                if parent.kind == expected {
                    Ok(())
                } else {
                    Err(LinkageError::WrongParentKind { kind, expected, found: parent.kind })
                }
            }
        }
    }
}
