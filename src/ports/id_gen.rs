//! ID generator port for producing unique identifiers.

/// Generates unique identifiers for work items and comments.
///
/// Abstracting ID generation lets tests substitute a predictable
/// sequence where production uses random UUIDs.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
