//! Service context bundling all port trait objects.

use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. The store reads
/// the clock and ID generator; the command layer also uses the filesystem
/// for its ledger.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for ledger I/O.
    pub fs: Box<dyn FileSystem>,
    /// ID generator for unique identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for clock, filesystem, and IDs.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator};

        Self {
            clock: Box::new(LiveClock),
            fs: Box::new(LiveFileSystem),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Creates a context from explicit port implementations.
    ///
    /// Tests substitute deterministic clocks and ID sequences here;
    /// embedders can plug in their own adapters the same way.
    #[must_use]
    pub fn with_ports(
        clock: Box<dyn Clock>,
        fs: Box<dyn FileSystem>,
        id_gen: Box<dyn IdGenerator>,
    ) -> Self {
        Self { clock, fs, id_gen }
    }
}
