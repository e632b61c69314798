use thiserror::Error;

/// Errors reported by the fallible constructors and insertions.
///
/// Allocation exhaustion is the only failure a queue can observe. Whenever
/// one of these is returned, the queue involved is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The allocator returned null for a list node (or a ghost node).
    #[error("failed to allocate {size} bytes for a list node")]
    NodeAlloc { size: usize },
    /// Owned storage for a copied value could not be reserved.
    #[error("failed to reserve {len} bytes for a queue value")]
    ValueAlloc { len: usize },
}
