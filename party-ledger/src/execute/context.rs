//! Execution context for call processing.

/// Execution context carrying call-level metadata.
///
/// The contract rules themselves are time-free; the context records
/// when and in what order a call was applied so an embedding
/// environment can correlate ledger activity with its own history.
#[derive(Clone, Debug)]
pub struct ExecutionContext {
    /// Wall-clock timestamp of the call (unix seconds).
    pub timestamp: u64,

    /// Position of the call in the embedding environment's sequence.
    pub sequence: u64,
}

impl ExecutionContext {
    /// Create a context with a timestamp and sequence zero.
    pub fn new(timestamp: u64) -> Self {
        Self {
            timestamp,
            sequence: 0,
        }
    }

    /// Create a context with an explicit sequence position.
    pub fn at(timestamp: u64, sequence: u64) -> Self {
        Self { timestamp, sequence }
    }

    /// Create an execution context for testing.
    #[cfg(test)]
    pub fn test_context() -> Self {
        Self {
            timestamp: 1700000000,
            sequence: 0,
        }
    }
}
