use thiserror::Error;

/// Errors surfaced by the alignment API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// A penalty parameter was zero. The recurrence minimizes cost, so every
    /// penalty must be strictly positive; this is rejected at construction,
    /// never mid-fill.
    #[error("{0} penalty must be greater than zero")]
    InvalidPenalty(&'static str),
    /// A score or alignment was requested before the corresponding phase
    /// (fill or traceback) has run.
    #[error("matrices have not been solved yet")]
    NotSolved,
}
