// src/domain/fetched.rs
use crate::domain::DomainError;
use tracing::warn;

/// Outcome of a best-effort fetch (notes, transcripts).
///
/// Keeps "the service has nothing" apart from "we could not ask the service",
/// so callers and tests can tell them apart before the result is flattened
/// into an `Option` for display.
#[derive(Debug)]
pub enum Fetched<T> {
    Found(T),
    Absent,
    Failed(DomainError),
}

impl<T> Fetched<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Fetched::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Fetched::Absent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }

    /// Collapse to an optional value, logging failures instead of surfacing them.
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Found(value) => Some(value),
            Fetched::Absent => None,
            Fetched::Failed(e) => {
                warn!(error = %e, "Best-effort fetch failed, treating as unavailable");
                None
            }
        }
    }
}
