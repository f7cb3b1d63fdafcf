//! Options for the decomposition entry points.
//!
//! This module provides the `DecompOptions` struct, which tunes how
//! `cholesky_with` and `rank_with` behave: an explicit rank tolerance and the
//! policy applied when the backend reports an argument error.

/// What to do when a backend returns a negative (argument error) status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Panic. Every argument is validated locally, so a negative status is a bug.
    #[default]
    Abort,
    /// Return `LinalgError::BackendContract` instead of panicking.
    Surface,
}

/// Decomposition options & parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecompOptions<T> {
    /// Singular value threshold read by `rank_with`; `None` derives it from the spectrum.
    pub rank_tol: Option<T>,

    /// Handling of negative Cholesky backend status
    pub status_policy: StatusPolicy,
}

impl<T> Default for DecompOptions<T> {
    fn default() -> Self {
        Self { rank_tol: None, status_policy: StatusPolicy::Abort }
    }
}

impl<T> DecompOptions<T> {
    /// Fixes the rank threshold instead of deriving it from the spectrum.
    pub fn with_rank_tol(mut self, tol: T) -> Self {
        self.rank_tol = Some(tol);
        self
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }
}
