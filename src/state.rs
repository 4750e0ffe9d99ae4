//! Core request state for refetch

use serde::Serialize;

/// Observable state of one request lifecycle
///
/// Owned by a [`Fetcher`](crate::Fetcher) instance and mutated only by its
/// own execution routine. Snapshots handed out by
/// [`Fetcher::state`](crate::Fetcher::state) are clones; consumers read the
/// three fields and branch on them.
///
/// At most one of `data`/`error` is fresh after a completed attempt: a new
/// attempt clears `error` before starting, success overwrites `data`, and
/// failure sets `error` while leaving any previously fetched `data` in place.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestState<T> {
    /// Parsed response payload from the most recent successful attempt
    pub data: Option<T>,
    /// Failure message from the most recent failed attempt
    pub error: Option<String>,
    /// True while a request is in flight
    pub loading: bool,
}

// Hand-written so the payload type is not required to be Default itself.
impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> RequestState<T> {
    /// True while a request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True if the most recent attempt failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Borrow the payload, if any attempt has succeeded
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Borrow the failure message, if the most recent attempt failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
