//! # refetch
//!
//! State-carrying wrapper around HTTP requests for async Rust applications.
//!
//! ## Design Philosophy
//!
//! refetch is designed to be:
//! - **Minimal** - One utility with one job: own a request lifecycle
//! - **Non-blocking** - Triggering a request returns immediately; the
//!   observable state updates as the attempt progresses
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Predictable** - No retries, no caching, no deduplication; every
//!   trigger is one full execution
//!
//! A [`Fetcher`] is bound to an endpoint URL and a [`RequestConfig`]. It
//! fetches once at construction, re-fetches when the watched pair changes
//! through [`Fetcher::update`], and re-fetches on demand through
//! [`Fetcher::run`]. Consumers read the latest [`RequestState`] snapshot and
//! branch on its `loading`, `error`, and `data` fields.
//!
//! ## Quick Start
//!
//! ```no_run
//! use refetch::{Fetcher, RequestConfig};
//! use serde::Deserialize;
//!
//! #[derive(Clone, Debug, Deserialize)]
//! struct Post {
//!     id: u64,
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // Construction triggers the first request automatically.
//!     let fetcher: Fetcher<Vec<Post>> = Fetcher::new(
//!         "https://jsonplaceholder.typicode.com/posts",
//!         RequestConfig::default(),
//!     );
//!
//!     // Trigger a fresh attempt and wait for it to complete.
//!     fetcher.run().await.ok();
//!
//!     let state = fetcher.state();
//!     if let Some(posts) = state.data() {
//!         for post in posts {
//!             println!("#{} {}", post.id, post.title);
//!         }
//!     }
//! }
//! ```
//!
//! ## Known Limitation
//!
//! Overlapping attempts are not guarded: if a request is triggered while a
//! prior one is still in flight, both run to completion and whichever
//! resolves last writes the state fields last. There is no cancellation and
//! no generation tagging.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Request configuration types
pub mod config;
/// Error types
pub mod error;
/// Core fetch-state utility
pub mod fetcher;
/// Observable request state
pub mod state;

// Re-export commonly used types
pub use config::RequestConfig;
pub use error::{FetchError, Result};
pub use fetcher::Fetcher;
pub use state::RequestState;
