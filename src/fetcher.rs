//! Core fetch-state utility implementation
//!
//! [`Fetcher`] owns one request lifecycle (idle → loading → success/error)
//! for one (URL, configuration) pair. Executions are spawned onto the tokio
//! runtime: triggering a request never blocks the caller, and the observable
//! [`RequestState`] is updated by the execution itself as it progresses.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::config::RequestConfig;
use crate::error::{FetchError, Result};
use crate::state::RequestState;

/// State-carrying wrapper around an HTTP request
///
/// A `Fetcher` is bound to one endpoint URL and one [`RequestConfig`]. It
/// executes the request once at construction, re-executes when the watched
/// pair changes via [`update`](Self::update), and re-executes on demand via
/// [`run`](Self::run). The latest outcome is readable at any time through
/// [`state`](Self::state).
///
/// `T` is the payload type the response body is JSON-decoded into; use
/// [`serde_json::Value`] for schemaless payloads.
pub struct Fetcher<T> {
    /// Endpoint URL (not validated; non-empty expected)
    url: String,
    /// Request configuration; value equality is the re-trigger identity
    config: RequestConfig,
    /// HTTP client shared by all executions of this instance
    client: Client,
    /// Observable request state, shared with in-flight executions
    state: Arc<Mutex<RequestState<T>>>,
}

impl<T> Fetcher<T>
where
    T: DeserializeOwned + Clone + Send + 'static,
{
    /// Create a fetcher and trigger its first execution
    ///
    /// The initial request is spawned immediately and runs in the background;
    /// the constructor returns without waiting for it. Poll
    /// [`state`](Self::state) or trigger further runs to observe outcomes.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, since the initial execution
    /// is spawned onto it.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use refetch::{Fetcher, RequestConfig};
    /// use serde_json::Value;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let fetcher: Fetcher<Value> = Fetcher::new(
    ///     "https://jsonplaceholder.typicode.com/posts",
    ///     RequestConfig::default(),
    /// );
    /// # }
    /// ```
    pub fn new(url: impl Into<String>, config: RequestConfig) -> Self {
        let fetcher = Self {
            url: url.into(),
            config,
            client: Client::new(),
            state: Arc::new(Mutex::new(RequestState::default())),
        };
        // Initial execution, detached. Matches the automatic run-on-creation
        // contract; the handle is recoverable from explicit run() calls only.
        drop(fetcher.run());
        fetcher
    }

    /// Snapshot of the current `{data, error, loading}` state
    pub fn state(&self) -> RequestState<T> {
        lock_state(&self.state).clone()
    }

    /// The endpoint URL this fetcher is bound to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request configuration this fetcher is bound to
    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Trigger one independent execution of the request
    ///
    /// Returns immediately; the request runs as a spawned task. The returned
    /// handle resolves when the attempt completes and may be dropped to
    /// detach the task.
    ///
    /// Calling `run` again before a prior attempt resolves starts an
    /// additional independent attempt — there is no suppression, queueing,
    /// or cancellation. Overlapping attempts race on the state fields and
    /// whichever resolves last wins the final write. This is a known
    /// limitation: no generation tagging is performed.
    pub fn run(&self) -> JoinHandle<()> {
        let client = self.client.clone();
        let url = self.url.clone();
        let config = self.config.clone();
        let state = Arc::clone(&self.state);
        tokio::spawn(execute(client, url, config, state))
    }

    /// Re-bind the watched (URL, configuration) pair, re-executing on change
    ///
    /// Compares the new pair against the current one by value equality. On a
    /// change the new pair is adopted and exactly one execution is triggered,
    /// returning its handle. An identical pair is a no-op and returns `None`,
    /// so callers may pass a freshly rebuilt configuration on every cycle
    /// without causing spurious requests.
    pub fn update(
        &mut self,
        url: impl Into<String>,
        config: RequestConfig,
    ) -> Option<JoinHandle<()>> {
        let url = url.into();
        if url == self.url && config == self.config {
            return None;
        }
        self.url = url;
        self.config = config;
        Some(self.run())
    }
}

/// Resets `loading` when an execution ends, on every exit path
///
/// Drop-based so the reset also happens if the execution panics mid-flight.
struct LoadingGuard<T>(Arc<Mutex<RequestState<T>>>);

impl<T> Drop for LoadingGuard<T> {
    fn drop(&mut self) {
        lock_state(&self.0).loading = false;
    }
}

// A panicked writer cannot leave the plain field stores half-applied, so a
// poisoned lock is recovered rather than propagated.
fn lock_state<T>(state: &Mutex<RequestState<T>>) -> MutexGuard<'_, RequestState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The request-execution routine
///
/// One invocation per triggered attempt. Marks the state loading and clears
/// any previous error, performs the request, then records the outcome:
/// `data` on success, `error` on failure (leaving `data` untouched).
async fn execute<T>(
    client: Client,
    url: String,
    config: RequestConfig,
    state: Arc<Mutex<RequestState<T>>>,
) where
    T: DeserializeOwned + Send + 'static,
{
    {
        let mut s = lock_state(&state);
        s.loading = true;
        s.error = None;
    }
    let _loading = LoadingGuard(Arc::clone(&state));

    tracing::debug!(url = %url, method = %config.method, "Starting request");

    match send_request(&client, &url, &config).await {
        Ok(data) => {
            tracing::debug!(url = %url, "Request succeeded");
            lock_state(&state).data = Some(data);
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Request failed");
            lock_state(&state).error = Some(e.to_string());
        }
    }
}

/// Perform the request and decode the response body
async fn send_request<T>(client: &Client, url: &str, config: &RequestConfig) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = build_request(client, url, config)?.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    Ok(response.json::<T>().await?)
}

/// Translate a [`RequestConfig`] into a request builder for `url`
fn build_request(client: &Client, url: &str, config: &RequestConfig) -> Result<reqwest::RequestBuilder> {
    let method =
        Method::from_bytes(config.method.as_bytes()).map_err(|_| FetchError::InvalidMethod {
            method: config.method.clone(),
        })?;

    let mut headers = HeaderMap::with_capacity(config.headers.len());
    for (name, value) in &config.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| FetchError::InvalidHeader {
                name: name.clone(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader {
            name: name.clone(),
        })?;
        headers.insert(header_name, header_value);
    }

    let mut request = client.request(method, url).headers(headers);
    if let Some(body) = &config.body {
        request = request.body(body.clone());
    }
    if let Some(timeout) = config.timeout {
        request = request.timeout(timeout);
    }
    Ok(request)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn build_request_rejects_invalid_method_token() {
        let client = Client::new();
        let config = RequestConfig {
            method: "NOT A METHOD".to_string(),
            ..Default::default()
        };

        let result = build_request(&client, "http://localhost/", &config);

        match result {
            Err(FetchError::InvalidMethod { method }) => assert_eq!(method, "NOT A METHOD"),
            other => panic!("expected InvalidMethod error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn build_request_rejects_invalid_header_name() {
        let client = Client::new();
        let config = RequestConfig {
            headers: HashMap::from([("bad header".to_string(), "value".to_string())]),
            ..Default::default()
        };

        let result = build_request(&client, "http://localhost/", &config);

        match result {
            Err(FetchError::InvalidHeader { name }) => assert_eq!(name, "bad header"),
            other => panic!("expected InvalidHeader error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn build_request_accepts_full_configuration() {
        let client = Client::new();
        let config = RequestConfig {
            method: "POST".to_string(),
            headers: HashMap::from([("accept".to_string(), "application/json".to_string())]),
            body: Some(r#"{"title":"a"}"#.to_string()),
            timeout: Some(std::time::Duration::from_secs(5)),
        };

        assert!(build_request(&client, "http://localhost/submit", &config).is_ok());
    }

    #[tokio::test]
    async fn loading_guard_resets_loading_on_drop() {
        let state: Arc<Mutex<RequestState<serde_json::Value>>> =
            Arc::new(Mutex::new(RequestState::default()));
        lock_state(&state).loading = true;

        drop(LoadingGuard(Arc::clone(&state)));

        assert!(!lock_state(&state).loading);
    }
}
