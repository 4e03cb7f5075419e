//! Tokio Runtime Bridge
//!
//! The host UI event loop is not a tokio runtime, but the HTTP data source
//! needs one. This module lazily provides a shared runtime the fetch tasks
//! run on, so hosts without their own runtime can still fetch pages.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task on the shared runtime.
///
/// Used for fire-and-forget page fetches: the task delivers its outcome
/// over a channel, never through the returned handle.
pub fn spawn_in_tokio<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    get_runtime().spawn(future)
}
