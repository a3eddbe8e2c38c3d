//! Platform-specific execution utilities.
//!
//! - **Desktop**: timers come from tokio, blocking work goes to tokio's
//!   blocking pool so the UI thread keeps handling input
//! - **Web**: timers come from `gloo-timers`, blocking work runs inline
//!   (WASM is single-threaded)

use std::time::Duration;

/// Suspend the current task for `duration`.
///
/// Dropping the returned future before it fires releases the timer.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Suspend the current task for `duration`.
///
/// Web version: backed by `setTimeout`; dropping the future clears it.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Execute a CPU-intensive operation on the appropriate thread pool.
///
/// # Platform Behavior
///
/// - **Desktop**: Runs `f` on tokio's blocking thread pool
/// - **Web**: Runs `f` directly
///
/// Join errors (a panicking closure, a runtime shutting down) are converted
/// with `E::from(String)`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn run_blocking<F, T, E>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<String> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| E::from(format!("Task join failed: {}", e)))?
}

/// Execute a CPU-intensive operation on the appropriate thread pool.
///
/// Web version: Executes directly.
#[cfg(target_arch = "wasm32")]
pub async fn run_blocking<F, T, E>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    f()
}
