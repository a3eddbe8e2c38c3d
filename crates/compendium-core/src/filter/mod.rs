//! Cancellable asynchronous name filtering.
//!
//! A filter run resolves to the ordered subsequence of dataset items whose
//! case-folded name contains the case-folded query, or to "no result" when
//! its [`CancellationToken`] fires first.
//!
//! # Resolution
//!
//! [`filter_items`] races the work (optional latency, then the scan) against
//! `token.cancelled()` and takes whichever finishes first. Losing work is
//! dropped, which releases its timer; a scan already running on the blocking
//! pool notices the token every [`CANCELLATION_CHECK_INTERVAL`] items and
//! stops. A token that is already cancelled at call time resolves
//! immediately without scheduling anything.
//!
//! Only one run is authoritative at a time: [`FilterSupervisor::begin`]
//! cancels the previous run's token before handing out a new one.
//!
//! ```ignore
//! let mut supervisor = FilterSupervisor::new();
//! let ticket = supervisor.begin();
//! match run_filter(dataset, "but", ticket.token(), latency).await? {
//!     Some(outcome) if ticket.is_current() => state.apply_filter(outcome),
//!     _ => {} // superseded
//! }
//! ```

mod supervisor;

pub use supervisor::{FilterSupervisor, FilterTicket};

use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{select, Either};
use instant::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::aggregation::{count_set, CategoryCounts};
use crate::catalog::{Dataset, ItemSet};
use crate::config::CANCELLATION_CHECK_INTERVAL;
use crate::error::FilterError;
use crate::metrics::global_filter_metrics;
use crate::platform::{run_blocking, sleep};

/// A completed, not cancelled, filter run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// The query exactly as the user typed it
    pub query: String,
    /// Matching items in dataset order
    pub items: ItemSet,
    /// Category counts over `items`
    pub counts: CategoryCounts,
}

/// Whether an already case-folded name matches an already case-folded query.
///
/// An empty query matches everything.
pub fn matches_folded(folded_name: &str, folded_query: &str) -> bool {
    folded_query.is_empty() || folded_name.contains(folded_query)
}

/// Synchronous scan of `dataset` for `query`.
///
/// Returns `None` if `token` is cancelled part-way through.
pub fn match_items(dataset: &Dataset, query: &str, token: &CancellationToken) -> Option<ItemSet> {
    scan_items(dataset, query, || token.is_cancelled())
}

/// Scan loop behind [`match_items`]; `is_cancelled` is polled once every
/// [`CANCELLATION_CHECK_INTERVAL`] items, starting with the first.
fn scan_items(
    dataset: &Dataset,
    query: &str,
    mut is_cancelled: impl FnMut() -> bool,
) -> Option<ItemSet> {
    let folded_query = query.to_lowercase();
    if folded_query.is_empty() {
        return Some(ItemSet::all(dataset));
    }

    let mut matched = Vec::new();
    for (scanned, id) in dataset.ids().enumerate() {
        if scanned % CANCELLATION_CHECK_INTERVAL == 0 && is_cancelled() {
            return None;
        }
        let is_match = dataset
            .folded_name(id)
            .is_some_and(|name| matches_folded(name, &folded_query));
        if is_match {
            matched.push(id);
        }
    }
    Some(ItemSet::new(matched))
}

/// Filters `dataset` by `query`, racing the work against `token`.
///
/// - `Ok(Some(items))`: the run completed
/// - `Ok(None)`: the run was cancelled; callers must ignore it
/// - `Err(_)`: the scan could not be executed
pub async fn filter_items(
    dataset: Arc<Dataset>,
    query: &str,
    token: &CancellationToken,
    latency: Duration,
) -> Result<Option<ItemSet>, FilterError> {
    if token.is_cancelled() {
        debug!("Filter for '{}' cancelled before start", query);
        return Ok(None);
    }

    let work = {
        let scan_token = token.clone();
        let query = query.to_string();
        async move {
            if !latency.is_zero() {
                sleep(latency).await;
            }
            debug!("Filtering {} items with query '{}'", dataset.len(), query);
            run_blocking(move || Ok::<_, FilterError>(match_items(&dataset, &query, &scan_token)))
                .await
        }
    };

    let work = pin!(work);
    let cancelled = pin!(token.cancelled());

    match select(work, cancelled).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            debug!("Aborted filter for '{}'", query);
            Ok(None)
        }
    }
}

/// Runs [`filter_items`], aggregates the matches and records metrics.
///
/// A run cancelled while aggregating is also reported as `Ok(None)`.
pub async fn run_filter(
    dataset: Arc<Dataset>,
    query: &str,
    token: &CancellationToken,
    latency: Duration,
) -> Result<Option<FilterOutcome>, FilterError> {
    let metrics = global_filter_metrics();
    let started = Instant::now();

    let items = match filter_items(Arc::clone(&dataset), query, token, latency).await {
        Ok(Some(items)) => items,
        Ok(None) => {
            metrics.record_cancelled();
            return Ok(None);
        }
        Err(e) => {
            metrics.record_failed();
            return Err(e);
        }
    };

    let Some(outcome) = aggregate(&dataset, query, items, token) else {
        metrics.record_cancelled();
        return Ok(None);
    };

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    metrics.record_completed(elapsed_ms);
    debug!(
        "Filter '{}' matched {} items in {:.1}ms",
        query,
        outcome.items.len(),
        elapsed_ms
    );

    Ok(Some(outcome))
}

/// Counts categories over `items`; `None` if `token` fired meanwhile.
fn aggregate(
    dataset: &Dataset,
    query: &str,
    items: ItemSet,
    token: &CancellationToken,
) -> Option<FilterOutcome> {
    let counts = count_set(dataset, &items);
    if token.is_cancelled() {
        debug!("Filter for '{}' cancelled while aggregating", query);
        return None;
    }
    Some(FilterOutcome {
        query: query.to_string(),
        items,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample, DatasetBuilder, Item};

    fn dataset() -> Arc<Dataset> {
        Arc::new(
            DatasetBuilder::new()
                .category("Controls")
                .category("Inputs")
                .item(Item::new("Button", ["Controls"]))
                .item(Item::new("Input Field", ["Controls", "Inputs"]))
                .item(Item::new("Radio BUTTON", ["Controls", "Inputs"]))
                .build()
                .unwrap(),
        )
    }

    fn names(dataset: &Dataset, set: &ItemSet) -> Vec<String> {
        set.iter()
            .map(|id| dataset.get(id).unwrap().name.clone())
            .collect()
    }

    #[test]
    fn test_matches_folded() {
        assert!(matches_folded("radio button", "butt"));
        assert!(matches_folded("radio button", ""));
        assert!(!matches_folded("checkbox", "butt"));
    }

    #[test]
    fn test_match_items_case_insensitive() {
        let dataset = dataset();
        let token = CancellationToken::new();
        let set = match_items(&dataset, "bUt", &token).unwrap();
        assert_eq!(names(&dataset, &set), ["Button", "Radio BUTTON"]);
    }

    #[test]
    fn test_match_items_empty_query_keeps_order() {
        let dataset = dataset();
        let set = match_items(&dataset, "", &CancellationToken::new()).unwrap();
        assert_eq!(names(&dataset, &set), ["Button", "Input Field", "Radio BUTTON"]);
    }

    #[test]
    fn test_match_items_stops_when_cancelled() {
        let dataset = dataset();
        let token = CancellationToken::new();
        token.cancel();
        assert!(match_items(&dataset, "button", &token).is_none());
    }

    #[tokio::test]
    async fn test_filter_items_completes() {
        let dataset = dataset();
        let token = CancellationToken::new();
        let set = filter_items(Arc::clone(&dataset), "field", &token, Duration::ZERO)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(names(&dataset, &set), ["Input Field"]);
    }

    #[tokio::test]
    async fn test_filter_items_pre_cancelled_resolves_none() {
        let token = CancellationToken::new();
        token.cancel();
        let result = filter_items(dataset(), "button", &token, Duration::from_secs(60)).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_filter_items_cancelled_while_waiting() {
        let token = CancellationToken::new();
        let canceller = token.clone();

        let (result, ()) = futures::join!(
            filter_items(dataset(), "button", &token, Duration::from_secs(60)),
            async move { canceller.cancel() },
        );

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_scan_stops_at_later_check() {
        let dataset = sample::generated_dataset(3, 3 * CANCELLATION_CHECK_INTERVAL).unwrap();
        let mut checks = 0;
        let result = scan_items(&dataset, "comp", || {
            checks += 1;
            checks == 2
        });
        assert!(result.is_none());
        assert_eq!(checks, 2);
    }

    #[test]
    fn test_scan_polls_once_per_interval() {
        let dataset = sample::generated_dataset(3, 2 * CANCELLATION_CHECK_INTERVAL).unwrap();
        let mut checks = 0;
        let set = scan_items(&dataset, "comp", || {
            checks += 1;
            false
        })
        .unwrap();
        assert_eq!(set.len(), 2 * CANCELLATION_CHECK_INTERVAL);
        // The bundled library items shift the scan by a partial interval
        assert_eq!(checks, dataset.len().div_ceil(CANCELLATION_CHECK_INTERVAL));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_filter_items_cancelled_mid_scan() {
        let dataset = Arc::new(sample::generated_dataset(30, 1_000_000).unwrap());
        let token = CancellationToken::new();
        let canceller = token.clone();

        let (result, ()) = futures::join!(
            filter_items(dataset, "comp", &token, Duration::ZERO),
            async move {
                crate::platform::sleep(Duration::from_millis(2)).await;
                canceller.cancel();
            },
        );

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_aggregate_discards_cancelled_run() {
        let dataset = dataset();
        let token = CancellationToken::new();
        let items = match_items(&dataset, "button", &token).unwrap();
        token.cancel();
        assert!(aggregate(&dataset, "button", items, &token).is_none());
    }

    #[tokio::test]
    async fn test_superseded_run_counts_as_cancelled() {
        let before = global_filter_metrics().snapshot().cancelled;
        let token = CancellationToken::new();
        token.cancel();
        let result = run_filter(dataset(), "button", &token, Duration::ZERO).await;
        assert_eq!(result, Ok(None));
        // Other tests record concurrently, so only growth is checked
        assert!(global_filter_metrics().snapshot().cancelled > before);
    }

    #[tokio::test]
    async fn test_run_filter_aggregates_matches() {
        let token = CancellationToken::new();
        let outcome = run_filter(dataset(), "button", &token, Duration::ZERO)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome.query, "button");
        assert_eq!(outcome.items.len(), 2);
        assert_eq!(outcome.counts.get("Controls"), 2);
        assert_eq!(outcome.counts.get("Inputs"), 1);
    }
}
