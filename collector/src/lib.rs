//! # Metrics Collection
//!
//! Periodic refresh of the topping metrics.
//!
//! ## Refresh Cycle
//!
//! 1. Pull the full submission history from the configured source.
//!
//! 2. Derive per-topping totals and unique-user sets from the pulled batch.
//!
//! 3. Recompute combo counts over the same batch.
//!
//! 4. Merge the counts into the store, then swap in the combo table, in that
//!    order.
//!
//! ## Notes
//!
//! - A failed pull aborts the tick before any store mutation, so one bad
//!   tick leaves the previous metrics fully intact and the next tick starts
//!   clean.
//!
//! - Combos are recomputed from the whole history every tick. Fine at this
//!   scale; an incremental scheme would be the first change if submission
//!   volume grows.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::interval;
use tracing::{debug, warn};

use toppings::{MetricsStore, aggregate_counts, compute_combos};

pub mod source;

pub use source::{HttpSource, SubmissionSource};

/// Runs `refresh` forever on a fixed interval. Failed ticks are logged and
/// skipped; the loop never stops on its own.
pub async fn run<S: SubmissionSource>(source: S, store: Arc<MetricsStore>, every: Duration) {
    let mut ticker = interval(every);

    loop {
        ticker.tick().await;

        if let Err(e) = refresh(&source, &store).await {
            warn!("Refresh failed, keeping previous metrics: {e:#}");
        }
    }
}

/// One pull-aggregate-merge pass.
pub async fn refresh<S: SubmissionSource>(source: &S, store: &MetricsStore) -> Result<()> {
    let submissions = source.fetch().await?;

    let (totals, users) = aggregate_counts(&submissions);
    let combos = compute_combos(&submissions);

    store.merge_counts(totals, users);
    store.replace_combos(combos);

    debug!("Merged metrics from {} submissions", submissions.len());
    Ok(())
}
