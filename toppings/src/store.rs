//! # Metrics Store
//!
//! Shared accumulator for the derived topping metrics, plus the raw
//! submission log it answers debug queries from.
//!
//! ## Locking
//!
//! - One mutex guards all three derived maps. Each operation holds it for
//!   its full duration, so a merge is observed either not at all or in full.
//! - No I/O happens under the lock; hold time is bounded by the size of the
//!   input or output.
//! - Reads return owned copies, never references into the guarded state.
//!
//! ## Ranking
//!
//! Equal counts order by ascending name (for combos, ascending pair), so
//! rankings are deterministic regardless of map iteration order.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use crate::model::{Combo, Submission};
use crate::submissions::SubmissionLog;

#[derive(Default)]
struct Inner {
    totals: HashMap<String, u64>,
    users: HashMap<String, HashSet<String>>,
    combos: HashMap<Combo, u64>,
}

#[derive(Default)]
pub struct MetricsStore {
    inner: Mutex<Inner>,
    log: SubmissionLog,
}

impl MetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums batch totals onto the stored totals and unions batch user sets
    /// into the stored sets. Toppings absent from the batch are untouched.
    pub fn merge_counts(
        &self,
        totals: HashMap<String, u64>,
        users: HashMap<String, HashSet<String>>,
    ) {
        let mut inner = self.lock();

        for (topping, count) in totals {
            *inner.totals.entry(topping).or_default() += count;
        }

        for (topping, set) in users {
            inner.users.entry(topping).or_default().extend(set);
        }
    }

    /// Swaps in a freshly recomputed combo table, dropping the old one.
    pub fn replace_combos(&self, combos: HashMap<Combo, u64>) {
        self.lock().combos = combos;
    }

    pub fn total_counts(&self) -> HashMap<String, u64> {
        self.lock().totals.clone()
    }

    /// Per-topping unique-user counts. Only the sizes leave the store.
    pub fn unique_user_counts(&self) -> HashMap<String, usize> {
        self.lock()
            .users
            .iter()
            .map(|(topping, users)| (topping.clone(), users.len()))
            .collect()
    }

    pub fn most_popular(&self, count: usize) -> Vec<String> {
        ranked(&self.lock().totals, count, true)
    }

    pub fn least_popular(&self, count: usize) -> Vec<String> {
        ranked(&self.lock().totals, count, false)
    }

    pub fn most_popular_combos(&self, count: usize) -> Vec<Combo> {
        ranked(&self.lock().combos, count, true)
    }

    pub fn record_submissions(&self, submissions: Vec<Submission>) {
        self.log.append(submissions);
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.log.all()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("metrics store lock poisoned")
    }
}

/// Keys ordered by count, ties broken by ascending key, truncated to `count`.
fn ranked<K: Clone + Ord>(counts: &HashMap<K, u64>, count: usize, descending: bool) -> Vec<K> {
    let mut entries: Vec<(&K, u64)> = counts.iter().map(|(key, n)| (key, *n)).collect();

    entries.sort_by(|a, b| {
        let by_count = if descending {
            b.1.cmp(&a.1)
        } else {
            a.1.cmp(&b.1)
        };
        by_count.then_with(|| a.0.cmp(b.0))
    });

    entries.into_iter().take(count).map(|(key, _)| key.clone()).collect()
}
