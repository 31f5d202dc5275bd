//! # Topping Metrics Core
//!
//! In-memory aggregation engine for per-user topping selections.
//!
//! ## Overall Data Structures
//!
//! - Submission log (list of **Submission**): append-only history of raw
//!   (user, toppings) records as they were posted. Never mutated, never
//!   deleted. The refresh cycle reads the full history each pass.
//!
//! - Total count per topping (topping **string** to **int**): one increment
//!   per topping occurrence across all merged batches. Only grows.
//!
//! - Unique users per topping (topping **string** to user **set**): which
//!   users picked a topping at least once. Only grows, and the exposed
//!   metric is the set size, never the members.
//!
//! - Combo counts (topping pair to **int**): co-occurrence counts for every
//!   pair of positions within one submission. Swapped out wholesale each
//!   refresh because combos are recomputed from the full history, not
//!   accumulated.
//!
//! ## Notes
//!
//! - Everything lives behind one lock per store. Reads hand back owned
//!   copies, so callers can never watch a half-merged update.
//!
//! - Topping names are case-sensitive and stored exactly as submitted.

pub mod aggregate;
pub mod model;
pub mod store;
pub mod submissions;

pub use aggregate::{aggregate_counts, compute_combos};
pub use model::{Combo, Submission};
pub use store::MetricsStore;
pub use submissions::SubmissionLog;
