//! Pure aggregation over a batch of submissions. No stored state; callers
//! decide how the results are merged into the metrics store.

use std::collections::{HashMap, HashSet};

use crate::model::{Combo, Submission};

/// Derives per-topping totals and unique-user sets from a batch.
///
/// Every topping occurrence adds one to that topping's total. A user counts
/// toward a topping's unique-user set once no matter how many times they
/// picked it.
pub fn aggregate_counts(
    submissions: &[Submission],
) -> (HashMap<String, u64>, HashMap<String, HashSet<String>>) {
    let mut totals: HashMap<String, u64> = HashMap::new();
    let mut users: HashMap<String, HashSet<String>> = HashMap::new();

    for submission in submissions {
        for topping in &submission.toppings {
            *totals.entry(topping.clone()).or_default() += 1;
            users
                .entry(topping.clone())
                .or_default()
                .insert(submission.user.clone());
        }
    }

    (totals, users)
}

/// Counts topping pairs within each submission.
///
/// For a topping list `[t0, .., tn-1]` every index pair `i < j` adds one to
/// `Combo(t_i, t_j)`, keyed in appearance order. A k-topping submission
/// contributes `k*(k-1)/2` increments; empty and single-topping submissions
/// contribute none. Always recomputed over the full input, never incremental.
pub fn compute_combos(submissions: &[Submission]) -> HashMap<Combo, u64> {
    let mut combos: HashMap<Combo, u64> = HashMap::new();

    for submission in submissions {
        let toppings = &submission.toppings;

        for i in 0..toppings.len() {
            for j in i + 1..toppings.len() {
                let combo = Combo(toppings[i].clone(), toppings[j].clone());
                *combos.entry(combo).or_default() += 1;
            }
        }
    }

    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(user: &str, toppings: &[&str]) -> Submission {
        Submission {
            user: user.to_string(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn combo(first: &str, second: &str) -> Combo {
        Combo(first.to_string(), second.to_string())
    }

    #[test]
    fn totals_count_every_occurrence() {
        let submissions = vec![
            submission("1", &["pepperoni", "pepperoni"]),
            submission("2", &["pepperoni"]),
            submission("1", &["mushrooms"]),
        ];

        let (totals, users) = aggregate_counts(&submissions);

        assert_eq!(totals["pepperoni"], 3);
        assert_eq!(totals["mushrooms"], 1);
        assert_eq!(users["pepperoni"].len(), 2);
        assert_eq!(users["mushrooms"].len(), 1);
    }

    #[test]
    fn repeat_user_counts_once_per_topping() {
        let submissions = vec![
            submission("1", &["onions"]),
            submission("1", &["onions"]),
            submission("1", &["onions", "ham"]),
        ];

        let (totals, users) = aggregate_counts(&submissions);

        assert_eq!(totals["onions"], 3);
        assert_eq!(users["onions"].len(), 1);
        assert_eq!(users["ham"].len(), 1);
    }

    #[test]
    fn empty_submission_contributes_nothing() {
        let submissions = vec![submission("1", &[])];

        let (totals, users) = aggregate_counts(&submissions);

        assert!(totals.is_empty());
        assert!(users.is_empty());
        assert!(compute_combos(&submissions).is_empty());
    }

    #[test]
    fn combos_of_empty_batch() {
        assert!(compute_combos(&[]).is_empty());
    }

    #[test]
    fn combos_of_single_submission() {
        let submissions = vec![submission("", &["pepperoni", "mushrooms", "onions"])];

        let combos = compute_combos(&submissions);

        assert_eq!(combos.len(), 3);
        assert_eq!(combos[&combo("pepperoni", "mushrooms")], 1);
        assert_eq!(combos[&combo("pepperoni", "onions")], 1);
        assert_eq!(combos[&combo("mushrooms", "onions")], 1);
    }

    #[test]
    fn combos_keep_appearance_order() {
        let submissions = vec![
            submission("1", &["bacon", "olives"]),
            submission("2", &["olives", "bacon"]),
        ];

        let combos = compute_combos(&submissions);

        assert_eq!(combos[&combo("bacon", "olives")], 1);
        assert_eq!(combos[&combo("olives", "bacon")], 1);
    }

    #[test]
    fn combos_of_full_history() {
        let submissions = vec![
            submission("1", &["pepperoni", "mushrooms", "onions"]),
            submission("2", &["sausage", "mushrooms"]),
            submission("1", &["pepperoni", "green peppers"]),
            submission("3", &["sausage", "onions"]),
            submission("3", &["ham", "pineapple"]),
            submission("4", &["sausage", "green peppers"]),
            submission("1", &["mushrooms"]),
            submission("5", &["sausage", "pepperoni", "onions"]),
            submission("2", &["pepperoni", "green peppers", "onions"]),
            submission("5", &["sausage", "pepperoni", "mushrooms"]),
        ];

        let combos = compute_combos(&submissions);

        assert_eq!(combos[&combo("pepperoni", "mushrooms")], 2);
        assert_eq!(combos[&combo("sausage", "mushrooms")], 2);
        assert_eq!(combos[&combo("pepperoni", "green peppers")], 2);
        assert_eq!(combos[&combo("sausage", "onions")], 2);
        assert_eq!(combos[&combo("ham", "pineapple")], 1);
        assert_eq!(combos[&combo("sausage", "green peppers")], 1);
        assert_eq!(combos[&combo("pepperoni", "onions")], 3);
    }
}
