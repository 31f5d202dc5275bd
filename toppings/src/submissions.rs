use std::sync::{Mutex, MutexGuard};

use crate::model::Submission;

/// Append-only log of raw submissions, oldest first.
///
/// Duplicates are stored verbatim. `all` returns an owned snapshot taken
/// under the same lock `append` writes under, so a snapshot never observes a
/// partially applied append.
#[derive(Default)]
pub struct SubmissionLog {
    entries: Mutex<Vec<Submission>>,
}

impl SubmissionLog {
    pub fn append<I>(&self, submissions: I)
    where
        I: IntoIterator<Item = Submission>,
    {
        self.lock().extend(submissions);
    }

    pub fn all(&self) -> Vec<Submission> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Submission>> {
        self.entries.lock().expect("submission log lock poisoned")
    }
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

    #[test]
    fn append_preserves_order() {
        let log = SubmissionLog::default();

        log.append([submission("1", &["pepperoni"])]);
        log.append([submission("2", &["mushrooms"]), submission("3", &["ham"])]);

        let all = log.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].user, "1");
        assert_eq!(all[1].user, "2");
        assert_eq!(all[2].user, "3");
    }

    #[test]
    fn duplicates_stored_verbatim() {
        let log = SubmissionLog::default();
        let repeated = submission("1", &["pepperoni", "pepperoni"]);

        log.append([repeated.clone(), repeated.clone()]);

        assert_eq!(log.len(), 2);
        assert_eq!(log.all(), vec![repeated.clone(), repeated]);
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let log = SubmissionLog::default();
        log.append([submission("1", &["onions"])]);

        let snapshot = log.all();
        log.append([submission("2", &["sausage"])]);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
    }
}
