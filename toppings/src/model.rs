use serde::{Deserialize, Serialize};

/// One user's topping picks at one point in time.
///
/// Duplicate toppings within a single submission are allowed and meaningful:
/// each occurrence counts toward the topping's total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub user: String,
    pub toppings: Vec<String>,
}

/// A pair of toppings that co-occurred in one submission.
///
/// The two names keep the order they first appeared in within the originating
/// submission, so `Combo("onions", "ham")` and `Combo("ham", "onions")` are
/// distinct keys. Serializes as a two-element array.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Combo(pub String, pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_wire_shape() {
        let submission: Submission =
            serde_json::from_str(r#"{"user": "1", "toppings": ["pepperoni", "mushrooms"]}"#)
                .unwrap();

        assert_eq!(submission.user, "1");
        assert_eq!(submission.toppings, vec!["pepperoni", "mushrooms"]);
    }

    #[test]
    fn combo_serializes_as_pair() {
        let combo = Combo("pepperoni".to_string(), "onions".to_string());

        assert_eq!(
            serde_json::to_string(&combo).unwrap(),
            r#"["pepperoni","onions"]"#
        );
    }
}
