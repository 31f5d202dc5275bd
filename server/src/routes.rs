use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use toppings::{Submission, aggregate_counts};

use crate::{error::AppError, state};

#[derive(Deserialize)]
pub struct CountParams {
    #[serde(default = "default_count")]
    count: i64,
}

fn default_count() -> i64 {
    1
}

// Negative counts mean "nothing", not an error.
fn clamp(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

fn decode_submissions(body: &Bytes) -> Result<Vec<Submission>, AppError> {
    serde_json::from_slice(body).map_err(|_| AppError::MalformedPayload)
}

pub async fn submit_handler(
    State(app): State<Arc<state::State>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let submissions = decode_submissions(&body)?;
    app.metrics.record_submissions(submissions);

    Ok(StatusCode::OK)
}

pub async fn update_metrics_handler(
    State(app): State<Arc<state::State>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let submissions = decode_submissions(&body)?;

    let (totals, users) = aggregate_counts(&submissions);
    app.metrics.merge_counts(totals, users);

    Ok(StatusCode::OK)
}

pub async fn toppings_handler(State(app): State<Arc<state::State>>) -> impl IntoResponse {
    Json(app.metrics.submissions())
}

pub async fn total_count_handler(State(app): State<Arc<state::State>>) -> impl IntoResponse {
    Json(app.metrics.total_counts())
}

pub async fn unique_user_count_handler(State(app): State<Arc<state::State>>) -> impl IntoResponse {
    Json(app.metrics.unique_user_counts())
}

pub async fn most_popular_handler(
    State(app): State<Arc<state::State>>,
    Query(params): Query<CountParams>,
) -> impl IntoResponse {
    Json(app.metrics.most_popular(clamp(params.count)))
}

pub async fn least_popular_handler(
    State(app): State<Arc<state::State>>,
    Query(params): Query<CountParams>,
) -> impl IntoResponse {
    Json(app.metrics.least_popular(clamp(params.count)))
}

pub async fn most_popular_combo_handler(
    State(app): State<Arc<state::State>>,
    Query(params): Query<CountParams>,
) -> impl IntoResponse {
    Json(app.metrics.most_popular_combos(clamp(params.count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_floors_negative_counts() {
        assert_eq!(clamp(-3), 0);
        assert_eq!(clamp(0), 0);
        assert_eq!(clamp(5), 5);
    }

    #[test]
    fn count_defaults_to_one() {
        assert_eq!(default_count(), 1);
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        let body = Bytes::from_static(b"{not json");
        assert!(matches!(
            decode_submissions(&body),
            Err(AppError::MalformedPayload)
        ));

        let body = Bytes::from_static(br#"[{"user": "1", "toppings": ["ham"]}]"#);
        let submissions = decode_submissions(&body).unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].toppings, vec!["ham"]);
    }
}
