//! # Topping Metrics Backend
//!
//! Pizza topping submission intake and aggregate statistics.
//!
//! # General Infrastructure
//! - One process: the axum server plus a background collector task
//! - Users post topping selections, which land in an append-only raw log
//! - Every `PIZZA_REFRESH_SECS` seconds the collector pulls the full
//!   submission history from `PIZZA_SOURCE_URL`, re-aggregates, and merges
//!   the result into the in-memory metrics store
//! - By default the source URL points back at this server's own
//!   `/toppings/get-toppings`, so the service feeds itself; point it at any
//!   other provider that returns the same JSON shape
//! - Query endpoints read only derived metrics, never the raw log
//!
//! # Endpoints
//! - `POST /toppings/post`: append raw submissions
//! - `POST /toppings/update-metrics`: aggregate a batch and merge counts
//!   directly, bypassing the collector
//! - `GET /toppings/get-toppings`: full raw submission list
//! - `GET /toppings/total-count`: selection count per topping
//! - `GET /toppings/unique-user-count`: distinct-user count per topping
//! - `GET /toppings/most-popular?count=n`: top toppings, default 1
//! - `GET /toppings/least-popular?count=n`: bottom toppings, default 1
//! - `GET /toppings/most-popular-combo?count=n`: top topping pairs, default 1
//!
//! # Notes
//!
//! ## In-memory store
//! All state lives in the process. A restart starts from zero; at this scale
//! that is acceptable, and anything more would mean a real database behind
//! the store.

use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use collector::HttpSource;
use routes::{
    least_popular_handler, most_popular_combo_handler, most_popular_handler, submit_handler,
    toppings_handler, total_count_handler, unique_user_count_handler, update_metrics_handler,
};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting collector...");
    let source = HttpSource::new(state.config.source_url.clone());
    let every = Duration::from_secs(state.config.refresh_secs.max(1));
    tokio::spawn(collector::run(source, state.metrics.clone(), every));

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/toppings/post", post(submit_handler))
        .route("/toppings/update-metrics", post(update_metrics_handler))
        .route("/toppings/get-toppings", get(toppings_handler))
        .route("/toppings/total-count", get(total_count_handler))
        .route("/toppings/unique-user-count", get(unique_user_count_handler))
        .route("/toppings/most-popular", get(most_popular_handler))
        .route("/toppings/least-popular", get(least_popular_handler))
        .route(
            "/toppings/most-popular-combo",
            get(most_popular_combo_handler),
        )
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
