use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub source_url: String,
    pub refresh_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PIZZA_PORT", "1111"),
            source_url: try_load(
                "PIZZA_SOURCE_URL",
                "http://localhost:1111/toppings/get-toppings",
            ),
            refresh_secs: try_load("PIZZA_REFRESH_SECS", "10"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
