use std::sync::Arc;

use toppings::MetricsStore;

use super::config::Config;

pub struct State {
    pub config: Config,
    pub metrics: Arc<MetricsStore>,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let metrics = Arc::new(MetricsStore::new());

        Arc::new(Self { config, metrics })
    }
}
