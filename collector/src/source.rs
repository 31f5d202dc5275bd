use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use toppings::Submission;

/// Provider of the raw submission history, pulled once per refresh tick.
pub trait SubmissionSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Submission>>> + Send;
}

/// Pulls the submission list as JSON from an HTTP endpoint.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("HTTP client misconfigured!");

        Self {
            client,
            url: url.into(),
        }
    }
}

impl SubmissionSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Submission>> {
        let response = self.client.get(&self.url).send().await?;
        let submissions = response.error_for_status()?.json().await?;

        Ok(submissions)
    }
}
