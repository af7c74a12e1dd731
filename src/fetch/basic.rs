use super::client::HttpClient;
use async_trait::async_trait;
use std::time::Duration;

const USER_AGENT: &str = concat!("surf-rater/", env!("CARGO_PKG_VERSION"));

pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }

    /// Client with the request and connect timeouts used for provider APIs.
    pub fn with_timeouts(timeout: Duration, connect_timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self(client))
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
