use crate::fetch::client::HttpClient;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// An [`HttpClient`] wrapper that injects an API key as an HTTP header.
///
/// The header name and value are validated once, at construction.
pub struct ApiKey<C> {
    inner: C,
    header_name: HeaderName,
    key: HeaderValue,
}

impl<C> ApiKey<C> {
    pub fn new(inner: C, header_name: &str, key: &str) -> Result<Self> {
        let header_name = HeaderName::from_bytes(header_name.as_bytes())?;
        let mut key = HeaderValue::from_str(key)?;
        key.set_sensitive(true);
        Ok(Self {
            inner,
            header_name,
            key,
        })
    }

    /// Sends the key verbatim in `Authorization`, with no scheme prefix.
    pub fn raw_authorization(inner: C, key: &str) -> Result<Self> {
        Self::new(inner, AUTHORIZATION.as_str(), key)
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKey<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut()
            .insert(self.header_name.clone(), self.key.clone());
        self.inner.execute(req).await
    }
}
