mod client;
mod basic;
pub mod auth;

pub use client::HttpClient;
pub use basic::BasicClient;

use anyhow::Result;

/// Sends a GET to `url` and returns the body.
///
/// # Errors
///
/// Fails on transport errors and on any non-success status, in which case the
/// error carries the status and the response body.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse()?,
    );

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow::anyhow!("GET {} returned status {}: {}", url, status, body));
    }

    Ok(resp.bytes().await?.to_vec())
}
