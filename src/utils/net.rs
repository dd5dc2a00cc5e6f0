use std::{collections::HashMap, time::Duration};

use log::debug;
use reqwest::Method;
use reqwest_middleware::ClientBuilder;
use reqwest_retry::{Jitter, RetryTransientMiddleware, policies::ExponentialBackoff};
use url::Url;

use crate::error::{WpError, WpResult};

pub async fn http_get(
    url: &str,
    headers: &HashMap<String, String>,
    timeout_secs: u64,
    max_retries: u32,
) -> WpResult<Vec<u8>> {
    let request_url = Url::parse(url)?;

    let retry_policy = ExponentialBackoff::builder()
        .retry_bounds(Duration::from_secs(1), Duration::from_secs(timeout_secs))
        .jitter(Jitter::Bounded)
        .base(2)
        .build_with_max_retries(max_retries);
    let client = ClientBuilder::new(reqwest::Client::new())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

    let mut request_builder = client
        .request(Method::GET, request_url)
        .timeout(Duration::from_secs(timeout_secs));

    for (k, v) in headers {
        request_builder = request_builder.header(k, v);
    }

    let response = request_builder.send().await?;

    if response.status().is_success() {
        Ok(response.bytes().await?.to_vec())
    } else {
        debug!("[HTTP Status Error] {response:?}");

        Err(WpError::HttpStatusError {
            status: response.status().to_string(),
            request: url.to_string(),
        })
    }
}

pub fn is_http_url(source: &str) -> bool {
    match Url::parse(source) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://example.github.io/data/weekly_etfs.json"));
        assert!(is_http_url("http://127.0.0.1:8000/items.json"));
        assert!(!is_http_url("data/weekly_etfs.json"));
        assert!(!is_http_url("/var/data/items.json"));
        assert!(!is_http_url("file:///var/data/items.json"));
    }
}
