//! HTTP client for the platform's internal page-rendering API.

use std::time::Duration;

use reqwest::header;
use serde_json::Value;

use crate::error::ScraperError;
use crate::session::{random_cookie_header, random_request_id};

/// Total request attempts per page fetch. The upstream edge occasionally
/// answers 520 for a request it would serve moments later, so one bounded
/// retry is allowed; anything past that is treated as an outage.
const MAX_ATTEMPTS: u32 = 2;

/// Path of the page-composition endpoint under the API base.
const PAGE_FETCH_PATH: &str = "/api/4/page/fetch";

const COOKIE_PAIRS: usize = 10;
const COOKIE_NAME_LEN: usize = 8;
const COOKIE_VALUE_LEN: usize = 32;

const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

/// Fixed browser-mimicking header set sent with every request. The two
/// dynamic headers (`cookie`, `request-id`) are generated per call in
/// [`RomeClient::fetch_page`].
const STATIC_HEADERS: [(&str, &str); 12] = [
    ("accept", "*/*"),
    ("accept-language", "en-US,en;q=0.9"),
    ("origin", "https://www.flipkart.com"),
    ("referer", "https://www.flipkart.com/"),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
    ("user-agent", BROWSER_UA),
    (
        "x-user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36 FKUA/website/42/website/Desktop",
    ),
    (
        "sec-ch-ua",
        "\"Google Chrome\";v=\"137\", \"Chromium\";v=\"137\", \"Not/A)Brand\";v=\"24\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
];

/// Client for the page-rendering ("rome") API.
///
/// One call to [`fetch_page`](Self::fetch_page) issues one POST per attempt
/// (at most [`MAX_ATTEMPTS`]), retrying exactly once on the upstream's
/// transient 520 status after honoring its `Retry-After` header. Every other
/// non-2xx status is terminal. Each attempt carries a freshly randomized
/// session cookie jar and correlation ID.
pub struct RomeClient {
    client: reqwest::Client,
    api_base: String,
    retry_after_default_secs: u64,
}

impl RomeClient {
    /// Creates a `RomeClient` with the given API base, per-attempt timeout,
    /// and `Retry-After` fallback. `proxy_url`, when set, is applied to all
    /// schemes; `accept_invalid_certs` tolerates a TLS-intercepting proxy CA.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the proxy URL is invalid or the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        api_base: &str,
        timeout_secs: u64,
        retry_after_default_secs: u64,
        proxy_url: Option<&str>,
        accept_invalid_certs: bool,
    ) -> Result<Self, ScraperError> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10));
        if let Some(proxy_url) = proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }
        if accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        Ok(Self {
            client: builder.build()?,
            api_base: api_base.trim_end_matches('/').to_owned(),
            retry_after_default_secs,
        })
    }

    /// Fetches the raw page-composition payload for one (FSN, pincode) pair.
    ///
    /// The returned tree is untyped: no key is guaranteed to exist at any
    /// depth. Persisting it is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::EdgeUnavailable`] — HTTP 520 on the final attempt.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status (not retried).
    /// - [`ScraperError::Http`] — network, TLS, or timeout failure (not retried).
    /// - [`ScraperError::Deserialize`] — response body is not valid JSON.
    pub async fn fetch_page(
        &self,
        product_id: &str,
        pincode: &str,
    ) -> Result<Value, ScraperError> {
        let url = format!("{}{PAGE_FETCH_PATH}", self.api_base);
        let body = serde_json::json!({
            "pageUri": page_uri(product_id),
            "locationContext": { "pincode": pincode },
            "isReloadRequest": true,
        });

        let mut attempt = 1u32;
        loop {
            // The RNG handle must not live across an await point; generate
            // both dynamic headers up front.
            let (cookie_header, request_id) = {
                let mut rng = rand::rng();
                (
                    random_cookie_header(&mut rng, COOKIE_PAIRS, COOKIE_NAME_LEN, COOKIE_VALUE_LEN),
                    random_request_id(&mut rng, Some(product_id)),
                )
            };

            let mut request = self.client.post(&url);
            for (name, value) in STATIC_HEADERS {
                request = request.header(name, value);
            }
            let response = request
                .header(header::COOKIE, &cookie_header)
                .header("request-id", &request_id)
                .json(&body)
                .send()
                .await?;

            let status = response.status();

            if status.as_u16() == 520 {
                if attempt >= MAX_ATTEMPTS {
                    return Err(ScraperError::EdgeUnavailable {
                        attempts: MAX_ATTEMPTS,
                    });
                }
                let retry_after_secs = response
                    .headers()
                    .get(header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(self.retry_after_default_secs);
                tracing::warn!(
                    attempt,
                    retry_after_secs,
                    product_id,
                    pincode,
                    "edge returned 520 — retrying after delay"
                );
                tokio::time::sleep(Duration::from_secs(retry_after_secs)).await;
                attempt += 1;
                continue;
            }

            if !status.is_success() {
                return Err(ScraperError::UnexpectedStatus {
                    status: status.as_u16(),
                    url,
                });
            }

            let text = response.text().await?;
            return serde_json::from_str(&text).map_err(|e| ScraperError::Deserialize {
                context: format!("page payload for {product_id} @ {pincode}"),
                source: e,
            });
        }
    }
}

/// Builds the page URI carried in the fetch body. The slug segment is
/// cosmetic; the upstream resolves the product from the `pid` parameter.
fn page_uri(product_id: &str) -> String {
    format!("/product/p/item?pid={product_id}")
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
