//! HTTP client for Ontraport API communication.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::OntraportConfig;

/// Path of the API version under the host.
pub const API_BASE_PATH: &str = "/1";

/// Retry wait time in seconds when the server gives no reset hint.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Ontraport API.
///
/// The client handles:
/// - Base URI construction from the configured host
/// - Authentication headers (`Api-Appid`, `Api-Key`) and User-Agent
/// - Automatic retry of 429 and 500 responses
/// - Rate limit header parsing
///
/// `HttpClient` is `Send + Sync`, so one client can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ontraport_api::{HttpClient, OntraportConfig};
/// use ontraport_api::clients::{HttpMethod, HttpRequest};
///
/// let config = OntraportConfig::from_env()?;
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "Rules/getInfo")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// println!("{}", response.data());
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given account configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which only
    /// happens if TLS initialization fails.
    #[must_use]
    pub fn new(config: &OntraportConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Ontraport API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Api-Appid".to_string(), config.app_id().as_ref().to_string());
        default_headers.insert("Api-Key".to_string(), config.api_key().as_ref().to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri: config.host().as_ref().to_string(),
            base_path: API_BASE_PATH.to_string(),
            default_headers,
            tries: config.tries(),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the Ontraport API.
    ///
    /// 429 and 500 responses are retried until the request's (or the
    /// client's) number of tries is used up. A 429 waits for the
    /// `x-rate-limit-reset` hint when present.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - Retries are exhausted (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            request.path.trim_start_matches('/')
        );
        let max_tries = request.tries.unwrap_or(self.tries).max(1);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!(
                "Sending {} request to {} (attempt {}/{})",
                request.http_method,
                request.path,
                tries,
                max_tries
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let reason = res.status().canonical_reason().unwrap_or_default();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();
            let body = Self::parse_body(&body_text);

            let response = HttpResponse::new(code, res_headers, body);
            if let Some(limit) = response.rate_limit {
                tracing::debug!(
                    "Rate limit: {}/{} requests remaining",
                    limit.remaining,
                    limit.limit
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let mut message = response.error_message();
            if message.is_empty() {
                message = reason.to_string();
            }

            let should_retry = code == 429 || code == 500;
            if !should_retry || max_tries == 1 {
                return Err(HttpError::Response(HttpResponseError { code, message }));
            }
            if tries >= max_tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: max_tries,
                    message,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                "Request to {} failed with status {}, retrying in {:?}",
                request.path,
                code,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn parse_body(body_text: &str) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text)
            .unwrap_or_else(|_| serde_json::Value::String(body_text.to_string()))
    }

    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            if let Some(reset) = response.rate_limit.and_then(|limit| limit.reset).or_else(|| {
                response
                    .header("x-rate-limit-reset")
                    .and_then(|value| value.trim().parse().ok())
            }) {
                return Duration::from_secs(reset);
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }
}
