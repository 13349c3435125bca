//! HTTP client layer for the Ontraport API.
//!
//! # Overview
//!
//! - [`HttpClient`]: async client that authenticates, sends and retries requests
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response, with envelope accessors
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimit`]: state reported by the `x-rate-limit-*` headers
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: waits `x-rate-limit-reset` seconds, or 1 second if not present
//! - **500 (Server Error)**: waits 1 second
//! - **Other errors**: returned immediately
//!
//! The default number of tries is 1, meaning no retries. Configure it on
//! [`OntraportConfigBuilder::tries`](crate::config::OntraportConfigBuilder::tries)
//! or per request with [`HttpRequestBuilder::tries`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, API_BASE_PATH, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
