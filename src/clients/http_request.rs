//! HTTP request types.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Ontraport API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Retrieve records.
    Get,
    /// Create records.
    Post,
    /// Update records.
    Put,
    /// Delete records.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request to the Ontraport API.
///
/// Bodies are always sent as JSON.
///
/// # Example
///
/// ```rust
/// use ontraport_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "Rule")
///     .query_param("id", "1")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "Rules")
///     .body(json!({"name": "New rule"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the API base path, e.g. `Rules/meta`.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request. `None` uses the client's setting.
    pub tries: Option<u32>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty
    /// - `http_method` is `Post` or `Put` and `body` is `None`
    /// - `http_method` is `Get` or `Delete` and `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        match (self.http_method, &self.body) {
            (HttpMethod::Post | HttpMethod::Put, None) => {
                Err(InvalidHttpRequestError::MissingBody {
                    method: self.http_method.to_string(),
                })
            }
            (HttpMethod::Get | HttpMethod::Delete, Some(_)) => {
                Err(InvalidHttpRequestError::UnexpectedBody {
                    method: self.http_method.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    tries: Option<u32>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
            tries: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once, replacing any already added.
    ///
    /// An empty map leaves the query unset.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query).filter(|q| !q.is_empty());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Overrides the client's number of attempts for this request.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}
