//! HTTP response types.

use std::collections::HashMap;

use serde_json::Value;

/// Rate limit state parsed from the `x-rate-limit-*` headers.
///
/// # Example
///
/// ```rust
/// use ontraport_api::clients::RateLimit;
///
/// let limit = RateLimit::parse(Some("180"), Some("179"), Some("60")).unwrap();
/// assert_eq!(limit.remaining, 179);
/// assert_eq!(limit.reset, Some(60));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Seconds until the window resets, when reported.
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Parses the header values. Returns `None` unless both `limit` and
    /// `remaining` are present and numeric.
    #[must_use]
    pub fn parse(limit: Option<&str>, remaining: Option<&str>, reset: Option<&str>) -> Option<Self> {
        Some(Self {
            limit: limit?.trim().parse().ok()?,
            remaining: remaining?.trim().parse().ok()?,
            reset: reset.and_then(|value| value.trim().parse().ok()),
        })
    }
}

/// A response from the Ontraport API.
///
/// Successful Ontraport responses wrap their payload in an envelope:
/// `{"code": 0, "data": ..., "account_id": "..."}`. The accessors below
/// read the envelope without consuming the body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed body. Non-JSON bodies are kept as a JSON string.
    pub body: Value,
    /// Rate limit information, when reported.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };
        let rate_limit = RateLimit::parse(
            header("x-rate-limit-limit"),
            header("x-rate-limit-remaining"),
            header("x-rate-limit-reset"),
        );

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by lowercase name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the envelope's `code`. Zero means success.
    ///
    /// Accepts the code as a number or a numeric string.
    #[must_use]
    pub fn envelope_code(&self) -> Option<i64> {
        match self.body.get("code")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the envelope's `data`, or `Value::Null` when there is none.
    #[must_use]
    pub fn data(&self) -> &Value {
        self.body.get("data").unwrap_or(&Value::Null)
    }

    /// Consumes the response and returns the envelope's `data`.
    #[must_use]
    pub fn into_data(self) -> Value {
        match self.body {
            Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    /// Returns the account ID reported in the envelope.
    #[must_use]
    pub fn account_id(&self) -> Option<String> {
        match self.body.get("account_id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns a readable message for an error response.
    ///
    /// Ontraport reports most errors as a plain text body.
    #[must_use]
    pub fn error_message(&self) -> String {
        match &self.body {
            Value::String(text) if !text.trim().is_empty() => text.trim().to_string(),
            Value::Null => String::new(),
            Value::Object(map) if map.is_empty() => String::new(),
            other => other.to_string(),
        }
    }
}
