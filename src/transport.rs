//! Blocking form-urlencoded POST transport.
//!
//! Issues exactly one request per call against `base_url + path` and hands the
//! raw status and body back unchanged. There is no retry, backoff or caching.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::Result;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// ---------------------------------------------------------------------------
// TransportErrorPolicy
// ---------------------------------------------------------------------------

/// What to do when the request never produced a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportErrorPolicy {
    /// Return the failure as [`BricksetError::Transport`](crate::BricksetError::Transport).
    #[default]
    Propagate,
    /// Log the failure and return an empty response (status `0`, empty body).
    /// The calling operation then fails while decoding, with
    /// [`BricksetError::Decode`](crate::BricksetError::Decode).
    Swallow,
}

// ---------------------------------------------------------------------------
// FormBody
// ---------------------------------------------------------------------------

/// An `application/x-www-form-urlencoded` request body.
///
/// Keys are fixed ASCII literals; every value is percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(&'static str, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `key=value` pair.
    pub fn field(mut self, key: &'static str, value: impl AsRef<str>) -> Self {
        self.fields.push((key, value.as_ref().to_string()));
        self
    }

    /// The unencoded value of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render as `key=value` pairs joined with `&`.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ---------------------------------------------------------------------------
// RawResponse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status, or `0` for a swallowed transport failure.
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
    client: Client,
    on_error: TransportErrorPolicy,
}

impl Transport {
    /// Create a transport. A trailing `/` on `base_url` is ignored.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
        on_error: TransportErrorPolicy,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            on_error,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn error_policy(&self) -> TransportErrorPolicy {
        self.on_error
    }

    /// Full URL for an endpoint path such as `/getSets`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `form` to `path` and return the raw response.
    pub fn post_form(&self, path: &str, form: &FormBody) -> Result<RawResponse> {
        let url = self.url(path);

        match self.send(&url, form.encode()) {
            Ok(response) => {
                tracing::debug!(path, status = response.status, "brickset response");
                Ok(response)
            }
            Err(e) => match self.on_error {
                TransportErrorPolicy::Propagate => Err(e.into()),
                TransportErrorPolicy::Swallow => {
                    tracing::warn!(path, error = %e, "brickset request failed; continuing with empty response");
                    Ok(RawResponse::default())
                }
            },
        }
    }

    fn send(&self, url: &str, body: String) -> reqwest::Result<RawResponse> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(RawResponse { status, body })
    }
}
