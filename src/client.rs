//! Blocking client for the Brickset API.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config;
use crate::error::{BricksetError, Result};
use crate::models::{
    self, Credentials, LoginResponse, SetQueryParams, SetsResponse, SubthemesResponse,
    ThemesResponse,
};
use crate::transport::{FormBody, Transport, TransportErrorPolicy};

// ---------------------------------------------------------------------------
// BricksetClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BricksetClient`].
#[derive(Debug, Clone)]
pub struct BricksetClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    transport_errors: TransportErrorPolicy,
}

impl Default for BricksetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::USER_AGENT.to_string(),
            transport_errors: TransportErrorPolicy::default(),
        }
    }
}

impl BricksetClientBuilder {
    /// Override the API base URL.
    ///
    /// Defaults to `https://brickset.com/api/v3.asmx`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Choose how network failures are reported.
    ///
    /// Defaults to [`TransportErrorPolicy::Propagate`].
    pub fn transport_errors(mut self, policy: TransportErrorPolicy) -> Self {
        self.transport_errors = policy;
        self
    }

    pub fn build(self) -> Result<BricksetClient> {
        let transport = Transport::new(
            &self.base_url,
            self.timeout,
            &self.user_agent,
            self.transport_errors,
        )?;
        Ok(BricksetClient { transport })
    }
}

// ---------------------------------------------------------------------------
// BricksetClient
// ---------------------------------------------------------------------------

/// Stateless client for the Brickset API.
///
/// Holds only configuration and an HTTP client; no session state is kept
/// between calls, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct BricksetClient {
    transport: Transport,
}

impl BricksetClient {
    /// Client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> BricksetClientBuilder {
        BricksetClientBuilder::default()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Call `/login` and return the decoded response as-is.
    pub fn login_response(
        &self,
        api_key: &str,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse> {
        let form = FormBody::new()
            .field("apiKey", api_key)
            .field("username", username)
            .field("password", password);

        self.call(config::LOGIN_PATH, &form)
    }

    /// Log in and return the API key together with the session hash.
    ///
    /// An API-level failure (wrong password, bad key) is not an error here:
    /// it yields credentials whose `hash` is `None`.
    pub fn login(&self, api_key: &str, username: &str, password: &str) -> Result<Credentials> {
        let response = self.login_response(api_key, username, password)?;
        if response.hash.is_empty() {
            tracing::warn!(
                status = %response.status,
                message = %response.message,
                "login returned no session hash"
            );
        }
        Ok(Credentials::from((api_key, response)))
    }

    /// Search sets.
    ///
    /// `user_hash` may be empty for anonymous searches. A zero page size is
    /// sent as 500. The filters are sent as a camelCase JSON document in the
    /// `params` field.
    pub fn get_sets(
        &self,
        api_key: &str,
        user_hash: &str,
        params: &SetQueryParams,
    ) -> Result<SetsResponse> {
        let encoded = params.to_wire_json()?;
        tracing::debug!(params = %encoded, "getSets parameters");

        let form = FormBody::new()
            .field("apiKey", api_key)
            .field("userHash", user_hash)
            .field("params", &encoded);

        self.call(config::GET_SETS_PATH, &form)
    }

    /// List all themes.
    pub fn get_themes(&self, api_key: &str) -> Result<ThemesResponse> {
        let form = FormBody::new().field("apiKey", api_key);

        self.call(config::GET_THEMES_PATH, &form)
    }

    /// List the subthemes of `theme`.
    pub fn get_subthemes(&self, api_key: &str, theme: &str) -> Result<SubthemesResponse> {
        let form = FormBody::new()
            .field("apiKey", api_key)
            .field("theme", theme);

        self.call(config::GET_SUBTHEMES_PATH, &form)
    }

    /// POST the form and decode the body.
    ///
    /// The `status` member is not inspected. A body that fails to decode is
    /// reported as [`BricksetError::UnexpectedStatus`] when the HTTP status was
    /// not 2xx, and as [`BricksetError::Decode`] otherwise.
    fn call<T: DeserializeOwned>(&self, path: &str, form: &FormBody) -> Result<T> {
        let raw = self.transport.post_form(path, form)?;

        match models::decode(&raw.body) {
            Err(BricksetError::Decode(_)) if raw.status != 0 && !raw.is_success() => {
                Err(BricksetError::UnexpectedStatus {
                    status: raw.status,
                    body: raw.body,
                })
            }
            result => result,
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for BricksetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BricksetClient(base_url={}, transport_errors={:?})",
            self.transport.base_url(),
            self.transport.error_policy()
        )
    }
}
