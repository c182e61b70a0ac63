//! Async wrapper around [`BricksetClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every request on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use brickset_sdk::AsyncBricksetClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncBricksetClient::builder().build().await.unwrap();
//!
//!     let themes = client.get_themes("my-api-key").await.unwrap();
//!     println!("{} themes", themes.matches);
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::client::{BricksetClient, BricksetClientBuilder};
use crate::error::Result;
use crate::models::{Credentials, SetQueryParams, SetsResponse, SubthemesResponse, ThemesResponse};
use crate::transport::TransportErrorPolicy;

// ---------------------------------------------------------------------------
// AsyncBricksetClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncBricksetClient`].
#[derive(Debug, Clone, Default)]
pub struct AsyncBricksetClientBuilder {
    inner: BricksetClientBuilder,
}

impl AsyncBricksetClientBuilder {
    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    /// Choose how network failures are reported.
    pub fn transport_errors(mut self, policy: TransportErrorPolicy) -> Self {
        self.inner = self.inner.transport_errors(policy);
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client can't be created on an async worker thread,
    /// so construction runs on the blocking pool too.
    pub async fn build(self) -> Result<AsyncBricksetClient> {
        let client = tokio::task::spawn_blocking(move || self.inner.build()).await??;
        Ok(AsyncBricksetClient {
            inner: Arc::new(client),
        })
    }
}

// ---------------------------------------------------------------------------
// AsyncBricksetClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`BricksetClient`].
///
/// Cheap to clone; clones share the same underlying client.
#[derive(Debug, Clone)]
pub struct AsyncBricksetClient {
    inner: Arc<BricksetClient>,
}

impl AsyncBricksetClient {
    pub fn builder() -> AsyncBricksetClientBuilder {
        AsyncBricksetClientBuilder::default()
    }

    /// Run any blocking client operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use brickset_sdk::AsyncBricksetClient;
    /// # async fn example() -> brickset_sdk::Result<()> {
    /// let client = AsyncBricksetClient::builder().build().await?;
    /// let subthemes = client.run(|c| c.get_subthemes("my-api-key", "Star Wars")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&BricksetClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client)).await?
    }

    pub async fn login(
        &self,
        api_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Credentials> {
        let (api_key, username, password) = (api_key.into(), username.into(), password.into());
        self.run(move |c| c.login(&api_key, &username, &password))
            .await
    }

    pub async fn get_sets(
        &self,
        api_key: impl Into<String>,
        user_hash: impl Into<String>,
        params: SetQueryParams,
    ) -> Result<SetsResponse> {
        let (api_key, user_hash) = (api_key.into(), user_hash.into());
        self.run(move |c| c.get_sets(&api_key, &user_hash, &params))
            .await
    }

    pub async fn get_themes(&self, api_key: impl Into<String>) -> Result<ThemesResponse> {
        let api_key = api_key.into();
        self.run(move |c| c.get_themes(&api_key)).await
    }

    pub async fn get_subthemes(
        &self,
        api_key: impl Into<String>,
        theme: impl Into<String>,
    ) -> Result<SubthemesResponse> {
        let (api_key, theme) = (api_key.into(), theme.into());
        self.run(move |c| c.get_subthemes(&api_key, &theme)).await
    }
}
