//! Brickset SDK for Rust.
//!
//! A client for the [Brickset](https://brickset.com) API v3: log in, then
//! query LEGO sets, themes and subthemes. Requests are form-encoded POSTs and
//! responses are decoded into the typed records in [`models`].
//!
//! # Quick start
//!
//! ```no_run
//! use brickset_sdk::{BricksetClient, SetQueryParams};
//!
//! let client = BricksetClient::new().unwrap();
//!
//! let creds = client.login("my-api-key", "username", "password").unwrap();
//!
//! let params = SetQueryParams {
//!     theme: "Star Wars".into(),
//!     year: "2019".into(),
//!     ..Default::default()
//! };
//! let sets = client
//!     .get_sets(&creds.api_key, creds.user_hash(), &params)
//!     .unwrap();
//! for set in &sets.sets {
//!     println!("{}-{} {}", set.number, set.number_variant, set.name);
//! }
//! ```
//!
//! The crate-level functions ([`login`], [`get_sets`], [`get_themes`],
//! [`get_subthemes`]) build a default client for each call.
//!
//! # Errors
//!
//! A call fails when the request can't be sent or the body can't be decoded.
//! A response whose `status` is not `"success"` still decodes successfully;
//! use [`ApiResponse::ensure_success`] to treat it as an error.

#[cfg(feature = "async")]
pub mod async_client;
pub mod casing;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::{AsyncBricksetClient, AsyncBricksetClientBuilder};
pub use client::{BricksetClient, BricksetClientBuilder};
pub use error::{BricksetError, Result};
pub use models::{
    ApiResponse, Credentials, LoginResponse, SetQueryParams, SetRecord, SetsResponse,
    SubthemeRecord, SubthemesResponse, ThemeRecord, ThemesResponse,
};
pub use transport::TransportErrorPolicy;

/// Log in with a default client. See [`BricksetClient::login`].
pub fn login(api_key: &str, username: &str, password: &str) -> Result<Credentials> {
    BricksetClient::new()?.login(api_key, username, password)
}

/// Search sets with a default client. See [`BricksetClient::get_sets`].
pub fn get_sets(api_key: &str, user_hash: &str, params: &SetQueryParams) -> Result<SetsResponse> {
    BricksetClient::new()?.get_sets(api_key, user_hash, params)
}

/// List themes with a default client. See [`BricksetClient::get_themes`].
pub fn get_themes(api_key: &str) -> Result<ThemesResponse> {
    BricksetClient::new()?.get_themes(api_key)
}

/// List subthemes with a default client. See [`BricksetClient::get_subthemes`].
pub fn get_subthemes(api_key: &str, theme: &str) -> Result<SubthemesResponse> {
    BricksetClient::new()?.get_subthemes(api_key, theme)
}
