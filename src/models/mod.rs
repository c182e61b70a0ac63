//! Wire model for Brickset API requests and responses.
//!
//! Every response type is lenient: missing members and JSON `null` take the
//! field's default value and unknown members are ignored. Decoding only fails
//! on malformed JSON or a value of the wrong type.

pub mod auth;
pub mod de;
pub mod params;
pub mod set;
pub mod theme;

pub use auth::*;
pub use params::*;
pub use set::*;
pub use theme::*;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::STATUS_SUCCESS;
use crate::error::{BricksetError, Result};

/// Decode a response body into `T`.
///
/// `null` object members are dropped before decoding so they fall back to the
/// field default, the same as a missing member. A top-level `null` decodes
/// like `{}`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let mut value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        value = Value::Object(Map::new());
    }
    drop_null_members(&mut value);
    Ok(serde_json::from_value(value)?)
}

fn drop_null_members(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(drop_null_members);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_null_members),
        _ => {}
    }
}

/// Status fields shared by every Brickset response.
///
/// Operations never inspect the status themselves: a `"status": "error"`
/// response decodes successfully. Call [`ensure_success`](Self::ensure_success)
/// to turn an API-level failure into [`BricksetError::ApiStatus`].
pub trait ApiResponse: Sized {
    fn status(&self) -> &str;

    fn message(&self) -> &str;

    fn is_success(&self) -> bool {
        self.status() == STATUS_SUCCESS
    }

    fn ensure_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(BricksetError::ApiStatus {
                status: self.status().to_string(),
                message: self.message().to_string(),
            })
        }
    }
}

macro_rules! impl_api_response {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApiResponse for $ty {
                fn status(&self) -> &str {
                    &self.status
                }

                fn message(&self) -> &str {
                    &self.message
                }
            }
        )*
    };
}

impl_api_response!(LoginResponse, SetsResponse, ThemesResponse, SubthemesResponse);
