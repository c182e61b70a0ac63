//! Lower-camel-case JSON keys for outbound request parameters.
//!
//! Parameter structs serialize with Pascal-case keys (`PageSize`, `SetNumber`),
//! while the Brickset API expects camelCase (`pageSize`, `setNumber`). Instead of
//! keeping a second per-field key table, the serialized text is rewritten: every
//! quoted single-word key followed by a colon has its first character lower-cased.
//!
//! The rewrite is textual. Only `"word":` sequences are touched, which in valid
//! JSON output can only be object keys: a quote inside a string value is always
//! escaped, so a string value never produces an unescaped `"word":`.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::{BricksetError, Result};

lazy_static! {
    /// A quoted single-word key immediately followed by a colon.
    static ref KEY_PATTERN: Regex = Regex::new(r#""(\w+)":"#).unwrap();
}

/// Lower-case the first character of every object key in `json`.
///
/// Keys at every nesting depth are rewritten; values and structure are left
/// alone. The empty key `""` never matches `\w+` and passes through as-is.
/// Returns the input unchanged (borrowed) when no key needs lowering.
pub fn lower_first_key_chars(json: &str) -> Cow<'_, str> {
    if !KEY_PATTERN.captures_iter(json).any(|caps| starts_with_upper(&caps[1])) {
        return Cow::Borrowed(json);
    }
    KEY_PATTERN.replace_all(json, |caps: &Captures| {
        let mut chars = caps[1].chars();
        match chars.next() {
            Some(first) => format!("\"{}{}\":", first.to_lowercase(), chars.as_str()),
            None => caps[0].to_string(),
        }
    })
}

fn starts_with_upper(key: &str) -> bool {
    key.chars()
        .next()
        .is_some_and(|c| c.to_lowercase().ne(std::iter::once(c)))
}

/// Serialize `value` to compact JSON and lower-case the first character of
/// every key.
pub fn to_lower_camel_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let raw = serde_json::to_string(value).map_err(BricksetError::Encode)?;
    Ok(lower_first_key_chars(&raw).into_owned())
}
