use serde::Serialize;

use crate::casing;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;

// ---------------------------------------------------------------------------
// SetQueryParams — filters for /getSets
// ---------------------------------------------------------------------------

/// Filters for [`get_sets`](crate::BricksetClient::get_sets).
///
/// Serializes with Pascal-case keys; [`to_wire_json`](Self::to_wire_json)
/// rewrites them to the camelCase the API expects. Empty strings and zero
/// flags mean "unfiltered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetQueryParams {
    /// Results per page. Zero means "unset" and is sent as 500.
    pub page_size: u32,
    pub theme: String,
    pub subtheme: String,
    pub set_number: String,
    /// A single year or a comma-separated list.
    pub year: String,
    pub owned: i32,
    pub wanted: i32,
    pub order_by: String,
}

impl SetQueryParams {
    pub fn effective_page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// The JSON document sent as the `params` form field.
    pub fn to_wire_json(&self) -> Result<String> {
        let params = SetQueryParams {
            page_size: self.effective_page_size(),
            ..self.clone()
        };
        casing::to_lower_camel_json(&params)
    }
}
