use std::time::Duration;

pub const API_BASE: &str = "https://brickset.com/api/v3.asmx";

pub const LOGIN_PATH: &str = "/login";
pub const GET_SETS_PATH: &str = "/getSets";
pub const GET_THEMES_PATH: &str = "/getThemes";
pub const GET_SUBTHEMES_PATH: &str = "/getSubthemes";

/// Page size sent to `/getSets` when the caller leaves it at zero.
pub const DEFAULT_PAGE_SIZE: u32 = 500;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!("brickset-sdk/", env!("CARGO_PKG_VERSION"));

/// Status string the API uses for a successful call.
pub const STATUS_SUCCESS: &str = "success";
