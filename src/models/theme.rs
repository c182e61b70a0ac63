use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Themes — /getThemes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemesResponse {
    pub status: String,
    pub message: String,
    pub matches: i64,
    pub themes: Vec<ThemeRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeRecord {
    pub theme: String,
    pub set_count: i64,
    pub subtheme_count: i64,
    pub year_from: i32,
    pub year_to: i32,
}

// ---------------------------------------------------------------------------
// Subthemes — /getSubthemes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubthemesResponse {
    pub status: String,
    pub message: String,
    pub matches: i64,
    pub subthemes: Vec<SubthemeRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubthemeRecord {
    pub theme: String,
    pub subtheme: String,
    pub set_count: i64,
    pub year_from: i32,
    pub year_to: i32,
}
