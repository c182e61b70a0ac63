use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::timestamp_opt;

// ---------------------------------------------------------------------------
// SetsResponse — envelope returned by /getSets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetsResponse {
    pub status: String,
    pub message: String,
    pub matches: i64,
    pub sets: Vec<SetRecord>,
}

// ---------------------------------------------------------------------------
// SetRecord — a single catalog entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetRecord {
    #[serde(rename = "setID")]
    pub set_id: i64,
    pub number: String,
    pub number_variant: i64,
    pub name: String,
    pub year: i32,
    pub theme: String,
    pub theme_group: String,
    pub subtheme: String,
    pub category: String,
    pub released: bool,
    pub pieces: i64,
    pub minifigs: i64,
    pub image: SetImage,
    #[serde(rename = "bricksetURL")]
    pub brickset_url: String,
    pub collection: SetCollection,
    pub collections: SetCollections,
    #[serde(rename = "LEGOCom")]
    pub lego_com: LegoComPricing,
    pub rating: f64,
    pub review_count: i64,
    pub packaging_type: String,
    pub availability: String,
    pub instructions_count: i64,
    pub additional_image_count: i64,
    pub age_range: AgeRange,
    pub dimensions: Dimensions,
    pub barcode: Barcode,
    pub extended_data: ExtendedData,
    #[serde(deserialize_with = "timestamp_opt")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetImage {
    #[serde(rename = "thumbnailURL")]
    pub thumbnail_url: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// The logged-in user's own collection data for a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetCollection {
    pub owned: bool,
    pub wanted: bool,
    pub qty_owned: i64,
    pub rating: i64,
    pub notes: String,
}

/// Community-wide collection counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetCollections {
    pub owned_by: i64,
    pub wanted_by: i64,
}

/// Retail data per LEGO.com region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegoComPricing {
    #[serde(rename = "US")]
    pub us: RegionalPricing,
    #[serde(rename = "UK")]
    pub uk: RegionalPricing,
    #[serde(rename = "CA")]
    pub ca: RegionalPricing,
    #[serde(rename = "DE")]
    pub de: RegionalPricing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionalPricing {
    pub retail_price: f64,
    #[serde(deserialize_with = "timestamp_opt")]
    pub date_first_available: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp_opt")]
    pub date_last_available: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRange {
    pub min: i64,
    pub max: i64,
}

/// Box dimensions (cm) and weight (kg).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Barcode {
    #[serde(rename = "EAN")]
    pub ean: String,
    #[serde(rename = "UPC")]
    pub upc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedData {
    pub notes: String,
    pub tags: Vec<String>,
    pub description: String,
}
