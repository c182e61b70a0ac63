//! Shared fixtures for the Brickset SDK integration tests.
//!
//! Provides a client pointed at a local `mockito` server, helpers for matching
//! form-encoded request bodies, and realistic response bodies.

#![allow(dead_code)]

use brickset_sdk::{BricksetClient, TransportErrorPolicy};
use mockito::Matcher;

pub const API_KEY: &str = "3-abcd-EFGH-1234";
pub const USER_HASH: &str = "Oq7Z3xJ2Zq";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A client whose base URL is the given mock server.
pub fn client_for(server: &mockito::ServerGuard) -> BricksetClient {
    BricksetClient::builder()
        .base_url(server.url())
        .user_agent("brickset-sdk/integration_test")
        .build()
        .unwrap()
}

/// A client whose base URL refuses connections.
pub fn unreachable_client(policy: TransportErrorPolicy) -> BricksetClient {
    BricksetClient::builder()
        .base_url(unreachable_base_url())
        .transport_errors(policy)
        .build()
        .unwrap()
}

/// Bind an ephemeral port and release it so nothing is listening there.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Match a form body containing these `key=value` pairs (compared decoded).
pub fn form(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

pub const LOGIN_OK: &str = r#"{"status":"success","hash":"Oq7Z3xJ2Zq"}"#;

pub const LOGIN_FAILED: &str = r#"{"status":"error","message":"Invalid username and/or password"}"#;

pub const SETS_OK: &str = r#"{
  "status": "success",
  "matches": 2,
  "sets": [
    {
      "setID": 26725,
      "number": "75192",
      "numberVariant": 1,
      "name": "Millennium Falcon",
      "year": 2017,
      "theme": "Star Wars",
      "themeGroup": "Licensed",
      "subtheme": "Ultimate Collector Series",
      "category": "Normal",
      "released": true,
      "pieces": 7541,
      "minifigs": 8,
      "image": {
        "thumbnailURL": "https://images.brickset.com/sets/small/75192-1.jpg",
        "imageURL": "https://images.brickset.com/sets/images/75192-1.jpg"
      },
      "bricksetURL": "https://brickset.com/sets/75192-1",
      "collection": {
        "owned": true,
        "wanted": false,
        "qtyOwned": 1,
        "rating": 5,
        "notes": "Built over a long weekend"
      },
      "collections": { "ownedBy": 12345, "wantedBy": 6789 },
      "LEGOCom": {
        "US": {
          "retailPrice": 799.99,
          "dateFirstAvailable": "2017-10-01T00:00:00Z",
          "dateLastAvailable": "2022-12-31T00:00:00Z"
        },
        "UK": { "retailPrice": 649.99, "dateFirstAvailable": "2017-10-01T00:00:00Z" },
        "CA": { "retailPrice": 899.99 },
        "DE": {}
      },
      "rating": 4.7,
      "reviewCount": 27,
      "packagingType": "Box",
      "availability": "LEGO exclusive",
      "instructionsCount": 8,
      "additionalImageCount": 21,
      "ageRange": { "min": 16 },
      "dimensions": { "height": 48.0, "width": 58.0, "depth": 17.5, "weight": 15.0 },
      "barcode": { "EAN": "5702015869935", "UPC": "673419267380" },
      "extendedData": { "tags": ["Millennium Falcon", "UCS"] },
      "lastUpdated": "2021-11-04T14:18:53.607"
    },
    {
      "setID": 31296,
      "number": "75257",
      "numberVariant": 1,
      "name": "Millennium Falcon",
      "year": 2019,
      "theme": "Star Wars",
      "pieces": null,
      "ageRange": null,
      "collection": {},
      "lastUpdated": null
    }
  ]
}"#;

pub const THEMES_OK: &str = r#"{
  "status": "success",
  "matches": 3,
  "themes": [
    { "theme": "Castle", "setCount": 312, "subthemeCount": 24, "yearFrom": 1978, "yearTo": 2024 },
    { "theme": "City", "setCount": 901, "subthemeCount": 61, "yearFrom": 2005, "yearTo": 2025 },
    { "theme": "Star Wars", "setCount": 1104, "subthemeCount": 48, "yearFrom": 1999, "yearTo": 2025 }
  ]
}"#;

pub const SUBTHEMES_OK: &str = r#"{
  "status": "success",
  "matches": 2,
  "subthemes": [
    { "theme": "Star Wars", "subtheme": "Ultimate Collector Series", "setCount": 85, "yearFrom": 2000, "yearTo": 2025 },
    { "theme": "Star Wars", "subtheme": "Microfighters", "setCount": 62, "yearFrom": 2014, "yearTo": 2024 }
  ]
}"#;

pub const STATUS_FAIL: &str = r#"{"status":"fail"}"#;

pub const INVALID_KEY: &str = r#"{"status":"error","message":"Invalid apiKey"}"#;

pub const TRUNCATED: &str = r#"{"status":"success","matches":2,"sets":[{"setID":1,"#;
