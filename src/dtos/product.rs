// src/dtos/product.rs
use serde::{Deserialize, Serialize};

/// Upper bound (and fallback) for the `count` query parameter.
pub const MAX_PAGE_SIZE: i64 = 10;

/// Body accepted by `POST /product` and `PUT /product/{id}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    // Clients may echo the id back; the path id always wins.
    #[serde(default, rename = "id")]
    _id: Option<i64>,
}

impl ProductRequest {
    /// Decodes a request body, ignoring the declared content type.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Offset/limit pair handed to the store by `GET /products`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    pub offset: i64,
    pub limit: i64,
}

impl ListWindow {
    pub fn new(count: i64, start: i64) -> Self {
        let limit = if (1..=MAX_PAGE_SIZE).contains(&count) {
            count
        } else {
            MAX_PAGE_SIZE
        };
        Self {
            offset: start.max(0),
            limit,
        }
    }

    /// Builds a window from raw query pairs. Missing or unparsable values count as 0.
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let lookup = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| v.parse::<i64>().ok())
                .unwrap_or(0)
        };
        Self::new(lookup("count"), lookup("start"))
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
