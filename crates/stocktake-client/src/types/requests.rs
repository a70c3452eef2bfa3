/*
[INPUT]:  Caller-supplied query and scan parameters
[OUTPUT]: Serializable request bodies and filter triples
[POS]:    Data layer - outbound request shapes
[UPDATE]: When request bodies gain fields or new filters appear
*/

use serde::{Deserialize, Serialize};

use crate::types::FilterOperator;

/// One `{operator, property, value}` triple of the Locations filter.
///
/// The value is numeric for the derived predicates and a string for
/// code matches, so it stays a raw JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub operator: FilterOperator,
    pub property: String,
    pub value: serde_json::Value,
}

impl LocationFilter {
    pub fn eq(property: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            operator: FilterOperator::Eq,
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn regex(property: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            operator: FilterOperator::Rx,
            property: property.into(),
            value: serde_json::Value::String(pattern.into()),
        }
    }

    pub fn custom(property: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            operator: FilterOperator::Custom,
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Body of the product-scan submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanProductRequest {
    pub id: u64,
    pub barcode: String,
    /// Device battery at scan time, e.g. "87%"
    pub battery_level: String,
    pub code: String,
    pub serial_number: String,
    pub store_id: u64,
}
