/*
[INPUT]:  Server JSON with mixed camelCase/PascalCase field names
[OUTPUT]: Typed domain models for stores, locations, and operators
[POS]:    Data layer - core domain entities
[UPDATE]: When the server adds fields or changes their spelling
*/

use serde::{Deserialize, Serialize};

/// A store that can be selected for a counting session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub country: String,
}

/// One row of the Locations listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: u64,
    pub code: String,
    pub physical_count: i64,
    pub system_count: i64,
    pub discrepancy: i64,
    pub store_id: u64,
}

/// A location resolved from a scanned/entered location code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedLocation {
    pub id: u64,
    pub code: String,
    pub physical_count: i64,
    pub system_count: i64,
    pub store_id: u64,
}

/// A product row recorded against a location.
///
/// Field casing follows the server verbatim, PascalCase keys included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationProduct {
    #[serde(rename = "PK")]
    pub pk: u64,
    pub barcode: String,
    pub name: String,
    #[serde(rename = "lastScannedBy")]
    pub last_scanned_by: String,
    #[serde(rename = "LastScannedOn")]
    pub last_scanned_on: String,
}

/// Per-operator scan totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOperator {
    #[serde(rename = "PK")]
    pub pk: String,
    #[serde(rename = "PhysicalCount")]
    pub physical_count: i64,
    #[serde(rename = "SystemCount")]
    pub system_count: i64,
}
