/*
[INPUT]:  Server JSON response envelopes
[OUTPUT]: Typed response structs for the endpoint wrappers
[POS]:    Data layer - inbound response shapes
[UPDATE]: When response envelopes change
*/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::LocationSummary;

/// Response from the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// One page of the Locations listing plus the dashboard counters.
///
/// `cumulative_count` keys are the dashboard bucket names
/// (Total, Counted, Not Counted, Discrepancies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPage {
    pub data: Vec<LocationSummary>,
    pub cumulative_count: HashMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_envelope() {
        let json = r#"{
            "data": [{
                "id": 1,
                "code": "A1-01",
                "physicalCount": 5,
                "systemCount": 5,
                "discrepancy": 0,
                "storeId": 2
            }],
            "cumulativeCount": {"Total": 120, "Counted": 80}
        }"#;

        let page: LocationPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.cumulative_count["Total"], 120);
    }
}
