/*
[INPUT]:  Server-side filter vocabulary
[OUTPUT]: Typed enums serialized to their wire spellings
[POS]:    Data layer - enumerated wire values
[UPDATE]: When the server accepts new filter operators
*/

use serde::{Deserialize, Serialize};

/// Comparison operator accepted by the Locations filter parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Exact equality
    Eq,
    /// Regex match
    Rx,
    /// Server-defined derived predicate (counted, discrepancy)
    Custom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_operator_wire_spelling() {
        assert_eq!(serde_json::to_string(&FilterOperator::Eq).unwrap(), r#""eq""#);
        assert_eq!(serde_json::to_string(&FilterOperator::Rx).unwrap(), r#""rx""#);
        assert_eq!(
            serde_json::to_string(&FilterOperator::Custom).unwrap(),
            r#""custom""#
        );
    }
}
