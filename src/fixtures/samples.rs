//! Sample data fixtures for stamp-scorer tests
//!
//! Every function builds its value fresh on each call so tests can mutate
//! their copy without leaking state into the next test.

use serde::{Deserialize, Serialize};

/// A single stamp record as the scorer API exchanges it: `{"stamp": <int>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampFixture {
    pub stamp: i64,
}

/// Placeholder blockchain addresses used across the test suites
pub fn sample_addresses() -> Vec<String> {
    vec![
        "0x123".to_string(),
        "0x456".to_string(),
        "0x789".to_string(),
    ]
}

/// Identity-provider names matching the sample addresses
pub fn sample_providers() -> Vec<String> {
    vec![
        "Twitter".to_string(),
        "Github".to_string(),
        "LinkedIn".to_string(),
    ]
}

/// Three stamp records with ids 1, 2, 3
pub fn sample_stamps() -> Vec<StampFixture> {
    vec![
        StampFixture { stamp: 1 },
        StampFixture { stamp: 2 },
        StampFixture { stamp: 3 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_addresses_values() {
        assert_eq!(sample_addresses(), vec!["0x123", "0x456", "0x789"]);
    }

    #[test]
    fn test_sample_providers_values() {
        assert_eq!(sample_providers(), vec!["Twitter", "Github", "LinkedIn"]);
    }

    #[test]
    fn test_sample_stamps_values_in_order() {
        let stamps = sample_stamps();
        let ids: Vec<i64> = stamps.iter().map(|s| s.stamp).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sample_stamps_json_shape() {
        let json = serde_json::to_value(sample_stamps()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"stamp": 1}, {"stamp": 2}, {"stamp": 3}])
        );
    }

    #[test]
    fn test_stamp_fixture_roundtrip() {
        let stamp: StampFixture = serde_json::from_str(r#"{"stamp": 7}"#).unwrap();
        assert_eq!(stamp, StampFixture { stamp: 7 });
    }

    #[test]
    fn test_fixture_calls_are_independent() {
        let mut first = sample_addresses();
        first.push("0xabc".to_string());
        assert_eq!(sample_addresses().len(), 3);

        let mut stamps = sample_stamps();
        stamps[0].stamp = 99;
        assert_eq!(sample_stamps()[0].stamp, 1);
    }
}
