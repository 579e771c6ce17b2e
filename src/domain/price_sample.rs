use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// One observed price. Wire shape: `{ "lastUpdatedAt": "<ISO-8601>", "price": <number> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    #[serde(rename = "lastUpdatedAt")]
    pub last_updated_at: DateTime<Utc>,
    pub price: f64,
}

impl PriceSample {
    pub fn new(last_updated_at: DateTime<Utc>, price: f64) -> Self {
        Self {
            last_updated_at,
            price,
        }
    }
}

/// Samples for one ticker over the requested window, oldest first (as delivered; not re-sorted).
pub type PriceHistory = Vec<PriceSample>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = r#"{"lastUpdatedAt": "2025-05-08T04:26:27.4658491Z", "price": 231.95296}"#;
        let sample: PriceSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.price, 231.95296);
        assert_eq!(
            sample.last_updated_at.timestamp(),
            "2025-05-08T04:26:27Z".parse::<DateTime<Utc>>().unwrap().timestamp()
        );
    }

    #[test]
    fn accepts_offset_timestamps() {
        let json = r#"{"lastUpdatedAt": "2025-05-08T09:56:27+05:30", "price": 10}"#;
        let sample: PriceSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.last_updated_at.to_rfc3339(), "2025-05-08T04:26:27+00:00");
        assert_eq!(sample.price, 10.0);
    }

    #[test]
    fn rejects_missing_price() {
        let json = r#"{"lastUpdatedAt": "2025-05-08T04:26:27Z"}"#;
        assert!(serde_json::from_str::<PriceSample>(json).is_err());
    }
}
