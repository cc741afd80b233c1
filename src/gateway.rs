use serde::{Deserialize, Serialize};

/// A payment gateway as described by the catalog.
///
/// Records are reference data: loaded once, never mutated. The `id` is the
/// stable lookup key used by the bonus tables and for deduplication.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRecord {
    pub id: String,
    pub name: String,
    pub logo_glyph: String,
    pub description: String,
    pub features: Vec<String>,
    pub supported_currencies: Vec<String>,
    pub supported_payment_methods: Vec<String>,
    /// Longer capability notes, shown only by expanded-detail views.
    #[serde(default)]
    pub technical_details: Vec<String>,
}

impl GatewayRecord {
    /// Exact, case-sensitive membership check against the catalog vocabulary.
    pub fn supports_payment_method(&self, method: &str) -> bool {
        self.supported_payment_methods.iter().any(|m| m == method)
    }
}

/// A gateway paired with its match score for one ranking run.
///
/// Derived and ephemeral: rebuilt from scratch on every `rank` call.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoredGateway {
    #[serde(flatten)]
    pub gateway: GatewayRecord,
    pub score: u32,
    pub is_recommended: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GatewayRecord {
        GatewayRecord {
            id: "braintree".to_string(),
            name: "Braintree".to_string(),
            logo_glyph: "🌳".to_string(),
            description: "Full-stack payment platform".to_string(),
            features: vec![],
            supported_currencies: vec!["USD".to_string()],
            supported_payment_methods: vec!["Venmo".to_string(), "PayPal".to_string()],
            technical_details: vec![],
        }
    }

    #[test]
    fn test_gateway_deserialization() {
        let json = r#"{
            "id": "square",
            "name": "Square",
            "logoGlyph": "⬜",
            "description": "Payment and point-of-sale solutions",
            "features": ["In-person payments"],
            "supportedCurrencies": ["USD", "CAD"],
            "supportedPaymentMethods": ["Credit Cards", "Cash"]
        }"#;

        let gateway: GatewayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(gateway.id, "square");
        assert_eq!(gateway.supported_currencies.len(), 2);
        // technicalDetails is optional in catalog JSON
        assert!(gateway.technical_details.is_empty());
    }

    #[test]
    fn test_payment_method_match_is_case_sensitive() {
        let gateway = record();
        assert!(gateway.supports_payment_method("Venmo"));
        assert!(!gateway.supports_payment_method("venmo"));
        assert!(!gateway.supports_payment_method("Zelle"));
    }

    #[test]
    fn test_scored_gateway_serializes_flat() {
        let scored = ScoredGateway {
            gateway: record(),
            score: 85,
            is_recommended: true,
        };
        let json = serde_json::to_value(&scored).unwrap();
        assert_eq!(json["id"], "braintree");
        assert_eq!(json["score"], 85);
        assert_eq!(json["isRecommended"], true);
    }
}
