use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The merchant's self-reported attributes, as collected by the form.
///
/// `country`, `industry` and `annual_revenue_band` are free-text tokens that
/// must match the bonus table keys exactly for bonuses to apply; unmatched
/// values are silently worth zero. The profile is scoreable only once those
/// three fields are non-empty.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub annual_revenue_band: String,
    #[serde(default)]
    pub avg_transaction_amount: Decimal,
    #[serde(default)]
    pub avg_transactions_per_month: u32,
    #[serde(default)]
    pub selected_currencies: Vec<String>,
    #[serde(default)]
    pub selected_payment_methods: Vec<String>,
}

impl BusinessProfile {
    pub fn is_complete(&self) -> bool {
        !self.country.is_empty()
            && !self.industry.is_empty()
            && !self.annual_revenue_band.is_empty()
    }

    /// Estimated monthly processing volume, the input to volume-tier selection.
    pub fn monthly_volume(&self) -> Decimal {
        self.avg_transaction_amount * Decimal::from(self.avg_transactions_per_month)
    }

    /// Rewrites composite currency selections ("United States Dollar (USD)")
    /// down to bare codes. Selections that carry no parenthesized code are
    /// kept as-is rather than mangled.
    pub fn normalize_currencies(&mut self) {
        for currency in &mut self.selected_currencies {
            if let Some(code) = currency_code(currency) {
                *currency = code.to_string();
            }
        }
    }
}

/// Extracts the ISO-like code from a "display label (CODE)" composite.
pub fn currency_code(raw: &str) -> Option<&str> {
    let start = raw.rfind('(')?;
    let end = raw[start..].find(')')? + start;
    let code = raw[start + 1..end].trim();
    if code.is_empty() { None } else { Some(code) }
}

/// Inputs to the quick single-recommendation flow.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub payment_type: String,
    pub amount: Decimal,
    pub route: Route,
}

impl SuggestionRequest {
    /// The caller must supply a payment type and a positive amount before
    /// asking for a suggestion.
    pub fn is_valid(&self) -> bool {
        !self.payment_type.is_empty() && self.amount > Decimal::ZERO
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Hash, Clone, Copy, clap::ValueEnum)]
pub enum Route {
    Global,
    Local,
    Regional,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_profile_completeness() {
        let mut profile = BusinessProfile::default();
        assert!(!profile.is_complete());

        profile.country = "Netherlands".to_string();
        profile.industry = "Software".to_string();
        assert!(!profile.is_complete());

        profile.annual_revenue_band = "200+M".to_string();
        assert!(profile.is_complete());
    }

    #[test]
    fn test_monthly_volume() {
        let profile = BusinessProfile {
            avg_transaction_amount: dec!(50000),
            avg_transactions_per_month: 10,
            ..BusinessProfile::default()
        };
        assert_eq!(profile.monthly_volume(), dec!(500000));
    }

    #[test]
    fn test_currency_code_extraction() {
        assert_eq!(currency_code("United States Dollar (USD)"), Some("USD"));
        assert_eq!(currency_code("Euro (EUR)"), Some("EUR"));
        // Bare codes and junk stay untouched
        assert_eq!(currency_code("USD"), None);
        assert_eq!(currency_code("Mystery ()"), None);
        assert_eq!(currency_code("Unbalanced (EUR"), None);
    }

    #[test]
    fn test_normalize_currencies() {
        let mut profile = BusinessProfile {
            selected_currencies: vec![
                "United States Dollar (USD)".to_string(),
                "EUR".to_string(),
                "British Pound (GBP)".to_string(),
            ],
            ..BusinessProfile::default()
        };
        profile.normalize_currencies();
        assert_eq!(profile.selected_currencies, vec!["USD", "EUR", "GBP"]);
    }

    #[test]
    fn test_suggestion_request_validity() {
        let request = SuggestionRequest {
            payment_type: "Venmo".to_string(),
            amount: dec!(500),
            route: Route::Local,
        };
        assert!(request.is_valid());

        let zero_amount = SuggestionRequest {
            amount: Decimal::ZERO,
            ..request.clone()
        };
        assert!(!zero_amount.is_valid());

        let no_type = SuggestionRequest {
            payment_type: String::new(),
            ..request
        };
        assert!(!no_type.is_valid());
    }

    #[test]
    fn test_profile_deserialization_with_missing_fields() {
        let profile: BusinessProfile = serde_json::from_str(r#"{"country": "Canada"}"#).unwrap();
        assert_eq!(profile.country, "Canada");
        assert!(profile.industry.is_empty());
        assert_eq!(profile.avg_transactions_per_month, 0);
        assert!(!profile.is_complete());
    }
}
