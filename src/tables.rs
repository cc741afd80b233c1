use crate::profile::Route;
use std::collections::{HashMap, HashSet};

/// Per-gateway point adjustments for one attribute value.
pub type GatewayBonuses = HashMap<&'static str, u32>;

fn bonuses(entries: &[(&'static str, u32)]) -> GatewayBonuses {
    entries.iter().copied().collect()
}

/// The curated heuristic tables behind profile ranking.
///
/// These are hand-maintained opinions, not data derived from the catalog.
/// A gateway or attribute value missing from a table means "no opinion" and
/// contributes zero points, never a penalty or an error.
pub struct RankingTables {
    pub country: HashMap<&'static str, GatewayBonuses>,
    pub industry: HashMap<&'static str, GatewayBonuses>,
    pub revenue: HashMap<&'static str, GatewayBonuses>,
    pub high_volume: GatewayBonuses,
    pub medium_volume: GatewayBonuses,
    pub low_volume: GatewayBonuses,
    /// Gateways broad enough to earn currency/method breadth bonuses.
    pub global_gateways: HashSet<&'static str>,
}

impl Default for RankingTables {
    fn default() -> Self {
        let country = HashMap::from([
            (
                "United States",
                bonuses(&[("stripe", 20), ("square", 15), ("authorize", 15), ("paypal", 10)]),
            ),
            (
                "United Kingdom",
                bonuses(&[("adyen", 20), ("worldpay", 15), ("stripe", 15), ("paypal", 10)]),
            ),
            (
                "Germany",
                bonuses(&[("adyen", 20), ("cybersource", 15), ("paypal", 10), ("stripe", 15)]),
            ),
            (
                "Netherlands",
                bonuses(&[("adyen", 25), ("stripe", 15), ("paypal", 10)]),
            ),
            (
                "Canada",
                bonuses(&[("stripe", 20), ("paypal", 15), ("authorize", 10), ("square", 10)]),
            ),
            (
                "Australia",
                bonuses(&[("stripe", 20), ("paypal", 15), ("adyen", 15), ("square", 10)]),
            ),
        ]);

        let industry = HashMap::from([
            (
                "Software",
                bonuses(&[("stripe", 20), ("braintree", 15), ("adyen", 10)]),
            ),
            (
                "Retail",
                bonuses(&[("square", 20), ("paypal", 15), ("adyen", 15), ("worldpay", 10)]),
            ),
            (
                "Financial Services",
                bonuses(&[("cybersource", 20), ("adyen", 15), ("authorize", 10)]),
            ),
            (
                "Healthcare",
                bonuses(&[("authorize", 15), ("cybersource", 15), ("stripe", 10)]),
            ),
            (
                "Education",
                bonuses(&[("paypal", 15), ("stripe", 15), ("authorize", 10)]),
            ),
        ]);

        let revenue = HashMap::from([
            (
                "0-20 M",
                bonuses(&[("stripe", 15), ("square", 15), ("paypal", 10)]),
            ),
            (
                "20-50 M",
                bonuses(&[("stripe", 15), ("adyen", 10), ("braintree", 10), ("authorize", 10)]),
            ),
            (
                "50-200 M",
                bonuses(&[("adyen", 20), ("cybersource", 15), ("worldpay", 10)]),
            ),
            (
                "200+M",
                bonuses(&[("adyen", 25), ("cybersource", 20), ("worldpay", 15)]),
            ),
        ]);

        Self {
            country,
            industry,
            revenue,
            high_volume: bonuses(&[
                ("adyen", 15),
                ("cybersource", 15),
                ("worldpay", 10),
                ("stripe", 10),
            ]),
            medium_volume: bonuses(&[
                ("stripe", 10),
                ("braintree", 10),
                ("paypal", 8),
                ("adyen", 8),
            ]),
            low_volume: bonuses(&[
                ("stripe", 15),
                ("square", 15),
                ("paypal", 12),
                ("authorize", 10),
            ]),
            global_gateways: HashSet::from(["adyen", "stripe", "paypal", "cybersource", "worldpay"]),
        }
    }
}

/// Tables for the standalone quick-suggestion flow.
///
/// Independent of `RankingTables`; the two flows were tuned separately and
/// share nothing but the catalog.
pub struct SuggestionTables {
    /// Applied when the transaction amount exceeds the enterprise threshold.
    pub enterprise_amount: GatewayBonuses,
    /// Applied otherwise.
    pub local_amount: GatewayBonuses,
    pub route: HashMap<Route, GatewayBonuses>,
}

impl Default for SuggestionTables {
    fn default() -> Self {
        Self {
            enterprise_amount: bonuses(&[
                ("adyen", 30),
                ("stripe", 25),
                ("cybersource", 20),
                ("worldpay", 15),
            ]),
            local_amount: bonuses(&[
                ("authorize", 25),
                ("square", 25),
                ("paypal", 20),
                ("stripe", 15),
            ]),
            route: HashMap::from([
                (
                    Route::Global,
                    bonuses(&[("adyen", 20), ("stripe", 15), ("paypal", 10)]),
                ),
                (
                    Route::Local,
                    bonuses(&[("square", 20), ("authorize", 15), ("paypal", 10)]),
                ),
                (
                    Route::Regional,
                    bonuses(&[("adyen", 15), ("stripe", 15), ("worldpay", 10), ("cybersource", 10)]),
                ),
            ]),
        }
    }
}
