use crate::catalog::Catalog;
use crate::error::{AdvisorError, Result};
use crate::gateway::{GatewayRecord, ScoredGateway};
use crate::profile::{BusinessProfile, SuggestionRequest};
use crate::tables::{GatewayBonuses, RankingTables, SuggestionTables};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BASE_SCORE: u32 = 50;
const MAX_SCORE: u32 = 100;
const MIN_MATCH_SCORE: u32 = 30;
const MAX_RESULTS: usize = 6;
const BREADTH_BONUS: u32 = 10;
const CURRENCY_BREADTH: usize = 3;
const METHOD_BREADTH: usize = 5;
const SUPPORT_BONUS: u32 = 50;

// Boundaries are strict: a volume of exactly 100_000 is medium, 10_000 is low.
const HIGH_VOLUME_THRESHOLD: Decimal = dec!(100000);
const MEDIUM_VOLUME_THRESHOLD: Decimal = dec!(10000);
const ENTERPRISE_AMOUNT_THRESHOLD: Decimal = dec!(10000);

/// Scores and ranks catalog gateways against a business profile.
///
/// Pure over its inputs: the catalog and tables are immutable after
/// construction and every call builds its own output, so shared references
/// to an engine are safe across threads with no synchronization.
pub struct RecommendationEngine {
    catalog: Catalog,
    ranking: RankingTables,
    suggestion: SuggestionTables,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ranking: RankingTables::default(),
            suggestion: SuggestionTables::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ranks the whole catalog against `profile`.
    ///
    /// Returns at most six gateways scoring above the match floor, best first,
    /// with the top entry flagged as recommended. Ties keep catalog order.
    /// An incomplete profile is refused rather than scored misleadingly.
    pub fn rank(&self, profile: &BusinessProfile) -> Result<Vec<ScoredGateway>> {
        if !profile.is_complete() {
            return Err(AdvisorError::IncompleteProfile(
                "country, industry and annual revenue band are required".to_string(),
            ));
        }

        let mut scored: Vec<ScoredGateway> = self
            .catalog
            .gateways()
            .iter()
            .map(|gateway| ScoredGateway {
                gateway: gateway.clone(),
                score: self.match_score(profile, gateway),
                is_recommended: false,
            })
            .filter(|entry| entry.score > MIN_MATCH_SCORE)
            .collect();

        // Stable sort: equal scores keep their catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(MAX_RESULTS);

        if let Some(top) = scored.first_mut() {
            top.is_recommended = true;
        }
        Ok(scored)
    }

    /// Computes one gateway's match percentage, independently of the rest of
    /// the catalog.
    fn match_score(&self, profile: &BusinessProfile, gateway: &GatewayRecord) -> u32 {
        let mut score = BASE_SCORE;

        score += table_bonus(&self.ranking.country, &profile.country, gateway);
        score += table_bonus(&self.ranking.industry, &profile.industry, gateway);
        score += table_bonus(&self.ranking.revenue, &profile.annual_revenue_band, gateway);
        score += gateway_bonus(self.volume_table(profile.monthly_volume()), gateway);

        let is_global = self.ranking.global_gateways.contains(gateway.id.as_str());
        if is_global && profile.selected_currencies.len() > CURRENCY_BREADTH {
            score += BREADTH_BONUS;
        }
        if is_global && profile.selected_payment_methods.len() > METHOD_BREADTH {
            score += BREADTH_BONUS;
        }

        // Upper clamp only; the tables never push a score below zero
        score.min(MAX_SCORE)
    }

    fn volume_table(&self, monthly_volume: Decimal) -> &GatewayBonuses {
        if monthly_volume > HIGH_VOLUME_THRESHOLD {
            &self.ranking.high_volume
        } else if monthly_volume > MEDIUM_VOLUME_THRESHOLD {
            &self.ranking.medium_volume
        } else {
            &self.ranking.low_volume
        }
    }

    /// Picks the single best gateway for the quick-suggestion flow, or `None`
    /// when the request is invalid or nothing scores above zero.
    ///
    /// First catalog entry wins among equal scores.
    pub fn suggest(&self, request: &SuggestionRequest) -> Option<&GatewayRecord> {
        if !request.is_valid() {
            return None;
        }

        let mut best: Option<(&GatewayRecord, u32)> = None;
        for gateway in self.catalog.gateways() {
            let score = self.suggestion_score(request, gateway);
            if score > 0 && best.is_none_or(|(_, top)| score > top) {
                best = Some((gateway, score));
            }
        }
        best.map(|(gateway, _)| gateway)
    }

    fn suggestion_score(&self, request: &SuggestionRequest, gateway: &GatewayRecord) -> u32 {
        let mut score = 0;

        if gateway.supports_payment_method(&request.payment_type) {
            score += SUPPORT_BONUS;
        }

        let amount_table = if request.amount > ENTERPRISE_AMOUNT_THRESHOLD {
            &self.suggestion.enterprise_amount
        } else {
            &self.suggestion.local_amount
        };
        score += gateway_bonus(amount_table, gateway);

        if let Some(route_table) = self.suggestion.route.get(&request.route) {
            score += gateway_bonus(route_table, gateway);
        }

        // No clamp in this flow
        score
    }
}

fn table_bonus(
    table: &std::collections::HashMap<&'static str, GatewayBonuses>,
    key: &str,
    gateway: &GatewayRecord,
) -> u32 {
    table.get(key).map_or(0, |entry| gateway_bonus(entry, gateway))
}

fn gateway_bonus(bonuses: &GatewayBonuses, gateway: &GatewayRecord) -> u32 {
    bonuses.get(gateway.id.as_str()).copied().unwrap_or(0)
}
