use serde::{Deserialize, Serialize};

/// Rial breakdown shown on a review step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Quote {
    pub base_rial: i64,
    pub fee_rial: i64,
    pub total_rial: i64,
}

/// Which surcharge applies on top of the service fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    Purchase,
    Deposit,
    Delivery,
    ForeignPurchase,
    GiftCard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    /// Service fee in basis points of the base amount.
    pub service_fee_bps: u32,
    pub min_fee_rial: i64,
    pub wire_fee_rial: i64,
    pub delivery_fee_rial: i64,
    /// Fees are rounded up to a multiple of this.
    pub rounding_unit_rial: i64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            service_fee_bps: 100,
            min_fee_rial: 100_000,
            wire_fee_rial: 2_500_000,
            delivery_fee_rial: 1_500_000,
            rounding_unit_rial: 10_000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    config: QuoteConfig,
}

impl QuoteEngine {
    pub fn new(config: QuoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Quote `units` of something priced at `rate_rial` per unit.
    pub fn quote(&self, kind: FeeKind, units: u32, rate_rial: i64) -> Quote {
        let base_rial = rate_rial.saturating_mul(units as i64);
        if base_rial <= 0 {
            return Quote::default();
        }

        let service = (base_rial as i128 * self.config.service_fee_bps as i128 / 10_000) as i64;
        let surcharge = match kind {
            FeeKind::Deposit => self.config.wire_fee_rial,
            FeeKind::Delivery => self.config.delivery_fee_rial,
            FeeKind::Purchase | FeeKind::ForeignPurchase | FeeKind::GiftCard => 0,
        };
        let fee_rial = self.round_up(
            service
                .max(self.config.min_fee_rial)
                .saturating_add(surcharge),
        );

        Quote {
            base_rial,
            fee_rial,
            total_rial: base_rial.saturating_add(fee_rial),
        }
    }

    fn round_up(&self, amount: i64) -> i64 {
        let unit = self.config.rounding_unit_rial;
        if unit <= 1 {
            return amount;
        }
        let remainder = amount % unit;
        if remainder == 0 {
            amount
        } else {
            amount.saturating_add(unit - remainder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_quote() {
        let engine = QuoteEngine::default();
        // 100 units at 1,000,000 rial, 1% fee
        let quote = engine.quote(FeeKind::Purchase, 100, 1_000_000);
        assert_eq!(quote.base_rial, 100_000_000);
        assert_eq!(quote.fee_rial, 1_000_000);
        assert_eq!(quote.total_rial, 101_000_000);
    }

    #[test]
    fn test_minimum_fee_and_rounding() {
        let engine = QuoteEngine::default();
        let quote = engine.quote(FeeKind::GiftCard, 1, 123_456);
        assert_eq!(quote.fee_rial, 100_000);

        let engine = QuoteEngine::new(QuoteConfig {
            min_fee_rial: 12_345,
            ..QuoteConfig::default()
        });
        assert_eq!(engine.quote(FeeKind::GiftCard, 1, 1_000).fee_rial, 20_000);
    }

    #[test]
    fn test_delivery_adds_surcharge() {
        let engine = QuoteEngine::default();
        let purchase = engine.quote(FeeKind::Purchase, 10, 1_000_000);
        let delivery = engine.quote(FeeKind::Delivery, 10, 1_000_000);
        assert_eq!(delivery.fee_rial - purchase.fee_rial, 1_500_000);
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let engine = QuoteEngine::default();
        let quote = engine.quote(FeeKind::Purchase, u32::MAX, 3_000_000_000);
        assert_eq!(quote.base_rial, i64::MAX);
        assert!(quote.fee_rial > 0);
        assert_eq!(quote.total_rial, i64::MAX);

        let quote = engine.quote(FeeKind::Deposit, u32::MAX, i64::MAX);
        assert_eq!(quote.total_rial, i64::MAX);
    }

    #[test]
    fn test_zero_amount_is_free() {
        let engine = QuoteEngine::default();
        assert_eq!(engine.quote(FeeKind::Deposit, 0, 1_000_000), Quote::default());
    }
}
