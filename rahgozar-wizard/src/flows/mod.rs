mod currency_delivery;
mod currency_deposit;
mod currency_purchase;
mod exchange_appointment;
mod foreign_purchase;
mod gift_card;

pub use currency_delivery::{CurrencyDeliveryDraft, CurrencyDeliveryFlow};
pub use currency_deposit::{CurrencyDepositDraft, CurrencyDepositFlow};
pub use currency_purchase::{CurrencyPurchaseDraft, CurrencyPurchaseFlow};
pub use exchange_appointment::{ExchangeAppointmentDraft, ExchangeAppointmentFlow};
pub use foreign_purchase::{ForeignPurchaseDraft, ForeignPurchaseFlow};
pub use gift_card::{GiftCardDraft, GiftCardFlow};

use rahgozar_catalog::{Catalog, Currency};

use crate::stepper::MissingField;
use crate::validate;

/// Shared first-step check for the currency flows.
fn known_currency<'a>(
    catalog: &'a Catalog,
    code: &str,
) -> Result<&'a Currency, MissingField> {
    validate::required("currency_code", code)?;
    catalog
        .currency(code)
        .ok_or_else(|| MissingField::required("currency_code"))
}


#[cfg(test)]
pub(crate) mod testing {
    use rahgozar_catalog::{Catalog, QuoteEngine};
    use rahgozar_core::{SimulatedGateway, TransactionIdGenerator};
    use rahgozar_session::SessionStore;

    pub struct Harness {
        pub catalog: Catalog,
        pub quotes: QuoteEngine,
        pub store: SessionStore,
        pub ids: TransactionIdGenerator,
        pub gateway: SimulatedGateway,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                catalog: Catalog::mock(),
                quotes: QuoteEngine::default(),
                store: SessionStore::new(),
                ids: TransactionIdGenerator::seeded(11),
                gateway: SimulatedGateway::instant(),
            }
        }
    }
}
