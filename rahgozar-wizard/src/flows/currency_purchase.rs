use chrono::Utc;
use rahgozar_catalog::{CurrencyPurchase, FeeKind, Quote};
use rahgozar_core::{delocalize_digits, MessageKey};
use rahgozar_session::SessionStore;
use rahgozar_shared::Masked;

use super::known_currency;
use crate::flow::{FlowContext, WizardFlow};
use crate::stepper::Step;
use crate::{validate, WizardError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyPurchaseDraft {
    pub currency_code: String,
    pub amount: u32,
    pub national_id: Masked<String>,
}

/// Buy cash currency at an exchange office.
pub struct CurrencyPurchaseFlow;

impl WizardFlow for CurrencyPurchaseFlow {
    type Draft = CurrencyPurchaseDraft;
    type Committed = CurrencyPurchase;

    const NAME: &'static str = "currency_purchase";
    const TX_PREFIX: &'static str = "PG-BUY-";
    const TITLE: MessageKey = MessageKey::BuyCurrency;

    fn steps() -> Vec<Step<Self::Draft>> {
        vec![
            Step::collect(MessageKey::StepSelectCurrency, |d: &CurrencyPurchaseDraft, catalog| {
                known_currency(catalog, &d.currency_code)?;
                validate::positive("amount", d.amount)?;
                validate::national_id("national_id", d.national_id.expose())
            }),
            Step::review(),
            Step::confirmed(),
        ]
    }

    fn quote(draft: &Self::Draft, ctx: &FlowContext<'_>) -> Quote {
        ctx.catalog
            .currency(&draft.currency_code)
            .map(|c| ctx.quotes.quote(FeeKind::Purchase, draft.amount, c.sell_rate_rial))
            .unwrap_or_default()
    }

    fn commit(
        draft: &Self::Draft,
        transaction_id: String,
        quote: Quote,
        ctx: &FlowContext<'_>,
    ) -> Result<Self::Committed, WizardError> {
        let currency = ctx
            .catalog
            .currency(&draft.currency_code)
            .ok_or_else(|| WizardError::UnknownItem(draft.currency_code.clone()))?;
        Ok(CurrencyPurchase {
            transaction_id,
            currency_code: currency.code.clone(),
            amount: draft.amount,
            national_id: Masked(delocalize_digits(draft.national_id.expose().trim())),
            quote,
            created_at: Utc::now(),
        })
    }

    fn publish(store: &mut SessionStore, committed: Self::Committed) {
        store.update_currency_purchase(committed);
    }

    fn describe(draft: &Self::Draft) -> String {
        format!("{} {}", draft.amount, draft.currency_code)
    }
}
