use chrono::Utc;
use rahgozar_catalog::{FeeKind, ForeignPurchase, Quote};
use rahgozar_core::MessageKey;
use rahgozar_session::SessionStore;

use super::known_currency;
use crate::flow::{FlowContext, WizardFlow};
use crate::stepper::Step;
use crate::{validate, WizardError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForeignPurchaseDraft {
    pub merchant_url: String,
    pub currency_code: String,
    pub amount: u32,
    pub description: String,
}

/// Pay a foreign merchant on the customer's behalf.
pub struct ForeignPurchaseFlow;

impl WizardFlow for ForeignPurchaseFlow {
    type Draft = ForeignPurchaseDraft;
    type Committed = ForeignPurchase;

    const NAME: &'static str = "foreign_purchase";
    const TX_PREFIX: &'static str = "PG-FP-";
    const TITLE: MessageKey = MessageKey::ForeignPurchase;

    fn steps() -> Vec<Step<Self::Draft>> {
        vec![
            Step::collect(MessageKey::StepPurchaseDetails, |d: &ForeignPurchaseDraft, catalog| {
                validate::http_url("merchant_url", &d.merchant_url)?;
                known_currency(catalog, &d.currency_code)?;
                validate::positive("amount", d.amount)?;
                validate::required("description", &d.description)
            }),
            Step::review(),
            Step::confirmed(),
        ]
    }

    fn quote(draft: &Self::Draft, ctx: &FlowContext<'_>) -> Quote {
        ctx.catalog
            .currency(&draft.currency_code)
            .map(|c| {
                ctx.quotes
                    .quote(FeeKind::ForeignPurchase, draft.amount, c.sell_rate_rial)
            })
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
        Ok(ForeignPurchase {
            transaction_id,
            merchant_url: draft.merchant_url.trim().to_string(),
            currency_code: currency.code.clone(),
            amount: draft.amount,
            description: draft.description.trim().to_string(),
            quote,
            created_at: Utc::now(),
        })
    }

    fn publish(store: &mut SessionStore, committed: Self::Committed) {
        store.update_foreign_purchase(committed);
    }

    fn describe(draft: &Self::Draft) -> String {
        format!("{} {} at {}", draft.amount, draft.currency_code, draft.merchant_url)
    }
}
