use chrono::{NaiveDate, Utc};
use rahgozar_catalog::{CurrencyDelivery, FeeKind, Quote};
use rahgozar_core::{delocalize_digits, MessageKey};
use rahgozar_session::SessionStore;

use super::known_currency;
use crate::flow::{FlowContext, WizardFlow};
use crate::stepper::Step;
use crate::{validate, WizardError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyDeliveryDraft {
    pub currency_code: String,
    pub amount: u32,
    pub address: String,
    pub phone_number: String,
    pub delivery_date: Option<NaiveDate>,
}

/// Currency couriered to the customer's door.
pub struct CurrencyDeliveryFlow;

impl WizardFlow for CurrencyDeliveryFlow {
    type Draft = CurrencyDeliveryDraft;
    type Committed = CurrencyDelivery;

    const NAME: &'static str = "currency_delivery";
    const TX_PREFIX: &'static str = "PG-DEL-";
    const TITLE: MessageKey = MessageKey::CurrencyDelivery;

    fn steps() -> Vec<Step<Self::Draft>> {
        vec![
            Step::collect(MessageKey::StepSelectCurrency, |d: &CurrencyDeliveryDraft, catalog| {
                known_currency(catalog, &d.currency_code)?;
                validate::positive("amount", d.amount)
            }),
            Step::collect(MessageKey::StepDeliveryDetails, |d: &CurrencyDeliveryDraft, _| {
                validate::required("address", &d.address)?;
                validate::mobile_number("phone_number", &d.phone_number)?;
                validate::present("delivery_date", &d.delivery_date)
            }),
            Step::review(),
            Step::confirmed(),
        ]
    }

    fn quote(draft: &Self::Draft, ctx: &FlowContext<'_>) -> Quote {
        ctx.catalog
            .currency(&draft.currency_code)
            .map(|c| ctx.quotes.quote(FeeKind::Delivery, draft.amount, c.sell_rate_rial))
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
        let delivery_date = draft
            .delivery_date
            .ok_or_else(|| WizardError::UnknownItem("delivery_date".to_string()))?;
        Ok(CurrencyDelivery {
            transaction_id,
            currency_code: currency.code.clone(),
            amount: draft.amount,
            address: draft.address.trim().to_string(),
            phone_number: delocalize_digits(draft.phone_number.trim()),
            delivery_date,
            quote,
            created_at: Utc::now(),
        })
    }

    fn publish(store: &mut SessionStore, committed: Self::Committed) {
        store.update_currency_delivery(committed);
    }

    fn describe(draft: &Self::Draft) -> String {
        format!("{} {} delivered", draft.amount, draft.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::Harness;
    use crate::WizardRunner;
    use rahgozar_core::ids::matches_format;
    use rahgozar_shared::SlotKind;

    #[test]
    fn test_delivery_details_gated_on_date() {
        let h = Harness::new();
        let ctx = FlowContext::new(&h.catalog, &h.quotes);
        let mut runner = WizardRunner::<CurrencyDeliveryFlow>::with_draft(CurrencyDeliveryDraft {
            currency_code: "AED".to_string(),
            amount: 500,
            address: "Valiasr St., No. 4".to_string(),
            phone_number: "09121234567".to_string(),
            delivery_date: None,
        });
        runner.next(&ctx).unwrap();
        assert!(matches!(
            runner.next(&ctx),
            Err(WizardError::StepIncomplete { field: "delivery_date", .. })
        ));
        runner.draft_mut().unwrap().delivery_date = NaiveDate::from_ymd_opt(2026, 11, 9);
        assert_eq!(runner.next(&ctx).unwrap(), 3);
    }

    #[tokio::test]
    async fn test_confirm_replaces_earlier_flow() {
        let mut h = Harness::new();
        let flight = h.catalog.flight(1).cloned().unwrap();
        h.store.select_flight(flight);

        let ctx = FlowContext::new(&h.catalog, &h.quotes);
        let mut runner = WizardRunner::<CurrencyDeliveryFlow>::with_draft(CurrencyDeliveryDraft {
            currency_code: "USD".to_string(),
            amount: 300,
            address: "Pasdaran Ave.".to_string(),
            phone_number: "۰۹۱۲۱۲۳۴۵۶۷".to_string(),
            delivery_date: NaiveDate::from_ymd_opt(2026, 11, 10),
        });
        runner.next(&ctx).unwrap();
        runner.next(&ctx).unwrap();
        let committed = runner
            .confirm(&ctx, &mut h.store, &mut h.ids, &h.gateway)
            .await
            .unwrap();

        assert!(matches_format(&committed.transaction_id, "PG-DEL-"));
        assert_eq!(committed.phone_number, "09121234567");
        assert_eq!(h.store.session().occupied(), vec![SlotKind::CurrencyDelivery]);
    }
}
