use chrono::Utc;
use rahgozar_catalog::{CurrencyDeposit, FeeKind, Quote};
use rahgozar_core::{delocalize_digits, MessageKey};
use rahgozar_session::SessionStore;
use rahgozar_shared::Masked;

use super::known_currency;
use crate::flow::{FlowContext, WizardFlow};
use crate::stepper::Step;
use crate::{validate, WizardError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyDepositDraft {
    pub currency_code: String,
    pub amount: u32,
    pub account_holder: String,
    pub iban: Masked<String>,
}

/// Pay rials, have currency wired to a foreign account.
pub struct CurrencyDepositFlow;

impl WizardFlow for CurrencyDepositFlow {
    type Draft = CurrencyDepositDraft;
    type Committed = CurrencyDeposit;

    const NAME: &'static str = "currency_deposit";
    const TX_PREFIX: &'static str = "PG-DEP-";
    const TITLE: MessageKey = MessageKey::DepositCurrency;

    fn steps() -> Vec<Step<Self::Draft>> {
        vec![
            Step::collect(MessageKey::StepSelectCurrency, |d: &CurrencyDepositDraft, catalog| {
                known_currency(catalog, &d.currency_code)?;
                validate::positive("amount", d.amount)
            }),
            Step::collect(MessageKey::StepAccountDetails, |d: &CurrencyDepositDraft, _| {
                validate::required("account_holder", &d.account_holder)?;
                validate::iban("iban", d.iban.expose())
            }),
            Step::review(),
            Step::confirmed(),
        ]
    }

    fn quote(draft: &Self::Draft, ctx: &FlowContext<'_>) -> Quote {
        ctx.catalog
            .currency(&draft.currency_code)
            .map(|c| ctx.quotes.quote(FeeKind::Deposit, draft.amount, c.sell_rate_rial))
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
        let iban: String = delocalize_digits(draft.iban.expose())
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        Ok(CurrencyDeposit {
            transaction_id,
            currency_code: currency.code.clone(),
            amount: draft.amount,
            account_holder: draft.account_holder.trim().to_string(),
            iban: Masked(iban),
            quote,
            created_at: Utc::now(),
        })
    }

    fn publish(store: &mut SessionStore, committed: Self::Committed) {
        store.update_currency_deposit(committed);
    }

    fn describe(draft: &Self::Draft) -> String {
        format!("{} {} to {}", draft.amount, draft.currency_code, draft.iban)
    }
}
