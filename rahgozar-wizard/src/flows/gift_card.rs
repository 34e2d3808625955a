use chrono::Utc;
use rahgozar_catalog::{Catalog, FeeKind, GiftCardBrand, GiftCardPurchase, Quote};
use rahgozar_core::MessageKey;
use rahgozar_session::SessionStore;

use crate::flow::{FlowContext, WizardFlow};
use crate::stepper::{MissingField, Step};
use crate::{validate, WizardError};

#[derive(Debug, Clone, PartialEq)]
pub struct GiftCardDraft {
    pub brand_id: Option<u32>,
    pub denomination: Option<u32>,
    pub quantity: u32,
    pub recipient_email: String,
}

impl Default for GiftCardDraft {
    fn default() -> Self {
        Self {
            brand_id: None,
            denomination: None,
            quantity: 1,
            recipient_email: String::new(),
        }
    }
}

fn brand<'a>(catalog: &'a Catalog, draft: &GiftCardDraft) -> Option<&'a GiftCardBrand> {
    draft.brand_id.and_then(|id| catalog.gift_card_brand(id))
}

/// Buy gift cards delivered by email.
pub struct GiftCardFlow;

impl WizardFlow for GiftCardFlow {
    type Draft = GiftCardDraft;
    type Committed = GiftCardPurchase;

    const NAME: &'static str = "gift_card_purchase";
    const TX_PREFIX: &'static str = "PG-GC-";
    const TITLE: MessageKey = MessageKey::GiftCards;

    fn steps() -> Vec<Step<Self::Draft>> {
        vec![
            Step::collect(MessageKey::StepChooseGiftCard, |d: &GiftCardDraft, catalog| {
                let brand = brand(catalog, d).ok_or_else(|| MissingField::required("brand_id"))?;
                match d.denomination {
                    Some(value) if brand.denominations.contains(&value) => {}
                    _ => return Err(MissingField::required("denomination")),
                }
                validate::positive("quantity", d.quantity)?;
                validate::email("recipient_email", &d.recipient_email)
            }),
            Step::review(),
            Step::confirmed(),
        ]
    }

    fn quote(draft: &Self::Draft, ctx: &FlowContext<'_>) -> Quote {
        let rate = brand(ctx.catalog, draft)
            .and_then(|b| ctx.catalog.currency(&b.currency_code))
            .map(|c| c.sell_rate_rial);
        match (rate, draft.denomination) {
            (Some(rate), Some(value)) => ctx.quotes.quote(
                FeeKind::GiftCard,
                value.saturating_mul(draft.quantity),
                rate,
            ),
            _ => Quote::default(),
        }
    }

    fn commit(
        draft: &Self::Draft,
        transaction_id: String,
        quote: Quote,
        ctx: &FlowContext<'_>,
    ) -> Result<Self::Committed, WizardError> {
        let brand = brand(ctx.catalog, draft)
            .ok_or_else(|| WizardError::UnknownItem(format!("gift card brand {:?}", draft.brand_id)))?;
        Ok(GiftCardPurchase {
            transaction_id,
            brand_id: brand.id,
            brand_name: brand.name.clone(),
            denomination: draft.denomination.unwrap_or_default(),
            quantity: draft.quantity,
            recipient_email: draft.recipient_email.trim().to_string(),
            quote,
            created_at: Utc::now(),
        })
    }

    fn publish(store: &mut SessionStore, committed: Self::Committed) {
        store.update_gift_card_purchase(committed);
    }

    fn describe(draft: &Self::Draft) -> String {
        format!(
            "{} x gift card {:?} ({:?})",
            draft.quantity, draft.brand_id, draft.denomination
        )
    }
}
