pub mod flow;
pub mod flows;
pub mod runner;
pub mod stepper;
pub mod validate;

pub use flow::{FlowContext, WizardFlow};
pub use flows::{
    CurrencyDeliveryDraft, CurrencyDeliveryFlow, CurrencyDepositDraft, CurrencyDepositFlow,
    CurrencyPurchaseDraft, CurrencyPurchaseFlow, ExchangeAppointmentDraft, ExchangeAppointmentFlow,
    ForeignPurchaseDraft, ForeignPurchaseFlow, GiftCardDraft, GiftCardFlow,
};
pub use runner::WizardRunner;
pub use stepper::{MissingField, Step, StepKind, Stepper};

use rahgozar_core::{MessageKey, PaymentError};

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Step {step} is incomplete: {field}")]
    StepIncomplete {
        step: usize,
        field: &'static str,
        message: MessageKey,
    },
    #[error("Already at the first step")]
    AtFirstStep,
    #[error("Review step must be confirmed, not skipped")]
    ConfirmRequired,
    #[error("Confirm is only allowed on the review step (currently at step {step})")]
    NotAtReview { step: usize },
    #[error("Wizard already confirmed")]
    AlreadyConfirmed,
    #[error("Unknown item: {0}")]
    UnknownItem(String),
    #[error(transparent)]
    Payment(#[from] PaymentError),
}
