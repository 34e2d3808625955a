use rahgozar_catalog::{Catalog, Quote, QuoteEngine};
use rahgozar_core::MessageKey;
use rahgozar_session::SessionStore;

use crate::stepper::Step;
use crate::WizardError;

/// Read-only inputs every flow prices and commits against.
#[derive(Debug, Clone, Copy)]
pub struct FlowContext<'a> {
    pub catalog: &'a Catalog,
    pub quotes: &'a QuoteEngine,
}

impl<'a> FlowContext<'a> {
    pub fn new(catalog: &'a Catalog, quotes: &'a QuoteEngine) -> Self {
        Self { catalog, quotes }
    }
}

/// One multi-step purchase form: what it collects, how it is priced and
/// where the committed result goes.
pub trait WizardFlow {
    type Draft: Default + Clone + std::fmt::Debug;
    type Committed: Clone + std::fmt::Debug;

    /// Log label, e.g. `currency_purchase`.
    const NAME: &'static str;
    /// Prepended to the random part of every transaction ID.
    const TX_PREFIX: &'static str;
    const TITLE: MessageKey;
    /// Flows without a price skip the payment gateway.
    const REQUIRES_PAYMENT: bool = true;

    fn steps() -> Vec<Step<Self::Draft>>;

    /// Zero when the draft cannot be priced yet.
    fn quote(draft: &Self::Draft, ctx: &FlowContext<'_>) -> Quote;

    fn commit(
        draft: &Self::Draft,
        transaction_id: String,
        quote: Quote,
        ctx: &FlowContext<'_>,
    ) -> Result<Self::Committed, WizardError>;

    /// Push the committed record into the session through its entry point.
    fn publish(store: &mut SessionStore, committed: Self::Committed);

    fn describe(draft: &Self::Draft) -> String;
}
