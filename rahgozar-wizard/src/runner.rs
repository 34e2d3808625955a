use rahgozar_catalog::Quote;
use rahgozar_core::{PaymentGateway, PaymentRequest, TransactionIdGenerator};
use rahgozar_session::SessionStore;

use crate::flow::{FlowContext, WizardFlow};
use crate::stepper::{Step, Stepper};
use crate::WizardError;

/// A live wizard page: its local draft plus the step cursor.
pub struct WizardRunner<F: WizardFlow> {
    draft: F::Draft,
    stepper: Stepper<F::Draft>,
    committed: Option<F::Committed>,
}

impl<F: WizardFlow> WizardRunner<F> {
    pub fn new() -> Self {
        Self::with_draft(F::Draft::default())
    }

    pub fn with_draft(draft: F::Draft) -> Self {
        Self {
            draft,
            stepper: Stepper::new(F::steps()),
            committed: None,
        }
    }

    pub fn draft(&self) -> &F::Draft {
        &self.draft
    }

    /// Form fields stay editable until the wizard is confirmed.
    pub fn draft_mut(&mut self) -> Option<&mut F::Draft> {
        if self.stepper.is_confirmed() {
            None
        } else {
            Some(&mut self.draft)
        }
    }

    pub fn step(&self) -> usize {
        self.stepper.step()
    }

    pub fn step_count(&self) -> usize {
        self.stepper.len()
    }

    pub fn current_step(&self) -> &Step<F::Draft> {
        self.stepper.current()
    }

    pub fn is_review(&self) -> bool {
        self.stepper.is_review()
    }

    pub fn is_confirmed(&self) -> bool {
        self.stepper.is_confirmed()
    }

    pub fn committed(&self) -> Option<&F::Committed> {
        self.committed.as_ref()
    }

    pub fn can_advance(&self, ctx: &FlowContext<'_>) -> bool {
        self.stepper.can_advance(&self.draft, ctx.catalog)
    }

    pub fn next(&mut self, ctx: &FlowContext<'_>) -> Result<usize, WizardError> {
        self.stepper.next(&self.draft, ctx.catalog)
    }

    pub fn back(&mut self) -> Result<usize, WizardError> {
        self.stepper.back()
    }

    pub fn quote(&self, ctx: &FlowContext<'_>) -> Quote {
        F::quote(&self.draft, ctx)
    }

    /// Review → pay → confirmed. Mints the transaction ID, promotes the draft
    /// into the session store and moves to the terminal step.
    pub async fn confirm(
        &mut self,
        ctx: &FlowContext<'_>,
        store: &mut SessionStore,
        ids: &mut TransactionIdGenerator,
        gateway: &dyn PaymentGateway,
    ) -> Result<F::Committed, WizardError> {
        if self.stepper.is_confirmed() {
            return Err(WizardError::AlreadyConfirmed);
        }
        if !self.stepper.is_review() {
            return Err(WizardError::NotAtReview {
                step: self.stepper.step(),
            });
        }
        self.stepper.validate_all(&self.draft, ctx.catalog)?;

        let quote = F::quote(&self.draft, ctx);
        if F::REQUIRES_PAYMENT {
            let request = PaymentRequest {
                flow: F::NAME.to_string(),
                amount_rial: quote.total_rial,
                description: F::describe(&self.draft),
            };
            let receipt = gateway.pay(&request).await?;
            tracing::debug!(flow = F::NAME, reference = %receipt.reference, "payment settled");
        }

        let transaction_id = ids.generate(F::TX_PREFIX);
        let committed = F::commit(&self.draft, transaction_id.clone(), quote, ctx)?;
        F::publish(store, committed.clone());
        self.stepper.complete();
        self.committed = Some(committed.clone());

        tracing::info!(
            flow = F::NAME,
            transaction_id = %transaction_id,
            total_rial = quote.total_rial,
            "wizard confirmed"
        );
        Ok(committed)
    }
}

impl<F: WizardFlow> Default for WizardRunner<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: WizardFlow> std::fmt::Debug for WizardRunner<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardRunner")
            .field("flow", &F::NAME)
            .field("step", &self.stepper.step())
            .field("draft", &self.draft)
            .field("committed", &self.committed)
            .finish()
    }
}
