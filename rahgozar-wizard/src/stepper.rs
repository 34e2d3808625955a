use rahgozar_catalog::Catalog;
use rahgozar_core::MessageKey;

use crate::WizardError;

/// Why a step cannot be left yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    pub field: &'static str,
    pub message: MessageKey,
}

impl MissingField {
    pub fn new(field: &'static str, message: MessageKey) -> Self {
        Self { field, message }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, MessageKey::FieldRequired)
    }
}

pub type Validator<D> = fn(&D, &Catalog) -> Result<(), MissingField>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Gathers input; gated by its validator.
    Collect,
    /// Shows the quote; left only through confirm.
    Review,
    /// Terminal.
    Confirmed,
}

pub struct Step<D> {
    pub title: MessageKey,
    pub kind: StepKind,
    validate: Validator<D>,
}

fn always_ok<D>(_: &D, _: &Catalog) -> Result<(), MissingField> {
    Ok(())
}

impl<D> Step<D> {
    pub fn collect(title: MessageKey, validate: Validator<D>) -> Self {
        Self {
            title,
            kind: StepKind::Collect,
            validate,
        }
    }

    pub fn review() -> Self {
        Self {
            title: MessageKey::StepReviewAndPay,
            kind: StepKind::Review,
            validate: always_ok::<D>,
        }
    }

    pub fn confirmed() -> Self {
        Self {
            title: MessageKey::StepConfirmed,
            kind: StepKind::Confirmed,
            validate: always_ok::<D>,
        }
    }

    pub fn check(&self, draft: &D, catalog: &Catalog) -> Result<(), MissingField> {
        (self.validate)(draft, catalog)
    }
}

impl<D> std::fmt::Debug for Step<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("title", &self.title)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Integer step cursor shared by every wizard. Steps are numbered from 1;
/// the cursor only ever moves by one.
#[derive(Debug)]
pub struct Stepper<D> {
    steps: Vec<Step<D>>,
    index: usize,
}

impl<D> Stepper<D> {
    /// Keeps the collecting steps in order and always ends with exactly one
    /// review step and the confirmed step, so the cursor never points past
    /// the list.
    pub(crate) fn new(mut steps: Vec<Step<D>>) -> Self {
        steps.retain(|s| s.kind == StepKind::Collect);
        steps.push(Step::review());
        steps.push(Step::confirmed());
        Self { steps, index: 0 }
    }

    /// 1-based position of the cursor.
    pub fn step(&self) -> usize {
        self.index + 1
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current(&self) -> &Step<D> {
        &self.steps[self.index]
    }

    pub fn titles(&self) -> Vec<MessageKey> {
        self.steps.iter().map(|s| s.title).collect()
    }

    pub fn is_review(&self) -> bool {
        self.current().kind == StepKind::Review
    }

    pub fn is_confirmed(&self) -> bool {
        self.current().kind == StepKind::Confirmed
    }

    /// Whether the "next" button is enabled.
    pub fn can_advance(&self, draft: &D, catalog: &Catalog) -> bool {
        self.current().kind == StepKind::Collect && self.current().check(draft, catalog).is_ok()
    }

    pub fn next(&mut self, draft: &D, catalog: &Catalog) -> Result<usize, WizardError> {
        let step = self.current();
        match step.kind {
            StepKind::Review => return Err(WizardError::ConfirmRequired),
            StepKind::Confirmed => return Err(WizardError::AlreadyConfirmed),
            StepKind::Collect => {}
        }

        if let Err(missing) = step.check(draft, catalog) {
            tracing::debug!(step = self.step(), field = missing.field, "step gated");
            return Err(WizardError::StepIncomplete {
                step: self.step(),
                field: missing.field,
                message: missing.message,
            });
        }

        self.index += 1;
        tracing::debug!(step = self.step(), "wizard advanced");
        Ok(self.step())
    }

    pub fn back(&mut self) -> Result<usize, WizardError> {
        if self.is_confirmed() {
            return Err(WizardError::AlreadyConfirmed);
        }
        if self.index == 0 {
            return Err(WizardError::AtFirstStep);
        }
        self.index -= 1;
        tracing::debug!(step = self.step(), "wizard went back");
        Ok(self.step())
    }

    /// Re-runs every collecting step's validator, first failure wins.
    pub fn validate_all(&self, draft: &D, catalog: &Catalog) -> Result<(), WizardError> {
        for (i, step) in self.steps.iter().enumerate() {
            if step.kind != StepKind::Collect {
                continue;
            }
            step.check(draft, catalog)
                .map_err(|missing| WizardError::StepIncomplete {
                    step: i + 1,
                    field: missing.field,
                    message: missing.message,
                })?;
        }
        Ok(())
    }

    /// Jump from review to the terminal step. Only the runner calls this,
    /// after the transaction has been committed.
    pub(crate) fn complete(&mut self) {
        self.index = self.steps.len() - 1;
    }
}
