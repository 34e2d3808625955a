use chrono::{NaiveDate, NaiveTime, Utc};
use rahgozar_catalog::{ExchangeAppointment, Quote};
use rahgozar_core::MessageKey;
use rahgozar_session::SessionStore;

use crate::flow::{FlowContext, WizardFlow};
use crate::stepper::{MissingField, Step};
use crate::{validate, WizardError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeAppointmentDraft {
    pub office_id: Option<u32>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub expert_id: Option<u32>,
}

/// Book an in-person visit with an exchange expert. Free, so no payment, and
/// the booking session is left untouched.
pub struct ExchangeAppointmentFlow;

impl WizardFlow for ExchangeAppointmentFlow {
    type Draft = ExchangeAppointmentDraft;
    type Committed = ExchangeAppointment;

    const NAME: &'static str = "exchange_appointment";
    const TX_PREFIX: &'static str = "PG-APT-";
    const TITLE: MessageKey = MessageKey::ExchangeAppointment;
    const REQUIRES_PAYMENT: bool = false;

    fn steps() -> Vec<Step<Self::Draft>> {
        vec![
            Step::collect(MessageKey::StepChooseOffice, |d: &ExchangeAppointmentDraft, catalog| {
                match d.office_id.and_then(|id| catalog.office(id)) {
                    Some(_) => Ok(()),
                    None => Err(MissingField::required("office_id")),
                }
            }),
            Step::collect(MessageKey::StepChooseDateTime, |d: &ExchangeAppointmentDraft, _| {
                validate::present("date", &d.date)?;
                validate::present("time", &d.time)
            }),
            Step::collect(MessageKey::StepChooseExpert, |d: &ExchangeAppointmentDraft, catalog| {
                match d.expert_id.and_then(|id| catalog.expert(id)) {
                    Some(expert) if Some(expert.office_id) == d.office_id => Ok(()),
                    _ => Err(MissingField::required("expert_id")),
                }
            }),
            Step::review(),
            Step::confirmed(),
        ]
    }

    fn quote(_draft: &Self::Draft, _ctx: &FlowContext<'_>) -> Quote {
        Quote::default()
    }

    fn commit(
        draft: &Self::Draft,
        transaction_id: String,
        _quote: Quote,
        ctx: &FlowContext<'_>,
    ) -> Result<Self::Committed, WizardError> {
        let office = draft
            .office_id
            .and_then(|id| ctx.catalog.office(id))
            .ok_or_else(|| WizardError::UnknownItem(format!("office {:?}", draft.office_id)))?;
        let expert = draft
            .expert_id
            .and_then(|id| ctx.catalog.expert(id))
            .ok_or_else(|| WizardError::UnknownItem(format!("expert {:?}", draft.expert_id)))?;
        let (date, time) = draft
            .date
            .zip(draft.time)
            .ok_or_else(|| WizardError::UnknownItem("appointment slot".to_string()))?;

        Ok(ExchangeAppointment {
            reference: transaction_id,
            office_id: office.id,
            office_name: office.name.clone(),
            date,
            time,
            expert_id: expert.id,
            expert_name: expert.name.clone(),
            created_at: Utc::now(),
        })
    }

    fn publish(_store: &mut SessionStore, committed: Self::Committed) {
        tracing::debug!(reference = %committed.reference, "appointment kept on the confirmation page only");
    }

    fn describe(draft: &Self::Draft) -> String {
        format!("appointment at office {:?}", draft.office_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::testing::Harness;
    use crate::WizardRunner;
    use async_trait::async_trait;
    use rahgozar_core::ids::matches_format;
    use rahgozar_core::{PaymentError, PaymentGateway, PaymentReceipt, PaymentRequest};

    /// Fails the test if anything tries to charge.
    struct NoPayments;

    #[async_trait]
    impl PaymentGateway for NoPayments {
        async fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
            panic!("unexpected payment for {}", request.flow);
        }
    }

    #[test]
    fn test_each_step_gates_its_own_field() {
        let h = Harness::new();
        let ctx = FlowContext::new(&h.catalog, &h.quotes);
        let mut runner = WizardRunner::<ExchangeAppointmentFlow>::new();
        assert_eq!(runner.step_count(), 5);

        assert!(!runner.can_advance(&ctx));
        runner.draft_mut().unwrap().office_id = Some(1);
        assert_eq!(runner.next(&ctx).unwrap(), 2);

        runner.draft_mut().unwrap().date = NaiveDate::from_ymd_opt(2026, 11, 12);
        assert!(matches!(
            runner.next(&ctx),
            Err(WizardError::StepIncomplete { step: 2, field: "time", .. })
        ));
        runner.draft_mut().unwrap().time = NaiveTime::from_hms_opt(11, 0, 0);
        assert_eq!(runner.next(&ctx).unwrap(), 3);

        // expert 3 works at office 2
        runner.draft_mut().unwrap().expert_id = Some(3);
        assert!(!runner.can_advance(&ctx));
        runner.draft_mut().unwrap().expert_id = Some(2);
        assert_eq!(runner.next(&ctx).unwrap(), 4);
        assert!(runner.is_review());
    }

    #[tokio::test]
    async fn test_confirm_skips_payment_and_session() {
        let mut h = Harness::new();
        let ctx = FlowContext::new(&h.catalog, &h.quotes);
        let mut runner =
            WizardRunner::<ExchangeAppointmentFlow>::with_draft(ExchangeAppointmentDraft {
                office_id: Some(2),
                date: NaiveDate::from_ymd_opt(2026, 11, 14),
                time: NaiveTime::from_hms_opt(9, 30, 0),
                expert_id: Some(3),
            });
        for _ in 0..3 {
            runner.next(&ctx).unwrap();
        }

        let appointment = runner
            .confirm(&ctx, &mut h.store, &mut h.ids, &NoPayments)
            .await
            .unwrap();

        assert!(matches_format(&appointment.reference, "PG-APT-"));
        assert_eq!(appointment.expert_name, "Leila Farahani");
        assert!(h.store.session().is_empty());
        assert_eq!(runner.step(), 5);
    }
}
