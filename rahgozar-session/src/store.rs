use chrono::Utc;
use rahgozar_catalog::{
    Bill, Car, CipService, CurrencyDelivery, CurrencyDeposit, CurrencyPurchase, Flight,
    ForeignPurchase, GiftCardPurchase, HealthFlow, Hotel, InsurancePlan, MedicalAppointment,
    Passenger, SeatSelection, TaxiFlow, TaxiRide, TopUp, Train, VisaService,
};
use rahgozar_shared::{SessionChange, SessionChanged};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::actions::SessionAction;
use crate::models::{Addition, Anchor, BookingSession};

const EVENT_CAPACITY: usize = 64;

/// Owns the booking session for the lifetime of the app and tells
/// subscribers (pages) whenever it changes.
#[derive(Debug)]
pub struct SessionStore {
    id: Uuid,
    session: BookingSession,
    sequence: u64,
    events: broadcast::Sender<SessionChanged>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            id: Uuid::new_v4(),
            session: BookingSession::default(),
            sequence: 0,
            events,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn session(&self) -> &BookingSession {
        &self.session
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionChanged> {
        self.events.subscribe()
    }

    /// Run an action through the reducer, then notify subscribers.
    pub fn dispatch(&mut self, action: SessionAction) -> SessionChange {
        let change = self.session.apply(action);
        self.sequence += 1;

        match &change {
            SessionChange::Anchored { slot } => {
                tracing::info!(session_id = %self.id, slot = %slot, "booking flow entered, session reset");
            }
            SessionChange::Added { slot } => {
                tracing::debug!(session_id = %self.id, slot = %slot, "booking slot filled");
                let lingering = self.session.lingering_additions();
                if !lingering.is_empty() {
                    tracing::debug!(session_id = %self.id, ?lingering, "additive slots outside the anchored flow");
                }
            }
            SessionChange::PassengersReplaced { count } => {
                tracing::debug!(session_id = %self.id, count, "passenger list replaced");
            }
            SessionChange::Cleared => {
                tracing::info!(session_id = %self.id, "booking session cleared");
            }
        }

        // No receivers is fine; nobody is rendering.
        let _ = self.events.send(SessionChanged {
            session_id: self.id,
            sequence: self.sequence,
            change: change.clone(),
            occupied: self.session.occupied(),
            timestamp: Utc::now().timestamp(),
        });

        change
    }

    // Entry points: clear everything, then set.

    pub fn select_flight(&mut self, flight: Flight) {
        self.dispatch(SessionAction::Enter(Anchor::Flight(flight)));
    }

    pub fn select_bill(&mut self, bill: Bill) {
        self.dispatch(SessionAction::Enter(Anchor::Bill(bill)));
    }

    pub fn select_top_up(&mut self, top_up: TopUp) {
        self.dispatch(SessionAction::Enter(Anchor::TopUp(top_up)));
    }

    pub fn update_currency_purchase(&mut self, purchase: CurrencyPurchase) {
        self.dispatch(SessionAction::Enter(Anchor::CurrencyPurchase(purchase)));
    }

    pub fn update_currency_deposit(&mut self, deposit: CurrencyDeposit) {
        self.dispatch(SessionAction::Enter(Anchor::CurrencyDeposit(deposit)));
    }

    pub fn update_currency_delivery(&mut self, delivery: CurrencyDelivery) {
        self.dispatch(SessionAction::Enter(Anchor::CurrencyDelivery(delivery)));
    }

    pub fn update_foreign_purchase(&mut self, purchase: ForeignPurchase) {
        self.dispatch(SessionAction::Enter(Anchor::ForeignPurchase(purchase)));
    }

    pub fn update_gift_card_purchase(&mut self, purchase: GiftCardPurchase) {
        self.dispatch(SessionAction::Enter(Anchor::GiftCardPurchase(purchase)));
    }

    pub fn start_health_flow(&mut self, flow: HealthFlow) {
        self.dispatch(SessionAction::Enter(Anchor::HealthFlow(flow)));
    }

    pub fn start_taxi_flow(&mut self, flow: TaxiFlow) {
        self.dispatch(SessionAction::Enter(Anchor::TaxiFlow(flow)));
    }

    // Additive: set one slot, leave the rest alone.

    pub fn select_hotel(&mut self, hotel: Hotel) {
        self.dispatch(SessionAction::Add(Addition::Hotel(hotel)));
    }

    pub fn select_train(&mut self, train: Train) {
        self.dispatch(SessionAction::Add(Addition::Train(train)));
    }

    pub fn select_ride(&mut self, ride: TaxiRide) {
        self.dispatch(SessionAction::Add(Addition::Ride(ride)));
    }

    pub fn select_car(&mut self, car: Car) {
        self.dispatch(SessionAction::Add(Addition::Car(car)));
    }

    pub fn select_cip(&mut self, cip: CipService) {
        self.dispatch(SessionAction::Add(Addition::Cip(cip)));
    }

    pub fn select_visa(&mut self, visa: VisaService) {
        self.dispatch(SessionAction::Add(Addition::Visa(visa)));
    }

    pub fn select_insurance(&mut self, plan: InsurancePlan) {
        self.dispatch(SessionAction::Add(Addition::Insurance(plan)));
    }

    pub fn select_appointment(&mut self, appointment: MedicalAppointment) {
        self.dispatch(SessionAction::Add(Addition::Appointment(appointment)));
    }

    pub fn update_seat_selection(&mut self, seats: SeatSelection) {
        self.dispatch(SessionAction::Add(Addition::Seats(seats)));
    }

    pub fn update_passengers(&mut self, passengers: Vec<Passenger>) {
        self.dispatch(SessionAction::UpdatePassengers(passengers));
    }

    pub fn clear_booking(&mut self) {
        self.dispatch(SessionAction::ClearBooking);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use rahgozar_catalog::{
        BillKind, CabinClass, HealthService, MobileOperator, Quote,
    };
    use rahgozar_shared::{Masked, SlotKind};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, d).unwrap()
    }

    fn flight(id: u32) -> Flight {
        Flight {
            id,
            airline: "Iran Air".to_string(),
            flight_number: format!("IR{}", id),
            origin: "THR".to_string(),
            destination: "MHD".to_string(),
            departure: day(2).and_hms_opt(8, 0, 0).unwrap(),
            arrival: day(2).and_hms_opt(9, 20, 0).unwrap(),
            cabin: CabinClass::Economy,
            price_rial: 30_000_000,
            seats_left: 9,
        }
    }

    fn bill(id: &str) -> Bill {
        Bill {
            bill_id: id.to_string(),
            payment_id: "5500".to_string(),
            kind: BillKind::Gas,
            amount_rial: 860_000,
            due_date: Some(day(10)),
        }
    }

    fn hotel() -> Hotel {
        Hotel {
            id: 4,
            name: "Parsian Azadi".to_string(),
            city: "Tehran".to_string(),
            stars: 5,
            nightly_rate_rial: 70_000_000,
            check_in: day(2),
            check_out: day(3),
        }
    }

    fn quote() -> Quote {
        Quote {
            base_rial: 1_050_000,
            fee_rial: 100_000,
            total_rial: 1_150_000,
        }
    }

    /// One dispatchable entry-point action per kind.
    fn entry_points() -> Vec<SessionAction> {
        let now = Utc::now();
        vec![
            SessionAction::Enter(Anchor::Flight(flight(1))),
            SessionAction::Enter(Anchor::Bill(bill("123"))),
            SessionAction::Enter(Anchor::TopUp(TopUp {
                operator: MobileOperator::Irancell,
                phone_number: "09351234567".to_string(),
                amount_rial: 200_000,
            })),
            SessionAction::Enter(Anchor::CurrencyPurchase(CurrencyPurchase {
                transaction_id: "PG-BUY-AAAAAAAAA".to_string(),
                currency_code: "USD".to_string(),
                amount: 1,
                national_id: Masked::from("0012345678"),
                quote: quote(),
                created_at: now,
            })),
            SessionAction::Enter(Anchor::CurrencyDeposit(CurrencyDeposit {
                transaction_id: "PG-DEP-AAAAAAAAA".to_string(),
                currency_code: "EUR".to_string(),
                amount: 1,
                account_holder: "Sara Karimi".to_string(),
                iban: Masked::from("DE89370400440532013000"),
                quote: quote(),
                created_at: now,
            })),
            SessionAction::Enter(Anchor::CurrencyDelivery(CurrencyDelivery {
                transaction_id: "PG-DEL-AAAAAAAAA".to_string(),
                currency_code: "USD".to_string(),
                amount: 1,
                address: "Valiasr St.".to_string(),
                phone_number: "09121234567".to_string(),
                delivery_date: day(4),
                quote: quote(),
                created_at: now,
            })),
            SessionAction::Enter(Anchor::ForeignPurchase(ForeignPurchase {
                transaction_id: "PG-FP-AAAAAAAAA".to_string(),
                merchant_url: "https://shop.example.com".to_string(),
                currency_code: "USD".to_string(),
                amount: 1,
                description: "Course fee".to_string(),
                quote: quote(),
                created_at: now,
            })),
            SessionAction::Enter(Anchor::GiftCardPurchase(GiftCardPurchase {
                transaction_id: "PG-GC-AAAAAAAAA".to_string(),
                brand_id: 1,
                brand_name: "Steam".to_string(),
                denomination: 10,
                quantity: 1,
                recipient_email: "a@example.com".to_string(),
                quote: quote(),
                created_at: now,
            })),
            SessionAction::Enter(Anchor::HealthFlow(HealthFlow {
                service: HealthService::DoctorVisit,
                city: "Tehran".to_string(),
                specialty: Some("Cardiology".to_string()),
            })),
            SessionAction::Enter(Anchor::TaxiFlow(TaxiFlow {
                pickup: "Azadi Sq.".to_string(),
                dropoff: "IKA".to_string(),
                vehicle_class: None,
                scheduled_for: None,
            })),
        ]
    }

    fn all_additions() -> Vec<SessionAction> {
        vec![
            SessionAction::Add(Addition::Hotel(hotel())),
            SessionAction::Add(Addition::Train(Train {
                id: 1,
                operator: "Raja".to_string(),
                origin: "Tehran".to_string(),
                destination: "Tabriz".to_string(),
                departure: day(5).and_hms_opt(20, 0, 0).unwrap(),
                compartment_capacity: 6,
                price_rial: 9_000_000,
            })),
            SessionAction::Add(Addition::Ride(TaxiRide {
                id: 1,
                vehicle_class: "Eco".to_string(),
                pickup: "Tajrish".to_string(),
                dropoff: "Vanak".to_string(),
                fare_rial: 1_100_000,
                eta_minutes: 6,
            })),
            SessionAction::Add(Addition::Car(Car {
                id: 1,
                model: "Peugeot 207".to_string(),
                provider: "Hamrah Rent".to_string(),
                daily_rate_rial: 25_000_000,
                pickup_date: day(2),
                return_date: day(5),
                with_driver: false,
            })),
            SessionAction::Add(Addition::Cip(CipService {
                id: 1,
                airport: "IKA".to_string(),
                terminal: "1".to_string(),
                service_name: "Departure CIP".to_string(),
                price_rial: 60_000_000,
            })),
            SessionAction::Add(Addition::Visa(VisaService {
                id: 1,
                country: "TR".to_string(),
                visa_type: "e-Visa".to_string(),
                processing_days: 3,
                price_rial: 45_000_000,
            })),
            SessionAction::Add(Addition::Insurance(InsurancePlan {
                id: 1,
                insurer: "Saman".to_string(),
                plan_name: "Schengen 30".to_string(),
                coverage_eur: 30_000,
                duration_days: 30,
                price_rial: 12_000_000,
            })),
            SessionAction::Add(Addition::Appointment(MedicalAppointment {
                id: 1,
                doctor_name: "Dr. Nazari".to_string(),
                specialty: "Cardiology".to_string(),
                clinic: "Atieh".to_string(),
                date: day(6),
                time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
                fee_rial: 3_500_000,
            })),
            SessionAction::Add(Addition::Seats(SeatSelection {
                flight_id: 1,
                seats: vec!["12A".to_string()],
                surcharge_rial: 0,
            })),
        ]
    }

    #[test]
    fn test_entry_points_are_mutually_exclusive() {
        let entries = entry_points();
        for a in &entries {
            for b in &entries {
                let mut store = SessionStore::new();
                store.dispatch(a.clone());
                store.update_passengers(vec![Passenger::adult("Ali", "Rezaei", "0012345678")]);
                store.dispatch(b.clone());

                let expected = b.slot().unwrap();
                assert_eq!(
                    store.session().occupied(),
                    vec![expected],
                    "{:?} then {:?}",
                    a.slot(),
                    b.slot()
                );
                assert!(store.session().passengers().is_empty());
            }
        }
    }

    #[test]
    fn test_entry_point_wipes_additive_slots() {
        let mut store = SessionStore::new();
        for action in all_additions() {
            store.dispatch(action);
        }
        assert_eq!(store.session().occupied().len(), SlotKind::ADDITIVE.len());

        store.select_bill(bill("1"));
        assert_eq!(store.session().occupied(), vec![SlotKind::Bill]);
    }

    #[test]
    fn test_additive_setter_does_not_clear() {
        let mut store = SessionStore::new();
        store.select_flight(flight(1));
        store.select_hotel(hotel());

        assert_eq!(store.session().selected_flight().unwrap().id, 1);
        assert_eq!(store.session().selected_hotel().unwrap().id, 4);
        assert!(store.session().lingering_additions().is_empty());
    }

    #[test]
    fn test_clear_is_total() {
        let mut store = SessionStore::new();
        store.select_flight(flight(1));
        for action in all_additions() {
            store.dispatch(action);
        }
        store.update_passengers(vec![
            Passenger::adult("Ali", "Rezaei", "0012345678"),
            Passenger::adult("Sara", "Rezaei", "0087654321"),
        ]);

        store.clear_booking();

        assert!(store.session().is_empty());
        assert!(store.session().occupied().is_empty());
        assert!(store.session().selected_flight().is_none());
        assert!(store.session().seat_selection().is_none());
        assert!(store.session().passengers().is_empty());
    }

    #[test]
    fn test_flight_then_bill_scenario() {
        let mut store = SessionStore::new();
        store.select_flight(flight(1));
        assert!(store.session().selected_hotel().is_none());

        store.select_bill(bill("123"));
        assert!(store.session().selected_flight().is_none());
        assert_eq!(store.session().selected_bill().unwrap().bill_id, "123");
    }

    #[test]
    fn test_update_passengers_replaces_list() {
        let mut store = SessionStore::new();
        store.select_flight(flight(1));
        store.update_passengers(vec![Passenger::adult("A", "B", "1111111111")]);
        store.update_passengers(vec![
            Passenger::adult("C", "D", "2222222222"),
            Passenger::adult("E", "F", "3333333333"),
        ]);
        let names: Vec<String> = store.session().passengers().iter().map(|p| p.full_name()).collect();
        assert_eq!(names, vec!["C D", "E F"]);
        assert!(store.session().selected_flight().is_some());
    }

    #[tokio::test]
    async fn test_subscribers_see_every_change() {
        let mut store = SessionStore::new();
        let mut rx = store.subscribe();

        store.select_flight(flight(2));
        store.select_hotel(hotel());
        store.clear_booking();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.sequence, 1);
        assert_eq!(first.change, SessionChange::Anchored { slot: SlotKind::Flight });

        let second = rx.recv().await.unwrap();
        assert_eq!(second.occupied, vec![SlotKind::Flight, SlotKind::Hotel]);

        let third = rx.recv().await.unwrap();
        assert_eq!(third.change, SessionChange::Cleared);
        assert!(third.occupied.is_empty());
        assert_eq!(third.session_id, store.id());
    }

    #[test]
    fn test_dispatch_without_subscribers() {
        let mut store = SessionStore::new();
        let change = store.dispatch(SessionAction::ClearBooking);
        assert_eq!(change, SessionChange::Cleared);
    }
}
