use rahgozar_catalog::{
    Bill, Car, CipService, CurrencyDelivery, CurrencyDeposit, CurrencyPurchase, Flight,
    ForeignPurchase, GiftCardPurchase, HealthFlow, Hotel, InsurancePlan, MedicalAppointment,
    Passenger, SeatSelection, TaxiFlow, TaxiRide, TopUp, Train, VisaService,
};
use rahgozar_shared::SlotKind;
use serde::{Deserialize, Serialize};

/// The purchase a booking flow is anchored on. Only one can exist at a time,
/// which is what makes entry-point selections mutually exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Anchor {
    Flight(Flight),
    Bill(Bill),
    TopUp(TopUp),
    CurrencyPurchase(CurrencyPurchase),
    CurrencyDeposit(CurrencyDeposit),
    CurrencyDelivery(CurrencyDelivery),
    ForeignPurchase(ForeignPurchase),
    GiftCardPurchase(GiftCardPurchase),
    HealthFlow(HealthFlow),
    TaxiFlow(TaxiFlow),
}

impl Anchor {
    pub fn slot(&self) -> SlotKind {
        match self {
            Anchor::Flight(_) => SlotKind::Flight,
            Anchor::Bill(_) => SlotKind::Bill,
            Anchor::TopUp(_) => SlotKind::TopUp,
            Anchor::CurrencyPurchase(_) => SlotKind::CurrencyPurchase,
            Anchor::CurrencyDeposit(_) => SlotKind::CurrencyDeposit,
            Anchor::CurrencyDelivery(_) => SlotKind::CurrencyDelivery,
            Anchor::ForeignPurchase(_) => SlotKind::ForeignPurchase,
            Anchor::GiftCardPurchase(_) => SlotKind::GiftCardPurchase,
            Anchor::HealthFlow(_) => SlotKind::HealthFlow,
            Anchor::TaxiFlow(_) => SlotKind::TaxiFlow,
        }
    }

    /// Whether an additive slot belongs to flows started from this anchor.
    pub fn relates_to(&self, slot: SlotKind) -> bool {
        match self {
            Anchor::Flight(_) => matches!(
                slot,
                SlotKind::Seats
                    | SlotKind::Hotel
                    | SlotKind::Car
                    | SlotKind::Cip
                    | SlotKind::Visa
                    | SlotKind::Insurance
                    | SlotKind::Passengers
            ),
            Anchor::TaxiFlow(_) => slot == SlotKind::Ride,
            Anchor::HealthFlow(_) => slot == SlotKind::Appointment,
            _ => false,
        }
    }
}

/// Payloads of the additive setters. Setting one never touches other slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Addition {
    Hotel(Hotel),
    Train(Train),
    Ride(TaxiRide),
    Car(Car),
    Cip(CipService),
    Visa(VisaService),
    Insurance(InsurancePlan),
    Appointment(MedicalAppointment),
    Seats(SeatSelection),
}

impl Addition {
    pub fn slot(&self) -> SlotKind {
        match self {
            Addition::Hotel(_) => SlotKind::Hotel,
            Addition::Train(_) => SlotKind::Train,
            Addition::Ride(_) => SlotKind::Ride,
            Addition::Car(_) => SlotKind::Car,
            Addition::Cip(_) => SlotKind::Cip,
            Addition::Visa(_) => SlotKind::Visa,
            Addition::Insurance(_) => SlotKind::Insurance,
            Addition::Appointment(_) => SlotKind::Appointment,
            Addition::Seats(_) => SlotKind::Seats,
        }
    }
}

/// The single in-progress purchase of the running app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingSession {
    pub(crate) anchor: Option<Anchor>,
    pub(crate) hotel: Option<Hotel>,
    pub(crate) train: Option<Train>,
    pub(crate) ride: Option<TaxiRide>,
    pub(crate) car: Option<Car>,
    pub(crate) cip: Option<CipService>,
    pub(crate) visa: Option<VisaService>,
    pub(crate) insurance: Option<InsurancePlan>,
    pub(crate) appointment: Option<MedicalAppointment>,
    pub(crate) seats: Option<SeatSelection>,
    pub(crate) passengers: Vec<Passenger>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    pub fn selected_flight(&self) -> Option<&Flight> {
        match &self.anchor {
            Some(Anchor::Flight(flight)) => Some(flight),
            _ => None,
        }
    }

    pub fn selected_bill(&self) -> Option<&Bill> {
        match &self.anchor {
            Some(Anchor::Bill(bill)) => Some(bill),
            _ => None,
        }
    }

    pub fn selected_top_up(&self) -> Option<&TopUp> {
        match &self.anchor {
            Some(Anchor::TopUp(top_up)) => Some(top_up),
            _ => None,
        }
    }

    pub fn currency_purchase(&self) -> Option<&CurrencyPurchase> {
        match &self.anchor {
            Some(Anchor::CurrencyPurchase(p)) => Some(p),
            _ => None,
        }
    }

    pub fn currency_deposit(&self) -> Option<&CurrencyDeposit> {
        match &self.anchor {
            Some(Anchor::CurrencyDeposit(d)) => Some(d),
            _ => None,
        }
    }

    pub fn currency_delivery(&self) -> Option<&CurrencyDelivery> {
        match &self.anchor {
            Some(Anchor::CurrencyDelivery(d)) => Some(d),
            _ => None,
        }
    }

    pub fn foreign_purchase(&self) -> Option<&ForeignPurchase> {
        match &self.anchor {
            Some(Anchor::ForeignPurchase(p)) => Some(p),
            _ => None,
        }
    }

    pub fn gift_card_purchase(&self) -> Option<&GiftCardPurchase> {
        match &self.anchor {
            Some(Anchor::GiftCardPurchase(p)) => Some(p),
            _ => None,
        }
    }

    pub fn health_flow(&self) -> Option<&HealthFlow> {
        match &self.anchor {
            Some(Anchor::HealthFlow(f)) => Some(f),
            _ => None,
        }
    }

    pub fn taxi_flow(&self) -> Option<&TaxiFlow> {
        match &self.anchor {
            Some(Anchor::TaxiFlow(f)) => Some(f),
            _ => None,
        }
    }

    pub fn selected_hotel(&self) -> Option<&Hotel> {
        self.hotel.as_ref()
    }

    pub fn selected_train(&self) -> Option<&Train> {
        self.train.as_ref()
    }

    pub fn selected_ride(&self) -> Option<&TaxiRide> {
        self.ride.as_ref()
    }

    pub fn selected_car(&self) -> Option<&Car> {
        self.car.as_ref()
    }

    pub fn selected_cip(&self) -> Option<&CipService> {
        self.cip.as_ref()
    }

    pub fn selected_visa(&self) -> Option<&VisaService> {
        self.visa.as_ref()
    }

    pub fn selected_insurance(&self) -> Option<&InsurancePlan> {
        self.insurance.as_ref()
    }

    pub fn selected_appointment(&self) -> Option<&MedicalAppointment> {
        self.appointment.as_ref()
    }

    pub fn seat_selection(&self) -> Option<&SeatSelection> {
        self.seats.as_ref()
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// True when the given slot currently holds a value.
    pub fn is_set(&self, slot: SlotKind) -> bool {
        match slot {
            SlotKind::Hotel => self.hotel.is_some(),
            SlotKind::Train => self.train.is_some(),
            SlotKind::Ride => self.ride.is_some(),
            SlotKind::Car => self.car.is_some(),
            SlotKind::Cip => self.cip.is_some(),
            SlotKind::Visa => self.visa.is_some(),
            SlotKind::Insurance => self.insurance.is_some(),
            SlotKind::Appointment => self.appointment.is_some(),
            SlotKind::Seats => self.seats.is_some(),
            SlotKind::Passengers => !self.passengers.is_empty(),
            entry => self.anchor.as_ref().map(Anchor::slot) == Some(entry),
        }
    }

    /// Every populated slot, entry point first.
    pub fn occupied(&self) -> Vec<SlotKind> {
        let mut slots: Vec<SlotKind> = self.anchor.iter().map(Anchor::slot).collect();
        slots.extend(SlotKind::ADDITIVE.into_iter().filter(|s| self.is_set(*s)));
        if self.is_set(SlotKind::Passengers) {
            slots.push(SlotKind::Passengers);
        }
        slots
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Additive slots that sit next to an anchor they do not belong to, e.g. a
    /// hotel left over while a bill payment is in progress. Additive setters
    /// never clear, so this is how such mixes are surfaced.
    pub fn lingering_additions(&self) -> Vec<SlotKind> {
        match &self.anchor {
            Some(anchor) => self
                .occupied()
                .into_iter()
                .filter(|s| !s.is_entry_point() && !anchor.relates_to(*s))
                .collect(),
            None => Vec::new(),
        }
    }
}
