use rahgozar_catalog::Passenger;
use rahgozar_shared::{SessionChange, SlotKind};
use serde::{Deserialize, Serialize};

use crate::models::{Addition, Anchor, BookingSession};

/// Every way the booking session can change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum SessionAction {
    /// Wipe every slot, then anchor a new flow.
    Enter(Anchor),
    /// Fill one additive slot in place.
    Add(Addition),
    /// Replace the passenger list wholesale.
    UpdatePassengers(Vec<Passenger>),
    ClearBooking,
}

impl SessionAction {
    pub fn slot(&self) -> Option<SlotKind> {
        match self {
            SessionAction::Enter(anchor) => Some(anchor.slot()),
            SessionAction::Add(addition) => Some(addition.slot()),
            SessionAction::UpdatePassengers(_) => Some(SlotKind::Passengers),
            SessionAction::ClearBooking => None,
        }
    }
}

impl BookingSession {
    /// The reducer. No action is ever rejected and payloads are taken as-is.
    pub fn apply(&mut self, action: SessionAction) -> SessionChange {
        match action {
            SessionAction::Enter(anchor) => {
                let slot = anchor.slot();
                *self = BookingSession {
                    anchor: Some(anchor),
                    ..BookingSession::default()
                };
                SessionChange::Anchored { slot }
            }
            SessionAction::Add(addition) => {
                let slot = addition.slot();
                match addition {
                    Addition::Hotel(hotel) => self.hotel = Some(hotel),
                    Addition::Train(train) => self.train = Some(train),
                    Addition::Ride(ride) => self.ride = Some(ride),
                    Addition::Car(car) => self.car = Some(car),
                    Addition::Cip(cip) => self.cip = Some(cip),
                    Addition::Visa(visa) => self.visa = Some(visa),
                    Addition::Insurance(plan) => self.insurance = Some(plan),
                    Addition::Appointment(appointment) => self.appointment = Some(appointment),
                    Addition::Seats(seats) => self.seats = Some(seats),
                }
                SessionChange::Added { slot }
            }
            SessionAction::UpdatePassengers(passengers) => {
                let count = passengers.len();
                self.passengers = passengers;
                SessionChange::PassengersReplaced { count }
            }
            SessionAction::ClearBooking => {
                *self = BookingSession::default();
                SessionChange::Cleared
            }
        }
    }
}
