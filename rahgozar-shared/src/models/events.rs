use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every slot a booking session can hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    // entry points
    Flight,
    Bill,
    TopUp,
    CurrencyPurchase,
    CurrencyDeposit,
    CurrencyDelivery,
    ForeignPurchase,
    GiftCardPurchase,
    HealthFlow,
    TaxiFlow,
    // additive
    Hotel,
    Train,
    Ride,
    Car,
    Cip,
    Visa,
    Insurance,
    Appointment,
    Seats,
    Passengers,
}

impl SlotKind {
    pub const ENTRY_POINTS: [SlotKind; 10] = [
        SlotKind::Flight,
        SlotKind::Bill,
        SlotKind::TopUp,
        SlotKind::CurrencyPurchase,
        SlotKind::CurrencyDeposit,
        SlotKind::CurrencyDelivery,
        SlotKind::ForeignPurchase,
        SlotKind::GiftCardPurchase,
        SlotKind::HealthFlow,
        SlotKind::TaxiFlow,
    ];

    pub const ADDITIVE: [SlotKind; 9] = [
        SlotKind::Hotel,
        SlotKind::Train,
        SlotKind::Ride,
        SlotKind::Car,
        SlotKind::Cip,
        SlotKind::Visa,
        SlotKind::Insurance,
        SlotKind::Appointment,
        SlotKind::Seats,
    ];

    pub fn is_entry_point(self) -> bool {
        Self::ENTRY_POINTS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlotKind::Flight => "flight",
            SlotKind::Bill => "bill",
            SlotKind::TopUp => "top_up",
            SlotKind::CurrencyPurchase => "currency_purchase",
            SlotKind::CurrencyDeposit => "currency_deposit",
            SlotKind::CurrencyDelivery => "currency_delivery",
            SlotKind::ForeignPurchase => "foreign_purchase",
            SlotKind::GiftCardPurchase => "gift_card_purchase",
            SlotKind::HealthFlow => "health_flow",
            SlotKind::TaxiFlow => "taxi_flow",
            SlotKind::Hotel => "hotel",
            SlotKind::Train => "train",
            SlotKind::Ride => "ride",
            SlotKind::Car => "car",
            SlotKind::Cip => "cip",
            SlotKind::Visa => "visa",
            SlotKind::Insurance => "insurance",
            SlotKind::Appointment => "appointment",
            SlotKind::Seats => "seats",
            SlotKind::Passengers => "passengers",
        }
    }
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single session mutation did.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionChange {
    /// An entry-point setter wiped the session and anchored a new flow.
    Anchored { slot: SlotKind },
    /// An additive setter filled one slot in place.
    Added { slot: SlotKind },
    PassengersReplaced { count: usize },
    Cleared,
}

/// Published by the session store after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionChanged {
    pub session_id: Uuid,
    pub sequence: u64,
    pub change: SessionChange,
    pub occupied: Vec<SlotKind>,
    pub timestamp: i64,
}
