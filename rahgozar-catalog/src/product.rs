use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rahgozar_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub id: u32,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub cabin: CabinClass,
    pub price_rial: i64,
    pub seats_left: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub stars: u8,
    pub nightly_rate_rial: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Hotel {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    pub fn stay_total_rial(&self) -> i64 {
        self.nightly_rate_rial * self.nights()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Train {
    pub id: u32,
    pub operator: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub compartment_capacity: u8,
    pub price_rial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxiRide {
    pub id: u32,
    pub vehicle_class: String,
    pub pickup: String,
    pub dropoff: String,
    pub fare_rial: i64,
    pub eta_minutes: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    pub id: u32,
    pub model: String,
    pub provider: String,
    pub daily_rate_rial: i64,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub with_driver: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CipService {
    pub id: u32,
    pub airport: String,
    pub terminal: String,
    pub service_name: String,
    pub price_rial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisaService {
    pub id: u32,
    pub country: String,
    pub visa_type: String,
    pub processing_days: u16,
    pub price_rial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurancePlan {
    pub id: u32,
    pub insurer: String,
    pub plan_name: String,
    pub coverage_eur: u32,
    pub duration_days: u16,
    pub price_rial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalAppointment {
    pub id: u32,
    pub doctor_name: String,
    pub specialty: String,
    pub clinic: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub fee_rial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatSelection {
    pub flight_id: u32,
    /// Seat labels in passenger order, e.g. `["12A", "12B"]`.
    pub seats: Vec<String>,
    pub surcharge_rial: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillKind {
    Water,
    Electricity,
    Gas,
    Landline,
    Mobile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub bill_id: String,
    pub payment_id: String,
    pub kind: BillKind,
    pub amount_rial: i64,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MobileOperator {
    Mci,
    Irancell,
    Rightel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopUp {
    pub operator: MobileOperator,
    pub phone_number: String,
    pub amount_rial: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerKind {
    Adult,
    Child,
    Infant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passenger {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub national_id: Masked<String>,
    pub birth_date: Option<NaiveDate>,
    pub kind: PassengerKind,
}

impl Passenger {
    pub fn adult(first_name: &str, last_name: &str, national_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            national_id: Masked::from(national_id),
            birth_date: None,
            kind: PassengerKind::Adult,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthService {
    DoctorVisit,
    Laboratory,
    HomeNursing,
}

/// In-progress state of the health booking flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthFlow {
    pub service: HealthService,
    pub city: String,
    pub specialty: Option<String>,
}

/// In-progress state of the taxi booking flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxiFlow {
    pub pickup: String,
    pub dropoff: String,
    pub vehicle_class: Option<String>,
    pub scheduled_for: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_stay_total() {
        let hotel = Hotel {
            id: 1,
            name: "Espinas".to_string(),
            city: "Tehran".to_string(),
            stars: 5,
            nightly_rate_rial: 80_000_000,
            check_in: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 3, 23).unwrap(),
        };
        assert_eq!(hotel.nights(), 3);
        assert_eq!(hotel.stay_total_rial(), 240_000_000);
    }

    #[test]
    fn test_passenger_id_is_masked_in_debug() {
        let p = Passenger::adult("Sara", "Karimi", "0012345678");
        let printed = format!("{:?}", p);
        assert!(!printed.contains("0012345678"));
        assert_eq!(p.full_name(), "Sara Karimi");
    }
}
