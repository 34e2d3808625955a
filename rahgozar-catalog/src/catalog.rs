use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::finance::{Currency, ExchangeExpert, ExchangeOffice, GiftCardBrand};
use crate::product::{CabinClass, Flight, Hotel, Train};

/// Static, read-only inventory the pages render from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub trains: Vec<Train>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
    #[serde(default)]
    pub offices: Vec<ExchangeOffice>,
    #[serde(default)]
    pub experts: Vec<ExchangeExpert>,
    #[serde(default)]
    pub gift_card_brands: Vec<GiftCardBrand>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Catalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn flight(&self, id: u32) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn hotel(&self, id: u32) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn train(&self, id: u32) -> Option<&Train> {
        self.trains.iter().find(|t| t.id == id)
    }

    /// Case-insensitive lookup by ISO code.
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn office(&self, id: u32) -> Option<&ExchangeOffice> {
        self.offices.iter().find(|o| o.id == id)
    }

    pub fn expert(&self, id: u32) -> Option<&ExchangeExpert> {
        self.experts.iter().find(|e| e.id == id)
    }

    pub fn experts_at(&self, office_id: u32) -> impl Iterator<Item = &ExchangeExpert> {
        self.experts.iter().filter(move |e| e.office_id == office_id)
    }

    pub fn gift_card_brand(&self, id: u32) -> Option<&GiftCardBrand> {
        self.gift_card_brands.iter().find(|b| b.id == id)
    }

    pub fn search_flights<'a, 'q>(
        &'a self,
        origin: &'q str,
        destination: &'q str,
    ) -> impl Iterator<Item = &'a Flight> + 'q
    where
        'a: 'q,
    {
        self.flights.iter().filter(move |f| {
            f.origin.eq_ignore_ascii_case(origin) && f.destination.eq_ignore_ascii_case(destination)
        })
    }

    /// The built-in demo inventory.
    pub fn mock() -> Self {
        Self {
            flights: vec![
                Flight {
                    id: 1,
                    airline: "Iran Air".to_string(),
                    flight_number: "IR452".to_string(),
                    origin: "THR".to_string(),
                    destination: "MHD".to_string(),
                    departure: at(2026, 11, 2, 8, 30),
                    arrival: at(2026, 11, 2, 9, 50),
                    cabin: CabinClass::Economy,
                    price_rial: 32_000_000,
                    seats_left: 14,
                },
                Flight {
                    id: 2,
                    airline: "Mahan Air".to_string(),
                    flight_number: "W5 1071".to_string(),
                    origin: "IKA".to_string(),
                    destination: "IST".to_string(),
                    departure: at(2026, 11, 5, 4, 15),
                    arrival: at(2026, 11, 5, 7, 0),
                    cabin: CabinClass::Business,
                    price_rial: 410_000_000,
                    seats_left: 3,
                },
                Flight {
                    id: 3,
                    airline: "Qeshm Air".to_string(),
                    flight_number: "QB2231".to_string(),
                    origin: "THR".to_string(),
                    destination: "KIH".to_string(),
                    departure: at(2026, 11, 7, 17, 45),
                    arrival: at(2026, 11, 7, 19, 40),
                    cabin: CabinClass::Economy,
                    price_rial: 45_500_000,
                    seats_left: 40,
                },
            ],
            hotels: vec![
                Hotel {
                    id: 1,
                    name: "Espinas Palace".to_string(),
                    city: "Tehran".to_string(),
                    stars: 5,
                    nightly_rate_rial: 95_000_000,
                    check_in: date(2026, 11, 2),
                    check_out: date(2026, 11, 4),
                },
                Hotel {
                    id: 2,
                    name: "Homa".to_string(),
                    city: "Mashhad".to_string(),
                    stars: 4,
                    nightly_rate_rial: 42_000_000,
                    check_in: date(2026, 11, 2),
                    check_out: date(2026, 11, 5),
                },
            ],
            trains: vec![Train {
                id: 1,
                operator: "Raja".to_string(),
                origin: "Tehran".to_string(),
                destination: "Mashhad".to_string(),
                departure: at(2026, 11, 3, 21, 0),
                compartment_capacity: 4,
                price_rial: 18_500_000,
            }],
            currencies: vec![
                Currency {
                    code: "USD".to_string(),
                    name: "US Dollar".to_string(),
                    sell_rate_rial: 1_050_000,
                    buy_rate_rial: 1_020_000,
                },
                Currency {
                    code: "EUR".to_string(),
                    name: "Euro".to_string(),
                    sell_rate_rial: 1_180_000,
                    buy_rate_rial: 1_145_000,
                },
                Currency {
                    code: "AED".to_string(),
                    name: "UAE Dirham".to_string(),
                    sell_rate_rial: 287_000,
                    buy_rate_rial: 279_000,
                },
            ],
            offices: vec![
                ExchangeOffice {
                    id: 1,
                    name: "Ferdowsi Exchange".to_string(),
                    city: "Tehran".to_string(),
                    address: "Ferdowsi Sq., No. 12".to_string(),
                },
                ExchangeOffice {
                    id: 2,
                    name: "Vakil Exchange".to_string(),
                    city: "Shiraz".to_string(),
                    address: "Zand Blvd., No. 88".to_string(),
                },
            ],
            experts: vec![
                ExchangeExpert {
                    id: 1,
                    name: "Maryam Ahmadi".to_string(),
                    office_id: 1,
                    languages: vec!["fa".to_string(), "en".to_string()],
                },
                ExchangeExpert {
                    id: 2,
                    name: "Reza Moradi".to_string(),
                    office_id: 1,
                    languages: vec!["fa".to_string()],
                },
                ExchangeExpert {
                    id: 3,
                    name: "Leila Farahani".to_string(),
                    office_id: 2,
                    languages: vec!["fa".to_string(), "en".to_string()],
                },
            ],
            gift_card_brands: vec![
                GiftCardBrand {
                    id: 1,
                    name: "Steam".to_string(),
                    region: "Global".to_string(),
                    denominations: vec![5, 10, 20, 50],
                    currency_code: "USD".to_string(),
                },
                GiftCardBrand {
                    id: 2,
                    name: "Apple".to_string(),
                    region: "UAE".to_string(),
                    denominations: vec![50, 100, 250],
                    currency_code: "AED".to_string(),
                },
            ],
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, minute, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let catalog = Catalog::mock();
        assert_eq!(catalog.flight(2).unwrap().flight_number, "W5 1071");
        assert!(catalog.flight(99).is_none());
        assert_eq!(catalog.currency("usd").unwrap().code, "USD");
        assert_eq!(catalog.experts_at(1).count(), 2);
    }

    #[test]
    fn test_search_flights() {
        let catalog = Catalog::mock();
        let ids: Vec<u32> = catalog.search_flights("thr", "mhd").map(|f| f.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_search_results_outlive_query() {
        let catalog = Catalog::mock();
        let found: Vec<&Flight> = {
            let origin = String::from("IKA");
            catalog.search_flights(&origin, "IST").collect()
        };
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_from_json_partial() {
        let raw = r#"{"offices":[{"id":7,"name":"Test","city":"Yazd","address":"-"}]}"#;
        let catalog = Catalog::from_json(raw).unwrap();
        assert_eq!(catalog.office(7).unwrap().city, "Yazd");
        assert!(catalog.flights.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Catalog::from_json("{not json").is_err());
    }
}
