//! Hash-based route table and the guards that keep pages from rendering
//! without the selection they read.

use rahgozar_catalog::Catalog;
use rahgozar_session::BookingSession;
use rahgozar_shared::SlotKind;
use serde::Serialize;

pub const HOME: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Profile,
    Settings,
    FlightSearch,
    FlightDetails,
    FlightPassengers,
    FlightSeats,
    FlightReview,
    FlightConfirmation,
    HotelSearch,
    HotelDetails,
    HotelCheckout,
    HotelConfirmation,
    TrainSearch,
    TrainDetails,
    TrainCheckout,
    TrainConfirmation,
    Cars,
    CarCheckout,
    Cip,
    CipCheckout,
    Visa,
    VisaCheckout,
    Insurance,
    InsuranceCheckout,
    Taxi,
    TaxiRide,
    TaxiConfirmation,
    Health,
    HealthDoctors,
    HealthConfirmation,
    Bills,
    BillPayment,
    BillConfirmation,
    TopUp,
    TopUpPayment,
    TopUpConfirmation,
    BuyCurrency,
    BuyCurrencyConfirmation,
    DepositCurrency,
    DepositCurrencyConfirmation,
    CurrencyDelivery,
    CurrencyDeliveryConfirmation,
    ForeignPurchase,
    ForeignPurchaseConfirmation,
    GiftCards,
    GiftCardConfirmation,
    ExchangeAppointment,
}

/// Which catalog table a `:id` segment must exist in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Flight,
    Hotel,
    Train,
}

impl Lookup {
    fn exists(self, catalog: &Catalog, id: u32) -> bool {
        match self {
            Lookup::Flight => catalog.flight(id).is_some(),
            Lookup::Hotel => catalog.hotel(id).is_some(),
            Lookup::Train => catalog.train(id).is_some(),
        }
    }
}

struct RouteDef {
    pattern: &'static str,
    page: Page,
    requires: &'static [SlotKind],
    lookup: Option<Lookup>,
    terminal: bool,
}

const fn open(pattern: &'static str, page: Page) -> RouteDef {
    RouteDef { pattern, page, requires: &[], lookup: None, terminal: false }
}

const fn detail(pattern: &'static str, page: Page, lookup: Lookup) -> RouteDef {
    RouteDef { pattern, page, requires: &[], lookup: Some(lookup), terminal: false }
}

const fn guarded(pattern: &'static str, page: Page, requires: &'static [SlotKind]) -> RouteDef {
    RouteDef { pattern, page, requires, lookup: None, terminal: false }
}

const fn terminal(pattern: &'static str, page: Page, requires: &'static [SlotKind]) -> RouteDef {
    RouteDef { pattern, page, requires, lookup: None, terminal: true }
}

use rahgozar_shared::SlotKind as S;

static ROUTES: &[RouteDef] = &[
    open("/", Page::Home),
    open("/profile", Page::Profile),
    open("/settings", Page::Settings),
    // flights
    open("/flights", Page::FlightSearch),
    guarded("/flights/checkout/passengers", Page::FlightPassengers, &[S::Flight]),
    guarded("/flights/checkout/seats", Page::FlightSeats, &[S::Flight]),
    guarded("/flights/checkout/review", Page::FlightReview, &[S::Flight, S::Passengers]),
    terminal("/flights/confirmation", Page::FlightConfirmation, &[S::Flight]),
    detail("/flights/:id", Page::FlightDetails, Lookup::Flight),
    // hotels
    open("/hotels", Page::HotelSearch),
    guarded("/hotels/checkout", Page::HotelCheckout, &[S::Hotel]),
    terminal("/hotels/confirmation", Page::HotelConfirmation, &[S::Hotel]),
    detail("/hotels/:id", Page::HotelDetails, Lookup::Hotel),
    // trains
    open("/trains", Page::TrainSearch),
    guarded("/trains/checkout", Page::TrainCheckout, &[S::Train]),
    terminal("/trains/confirmation", Page::TrainConfirmation, &[S::Train]),
    detail("/trains/:id", Page::TrainDetails, Lookup::Train),
    // flight add-ons
    open("/cars", Page::Cars),
    guarded("/cars/checkout", Page::CarCheckout, &[S::Car]),
    open("/cip", Page::Cip),
    guarded("/cip/checkout", Page::CipCheckout, &[S::Cip]),
    open("/visa", Page::Visa),
    guarded("/visa/checkout", Page::VisaCheckout, &[S::Visa]),
    open("/insurance", Page::Insurance),
    guarded("/insurance/checkout", Page::InsuranceCheckout, &[S::Insurance]),
    // taxi and health journeys
    open("/taxi", Page::Taxi),
    guarded("/taxi/ride", Page::TaxiRide, &[S::TaxiFlow]),
    terminal("/taxi/confirmation", Page::TaxiConfirmation, &[S::Ride]),
    open("/health", Page::Health),
    guarded("/health/doctors", Page::HealthDoctors, &[S::HealthFlow]),
    terminal("/health/confirmation", Page::HealthConfirmation, &[S::Appointment]),
    // payments
    open("/bills", Page::Bills),
    guarded("/bills/payment", Page::BillPayment, &[S::Bill]),
    terminal("/bills/confirmation", Page::BillConfirmation, &[S::Bill]),
    open("/top-up", Page::TopUp),
    guarded("/top-up/payment", Page::TopUpPayment, &[S::TopUp]),
    terminal("/top-up/confirmation", Page::TopUpConfirmation, &[S::TopUp]),
    // currency wizards
    open("/currency/buy", Page::BuyCurrency),
    terminal("/currency/buy/confirmation", Page::BuyCurrencyConfirmation, &[S::CurrencyPurchase]),
    open("/currency/deposit", Page::DepositCurrency),
    terminal("/currency/deposit/confirmation", Page::DepositCurrencyConfirmation, &[S::CurrencyDeposit]),
    open("/currency/delivery", Page::CurrencyDelivery),
    terminal("/currency/delivery/confirmation", Page::CurrencyDeliveryConfirmation, &[S::CurrencyDelivery]),
    open("/currency/appointment", Page::ExchangeAppointment),
    open("/foreign-purchase", Page::ForeignPurchase),
    terminal("/foreign-purchase/confirmation", Page::ForeignPurchaseConfirmation, &[S::ForeignPurchase]),
    open("/gift-cards", Page::GiftCards),
    terminal("/gift-cards/confirmation", Page::GiftCardConfirmation, &[S::GiftCardPurchase]),
];

/// A parsed location: the matched page and its `:id`, if the pattern has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub page: Page,
    pub id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(&'static str),
    /// No pattern matched; nothing specific is shown.
    Unmatched,
}

/// `#/flights/12?x=1` → `/flights/12`. Empty and bare `#` map to home.
fn normalize(location: &str) -> String {
    let path = location.trim().trim_start_matches('#');
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{}", trimmed)
}

fn match_pattern(pattern: &str, path: &str) -> Option<Option<u32>> {
    let mut id = None;
    let mut wanted = pattern.split('/');
    let mut given = path.split('/');
    loop {
        match (wanted.next(), given.next()) {
            (None, None) => return Some(id),
            (Some(":id"), Some(seg)) => id = Some(seg.parse().ok()?),
            (Some(w), Some(g)) if w == g => {}
            _ => return None,
        }
    }
}

fn find(path: &str) -> Option<(&'static RouteDef, Option<u32>)> {
    ROUTES
        .iter()
        .find_map(|def| match_pattern(def.pattern, path).map(|id| (def, id)))
}

impl Route {
    pub fn parse(location: &str) -> Option<Route> {
        let path = normalize(location);
        find(&path).map(|(def, id)| Route { page: def.page, id })
    }

    pub fn is_terminal(&self) -> bool {
        definition(self.page).is_some_and(|def| def.terminal)
    }

    /// Slots the page reads from the booking session.
    pub fn requires(&self) -> &'static [SlotKind] {
        definition(self.page).map(|def| def.requires).unwrap_or_default()
    }

    pub fn path(&self) -> String {
        let pattern = definition(self.page).map(|def| def.pattern).unwrap_or(HOME);
        match self.id {
            Some(id) => pattern.replace(":id", &id.to_string()),
            None => pattern.to_string(),
        }
    }
}

fn definition(page: Page) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|def| def.page == page)
}

/// Matches `location` and applies the guards against the current session and
/// catalog.
pub fn resolve(location: &str, session: &BookingSession, catalog: &Catalog) -> Navigation {
    let path = normalize(location);
    let Some((def, id)) = find(&path) else {
        tracing::debug!(path = %path, "no route matched");
        return Navigation::Unmatched;
    };

    if let Some(missing) = def.requires.iter().find(|slot| !session.is_set(**slot)) {
        tracing::warn!(path = %path, slot = %missing, "selection missing, redirecting home");
        return Navigation::Redirect(HOME);
    }

    if let (Some(lookup), Some(id)) = (def.lookup, id) {
        if !lookup.exists(catalog, id) {
            tracing::warn!(path = %path, id, "unknown catalog id, redirecting home");
            return Navigation::Redirect(HOME);
        }
    }

    Navigation::Render(Route { page: def.page, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rahgozar_catalog::{Bill, BillKind};
    use rahgozar_session::SessionStore;

    #[test]
    fn test_parse_forms() {
        let home = Route { page: Page::Home, id: None };
        assert_eq!(Route::parse(""), Some(home));
        assert_eq!(Route::parse("#"), Some(home));
        assert_eq!(Route::parse("#/"), Some(home));
        assert_eq!(
            Route::parse("#/flights/12?from=THR"),
            Some(Route { page: Page::FlightDetails, id: Some(12) })
        );
        assert_eq!(
            Route::parse("/flights/checkout/seats/"),
            Some(Route { page: Page::FlightSeats, id: None })
        );
        assert_eq!(Route::parse("#/flights/abc"), None);
        assert_eq!(Route::parse("#/nowhere"), None);
    }

    #[test]
    fn test_static_segments_win_over_id() {
        assert_eq!(
            Route::parse("#/hotels/checkout").map(|r| r.page),
            Some(Page::HotelCheckout)
        );
        assert_eq!(
            Route::parse("#/trains/confirmation").map(|r| r.page),
            Some(Page::TrainConfirmation)
        );
    }

    #[test]
    fn test_every_page_round_trips_its_path() {
        for def in ROUTES {
            let route = Route { page: def.page, id: def.lookup.map(|_| 1) };
            assert_eq!(Route::parse(&route.path()), Some(route), "{}", def.pattern);
        }
    }

    #[test]
    fn test_terminal_pages_are_confirmations() {
        for def in ROUTES.iter().filter(|d| d.terminal) {
            assert!(def.pattern.ends_with("/confirmation"), "{}", def.pattern);
            assert!(!def.requires.is_empty());
        }
    }

    #[test]
    fn test_guard_redirects_without_selection() {
        let store = SessionStore::new();
        let catalog = Catalog::mock();
        assert_eq!(
            resolve("#/bills/payment", store.session(), &catalog),
            Navigation::Redirect(HOME)
        );
        assert_eq!(
            resolve("#/flights/checkout/seats", store.session(), &catalog),
            Navigation::Redirect(HOME)
        );
    }

    #[test]
    fn test_guard_passes_with_selection() {
        let mut store = SessionStore::new();
        let catalog = Catalog::mock();
        store.select_bill(Bill {
            bill_id: "1234567890".to_string(),
            payment_id: "55667".to_string(),
            kind: BillKind::Electricity,
            amount_rial: 1_200_000,
            due_date: None,
        });
        assert_eq!(
            resolve("#/bills/payment", store.session(), &catalog),
            Navigation::Render(Route { page: Page::BillPayment, id: None })
        );
    }

    #[test]
    fn test_review_needs_passengers_too() {
        let mut store = SessionStore::new();
        let catalog = Catalog::mock();
        store.select_flight(catalog.flight(1).cloned().unwrap());
        assert_eq!(
            resolve("#/flights/checkout/review", store.session(), &catalog),
            Navigation::Redirect(HOME)
        );
    }

    #[test]
    fn test_unknown_detail_id_redirects() {
        let store = SessionStore::new();
        let catalog = Catalog::mock();
        assert_eq!(
            resolve("#/flights/999", store.session(), &catalog),
            Navigation::Redirect(HOME)
        );
        assert_eq!(
            resolve("#/flights/2", store.session(), &catalog),
            Navigation::Render(Route { page: Page::FlightDetails, id: Some(2) })
        );
    }

    #[test]
    fn test_unmatched() {
        let store = SessionStore::new();
        assert_eq!(
            resolve("#/does/not/exist", store.session(), &Catalog::mock()),
            Navigation::Unmatched
        );
    }
}
