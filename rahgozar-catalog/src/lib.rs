pub mod catalog;
pub mod finance;
pub mod pricing;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use finance::{
    Currency, CurrencyDelivery, CurrencyDeposit, CurrencyPurchase, ExchangeAppointment,
    ExchangeExpert, ExchangeOffice, ForeignPurchase, GiftCardBrand, GiftCardPurchase,
};
pub use pricing::{FeeKind, Quote, QuoteConfig, QuoteEngine};
pub use product::{
    Bill, BillKind, CabinClass, Car, CipService, Flight, HealthFlow, HealthService, Hotel,
    InsurancePlan, MedicalAppointment, MobileOperator, Passenger, PassengerKind, SeatSelection,
    TaxiFlow, TaxiRide, TopUp, Train, VisaService,
};
