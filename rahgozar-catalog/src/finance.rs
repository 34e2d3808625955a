use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rahgozar_shared::Masked;
use serde::{Deserialize, Serialize};

use crate::pricing::Quote;

/// A tradable currency with the office's rial rates per unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub code: String,
    pub name: String,
    /// Rials the customer pays per unit.
    pub sell_rate_rial: i64,
    /// Rials the customer receives per unit.
    pub buy_rate_rial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeOffice {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeExpert {
    pub id: u32,
    pub name: String,
    pub office_id: u32,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftCardBrand {
    pub id: u32,
    pub name: String,
    pub region: String,
    /// Face values in the brand's currency.
    pub denominations: Vec<u32>,
    pub currency_code: String,
}

// Committed wizard records. Each carries the transaction ID minted on confirm.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyPurchase {
    pub transaction_id: String,
    pub currency_code: String,
    pub amount: u32,
    pub national_id: Masked<String>,
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyDeposit {
    pub transaction_id: String,
    pub currency_code: String,
    pub amount: u32,
    pub account_holder: String,
    pub iban: Masked<String>,
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyDelivery {
    pub transaction_id: String,
    pub currency_code: String,
    pub amount: u32,
    pub address: String,
    pub phone_number: String,
    pub delivery_date: NaiveDate,
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForeignPurchase {
    pub transaction_id: String,
    pub merchant_url: String,
    pub currency_code: String,
    pub amount: u32,
    pub description: String,
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftCardPurchase {
    pub transaction_id: String,
    pub brand_id: u32,
    pub brand_name: String,
    pub denomination: u32,
    pub quantity: u32,
    pub recipient_email: String,
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
}

/// Booked visit at an exchange office. Not a session slot; the confirmation
/// page holds it directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeAppointment {
    pub reference: String,
    pub office_id: u32,
    pub office_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub expert_id: u32,
    pub expert_name: String,
    pub created_at: DateTime<Utc>,
}
