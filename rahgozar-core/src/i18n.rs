//! Static translation table and digit localization.
//!
//! Keys form a closed enum and [`translate`] matches exhaustively on both the
//! language and the key, so adding a key without translating it for every
//! language is a compile error instead of a raw key leaking into the UI.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Fa => "fa",
            Language::En => "en",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Fa)
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fa" | "fa-ir" => Ok(Language::Fa),
            "en" | "en-us" | "en-gb" => Ok(Language::En),
            other => Err(CoreError::UnsupportedLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppName,
    Home,
    Flights,
    Hotels,
    Trains,
    Taxi,
    Cars,
    Cip,
    Visa,
    Insurance,
    Health,
    Bills,
    TopUp,
    CurrencyExchange,
    BuyCurrency,
    DepositCurrency,
    CurrencyDelivery,
    ForeignPurchase,
    GiftCards,
    ExchangeAppointment,
    StepSelectCurrency,
    StepAccountDetails,
    StepDeliveryDetails,
    StepPurchaseDetails,
    StepChooseGiftCard,
    StepChooseOffice,
    StepChooseDateTime,
    StepChooseExpert,
    StepReviewAndPay,
    StepConfirmed,
    Next,
    Back,
    Confirm,
    Pay,
    PaymentProcessing,
    PaymentSucceeded,
    TransactionId,
    Total,
    Rial,
    FieldRequired,
    InvalidNationalId,
    InvalidIban,
    InvalidEmail,
    InvalidMobile,
    InvalidUrl,
    ThemeLight,
    ThemeDark,
    ThemeSystem,
}

pub fn translate(lang: Language, key: MessageKey) -> &'static str {
    use MessageKey::*;
    match lang {
        Language::Fa => match key {
            AppName => "رهگذر",
            Home => "خانه",
            Flights => "پرواز",
            Hotels => "هتل",
            Trains => "قطار",
            Taxi => "تاکسی",
            Cars => "اجاره خودرو",
            Cip => "خدمات CIP",
            Visa => "ویزا",
            Insurance => "بیمه مسافرتی",
            Health => "سلامت",
            Bills => "پرداخت قبض",
            TopUp => "شارژ",
            CurrencyExchange => "خدمات ارزی",
            BuyCurrency => "خرید ارز",
            DepositCurrency => "واریز ارز",
            CurrencyDelivery => "تحویل ارز",
            ForeignPurchase => "خرید خارجی",
            GiftCards => "کارت هدیه",
            ExchangeAppointment => "نوبت صرافی",
            StepSelectCurrency => "انتخاب ارز و مبلغ",
            StepAccountDetails => "اطلاعات حساب",
            StepDeliveryDetails => "اطلاعات تحویل",
            StepPurchaseDetails => "جزئیات خرید",
            StepChooseGiftCard => "انتخاب کارت هدیه",
            StepChooseOffice => "انتخاب صرافی",
            StepChooseDateTime => "انتخاب تاریخ و ساعت",
            StepChooseExpert => "انتخاب کارشناس",
            StepReviewAndPay => "بررسی و پرداخت",
            StepConfirmed => "تایید نهایی",
            Next => "بعدی",
            Back => "قبلی",
            Confirm => "تایید",
            Pay => "پرداخت",
            PaymentProcessing => "در حال پردازش پرداخت...",
            PaymentSucceeded => "پرداخت با موفقیت انجام شد",
            TransactionId => "شماره تراکنش",
            Total => "مبلغ کل",
            Rial => "ریال",
            FieldRequired => "تکمیل این فیلد الزامی است",
            InvalidNationalId => "کد ملی باید ۱۰ رقم باشد",
            InvalidIban => "شماره شبا معتبر نیست",
            InvalidEmail => "ایمیل معتبر نیست",
            InvalidMobile => "شماره موبایل باید با ۰۹ شروع شود و ۱۱ رقم باشد",
            InvalidUrl => "آدرس وب‌سایت معتبر نیست",
            ThemeLight => "روشن",
            ThemeDark => "تیره",
            ThemeSystem => "پیش‌فرض سیستم",
        },
        Language::En => match key {
            AppName => "Rahgozar",
            Home => "Home",
            Flights => "Flights",
            Hotels => "Hotels",
            Trains => "Trains",
            Taxi => "Taxi",
            Cars => "Car rental",
            Cip => "CIP services",
            Visa => "Visa",
            Insurance => "Travel insurance",
            Health => "Health",
            Bills => "Bill payment",
            TopUp => "Top-up",
            CurrencyExchange => "Currency exchange",
            BuyCurrency => "Buy currency",
            DepositCurrency => "Deposit currency",
            CurrencyDelivery => "Currency delivery",
            ForeignPurchase => "Foreign purchase",
            GiftCards => "Gift cards",
            ExchangeAppointment => "Exchange appointment",
            StepSelectCurrency => "Choose currency and amount",
            StepAccountDetails => "Account details",
            StepDeliveryDetails => "Delivery details",
            StepPurchaseDetails => "Purchase details",
            StepChooseGiftCard => "Choose a gift card",
            StepChooseOffice => "Choose an exchange office",
            StepChooseDateTime => "Choose date and time",
            StepChooseExpert => "Choose an expert",
            StepReviewAndPay => "Review and pay",
            StepConfirmed => "Confirmed",
            Next => "Next",
            Back => "Back",
            Confirm => "Confirm",
            Pay => "Pay",
            PaymentProcessing => "Processing payment...",
            PaymentSucceeded => "Payment succeeded",
            TransactionId => "Transaction ID",
            Total => "Total",
            Rial => "IRR",
            FieldRequired => "This field is required",
            InvalidNationalId => "National ID must be 10 digits",
            InvalidIban => "Invalid IBAN",
            InvalidEmail => "Invalid email address",
            InvalidMobile => "Mobile number must be 11 digits starting with 09",
            InvalidUrl => "Invalid website address",
            ThemeLight => "Light",
            ThemeDark => "Dark",
            ThemeSystem => "System default",
        },
    }
}

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Rewrites ASCII digits as Perso-Arabic digits when `lang` is Persian.
/// Every other character, and every other language, passes through untouched.
pub fn localize_digits(lang: Language, input: &str) -> String {
    match lang {
        Language::Fa => input
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => char::from_u32(PERSIAN_ZERO + d).unwrap_or(c),
                _ => c,
            })
            .collect(),
        Language::En => input.to_string(),
    }
}

/// Maps Perso-Arabic and Arabic-Indic digits back to ASCII. Used to normalize
/// form input (national IDs, amounts) typed on a Persian keyboard.
pub fn delocalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            let code = c as u32;
            let offset = if (PERSIAN_ZERO..PERSIAN_ZERO + 10).contains(&code) {
                Some(code - PERSIAN_ZERO)
            } else if (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10).contains(&code) {
                Some(code - ARABIC_INDIC_ZERO)
            } else {
                None
            };
            offset
                .and_then(|d| char::from_digit(d, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Groups an integer amount in thousands and localizes its digits.
pub fn format_number(lang: Language, value: i64) -> String {
    let separator = match lang {
        Language::Fa => '\u{066C}',
        Language::En => ',',
    };
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    localize_digits(lang, &grouped)
}
