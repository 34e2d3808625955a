pub mod i18n;
pub mod ids;
pub mod payment;
pub mod preferences;

pub use i18n::{delocalize_digits, format_number, localize_digits, translate, Language, MessageKey};
pub use ids::{matches_format, RandomTokenSource, SeededTokenSource, TokenSource, TransactionIdGenerator};
pub use payment::{PaymentError, PaymentGateway, PaymentReceipt, PaymentRequest, PaymentStatus, SimulatedGateway};
pub use preferences::{JsonFilePreferences, MemoryPreferences, PreferenceStore, Theme};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Invalid preference value for '{key}': {value}")]
    InvalidPreference { key: String, value: String },
    #[error("Preference storage failed: {0}")]
    StorageError(#[from] std::io::Error),
    #[error("Preference encoding failed: {0}")]
    EncodingError(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
