//! Input-shape checks used by wizard step validators. Digits typed on a
//! Persian keyboard are normalized before checking.

use rahgozar_core::{delocalize_digits, MessageKey};

use crate::stepper::MissingField;

pub fn required(field: &'static str, value: &str) -> Result<(), MissingField> {
    if value.trim().is_empty() {
        Err(MissingField::required(field))
    } else {
        Ok(())
    }
}

pub fn positive(field: &'static str, value: u32) -> Result<(), MissingField> {
    if value == 0 {
        Err(MissingField::required(field))
    } else {
        Ok(())
    }
}

pub fn present<T>(field: &'static str, value: &Option<T>) -> Result<(), MissingField> {
    match value {
        Some(_) => Ok(()),
        None => Err(MissingField::required(field)),
    }
}

/// Exactly ten digits.
pub fn national_id(field: &'static str, value: &str) -> Result<(), MissingField> {
    required(field, value)?;
    let normalized = delocalize_digits(value.trim());
    if normalized.len() == 10 && normalized.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(MissingField::new(field, MessageKey::InvalidNationalId))
    }
}

/// Two letters, two check digits, then 11 to 30 alphanumerics. Spaces allowed.
pub fn iban(field: &'static str, value: &str) -> Result<(), MissingField> {
    required(field, value)?;
    let compact: String = delocalize_digits(value)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let bytes = compact.as_bytes();
    let shaped = (15..=34).contains(&bytes.len())
        && bytes[..2].iter().all(|b| b.is_ascii_alphabetic())
        && bytes[2..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4..].iter().all(|b| b.is_ascii_alphanumeric());
    if shaped {
        Ok(())
    } else {
        Err(MissingField::new(field, MessageKey::InvalidIban))
    }
}

pub fn email(field: &'static str, value: &str) -> Result<(), MissingField> {
    required(field, value)?;
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(MissingField::new(field, MessageKey::InvalidEmail))
    }
}

/// Iranian mobile number: `09` followed by nine digits.
pub fn mobile_number(field: &'static str, value: &str) -> Result<(), MissingField> {
    required(field, value)?;
    let normalized = delocalize_digits(value.trim());
    if normalized.len() == 11
        && normalized.starts_with("09")
        && normalized.bytes().all(|b| b.is_ascii_digit())
    {
        Ok(())
    } else {
        Err(MissingField::new(field, MessageKey::InvalidMobile))
    }
}

pub fn http_url(field: &'static str, value: &str) -> Result<(), MissingField> {
    required(field, value)?;
    let value = value.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(MissingField::new(field, MessageKey::InvalidUrl)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_id() {
        assert!(national_id("id", "0012345678").is_ok());
        assert!(national_id("id", "۰۰۱۲۳۴۵۶۷۸").is_ok());
        assert_eq!(
            national_id("id", "12345").unwrap_err().message,
            MessageKey::InvalidNationalId
        );
        assert_eq!(
            national_id("id", "  ").unwrap_err().message,
            MessageKey::FieldRequired
        );
    }

    #[test]
    fn test_iban() {
        assert!(iban("iban", "DE89 3704 0044 0532 0130 00").is_ok());
        assert!(iban("iban", "IR062960000000100324200001").is_ok());
        assert!(iban("iban", "1234").is_err());
        assert!(iban("iban", "DEXX370400440532013000").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("email", "sara@example.com").is_ok());
        assert!(email("email", "sara@localhost").is_err());
        assert!(email("email", "@example.com").is_err());
        assert!(email("email", "a@b@c.com").is_err());
    }

    #[test]
    fn test_mobile_number() {
        assert!(mobile_number("phone", "09121234567").is_ok());
        assert!(mobile_number("phone", "۰۹۱۲۱۲۳۴۵۶۷").is_ok());
        assert!(mobile_number("phone", "9121234567").is_err());
    }

    #[test]
    fn test_malformed_values_are_not_reported_as_missing() {
        assert_eq!(
            mobile_number("phone", "0912").unwrap_err().message,
            MessageKey::InvalidMobile
        );
        assert_eq!(
            http_url("url", "shop.example.com").unwrap_err().message,
            MessageKey::InvalidUrl
        );
        assert_eq!(
            mobile_number("phone", "  ").unwrap_err().message,
            MessageKey::FieldRequired
        );
        assert_eq!(http_url("url", "").unwrap_err().message, MessageKey::FieldRequired);
    }

    #[test]
    fn test_http_url() {
        assert!(http_url("url", "https://shop.example.com/item/1").is_ok());
        assert!(http_url("url", "ftp://x").is_err());
        assert!(http_url("url", "https://").is_err());
    }
}
