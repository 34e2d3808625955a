use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of trailing characters left visible when a masked value is printed.
const VISIBLE_TAIL: usize = 4;

/// Wraps sensitive form input (national IDs, IBANs, card numbers) so that it
/// never shows up in full in `Debug`/`Display` output, e.g. inside `tracing`
/// fields. Serialization passes the real value through.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    /// The printable form: every character but the last four replaced by `*`.
    pub fn redacted(&self) -> String {
        let raw = self.0.as_ref();
        let total = raw.chars().count();
        let hidden = total.saturating_sub(VISIBLE_TAIL);
        raw.chars()
            .enumerate()
            .map(|(i, c)| if i < hidden { '*' } else { c })
            .collect()
    }

    pub fn expose(&self) -> &str {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_ref().trim().is_empty()
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Masked({})", self.redacted())
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Masked(value.to_string())
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Masked(value)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_all_but_tail() {
        let id = Masked::from("0012345678");
        assert_eq!(format!("{:?}", id), "Masked(******5678)");
        assert_eq!(id.to_string(), "******5678");
    }

    #[test]
    fn test_short_values_stay_visible() {
        assert_eq!(Masked::from("12").redacted(), "12");
    }

    #[test]
    fn test_serialize_keeps_real_value() {
        let id = Masked::from("0012345678");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0012345678\"");
    }
}
