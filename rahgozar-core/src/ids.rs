use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random part of a transaction ID.
pub const TOKEN_LEN: usize = 9;

/// Source of the random suffix attached to transaction IDs.
///
/// Injected wherever an ID is minted so tests can pin the output.
pub trait TokenSource: Send {
    /// Returns `TOKEN_LEN` uppercase base-36 characters.
    fn next_token(&mut self) -> String;
}

fn draw_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Thread-local RNG; the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenSource;

impl TokenSource for RandomTokenSource {
    fn next_token(&mut self) -> String {
        draw_token(&mut rand::thread_rng())
    }
}

/// Deterministic source for tests and reproducible demo runs.
#[derive(Debug, Clone)]
pub struct SeededTokenSource {
    rng: StdRng,
}

impl SeededTokenSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TokenSource for SeededTokenSource {
    fn next_token(&mut self) -> String {
        draw_token(&mut self.rng)
    }
}

/// Mints `PREFIX + token` transaction IDs, e.g. `PG-BUY-7K2M9Q0XA`.
pub struct TransactionIdGenerator {
    source: Box<dyn TokenSource>,
}

impl TransactionIdGenerator {
    pub fn new(source: Box<dyn TokenSource>) -> Self {
        Self { source }
    }

    pub fn random() -> Self {
        Self::new(Box::new(RandomTokenSource))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SeededTokenSource::new(seed)))
    }

    pub fn generate(&mut self, prefix: &str) -> String {
        let id = format!("{}{}", prefix, self.source.next_token());
        tracing::debug!(transaction_id = %id, "minted transaction id");
        id
    }
}

impl Default for TransactionIdGenerator {
    fn default() -> Self {
        Self::random()
    }
}

impl std::fmt::Debug for TransactionIdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionIdGenerator").finish_non_exhaustive()
    }
}

/// True when `id` is `prefix` followed by exactly `TOKEN_LEN` characters of `[A-Z0-9]`.
pub fn matches_format(id: &str, prefix: &str) -> bool {
    match id.strip_prefix(prefix) {
        Some(token) => {
            token.len() == TOKEN_LEN
                && token
                    .bytes()
                    .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Vec<&'static str>);

    impl TokenSource for FixedSource {
        fn next_token(&mut self) -> String {
            self.0.remove(0).to_string()
        }
    }

    #[test]
    fn test_random_ids_match_format() {
        let mut ids = TransactionIdGenerator::random();
        for _ in 0..50 {
            let id = ids.generate("PG-BUY-");
            assert!(matches_format(&id, "PG-BUY-"), "bad id {}", id);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = TransactionIdGenerator::seeded(7);
        let mut b = TransactionIdGenerator::seeded(7);
        assert_eq!(a.generate("PG-GC-"), b.generate("PG-GC-"));
        assert_eq!(a.generate("PG-GC-"), b.generate("PG-GC-"));
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = TransactionIdGenerator::seeded(1);
        let mut b = TransactionIdGenerator::seeded(2);
        assert_ne!(a.generate("PG-DEL-"), b.generate("PG-DEL-"));
    }

    #[test]
    fn test_consecutive_seeded_ids_differ() {
        let mut ids = TransactionIdGenerator::seeded(42);
        assert_ne!(ids.generate("PG-FP-"), ids.generate("PG-FP-"));
    }

    #[test]
    fn test_injected_source_is_used_verbatim() {
        let mut ids = TransactionIdGenerator::new(Box::new(FixedSource(vec!["ABCDEFGH1"])));
        assert_eq!(ids.generate("PG-DEP-"), "PG-DEP-ABCDEFGH1");
    }

    #[test]
    fn test_format_check_rejects_lowercase_and_length() {
        assert!(!matches_format("PG-BUY-abcdefgh1", "PG-BUY-"));
        assert!(!matches_format("PG-BUY-ABC", "PG-BUY-"));
        assert!(!matches_format("PG-DEL-ABCDEFGH1", "PG-BUY-"));
    }
}
