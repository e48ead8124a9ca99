//! Design seeds: an identity string plus a timestamp, hashed to a `u64`.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use sha2::{Digest, Sha256};

/// Seed for one design generation.
///
/// Seeds derived from the same identity at different instants differ, so
/// repeated generations vary; a fixed seed reproduces a report exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DesignSeed(u64);

impl DesignSeed {
    /// First 16 hex digits of `SHA-256(identity + "<unix secs>.<micros>")`.
    #[must_use]
    pub fn derive(identity: &str, at: DateTime<Utc>) -> Self {
        let stamp = format!("{}.{:06}", at.timestamp(), at.timestamp_subsec_micros());
        let mut hasher = Sha256::new();
        hasher.update(identity.as_bytes());
        hasher.update(stamp.as_bytes());
        let digest = hasher.finalize();

        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        Self(u64::from_be_bytes(head))
    }

    /// Seed from `identity` and the current wall-clock time.
    #[must_use]
    pub fn now(identity: &str) -> Self {
        Self::derive(identity, Utc::now())
    }

    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// A fresh generator for this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::seed_from_u64(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn derive_is_stable_for_same_inputs() {
        let at = Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
        assert_eq!(
            DesignSeed::derive("Recipe Keeper", at),
            DesignSeed::derive("Recipe Keeper", at)
        );
    }

    #[test]
    fn derive_matches_hex_prefix_of_digest() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let digest = format!("{:x}", Sha256::digest(b"Recipe Keeper1700000000.000000"));
        let expected = u64::from_str_radix(&digest[..16], 16).unwrap();
        assert_eq!(DesignSeed::derive("Recipe Keeper", at).value(), expected);
    }

    #[test]
    fn derive_varies_with_time_and_identity() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let later = Utc.timestamp_opt(1_700_000_000, 1_000).unwrap();
        assert_ne!(DesignSeed::derive("a", at), DesignSeed::derive("a", later));
        assert_ne!(DesignSeed::derive("a", at), DesignSeed::derive("b", at));
    }

    #[test]
    fn rng_is_reproducible() {
        let seed = DesignSeed::from_u64(42);
        let first: u64 = seed.rng().random();
        let second: u64 = seed.rng().random();
        assert_eq!(first, second);
    }
}
