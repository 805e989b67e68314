//! Nonce generators.
//!
//! A nonce is a single-use value mixed into every signature so a captured
//! request can't be replayed as-is.

use std::fmt::Debug;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::hash::base64_encode;
use crate::{Error, Result};

/// Minimum number of raw random bytes in a nonce (96 bits).
pub const MIN_NONCE_BYTES: usize = 12;

/// NonceGenerator produces a fresh nonce for every call.
pub trait NonceGenerator: Debug + Send + Sync + 'static {
    /// Generate a new nonce.
    ///
    /// The returned value must never contain `\n`.
    fn generate(&self) -> String;
}

/// RandomNonce base64 encodes bytes read from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomNonce {
    len: usize,
}

impl Default for RandomNonce {
    fn default() -> Self {
        Self {
            len: MIN_NONCE_BYTES,
        }
    }
}

impl RandomNonce {
    /// Create a generator producing [`MIN_NONCE_BYTES`] bytes per nonce.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator producing `len` random bytes per nonce.
    ///
    /// Returns an error if `len` is below [`MIN_NONCE_BYTES`].
    pub fn with_len(len: usize) -> Result<Self> {
        if len < MIN_NONCE_BYTES {
            return Err(Error::config_invalid(format!(
                "nonce length {len} is shorter than the minimum of {MIN_NONCE_BYTES} bytes"
            )));
        }

        Ok(Self { len })
    }
}

impl NonceGenerator for RandomNonce {
    fn generate(&self) -> String {
        let mut buf = vec![0u8; self.len];
        OsRng.fill_bytes(&mut buf);
        base64_encode(&buf)
    }
}

/// StaticNonce returns the same nonce every time.
///
/// This is only useful for tests that assert exact signatures.
#[derive(Debug, Clone)]
pub struct StaticNonce(pub String);

impl StaticNonce {
    /// Create a new static nonce.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl NonceGenerator for StaticNonce {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::hash::base64_decode;

    #[test]
    fn test_random_nonce_no_reuse() {
        let gen = RandomNonce::new();
        let mut seen = HashSet::with_capacity(10_000);

        for _ in 0..10_000 {
            assert!(seen.insert(gen.generate()), "nonce reused");
        }
    }

    #[test]
    fn test_random_nonce_length() {
        let nonce = RandomNonce::new().generate();
        assert_eq!(16, nonce.len());
        assert_eq!(MIN_NONCE_BYTES, base64_decode(&nonce).unwrap().len());
        assert!(!nonce.contains('\n'));

        let nonce = RandomNonce::with_len(32).unwrap().generate();
        assert_eq!(32, base64_decode(&nonce).unwrap().len());
    }

    #[test]
    fn test_random_nonce_too_short() {
        let err = RandomNonce::with_len(8).unwrap_err();
        assert_eq!(crate::ErrorKind::ConfigInvalid, err.kind());
    }

    #[test]
    fn test_static_nonce() {
        let gen = StaticNonce::new("dj83hs9s");
        assert_eq!("dj83hs9s", gen.generate());
        assert_eq!("dj83hs9s", gen.generate());
    }
}
