//! Główny plik biblioteki anid-codec
//!
//! Odwracalne kodowanie liczb naturalnych do krótkich kluczy alfanumerycznych
//! (np. OjLf5, evPn0, Iz1ZxPs). To zaciemnianie, nie szyfrowanie: znając
//! schemat, każdą wartość da się odtworzyć.
//!
//! ```
//! use anid_codec::Codec;
//!
//! let codec = Codec::default();
//! let key = codec.encode(12345, 5);
//! assert_eq!(key, "pjZgf");
//! assert_eq!(codec.decode(&key), Some(12345));
//! assert_eq!(codec.decode("pj#gf"), None);
//! ```

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod schema;
pub mod schema_metadata;

use std::sync::OnceLock;

pub use alphabet::{BaseAlphabet, Row, DEFAULT_BASE_ALPHABET};
pub use codec::{Codec, DEFAULT_PAD_TO};
pub use error::{CodecError, DecodeError, Result};
pub use schema::{Schema, SchemaIssues, DEFAULT_SCHEMA};
pub use schema_metadata::{SchemaAttribute, SchemaMetadata};

/// Współdzielony kodek z domyślnym schematem.
pub fn default_codec() -> &'static Codec {
    static DEFAULT: OnceLock<Codec> = OnceLock::new();
    DEFAULT.get_or_init(Codec::default)
}

/// Skrót: koduje wartość domyślnym kodekiem.
///
/// Własny schemat: zbuduj kodek przez `Codec::new` i podaj go do [`enc_with`].
pub fn enc(value: u64, pad_to: usize) -> String {
    default_codec().encode(value, pad_to)
}

/// Skrót: dekoduje klucz domyślnym kodekiem.
///
/// Własny schemat: zbuduj kodek przez `Codec::new` i podaj go do [`dec_with`].
pub fn dec(key: &str) -> Option<u64> {
    default_codec().decode(key)
}

/// Jak [`enc`], ale z opcjonalnym kodekiem; `None` oznacza kodek domyślny.
///
/// ```
/// use anid_codec::{enc_with, Codec, Schema};
///
/// let codec = Codec::new(Schema::from_rows(["abc", "xyz"])?)?;
/// assert_eq!(enc_with(9, 0, Some(&codec)), "aya");
/// assert_eq!(enc_with(12345, 5, None), "pjZgf");
/// # Ok::<(), anid_codec::CodecError>(())
/// ```
pub fn enc_with(value: u64, pad_to: usize, codec: Option<&Codec>) -> String {
    codec.unwrap_or_else(|| default_codec()).encode(value, pad_to)
}

/// Jak [`dec`], ale z opcjonalnym kodekiem; `None` oznacza kodek domyślny.
pub fn dec_with(key: &str, codec: Option<&Codec>) -> Option<u64> {
    codec.unwrap_or_else(|| default_codec()).decode(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrappers_match_default_codec() {
        assert_eq!(enc(12345, DEFAULT_PAD_TO), "pjZgf");
        assert_eq!(dec("pjZgf"), Some(12345));
        assert_eq!(dec("pj#gf"), None);
        assert!(std::ptr::eq(default_codec(), default_codec()));
    }

    #[test]
    fn test_wrappers_with_custom_codec() {
        let codec = Codec::new(Schema::from_rows(["abc", "xyz"]).unwrap()).unwrap();
        assert_eq!(enc_with(9, 0, Some(&codec)), "aya");
        assert_eq!(dec_with("aya", Some(&codec)), Some(9));
        assert_eq!(dec_with("pjZgf", Some(&codec)), None);

        assert_eq!(enc_with(12345, DEFAULT_PAD_TO, None), enc(12345, DEFAULT_PAD_TO));
        assert_eq!(dec_with("pjZgf", None), Some(12345));
    }
}
