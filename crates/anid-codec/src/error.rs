// Błędy specyficzne dla crate anid-codec

use thiserror::Error;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Błędy konfiguracji kodeka: nieprawidłowy schemat albo plik schematu.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Schemat nie zawiera żadnego wiersza.
    #[error("Schemat musi zawierać co najmniej jeden wiersz.")]
    EmptySchema,

    /// Wiersz schematu jest pusty (podstawa 0).
    #[error("Wiersz schematu o indeksie {index} jest pusty.")]
    EmptyRow { index: usize },

    /// Wiersz schematu ma tylko jeden znak (podstawa 1), kodowanie nigdy by się nie zakończyło.
    #[error("Wiersz schematu o indeksie {index} ma tylko jeden znak ('{character}'), wymagane są co najmniej dwa.")]
    DegenerateRow { index: usize, character: char },

    /// Błąd wejścia/wyjścia przy odczycie pliku schematu.
    #[error("Błąd I/O: {0}")]
    Io(String),

    /// Nie znaleziono pliku schematu.
    #[error("Nie znaleziono pliku schematu: {0}")]
    MetadataNotFound(String),

    /// Nieprawidłowa wartość w pliku schematu.
    #[error("Nieprawidłowa wartość w pliku schematu: {0}")]
    InvalidMetadataValue(String),

    /// Błąd parsowania liczby w pliku schematu.
    #[error("Błąd parsowania liczby w pliku schematu dla klucza '{key}': {value}, błąd: {source}")]
    MetadataParseIntError {
        key: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}

/// Powód odrzucenia klucza przez `Codec::try_decode`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Znak nie należy do alfabetu wiersza oczekiwanego na tej pozycji.
    #[error("Znak '{character}' na pozycji {position} nie należy do wiersza {row} schematu.")]
    InvalidCharacter {
        position: usize,
        character: char,
        row: usize,
    },

    /// Klucz jest poprawny znakowo, ale jego wartość nie mieści się w u64.
    #[error("Wartość klucza przekracza zakres u64.")]
    Overflow,
}
