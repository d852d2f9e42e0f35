// Schemat kodeka: uporządkowana lista wierszy (alfabetów) cyklicznie
// przypisywanych kolejnym pozycjom cyfr.

use bitflags::bitflags;
use std::collections::HashSet;

use crate::alphabet::{BaseAlphabet, Row};
use crate::error::{CodecError, Result};

/// Domyślny schemat.
///
/// UWAGA: ten sam zbiór wartości musi być zawsze kodowany tym samym schematem.
/// Po jego zmianie dotychczasowe klucze dekodują się do innych liczb (albo wcale).
pub const DEFAULT_SCHEMA: [&str; 5] = [
    "W1q3ewRQ2E4rT6tU5y7Ou8i9op0YIPnb",
    "nrmzdxsgtcjkqflvbahw",
    "H8YD5LJ3A7S2RPWQKN1TBU0G4M6F9CVZ",
    "nAXzFdxsBgHcZKjSDkMCfVGlNvmJbLah",
    "1ax5z2mr7wsv3bcg8qn9l4i0dfp6tjky",
];

bitflags! {
    /// Problemy wykryte przez `Schema::validate`.
    ///
    /// Żaden z nich nie blokuje budowy kodeka, ale każdy psuje
    /// jednoznaczność albo stabilność kluczy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SchemaIssues: u8 {
        /// Co najmniej jeden wiersz zawiera powtórzony znak (niejednoznaczne dekodowanie).
        const DUPLICATE_CHARACTERS = 0b0000_0001;

        /// Co najmniej jeden znak wiersza nie ma wagi w alfabecie bazowym
        /// (wnosi wagę 0 do przesunięcia).
        const UNWEIGHTED_CHARACTERS = 0b0000_0010;

        /// Co najmniej jeden wiersz ma mniej niż dwa znaki.
        const SHORT_ROWS = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    rows: Vec<Row>,
}

impl Schema {
    /// Tworzy schemat z wierszy. Odrzuca tylko schemat bez wierszy;
    /// poprawność samych wierszy sprawdza `Codec::new`.
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            return Err(CodecError::EmptySchema);
        }
        Ok(Schema { rows })
    }

    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(rows.into_iter().map(|r| Row::new(r.as_ref())).collect())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Wiersz o podanym indeksie.
    ///
    /// # Panics
    ///
    /// Panikuje, jeśli `index >= len()`. Wersja bez paniki: [`Schema::get_row`].
    pub fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Liczba wierszy (długość cyklu).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Liczba wartości mieszczących się w jednym pełnym cyklu wierszy
    /// (iloczyn podstaw), albo `None` przy przepełnieniu u128.
    pub fn cycle_capacity(&self) -> Option<u128> {
        self.rows
            .iter()
            .try_fold(1u128, |acc, row| acc.checked_mul(row.radix() as u128))
    }

    /// Ścisła kontrola schematu względem alfabetu bazowego.
    pub fn validate(&self, base: &BaseAlphabet) -> SchemaIssues {
        let mut issues = SchemaIssues::empty();
        for row in &self.rows {
            if row.radix() < 2 {
                issues |= SchemaIssues::SHORT_ROWS;
            }
            if !row.has_distinct_chars() {
                issues |= SchemaIssues::DUPLICATE_CHARACTERS;
            }
            if row.chars().iter().any(|&c| !base.contains(c)) {
                issues |= SchemaIssues::UNWEIGHTED_CHARACTERS;
            }
        }
        issues
    }

    /// Znaki wierszy, które nie mają wagi w alfabecie bazowym (bez powtórzeń, w kolejności wystąpienia).
    pub fn unweighted_chars(&self, base: &BaseAlphabet) -> Vec<char> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .flat_map(|row| row.chars().iter().copied())
            .filter(|&c| !base.contains(c) && seen.insert(c))
            .collect()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema {
            rows: DEFAULT_SCHEMA.iter().map(|r| Row::new(r)).collect(),
        }
    }
}
