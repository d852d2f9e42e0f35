// Kodek: liczba naturalna <-> krótki klucz alfanumeryczny.
//
// Wartość jest zapisywana w systemie o mieszanych podstawach (kolejne podstawy
// to długości kolejnych wierszy schematu, cyklicznie), od najmniej znaczącej
// cyfry. Każda cyfra jest obracana o sumę wag znaków wyemitowanych przed nią.

use crate::alphabet::BaseAlphabet;
use crate::error::{CodecError, DecodeError, Result};
use crate::schema::Schema;

/// Domyślna minimalna długość klucza.
pub const DEFAULT_PAD_TO: usize = 5;

/// Indeks znaku w wierszu dla danej cyfry i bieżącego przesunięcia.
#[inline]
fn obfuscate(digit: usize, offset: usize, radix: usize) -> usize {
    (digit + offset % radix) % radix
}

/// Odwrotność `obfuscate`: cyfra dla indeksu znaku w wierszu.
#[inline]
fn reveal(index: usize, offset: usize, radix: usize) -> usize {
    (index + radix - offset % radix) % radix
}

/// Dwukierunkowy kodek kluczy.
///
/// Tablice pomocnicze są liczone raz w konstruktorze i potem tylko czytane,
/// więc jedną instancję można współdzielić między wątkami bez blokad.
#[derive(Debug, Clone)]
pub struct Codec {
    schema: Schema,
    base: BaseAlphabet,
    /// `weights[row][i]` = waga w alfabecie bazowym znaku `i` wiersza `row`.
    weights: Vec<Vec<usize>>,
}

impl Codec {
    /// Kodek dla podanego schematu i domyślnego alfabetu bazowego.
    pub fn new(schema: Schema) -> Result<Self> {
        Self::with_base_alphabet(schema, BaseAlphabet::default())
    }

    /// Kodek dla podanego schematu i alfabetu bazowego.
    ///
    /// # Błędy
    ///
    /// Zwraca `CodecError::EmptyRow` dla pustego wiersza i
    /// `CodecError::DegenerateRow` dla wiersza jednoznakowego.
    /// Powtórzone znaki w wierszu i znaki bez wagi nie są tu sprawdzane,
    /// od tego jest `Schema::validate`.
    pub fn with_base_alphabet(schema: Schema, base: BaseAlphabet) -> Result<Self> {
        for (index, row) in schema.rows().iter().enumerate() {
            match row.radix() {
                0 => return Err(CodecError::EmptyRow { index }),
                1 => {
                    return Err(CodecError::DegenerateRow {
                        index,
                        character: row.char_at(0),
                    })
                }
                _ => {}
            }
        }

        let codec = Self::build(schema, base);
        log::debug!(
            "Zbudowano kodek: {} wierszy, podstawy {:?}, alfabet bazowy {} znaków",
            codec.schema.len(),
            codec.schema.rows().iter().map(|r| r.radix()).collect::<Vec<_>>(),
            codec.base.len()
        );
        Ok(codec)
    }

    fn build(schema: Schema, base: BaseAlphabet) -> Self {
        let weights = schema
            .rows()
            .iter()
            .map(|row| {
                row.chars()
                    .iter()
                    .map(|&c| base.weight(c).unwrap_or(0))
                    .collect()
            })
            .collect();
        Codec { schema, base, weights }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn base_alphabet(&self) -> &BaseAlphabet {
        &self.base
    }

    /// Koduje wartość do klucza o długości co najmniej `min_length` znaków.
    ///
    /// `min_length` równe 0 lub 1 wyłącza dopełnianie; klucz ma wtedy
    /// najmniejszą możliwą długość (co najmniej jeden znak).
    pub fn encode(&self, value: u64, min_length: usize) -> String {
        let num_rows = self.schema.len();
        let mut key = String::new();
        let mut remaining = value;
        let mut offset = 0usize;
        let mut produced = 0usize;
        let mut row = 0usize;

        loop {
            let radix = self.schema.row(row).radix();
            let radix_u64 = radix as u64;

            let (digit, last) = if remaining >= radix_u64 {
                let digit = remaining % radix_u64;
                remaining /= radix_u64;
                (digit, false)
            } else if produced + 1 < min_length {
                // Dopełnienie: bieżąca reszta idzie tutaj, dalej już same zera.
                let digit = remaining;
                remaining = 0;
                (digit, false)
            } else {
                (remaining, true)
            };

            let index = obfuscate(digit as usize, offset, radix);
            key.push(self.schema.row(row).char_at(index));
            if last {
                return key;
            }

            offset += self.weights[row][index];
            row = (row + 1) % num_rows;
            produced += 1;
        }
    }

    /// Koduje wartość z domyślną minimalną długością (`DEFAULT_PAD_TO`).
    pub fn encode_default(&self, value: u64) -> String {
        self.encode(value, DEFAULT_PAD_TO)
    }

    /// Dekoduje klucz. `None`, jeśli klucz nie mógł powstać w tym schemacie.
    ///
    /// Klucz poprawny znakowo, ale nigdy nie wyprodukowany przez `encode`,
    /// też dekoduje się do jakiejś liczby.
    pub fn decode(&self, key: &str) -> Option<u64> {
        match self.try_decode(key) {
            Ok(value) => Some(value),
            Err(e) => {
                log::trace!("Odrzucono klucz '{}': {}", key, e);
                None
            }
        }
    }

    /// Jak `decode`, ale z informacją, dlaczego klucz odrzucono.
    pub fn try_decode(&self, key: &str) -> std::result::Result<u64, DecodeError> {
        let num_rows = self.schema.len();

        // Od lewej: przesunięcie w chwili emisji każdego znaku i cyfra pod nim.
        let mut offset = 0usize;
        let digits = key
            .chars()
            .enumerate()
            .map(|(position, character)| -> std::result::Result<(u64, u64), DecodeError> {
                let row = position % num_rows;
                let alphabet = self.schema.row(row);
                let index = alphabet.index_of(character).ok_or(DecodeError::InvalidCharacter {
                    position,
                    character,
                    row,
                })?;
                let digit = reveal(index, offset, alphabet.radix());
                offset += self.weights[row][index];
                Ok((digit as u64, alphabet.radix() as u64))
            })
            .collect::<std::result::Result<Vec<_>, DecodeError>>()?;

        // Od prawej: najbardziej znacząca cyfra jest na końcu klucza.
        digits.iter().rev().try_fold(0u64, |acc, &(digit, radix)| {
            acc.checked_mul(radix)
                .and_then(|v| v.checked_add(digit))
                .ok_or(DecodeError::Overflow)
        })
    }
}

impl Default for Codec {
    /// Kodek z `DEFAULT_SCHEMA` i `DEFAULT_BASE_ALPHABET`.
    fn default() -> Self {
        Self::build(Schema::default(), BaseAlphabet::default())
    }
}
