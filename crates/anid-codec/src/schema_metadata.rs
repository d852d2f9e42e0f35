// Pliki schematu w formacie `.info` (klucz = wartość, komentarze od '#').
//
// Przykład:
//
//   # wiersze w kolejności użycia
//   anid.schema.row = W1q3ewRQ2E4rT6tU5y7Ou8i9op0YIPnb
//   anid.schema.row = nrmzdxsgtcjkqflvbahw
//   anid.base-alphabet = 0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ
//   anid.pad-to = 5

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::alphabet::BaseAlphabet;
use crate::codec::{Codec, DEFAULT_PAD_TO};
use crate::error::{CodecError, Result};
use crate::schema::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaAttribute {
    Row,
    BaseAlphabet,
    PadTo,
}

impl SchemaAttribute {
    pub fn key_name(&self) -> &'static str {
        match self {
            SchemaAttribute::Row => "anid.schema.row",
            SchemaAttribute::BaseAlphabet => "anid.base-alphabet",
            SchemaAttribute::PadTo => "anid.pad-to",
        }
    }

    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "anid.schema.row" => Some(SchemaAttribute::Row),
            "anid.base-alphabet" => Some(SchemaAttribute::BaseAlphabet),
            "anid.pad-to" => Some(SchemaAttribute::PadTo),
            _ => None,
        }
    }
}

/// Zawartość pliku schematu.
///
/// Wiersze (`anid.schema.row`) mogą się powtarzać i zachowują kolejność;
/// pozostałe klucze trzymają ostatnią wartość.
#[derive(Debug, Clone, Default)]
pub struct SchemaMetadata {
    rows: Vec<String>,
    attributes: HashMap<String, String>,
}

impl SchemaMetadata {
    pub fn new() -> Self {
        SchemaMetadata::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(CodecError::MetadataNotFound(
                path_ref.to_string_lossy().into_owned(),
            ));
        }
        let file = File::open(path_ref).map_err(|e| {
            CodecError::Io(format!(
                "Failed to open schema file '{}': {}",
                path_ref.display(),
                e
            ))
        })?;
        let metadata = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "Wczytano schemat z '{}': {} wierszy",
            path_ref.display(),
            metadata.rows.len()
        );
        Ok(metadata)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut metadata = SchemaMetadata::new();
        for (line_no, line_res) in reader.lines().enumerate() {
            let line = line_res
                .map_err(|e| CodecError::Io(format!("Error reading schema line: {}", e)))?;
            // Końcowe spacje należą do wartości (wiersz może kończyć się spacją).
            let line = line.trim_start();

            if line.trim_end().is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(eq_index) = line.find('=') else {
                return Err(CodecError::InvalidMetadataValue(format!(
                    "Line {} is not a 'key = value' pair: {}",
                    line_no + 1,
                    line
                )));
            };
            let key = line[..eq_index].trim();
            // Zdejmujemy tylko jedną spację separatora, reszta wartości zostaje bez zmian.
            let raw_value = &line[eq_index + 1..];
            let value = raw_value.strip_prefix(' ').unwrap_or(raw_value).to_string();

            match SchemaAttribute::from_key_name(key) {
                Some(SchemaAttribute::Row) => metadata.rows.push(value),
                Some(_) => {
                    metadata.attributes.insert(key.to_string(), value);
                }
                None => log::warn!("Nieznany klucz w pliku schematu: '{}'", key),
            }
        }
        Ok(metadata)
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn push_row(&mut self, row: &str) {
        self.rows.push(row.to_string());
    }

    pub fn get_attribute(&self, attr: SchemaAttribute) -> Option<&String> {
        self.attributes.get(attr.key_name())
    }

    pub fn set_attribute(&mut self, attr: SchemaAttribute, value: String) {
        self.attributes.insert(attr.key_name().to_string(), value);
    }

    /// Schemat z pliku, albo `DEFAULT_SCHEMA`, jeśli plik nie podaje wierszy.
    pub fn schema(&self) -> Result<Schema> {
        if self.rows.is_empty() {
            return Ok(Schema::default());
        }
        Schema::from_rows(&self.rows)
    }

    pub fn base_alphabet(&self) -> Result<BaseAlphabet> {
        match self.get_attribute(SchemaAttribute::BaseAlphabet) {
            Some(chars) if chars.is_empty() => Err(CodecError::InvalidMetadataValue(format!(
                "'{}' must not be empty",
                SchemaAttribute::BaseAlphabet.key_name()
            ))),
            Some(chars) => Ok(BaseAlphabet::new(chars)),
            None => Ok(BaseAlphabet::default()),
        }
    }

    pub fn pad_to(&self) -> Result<usize> {
        match self.get_attribute(SchemaAttribute::PadTo) {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|e| CodecError::MetadataParseIntError {
                    key: SchemaAttribute::PadTo.key_name().to_string(),
                    value: value.clone(),
                    source: e,
                }),
            None => Ok(DEFAULT_PAD_TO),
        }
    }

    pub fn build_codec(&self) -> Result<Codec> {
        Codec::with_base_alphabet(self.schema()?, self.base_alphabet()?)
    }

    /// Zapis w formacie czytanym przez `from_reader`.
    pub fn to_info_string(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&format!("{} = {}\n", SchemaAttribute::Row.key_name(), row));
        }
        for attr in [SchemaAttribute::BaseAlphabet, SchemaAttribute::PadTo] {
            if let Some(value) = self.get_attribute(attr) {
                out.push_str(&format!("{} = {}\n", attr.key_name(), value));
            }
        }
        out
    }
}
