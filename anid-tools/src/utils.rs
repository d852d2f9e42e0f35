// Wspólne pomocnicze funkcje komend

use std::path::Path;

use anid_codec::{Codec, SchemaMetadata};

use crate::error::Result;

/// Metadane schematu z pliku, albo puste (czyli domyślny schemat), gdy plik nie został podany.
pub fn load_metadata(schema_path: Option<&Path>) -> Result<SchemaMetadata> {
    match schema_path {
        Some(path) => Ok(SchemaMetadata::from_file(path)?),
        None => Ok(SchemaMetadata::new()),
    }
}

/// Kodek i domyślna minimalna długość klucza dla podanego pliku schematu.
pub fn load_codec(schema_path: Option<&Path>) -> Result<(Codec, usize)> {
    let metadata = load_metadata(schema_path)?;
    let codec = metadata.build_codec()?;
    Ok((codec, metadata.pad_to()?))
}
