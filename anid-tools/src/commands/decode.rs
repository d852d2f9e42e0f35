// Komenda `decode`: klucze -> liczby

use std::io::Write;
use std::path::PathBuf;

use argh::FromArgs;

use crate::error::{Result, ToolsError};
use crate::utils::load_codec;

#[derive(FromArgs, PartialEq, Debug)]
/// dekoduje klucze do liczb, jedna liczba na linię.
#[argh(subcommand, name = "decode")]
pub struct DecodeArgs {
    /// plik schematu (.info); bez niego używany jest schemat domyślny
    #[argh(option)]
    pub schema: Option<PathBuf>,

    /// klucze do zdekodowania
    #[argh(positional)]
    pub keys: Vec<String>,
}

/// Dekoduje wszystkie klucze. Nieprawidłowe klucze trafiają do `err`,
/// a na końcu zwracany jest `ToolsError::InvalidKeys` z ich liczbą.
pub fn run<W: Write, E: Write>(args: &DecodeArgs, out: &mut W, err: &mut E) -> Result<()> {
    let (codec, _) = load_codec(args.schema.as_deref())?;
    let mut invalid = 0;
    for key in &args.keys {
        match codec.try_decode(key) {
            Ok(value) => writeln!(out, "{}", value)?,
            Err(e) => {
                invalid += 1;
                writeln!(err, "{}: {}", key, e)?;
            }
        }
    }
    if invalid > 0 {
        return Err(ToolsError::InvalidKeys(invalid));
    }
    Ok(())
}
