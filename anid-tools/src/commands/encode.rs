// Komenda `encode`: liczby -> klucze

use std::io::Write;
use std::path::PathBuf;

use argh::FromArgs;

use crate::error::Result;
use crate::utils::load_codec;

#[derive(FromArgs, PartialEq, Debug)]
/// koduje liczby do kluczy, jeden klucz na linię.
#[argh(subcommand, name = "encode")]
pub struct EncodeArgs {
    /// plik schematu (.info); bez niego używany jest schemat domyślny
    #[argh(option)]
    pub schema: Option<PathBuf>,

    /// minimalna długość klucza (domyślnie anid.pad-to ze schematu albo 5)
    #[argh(option)]
    pub pad_to: Option<usize>,

    /// liczby do zakodowania
    #[argh(positional)]
    pub values: Vec<u64>,
}

pub fn run<W: Write>(args: &EncodeArgs, out: &mut W) -> Result<()> {
    let (codec, schema_pad_to) = load_codec(args.schema.as_deref())?;
    let pad_to = args.pad_to.unwrap_or(schema_pad_to);
    for &value in &args.values {
        writeln!(out, "{}", codec.encode(value, pad_to))?;
    }
    Ok(())
}
