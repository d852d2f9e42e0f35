// Komenda `check`: opis i ścisła kontrola schematu

use std::io::Write;
use std::path::PathBuf;

use anid_codec::SchemaIssues;
use argh::FromArgs;

use crate::error::{Result, ToolsError};
use crate::utils::load_metadata;

#[derive(FromArgs, PartialEq, Debug)]
/// wypisuje wiersze schematu i sprawdza je względem alfabetu bazowego.
#[argh(subcommand, name = "check")]
pub struct CheckArgs {
    /// plik schematu (.info); bez niego sprawdzany jest schemat domyślny
    #[argh(option)]
    pub schema: Option<PathBuf>,
}

pub fn run<W: Write>(args: &CheckArgs, out: &mut W) -> Result<()> {
    let metadata = load_metadata(args.schema.as_deref())?;
    let schema = metadata.schema()?;
    let base = metadata.base_alphabet()?;

    for (i, row) in schema.rows().iter().enumerate() {
        writeln!(out, "wiersz {}: podstawa {:>3}  {}", i, row.radix(), row)?;
    }
    match schema.cycle_capacity() {
        Some(capacity) => writeln!(out, "wartości na cykl: {}", capacity)?,
        None => writeln!(out, "wartości na cykl: > {}", u128::MAX)?,
    }
    writeln!(out, "alfabet bazowy: {} znaków", base.len())?;
    writeln!(out, "minimalna długość: {}", metadata.pad_to()?)?;

    let issues = schema.validate(&base);
    if issues.contains(SchemaIssues::UNWEIGHTED_CHARACTERS) {
        let chars: String = schema.unweighted_chars(&base).into_iter().collect();
        writeln!(out, "znaki bez wagi: {}", chars)?;
    }
    if !issues.is_empty() {
        return Err(ToolsError::SchemaIssues(issues));
    }
    writeln!(out, "OK")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_default_schema() {
        let mut out = Vec::new();
        run(&CheckArgs { schema: None }, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("wiersz 1: podstawa  20  nrmzdxsgtcjkqflvbahw"));
        assert!(out.contains("wartości na cykl: 20971520"));
        assert!(out.contains("alfabet bazowy: 62 znaków"));
        assert!(out.ends_with("OK\n"));
    }

    #[test]
    fn test_check_reports_issues() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "anid.schema.row = aab\nanid.schema.row = x-\n").unwrap();
        file.flush().unwrap();

        let mut out = Vec::new();
        let result = run(&CheckArgs { schema: Some(file.path().to_path_buf()) }, &mut out);
        assert_matches!(
            result,
            Err(ToolsError::SchemaIssues(issues))
                if issues == SchemaIssues::DUPLICATE_CHARACTERS | SchemaIssues::UNWEIGHTED_CHARACTERS
        );
        assert!(String::from_utf8(out).unwrap().contains("znaki bez wagi: -"));
    }
}
