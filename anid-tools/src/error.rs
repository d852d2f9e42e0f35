// Błędy narzędzi CLI

use anid_codec::{CodecError, SchemaIssues};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolsError>;

#[derive(Debug, Error)]
pub enum ToolsError {
    #[error("Błąd kodeka: {0}")]
    Codec(#[from] CodecError),

    #[error("Błąd I/O: {0}")]
    Io(#[from] std::io::Error),

    /// Liczba kluczy, których nie udało się zdekodować.
    #[error("Nie udało się zdekodować {0} kluczy.")]
    InvalidKeys(usize),

    #[error("Schemat ma problemy: {0:?}")]
    SchemaIssues(SchemaIssues),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tools_error_display() {
        let err: ToolsError = CodecError::EmptySchema.into();
        assert_eq!(
            format!("{}", err),
            "Błąd kodeka: Schemat musi zawierać co najmniej jeden wiersz."
        );
        assert_eq!(format!("{}", ToolsError::InvalidKeys(2)), "Nie udało się zdekodować 2 kluczy.");
    }
}
