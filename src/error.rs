use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures that abort the conversion of a single source file.
///
/// Everything else (missing interpolation keys, malformed front matter,
/// unresolved tenues, unmatched section delimiters) degrades silently.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("missing macro definition \"{name}\"")]
    MissingMacroDefinition { name: String },

    #[error("include cycle detected at {}", path.display())]
    IncludeCycle { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn missing_macro(name: impl Into<String>) -> Self {
        ConvertError::MissingMacroDefinition { name: name.into() }
    }
}
