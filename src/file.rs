use crate::error::{ConvertError, Result};
use crate::figures::convert_figures;
use crate::front_matter::apply_front_matter;
use crate::include::{IncludeStack, resolve_includes};
use crate::lyrics::convert_lyrics;
use crate::syntax::convert_syntax;
use crate::types::config::Config;
use crate::types::context::ConversionContext;
use std::path::Path;
use tracing::debug;

/// Engine used for a source file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.rpl` shorthand
    Music,
    /// `.fig` figured bass
    Figures,
    /// `.lyr`, `.lyr1`, `.lyr2`, ...
    Lyrics,
    /// Anything else is copied verbatim.
    Raw,
}

impl SourceKind {
    pub fn detect(path: &Path) -> Self {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return SourceKind::Raw;
        };

        match extension {
            "rpl" => SourceKind::Music,
            "fig" => SourceKind::Figures,
            ext if ext
                .strip_prefix("lyr")
                .is_some_and(|verse| verse.chars().all(|c| c.is_ascii_digit())) =>
            {
                SourceKind::Lyrics
            }
            _ => SourceKind::Raw,
        }
    }
}

/// Read and convert one source file.
///
/// Front matter is stripped and merged into `output`. Include directives in
/// shorthand files are resolved recursively under the same context.
pub fn convert_file(
    path: &Path,
    ctx: &mut ConversionContext,
    output: &mut Config,
) -> Result<String> {
    convert_file_in(path, ctx, output, &mut IncludeStack::new())
}

pub(crate) fn convert_file_in(
    path: &Path,
    ctx: &mut ConversionContext,
    output: &mut Config,
    stack: &mut IncludeStack,
) -> Result<String> {
    stack.push(path)?;

    let text = std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let body = apply_front_matter(&text, output);

    let kind = SourceKind::detect(path);
    debug!(path = %path.display(), ?kind, mode = ?ctx.mode, "converting");

    let converted = match kind {
        SourceKind::Music => {
            let markup = convert_syntax(body, ctx)?;
            let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
            resolve_includes(&markup, base_dir, ctx, output, stack)?
        }
        SourceKind::Figures => convert_figures(body),
        SourceKind::Lyrics => convert_lyrics(body),
        SourceKind::Raw => body.to_string(),
    };

    stack.pop();
    Ok(converted)
}
