use crate::error::{ConvertError, Result};
use crate::file::convert_file_in;
use crate::types::config::Config;
use crate::types::context::ConversionContext;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

static INCLUDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\\inline\s+"([^"]+)""#).unwrap());

/// Files currently being converted, outermost first.
#[derive(Debug, Default)]
pub struct IncludeStack {
    paths: Vec<PathBuf>,
}

impl IncludeStack {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }

    /// Enter `path`, failing if it is already being converted.
    pub fn push(&mut self, path: &Path) -> Result<()> {
        let key = Self::key(path);
        if self.paths.contains(&key) {
            return Err(ConvertError::IncludeCycle {
                path: path.to_path_buf(),
            });
        }
        self.paths.push(key);
        Ok(())
    }

    pub fn pop(&mut self) {
        self.paths.pop();
    }

    pub fn depth(&self) -> usize {
        self.paths.len()
    }
}

/// Replace every `\inline "path"` directive in converted text with the
/// conversion of the referenced file, relative to `base_dir`.
pub fn resolve_includes(
    text: &str,
    base_dir: &Path,
    ctx: &mut ConversionContext,
    output: &mut Config,
    stack: &mut IncludeStack,
) -> Result<String> {
    let mut resolved = String::with_capacity(text.len());
    let mut last = 0;

    for caps in INCLUDE_RE.captures_iter(text) {
        let (Some(directive), Some(target)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let path = base_dir.join(target.as_str());
        debug!(path = %path.display(), depth = stack.depth(), "including");

        resolved.push_str(&text[last..directive.start()]);
        resolved.push_str(&convert_file_in(&path, ctx, output, stack)?);
        last = directive.end();
    }
    resolved.push_str(&text[last..]);

    Ok(resolved)
}
