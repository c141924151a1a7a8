//! Splitting text into rewritable and verbatim (double-quoted) runs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    Unquoted(&'a str),
    /// Includes both quote characters.
    Quoted(&'a str),
}

/// Split `text` into alternating unquoted and quoted runs. Concatenating the
/// runs reproduces `text` exactly. A quote without a closing partner starts
/// a quoted run that extends to the end of the text.
pub fn split_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find('"') {
            None => {
                runs.push(Run::Unquoted(rest));
                break;
            }
            Some(open) => {
                if open > 0 {
                    runs.push(Run::Unquoted(&rest[..open]));
                }
                let end = rest[open + 1..]
                    .find('"')
                    .map(|close| open + 1 + close + 1)
                    .unwrap_or(rest.len());
                runs.push(Run::Quoted(&rest[open..end]));
                rest = &rest[end..];
            }
        }
    }

    runs
}

pub fn map_unquoted<E>(
    text: &str,
    mut rewrite: impl FnMut(&str) -> Result<String, E>,
) -> Result<String, E> {
    let mut output = String::with_capacity(text.len());
    for run in split_runs(text) {
        match run {
            Run::Unquoted(s) => output.push_str(&rewrite(s)?),
            Run::Quoted(s) => output.push_str(s),
        }
    }
    Ok(output)
}
