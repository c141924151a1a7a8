use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static MELISMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\\\-_])(?:(-+)|(_+))").unwrap());

static ESCAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([_\-])").unwrap());

fn expand_melisma(caps: &Captures) -> String {
    let (marker, run) = match (caps.get(2), caps.get(3)) {
        (Some(hyphens), _) => ("--", hyphens.as_str()),
        (None, Some(underscores)) => ("__", underscores.as_str()),
        (None, None) => return caps[0].to_string(),
    };
    let skips = "_ ".repeat(run.len() - 1);
    format!("{} {} {}", &caps[1], marker, skips)
}

/// Convert lyric shorthand: `syl-la-ble` hyphenates, extra hyphens or
/// underscores skip notes, `\-` and `\_` stay literal.
pub fn convert_lyrics(text: &str) -> String {
    let expanded = MELISMA_RE.replace_all(text, expand_melisma);
    ESCAPE_RE.replace_all(&expanded, "$1").into_owned()
}
