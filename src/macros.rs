//! Parametric rewrite templates applied over runs of notes.
//!
//! Inline form: `$!pattern$[:name] content [$$]`
//! Named form: `$name content [$$]`
//!
//! In a pattern, `#` consumes the next note of the content and `@` repeats
//! the pitch consumed by the previous `#`. Duration characters following a
//! placeholder stay attached to it, and a note's modifier (`\p`, `^"text"`,
//! `_1`) is emitted right after them.

use crate::error::{ConvertError, Result};
use crate::grammar;
use crate::types::registry::MacroRegistry;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, warn};

static INLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$!([^$]+)\$(?::([^\s$]+))?").unwrap());

static NAMED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$([^\s$!][^\s$]*)\s").unwrap());

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^({})({})?$", grammar::note(), grammar::MODIFIER)).unwrap()
});

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([#@])([0-9.*/]*)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
struct MacroNote<'a> {
    pitch: &'a str,
    modifier: &'a str,
}

fn parse_note(word: &str) -> Option<MacroNote<'_>> {
    let caps = TOKEN_RE.captures(word)?;
    Some(MacroNote {
        pitch: caps.get(1)?.as_str(),
        modifier: caps.get(2).map_or("", |m| m.as_str()),
    })
}

fn instantiate(pattern: &str, group: &[MacroNote]) -> String {
    let mut remaining = group.iter();
    let mut last: Option<&MacroNote> = None;

    PLACEHOLDER_RE
        .replace_all(pattern, |caps: &Captures| {
            let value = &caps[2];
            if &caps[1] == "#" {
                last = remaining.next();
                match last {
                    Some(note) => format!("{}{}{}", note.pitch, value, note.modifier),
                    None => value.to_string(),
                }
            } else {
                match last {
                    Some(note) => format!("{}{}", note.pitch, value),
                    None => value.to_string(),
                }
            }
        })
        .into_owned()
}

/// Apply `pattern` over the notes in `content`. Each complete group of
/// notes produces one instance followed by a space; an incomplete trailing
/// group is dropped.
pub fn expand_region(pattern: &str, content: &str) -> String {
    let arity = pattern.matches('#').count();
    if arity == 0 {
        warn!("Macro pattern \"{}\" has no placeholders", pattern);
        return String::new();
    }

    let notes: Vec<MacroNote> = content.split_whitespace().filter_map(parse_note).collect();

    let mut output = String::new();
    let mut groups = notes.chunks_exact(arity);
    for group in &mut groups {
        output.push_str(&instantiate(pattern, group));
        output.push(' ');
    }

    let leftover = groups.remainder();
    if !leftover.is_empty() {
        debug!(
            "Dropping {} note(s) that do not fill macro \"{}\"",
            leftover.len(),
            pattern
        );
    }

    output
}

/// Expand every macro region in an unquoted run. Inline macros carrying a
/// name are registered in `registry` before their content is expanded.
pub fn expand_macros(text: &str, registry: &mut MacroRegistry<'_>) -> Result<String> {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('$') {
        output.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let (pattern, header_len) = if let Some(caps) = INLINE_RE.captures(tail) {
            let pattern = caps[1].to_string();
            if let Some(name) = caps.get(2) {
                debug!("Registering macro \"{}\" = \"{}\"", name.as_str(), pattern);
                registry.register(name.as_str(), &pattern);
            }
            (pattern, caps[0].len())
        } else if let Some(caps) = NAMED_RE.captures(tail) {
            let name = &caps[1];
            let pattern = registry
                .get(name)
                .ok_or_else(|| ConvertError::missing_macro(name))?;
            (pattern, caps[0].len())
        } else {
            output.push('$');
            rest = &tail[1..];
            continue;
        };

        let body = &tail[header_len..];
        let content_len = body.find('$').unwrap_or(body.len());
        output.push_str(&expand_region(&pattern, &body[..content_len]));

        rest = &body[content_len..];
        if let Some(after) = rest.strip_prefix("$$") {
            rest = after;
        }
    }

    output.push_str(rest);
    Ok(output)
}
