//! Mode-conditional sections.
//!
//! | syntax        | kept in          | emitted as                  |
//! |---------------|------------------|-----------------------------|
//! | `[[ ... ]]`   | part             | content                     |
//! | `![[ ... ]]`  | part             | `\new CueVoice { content }` |
//! | `{{ ... }}`   | score, midi      | content                     |
//! | `m{{ ... }}`  | midi             | content                     |
//!
//! A closing delimiter is only recognized when doubled, so a lone `]` or `}`
//! may appear inside a section.

use crate::types::mode::Mode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    let bracket_body = r"((?:[^\]]|\][^\]])*)";
    let brace_body = r"((?:[^}]|\}[^}])*)";
    Regex::new(&format!(
        r"!\[\[{bracket_body}\]\]|\[\[{bracket_body}\]\]|m\{{\{{{brace_body}\}}\}}|\{{\{{{brace_body}\}}\}}"
    ))
    .unwrap()
});

fn resolve(caps: &Captures, mode: Option<Mode>) -> String {
    if let Some(cue) = caps.get(1) {
        if mode == Some(Mode::Part) {
            return format!("\\new CueVoice {{ {} }}", cue.as_str());
        }
    } else if let Some(part) = caps.get(2) {
        if mode == Some(Mode::Part) {
            return part.as_str().to_string();
        }
    } else if let Some(midi) = caps.get(3) {
        if mode == Some(Mode::Midi) {
            return midi.as_str().to_string();
        }
    } else if let Some(score) = caps.get(4) {
        if matches!(mode, Some(Mode::Score) | Some(Mode::Midi)) {
            return score.as_str().to_string();
        }
    }
    String::new()
}

/// Keep or drop every mode-conditional section in a single left-to-right
/// pass. Unterminated sections are left as they are.
pub fn filter_modal_sections(text: &str, mode: Option<Mode>) -> String {
    SECTION_RE
        .replace_all(text, |caps: &Captures| resolve(caps, mode))
        .into_owned()
}
