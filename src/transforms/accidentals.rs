use crate::grammar;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ACCIDENTAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b({})({})([^a-z]|$)",
        grammar::PITCH,
        grammar::SHORT_ACCIDENTAL
    ))
    .unwrap()
});

fn expand_accidental(short: &str) -> &'static str {
    match short {
        "s" => "is",
        "b" => "es",
        "ss" => "isis",
        _ => "eses",
    }
}

pub fn transform(text: &str) -> String {
    ACCIDENTAL_RE
        .replace_all(text, |caps: &Captures| {
            format!(
                "{}{}{}",
                &caps[1],
                expand_accidental(&caps[2]),
                &caps[3]
            )
        })
        .into_owned()
}
