use crate::grammar;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static APPOGGIATURA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(\s)?\^({})", grammar::PITCH)).unwrap());

pub fn transform(text: &str) -> String {
    APPOGGIATURA_RE
        .replace_all(text, |caps: &Captures| {
            let space = caps.get(1).map_or("", |m| m.as_str());
            format!("{}\\appoggiatura {}", space, &caps[2])
        })
        .into_owned()
}
