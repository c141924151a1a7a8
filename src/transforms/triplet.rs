use once_cell::sync::Lazy;
use regex::Regex;

static TRIPLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)`").unwrap());

pub fn transform(text: &str) -> String {
    TRIPLET_RE.replace_all(text, "${1}*2/3").into_owned()
}
