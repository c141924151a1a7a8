use crate::types::config::{Config, value_to_string};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"%([^%\s{}][^%\s]*)%").unwrap());

pub fn transform(text: &str, config: &Config) -> String {
    VARIABLE_RE
        .replace_all(text, |caps: &Captures| {
            config
                .get_plain(&caps[1])
                .and_then(value_to_string)
                .unwrap_or_default()
        })
        .into_owned()
}
