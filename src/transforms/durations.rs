use crate::grammar;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b({})(64|6|3)(\D|$)", grammar::note())).unwrap());

fn expand_value(short: &str) -> &str {
    match short {
        "3" => "32",
        "6" => "16",
        _ => short,
    }
}

pub fn transform(text: &str) -> String {
    VALUE_RE
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], expand_value(&caps[2]), &caps[3])
        })
        .into_owned()
}
