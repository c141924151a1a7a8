use crate::grammar;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BEAM_SLUR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(^|\s)([\[(]+)\s*({})",
        grammar::note_with_value()
    ))
    .unwrap()
});

pub fn transform(text: &str) -> String {
    BEAM_SLUR_RE
        .replace_all(text, |caps: &Captures| {
            let brackets = &caps[2];
            let beams: String = brackets.chars().filter(|c| *c == '[').collect();
            let slurs: String = brackets.chars().filter(|c| *c == '(').collect();
            format!("{}{}{}{}", &caps[1], &caps[3], beams, slurs)
        })
        .into_owned()
}
