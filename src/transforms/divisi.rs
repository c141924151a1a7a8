use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DIVISI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/1\s([^/]+)/2\s([^/]+)/u\s?").unwrap());

pub fn transform(text: &str) -> String {
    DIVISI_RE
        .replace_all(text, |caps: &Captures| {
            format!(
                "<< {{ \\voiceOne {}}} \\new Voice {{ \\voiceTwo {}}} >> \\oneVoice ",
                &caps[1], &caps[2]
            )
        })
        .into_owned()
}
