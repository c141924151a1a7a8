use crate::grammar;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CROSSBAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(^|\s)({})(\d+)(\.*)\.\|(\S*)", grammar::note())).unwrap()
});

const HALF_VALUE: [(&str, &str); 5] = [
    ("1", "2"),
    ("2", "4"),
    ("4", "8"),
    ("8", "16"),
    ("16", "32"),
];

const HIDE_TIE: &str = "\\once \\override Tie #'transparent = ##t";
const HIDE_NOTE: &str = "\\once \\override NoteHead #'transparent = ##t \
                         \\once \\override Dots #'transparent = ##t \
                         \\once \\override Stem #'transparent = ##t";

fn half_value(value: &str) -> Option<&'static str> {
    HALF_VALUE
        .iter()
        .find(|(full, _)| *full == value)
        .map(|(_, half)| *half)
}

pub fn transform(text: &str) -> String {
    CROSSBAR_RE
        .replace_all(text, |caps: &Captures| {
            let Some(half) = half_value(&caps[3]) else {
                return caps[0].to_string();
            };
            let (pre, pitch, value, dots, trailing) =
                (&caps[1], &caps[2], &caps[3], &caps[4], &caps[5]);
            format!(
                "{pre}{HIDE_TIE} {pitch}{value}{dots} ~ {HIDE_NOTE} {pitch}{half}{trailing} s1*0 r{half}"
            )
        })
        .into_owned()
}
