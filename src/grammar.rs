//! Regex fragments describing a shorthand note, shared by the rewrite rules
//! and the macro engine.

pub const PITCH: &str = "[a-g]";

pub const PITCH_OR_REST: &str = "[a-gr]";

/// Accidental run, both in shorthand (`s`, `bb`) and in expanded form
/// (`is`, `eses`). Longest alternatives come first.
pub const ACCIDENTALS: &str = "(?:isis|eses|is|es|ss|bb|s|b)?";

pub const SHORT_ACCIDENTAL: &str = "(?:ss|bb|s|b)";

pub const OCTAVE: &str = "[',]*";

/// Duration digits and dots. A crossbar marker (`4.|`) is taken whole so its
/// dot is not mistaken for an augmentation dot.
pub const VALUE: &str = r"\d*(?:\.*\.\||\.*)";

/// Suffix attached to a note: a command (`\p`), a direction (`^`, `_`), an
/// articulation (`-.`, `->`) or a tie (`~`).
pub const MODIFIER: &str = r"[\\^_~-]\S*";

pub fn note() -> String {
    format!("{PITCH_OR_REST}{ACCIDENTALS}{OCTAVE}")
}

pub fn note_with_value() -> String {
    format!("{}{VALUE}", note())
}
