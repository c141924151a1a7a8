pub mod accidentals;
pub mod appoggiatura;
pub mod beam_slur;
pub mod crossbar;
pub mod divisi;
pub mod durations;
pub mod triplet;
pub mod variables;

use crate::types::config::Config;

pub fn apply_transforms(text: &str, config: &Config) -> String {
    // order is important here: several rules share character classes, e.g.
    // value shorthand must see `cs6` before accidentals turn it into `cis6`

    let text = beam_slur::transform(text);
    let text = crossbar::transform(&text);
    let text = variables::transform(&text, config);
    let text = divisi::transform(&text);
    let text = durations::transform(&text);
    let text = triplet::transform(&text);
    let text = accidentals::transform(&text);
    appoggiatura::transform(&text)
}
