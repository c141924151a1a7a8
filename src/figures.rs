//! Figured-bass conversion.
//!
//! A figures file is a whitespace separated list of tokens such as `6`,
//! `#64/4.`, `?7/8` or `s/2`. Each token is decomposed, tenues (`_`) are
//! resolved against earlier tokens, and the list is rendered as LilyPond
//! `\figuremode` content.

use crate::types::figure::{FigureToken, TENUE};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

pub const EXTENDERS_ON: &str = "\\bassFigureExtendersOn";
pub const EXTENDERS_OFF: &str = "\\bassFigureExtendersOff";
pub const HIDDEN_FIGURE: &str = "\\once \\override BassFigure #'implicit = ##t";

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[^\n]*").unwrap());

static PARTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([,s])?(\?)?((?:[\d#bh_][\\`+\-'!]*)+)?(?:/(\d+\.*\*?\d*))?").unwrap()
});

static CHORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\d#bh_][\\`+\-'!]*").unwrap());

fn map_alteration(c: char) -> Option<&'static str> {
    match c {
        '#' => Some("_+"),
        'b' => Some("_-"),
        'h' => Some("_!"),
        '`' => Some("\\\\"),
        '\'' => Some("/"),
        _ => None,
    }
}

pub fn parse_figure(raw: &str) -> FigureToken {
    let Some(caps) = PARTS_RE.captures(raw) else {
        return FigureToken::default();
    };

    let chord = caps.get(3).map(|run| {
        CHORD_RE
            .find_iter(run.as_str())
            .map(|m| m.as_str().to_string())
            .collect()
    });

    FigureToken {
        rest: caps.get(1).is_some(),
        hidden: caps.get(2).is_some(),
        chord,
        duration: caps.get(4).map(|m| m.as_str().to_string()),
        extender: false,
    }
}

pub fn parse_figures(text: &str) -> Vec<FigureToken> {
    let stripped = COMMENT_RE.replace_all(text, "");
    stripped.split_whitespace().map(parse_figure).collect()
}

/// Replace tenues with the last figure held at the same chord position.
///
/// A token without a chord interrupts carry-over. Tenues with nothing to
/// carry over are left in place, but still mark the token as extended.
pub fn resolve_tenues(figures: &mut [FigureToken]) {
    let mut held: HashMap<usize, String> = HashMap::new();

    for figure in figures.iter_mut() {
        figure.extender = figure.has_tenue();
        let Some(chord) = figure.chord.as_mut() else {
            held.clear();
            continue;
        };

        for (position, entry) in chord.iter_mut().enumerate() {
            if entry == TENUE {
                match held.get(&position) {
                    Some(value) => *entry = value.clone(),
                    None => debug!(position, "unresolved tenue"),
                }
            } else {
                held.insert(position, entry.clone());
            }
        }
    }
}

fn render_chord(chord: &[String]) -> String {
    chord
        .iter()
        .map(|entry| {
            entry.chars().fold(String::new(), |mut out, c| {
                match map_alteration(c) {
                    Some(mapped) => out.push_str(mapped),
                    None => out.push(c),
                }
                out
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize resolved tokens, switching extender mode whenever it changes.
pub fn render_figures(figures: &[FigureToken]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut extenders = false;

    for figure in figures {
        if figure.extender != extenders {
            extenders = figure.extender;
            let directive = if extenders { EXTENDERS_ON } else { EXTENDERS_OFF };
            parts.push(directive.to_string());
        }
        if figure.hidden {
            parts.push(HIDDEN_FIGURE.to_string());
        }

        let duration = figure.duration.as_deref().unwrap_or("");
        if figure.rest {
            parts.push(format!("s{}", duration));
        } else if let Some(chord) = &figure.chord {
            parts.push(format!("<{}>{}", render_chord(chord), duration));
        }
    }

    parts.join(" ")
}

pub fn convert_figures(text: &str) -> String {
    let mut figures = parse_figures(text);
    resolve_tenues(&mut figures);
    render_figures(&figures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_figure() {
        assert_eq!(parse_figure("6"), FigureToken::chord(&["6"], None));
        assert_eq!(parse_figure("64/4."), FigureToken::chord(&["6", "4"], Some("4.")));
        assert_eq!(parse_figure("#6b/8"), FigureToken::chord(&["#", "6", "b"], Some("8")));
        assert_eq!(parse_figure("7+5'"), FigureToken::chord(&["7+", "5'"], None));
        assert_eq!(parse_figure("s/2"), FigureToken::rest(Some("2")));
        assert_eq!(parse_figure(",/1*3"), FigureToken::rest(Some("1*3")));

        let hidden = parse_figure("?6_/4");
        assert!(hidden.hidden);
        assert_eq!(hidden.chord, Some(vec!["6".to_string(), "_".to_string()]));
        assert_eq!(hidden.duration.as_deref(), Some("4"));
    }

    #[test]
    fn test_parse_figures_strips_comments() {
        let figures = parse_figures("6 % first bar\n  5/2 %\n4");
        assert_eq!(
            figures,
            vec![
                FigureToken::chord(&["6"], None),
                FigureToken::chord(&["5"], Some("2")),
                FigureToken::chord(&["4"], None),
            ]
        );
    }

    #[test]
    fn test_resolve_tenues() {
        let mut figures = parse_figures("64 _3 __");
        resolve_tenues(&mut figures);

        assert_eq!(figures[0].chord, Some(vec!["6".into(), "4".into()]));
        assert!(!figures[0].extender);
        assert_eq!(figures[1].chord, Some(vec!["6".into(), "3".into()]));
        assert!(figures[1].extender);
        assert_eq!(figures[2].chord, Some(vec!["6".into(), "3".into()]));
        assert!(figures[2].extender);
    }

    #[test]
    fn test_tenue_skips_narrower_chords() {
        let mut figures = parse_figures("64 5 _4");
        resolve_tenues(&mut figures);
        assert_eq!(figures[2].chord, Some(vec!["5".into(), "4".into()]));

        let mut figures = parse_figures("64 5 5_");
        resolve_tenues(&mut figures);
        assert_eq!(figures[2].chord, Some(vec!["5".into(), "4".into()]));
    }

    #[test]
    fn test_unresolved_tenue() {
        let mut figures = parse_figures("_");
        resolve_tenues(&mut figures);
        assert_eq!(figures[0].chord, Some(vec!["_".into()]));
        assert!(figures[0].extender);
    }

    #[test]
    fn test_rest_interrupts_carry_over() {
        let mut figures = parse_figures("6 s _");
        resolve_tenues(&mut figures);
        assert_eq!(figures[2].chord, Some(vec!["_".into()]));
    }

    #[test]
    fn test_tenue_carry_over_toggles_extenders_once() {
        assert_eq!(convert_figures("6 _"), "<6> \\bassFigureExtendersOn <6>");
    }

    #[test]
    fn test_extenders_switch_off() {
        assert_eq!(
            convert_figures("6/4 _/4 5/2"),
            "<6>4 \\bassFigureExtendersOn <6>4 \\bassFigureExtendersOff <5>2"
        );
    }

    #[test]
    fn test_alterations() {
        assert_eq!(convert_figures("#6"), "<_+ 6>");
        assert_eq!(convert_figures("b7/8"), "<_- 7>8");
        assert_eq!(convert_figures("h"), "<_!>");
        assert_eq!(convert_figures("6`"), "<6\\\\>");
        assert_eq!(convert_figures("5'"), "<5/>");
        assert_eq!(convert_figures("7+ 4-"), "<7+> <4->");
    }

    #[test]
    fn test_rests_and_hidden() {
        assert_eq!(convert_figures("s/2 6/4"), "s2 <6>4");
        assert_eq!(convert_figures(",/4"), "s4");
        assert_eq!(
            convert_figures("?6/4"),
            "\\once \\override BassFigure #'implicit = ##t <6>4"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_figures(""), "");
        assert_eq!(convert_figures("  % nothing\n"), "");
    }
}
