use crate::error::Result;
use crate::macros::expand_macros;
use crate::modal::filter_modal_sections;
use crate::quoted::map_unquoted;
use crate::transforms::apply_transforms;
use crate::types::context::ConversionContext;

/// Convert shorthand text to LilyPond markup: mode sections are resolved
/// first, then every unquoted run goes through macro expansion and the
/// rewrite rules. Quoted text is copied unchanged.
///
/// Include directives are not resolved here since they need the path of the
/// source file; see [`crate::file::convert_file`].
pub fn convert_syntax(text: &str, ctx: &mut ConversionContext) -> Result<String> {
    let filtered = filter_modal_sections(text, ctx.mode);

    map_unquoted(&filtered, |run| {
        let expanded = expand_macros(run, &mut ctx.macros())?;
        Ok(apply_transforms(&expanded, &ctx.config))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::types::config::Config;
    use crate::types::mode::Mode;
    use pretty_assertions::assert_eq;

    fn cvt(input: &str) -> String {
        convert_syntax(input, &mut ConversionContext::default()).unwrap()
    }

    fn cvt_mode(input: &str, mode: Mode) -> String {
        convert_syntax(input, &mut ConversionContext::with_mode(mode)).unwrap()
    }

    fn cvt_config(input: &str, yaml: &str) -> String {
        let config = Config::from_yaml_str(yaml).unwrap();
        convert_syntax(input, &mut ConversionContext::new(None, config)).unwrap()
    }

    #[test]
    fn test_accidentals() {
        assert_eq!(
            cvt("c cs d ds e es f fs g gs a as b bs"),
            "c cis d dis e eis f fis g gis a ais b bis"
        );
        assert_eq!(cvt("css d ebb"), "cisis d eeses");
    }

    #[test]
    fn test_prefix_brackets() {
        assert_eq!(cvt("[a b c]"), "a[ b c]");
        assert_eq!(cvt("[ a,4 b c]"), "a,4[ b c]");
        assert_eq!(cvt("a b c [\nd"), "a b c d[");
        assert_eq!(cvt("[\nd8 c b"), "d8[ c b");
        assert_eq!(cvt("d8[\nd8 c b"), "d8[\nd8 c b");
        assert_eq!(cvt("a[ b]"), "a[ b]");
        assert_eq!(cvt("a( b)"), "a( b)");
    }

    #[test]
    fn test_values_and_appoggiatura() {
        assert_eq!(cvt("a3 b6 b,,3 e6("), "a32 b16 b,,32 e16(");
        assert_eq!(cvt("^e8 d4"), "\\appoggiatura e8 d4");
        assert_eq!(cvt("[c8 ^e6 d8]"), "c8[ \\appoggiatura e16 d8]");
    }

    #[test]
    fn test_quoted_text() {
        assert_eq!(
            cvt(r#"(c,8.^"oboe II tacet" d6)"#),
            r#"c,8.(^"oboe II tacet" d16)"#
        );
        assert_eq!(
            cvt(r#"(c,8.\p^"oboe II tacet" d6)"#),
            r#"c,8.(\p^"oboe II tacet" d16)"#
        );
        assert_eq!(cvt(r#"cs4^"cs ds [a" ds"#), r#"cis4^"cs ds [a" dis"#);
    }

    #[test]
    fn test_modal_sections() {
        assert_eq!(cvt("a [[b c]]"), "a ");
        assert_eq!(cvt_mode("a [[b c]]", Mode::Part), "a b c");
        assert_eq!(cvt("a [[b c]] d [[e f]]"), "a  d ");
        assert_eq!(cvt_mode("a [[b c]] d [[(e f)]]", Mode::Part), "a b c d e( f)");
        assert_eq!(cvt_mode("a {{b c}} d {{e f}}", Mode::Score), "a b c d e f");
        assert_eq!(cvt_mode("a m{{b c}} d m{{e f}}", Mode::Midi), "a b c d e f");
        assert_eq!(cvt_mode("a m{{\nb c\n}}", Mode::Midi), "a \nb c\n");
    }

    #[test]
    fn test_macros() {
        assert_eq!(
            cvt("$!(#8. #6)$ g g g g g g"),
            "g8.( g16) g8.( g16) g8.( g16) "
        );
        assert_eq!(
            cvt("$!(#8. #6)$ g g g g g g $$ g2"),
            "g8.( g16) g8.( g16) g8.( g16)  g2"
        );
        assert_eq!(
            cvt("$!(#8. #6)$:8.6 g g g g g g $$ g2 $8.6 g g $$ g4"),
            "g8.( g16) g8.( g16) g8.( g16)  g2 g8.( g16)  g4"
        );
        assert_eq!(
            cvt_config("$8.6 g g $$ g4", "macros: { \"8.6\": \"(#8. #6)\" }"),
            "g8.( g16)  g4"
        );
        assert_eq!(cvt("$!(#8. @6 #8 #)$ g b d"), "g8.( g16 b8 d) ");
    }

    #[test]
    fn test_named_macro_same_as_inline() {
        let mut ctx = ConversionContext::default();
        convert_syntax("$!(#8. #6)$:8.6 $$", &mut ctx).unwrap();
        let named = convert_syntax("$8.6 g g $$", &mut ctx).unwrap();
        assert_eq!(named, cvt("$!(#8. #6)$ g g $$"));
        assert_eq!(named, "g8.( g16) ");
    }

    #[test]
    fn test_macros_follow_context_config() {
        let mut ctx = ConversionContext::default();
        ctx.config = Config::from_yaml_str("macros: { \"8.6\": \"(#8. #6)\" }").unwrap();
        assert_eq!(convert_syntax("$8.6 g g $$", &mut ctx).unwrap(), "g8.( g16) ");

        convert_syntax("$!#4 #8$:x c d $$", &mut ctx).unwrap();
        assert_eq!(ctx.config.get_str("macros/x").as_deref(), Some("#4 #8"));
        assert_eq!(convert_syntax("$x e f $$", &mut ctx).unwrap(), "e4 f8 ");
    }

    #[test]
    fn test_missing_macro_fails() {
        let err = convert_syntax("$8.6 g g $$", &mut ConversionContext::default()).unwrap_err();
        assert_eq!(err.to_string(), "missing macro definition \"8.6\"");
        assert!(matches!(err, ConvertError::MissingMacroDefinition { .. }));
    }

    #[test]
    fn test_divisi() {
        assert_eq!(
            cvt("/1 a4 /2 b4 /u c2"),
            "<< { \\voiceOne a4 } \\new Voice { \\voiceTwo b4 } >> \\oneVoice c2"
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            cvt_config("\\key %key% fs4", "key: a \\major"),
            "\\key a \\major fis4"
        );
    }

    #[test]
    fn test_macro_use_case_multiline() {
        let src = "$8.6 g g
g g g g g g
g g g g g g
g g g g g g $$
g4 r g'
fs e d
cs d cs
b g a
$8.6 d, d d d d  d
d d d d d d
d d d d d d
d d d d d d $$
d2.";
        let expected = format!(
            "{}\ng4 r g'\nfis e d\ncis d cis\nb g a\n{}\nd2.",
            "g8.( g16) ".repeat(10),
            format!("d,8.( d16) {}", "d8.( d16) ".repeat(11)),
        );
        assert_eq!(cvt_config(src, "macros: { \"8.6\": \"(#8. #6)\" }"), expected);
    }

    #[test]
    fn test_macro_use_case_modifier() {
        assert_eq!(
            cvt_config("$8.6 g g g\\p g g g $$", "macros: { \"8.6\": \"(#8. #6)\" }"),
            "g8.( g16) g8.(\\p g16) g8.( g16) "
        );
    }
}
