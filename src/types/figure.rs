/// Tenue marker: hold the previous figure at this chord position.
pub const TENUE: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FigureToken {
    pub rest: bool,
    pub hidden: bool,
    /// Positional chord entries, `None` for a rest or an empty token.
    pub chord: Option<Vec<String>>,
    pub duration: Option<String>,
    /// Set during tenue resolution when the chord holds a tenue.
    pub extender: bool,
}

impl FigureToken {
    pub fn chord(entries: &[&str], duration: Option<&str>) -> Self {
        Self {
            chord: Some(entries.iter().map(|e| e.to_string()).collect()),
            duration: duration.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn rest(duration: Option<&str>) -> Self {
        Self {
            rest: true,
            duration: duration.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn has_tenue(&self) -> bool {
        self.chord
            .as_ref()
            .is_some_and(|chord| chord.iter().any(|entry| entry == TENUE))
    }
}
