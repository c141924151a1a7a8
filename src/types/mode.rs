use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

/// Rendering pass a source file is converted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Part,
    Score,
    Midi,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Part => "part",
            Mode::Score => "score",
            Mode::Midi => "midi",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "part" => Ok(Mode::Part),
            "score" => Ok(Mode::Score),
            "midi" => Ok(Mode::Midi),
            _ => Err(anyhow!("Invalid mode: {}", s)),
        }
    }
}
