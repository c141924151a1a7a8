use crate::types::config::Config;
use crate::types::mode::Mode;
use crate::types::registry::MacroRegistry;

/// State shared by every conversion performed for one rendering pass.
///
/// Engines only read the context, except for macro registration, which
/// writes into the `macros` mapping of `config`.
#[derive(Debug, Clone, Default)]
pub struct ConversionContext {
    /// `None` drops every mode-conditional section.
    pub mode: Option<Mode>,
    pub config: Config,
}

impl ConversionContext {
    pub fn new(mode: Option<Mode>, config: Config) -> Self {
        Self { mode, config }
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self::new(Some(mode), Config::new())
    }

    pub fn macros(&mut self) -> MacroRegistry<'_> {
        MacroRegistry::new(&mut self.config)
    }
}
