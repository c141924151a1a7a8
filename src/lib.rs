//! Ripple - shorthand to LilyPond conversion
//!
//! This library converts the compact Ripple notation (`.rpl`), figured bass
//! (`.fig`) and lyrics (`.lyr`) sources into LilyPond markup.

pub mod error;
pub mod figures;
pub mod file;
pub mod front_matter;
pub mod grammar;
pub mod include;
pub mod lyrics;
pub mod macros;
pub mod modal;
pub mod quoted;
pub mod syntax;
pub mod transforms;
pub mod types;

// Re-export commonly used types
pub use error::{ConvertError, Result};
pub use figures::convert_figures;
pub use file::{SourceKind, convert_file};
pub use lyrics::convert_lyrics;
pub use modal::filter_modal_sections;
pub use syntax::convert_syntax;
pub use types::config::Config;
pub use types::context::ConversionContext;
pub use types::mode::Mode;
pub use types::registry::MacroRegistry;
