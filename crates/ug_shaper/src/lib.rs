//! UG Shaper - Uyghur contextual shaping into presentation forms
//!
//! Converts logical Uyghur letters from the Arabic block into the glyphs of
//! Arabic Presentation Forms A/B, selecting isolated, initial, medial or final
//! forms from joining context and forming the mandatory lam-alef ligature.
//! The output renders correctly on platforms that do no shaping of their own.
//!
//! # Modules
//!
//! - `form_table`: Per-letter presentation forms and joining behaviour
//! - `scanner`: The shaping pass
//! - `options`: Serializable scanner options
//! - `detect`: Checks for text that needs shaping
//!
//! # Example
//!
//! ```rust
//! use ug_shaper::shape;
//!
//! // beh + yeh
//! assert_eq!(shape("\u{0628}\u{064A}"), "\u{FE91}\u{FEF2}");
//! ```

mod error;
pub mod detect;
pub mod form_table;
pub mod options;
mod scanner;

pub use error::*;
pub use scanner::*;

pub use detect::{count_shapeable, needs_shaping};
pub use form_table::{lookup, FormTable, LetterFormSet, PositionalForm};
pub use options::{LigaturePlaceholder, ShapeOptions};
