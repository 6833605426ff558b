//! Facemap core: the vocabulary shared by every facemap crate
//!
//! - [`types`] - fixed-point rectangles, affine matrices, gravity and the
//!   glyph sentinels the layout engine hands us
//! - [`description`] - textual font descriptions and best-match ordering
//! - [`language`] - language tags and their sample strings
//! - [`traits::FaceData`] - what a loaded font resource must answer
//! - [`error`] - the error types

pub mod description;
pub mod error;
pub mod language;
pub mod traits;
pub mod types;

pub use description::{FontDescription, Stretch, Style, Variant, Weight};
pub use error::{FaceError, FontLoadError, Result};
pub use language::Language;
pub use traits::{AxisInfo, FaceData, InkBox, LineMetrics, MetricTag, Tag};
pub use types::{
    unknown_glyph, GlyphId, Gravity, Matrix, Rect, GLYPH_EMPTY, GLYPH_INVALID_INPUT,
    GLYPH_UNKNOWN_FLAG, SCALE,
};

#[cfg(test)]
mod proptests;
