//! Facemap: font faces, instances and a font map for text layout
//!
//! The pieces, from the bottom up:
//!
//! - [`FontFace`] wraps one loaded font and knows its family and style,
//!   whether it is monospace or variable, and any synthetic transform
//! - [`FontInstance`] is a face at a size, variation, gravity and
//!   transform; it measures glyphs and reports metrics
//! - [`hexbox`] lays out placeholder boxes for characters the font lacks
//! - [`SimpleFamily`] groups faces by family name
//! - [`SimpleFontMap`] resolves [`FontDescription`]s to instances
//!
//! Font data comes from `facemap-fontdb` or any other [`FaceData`]
//! implementation.
//!
//! [`FontDescription`]: facemap_core::FontDescription
//! [`FaceData`]: facemap_core::FaceData

pub mod coverage;
pub mod face;
pub mod family;
pub mod fontmap;
pub mod hexbox;
pub mod ignorables;
pub mod instance;
pub mod scaled;
pub mod variations;


pub use coverage::Coverage;
pub use face::FontFace;
pub use family::SimpleFamily;
pub use fontmap::{FontContext, FontMap, Fontset, SimpleFontMap};
pub use hexbox::{HexBoxInfo, HexBoxLayout};
pub use ignorables::{DefaultIgnorables, IgnorableLookup};
pub use instance::{FontInstance, FontMetrics};
pub use scaled::ScaledFont;
