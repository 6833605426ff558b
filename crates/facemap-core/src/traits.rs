//! The font-data contract
//!
//! Faces never parse font files themselves. Everything they need from a
//! loaded resource goes through [`FaceData`]: raw tables, names, axes,
//! the character map and unscaled metrics. `facemap-fontdb` provides the
//! implementation backed by real font files; tests provide their own.

use std::fmt;

/// An OpenType table or axis tag
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag([u8; 4]);

impl Tag {
    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }

    /// Parses a tag, padding short tags with spaces.
    ///
    /// Returns `None` for empty input, more than four bytes, or
    /// characters outside printable ASCII.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() || bytes.len() > 4 || !bytes.iter().all(|b| (0x20..=0x7e).contains(b))
        {
            return None;
        }
        let mut tag = [b' '; 4];
        tag[..bytes.len()].copy_from_slice(bytes);
        Some(Self(tag))
    }

    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

/// Entry ids in the `name` table
pub mod name_id {
    pub const FAMILY_NAME: u16 = 1;
    pub const SUBFAMILY_NAME: u16 = 2;
    pub const TYPOGRAPHIC_FAMILY_NAME: u16 = 16;
    pub const TYPOGRAPHIC_SUBFAMILY_NAME: u16 = 17;
}

/// One variation axis as declared by the font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInfo {
    pub tag: Tag,
    /// Position of the axis in the font's axis list; coordinates are indexed by it.
    pub index: usize,
    pub min_value: f32,
    pub default_value: f32,
    pub max_value: f32,
}

/// Font-wide line metrics in font units, y up
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineMetrics {
    pub ascender: f32,
    pub descender: f32,
    pub line_gap: f32,
}

/// Glyph ink box in font units, y up.
///
/// `y_bearing` is the top edge and `height` is negative for a glyph with
/// any vertical extent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InkBox {
    pub x_bearing: f32,
    pub y_bearing: f32,
    pub width: f32,
    pub height: f32,
}

/// Optional decoration metrics a font may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricTag {
    UnderlineSize,
    UnderlineOffset,
    StrikeoutSize,
    StrikeoutOffset,
}

/// A loaded font resource.
///
/// All metric queries take design coordinates indexed by
/// [`AxisInfo::index`]; an empty slice means the default instance.
pub trait FaceData: Send + Sync {
    /// Index of this face in its file (0 for single fonts)
    fn face_index(&self) -> u32;

    /// Size of the font's design grid
    fn units_per_em(&self) -> u16;

    /// Raw bytes of a table, or `None` when the font lacks it
    fn table(&self, tag: Tag) -> Option<&[u8]>;

    /// English (or first available) string for a `name` table entry
    fn name(&self, id: u16) -> Option<String>;

    /// Variation axes in font order
    fn axes(&self) -> Vec<AxisInfo>;

    /// Glyph the character map assigns to `ch`
    fn nominal_glyph(&self, ch: char) -> Option<u32>;

    /// Every codepoint the character map sends to a real glyph, sorted
    fn codepoints(&self) -> Vec<u32>;

    /// Ink box of a glyph, `None` if the font has no outline data for it
    fn ink_box(&self, glyph: u32, coords: &[f32]) -> Option<InkBox>;

    /// Horizontal advance of a glyph
    fn h_advance(&self, glyph: u32, coords: &[f32]) -> Option<f32>;

    /// Line metrics for horizontal layout
    fn h_metrics(&self, coords: &[f32]) -> Option<LineMetrics>;

    /// Line metrics for vertical layout; most fonts have none
    fn v_metrics(&self, coords: &[f32]) -> Option<LineMetrics>;

    /// Decoration metric, `None` if the font does not define it
    fn metric(&self, tag: MetricTag, coords: &[f32]) -> Option<f32>;
}
