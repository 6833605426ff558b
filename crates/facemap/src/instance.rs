// this_file: crates/facemap/src/instance.rs

//! Font instances: a face at a size, variation, gravity and transform
//!
//! An instance answers the questions a layout engine asks per glyph:
//! ink and logical extents (rotated for the gravity) and font-wide
//! metrics. The scaled font and the hex box setup are built on first use
//! and kept for the instance's lifetime.

use std::fmt;
use std::sync::{Arc, OnceLock};

use unicode_width::UnicodeWidthStr;

use facemap_core::{
    FontDescription, GlyphId, Gravity, Language, Matrix, MetricTag, Rect, GLYPH_EMPTY,
    GLYPH_UNKNOWN_FLAG, SCALE,
};

use crate::coverage::Coverage;
use crate::face::FontFace;
use crate::fontmap::SimpleFontMap;
use crate::hexbox::{HexBoxInfo, HEX_DIGITS};
use crate::ignorables::{DefaultIgnorables, IgnorableLookup};
use crate::scaled::ScaledFont;
use crate::variations::resolve_coords;

/// Font-wide metrics in `SCALE` units; positions are y up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub height: i32,
    pub approximate_char_width: i32,
    pub approximate_digit_width: i32,
    pub underline_position: i32,
    pub underline_thickness: i32,
    pub strikethrough_position: i32,
    pub strikethrough_thickness: i32,
}

/// A face realized for layout
pub struct FontInstance {
    face: Arc<FontFace>,
    size: i32,
    variations: Option<String>,
    gravity: Gravity,
    matrix: Matrix,
    ignorables: Arc<dyn IgnorableLookup>,
    scaled: OnceLock<ScaledFont>,
    coverage: OnceLock<Coverage>,
    hex_box: OnceLock<Option<HexBoxInfo>>,
}

impl FontInstance {
    /// Creates an instance of `face`.
    ///
    /// `size` is in device units times `SCALE`. `matrix` is the rendering
    /// transform of the caller's context, identity when `None`.
    pub fn new(
        face: Arc<FontFace>,
        size: i32,
        variations: Option<&str>,
        gravity: Gravity,
        matrix: Option<&Matrix>,
    ) -> Self {
        Self {
            face,
            size,
            variations: variations.map(str::to_string),
            gravity,
            matrix: matrix.copied().unwrap_or_default(),
            ignorables: Arc::new(DefaultIgnorables),
            scaled: OnceLock::new(),
            coverage: OnceLock::new(),
            hex_box: OnceLock::new(),
        }
    }

    /// Replaces the table deciding which characters get nickname boxes
    pub fn with_ignorable_lookup(mut self, ignorables: Arc<dyn IgnorableLookup>) -> Self {
        self.ignorables = ignorables;
        self
    }

    pub fn face(&self) -> &Arc<FontFace> {
        &self.face
    }

    /// Size in device units times `SCALE`
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn variations(&self) -> Option<&str> {
        self.variations.as_deref()
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn font_map(&self) -> Option<SimpleFontMap> {
        self.face.font_map()
    }

    pub fn languages(&self) -> Option<&[Language]> {
        self.face.languages()
    }

    /// The face's description with this instance's absolute size
    pub fn describe(&self) -> FontDescription {
        let mut desc = self.face.describe();
        desc.set_absolute_size(f64::from(self.size));
        desc
    }

    /// Whether the font maps `ch` to a glyph
    pub fn has_char(&self, ch: char) -> bool {
        self.scaled_font().nominal_glyph(ch).is_some()
    }

    /// Characters the font maps, collected on first use
    pub fn coverage(&self) -> &Coverage {
        self.coverage
            .get_or_init(|| Coverage::from_face(self.face.data().as_ref()))
    }

    /// The scaled font, created on first use
    pub fn scaled_font(&self) -> &ScaledFont {
        self.scaled.get_or_init(|| self.create_scaled_font())
    }

    fn create_scaled_font(&self) -> ScaledFont {
        let (mut x_scale, mut y_scale) = self.face.scale_factors();
        if self.gravity.is_improper() {
            x_scale = -x_scale;
            y_scale = -y_scale;
        }

        let axes = self.face.data().axes();
        let coords = match self.variations.as_deref() {
            Some(variations) if !axes.is_empty() => resolve_coords(&axes, variations),
            _ => Vec::new(),
        };

        let size = f64::from(self.size);
        ScaledFont::new(
            Arc::clone(self.face.data()),
            (size * x_scale) as i32,
            (size * y_scale) as i32,
            coords,
        )
    }

    /// Hex box setup, built the first time a missing glyph is measured
    pub fn hex_box(&self) -> Option<&HexBoxInfo> {
        self.hex_box.get_or_init(|| HexBoxInfo::build(self)).as_ref()
    }

    /// Ink and logical rectangles of `glyph`, in `SCALE` units with y down
    pub fn glyph_extents(&self, glyph: GlyphId) -> (Rect, Rect) {
        let font = self.scaled_font();

        if glyph == GLYPH_EMPTY {
            let extents = font.extents_for(self.gravity.is_vertical());
            let logical = Rect::new(
                0,
                -extents.ascender,
                0,
                extents.ascender - extents.descender,
            );
            return (Rect::ZERO, logical);
        }
        if glyph & GLYPH_UNKNOWN_FLAG != 0 {
            return self.missing_glyph_extents(glyph);
        }

        let b = font.glyph_box(glyph);
        let native = Rect::new(b.x_bearing, -b.y_bearing, b.width, -b.height);
        let r = self.face.matrix().transform_rect(&native);

        let mut ink = self.gravity.map_ink_rect(&r);
        if self.gravity.is_improper() {
            ink = Matrix::from_scale(-1.0, -1.0).transform_rect(&ink);
        }

        let advance = font.h_advance(glyph);
        let extents = font.h_extents();
        let height = extents.ascender - extents.descender;
        let (y, width) = match self.gravity {
            Gravity::South => (-extents.ascender, advance),
            Gravity::North => (extents.descender, advance),
            Gravity::East => (-height / 2, height),
            Gravity::West => (-height / 2, -height),
        };

        let mut logical = Rect::new(0, y, width, height);
        if self.gravity.is_improper() {
            logical.height = -logical.height;
            logical.y = -logical.y;
        }

        (ink, logical)
    }

    fn missing_glyph_extents(&self, glyph: GlyphId) -> (Rect, Rect) {
        let ch = glyph & !GLYPH_UNKNOWN_FLAG;
        let hex_box = self.hex_box();

        // Spaces are never drawn as boxes
        if ch == 0x20 || ch == 0x2423 {
            return self.space_extents();
        }

        match hex_box {
            Some(info) => info.layout().extents(glyph, self.ignorables.as_ref()),
            None => {
                log::debug!("No hex box for glyph {:#x}, using empty extents", glyph);
                (Rect::ZERO, Rect::ZERO)
            },
        }
    }

    fn space_extents(&self) -> (Rect, Rect) {
        let extents = self
            .scaled_font()
            .extents_for(self.gravity.is_vertical());
        let width = self.average_char_width(HEX_DIGITS);

        let ink = Rect::new(0, 0, width, 0);
        let logical = Rect::new(
            0,
            -extents.ascender,
            width,
            extents.ascender - extents.descender,
        );
        (ink, logical)
    }

    /// Summed ink right edges of the mapped characters of `text` per column
    fn average_char_width(&self, text: &str) -> i32 {
        let font = self.scaled_font();
        let total: i32 = text
            .chars()
            .filter_map(|ch| font.nominal_glyph(ch))
            .map(|glyph| self.glyph_extents(glyph).0.right())
            .sum();

        let columns = i32::try_from(text.width()).unwrap_or(i32::MAX);
        total.checked_div(columns).unwrap_or(0)
    }

    /// Largest ink right edge and ink height over the mapped characters of `text`
    pub(crate) fn max_char_size(&self, text: &str) -> (i32, i32) {
        let font = self.scaled_font();
        text.chars()
            .filter_map(|ch| font.nominal_glyph(ch))
            .map(|glyph| self.glyph_extents(glyph).0)
            .fold((0, 0), |(width, height), ink| {
                (width.max(ink.right()), height.max(ink.height))
            })
    }

    /// Font-wide metrics; character widths are estimated from the sample
    /// text of `language` (English when `None`).
    pub fn metrics(&self, language: Option<&Language>) -> FontMetrics {
        let font = self.scaled_font();
        let extents = font.h_extents();

        let ascent = extents.ascender;
        let mut metrics = FontMetrics {
            ascent,
            descent: -extents.descender,
            height: extents.ascender - extents.descender + extents.line_gap,
            underline_thickness: SCALE,
            underline_position: -SCALE,
            strikethrough_thickness: SCALE,
            strikethrough_position: ascent / 2,
            ..FontMetrics::default()
        };

        if let Some(value) = font.metric(MetricTag::UnderlineSize) {
            metrics.underline_thickness = value;
        }
        if let Some(value) = font.metric(MetricTag::UnderlineOffset) {
            metrics.underline_position = value;
        }
        if let Some(value) = font.metric(MetricTag::StrikeoutSize) {
            metrics.strikethrough_thickness = value;
        }
        if let Some(value) = font.metric(MetricTag::StrikeoutOffset) {
            metrics.strikethrough_position = value;
        }

        let sample = match language {
            Some(language) => language.sample_string(),
            None => Language::default().sample_string(),
        };
        metrics.approximate_char_width = self.average_char_width(sample);
        metrics.approximate_digit_width = self.max_char_size("0123456789").0;

        metrics
    }
}

impl fmt::Debug for FontInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontInstance")
            .field("face", &self.face.name())
            .field("size", &self.size)
            .field("variations", &self.variations)
            .field("gravity", &self.gravity)
            .field("matrix", &self.matrix)
            .finish_non_exhaustive()
    }
}
