// this_file: crates/facemap/src/hexbox.rs

//! Hex boxes: placeholder glyphs for characters a font cannot show
//!
//! A hex box is a frame around the codepoint's hex digits, drawn with a
//! miniature monospace font. This module computes its geometry; drawing
//! is up to the renderer. Sizes are in device units (pixels) as `f64`,
//! converted to `SCALE` units only when rectangles are produced.

use std::sync::Arc;

use facemap_core::{GlyphId, Language, Rect, GLYPH_INVALID_INPUT, GLYPH_UNKNOWN_FLAG, SCALE};

use crate::fontmap::{FontContext, FontMap};
use crate::ignorables::IgnorableLookup;
use crate::instance::FontInstance;

/// The digits a box can contain
pub const HEX_DIGITS: &str = "0123456789ABCDEF";

const SCALE_F: f64 = SCALE as f64;

/// Rows and mini font size (in `SCALE` units) for an instance of `size`.
///
/// Two rows of digits at `size / 2.2`; when that gets too small, a single
/// row at up to 6 units.
pub fn mini_font_size(size: i32) -> (u32, f64) {
    let mini_size = f64::from(size) / 2.2;
    if mini_size < 6.0 {
        (1, f64::from(size.saturating_sub(1).max(0)).min(6.0))
    } else {
        (2, mini_size)
    }
}

/// Box geometry shared by every missing glyph of one instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexBoxLayout {
    pub rows: u32,
    pub digit_width: f64,
    pub digit_height: f64,
    pub pad_x: f64,
    pub pad_y: f64,
    pub line_width: f64,
    pub box_height: f64,
    pub box_descent: f64,
}

impl HexBoxLayout {
    /// Lays out boxes of `rows` digit rows.
    ///
    /// `mini_size` is in `SCALE` units; digit sizes and the host font's
    /// `ascent` and `descent` (both positive for a normal font) are in
    /// device units.
    pub fn new(
        rows: u32,
        mini_size: f64,
        digit_width: f64,
        digit_height: f64,
        ascent: f64,
        descent: f64,
    ) -> Self {
        let pad = ((ascent + descent) / 43.0).min(mini_size / SCALE_F);
        let pad_x = pad;
        let pad_y = pad;
        let line_width = pad_x.min(pad_y);

        let box_height = 3.0 * pad_y + f64::from(rows) * (pad_y + digit_height);

        let box_descent = if rows == 1 || box_height <= ascent {
            2.0 * pad_y
        } else if box_height <= ascent + descent - 2.0 * pad_y {
            2.0 * pad_y + box_height - ascent
        } else {
            descent * box_height / (ascent + descent)
        };

        Self {
            rows,
            digit_width,
            digit_height,
            pad_x,
            pad_y,
            line_width,
            box_height,
            box_descent,
        }
    }

    /// Rows and columns of the box for a missing glyph
    pub fn grid(&self, glyph: GlyphId, ignorables: &dyn IgnorableLookup) -> (u32, u32) {
        let ch = glyph & !GLYPH_UNKNOWN_FLAG;

        if glyph == GLYPH_INVALID_INPUT || ch > 0x10FFFF {
            return (self.rows, 1);
        }
        if let Some(size) = ignorables.ignorable_size(ch) {
            return size;
        }
        let digits = if ch > 0xFFFF { 6 } else { 4 };
        (self.rows, digits / self.rows)
    }

    /// Ink and logical rectangles of the box for a missing glyph
    pub fn extents(&self, glyph: GlyphId, ignorables: &dyn IgnorableLookup) -> (Rect, Rect) {
        let (_, cols) = self.grid(glyph, ignorables);
        let columns = f64::from(cols) * (self.digit_width + self.pad_x);

        let ink = Rect::new(
            (SCALE_F * self.pad_x) as i32,
            (SCALE_F * (self.box_descent - self.box_height)) as i32,
            (SCALE_F * (3.0 * self.pad_x + columns)) as i32,
            (SCALE_F * self.box_height) as i32,
        );
        let logical = Rect::new(
            0,
            (SCALE_F * (self.box_descent - (self.box_height + self.pad_y))) as i32,
            (SCALE_F * (5.0 * self.pad_x + columns)) as i32,
            (SCALE_F * (self.box_height + 2.0 * self.pad_y)) as i32,
        );

        (ink, logical)
    }
}

/// A computed layout and the mini font its digits are drawn with
pub struct HexBoxInfo {
    font: Arc<FontInstance>,
    layout: HexBoxLayout,
}

impl HexBoxInfo {
    /// Builds the hex box setup for `instance`.
    ///
    /// The mini font is loaded through the instance's font map as
    /// "monospace" with the instance's other attributes, so a bold font
    /// gets bold digits. Without a live map there is nothing to load it
    /// from and the result is `None`.
    pub fn build(instance: &FontInstance) -> Option<Self> {
        let Some(map) = instance.font_map() else {
            log::debug!("No font map for hex boxes of {}", instance.describe());
            return None;
        };

        let mut desc = instance.describe();
        // The box is rotated, not the digits
        desc.unset_gravity();
        desc.set_family("monospace");

        let (rows, mini_size) = mini_font_size(instance.size());
        desc.set_absolute_size(mini_size);

        let context = FontContext {
            matrix: Some(*instance.matrix()),
            language: Some(Language::new("en")),
        };
        let font = map.load_font(&context, &desc)?;

        let (width, height) = font.max_char_size(HEX_DIGITS);
        let extents = instance.scaled_font().h_extents();
        let ascent = f64::from(extents.ascender) / SCALE_F;
        let descent = -f64::from(extents.descender) / SCALE_F;

        let layout = HexBoxLayout::new(
            rows,
            mini_size,
            f64::from(width) / SCALE_F,
            f64::from(height) / SCALE_F,
            ascent,
            descent,
        );
        log::debug!("Hex box layout for {}: {:?}", instance.describe(), layout);

        Some(Self { font, layout })
    }

    /// The font the digits are drawn with
    pub fn font(&self) -> &Arc<FontInstance> {
        &self.font
    }

    pub fn layout(&self) -> &HexBoxLayout {
        &self.layout
    }
}
