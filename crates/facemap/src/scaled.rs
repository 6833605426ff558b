//! A face at a concrete scale and variation location
//!
//! Font data answers in font units with y up. [`ScaledFont`] converts to
//! `SCALE` units and fills in sensible defaults where the font is silent.
//! The scale may be negative on both axes (upside-down gravities), in which
//! case every value flips sign along with it.

use std::sync::Arc;

use facemap_core::{FaceData, InkBox, LineMetrics, MetricTag};

/// Font-wide extents in `SCALE` units, y up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineExtents {
    pub ascender: i32,
    pub descender: i32,
    pub line_gap: i32,
}

/// Glyph ink box in `SCALE` units, y up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphBox {
    pub x_bearing: i32,
    pub y_bearing: i32,
    pub width: i32,
    pub height: i32,
}

/// Font data bound to a scale and a set of design coordinates
pub struct ScaledFont {
    data: Arc<dyn FaceData>,
    x_scale: i32,
    y_scale: i32,
    units_per_em: f64,
    coords: Vec<f32>,
}

impl ScaledFont {
    pub fn new(data: Arc<dyn FaceData>, x_scale: i32, y_scale: i32, coords: Vec<f32>) -> Self {
        let units_per_em = f64::from(data.units_per_em().max(1));
        Self {
            data,
            x_scale,
            y_scale,
            units_per_em,
            coords,
        }
    }

    pub fn scale(&self) -> (i32, i32) {
        (self.x_scale, self.y_scale)
    }

    /// Design coordinates, empty for the default location
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    fn scale_x(&self, v: f32) -> i32 {
        (f64::from(v) * f64::from(self.x_scale) / self.units_per_em).round() as i32
    }

    fn scale_y(&self, v: f32) -> i32 {
        (f64::from(v) * f64::from(self.y_scale) / self.units_per_em).round() as i32
    }

    pub fn nominal_glyph(&self, ch: char) -> Option<u32> {
        self.data.nominal_glyph(ch)
    }

    /// Ink box of a glyph; all zero when the font has no outline for it
    pub fn glyph_box(&self, glyph: u32) -> GlyphBox {
        let ink: InkBox = self.data.ink_box(glyph, &self.coords).unwrap_or_default();
        GlyphBox {
            x_bearing: self.scale_x(ink.x_bearing),
            y_bearing: self.scale_y(ink.y_bearing),
            width: self.scale_x(ink.width),
            height: self.scale_y(ink.height),
        }
    }

    pub fn h_advance(&self, glyph: u32) -> i32 {
        self.scale_x(self.data.h_advance(glyph, &self.coords).unwrap_or(0.0))
    }

    /// Horizontal extents; 80% ascent and 20% descent of the em when the
    /// font has none.
    pub fn h_extents(&self) -> LineExtents {
        match self.data.h_metrics(&self.coords) {
            Some(m) => self.scale_line(m, Self::scale_y),
            None => {
                let ascender = (f64::from(self.y_scale) * 0.8) as i32;
                LineExtents {
                    ascender,
                    descender: ascender - self.y_scale,
                    line_gap: 0,
                }
            },
        }
    }

    /// Vertical extents, measured along x; half the em either side when
    /// the font has none.
    pub fn v_extents(&self) -> LineExtents {
        match self.data.v_metrics(&self.coords) {
            Some(m) => self.scale_line(m, Self::scale_x),
            None => {
                let ascender = self.x_scale / 2;
                LineExtents {
                    ascender,
                    descender: ascender - self.x_scale,
                    line_gap: 0,
                }
            },
        }
    }

    /// Extents for the layout direction
    pub fn extents_for(&self, vertical: bool) -> LineExtents {
        if vertical {
            self.v_extents()
        } else {
            self.h_extents()
        }
    }

    fn scale_line(&self, m: LineMetrics, scale: fn(&Self, f32) -> i32) -> LineExtents {
        LineExtents {
            ascender: scale(self, m.ascender),
            descender: scale(self, m.descender),
            line_gap: scale(self, m.line_gap),
        }
    }

    /// A decoration metric scaled along y, if the font defines it
    pub fn metric(&self, tag: MetricTag) -> Option<i32> {
        self.data
            .metric(tag, &self.coords)
            .map(|value| self.scale_y(value))
    }
}
