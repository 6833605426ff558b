// this_file: crates/facemap-fontdb/src/lib.rs

//! Font files as facemap font data
//!
//! [`FontFile`] owns the raw bytes of a font (or one face of a collection)
//! and answers every [`FaceData`] query on demand, re-creating the
//! zero-copy `FontRef` for each call instead of keeping a self-referential
//! parse around.

use std::fs;
use std::path::Path;

use read_fonts::{
    tables::mvar::tags::{VASC, VDSC, VLGP},
    types::Tag as ReadTag,
    FileRef, FontRef, TableProvider,
};
use skrifa::{
    instance::{Location, Size},
    string::StringId,
    GlyphId, MetadataProvider,
};

use facemap_core::{
    error::FontLoadError,
    traits::{AxisInfo, FaceData, InkBox, LineMetrics, MetricTag, Tag},
};

/// One face of a font file, held in memory
pub struct FontFile {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl FontFile {
    /// Opens the first face of a font file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face of a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let data =
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;

        Self::from_data_index(data, face_index)
    }

    /// Uses the first face in `data`
    pub fn from_data(data: Vec<u8>) -> Result<Self, FontLoadError> {
        Self::from_data_index(data, 0)
    }

    /// Uses face `face_index` in `data`
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self, FontLoadError> {
        let font = match FileRef::new(&data).map_err(|_| FontLoadError::InvalidData)? {
            FileRef::Font(font) if face_index == 0 => font,
            FileRef::Font(_) => return Err(FontLoadError::FaceIndexOutOfRange { index: face_index }),
            FileRef::Collection(collection) => collection
                .get(face_index)
                .map_err(|_| FontLoadError::FaceIndexOutOfRange { index: face_index })?,
        };

        let units_per_em = match font.head() {
            Ok(head) => head.units_per_em(),
            Err(_) => {
                log::warn!("Face {} has no readable head table, assuming 1000 upem", face_index);
                1000
            },
        };

        Ok(Self {
            data,
            face_index,
            units_per_em,
        })
    }

    /// Number of faces in a font file, 0 if the data is not a font
    pub fn face_count(data: &[u8]) -> u32 {
        match FileRef::new(data) {
            Ok(FileRef::Font(_)) => 1,
            Ok(FileRef::Collection(collection)) => collection.len(),
            Err(_) => 0,
        }
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.face_index).ok()
    }

    fn location(font: &FontRef<'_>, coords: &[f32]) -> Location {
        let axes = font.axes();
        axes.location(axes.iter().zip(coords).map(|(axis, value)| (axis.tag(), *value)))
    }
}

impl FaceData for FontFile {
    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn table(&self, tag: Tag) -> Option<&[u8]> {
        let font = self.font_ref()?;
        font.table_data(ReadTag::new(&tag.to_be_bytes()))
            .map(|data| data.as_bytes())
    }

    fn name(&self, id: u16) -> Option<String> {
        let font = self.font_ref()?;
        font.localized_strings(StringId::new(id))
            .english_or_first()
            .map(|name| name.to_string())
            .filter(|name| !name.is_empty())
    }

    fn axes(&self) -> Vec<AxisInfo> {
        let Some(font) = self.font_ref() else {
            return Vec::new();
        };
        font.axes()
            .iter()
            .map(|axis| AxisInfo {
                tag: Tag::new(&axis.tag().to_be_bytes()),
                index: axis.index(),
                min_value: axis.min_value(),
                default_value: axis.default_value(),
                max_value: axis.max_value(),
            })
            .collect()
    }

    fn nominal_glyph(&self, ch: char) -> Option<u32> {
        self.font_ref()?.charmap().map(ch).map(|gid| gid.to_u32())
    }

    fn codepoints(&self) -> Vec<u32> {
        let Some(font) = self.font_ref() else {
            return Vec::new();
        };
        let mut codepoints: Vec<u32> = font
            .charmap()
            .mappings()
            .filter(|(_, gid)| gid.to_u32() != 0)
            .map(|(cp, _)| cp)
            .collect();
        codepoints.sort_unstable();
        codepoints.dedup();
        codepoints
    }

    fn ink_box(&self, glyph: u32, coords: &[f32]) -> Option<InkBox> {
        let font = self.font_ref()?;
        let location = Self::location(&font, coords);
        let bounds = font
            .glyph_metrics(Size::unscaled(), &location)
            .bounds(GlyphId::new(glyph))?;

        Some(InkBox {
            x_bearing: bounds.x_min,
            y_bearing: bounds.y_max,
            width: bounds.x_max - bounds.x_min,
            height: bounds.y_min - bounds.y_max,
        })
    }

    fn h_advance(&self, glyph: u32, coords: &[f32]) -> Option<f32> {
        let font = self.font_ref()?;
        let location = Self::location(&font, coords);
        font.glyph_metrics(Size::unscaled(), &location)
            .advance_width(GlyphId::new(glyph))
    }

    fn h_metrics(&self, coords: &[f32]) -> Option<LineMetrics> {
        let font = self.font_ref()?;
        if font.hhea().is_err() && font.os2().is_err() {
            return None;
        }
        let location = Self::location(&font, coords);
        let metrics = font.metrics(Size::unscaled(), &location);

        Some(LineMetrics {
            ascender: metrics.ascent,
            descender: metrics.descent,
            line_gap: metrics.leading,
        })
    }

    fn v_metrics(&self, coords: &[f32]) -> Option<LineMetrics> {
        let font = self.font_ref()?;
        let vhea = font.vhea().ok()?;
        let mut metrics = LineMetrics {
            ascender: vhea.ascender().to_i16() as f32,
            descender: vhea.descender().to_i16() as f32,
            line_gap: vhea.line_gap().to_i16() as f32,
        };

        let location = Self::location(&font, coords);
        if let (Ok(mvar), false) = (font.mvar(), location.coords().is_empty()) {
            let delta = |tag| {
                mvar.metric_delta(tag, location.coords())
                    .map(|d| d.to_f64() as f32)
                    .unwrap_or_default()
            };
            metrics.ascender += delta(VASC);
            metrics.descender += delta(VDSC);
            metrics.line_gap += delta(VLGP);
        }

        Some(metrics)
    }

    fn metric(&self, tag: MetricTag, coords: &[f32]) -> Option<f32> {
        let font = self.font_ref()?;
        let location = Self::location(&font, coords);
        let metrics = font.metrics(Size::unscaled(), &location);

        match tag {
            MetricTag::UnderlineSize => metrics.underline.map(|d| d.thickness),
            MetricTag::UnderlineOffset => metrics.underline.map(|d| d.offset),
            MetricTag::StrikeoutSize => metrics.strikeout.map(|d| d.thickness),
            MetricTag::StrikeoutOffset => metrics.strikeout.map(|d| d.offset),
        }
    }
}

#[cfg(test)]
mod test_font;
