// this_file: crates/facemap/src/coverage.rs

//! Which characters a font can show

use facemap_core::FaceData;

/// Sorted set of codepoints mapped by a font's character map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    codepoints: Vec<u32>,
}

impl Coverage {
    /// Coverage of everything `data` maps to a glyph
    pub fn from_face(data: &dyn FaceData) -> Self {
        Self::from_codepoints(data.codepoints())
    }

    pub fn from_codepoints(mut codepoints: Vec<u32>) -> Self {
        codepoints.sort_unstable();
        codepoints.dedup();
        Self { codepoints }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.contains_codepoint(ch as u32)
    }

    pub fn contains_codepoint(&self, codepoint: u32) -> bool {
        self.codepoints.binary_search(&codepoint).is_ok()
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }

    /// Codepoints in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.codepoints.iter().copied()
    }
}
