// this_file: crates/facemap/src/face.rs

//! Font faces: one loaded resource plus its style identity
//!
//! A face is built from font data, or derived from another face as a
//! synthetic style (a slanted "Italic", an alias under a different family
//! name). Derived faces share the source's data. Once a face is handed to
//! a [`SimpleFontMap`] it is frozen behind an `Arc`.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Weak};

use facemap_core::traits::name_id;
use facemap_core::{FaceData, FaceError, FontDescription, Language, Matrix, Result, Tag};
use facemap_fontdb::FontFile;

use crate::family::SimpleFamily;
use crate::fontmap::{MapState, SimpleFontMap};

/// Bytes of the `post` header up to and including `isFixedPitch`
const POST_FIXED_PITCH_END: usize = 16;

/// A font face
pub struct FontFace {
    data: Arc<dyn FaceData>,
    name: String,
    description: FontDescription,
    matrix: Matrix,
    x_scale: f64,
    y_scale: f64,
    synthetic: bool,
    languages: Option<Vec<Language>>,
    family: Weak<SimpleFamily>,
    map: Weak<MapState>,
}

impl FontFace {
    /// Loads face `index` from font bytes
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self> {
        let file = FontFile::from_data_index(data, index)?;
        Ok(Self::from_data(Arc::new(file)))
    }

    /// Loads face `index` from a font file
    pub fn from_file(path: impl AsRef<Path>, index: u32) -> Result<Self> {
        let file = FontFile::from_file_index(path, index)?;
        Ok(Self::from_data(Arc::new(file)))
    }

    /// Wraps already loaded font data.
    ///
    /// Family and style come from the `name` table, preferring the
    /// typographic entries. Missing names are treated as empty.
    pub fn from_data(data: Arc<dyn FaceData>) -> Self {
        let family_name = data
            .name(name_id::TYPOGRAPHIC_FAMILY_NAME)
            .or_else(|| data.name(name_id::FAMILY_NAME))
            .unwrap_or_default();
        let name = data
            .name(name_id::TYPOGRAPHIC_SUBFAMILY_NAME)
            .or_else(|| data.name(name_id::SUBFAMILY_NAME))
            .unwrap_or_default();
        let description = FontDescription::parse(&format!("{family_name} {name}"));

        Self::new(data, name, description, Matrix::IDENTITY, (1.0, 1.0), false)
    }

    /// Derives a face that draws `face`'s glyphs through `transform`.
    ///
    /// `name` is the style name only, e.g. "Italic" for a synthetic italic;
    /// the family is taken from `face`. The scale part of `transform` is
    /// split off into [`FontFace::scale_factors`] so that [`FontFace::matrix`]
    /// has unit scale.
    pub fn transformed(face: &FontFace, name: &str, transform: Option<&Matrix>) -> Result<Self> {
        if name.is_empty() {
            return Err(FaceError::invalid("name", "must not be empty"));
        }
        let transform = transform.ok_or_else(|| FaceError::invalid("transform", "is required"))?;

        let (x_scale, y_scale) = transform.font_scale_factors();
        if x_scale == 0.0 || y_scale == 0.0 || !x_scale.is_finite() || !y_scale.is_finite() {
            return Err(FaceError::invalid("transform", "must be invertible"));
        }

        let mut matrix = *transform;
        matrix.scale(1.0 / x_scale, 1.0 / y_scale);

        let description = FontDescription::parse(&format!("{} {}", face.family_name(), name));

        Ok(Self::new(
            Arc::clone(&face.data),
            name.to_string(),
            description,
            matrix,
            (x_scale, y_scale),
            true,
        ))
    }

    /// Derives a face that presents `face` under `fullname`.
    ///
    /// `fullname` includes the family, e.g. "Monospace Italic". The style
    /// name is whatever is left once the family is removed, with a bare
    /// family reading as "Regular".
    pub fn alias(face: &FontFace, fullname: &str) -> Result<Self> {
        if fullname.is_empty() {
            return Err(FaceError::invalid("fullname", "must not be empty"));
        }

        let description = FontDescription::parse(fullname);
        let mut style = description.clone();
        style.unset_family();
        let mut name = style.to_string();
        if name == "Normal" {
            name = "Regular".to_string();
        }

        Ok(Self::new(
            Arc::clone(&face.data),
            name,
            description,
            Matrix::IDENTITY,
            (1.0, 1.0),
            true,
        ))
    }

    fn new(
        data: Arc<dyn FaceData>,
        name: String,
        description: FontDescription,
        matrix: Matrix,
        (x_scale, y_scale): (f64, f64),
        synthetic: bool,
    ) -> Self {
        Self {
            data,
            name,
            description,
            matrix,
            x_scale,
            y_scale,
            synthetic,
            languages: None,
            family: Weak::new(),
            map: Weak::new(),
        }
    }

    /// Links the face to the family and map that are about to own it.
    pub(crate) fn attach(&mut self, family: Weak<SimpleFamily>, map: Weak<MapState>) {
        self.family = family;
        self.map = map;
    }

    pub(crate) fn set_languages(&mut self, languages: Vec<Language>) {
        self.languages = Some(languages);
    }

    /// Style name, e.g. "Bold Italic"
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family_name(&self) -> &str {
        self.description.family().unwrap_or("")
    }

    /// The description this face is matched by
    pub fn describe(&self) -> FontDescription {
        self.description.clone()
    }

    pub(crate) fn description(&self) -> &FontDescription {
        &self.description
    }

    pub fn is_synthesized(&self) -> bool {
        self.synthetic
    }

    /// Unit-scale transform applied to glyph outlines
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Scale split off the synthetic transform, `(1, 1)` for plain faces
    pub fn scale_factors(&self) -> (f64, f64) {
        (self.x_scale, self.y_scale)
    }

    pub fn data(&self) -> &Arc<dyn FaceData> {
        &self.data
    }

    /// Face index within the font file
    pub fn index(&self) -> u32 {
        self.data.face_index()
    }

    /// Languages the face claims to support, if anyone told us
    pub fn languages(&self) -> Option<&[Language]> {
        self.languages.as_deref()
    }

    /// The family this face was added to
    pub fn family(&self) -> Option<Arc<SimpleFamily>> {
        self.family.upgrade()
    }

    /// The map this face was added to, while it is still alive
    pub fn font_map(&self) -> Option<SimpleFontMap> {
        self.map.upgrade().map(SimpleFontMap::from_state)
    }

    /// Whether the `post` table marks the font as fixed pitch.
    ///
    /// A missing or truncated table means no.
    pub fn is_monospace(&self) -> bool {
        self.data.table(Tag::new(b"post")).is_some_and(|post| {
            post.len() >= POST_FIXED_PITCH_END && post[12..POST_FIXED_PITCH_END].iter().any(|&b| b != 0)
        })
    }

    /// Whether the font has any variation axes
    pub fn is_variable(&self) -> bool {
        !self.data.axes().is_empty()
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.name)
            .field("description", &self.description.to_string())
            .field("synthetic", &self.synthetic)
            .field("matrix", &self.matrix)
            .finish_non_exhaustive()
    }
}
