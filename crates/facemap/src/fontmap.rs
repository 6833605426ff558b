// this_file: crates/facemap/src/fontmap.rs

//! The font map: a registry of families that resolves descriptions to fonts
//!
//! Faces are added explicitly, from files, bytes or already loaded data;
//! nothing is discovered on the system. A description names families in
//! preference order and the map picks the best face of the first family it
//! knows.
//!
//! ```
//! use facemap::{FontContext, FontMap, SimpleFontMap};
//! use facemap_core::FontDescription;
//!
//! let map = SimpleFontMap::new();
//! // Nothing registered yet, so nothing to load
//! let desc = FontDescription::parse("Sans Bold 12");
//! assert!(map.load_font(&FontContext::default(), &desc).is_none());
//! ```

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use facemap_core::{FaceData, FontDescription, Language, Matrix, Result};

use crate::face::FontFace;
use crate::family::SimpleFamily;
use crate::ignorables::{DefaultIgnorables, IgnorableLookup};
use crate::instance::FontInstance;

/// Resolution used when nothing else is configured
pub const DEFAULT_DPI: f64 = 96.0;

/// Environment variable read by [`SimpleFontMap::from_env`]
pub const DPI_ENV_VAR: &str = "FONTMAP_DPI";

/// Per-request state from the layout engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontContext {
    /// Rendering transform handed to every loaded font
    pub matrix: Option<Matrix>,
    /// Language a fontset is tagged with when the caller names none
    pub language: Option<Language>,
}

/// Fonts for a fallback chain, in preference order
#[derive(Debug, Clone, Default)]
pub struct Fontset {
    language: Option<Language>,
    fonts: Vec<Arc<FontInstance>>,
}

impl Fontset {
    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    pub fn fonts(&self) -> &[Arc<FontInstance>] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// First font that has a glyph for `ch`
    pub fn font_for_char(&self, ch: char) -> Option<&Arc<FontInstance>> {
        self.fonts.iter().find(|font| font.has_char(ch))
    }
}

/// What the layout engine needs from a font map
pub trait FontMap {
    /// Registered families in registration order
    fn list_families(&self) -> Vec<Arc<SimpleFamily>>;

    /// Family by case-insensitive name
    fn family(&self, name: &str) -> Option<Arc<SimpleFamily>>;

    /// The best font for `desc`, falling back to the first family
    fn load_font(&self, context: &FontContext, desc: &FontDescription) -> Option<Arc<FontInstance>>;

    /// One font per requested family that the map knows.
    ///
    /// The set is tagged with `language`, or the context's language when
    /// that is `None`.
    fn load_fontset(
        &self,
        context: &FontContext,
        desc: &FontDescription,
        language: Option<&Language>,
    ) -> Fontset;

    /// Changes whenever the map changes
    fn serial(&self) -> u32;
}

pub(crate) struct MapState {
    families: RwLock<Vec<Arc<SimpleFamily>>>,
    dpi: RwLock<f64>,
    serial: AtomicU32,
    ignorables: RwLock<Arc<dyn IgnorableLookup>>,
}

/// A font map holding explicitly added faces.
///
/// Cloning is cheap and clones share the registry. Faces only keep a weak
/// link back, so the registry goes away with its last `SimpleFontMap`.
#[derive(Clone)]
pub struct SimpleFontMap {
    state: Arc<MapState>,
}

impl Default for SimpleFontMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleFontMap {
    pub fn new() -> Self {
        Self::with_resolution(DEFAULT_DPI)
    }

    pub fn with_resolution(dpi: f64) -> Self {
        Self {
            state: Arc::new(MapState {
                families: RwLock::new(Vec::new()),
                dpi: RwLock::new(dpi),
                serial: AtomicU32::new(1),
                ignorables: RwLock::new(Arc::new(DefaultIgnorables)),
            }),
        }
    }

    /// A map whose resolution comes from `FONTMAP_DPI` when set
    pub fn from_env() -> Self {
        let dpi = match std::env::var(DPI_ENV_VAR) {
            Ok(value) => match value.trim().parse::<f64>() {
                Ok(dpi) if dpi.is_finite() && dpi > 0.0 => {
                    log::info!("Font map resolution {} dpi via {}", dpi, DPI_ENV_VAR);
                    dpi
                },
                _ => {
                    log::warn!("Ignoring invalid {}={:?}", DPI_ENV_VAR, value);
                    DEFAULT_DPI
                },
            },
            Err(_) => DEFAULT_DPI,
        };
        Self::with_resolution(dpi)
    }

    pub(crate) fn from_state(state: Arc<MapState>) -> Self {
        Self { state }
    }

    /// Whether two handles refer to the same registry
    pub fn ptr_eq(&self, other: &SimpleFontMap) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn changed(&self) {
        self.state.serial.fetch_add(1, Ordering::SeqCst);
    }

    /// Adds a face, creating its family on first use
    pub fn add_face(&self, face: FontFace) -> Arc<FontFace> {
        self.insert_face(face)
    }

    /// Adds a face together with the languages it supports
    pub fn add_face_with_languages(&self, mut face: FontFace, languages: Vec<Language>) -> Arc<FontFace> {
        face.set_languages(languages);
        self.insert_face(face)
    }

    /// Loads face `index` of a font file and adds it
    pub fn add_file(&self, path: impl AsRef<Path>, index: u32) -> Result<Arc<FontFace>> {
        let face = FontFace::from_file(path, index)?;
        Ok(self.add_face(face))
    }

    /// Loads face `index` from font bytes and adds it
    pub fn add_bytes(&self, data: Vec<u8>, index: u32) -> Result<Arc<FontFace>> {
        let face = FontFace::from_bytes(data, index)?;
        Ok(self.add_face(face))
    }

    /// Wraps loaded font data in a face and adds it
    pub fn add_data(&self, data: Arc<dyn FaceData>) -> Arc<FontFace> {
        self.add_face(FontFace::from_data(data))
    }

    fn insert_face(&self, mut face: FontFace) -> Arc<FontFace> {
        let family_name = face.family_name().to_string();

        let family = {
            let mut families = self.state.families.write();
            match find_family(&families, &family_name) {
                Some(family) => family,
                None => {
                    log::debug!("New family '{}'", family_name);
                    let family = Arc::new(SimpleFamily::new(
                        &family_name,
                        face.is_monospace(),
                        face.is_variable(),
                    ));
                    families.push(Arc::clone(&family));
                    family
                },
            }
        };

        face.attach(Arc::downgrade(&family), Arc::downgrade(&self.state));
        let face = Arc::new(face);
        family.add_face(Arc::clone(&face));

        self.changed();
        face
    }

    /// Sets the resolution used to turn point sizes into device units
    pub fn set_resolution(&self, dpi: f64) {
        *self.state.dpi.write() = dpi;
        self.changed();
    }

    pub fn resolution(&self) -> f64 {
        *self.state.dpi.read()
    }

    /// Replaces the nickname table for fonts loaded from now on
    pub fn set_ignorable_lookup(&self, ignorables: Arc<dyn IgnorableLookup>) {
        *self.state.ignorables.write() = ignorables;
        self.changed();
    }

    /// Requested size in device units times `SCALE`
    fn device_size(&self, desc: &FontDescription) -> i32 {
        if desc.size_is_absolute() {
            desc.size()
        } else {
            (f64::from(desc.size()) * self.resolution() / 72.0) as i32
        }
    }

    fn instantiate(
        &self,
        face: Arc<FontFace>,
        context: &FontContext,
        desc: &FontDescription,
    ) -> Arc<FontInstance> {
        let ignorables = self.state.ignorables.read().clone();
        let instance = FontInstance::new(
            face,
            self.device_size(desc),
            desc.variations(),
            desc.gravity(),
            context.matrix.as_ref(),
        );
        Arc::new(instance.with_ignorable_lookup(ignorables))
    }

    /// Copy of `desc` for matching against faces, which have no gravity
    fn match_description(desc: &FontDescription) -> FontDescription {
        let mut copy = desc.clone();
        copy.unset_gravity();
        copy
    }
}

fn find_family(families: &[Arc<SimpleFamily>], name: &str) -> Option<Arc<SimpleFamily>> {
    families
        .iter()
        .find(|family| family.name().eq_ignore_ascii_case(name))
        .cloned()
}

impl FontMap for SimpleFontMap {
    fn list_families(&self) -> Vec<Arc<SimpleFamily>> {
        self.state.families.read().clone()
    }

    fn family(&self, name: &str) -> Option<Arc<SimpleFamily>> {
        find_family(&self.state.families.read(), name)
    }

    fn load_font(&self, context: &FontContext, desc: &FontDescription) -> Option<Arc<FontInstance>> {
        let family = {
            let families = self.state.families.read();
            let first = families.first()?;
            desc.families()
                .find_map(|name| find_family(&families, name))
                .unwrap_or_else(|| Arc::clone(first))
        };

        let face = match family.find_best_face(&Self::match_description(desc)) {
            Some(face) => face,
            None => {
                log::warn!("No match for pattern '{}', falling back to default face", desc);
                family.face(None)?
            },
        };

        Some(self.instantiate(face, context, desc))
    }

    fn load_fontset(
        &self,
        context: &FontContext,
        desc: &FontDescription,
        language: Option<&Language>,
    ) -> Fontset {
        let pattern = Self::match_description(desc);
        let families: Vec<Arc<SimpleFamily>> = {
            let registered = self.state.families.read();
            desc.families()
                .filter_map(|name| find_family(&registered, name))
                .collect()
        };

        let fonts = families
            .iter()
            .filter_map(|family| family.find_best_face(&pattern))
            .map(|face| self.instantiate(face, context, desc))
            .collect();

        Fontset {
            language: language.or(context.language.as_ref()).cloned(),
            fonts,
        }
    }

    fn serial(&self) -> u32 {
        self.state.serial.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for SimpleFontMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleFontMap")
            .field("families", &self.state.families.read().len())
            .field("dpi", &self.resolution())
            .field("serial", &self.serial())
            .finish()
    }
}
