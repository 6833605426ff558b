// this_file: crates/facemap/src/family.rs

//! Families: faces that share a family name

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use facemap_core::FontDescription;

use crate::face::FontFace;

/// An ordered list of faces sharing a family name.
///
/// Whether the family counts as monospace or variable is decided by the
/// face that created it.
pub struct SimpleFamily {
    name: String,
    monospace: bool,
    variable: bool,
    faces: RwLock<Vec<Arc<FontFace>>>,
}

impl SimpleFamily {
    pub(crate) fn new(name: &str, monospace: bool, variable: bool) -> Self {
        Self {
            name: name.to_string(),
            monospace,
            variable,
            faces: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn add_face(&self, face: Arc<FontFace>) {
        self.faces.write().push(face);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_monospace(&self) -> bool {
        self.monospace
    }

    pub fn is_variable(&self) -> bool {
        self.variable
    }

    /// Faces in the order they were added
    pub fn faces(&self) -> Vec<Arc<FontFace>> {
        self.faces.read().clone()
    }

    /// The first face with style `name`, or the first face for `None`
    pub fn face(&self, name: Option<&str>) -> Option<Arc<FontFace>> {
        self.faces
            .read()
            .iter()
            .find(|face| name.map_or(true, |name| face.name() == name))
            .cloned()
    }

    /// The face that fits `desc` best; the earliest face wins ties.
    ///
    /// `None` if no face has the variant, stretch and gravity `desc` asks for.
    pub fn find_best_face(&self, desc: &FontDescription) -> Option<Arc<FontFace>> {
        let faces = self.faces.read();
        let mut best: Option<&Arc<FontFace>> = None;

        for face in faces.iter() {
            let old = best.map(|face| face.description());
            if FontDescription::better_match(desc, old, face.description()) {
                best = Some(face);
            }
        }

        best.cloned()
    }
}

impl fmt::Debug for SimpleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleFamily")
            .field("name", &self.name)
            .field("monospace", &self.monospace)
            .field("variable", &self.variable)
            .field("faces", &self.faces.read().len())
            .finish()
    }
}
