//! Shared helpers for the integration tests

#![allow(dead_code)]

#[path = "../../src/test_support.rs"]
mod test_support;

use std::sync::Arc;

use facemap::{FontFace, SimpleFontMap};

pub use test_support::*;

/// A map with one face per `(family, style)` pair, in order
pub fn map_with(faces: &[(&str, &str)]) -> SimpleFontMap {
    let map = SimpleFontMap::new();
    for (family, style) in faces {
        map.add_data(MockFace::new(family, style).shared());
    }
    map
}

pub fn face(family: &str, style: &str) -> FontFace {
    FontFace::from_data(MockFace::new(family, style).shared())
}

pub fn shared_face(family: &str, style: &str) -> Arc<FontFace> {
    Arc::new(face(family, style))
}
