//! Variation strings such as `"wght=650,wdth=80"`
//!
//! A face's axes define which tags mean anything; the string only
//! overrides them. Coordinates are indexed by the axis index the font
//! declares, not by position in the string.

use facemap_core::{AxisInfo, Tag};

/// One parsed `tag=value` token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariationSetting {
    pub tag: Tag,
    pub value: f32,
}

impl VariationSetting {
    /// Parses a single token; surrounding whitespace is ignored.
    pub fn parse(token: &str) -> Option<Self> {
        let (tag, value) = token.split_once('=')?;
        let tag = Tag::parse(tag.trim())?;
        let value = value.trim().parse::<f32>().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self { tag, value })
    }
}

/// Parses every well-formed token of a comma-separated list.
///
/// Malformed tokens are dropped.
pub fn parse_variations(variations: &str) -> impl Iterator<Item = VariationSetting> + '_ {
    variations
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| {
            let setting = VariationSetting::parse(token);
            if setting.is_none() {
                log::debug!("Skipping malformed variation '{}'", token.trim());
            }
            setting
        })
}

/// Design coordinates for `axes` with `variations` applied over the defaults.
///
/// The result has one slot per axis, indexed by [`AxisInfo::index`].
/// Settings naming an axis the face does not have are ignored, and when a
/// tag appears more than once the last value wins.
pub fn resolve_coords(axes: &[AxisInfo], variations: &str) -> Vec<f32> {
    let len = axes.iter().map(|axis| axis.index + 1).max().unwrap_or(0);
    let mut coords = vec![0.0; len];
    for axis in axes {
        coords[axis.index] = axis.default_value;
    }

    for setting in parse_variations(variations) {
        match axes.iter().find(|axis| axis.tag == setting.tag) {
            Some(axis) => coords[axis.index] = setting.value,
            None => log::debug!("Face has no '{}' axis, ignoring", setting.tag),
        }
    }

    coords
}
