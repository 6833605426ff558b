//! Textual font descriptions
//!
//! A description names one or more families and the style wanted from
//! them. The string form is
//!
//! ```text
//! [FAMILY-LIST] [STYLE-OPTIONS] [SIZE] [@VARIATIONS]
//! ```
//!
//! where the family list is comma separated, style options are words like
//! `Bold`, `Italic`, `Condensed` or `Rotated-Left`, the size is in points
//! (or device units with a `px` suffix) and variations are
//! `tag=value` pairs separated by commas.
//!
//! ```
//! use facemap_core::description::{FontDescription, Style, Weight};
//!
//! let desc = FontDescription::parse("Cantarell,Sans Bold Italic 11");
//! assert_eq!(desc.family(), Some("Cantarell,Sans"));
//! assert_eq!(desc.weight(), Weight::BOLD);
//! assert_eq!(desc.style(), Style::Italic);
//! assert_eq!(desc.to_string(), "Cantarell,Sans Bold Italic 11");
//! ```

use std::convert::Infallible;
use std::fmt::{self, Write};
use std::str::FromStr;

use crate::types::{Gravity, SCALE};

/// Slant of the glyphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Normal,
    Oblique,
    Italic,
}

/// Capitalization variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Normal,
    SmallCaps,
    AllSmallCaps,
    PetiteCaps,
    AllPetiteCaps,
    Unicase,
    TitleCaps,
}

/// Width class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Stretch {
    UltraCondensed,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
    #[default]
    Normal,
    SemiExpanded,
    Expanded,
    ExtraExpanded,
    UltraExpanded,
}

/// Numeric weight, 100 (thin) to 1000 (ultra heavy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(pub u16);

impl Weight {
    pub const THIN: Weight = Weight(100);
    pub const ULTRALIGHT: Weight = Weight(200);
    pub const LIGHT: Weight = Weight(300);
    pub const SEMILIGHT: Weight = Weight(350);
    pub const BOOK: Weight = Weight(380);
    pub const NORMAL: Weight = Weight(400);
    pub const MEDIUM: Weight = Weight(500);
    pub const SEMIBOLD: Weight = Weight(600);
    pub const BOLD: Weight = Weight(700);
    pub const ULTRABOLD: Weight = Weight(800);
    pub const HEAVY: Weight = Weight(900);
    pub const ULTRAHEAVY: Weight = Weight(1000);
}

impl Default for Weight {
    fn default() -> Self {
        Weight::NORMAL
    }
}

/// Requested size in `SCALE` units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub value: i32,
    /// Device units rather than points
    pub absolute: bool,
}

// Word tables. An empty word marks the default value, which is accepted
// through "Normal" and never printed.
const WEIGHTS: &[(Weight, &str)] = &[
    (Weight::THIN, "Thin"),
    (Weight::ULTRALIGHT, "Ultra-Light"),
    (Weight::ULTRALIGHT, "Extra-Light"),
    (Weight::LIGHT, "Light"),
    (Weight::SEMILIGHT, "Semi-Light"),
    (Weight::SEMILIGHT, "Demi-Light"),
    (Weight::BOOK, "Book"),
    (Weight::NORMAL, ""),
    (Weight::NORMAL, "Regular"),
    (Weight::MEDIUM, "Medium"),
    (Weight::SEMIBOLD, "Semi-Bold"),
    (Weight::SEMIBOLD, "Demi-Bold"),
    (Weight::BOLD, "Bold"),
    (Weight::ULTRABOLD, "Ultra-Bold"),
    (Weight::ULTRABOLD, "Extra-Bold"),
    (Weight::HEAVY, "Heavy"),
    (Weight::HEAVY, "Black"),
    (Weight::ULTRAHEAVY, "Ultra-Heavy"),
    (Weight::ULTRAHEAVY, "Extra-Heavy"),
    (Weight::ULTRAHEAVY, "Ultra-Black"),
    (Weight::ULTRAHEAVY, "Extra-Black"),
];

const STYLES: &[(Style, &str)] = &[
    (Style::Normal, ""),
    (Style::Normal, "Roman"),
    (Style::Oblique, "Oblique"),
    (Style::Italic, "Italic"),
];

const VARIANTS: &[(Variant, &str)] = &[
    (Variant::Normal, ""),
    (Variant::SmallCaps, "Small-Caps"),
    (Variant::AllSmallCaps, "All-Small-Caps"),
    (Variant::PetiteCaps, "Petite-Caps"),
    (Variant::AllPetiteCaps, "All-Petite-Caps"),
    (Variant::Unicase, "Unicase"),
    (Variant::TitleCaps, "Title-Caps"),
];

const STRETCHES: &[(Stretch, &str)] = &[
    (Stretch::UltraCondensed, "Ultra-Condensed"),
    (Stretch::ExtraCondensed, "Extra-Condensed"),
    (Stretch::Condensed, "Condensed"),
    (Stretch::SemiCondensed, "Semi-Condensed"),
    (Stretch::Normal, ""),
    (Stretch::SemiExpanded, "Semi-Expanded"),
    (Stretch::Expanded, "Expanded"),
    (Stretch::ExtraExpanded, "Extra-Expanded"),
    (Stretch::UltraExpanded, "Ultra-Expanded"),
];

const GRAVITIES: &[(Gravity, &str)] = &[
    (Gravity::South, "Not-Rotated"),
    (Gravity::South, "South"),
    (Gravity::North, "Upside-Down"),
    (Gravity::North, "North"),
    (Gravity::East, "Rotated-Left"),
    (Gravity::East, "East"),
    (Gravity::West, "Rotated-Right"),
    (Gravity::West, "West"),
];

/// Case-insensitive comparison where hyphens in `name` are optional.
fn word_matches(name: &str, word: &str) -> bool {
    let mut name = name.bytes().peekable();
    let mut word = word.bytes();
    loop {
        match (name.peek().copied(), word.next()) {
            (None, None) => return true,
            (Some(n), Some(w)) => {
                if n.eq_ignore_ascii_case(&w) {
                    name.next();
                } else if n == b'-' {
                    name.next();
                    // retry the same word byte against the next name byte
                    match name.peek() {
                        Some(n) if n.eq_ignore_ascii_case(&w) => {
                            name.next();
                        }
                        _ => return false,
                    }
                } else {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

fn lookup<T: Copy>(table: &[(T, &str)], word: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, name)| !name.is_empty() && word_matches(name, word))
        .map(|(value, _)| *value)
}

fn name_of<T: Copy + PartialEq>(table: &[(T, &'static str)], value: T) -> Option<&'static str> {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, name)| *name)
}

fn parse_size(word: &str) -> Option<Size> {
    let (number, absolute) = match word.strip_suffix("px") {
        Some(number) => (number, true),
        None => (word, false),
    };
    let size: f64 = number.parse().ok()?;
    if !(0.0..=1_000_000.0).contains(&size) {
        return None;
    }
    Some(Size {
        value: (size * SCALE as f64 + 0.5) as i32,
        absolute,
    })
}

/// Family, style, size, gravity and variations wanted from a font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FontDescription {
    family: Option<String>,
    style: Style,
    variant: Variant,
    weight: Weight,
    stretch: Stretch,
    gravity: Option<Gravity>,
    size: Option<Size>,
    variations: Option<String>,
}

impl FontDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the string form. Anything not recognized as size, style or
    /// variations is taken as the family list, so parsing never fails.
    pub fn parse(s: &str) -> Self {
        let mut desc = Self::new();
        let mut rest = s.trim_end();

        // Variations come last, introduced by '@'
        if let Some((start, word)) = last_word(rest, &[]) {
            if let Some(variations) = word.strip_prefix('@') {
                desc.variations = Some(variations.to_string());
                rest = rest[..start].trim_end();
            }
        }

        if let Some((start, word)) = last_word(rest, &[',']) {
            if let Some(size) = parse_size(word) {
                desc.size = Some(size);
                rest = rest[..start].trim_end();
            }
        }

        while let Some((start, word)) = last_word(rest, &[',']) {
            if !desc.apply_style_word(word) {
                break;
            }
            rest = rest[..start].trim_end();
        }

        let rest = rest.strip_suffix(',').unwrap_or(rest).trim();
        if !rest.is_empty() {
            let families: Vec<&str> = rest.split(',').map(str::trim).collect();
            desc.family = Some(families.join(","));
        }

        desc
    }

    /// Applies one style word; false if the word is not a style word.
    fn apply_style_word(&mut self, word: &str) -> bool {
        if word_matches("Normal", word) {
            return true;
        }
        if let Some(weight) = lookup(WEIGHTS, word) {
            self.weight = weight;
        } else if let Some(weight) = word
            .strip_prefix("weight=")
            .and_then(|w| w.parse::<u16>().ok())
        {
            self.weight = Weight(weight);
        } else if let Some(style) = lookup(STYLES, word) {
            self.style = style;
        } else if let Some(stretch) = lookup(STRETCHES, word) {
            self.stretch = stretch;
        } else if let Some(variant) = lookup(VARIANTS, word) {
            self.variant = variant;
        } else if let Some(gravity) = lookup(GRAVITIES, word) {
            self.gravity = Some(gravity);
        } else {
            return false;
        }
        true
    }

    /// True if `word` would be read as a style or size word.
    fn is_style_word(word: &str) -> bool {
        Self::new().apply_style_word(word) || parse_size(word).is_some()
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn set_family(&mut self, family: impl Into<String>) {
        self.family = Some(family.into());
    }

    pub fn unset_family(&mut self) {
        self.family = None;
    }

    /// Family names in preference order
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.family
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: Variant) {
        self.variant = variant;
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn stretch(&self) -> Stretch {
        self.stretch
    }

    pub fn set_stretch(&mut self, stretch: Stretch) {
        self.stretch = stretch;
    }

    /// Gravity, South when not set
    pub fn gravity(&self) -> Gravity {
        self.gravity.unwrap_or_default()
    }

    pub fn has_gravity(&self) -> bool {
        self.gravity.is_some()
    }

    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = Some(gravity);
    }

    pub fn unset_gravity(&mut self) {
        self.gravity = None;
    }

    /// Size in `SCALE` units, 0 when not set
    pub fn size(&self) -> i32 {
        self.size.map(|s| s.value).unwrap_or(0)
    }

    pub fn size_is_absolute(&self) -> bool {
        self.size.map(|s| s.absolute).unwrap_or(false)
    }

    pub fn has_size(&self) -> bool {
        self.size.is_some()
    }

    /// Sets a size in points (times `SCALE`)
    pub fn set_size(&mut self, size: i32) {
        self.size = Some(Size {
            value: size,
            absolute: false,
        });
    }

    /// Sets a size in device units (times `SCALE`)
    pub fn set_absolute_size(&mut self, size: f64) {
        self.size = Some(Size {
            value: size as i32,
            absolute: true,
        });
    }

    pub fn variations(&self) -> Option<&str> {
        self.variations.as_deref()
    }

    pub fn set_variations(&mut self, variations: Option<String>) {
        self.variations = variations;
    }

    /// Whether `new_match` fits `desc` better than `old_match`.
    ///
    /// Candidates must agree with `desc` on variant, stretch and gravity.
    /// Among those, equal style is preferred, then any two slanted styles
    /// (italic stands in for oblique and vice versa), and within each
    /// group the closest weight wins. A `None` old match loses to any
    /// acceptable candidate.
    pub fn better_match(
        desc: &FontDescription,
        old_match: Option<&FontDescription>,
        new_match: &FontDescription,
    ) -> bool {
        if new_match.variant != desc.variant
            || new_match.stretch != desc.stretch
            || new_match.gravity() != desc.gravity()
        {
            return false;
        }

        let old_distance = old_match.map_or(u32::MAX, |old| desc.distance(old));
        desc.distance(new_match) < old_distance
    }

    fn distance(&self, other: &FontDescription) -> u32 {
        let weight_gap = u32::from(self.weight.0.abs_diff(other.weight.0));
        if self.style == other.style {
            weight_gap
        } else if self.style != Style::Normal && other.style != Style::Normal {
            1_000_000 + weight_gap
        } else {
            u32::MAX
        }
    }
}

/// Last word of `s` and its byte offset.
///
/// Words end at whitespace or at any of `stops`. Returns `None` when `s`
/// is empty or ends in a stop character.
fn last_word<'a>(s: &'a str, stops: &[char]) -> Option<(usize, &'a str)> {
    let s = s.trim_end();
    let start = s
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace() || stops.contains(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let word = &s[start..];
    if word.is_empty() {
        None
    } else {
        Some((start, word))
    }
}

impl fmt::Display for FontDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();

        if let Some(family) = self.family.as_deref().filter(|f| !f.is_empty()) {
            out.push_str(family);
            // Keep a trailing style-looking word from being re-read as style
            if let Some((_, word)) = last_word(family, &[',']) {
                if Self::is_style_word(word) {
                    out.push(',');
                }
            }
        }

        let mut fields = Vec::new();
        match name_of(WEIGHTS, self.weight) {
            Some("") => {}
            Some(name) => fields.push(name.to_string()),
            None => fields.push(format!("weight={}", self.weight.0)),
        }
        fields.extend(name_of(STYLES, self.style).map(str::to_string));
        fields.extend(name_of(STRETCHES, self.stretch).map(str::to_string));
        fields.extend(name_of(VARIANTS, self.variant).map(str::to_string));
        if let Some(gravity) = self.gravity {
            fields.extend(name_of(GRAVITIES, gravity).map(str::to_string));
        }

        let mut has_style = false;
        for field in fields.iter().filter(|f| !f.is_empty()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(field);
            has_style = true;
        }

        if out.is_empty() && !has_style {
            out.push_str("Normal");
        }

        if let Some(size) = self.size {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            write!(out, "{}", size.value as f64 / SCALE as f64)?;
            if size.absolute {
                out.push_str("px");
            }
        }

        if let Some(variations) = self.variations.as_deref().filter(|v| !v.is_empty()) {
            write!(out, " @{variations}")?;
        }

        f.write_str(&out)
    }
}

impl FromStr for FontDescription {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
