//! Default-ignorable characters and the box shapes used to show them
//!
//! Hex boxes normally print the codepoint in hex. Invisible format
//! characters are easier to recognize by a short nickname ("ZWJ", "LRM"),
//! so they get a box sized for the nickname instead.

/// Picks the `(rows, cols)` grid for characters that get a custom box.
pub trait IgnorableLookup: Send + Sync {
    /// `None` means the codepoint is drawn as a plain hex box.
    fn ignorable_size(&self, ch: u32) -> Option<(u32, u32)>;
}

/// Format characters and their nicknames, sorted by codepoint
static NICKNAMES: &[(u32, &str)] = &[
    (0x00AD, "SHY"),
    (0x034F, "CGJ"),
    (0x061C, "ALM"),
    (0x200B, "ZWS"),
    (0x200C, "ZWNJ"),
    (0x200D, "ZWJ"),
    (0x200E, "LRM"),
    (0x200F, "RLM"),
    (0x2028, "LS"),
    (0x2029, "PS"),
    (0x202A, "LRE"),
    (0x202B, "RLE"),
    (0x202C, "PDF"),
    (0x202D, "LRO"),
    (0x202E, "RLO"),
    (0x2060, "WJ"),
    (0x2061, "FA"),
    (0x2062, "IT"),
    (0x2063, "IS"),
    (0x2066, "LRI"),
    (0x2067, "RLI"),
    (0x2068, "FSI"),
    (0x2069, "PDI"),
    (0xFEFF, "ZWNBSP"),
];

/// Short display name of a default-ignorable character
pub fn nickname(ch: u32) -> Option<&'static str> {
    NICKNAMES
        .binary_search_by_key(&ch, |&(cp, _)| cp)
        .ok()
        .map(|i| NICKNAMES[i].1)
}

/// The built-in nickname table
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIgnorables;

impl IgnorableLookup for DefaultIgnorables {
    fn ignorable_size(&self, ch: u32) -> Option<(u32, u32)> {
        let len = nickname(ch)?.len() as u32;
        Some(match len {
            0..=3 => (1, len),
            4 => (2, 2),
            _ => (2, 3),
        })
    }
}
