//! Hand-assembled sfnt binaries for tests
//!
//! Shared with the integration tests through `#[path]`, so it only uses
//! std and `facemap_core`.

#![allow(dead_code)]

use facemap_core::traits::name_id;

pub fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn push_i16(buf: &mut Vec<u8>, v: i16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn push_fixed(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&((v * 65536.0) as i32).to_be_bytes());
}

pub fn head_table(units_per_em: u16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 1); // majorVersion
    push_u16(&mut t, 0); // minorVersion
    push_u32(&mut t, 0x0001_0000); // fontRevision
    push_u32(&mut t, 0); // checksumAdjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, units_per_em);
    t.extend_from_slice(&[0; 16]); // created, modified
    t.extend_from_slice(&[0; 8]); // bbox
    push_u16(&mut t, 0); // macStyle
    push_u16(&mut t, 8); // lowestRecPPEM
    push_u16(&mut t, 2); // fontDirectionHint
    push_u16(&mut t, 0); // indexToLocFormat: short
    push_u16(&mut t, 0); // glyphDataFormat
    assert_eq!(t.len(), 54);
    t
}

/// `post` v3 with underline position -100 and thickness 50
pub fn post_table(fixed_pitch: u32) -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0003_0000);
    push_u32(&mut t, 0); // italicAngle
    push_i16(&mut t, -100);
    push_i16(&mut t, 50);
    push_u32(&mut t, fixed_pitch);
    t.extend_from_slice(&[0; 16]);
    assert_eq!(t.len(), 32);
    t
}

pub fn name_table(names: &[(u16, &str)]) -> Vec<u8> {
    let mut records = Vec::new();
    let mut strings = Vec::new();
    for (id, value) in names {
        let encoded: Vec<u8> = value.encode_utf16().flat_map(|u| u.to_be_bytes()).collect();
        push_u16(&mut records, 3); // Windows
        push_u16(&mut records, 1); // Unicode BMP
        push_u16(&mut records, 0x0409); // en-US
        push_u16(&mut records, *id);
        push_u16(&mut records, encoded.len() as u16);
        push_u16(&mut records, strings.len() as u16);
        strings.extend_from_slice(&encoded);
    }

    let mut t = Vec::new();
    push_u16(&mut t, 0);
    push_u16(&mut t, names.len() as u16);
    push_u16(&mut t, (6 + 12 * names.len()) as u16);
    t.extend_from_slice(&records);
    t.extend_from_slice(&strings);
    t
}

/// `maxp` v0.5
pub fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0000_5000);
    push_u16(&mut t, num_glyphs);
    t
}

pub fn hhea_table(ascender: i16, descender: i16, line_gap: i16, num_h_metrics: u16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000);
    push_i16(&mut t, ascender);
    push_i16(&mut t, descender);
    push_i16(&mut t, line_gap);
    push_u16(&mut t, 600); // advanceWidthMax
    push_i16(&mut t, 0); // minLeftSideBearing
    push_i16(&mut t, 0); // minRightSideBearing
    push_i16(&mut t, 450); // xMaxExtent
    push_i16(&mut t, 1); // caretSlopeRise
    push_i16(&mut t, 0); // caretSlopeRun
    push_i16(&mut t, 0); // caretOffset
    t.extend_from_slice(&[0; 8]); // reserved
    push_i16(&mut t, 0); // metricDataFormat
    push_u16(&mut t, num_h_metrics);
    assert_eq!(t.len(), 36);
    t
}

pub fn hmtx_table(metrics: &[(u16, i16)]) -> Vec<u8> {
    let mut t = Vec::new();
    for &(advance, lsb) in metrics {
        push_u16(&mut t, advance);
        push_i16(&mut t, lsb);
    }
    t
}

/// A rectangle glyph from (x_min, y_min) to (x_max, y_max)
pub fn box_glyph(x_min: i16, y_min: i16, x_max: i16, y_max: i16) -> Vec<u8> {
    let mut t = Vec::new();
    push_i16(&mut t, 1); // numberOfContours
    push_i16(&mut t, x_min);
    push_i16(&mut t, y_min);
    push_i16(&mut t, x_max);
    push_i16(&mut t, y_max);
    push_u16(&mut t, 3); // endPtsOfContours
    push_u16(&mut t, 0); // instructionLength
    t.extend_from_slice(&[0x01; 4]); // on-curve, long coordinates
    for dx in [x_min, x_max - x_min, 0, x_min - x_max] {
        push_i16(&mut t, dx);
    }
    for dy in [y_min, 0, y_max - y_min, 0] {
        push_i16(&mut t, dy);
    }
    t
}

/// `loca` (short offsets) and `glyf` for the given glyphs
pub fn loca_glyf(glyphs: &[Vec<u8>]) -> (Vec<u8>, Vec<u8>) {
    let mut loca = Vec::new();
    let mut glyf = Vec::new();
    for glyph in glyphs {
        push_u16(&mut loca, (glyf.len() / 2) as u16);
        glyf.extend_from_slice(glyph);
        if glyf.len() % 2 != 0 {
            glyf.push(0);
        }
    }
    push_u16(&mut loca, (glyf.len() / 2) as u16);
    (loca, glyf)
}

/// `cmap` with one Windows BMP format 4 subtable mapping single characters
pub fn cmap_table(map: &[(char, u16)]) -> Vec<u8> {
    let mut segments: Vec<(u16, u16)> = map.iter().map(|&(ch, gid)| (ch as u16, gid)).collect();
    segments.sort_unstable();
    segments.push((0xFFFF, 0));

    let seg_count = segments.len() as u16;
    let mut sub = Vec::new();
    push_u16(&mut sub, 4); // format
    push_u16(&mut sub, 16 + 8 * seg_count); // length
    push_u16(&mut sub, 0); // language
    push_u16(&mut sub, seg_count * 2);
    let entry_selector = 15 - seg_count.leading_zeros() as u16;
    let search_range = 2 << entry_selector;
    push_u16(&mut sub, search_range);
    push_u16(&mut sub, entry_selector);
    push_u16(&mut sub, seg_count * 2 - search_range);
    for &(code, _) in &segments {
        push_u16(&mut sub, code); // endCode
    }
    push_u16(&mut sub, 0); // reservedPad
    for &(code, _) in &segments {
        push_u16(&mut sub, code); // startCode
    }
    for &(code, gid) in &segments {
        let delta = if code == 0xFFFF { 1 } else { gid.wrapping_sub(code) };
        push_u16(&mut sub, delta);
    }
    for _ in &segments {
        push_u16(&mut sub, 0); // idRangeOffset
    }

    let mut t = Vec::new();
    push_u16(&mut t, 0); // version
    push_u16(&mut t, 1); // numTables
    push_u16(&mut t, 3); // Windows
    push_u16(&mut t, 1); // Unicode BMP
    push_u32(&mut t, 12);
    t.extend_from_slice(&sub);
    t
}

/// `OS/2` v0 with the given strikeout and without USE_TYPO_METRICS
pub fn os2_table(strikeout_size: i16, strikeout_position: i16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 0); // version
    push_i16(&mut t, 500); // xAvgCharWidth
    push_u16(&mut t, 400); // usWeightClass
    push_u16(&mut t, 5); // usWidthClass
    push_u16(&mut t, 0); // fsType
    t.extend_from_slice(&[0; 16]); // sub/superscript
    push_i16(&mut t, strikeout_size);
    push_i16(&mut t, strikeout_position);
    push_i16(&mut t, 0); // sFamilyClass
    t.extend_from_slice(&[0; 10]); // panose
    t.extend_from_slice(&[0; 16]); // ulUnicodeRange1-4
    t.extend_from_slice(b"NONE"); // achVendID
    push_u16(&mut t, 0x0040); // fsSelection: REGULAR
    push_u16(&mut t, 0x41); // usFirstCharIndex
    push_u16(&mut t, 0x41); // usLastCharIndex
    push_i16(&mut t, 750); // sTypoAscender
    push_i16(&mut t, -250); // sTypoDescender
    push_i16(&mut t, 0); // sTypoLineGap
    push_u16(&mut t, 900); // usWinAscent
    push_u16(&mut t, 300); // usWinDescent
    assert_eq!(t.len(), 78);
    t
}

/// `fvar` with `(tag, min, default, max)` axes and no named instances
pub fn fvar_table(axes: &[(&[u8; 4], f32, f32, f32)]) -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 1); // majorVersion
    push_u16(&mut t, 0); // minorVersion
    push_u16(&mut t, 16); // axesArrayOffset
    push_u16(&mut t, 2); // reserved
    push_u16(&mut t, axes.len() as u16);
    push_u16(&mut t, 20); // axisSize
    push_u16(&mut t, 0); // instanceCount
    push_u16(&mut t, 4 + 4 * axes.len() as u16); // instanceSize
    for (i, (tag, min, default, max)) in axes.iter().enumerate() {
        t.extend_from_slice(*tag);
        push_fixed(&mut t, *min);
        push_fixed(&mut t, *default);
        push_fixed(&mut t, *max);
        push_u16(&mut t, 0); // flags
        push_u16(&mut t, 256 + i as u16); // axisNameID
    }
    t
}

/// `vhea` 1.1 with the given line metrics
pub fn vhea_table(ascender: i16, descender: i16, line_gap: i16) -> Vec<u8> {
    let mut t = hhea_table(ascender, descender, line_gap, 0);
    t[0..4].copy_from_slice(&0x0001_1000u32.to_be_bytes());
    t
}

/// `MVAR` whose `(tag, delta)` records apply in full at the maximum of the
/// first of two axes and not at all at or below its default.
///
/// Tags must be sorted.
pub fn mvar_table(records: &[(&[u8; 4], i16)]) -> Vec<u8> {
    let record_count = records.len() as u16;
    let mut t = Vec::new();
    push_u16(&mut t, 1); // majorVersion
    push_u16(&mut t, 0); // minorVersion
    push_u16(&mut t, 0); // reserved
    push_u16(&mut t, 8); // valueRecordSize
    push_u16(&mut t, record_count);
    push_u16(&mut t, 12 + 8 * record_count); // itemVariationStoreOffset
    for (inner, (tag, _)) in records.iter().enumerate() {
        t.extend_from_slice(*tag);
        push_u16(&mut t, 0); // deltaSetOuterIndex
        push_u16(&mut t, inner as u16);
    }

    // Item variation store: header, region list at 12, data at 28
    push_u16(&mut t, 1); // format
    push_u32(&mut t, 12); // variationRegionListOffset
    push_u16(&mut t, 1); // itemVariationDataCount
    push_u32(&mut t, 28);

    push_u16(&mut t, 2); // axisCount
    push_u16(&mut t, 1); // regionCount
    for coord in [0, 0x4000, 0x4000, 0, 0, 0] {
        push_u16(&mut t, coord); // start, peak, end per axis (F2Dot14)
    }

    push_u16(&mut t, record_count); // itemCount
    push_u16(&mut t, 1); // wordDeltaCount
    push_u16(&mut t, 1); // regionIndexCount
    push_u16(&mut t, 0);
    for (_, delta) in records {
        push_i16(&mut t, *delta);
    }
    t
}

/// Assembles an sfnt; tables are sorted by tag here
pub fn sfnt(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut tables: Vec<&(&[u8; 4], Vec<u8>)> = tables.iter().collect();
    tables.sort_by_key(|(tag, _)| **tag);

    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000);
    push_u16(&mut font, tables.len() as u16);
    push_u16(&mut font, 0);
    push_u16(&mut font, 0);
    push_u16(&mut font, 0);

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in tables {
        font.extend_from_slice(*tag);
        push_u32(&mut font, 0);
        push_u32(&mut font, offset as u32);
        push_u32(&mut font, data.len() as u32);

        let mut padded = data.clone();
        while padded.len() % 4 != 0 {
            padded.push(0);
        }
        offset += padded.len();
        body.extend_from_slice(&padded);
    }
    font.extend_from_slice(&body);
    font
}

/// Names, `head` (2048 upem) and `post` only; no glyphs
pub fn tiny_font(fixed_pitch: u32) -> Vec<u8> {
    sfnt(&[
        (b"head", head_table(2048)),
        (
            b"name",
            name_table(&[
                (name_id::FAMILY_NAME, "Tiny"),
                (name_id::SUBFAMILY_NAME, "Bold"),
                (name_id::TYPOGRAPHIC_FAMILY_NAME, "Tiny Sans"),
            ]),
        ),
        (b"post", post_table(fixed_pitch)),
    ])
}

/// Ink box of the only outline glyph in [`box_font`], font units
pub const BOX: (i16, i16, i16, i16) = (50, -100, 450, 700);

/// A 1000 upem font with an empty `.notdef` and glyph 1, a [`BOX`]
/// mapped from 'A' with advance 600.
///
/// Line metrics come from `hhea` (800, -200, 90); underline from `post`
/// (-100, 50); strikeout from `OS/2` (50, 300).
pub fn box_font() -> Vec<u8> {
    let (x_min, y_min, x_max, y_max) = BOX;
    let (loca, glyf) = loca_glyf(&[Vec::new(), box_glyph(x_min, y_min, x_max, y_max)]);
    sfnt(&[
        (b"OS/2", os2_table(50, 300)),
        (b"cmap", cmap_table(&[('A', 1)])),
        (b"glyf", glyf),
        (b"head", head_table(1000)),
        (b"hhea", hhea_table(800, -200, 90, 2)),
        (b"hmtx", hmtx_table(&[(500, 0), (600, x_min)])),
        (b"loca", loca),
        (b"maxp", maxp_table(2)),
        (
            b"name",
            name_table(&[(name_id::FAMILY_NAME, "Box"), (name_id::SUBFAMILY_NAME, "Regular")]),
        ),
        (b"post", post_table(0)),
    ])
}

/// A glyphless font with `fvar` axes `wght` 100..400..900 and
/// `wdth` 50..100..200.
///
/// `vhea` extents are 500 / -500 / 0; `MVAR` adds 100 to the vertical
/// ascender and -50 to the descender at `wght` 900.
pub fn variable_font() -> Vec<u8> {
    sfnt(&[
        (b"MVAR", mvar_table(&[(b"vasc", 100), (b"vdsc", -50)])),
        (b"vhea", vhea_table(500, -500, 0)),
        (
            b"fvar",
            fvar_table(&[(b"wght", 100.0, 400.0, 900.0), (b"wdth", 50.0, 100.0, 200.0)]),
        ),
        (b"head", head_table(1000)),
        (b"name", name_table(&[(name_id::FAMILY_NAME, "Flex")])),
        (b"post", post_table(0)),
    ])
}
