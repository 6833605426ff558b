//! Geometry shared by faces and instances: fixed-point rectangles,
//! affine matrices and gravity.

/// Fixed-point scale: one device unit is `SCALE` units.
pub const SCALE: i32 = 1024;

/// Glyph id for a glyph that occupies no space and draws nothing
pub const GLYPH_EMPTY: GlyphId = 0x0FFF_FFFF;

/// Glyph id produced for input that could not be decoded
pub const GLYPH_INVALID_INPUT: GlyphId = 0xFFFF_FFFF;

/// Set on glyph ids that stand for a codepoint the font cannot render.
/// The remaining bits carry the codepoint.
pub const GLYPH_UNKNOWN_FLAG: GlyphId = 0x1000_0000;

/// Glyph index as seen by the layout engine
pub type GlyphId = u32;

/// Builds the unknown-glyph id for a codepoint
pub const fn unknown_glyph(ch: u32) -> GlyphId {
    ch | GLYPH_UNKNOWN_FLAG
}

/// An integer rectangle in `SCALE` units, y pointing down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

/// A 2D affine transform.
///
/// Points transform as `x' = xx·x + xy·y + x0`, `y' = yx·x + yy·y + y0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(xx: f64, xy: f64, yx: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Self {
            xx,
            xy,
            yx,
            yy,
            x0,
            y0,
        }
    }

    /// Pure scale transform
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Applies `other` first, then `self`.
    pub fn concat(&mut self, other: &Matrix) {
        let tmp = *self;
        self.xx = tmp.xx * other.xx + tmp.xy * other.yx;
        self.xy = tmp.xx * other.xy + tmp.xy * other.yy;
        self.yx = tmp.yx * other.xx + tmp.yy * other.yx;
        self.yy = tmp.yx * other.xy + tmp.yy * other.yy;
        self.x0 = tmp.xx * other.x0 + tmp.xy * other.y0 + tmp.x0;
        self.y0 = tmp.yx * other.x0 + tmp.yy * other.y0 + tmp.y0;
    }

    /// Scales the input space before the current transform
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(&Matrix::from_scale(sx, sy));
    }

    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.xx * dx + self.xy * dy, self.yx * dx + self.yy * dy)
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let (dx, dy) = self.transform_distance(x, y);
        (dx + self.x0, dy + self.y0)
    }

    /// Transforms `rect` and returns the smallest integer rectangle
    /// containing the result. Width and height come out non-negative.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let (x0, y0) = self.transform_point(rect.x as f64, rect.y as f64);
        let (dx1, dy1) = self.transform_distance(rect.width as f64, 0.0);
        let (dx2, dy2) = self.transform_distance(0.0, rect.height as f64);

        let xs = [x0, x0 + dx1, x0 + dx2, x0 + dx1 + dx2];
        let ys = [y0, y0 + dy1, y0 + dy2, y0 + dy1 + dy2];

        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let x = min_x.floor();
        let y = min_y.floor();
        Rect {
            x: x as i32,
            y: y as i32,
            width: (max_x - x).ceil() as i32,
            height: (max_y - y).ceil() as i32,
        }
    }

    /// Scale factors along the transformed x axis and perpendicular to it.
    ///
    /// The first is the length of the image of the unit x vector, the
    /// second is `|det| / first`. A matrix that collapses the x axis
    /// yields `(0, 0)`.
    pub fn font_scale_factors(&self) -> (f64, f64) {
        let major = self.xx.hypot(self.yx);
        if major == 0.0 {
            return (0.0, 0.0);
        }
        let det = self.xx * self.yy - self.yx * self.xy;
        (major, det.abs() / major)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Direction that "down" points to for a run of glyphs.
///
/// North and West are improper: glyphs are drawn upside down relative to
/// South and East.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gravity {
    /// Glyphs stand upright (the default)
    #[default]
    South,
    /// Glyphs are rotated 90° counter-clockwise
    East,
    /// Glyphs are upside down
    North,
    /// Glyphs are rotated 90° clockwise
    West,
}

impl Gravity {
    /// East and West lay text out vertically
    pub fn is_vertical(self) -> bool {
        matches!(self, Gravity::East | Gravity::West)
    }

    /// North and West draw glyphs upside down
    pub fn is_improper(self) -> bool {
        matches!(self, Gravity::North | Gravity::West)
    }

    /// Maps an upright ink rectangle into this gravity's coordinate space.
    pub fn map_ink_rect(self, r: &Rect) -> Rect {
        match self {
            Gravity::South => *r,
            Gravity::North => Rect::new(-r.x, -r.y, -r.width, -r.height),
            Gravity::East => Rect::new(r.y, -r.x - r.width, r.height, r.width),
            Gravity::West => Rect::new(-r.y - r.height, r.x, r.height, r.width),
        }
    }
}
