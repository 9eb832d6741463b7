use crate::foundation::error::{GifError, GifResult};

pub use kurbo::Rect;

/// Straight-alpha RGBA8 pixel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Build a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a fully opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Read a pixel from the first four bytes of `px`.
    pub fn from_slice(px: &[u8]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }

    /// Channels in RGBA order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Fully transparent pixels fall through to whatever the disposal rule supplies.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Integer pixel rectangle; `max` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelBounds {
    /// Left edge (inclusive).
    pub min_x: i32,
    /// Top edge (inclusive).
    pub min_y: i32,
    /// Right edge (exclusive).
    pub max_x: i32,
    /// Bottom edge (exclusive).
    pub max_y: i32,
}

impl PixelBounds {
    /// Build bounds from both corners.
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Build bounds from a top-left corner and a size.
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Horizontal extent; negative when inverted.
    pub fn width(self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    /// Vertical extent; negative when inverted.
    pub fn height(self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }

    /// Whether `(x, y)` lies inside.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// Smallest rectangle covering the origin and every input rectangle.
    pub fn union_with_origin<I>(bounds: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        bounds
            .into_iter()
            .fold(Self::new(0, 0, 0, 0), |acc, b| Self {
                min_x: acc.min_x.min(b.min_x),
                min_y: acc.min_y.min(b.min_y),
                max_x: acc.max_x.max(b.max_x),
                max_y: acc.max_y.max(b.max_y),
            })
    }

    /// Canvas dimensions, rejecting empty or oversized rectangles.
    pub fn canvas_size(self) -> GifResult<(u32, u32)> {
        let (w, h) = (self.width(), self.height());
        if w <= 0 || h <= 0 {
            return Err(GifError::invalid_animation(format!(
                "canvas must have positive dimensions, got {w}x{h}"
            )));
        }
        let w = u32::try_from(w)
            .map_err(|_| GifError::invalid_animation(format!("canvas width {w} overflows")))?;
        let h = u32::try_from(h)
            .map_err(|_| GifError::invalid_animation(format!("canvas height {h} overflows")))?;
        Ok((w, h))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
