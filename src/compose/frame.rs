use crate::{
    compose::disposal::DisposalMethod,
    foundation::core::{PixelBounds, Rgba8},
    foundation::error::{GifError, GifResult},
};

/// A raw decoded frame as handed over by an external decoder.
///
/// Implementations are read-only to the compositor. Sampling uses absolute canvas
/// coordinates and must return [`Rgba8::TRANSPARENT`] outside [`RawFrame::bounds`].
pub trait RawFrame {
    /// Rectangle covered by this frame on the canvas.
    fn bounds(&self) -> PixelBounds;

    /// Straight-alpha color at canvas position `(x, y)`.
    fn sample(&self, x: i32, y: i32) -> Rgba8;

    /// Disposal rule that governs how this frame merges with earlier frames.
    fn disposal(&self) -> DisposalMethod;
}

impl<F: RawFrame + ?Sized> RawFrame for &F {
    fn bounds(&self) -> PixelBounds {
        (**self).bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Rgba8 {
        (**self).sample(x, y)
    }

    fn disposal(&self) -> DisposalMethod {
        (**self).disposal()
    }
}

/// Owned RGBA sub-image positioned on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedFrame {
    left: i32,
    top: i32,
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
    disposal: DisposalMethod,
}

impl DecodedFrame {
    /// Wrap a tightly packed RGBA8 sub-image placed at `(left, top)`.
    pub fn new(
        left: i32,
        top: i32,
        width: u32,
        height: u32,
        rgba8: Vec<u8>,
        disposal: DisposalMethod,
    ) -> GifResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| GifError::invalid_animation("frame dimensions overflow"))?;
        if rgba8.len() != expected {
            return Err(GifError::invalid_animation(format!(
                "frame {width}x{height} expects {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            left,
            top,
            width,
            height,
            rgba8,
            disposal,
        })
    }

    /// Build a frame at the origin filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba8, disposal: DisposalMethod) -> Self {
        let rgba8 = color
            .to_array()
            .repeat((width as usize).saturating_mul(height as usize));
        Self {
            left: 0,
            top: 0,
            width,
            height,
            rgba8,
            disposal,
        }
    }

    /// Sub-image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sub-image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 sub-image bytes.
    pub fn rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// Overwrite one pixel, addressed in sub-image coordinates.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.rgba8[i..i + 4].copy_from_slice(&color.to_array());
    }
}

impl RawFrame for DecodedFrame {
    fn bounds(&self) -> PixelBounds {
        PixelBounds::from_origin_size(self.left, self.top, self.width, self.height)
    }

    fn sample(&self, x: i32, y: i32) -> Rgba8 {
        if !self.bounds().contains(x, y) {
            return Rgba8::TRANSPARENT;
        }
        let lx = (i64::from(x) - i64::from(self.left)) as usize;
        let ly = (i64::from(y) - i64::from(self.top)) as usize;
        let i = (ly * (self.width as usize) + lx) * 4;
        Rgba8::from_slice(&self.rgba8[i..i + 4])
    }

    fn disposal(&self) -> DisposalMethod {
        self.disposal
    }
}

/// Fully composited canvas for one frame: straight-alpha RGBA8, row-major, top to bottom.
///
/// Produced once by the compositor and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ResolvedFrame {
    pub(crate) fn from_pixels(width: u32, height: u32, pixels: &[Rgba8]) -> Self {
        let mut data = Vec::with_capacity(pixels.len() * 4);
        for px in pixels {
            data.extend_from_slice(&px.to_array());
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 bytes, tightly packed.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Rgba8::from_slice(&self.data[i..i + 4]))
    }

    /// Copy into an [`image::RgbaImage`] for export or inspection.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/frame.rs"]
mod tests;
