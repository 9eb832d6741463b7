use crate::foundation::error::{GifError, GifResult};

/// Canvas pixel limit applied by [`LoadOptions::default`] (4096 x 4096).
///
/// Every resolved frame owns a full canvas buffer, so the limit bounds the per-frame
/// allocation at 64 MiB no matter how far a tiny frame is offset.
pub const DEFAULT_MAX_CANVAS_PIXELS: u64 = 4096 * 4096;

/// Limits applied while loading an animation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadOptions {
    /// Stop decoding after this many frames.
    pub max_frames: Option<usize>,
    /// Reject animations whose canvas has more pixels than this. `None` disables the check.
    pub max_canvas_pixels: Option<u64>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_frames: None,
            max_canvas_pixels: Some(DEFAULT_MAX_CANVAS_PIXELS),
        }
    }
}

impl LoadOptions {
    /// Parse options from JSON, e.g. `{"max_frames": 64}`.
    pub fn from_json_str(s: &str) -> GifResult<Self> {
        let opts: Self =
            serde_json::from_str(s).map_err(|e| GifError::config(format!("load options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject limits that could never admit an animation.
    pub fn validate(&self) -> GifResult<()> {
        if self.max_frames == Some(0) {
            return Err(GifError::config("max_frames must be >= 1 when set"));
        }
        if self.max_canvas_pixels == Some(0) {
            return Err(GifError::config("max_canvas_pixels must be >= 1 when set"));
        }
        Ok(())
    }

    pub(crate) fn check_canvas(&self, width: u32, height: u32) -> GifResult<()> {
        let px = u64::from(width) * u64::from(height);
        match self.max_canvas_pixels {
            Some(limit) if px > limit => Err(GifError::invalid_animation(format!(
                "canvas {width}x{height} exceeds max_canvas_pixels {limit}"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/options.rs"]
mod tests;
