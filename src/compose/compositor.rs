use rayon::prelude::*;

use crate::{
    compose::disposal::DisposalMethod,
    compose::frame::{RawFrame, ResolvedFrame},
    foundation::core::{PixelBounds, Rgba8},
    foundation::error::{GifError, GifResult},
};

/// Canvas size of an animation: the bounding box of every frame rectangle plus the origin.
pub fn canvas_bounds<F: RawFrame>(frames: &[F]) -> GifResult<PixelBounds> {
    if frames.is_empty() {
        return Err(GifError::invalid_animation("animation has no frames"));
    }
    let bounds = PixelBounds::union_with_origin(frames.iter().map(RawFrame::bounds));
    bounds.canvas_size()?;
    Ok(bounds)
}

/// Resolve every frame into the pixels that should be on screen at that index.
///
/// The canvas is derived with [`canvas_bounds`]. Output length always equals input length.
pub fn resolve<F: RawFrame>(frames: &[F]) -> GifResult<Vec<ResolvedFrame>> {
    let bounds = canvas_bounds(frames)?;
    let (width, height) = bounds.canvas_size()?;
    Ok(resolve_region(frames, bounds.min_x, bounds.min_y, width, height))
}

/// Resolve every frame onto an explicit `width` x `height` canvas anchored at the origin.
pub fn resolve_with_size<F: RawFrame>(
    frames: &[F],
    width: u32,
    height: u32,
) -> GifResult<Vec<ResolvedFrame>> {
    if frames.is_empty() {
        return Err(GifError::invalid_animation("animation has no frames"));
    }
    if width == 0 || height == 0 {
        return Err(GifError::invalid_animation(format!(
            "canvas must have positive dimensions, got {width}x{height}"
        )));
    }
    Ok(resolve_region(frames, 0, 0, width, height))
}

/// Resolve independent animations in parallel, one task per animation.
pub fn resolve_many<F>(animations: &[Vec<F>]) -> Vec<GifResult<Vec<ResolvedFrame>>>
where
    F: RawFrame + Sync,
{
    animations
        .par_iter()
        .map(|frames| resolve(frames))
        .collect()
}

#[tracing::instrument(skip(frames), fields(frame_count = frames.len()))]
fn resolve_region<F: RawFrame>(
    frames: &[F],
    origin_x: i32,
    origin_y: i32,
    width: u32,
    height: u32,
) -> Vec<ResolvedFrame> {
    let w = width as usize;
    let px_count = w * (height as usize);

    let mut accumulation = vec![Rgba8::TRANSPARENT; px_count];
    let mut last_kept = 0usize;
    let first = &frames[0];
    let first_disposal = first.disposal();

    let mut out = Vec::with_capacity(frames.len());
    let mut pixels = vec![Rgba8::TRANSPARENT; px_count];

    for (idx, frame) in frames.iter().enumerate() {
        let disposal = frame.disposal();
        let kept = &frames[last_kept];

        for y in 0..height {
            let cy = origin_y + y as i32;
            for x in 0..width {
                let cx = origin_x + x as i32;
                let i = (y as usize) * w + (x as usize);
                let own = frame.sample(cx, cy);

                pixels[i] = match disposal {
                    DisposalMethod::None => own,
                    DisposalMethod::DoNotDispose => {
                        if own.is_transparent() {
                            accumulation[i]
                        } else {
                            own
                        }
                    }
                    DisposalMethod::RestoreBackground => {
                        if own.is_transparent() && first_disposal == DisposalMethod::DoNotDispose
                        {
                            first.sample(cx, cy)
                        } else {
                            own
                        }
                    }
                    DisposalMethod::RestorePrevious => {
                        if own.is_transparent() {
                            kept.sample(cx, cy)
                        } else {
                            own
                        }
                    }
                };
            }
        }

        if disposal.accumulates() {
            accumulation.copy_from_slice(&pixels);
        }
        if disposal != DisposalMethod::RestorePrevious {
            last_kept = idx;
        }

        out.push(ResolvedFrame::from_pixels(width, height, &pixels));
    }

    tracing::debug!(width, height, frames = out.len(), "resolved animation");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
