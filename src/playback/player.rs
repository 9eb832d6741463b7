use crate::{
    compose::compositor,
    compose::disposal::DisposalMethod,
    compose::frame::{RawFrame, ResolvedFrame},
    foundation::core::Rect,
    foundation::error::{GifError, GifResult},
};

/// Static description of an animation, fixed at load time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationMetadata {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Per-frame delay in hundredths of a second.
    pub delays: Vec<u16>,
    /// Per-frame disposal method.
    pub disposals: Vec<DisposalMethod>,
}

impl AnimationMetadata {
    /// Number of frames described by the tables.
    pub fn frame_count(&self) -> usize {
        self.delays.len()
    }
}

/// Playback cursor: which frame is showing and how long it has been showing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaybackState {
    /// Current frame index.
    pub frame: usize,
    /// Time accumulated towards the current frame's delay, in hundredths of a second.
    pub elapsed_cs: f32,
}

/// Clock-driven cursor over a fully resolved animation.
///
/// `advance` takes `&mut self`; callers sharing a player across threads must serialize
/// access themselves. Resolved frames are immutable and can be read concurrently.
#[derive(Clone, Debug)]
pub struct Player {
    meta: AnimationMetadata,
    frames: Vec<ResolvedFrame>,
    state: PlaybackState,
}

impl Player {
    /// Build a player over already resolved frames.
    pub fn new(meta: AnimationMetadata, frames: Vec<ResolvedFrame>) -> GifResult<Self> {
        if frames.is_empty() {
            return Err(GifError::invalid_animation("player needs at least one frame"));
        }
        if meta.delays.len() != frames.len() || meta.disposals.len() != frames.len() {
            return Err(GifError::invalid_animation(format!(
                "table lengths differ: {} frames, {} delays, {} disposals",
                frames.len(),
                meta.delays.len(),
                meta.disposals.len()
            )));
        }
        if meta.width == 0 || meta.height == 0 {
            return Err(GifError::invalid_animation(format!(
                "canvas must have positive dimensions, got {}x{}",
                meta.width, meta.height
            )));
        }
        if let Some((idx, f)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.width() != meta.width || f.height() != meta.height)
        {
            return Err(GifError::invalid_animation(format!(
                "frame {idx} is {}x{}, canvas is {}x{}",
                f.width(),
                f.height(),
                meta.width,
                meta.height
            )));
        }

        Ok(Self {
            meta,
            frames,
            state: PlaybackState::default(),
        })
    }

    /// Resolve raw frames and build a player over them.
    pub fn from_raw<F: RawFrame>(raw: &[F], delays: Vec<u16>) -> GifResult<Self> {
        if delays.len() != raw.len() {
            return Err(GifError::invalid_animation(format!(
                "table lengths differ: {} frames, {} delays",
                raw.len(),
                delays.len()
            )));
        }
        let frames = compositor::resolve(raw)?;
        let meta = AnimationMetadata {
            width: frames[0].width(),
            height: frames[0].height(),
            delays,
            disposals: raw.iter().map(RawFrame::disposal).collect(),
        };
        Self::new(meta, frames)
    }

    /// Move time forward by `dt_secs` seconds.
    ///
    /// Steps at most one frame per call even if `dt_secs` spans several delays; the surplus
    /// carries into later calls. Returns `true` when the current frame changed.
    pub fn advance(&mut self, dt_secs: f32) -> bool {
        debug_assert!(dt_secs >= 0.0, "advance called with negative dt");
        self.state.elapsed_cs += dt_secs * 100.0;
        if self.state.elapsed_cs - f32::from(self.current_delay()) >= 0.0 {
            self.next_frame();
            return true;
        }
        false
    }

    /// Step to the next frame unconditionally, consuming the current frame's delay.
    pub fn next_frame(&mut self) {
        self.state.elapsed_cs -= f32::from(self.current_delay());
        self.state.frame = (self.state.frame + 1) % self.frames.len();
        if self.state.elapsed_cs < 0.0 {
            self.state.elapsed_cs = 0.0;
        }
        tracing::trace!(frame = self.state.frame, "frame changed");
    }

    /// Return to frame 0 with no accumulated time.
    pub fn reset(&mut self) {
        self.state = PlaybackState::default();
    }

    /// Current frame index.
    pub fn current_frame(&self) -> usize {
        self.state.frame
    }

    /// Delay of the current frame, in hundredths of a second.
    pub fn current_delay(&self) -> u16 {
        self.meta.delays[self.state.frame]
    }

    /// Pixels for the current frame.
    pub fn current_buffer(&self) -> &ResolvedFrame {
        &self.frames[self.state.frame]
    }

    /// Snapshot of the playback cursor.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Static animation description.
    pub fn metadata(&self) -> &AnimationMetadata {
        &self.meta
    }

    /// Resolved frame at `index`, if in range.
    pub fn frame(&self, index: usize) -> Option<&ResolvedFrame> {
        self.frames.get(index)
    }

    /// All resolved frames in order.
    pub fn frames(&self) -> &[ResolvedFrame] {
        &self.frames
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.meta.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.meta.height
    }

    /// Sum of all frame delays, in hundredths of a second.
    pub fn total_duration_cs(&self) -> u64 {
        self.meta.delays.iter().map(|&d| u64::from(d)).sum()
    }

    /// Where frame `index` sits in a horizontal strip atlas of all frames.
    pub fn tile_rect(&self, index: usize) -> Rect {
        let w = f64::from(self.meta.width);
        let x = index as f64 * w;
        Rect::new(x, 0.0, x + w, f64::from(self.meta.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
