//! gifplay composites animated GIF frames and plays them back on a clock.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: the `gif` crate turns bytes into positioned RGBA sub-frames, delays and
//!    disposal codes ([`decode_frames`]).
//! 2. **Resolve**: every frame is composited once, eagerly, into the exact pixels that are
//!    visible at that index ([`resolve`]).
//! 3. **Play**: a [`Player`] owns the resolved frames and steps a cursor as time passes.
//! 4. **Present** (optional): a [`GifTexture`] mirrors the current frame into a renderer
//!    [`FrameSink`]; an [`UnloadRegistry`] frees sinks at teardown.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: resolution depends only on frame order, never on wall-clock time.
//! - **At most one frame per step**: [`Player::advance`] never skips frames; slow callers
//!   fall behind instead.
//! - **Straight-alpha RGBA8** output, row-major, top to bottom.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod decode;
mod foundation;
mod lifecycle;
mod playback;

pub use compose::compositor::{canvas_bounds, resolve, resolve_many, resolve_with_size};
pub use compose::disposal::DisposalMethod;
pub use compose::frame::{DecodedFrame, RawFrame, ResolvedFrame};
pub use decode::loader::{DecodedAnimation, decode_frames, load_bytes, load_path, load_reader};
pub use decode::options::{DEFAULT_MAX_CANVAS_PIXELS, LoadOptions};
pub use foundation::core::{PixelBounds, Rect, Rgba8};
pub use foundation::error::{GifError, GifErrorKind, GifResult};
pub use lifecycle::registry::{Unload, UnloadHandle, UnloadRegistry};
pub use lifecycle::sink::{FrameSink, RecordingSink};
pub use lifecycle::texture::GifTexture;
pub use playback::player::{AnimationMetadata, PlaybackState, Player};
