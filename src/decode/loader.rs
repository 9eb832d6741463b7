use std::{fs::File, io::BufReader, io::Read, path::Path};

use crate::{
    compose::compositor,
    compose::disposal::DisposalMethod,
    compose::frame::DecodedFrame,
    decode::options::LoadOptions,
    foundation::error::{GifError, GifResult},
    playback::player::Player,
};

/// Frames and delays read from a GIF stream, before compositing.
#[derive(Clone, Debug)]
pub struct DecodedAnimation {
    /// Raw frames in stream order.
    pub frames: Vec<DecodedFrame>,
    /// Per-frame delay in hundredths of a second.
    pub delays: Vec<u16>,
}

/// Open a GIF file, decode it and resolve every frame.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_path(path: impl AsRef<Path>, opts: &LoadOptions) -> GifResult<Player> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| GifError::source_unavailable(format!("open {}", path.display()), e))?;
    load_reader(BufReader::new(file), opts).map_err(|e| with_path(e, path))
}

/// Decode and resolve a GIF held in memory.
pub fn load_bytes(bytes: &[u8], opts: &LoadOptions) -> GifResult<Player> {
    load_reader(bytes, opts)
}

/// Decode and resolve a GIF from any reader.
pub fn load_reader<R: Read>(reader: R, opts: &LoadOptions) -> GifResult<Player> {
    opts.validate()?;
    let decoded = decode_frames(reader, opts)?;
    let (width, height) = compositor::canvas_bounds(&decoded.frames)?.canvas_size()?;
    opts.check_canvas(width, height)?;
    let player = Player::from_raw(&decoded.frames, decoded.delays)?;
    tracing::debug!(
        width = player.width(),
        height = player.height(),
        frames = player.frame_count(),
        "loaded animation"
    );
    Ok(player)
}

/// Run the external decoder and adapt its frames, without compositing.
pub fn decode_frames<R: Read>(reader: R, opts: &LoadOptions) -> GifResult<DecodedAnimation> {
    let mut dec_opts = gif::DecodeOptions::new();
    dec_opts.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = dec_opts.read_info(reader)?;

    let mut frames = Vec::new();
    let mut delays = Vec::new();
    while let Some(frame) = decoder.read_next_frame()? {
        let idx = frames.len();
        let decoded = DecodedFrame::new(
            i32::from(frame.left),
            i32::from(frame.top),
            u32::from(frame.width),
            u32::from(frame.height),
            frame.buffer.to_vec(),
            DisposalMethod::from(frame.dispose),
        )
        .map_err(|e| at_frame(e, idx))?;
        frames.push(decoded);
        delays.push(frame.delay);

        if opts.max_frames.is_some_and(|max| frames.len() >= max) {
            tracing::debug!(max = frames.len(), "frame limit reached; stopping decode");
            break;
        }
    }

    if frames.is_empty() {
        return Err(GifError::invalid_animation("gif stream contains no frames"));
    }
    Ok(DecodedAnimation { frames, delays })
}

fn at_frame(err: GifError, idx: usize) -> GifError {
    match err {
        GifError::InvalidAnimation(msg) => {
            GifError::invalid_animation(format!("frame {idx}: {msg}"))
        }
        other => other,
    }
}

fn with_path(err: GifError, path: &Path) -> GifError {
    match err {
        GifError::SourceUnavailable { context, source } => {
            GifError::source_unavailable(format!("{context} from {}", path.display()), source)
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/loader.rs"]
mod tests;
