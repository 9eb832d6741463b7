use crate::{
    foundation::error::GifResult,
    lifecycle::registry::Unload,
    lifecycle::sink::FrameSink,
    playback::player::Player,
};

/// A [`Player`] bound to a renderer sink that mirrors the current frame.
///
/// Frame 0 is uploaded on construction; afterwards pixels are pushed only when the
/// current frame changes. After [`GifTexture::unload`] the sink is never touched again.
#[derive(Debug)]
pub struct GifTexture<S: FrameSink> {
    player: Player,
    sink: S,
    released: bool,
}

impl<S: FrameSink> GifTexture<S> {
    /// Attach `sink` and upload the current frame.
    pub fn new(player: Player, mut sink: S) -> GifResult<Self> {
        sink.upload(player.current_frame(), player.current_buffer())?;
        Ok(Self {
            player,
            sink,
            released: false,
        })
    }

    /// Advance playback by `dt_secs` and push the new frame if it changed.
    ///
    /// Returns whether the frame changed.
    pub fn step(&mut self, dt_secs: f32) -> GifResult<bool> {
        let changed = self.player.advance(dt_secs);
        if changed {
            self.sync()?;
        }
        Ok(changed)
    }

    /// Step to the next frame regardless of elapsed time.
    pub fn next_frame(&mut self) -> GifResult<()> {
        self.player.next_frame();
        self.sync()
    }

    /// Rewind to frame 0 and push it.
    pub fn reset(&mut self) -> GifResult<()> {
        let changed = self.player.current_frame() != 0;
        self.player.reset();
        if changed {
            self.sync()?;
        }
        Ok(())
    }

    /// Release the sink. Safe to call any number of times.
    pub fn unload(&mut self) {
        if self.released {
            tracing::trace!("texture already unloaded");
            return;
        }
        self.sink.release();
        self.released = true;
    }

    /// Whether [`GifTexture::unload`] has run.
    pub fn is_unloaded(&self) -> bool {
        self.released
    }

    /// Playback state and resolved frames.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The renderer sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn sync(&mut self) -> GifResult<()> {
        if self.released {
            return Ok(());
        }
        self.sink
            .upload(self.player.current_frame(), self.player.current_buffer())
    }
}

impl<S: FrameSink> Unload for GifTexture<S> {
    fn unload(&mut self) {
        GifTexture::unload(self);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/texture.rs"]
mod tests;
