use crate::{compose::frame::ResolvedFrame, foundation::error::GifResult};

/// Renderer-side consumer of frame pixels, typically a GPU texture.
///
/// Ordering contract: `upload` is called once when the sink is attached and again on
/// every frame change; `release` is called at most once and nothing follows it.
pub trait FrameSink {
    /// Replace the sink's contents with `frame`.
    fn upload(&mut self, index: usize, frame: &ResolvedFrame) -> GifResult<()>;
    /// Free any renderer resources held by the sink.
    fn release(&mut self);
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub(crate) uploads: Vec<usize>,
    pub(crate) last: Option<ResolvedFrame>,
    pub(crate) releases: usize,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame indices uploaded so far, in order.
    pub fn uploads(&self) -> &[usize] {
        &self.uploads
    }

    /// Most recently uploaded pixels.
    pub fn last_frame(&self) -> Option<&ResolvedFrame> {
        self.last.as_ref()
    }

    /// How many times `release` ran.
    pub fn releases(&self) -> usize {
        self.releases
    }
}

impl FrameSink for RecordingSink {
    fn upload(&mut self, index: usize, frame: &ResolvedFrame) -> GifResult<()> {
        self.uploads.push(index);
        self.last = Some(frame.clone());
        Ok(())
    }

    fn release(&mut self) {
        self.releases += 1;
    }
}
