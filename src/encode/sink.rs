use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::StillreelResult;

/// One decoded frame as tightly packed, row-major, straight-alpha RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming frames in video order.
///
/// Ordering contract: `push_frame` is called with strictly increasing `FrameIndex` values.
/// Once `begin` succeeded, callers always call `end`, also when a push failed.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> StillreelResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> StillreelResult<()>;
    /// Flush and close the output.
    fn end(&mut self) -> StillreelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRgba)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames in the order they were pushed.
    pub fn frames(&self) -> &[(FrameIndex, FrameRgba)] {
        &self.frames
    }

    /// `true` once `end` has been called after the latest `begin`.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> StillreelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> StillreelResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> StillreelResult<()> {
        self.ended = true;
        Ok(())
    }
}
