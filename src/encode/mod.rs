//! Encoding sinks.
//!
//! Sinks consume decoded frames in video order and are driven by the frame sequencer.

/// `ffmpeg`-based sink (MP4 output via the system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
