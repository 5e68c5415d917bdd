//! Frame Sequencer: discover numbered frames and stream them into a video sink.

pub mod frames;
pub mod stitch;
