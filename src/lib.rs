//! Two small still-image tools.
//!
//! - The frame sequencer discovers numbered frame files, orders them by the digits in their
//!   names and streams them into a [`FrameSink`] (an MP4 via `ffmpeg` by default).
//! - The side-by-side composer pastes images left to right on a white canvas and draws an
//!   outlined caption under each one through a [`CaptionRenderer`].
#![forbid(unsafe_code)]

pub mod assets;
pub mod compose;
pub mod encode;
mod foundation;
pub mod logging;
pub mod present;
pub mod sequence;
pub mod text;

pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::{Fps, FrameIndex};
pub use crate::foundation::error::{StillreelError, StillreelResult};

pub use crate::assets::font::{FontSource, LoadedFont};
pub use crate::compose::composer::{
    ComposeOpts, Panel, SxsComposite, compose_side_by_side, load_panels, pair_labels,
    save_composite,
};
pub use crate::compose::layout::{SxsLayout, caption_left_x, caption_top_y, layout_panels};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_available};
pub use crate::encode::sink::{FrameRgba, FrameSink, InMemorySink, SinkConfig};
pub use crate::sequence::frames::{Frame, discover_frames, numeric_key, sort_frames};
pub use crate::sequence::stitch::{StitchStats, stitch_frames, stitch_to_mp4};
pub use crate::text::outline::{CaptionRenderer, CaptionStyle, OverdrawOutline, square_offsets};
