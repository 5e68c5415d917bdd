use crate::assets::decode::decode_frame;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameRgba, FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{StillreelError, StillreelResult};
use crate::sequence::frames::{Frame, discover_frames};

/// Summary of one stitching run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StitchStats {
    pub frames_written: u64,
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

impl StitchStats {
    /// Playback length of the written video.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frames_written)
    }
}

/// Decode `frames` in order and stream them into `sink`, one output tick each.
///
/// The first frame fixes the video size. Once the sink has begun, `end` is called on every exit
/// path; a push error wins over an error from `end`.
#[tracing::instrument(skip(frames, sink), fields(frames = frames.len()))]
pub fn stitch_frames(
    frames: &[Frame],
    fps: Fps,
    sink: &mut dyn FrameSink,
) -> StillreelResult<StitchStats> {
    let Some(first) = frames.first() else {
        return Err(StillreelError::NoFramesFound(
            "empty frame sequence".to_owned(),
        ));
    };

    let first_img = decode_frame(&first.path)?;
    let cfg = SinkConfig {
        width: first_img.width,
        height: first_img.height,
        fps,
    };
    tracing::info!(
        width = cfg.width,
        height = cfg.height,
        fps = %fps,
        "stitching {} frames",
        frames.len()
    );
    sink.begin(cfg.clone())?;

    let pushed = push_all(frames, first_img, sink);
    let ended = sink.end();
    let frames_written = match (pushed, ended) {
        (Ok(n), Ok(())) => n,
        (Err(e), Ok(())) => return Err(e),
        (Err(e), Err(end_err)) => {
            tracing::warn!("sink failed to finalize after an earlier error: {end_err}");
            return Err(e);
        }
        (Ok(_), Err(end_err)) => return Err(end_err),
    };

    Ok(StitchStats {
        frames_written,
        width: cfg.width,
        height: cfg.height,
        fps,
    })
}

/// Discover frames matching `pattern` and encode them into an MP4 with `ffmpeg`.
pub fn stitch_to_mp4(
    pattern: &str,
    fps: Fps,
    opts: FfmpegSinkOpts,
) -> StillreelResult<StitchStats> {
    let frames = discover_frames(pattern)?;
    let out = opts.out_path.clone();
    let mut sink = FfmpegSink::new(opts);
    let stats = stitch_frames(&frames, fps, &mut sink)?;
    tracing::info!(out = %out.display(), frames = stats.frames_written, "video written");
    Ok(stats)
}

fn push_all(
    frames: &[Frame],
    first_img: FrameRgba,
    sink: &mut dyn FrameSink,
) -> StillreelResult<u64> {
    let total = frames.len();
    sink.push_frame(FrameIndex(0), &first_img)?;
    tracing::debug!(path = %frames[0].path.display(), "frame 1 of {total}");
    drop(first_img);

    for (i, frame) in frames.iter().enumerate().skip(1) {
        let img = decode_frame(&frame.path)?;
        sink.push_frame(FrameIndex(i as u64), &img)?;
        tracing::debug!(path = %frame.path.display(), "frame {} of {total}", i + 1);
    }
    Ok(total as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/stitch.rs"]
mod tests;
