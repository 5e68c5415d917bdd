use crate::encode::sink::{FrameRgba, FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{StillreelError, StillreelResult};
use crate::foundation::math::lerp_u8;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Background color used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
    /// `ffmpeg` executable to spawn.
    pub ffmpeg_bin: PathBuf,
}

impl FfmpegSinkOpts {
    /// Create options for outputting an MP4 to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
            ffmpeg_bin: PathBuf::from("ffmpeg"),
        }
    }
}

/// Sink that spawns `ffmpeg` and streams raw RGBA frames to its stdin.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }

    /// Arguments passed to `ffmpeg` for `cfg`, without the executable itself.
    pub fn command_args(&self, cfg: &SinkConfig) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();
        args.push(if self.opts.overwrite { "-y" } else { "-n" }.to_owned());
        args.extend(
            [
                "-loglevel",
                "error",
                "-f",
                "rawvideo",
                "-pix_fmt",
                "rgba",
                "-s",
            ]
            .map(String::from),
        );
        args.push(format!("{}x{}", cfg.width, cfg.height));
        // For rawvideo input, `-r` before `-i` sets the input framerate.
        args.push("-r".to_owned());
        args.push(fps_arg(cfg.fps));
        args.extend(["-i", "pipe:0", "-an"].map(String::from));
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            // yuv420p needs even dimensions.
            args.push("-vf".to_owned());
            args.push("pad=ceil(iw/2)*2:ceil(ih/2)*2".to_owned());
        }
        args.extend(
            [
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ]
            .map(String::from),
        );
        args.push(self.opts.out_path.to_string_lossy().into_owned());
        args
    }

    fn finish(&mut self) -> StillreelResult<()> {
        drop(self.stdin.take());
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        let status = child.wait().map_err(|e| {
            StillreelError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| StillreelError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| StillreelError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        self.cfg = None;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(StillreelError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> StillreelResult<()> {
        if self.child.is_some() {
            return Err(StillreelError::encode("ffmpeg sink already started"));
        }
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(StillreelError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(StillreelError::validation(
                "ffmpeg sink width/height must be non-zero",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(StillreelError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        if !is_ffmpeg_available(&self.opts.ffmpeg_bin) {
            return Err(StillreelError::encode(format!(
                "'{}' is required for MP4 encoding, but could not be run",
                self.opts.ffmpeg_bin.display()
            )));
        }

        let args = self.command_args(&cfg);
        tracing::debug!(ffmpeg = %self.opts.ffmpeg_bin.display(), ?args, "spawning encoder");

        let mut child = Command::new(&self.opts.ffmpeg_bin)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                StillreelError::encode(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| StillreelError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| StillreelError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> StillreelResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| StillreelError::encode("ffmpeg sink not started"))?;
        if let Some(last) = self.last_idx
            && idx <= last
        {
            return Err(StillreelError::encode(
                "ffmpeg sink received out-of-order frame index",
            ));
        }

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(StillreelError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != self.scratch.len() {
            return Err(StillreelError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        self.last_idx = Some(idx);

        flatten_straight_over_bg(&mut self.scratch, &frame.data, self.opts.bg_rgba)?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(StillreelError::encode("ffmpeg sink is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            StillreelError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> StillreelResult<()> {
        if self.child.is_none() {
            return Err(StillreelError::encode("ffmpeg sink not started"));
        }
        self.finish()
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if self.child.is_some()
            && let Err(e) = self.finish()
        {
            tracing::warn!("ffmpeg sink dropped without a clean end: {e}");
        }
    }
}

fn fps_arg(fps: Fps) -> String {
    format!("{}/{}", fps.num, fps.den)
}

/// Composite straight-alpha RGBA8 over `bg_rgba`, producing opaque RGBA8.
pub(crate) fn flatten_straight_over_bg(
    dst: &mut [u8],
    src: &[u8],
    bg_rgba: [u8; 4],
) -> StillreelResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StillreelError::validation(
            "flatten_straight_over_bg expects equal-length rgba8 buffers",
        ));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = s[3];
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        d[0] = lerp_u8(bg_rgba[0], s[0], a);
        d[1] = lerp_u8(bg_rgba[1], s[1], a);
        d[2] = lerp_u8(bg_rgba[2], s[2], a);
        d[3] = 255;
    }

    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> StillreelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg_bin -version` runs successfully.
pub fn is_ffmpeg_available(ffmpeg_bin: &Path) -> bool {
    Command::new(ffmpeg_bin)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
