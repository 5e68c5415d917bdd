use std::path::PathBuf;

use clap::Parser;

/// Stitch numbered still frames into an MP4 (requires `ffmpeg`).
#[derive(Parser, Debug)]
#[command(name = "framestitch", version)]
struct Cli {
    /// Glob matching the frame files; frames play in the order of the digits in their names.
    #[arg(long, default_value = "output/output*.ppm")]
    glob: String,

    /// Output MP4 path.
    #[arg(long, default_value = "output/movie.mp4")]
    out: PathBuf,

    /// Frame rate, as an integer or `num/den`.
    #[arg(long, default_value = "24")]
    fps: stillreel::Fps,

    /// Fail instead of replacing an existing output file.
    #[arg(long = "no_overwrite", alias = "no-overwrite")]
    no_overwrite: bool,

    /// `ffmpeg` executable to use.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,

    /// Log per-frame progress.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stillreel::logging::init_cli_logger(cli.verbose);

    let opts = stillreel::FfmpegSinkOpts {
        overwrite: !cli.no_overwrite,
        ffmpeg_bin: cli.ffmpeg.clone(),
        ..stillreel::FfmpegSinkOpts::new(&cli.out)
    };
    let stats = stillreel::stitch_to_mp4(&cli.glob, cli.fps, opts)?;

    eprintln!(
        "wrote {} ({} frames, {}x{} @ {} fps, {:.2}s)",
        cli.out.display(),
        stats.frames_written,
        stats.width,
        stats.height,
        stats.fps,
        stats.duration_secs()
    );
    Ok(())
}
