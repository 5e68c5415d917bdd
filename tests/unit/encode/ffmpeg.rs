use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(24, 1).unwrap(),
    }
}

#[test]
fn flatten_alpha_0_returns_bg() {
    let src = vec![200u8, 100, 50, 0];
    let mut dst = vec![0u8; 4];
    flatten_straight_over_bg(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_alpha_255_is_identity() {
    let src = vec![1u8, 2, 3, 255];
    let mut dst = vec![0u8; 4];
    flatten_straight_over_bg(&mut dst, &src, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn flatten_straight_half_over_black() {
    let src = vec![255u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_straight_over_bg(&mut dst, &src, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128u8, 0, 0, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_straight_over_bg(&mut dst, &[0u8; 4], [0, 0, 0, 255]).is_err());
}

#[test]
fn command_args_carry_size_rate_and_output() {
    let sink = FfmpegSink::new(FfmpegSinkOpts::new("out/movie.mp4"));
    let args = sink.command_args(&SinkConfig {
        width: 64,
        height: 32,
        fps: Fps::new(30000, 1001).unwrap(),
    });
    let joined = args.join(" ");
    assert!(args.first().is_some_and(|a| a == "-y"));
    assert!(joined.contains("-s 64x32"));
    assert!(joined.contains("-r 30000/1001 -i pipe:0"));
    assert!(!joined.contains("pad="));
    assert!(args.last().is_some_and(|a| a.ends_with("movie.mp4")));
}

#[test]
fn command_args_pad_odd_sizes_and_respect_no_overwrite() {
    let mut opts = FfmpegSinkOpts::new("movie.mp4");
    opts.overwrite = false;
    let sink = FfmpegSink::new(opts);
    let args = sink.command_args(&cfg(63, 32));
    assert_eq!(args[0], "-n");
    assert!(args.iter().any(|a| a == "pad=ceil(iw/2)*2:ceil(ih/2)*2"));
}

#[test]
fn begin_rejects_zero_size() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    assert!(sink.begin(cfg(0, 10)).is_err());
}

#[test]
fn push_and_end_before_begin_fail() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let frame = FrameRgba {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn missing_ffmpeg_binary_is_an_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = FfmpegSinkOpts::new(dir.path().join("movie.mp4"));
    opts.ffmpeg_bin = dir.path().join("definitely-not-ffmpeg");
    let mut sink = FfmpegSink::new(opts);
    let err = sink.begin(cfg(2, 2)).unwrap_err();
    assert!(matches!(err, StillreelError::Encode(_)), "{err}");
}
