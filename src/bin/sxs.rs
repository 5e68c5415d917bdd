use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Compose images side by side with outlined captions.
#[derive(Parser, Debug)]
#[command(name = "sxs", version)]
struct Cli {
    /// The images, left to right (at least two).
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Comma-separated captions, one per image.
    #[arg(long)]
    labels: Option<String>,

    /// Horizontal gap between images, in pixels.
    #[arg(long, default_value_t = 30)]
    padding: u32,

    /// Distance from the canvas bottom to the captions, in pixels.
    #[arg(long = "padding_bottom", alias = "padding-bottom", default_value_t = 20)]
    padding_bottom: u32,

    /// Caption font size, in pixels.
    #[arg(long = "font_size", alias = "font-size", default_value_t = 32)]
    font_size: u32,

    /// Half-width of the caption outline, in pixels.
    #[arg(long = "outline_width", alias = "outline-width", default_value_t = 1)]
    outline_width: u32,

    /// Output image path; the format follows the extension.
    #[arg(long, default_value = "sxs.png")]
    out: PathBuf,

    /// Caption font file. Without it, installed fonts are searched.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Caption outline color (`#rrggbb`, `#rgb` or a name).
    #[arg(long = "outline_color", alias = "outline-color", default_value = "black")]
    outline_color: stillreel::Rgb8,

    /// Caption fill color.
    #[arg(long = "fill_color", alias = "fill-color", default_value = "white")]
    fill_color: stillreel::Rgb8,

    /// Do not open the result in an image viewer.
    #[arg(long = "no_show", alias = "no-show")]
    no_show: bool,

    /// Print the computed layout as JSON on stdout.
    #[arg(long = "dump_layout", alias = "dump-layout")]
    dump_layout: bool,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stillreel::logging::init_cli_logger(cli.verbose);

    let labels = stillreel::pair_labels(cli.images.len(), cli.labels.as_deref())?;
    let panels = stillreel::load_panels(&cli.images, labels)?;

    let opts = stillreel::ComposeOpts {
        padding: cli.padding,
        padding_bottom: cli.padding_bottom,
        font_size: cli.font_size as f32,
        caption: stillreel::CaptionStyle {
            outline_width: cli.outline_width,
            outline: cli.outline_color,
            fill: cli.fill_color,
        },
        ..Default::default()
    };

    let font_source = match cli.font {
        Some(path) => stillreel::FontSource::Path(path),
        None => stillreel::FontSource::System,
    };
    let mut renderer = if panels.iter().any(|p| !p.label.is_empty()) {
        let font = font_source.load()?;
        tracing::debug!(font = %font.origin, "caption font");
        Some(stillreel::OverdrawOutline::new(&font, opts.font_size)?)
    } else {
        None
    };

    let composite = match renderer.as_mut() {
        Some(r) => stillreel::compose_side_by_side(&panels, &opts, r)?,
        None => stillreel::compose_side_by_side(&panels, &opts, &mut NoCaptions)?,
    };
    drop(panels);

    stillreel::save_composite(&composite.canvas, &cli.out)?;
    eprintln!("wrote {}", cli.out.display());

    if cli.dump_layout {
        let json = serde_json::to_string_pretty(&composite.layout).context("serialize layout")?;
        println!("{json}");
    }

    if !cli.no_show
        && let Err(e) = stillreel::present::show_image(&cli.out)
    {
        tracing::warn!("{e}");
    }
    Ok(())
}

/// Renderer for runs without captions, so no font has to be installed.
struct NoCaptions;

impl stillreel::CaptionRenderer for NoCaptions {
    fn text_width(&mut self, _text: &str) -> stillreel::StillreelResult<u32> {
        Ok(0)
    }

    fn draw_caption(
        &mut self,
        _canvas: &mut image::RgbImage,
        _text: &str,
        _origin: (i64, i64),
        _style: &stillreel::CaptionStyle,
    ) -> stillreel::StillreelResult<()> {
        Ok(())
    }
}
