use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;

use crate::assets::decode::load_rgb;
use crate::compose::layout::{CaptionSlot, SxsLayout, caption_left_x, caption_top_y, layout_panels};
use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::color::Rgb8;
use crate::foundation::error::{StillreelError, StillreelResult};
use crate::text::outline::{CaptionRenderer, CaptionStyle};

/// Layout parameters for a side-by-side composite.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposeOpts {
    /// Horizontal gap between panels, in pixels.
    pub padding: u32,
    /// Distance from the canvas bottom to the top of every caption, in pixels.
    pub padding_bottom: u32,
    /// Caption font size, in pixels.
    pub font_size: f32,
    pub caption: CaptionStyle,
    pub background: Rgb8,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            padding: 30,
            padding_bottom: 20,
            font_size: 32.0,
            caption: CaptionStyle::default(),
            background: Rgb8::WHITE,
        }
    }
}

/// One input image and its caption (empty for none).
#[derive(Clone, Debug)]
pub struct Panel {
    pub image: RgbImage,
    pub label: String,
}

impl Panel {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Finished canvas plus the geometry used to build it.
#[derive(Clone, Debug)]
pub struct SxsComposite {
    pub canvas: RgbImage,
    pub layout: SxsLayout,
}

/// Resolve one caption per image from an optional comma-separated list.
///
/// Fails when there are fewer than 2 images or the label count differs from the image count.
pub fn pair_labels(image_count: usize, labels: Option<&str>) -> StillreelResult<Vec<String>> {
    if image_count < 2 {
        return Err(StillreelError::TooFewImages { got: image_count });
    }
    let labels: Vec<String> = match labels {
        Some(list) if !list.is_empty() => list.split(',').map(str::to_owned).collect(),
        _ => vec![String::new(); image_count],
    };
    if labels.len() != image_count {
        return Err(StillreelError::LabelCountMismatch {
            images: image_count,
            labels: labels.len(),
        });
    }
    Ok(labels)
}

/// Load every image in `paths`, pairing it with the label at the same position.
pub fn load_panels(paths: &[PathBuf], labels: Vec<String>) -> StillreelResult<Vec<Panel>> {
    if paths.len() != labels.len() {
        return Err(StillreelError::LabelCountMismatch {
            images: paths.len(),
            labels: labels.len(),
        });
    }
    paths
        .iter()
        .zip(labels)
        .map(|(path, label)| {
            let image = load_rgb(path)?;
            tracing::debug!(
                path = %path.display(),
                width = image.width(),
                height = image.height(),
                "loaded panel"
            );
            Ok(Panel { image, label })
        })
        .collect()
}

/// Paste `panels` left to right on a fresh canvas and caption each non-empty label.
#[tracing::instrument(skip_all, fields(panels = panels.len()))]
pub fn compose_side_by_side(
    panels: &[Panel],
    opts: &ComposeOpts,
    renderer: &mut dyn CaptionRenderer,
) -> StillreelResult<SxsComposite> {
    if panels.len() < 2 {
        return Err(StillreelError::TooFewImages { got: panels.len() });
    }

    let sizes: Vec<(u32, u32)> = panels.iter().map(|p| (p.width(), p.height())).collect();
    let mut layout = layout_panels(&sizes, opts.padding)?;
    if layout.canvas_width == 0 || layout.canvas_height == 0 {
        return Err(StillreelError::precondition("composite canvas would be empty"));
    }

    let mut canvas = RgbImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        image::Rgb(opts.background.to_array()),
    );

    let top = caption_top_y(layout.canvas_height, opts.padding_bottom);
    for (i, (panel, slot)) in panels.iter().zip(&layout.panels).enumerate() {
        image::imageops::replace(&mut canvas, &panel.image, i64::from(slot.x), 0);

        if panel.label.is_empty() {
            continue;
        }
        let text_width = renderer.text_width(&panel.label)?;
        let left = caption_left_x(slot.x, slot.width, text_width);
        renderer.draw_caption(&mut canvas, &panel.label, (left, top), &opts.caption)?;
        tracing::debug!(panel = i, x = left, y = top, text_width, "caption drawn");

        layout.captions.push(CaptionSlot {
            panel: i,
            text: panel.label.clone(),
            x: left,
            y: top,
            text_width,
        });
    }

    tracing::info!(
        width = layout.canvas_width,
        height = layout.canvas_height,
        captions = layout.captions.len(),
        "composite built"
    );
    Ok(SxsComposite { canvas, layout })
}

/// Save `canvas` to `path`; the format follows the file extension.
pub fn save_composite(canvas: &RgbImage, path: &Path) -> StillreelResult<()> {
    ensure_parent_dir(path)?;
    canvas
        .save(path)
        .with_context(|| format!("write composite '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
