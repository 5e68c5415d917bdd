use image::RgbImage;

use crate::assets::font::LoadedFont;
use crate::foundation::color::Rgb8;
use crate::foundation::error::StillreelResult;
use crate::foundation::math::lerp_u8;
use crate::text::engine::{GlyphMask, TextLayoutEngine};

/// Colors and stroke size for a caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionStyle {
    /// Half-width of the outline square, in pixels. `0` draws the outline once under the fill.
    pub outline_width: u32,
    pub outline: Rgb8,
    pub fill: Rgb8,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            outline_width: 1,
            outline: Rgb8::BLACK,
            fill: Rgb8::WHITE,
        }
    }
}

/// Strategy for measuring and drawing outlined captions.
///
/// The composer only relies on these two operations, so a true stroking renderer can replace
/// [`OverdrawOutline`] without touching layout.
pub trait CaptionRenderer {
    /// Rendered width of `text` in pixels.
    fn text_width(&mut self, text: &str) -> StillreelResult<u32>;

    /// Draw `text` with its line box's top-left at `origin`, clipping to the canvas.
    fn draw_caption(
        &mut self,
        canvas: &mut RgbImage,
        text: &str,
        origin: (i64, i64),
        style: &CaptionStyle,
    ) -> StillreelResult<()>;
}

/// Every `(dx, dy)` in the square `[-half_width, half_width]²`, rows first.
pub fn square_offsets(half_width: u32) -> impl Iterator<Item = (i64, i64)> {
    let w = i64::from(half_width);
    (-w..=w).flat_map(move |dy| (-w..=w).map(move |dx| (dx, dy)))
}

/// Blend `color` into `canvas` through `mask`, with the text origin at `origin`.
pub fn stamp_mask(canvas: &mut RgbImage, mask: &GlyphMask, origin: (i64, i64), color: Rgb8) {
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let x0 = origin.0 + mask.left;
    let y0 = origin.1 + mask.top;

    for my in 0..mask.height {
        let y = y0 + i64::from(my);
        if y < 0 || y >= ch {
            continue;
        }
        for mx in 0..mask.width {
            let x = x0 + i64::from(mx);
            if x < 0 || x >= cw {
                continue;
            }
            let a = mask.coverage(mx, my);
            if a == 0 {
                continue;
            }
            let px = canvas.get_pixel_mut(x as u32, y as u32);
            px.0 = [
                lerp_u8(px.0[0], color.r, a),
                lerp_u8(px.0[1], color.g, a),
                lerp_u8(px.0[2], color.b, a),
            ];
        }
    }
}

/// Stamp `mask` in the outline color at every square offset, then in the fill color at `origin`.
pub fn draw_outlined(
    canvas: &mut RgbImage,
    mask: &GlyphMask,
    origin: (i64, i64),
    style: &CaptionStyle,
) {
    for (dx, dy) in square_offsets(style.outline_width) {
        stamp_mask(canvas, mask, (origin.0 + dx, origin.1 + dy), style.outline);
    }
    stamp_mask(canvas, mask, origin, style.fill);
}

/// Outline by brute-force overdraw: the caption is stamped in the outline color at every offset
/// of a square around the origin, then once in the fill color on top.
///
/// The glyphs are rasterized once per caption; each stamp reuses the same mask.
pub struct OverdrawOutline {
    engine: TextLayoutEngine,
}

impl OverdrawOutline {
    pub fn new(font: &LoadedFont, size_px: f32) -> StillreelResult<Self> {
        Ok(Self {
            engine: TextLayoutEngine::new(font, size_px)?,
        })
    }
}

impl CaptionRenderer for OverdrawOutline {
    fn text_width(&mut self, text: &str) -> StillreelResult<u32> {
        Ok(self.engine.measure(text))
    }

    fn draw_caption(
        &mut self,
        canvas: &mut RgbImage,
        text: &str,
        origin: (i64, i64),
        style: &CaptionStyle,
    ) -> StillreelResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let mask = self.engine.rasterize(text)?;
        draw_outlined(canvas, &mask, origin, style);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/outline.rs"]
mod tests;
