use std::collections::HashMap;

use kurbo::Affine;

use crate::assets::font::LoadedFont;
use crate::foundation::error::{StillreelError, StillreelResult};

/// 8-bit coverage mask of a rasterized text line.
///
/// `(left, top)` is the offset of the mask's top-left pixel relative to the text origin (the
/// top-left of the line box); it is negative when glyphs overhang the box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub left: i64,
    pub top: i64,
    pub alpha: Vec<u8>,
}

impl GlyphMask {
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.alpha[(y as usize) * (self.width as usize) + x as usize]
    }
}

/// Stateful helper for shaping text with Parley and rasterizing it with `vello_cpu`.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    // Faces Parley picked for glyph runs, keyed by (blob id, face index).
    run_fonts: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
    size_px: f32,
}

impl TextLayoutEngine {
    /// Register `font` and prepare to lay out text at `size_px`.
    pub fn new(font: &LoadedFont, size_px: f32) -> StillreelResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StillreelError::validation(
                "font size must be finite and > 0",
            ));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);
        // Collection files can register several families; use the one holding face `font.index`.
        let family_id = families
            .iter()
            .find(|(_, faces)| faces.iter().any(|f| f.index() == font.index))
            .or_else(|| families.first())
            .map(|(id, _)| *id)
            .ok_or_else(|| {
                StillreelError::font(format!(
                    "no font families registered from '{}'",
                    font.origin
                ))
            })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StillreelError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            run_fonts: HashMap::new(),
            size_px,
        })
    }

    fn layout(&mut self, text: &str) -> parley::Layout<()> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Advance width of `text` in whole pixels, rounded up.
    pub fn measure(&mut self, text: &str) -> u32 {
        if text.is_empty() {
            return 0;
        }
        self.layout(text).width().ceil().max(0.0) as u32
    }

    /// Rasterize `text` into a coverage mask.
    pub fn rasterize(&mut self, text: &str) -> StillreelResult<GlyphMask> {
        let layout = self.layout(text);
        // Room for glyphs that overhang the line box (italics, descenders).
        let margin = overhang_margin(self.size_px)?;
        let w = padded_extent(layout.width(), margin)
            .ok_or_else(|| StillreelError::precondition("caption too wide to rasterize"))?;
        let h = padded_extent(layout.height(), margin)
            .ok_or_else(|| StillreelError::precondition("caption too tall to rasterize"))?;
        let (width, height) = (u32::from(w), u32::from(h));

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(affine_to_cpu(Affine::translate((
            f64::from(margin),
            f64::from(margin),
        ))));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                let run_font = run.run().font();
                let font = self.run_font(run_font.data.id(), run_font.index, run_font.data.data());
                ctx.glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        let alpha = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .map(|px| px[3])
            .collect();

        Ok(GlyphMask {
            width,
            height,
            left: -i64::from(margin),
            top: -i64::from(margin),
            alpha,
        })
    }

    /// The face Parley chose for a run, which may be a system fallback rather than the caption
    /// font.
    fn run_font(
        &mut self,
        blob_id: u64,
        index: u32,
        bytes: &[u8],
    ) -> &vello_cpu::peniko::FontData {
        self.run_fonts.entry((blob_id, index)).or_insert_with(|| {
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.to_vec()), index)
        })
    }
}

fn overhang_margin(size_px: f32) -> StillreelResult<u32> {
    let half = (size_px / 2.0).ceil();
    if half >= f32::from(u16::MAX) {
        return Err(StillreelError::precondition(
            "font size too large to rasterize",
        ));
    }
    Ok(half as u32 + 2)
}

/// `extent` rounded up plus `margin` on both sides, if it fits a pixmap dimension.
fn padded_extent(extent: f32, margin: u32) -> Option<u16> {
    let extent = extent.ceil().max(0.0);
    if !extent.is_finite() || extent > f32::from(u16::MAX) {
        return None;
    }
    margin
        .checked_mul(2)
        .and_then(|m| m.checked_add(extent as u32))
        .and_then(|total| u16::try_from(total).ok())
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
