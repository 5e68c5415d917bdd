use crate::foundation::error::{StillreelError, StillreelResult};

/// Where one panel sits on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PanelSlot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Where one caption was drawn. `x`/`y` are the top-left of the text line box.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CaptionSlot {
    pub panel: usize,
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub text_width: u32,
}

/// Canvas geometry for a side-by-side composite.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SxsLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub padding: u32,
    pub panels: Vec<PanelSlot>,
    pub captions: Vec<CaptionSlot>,
}

/// Place panels of `sizes` left to right, `padding` apart, top-aligned.
///
/// Canvas width is `Σ widths + padding × (n − 1)`, height is the tallest panel.
pub fn layout_panels(sizes: &[(u32, u32)], padding: u32) -> StillreelResult<SxsLayout> {
    let too_large = || StillreelError::precondition("composite canvas exceeds u32 pixels");

    let mut panels = Vec::with_capacity(sizes.len());
    let mut x: u32 = 0;
    let mut canvas_height: u32 = 0;
    for (i, &(width, height)) in sizes.iter().enumerate() {
        if i > 0 {
            x = x.checked_add(padding).ok_or_else(too_large)?;
        }
        panels.push(PanelSlot {
            x,
            y: 0,
            width,
            height,
        });
        x = x.checked_add(width).ok_or_else(too_large)?;
        canvas_height = canvas_height.max(height);
    }

    Ok(SxsLayout {
        canvas_width: x,
        canvas_height,
        padding,
        panels,
        captions: Vec::new(),
    })
}

/// Left edge of a caption centered under a panel: `panel_x + ⌊(panel_width − text_width) / 2⌋`.
pub fn caption_left_x(panel_x: u32, panel_width: u32, text_width: u32) -> i64 {
    let slack = i64::from(panel_width) - i64::from(text_width);
    i64::from(panel_x) + slack.div_euclid(2)
}

/// Top of every caption: a fixed distance above the canvas bottom, independent of panel height.
pub fn caption_top_y(canvas_height: u32, padding_bottom: u32) -> i64 {
    i64::from(canvas_height) - i64::from(padding_bottom)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
