use std::sync::Arc;

use super::*;
use crate::assets::font::FontSource;

fn system_engine(size_px: f32) -> Option<TextLayoutEngine> {
    let font = FontSource::System.load().ok()?;
    TextLayoutEngine::new(&font, size_px).ok()
}

#[test]
fn huge_font_size_is_a_precondition_error() {
    let err = overhang_margin(1.0e9).unwrap_err();
    assert!(matches!(err, StillreelError::Precondition(_)));
    assert_eq!(overhang_margin(32.0).unwrap(), 18);
}

#[test]
fn padded_extent_rejects_what_a_pixmap_cannot_hold() {
    assert_eq!(padded_extent(10.2, 3), Some(17));
    assert_eq!(padded_extent(-4.0, 3), Some(6));
    assert_eq!(padded_extent(f32::MAX, 2), None);
    assert_eq!(padded_extent(f32::INFINITY, 2), None);
    assert_eq!(padded_extent(65_000.0, 600), None);
    assert_eq!(padded_extent(1.0, u32::MAX), None);
}

#[test]
fn rejects_non_positive_size() {
    let font = LoadedFont {
        bytes: Arc::new(Vec::new()),
        index: 0,
        origin: "empty".to_owned(),
    };
    for size in [0.0, -3.0, f32::NAN] {
        let err = TextLayoutEngine::new(&font, size).err().unwrap();
        assert!(matches!(err, StillreelError::Validation(_)));
    }
}

#[test]
fn mask_coverage_is_row_major() {
    let mask = GlyphMask {
        width: 3,
        height: 2,
        left: 0,
        top: 0,
        alpha: vec![0, 1, 2, 3, 4, 5],
    };
    assert_eq!(mask.coverage(2, 0), 2);
    assert_eq!(mask.coverage(0, 1), 3);
}

#[test]
fn measure_grows_with_text() {
    let Some(mut engine) = system_engine(32.0) else {
        eprintln!("no system font available; skipping");
        return;
    };
    assert_eq!(engine.measure(""), 0);
    let short = engine.measure("ab");
    let long = engine.measure("abababab");
    assert!(short > 0);
    assert!(long > short);
}

#[test]
fn rasterized_text_has_ink_inside_margin() {
    let Some(mut engine) = system_engine(24.0) else {
        eprintln!("no system font available; skipping");
        return;
    };
    let mask = engine.rasterize("Hello").unwrap();
    assert_eq!(mask.alpha.len(), (mask.width * mask.height) as usize);
    assert!(mask.left < 0 && mask.top < 0);
    assert!(mask.alpha.iter().any(|&a| a > 0));
    // Nothing lands on the outermost border row.
    assert!((0..mask.width).all(|x| mask.coverage(x, 0) == 0));
}

#[test]
fn runs_are_shaped_with_the_loaded_face() {
    let Ok(font) = FontSource::System.load() else {
        eprintln!("no system font available; skipping");
        return;
    };
    let mut engine = TextLayoutEngine::new(&font, 20.0).unwrap();
    let layout = engine.layout("Hello");
    for line in layout.lines() {
        for item in line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                assert_eq!(run.run().font().index, font.index);
            }
        }
    }
}

#[test]
fn run_fonts_are_cached_per_face() {
    let Some(mut engine) = system_engine(20.0) else {
        eprintln!("no system font available; skipping");
        return;
    };
    engine.rasterize("Hello").unwrap();
    let cached = engine.run_fonts.len();
    assert!(cached >= 1);
    engine.rasterize("Hello again").unwrap();
    assert_eq!(engine.run_fonts.len(), cached);
}
