use super::*;

#[test]
fn canvas_width_matches_sum_formula_for_two() {
    let layout = layout_panels(&[(120, 80), (200, 60)], 30).unwrap();
    assert_eq!(layout.canvas_width, 120 + 200 + 30);
    assert_eq!(layout.canvas_height, 80);
    assert_eq!(layout.panels[0].x, 0);
    assert_eq!(layout.panels[1].x, 150);
}

#[test]
fn canvas_width_matches_sum_formula_for_five() {
    let sizes = [(10, 5), (20, 7), (30, 9), (40, 3), (50, 1)];
    let layout = layout_panels(&sizes, 7).unwrap();
    let sum: u32 = sizes.iter().map(|s| s.0).sum();
    assert_eq!(layout.canvas_width, sum + 7 * 4);
    assert_eq!(layout.canvas_height, 9);

    let xs: Vec<u32> = layout.panels.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0, 17, 44, 81, 128]);
    assert!(layout.panels.iter().all(|p| p.y == 0));
    // No overlap: every slot ends before the next begins.
    assert!(
        layout
            .panels
            .windows(2)
            .all(|w| w[0].x + w[0].width + 7 == w[1].x)
    );
}

#[test]
fn zero_padding_butts_panels_together() {
    let layout = layout_panels(&[(3, 3), (4, 4)], 0).unwrap();
    assert_eq!(layout.canvas_width, 7);
    assert_eq!(layout.panels[1].x, 3);
}

#[test]
fn overflow_is_a_precondition_error() {
    let err = layout_panels(&[(u32::MAX, 1), (1, 1)], 0).unwrap_err();
    assert!(matches!(err, StillreelError::Precondition(_)));
}

#[test]
fn caption_is_centered_with_floor_division() {
    assert_eq!(caption_left_x(0, 200, 60), 70);
    assert_eq!(caption_left_x(230, 200, 60), 300);
    assert_eq!(caption_left_x(0, 201, 60), 70);
}

#[test]
fn wide_caption_starts_left_of_panel() {
    // (100 - 131) // 2 == -16 with floor semantics.
    assert_eq!(caption_left_x(50, 100, 131), 34);
}

#[test]
fn caption_top_is_fixed_from_canvas_bottom() {
    assert_eq!(caption_top_y(300, 20), 280);
    assert_eq!(caption_top_y(10, 20), -10);
}
