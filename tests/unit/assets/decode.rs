use std::io::Cursor;

use super::*;

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let frame = decode_frame_bytes(&png_bytes(image::DynamicImage::ImageRgba8(img))).unwrap();
    assert_eq!(frame.width, 1);
    assert_eq!(frame.height, 1);
    assert_eq!(frame.data, vec![100u8, 50, 200, 128]);
}

#[test]
fn decode_garbage_is_a_decode_error() {
    let err = decode_frame_bytes(b"not an image").unwrap_err();
    assert!(matches!(err, StillreelError::Decode(_)));
}

#[test]
fn decode_frame_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame7.ppm");
    std::fs::write(&path, b"P6 garbage").unwrap();
    let err = decode_frame(&path).unwrap_err();
    assert!(err.to_string().contains("frame7.ppm"), "{err}");

    let missing = decode_frame(&dir.path().join("nope.ppm")).unwrap_err();
    assert!(matches!(missing, StillreelError::Decode(_)));
}

#[test]
fn load_rgb_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.png");
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 0]));
    img.save(&path).unwrap();

    let rgb = load_rgb(&path).unwrap();
    assert_eq!(rgb.dimensions(), (3, 2));
    assert_eq!(rgb.get_pixel(0, 0).0, [9, 8, 7]);
}
