use std::path::Path;

use crate::encode::sink::FrameRgba;
use crate::foundation::error::{StillreelError, StillreelResult};

/// Decode encoded image bytes into straight-alpha RGBA8.
pub fn decode_frame_bytes(bytes: &[u8]) -> StillreelResult<FrameRgba> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StillreelError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(FrameRgba {
        width,
        height,
        data: rgba.into_raw(),
    })
}

/// Read and decode one frame file.
pub fn decode_frame(path: &Path) -> StillreelResult<FrameRgba> {
    let bytes = std::fs::read(path).map_err(|e| {
        StillreelError::decode(format!("failed to read '{}': {e}", path.display()))
    })?;
    decode_frame_bytes(&bytes).map_err(|e| match e {
        StillreelError::Decode(msg) => {
            StillreelError::decode(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Load an image file as opaque RGB8. Any alpha channel is dropped.
pub fn load_rgb(path: &Path) -> StillreelResult<image::RgbImage> {
    let img = image::open(path).map_err(|e| {
        StillreelError::decode(format!("failed to load image '{}': {e}", path.display()))
    })?;
    Ok(img.to_rgb8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
