//! Image decoding and font resolution.

pub mod decode;
pub mod font;
