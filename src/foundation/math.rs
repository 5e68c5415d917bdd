pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Blend `src` over `dst` with 8-bit coverage `a`.
pub(crate) fn lerp_u8(dst: u8, src: u8, a: u8) -> u8 {
    let a = u16::from(a);
    let v = mul_div255_u16(u16::from(src), a) + mul_div255_u16(u16::from(dst), 255 - a);
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
