// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Source-over blending of straight-alpha RGBA8 pixels.

/// Composite `src` over `dst`, both straight (non-premultiplied) RGBA8.
///
/// Fully opaque sources replace the destination and fully transparent sources
/// leave it untouched, so the common sprite cases never round.
#[inline]
#[must_use]
pub fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u32::from(src[3]);
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = u32::from(dst[3]);
    let inv = 255 - sa;

    // Both terms are scaled by 255 * 255.
    let out_a = sa * 255 + da * inv;
    if out_a == 0 {
        return [0; 4];
    }

    let mut out = [0_u8; 4];
    for channel in 0..3 {
        let sc = u32::from(src[channel]);
        let dc = u32::from(dst[channel]);
        let value = (sc * sa * 255 + dc * da * inv + out_a / 2) / out_a;
        out[channel] = clamp_u8(value);
    }
    out[3] = clamp_u8((out_a + 127) / 255);
    out
}

#[inline]
fn clamp_u8(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
