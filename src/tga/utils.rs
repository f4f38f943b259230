//! Row-level pixel helpers shared by the TGA encoder and decoder.

/// Copy 4-byte pixels, swapping the B and R channels (RGBA↔BGRA).
///
/// `src` and `dst` must be the same length, a multiple of 4.
pub(crate) fn swap_br_row(src: &[u8], dst: &mut [u8]) {
    #[cfg(feature = "simd")]
    if garb::rgba_to_bgra(src, dst).is_ok() {
        return;
    }
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[2];
        d[1] = s[1];
        d[2] = s[0];
        d[3] = s[3];
    }
}

/// Force the 4th byte of every 4-byte pixel to 255.
pub(crate) fn set_alpha_opaque(buf: &mut [u8]) {
    #[cfg(feature = "simd")]
    if garb::fill_alpha(buf).is_ok() {
        return;
    }
    for px in buf.chunks_exact_mut(4) {
        px[3] = 255;
    }
}
