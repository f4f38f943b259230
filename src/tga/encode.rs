//! TGA encoder: uncompressed 32-bit BGRA, top-left origin.

use alloc::vec::Vec;
use enough::Stop;

use super::decode::HEADER_LEN;
use super::utils::{set_alpha_opaque, swap_br_row};
use crate::error::TgaError;
use crate::pixel::PixelLayout;

/// Encode pixels to TGA format.
///
/// Accepts `Bgra8` (direct copy), `Rgba8` (channel swap), `Bgrx8` (padding
/// byte becomes opaque alpha), or `Rgb8`/`Bgr8`/`Gray8` (expand, alpha=255).
/// The output is always the one supported profile.
pub(crate) fn encode_tga(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    // Header width/height fields are u16.
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(TgaError::DimensionsTooLarge { width, height });
    }
    let w = width as usize;
    let h = height as usize;
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;
    if pixels.len() != expected {
        return Err(TgaError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let pixel_bytes = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(4))
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(HEADER_LEN + pixel_bytes);
    write_tga_header(&mut out, width as u16, height as u16);

    stop.check()?;

    // Zero-size images are a bare header with an empty pixel section.
    if pixel_bytes == 0 {
        return Ok(out);
    }

    match layout {
        PixelLayout::Bgra8 => {
            // Already in file order, direct copy
            out.extend_from_slice(pixels);
        }
        PixelLayout::Bgrx8 => {
            out.extend_from_slice(pixels);
            set_alpha_opaque(&mut out[HEADER_LEN..]);
        }
        PixelLayout::Rgba8 => {
            let row_bytes = w * 4;
            out.resize(HEADER_LEN + pixel_bytes, 0);
            let body = &mut out[HEADER_LEN..];
            for (row_idx, (src, dst)) in pixels
                .chunks_exact(row_bytes)
                .zip(body.chunks_exact_mut(row_bytes))
                .enumerate()
            {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                swap_br_row(src, dst);
            }
        }
        PixelLayout::Rgb8 | PixelLayout::Bgr8 | PixelLayout::Gray8 => {
            for row in 0..h {
                if row % 16 == 0 {
                    stop.check()?;
                }
                for col in 0..w {
                    let (r, g, b, a) = get_rgba(pixels, row * w + col, layout);
                    out.push(b);
                    out.push(g);
                    out.push(r);
                    out.push(a);
                }
            }
        }
    }

    Ok(out)
}

fn write_tga_header(out: &mut Vec<u8>, width: u16, height: u16) {
    // 18 bytes: no ID, no color map, image type 2 (uncompressed true-color),
    // zero color map spec and origin, then dimensions, 32 bpp, and
    // descriptor 0x28 (8 alpha bits, top-left origin).
    out.extend_from_slice(&[0, 0, 2]);
    out.extend_from_slice(&[0u8; 9]);
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.push(32);
    out.push(0x28);
}

fn get_rgba(pixels: &[u8], idx: usize, layout: PixelLayout) -> (u8, u8, u8, u8) {
    match layout {
        PixelLayout::Gray8 => {
            let g = pixels[idx];
            (g, g, g, 255)
        }
        PixelLayout::Rgb8 => {
            let off = idx * 3;
            (pixels[off], pixels[off + 1], pixels[off + 2], 255)
        }
        PixelLayout::Bgr8 => {
            let off = idx * 3;
            (pixels[off + 2], pixels[off + 1], pixels[off], 255)
        }
        PixelLayout::Rgba8 => {
            let off = idx * 4;
            (
                pixels[off],
                pixels[off + 1],
                pixels[off + 2],
                pixels[off + 3],
            )
        }
        PixelLayout::Bgra8 => {
            let off = idx * 4;
            (
                pixels[off + 2],
                pixels[off + 1],
                pixels[off],
                pixels[off + 3],
            )
        }
        PixelLayout::Bgrx8 => {
            let off = idx * 4;
            (pixels[off + 2], pixels[off + 1], pixels[off], 255)
        }
    }
}
