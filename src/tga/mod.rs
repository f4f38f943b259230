//! TGA (Targa) image format decoder and encoder (internal).
//!
//! One profile: uncompressed 32-bit true-color BGRA (image type 2, pixel
//! depth 32). Both vertical origins are read; files are always written
//! top-left. Use top-level [`crate::decode_tga`], [`crate::encode_tga`], etc.

pub(crate) mod decode;
mod encode;
mod utils;

use crate::decode::DecodeOutput;
use crate::error::TgaError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use alloc::vec::Vec;
use enough::Stop;

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, TgaError> {
    let header = decode::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        native_layout: PixelLayout::Bgra8,
        top_left_origin: header.top_left_origin,
    })
}

/// Decode TGA data (output in RGBA byte order, top-down rows).
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, TgaError> {
    let header = decode::parse_header(data)?;
    check_limits(limits, header.width, header.height)?;
    stop.check()?;
    let pixels = decode::decode_pixels(data, &header, stop)?;
    Ok(DecodeOutput::owned(
        pixels,
        header.width,
        header.height,
        PixelLayout::Rgba8,
    ))
}

/// Decode TGA data in native byte order (BGRA — no channel swizzle).
///
/// Zero-copy for top-left-origin files; bottom-up files allocate for the
/// row flip.
pub(crate) fn decode_native<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, TgaError> {
    let header = decode::parse_header(data)?;
    check_limits(limits, header.width, header.height)?;
    stop.check()?;
    decode::decode_pixels_native(data, &header, stop)
}

fn check_limits(limits: Option<&Limits>, width: u32, height: u32) -> Result<(), TgaError> {
    if let Some(limits) = limits {
        limits.check(width, height)?;
        let out_bytes = u64::from(width) * u64::from(height) * 4;
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}

/// Encode to TGA.
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    encode::encode_tga(pixels, width, height, layout, stop)
}
