//! # zentga
//!
//! TGA (Targa) image format decoder and encoder.
//!
//! Exactly one Targa profile is supported: uncompressed 32-bit true-color
//! BGRA (image type 2, pixel depth 32) — the variant canvas-style RGBA
//! pipelines produce and consume. Color-mapped, grayscale, and
//! run-length-encoded files are rejected with a precise error rather than
//! misread.
//!
//! ## Zero-Copy Decoding
//!
//! [`decode_tga_native`] returns the file's own BGRA pixel bytes as a
//! borrowed slice for top-left-origin files — no allocation or copy. The
//! RGBA path ([`decode_tga`]) swizzles channels and therefore allocates;
//! bottom-up files additionally get their rows flipped so output is always
//! top-down.
//!
//! ## Non-Goals
//!
//! - Color-mapped (indexed) and grayscale Targa variants
//! - Run-length-encoded pixel data
//! - 15/16/24-bit pixel depths
//! - The TGA 2.0 footer and extension area (trailing bytes are ignored)
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.native_layout);
//!
//! // Decode to RGBA (rows are always returned top-down)
//! let decoded = zentga::decode_tga(data, Unstoppable)?;
//!
//! // Re-encode
//! let tga = zentga::encode_tga(
//!     decoded.pixels(),
//!     decoded.width,
//!     decoded.height,
//!     decoded.layout,
//!     Unstoppable,
//! )?;
//! # let _ = tga;
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod tga;

use alloc::vec::Vec;

// Re-exports
pub use decode::DecodeOutput;
#[cfg(feature = "rgb")]
pub use decode::DecodePixel;
pub use enough::{Stop, Unstoppable};
pub use error::TgaError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::PixelLayout;

/// Decode TGA data to RGBA pixels (top-down rows).
pub fn decode_tga<'a>(data: &'a [u8], stop: impl Stop) -> Result<DecodeOutput<'a>, TgaError> {
    tga::decode(data, None, &stop)
}

/// Decode TGA data to RGBA pixels, enforcing [`Limits`].
pub fn decode_tga_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput<'a>, TgaError> {
    tga::decode(data, Some(limits), &stop)
}

/// Decode TGA data in native byte order (BGRA — no channel swizzle).
///
/// Zero-copy for top-left-origin files.
pub fn decode_tga_native<'a>(
    data: &'a [u8],
    stop: impl Stop,
) -> Result<DecodeOutput<'a>, TgaError> {
    tga::decode_native(data, None, &stop)
}

/// Decode TGA data in native byte order, enforcing [`Limits`].
pub fn decode_tga_native_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput<'a>, TgaError> {
    tga::decode_native(data, Some(limits), &stop)
}

/// Encode pixels as an uncompressed 32-bit BGRA TGA file.
///
/// See [`PixelLayout`] for the accepted input layouts; the written file is
/// always the one supported profile (top-left origin, descriptor 0x28).
pub fn encode_tga(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: impl Stop,
) -> Result<Vec<u8>, TgaError> {
    tga::encode(pixels, width, height, layout, &stop)
}
