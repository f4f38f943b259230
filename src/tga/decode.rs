//! TGA decoder.
//!
//! An 18-byte fixed header, an optional image ID field, then raw BGRA
//! pixels. Width and height are u16 little-endian at offsets 12–15;
//! descriptor bit 5 selects top-left origin (bottom-up otherwise).

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use super::utils::swap_br_row;
use crate::decode::DecodeOutput;
use crate::error::TgaError;
use crate::pixel::PixelLayout;

pub(crate) const HEADER_LEN: usize = 18;

/// Parsed TGA header (internal).
pub(crate) struct TgaHeader {
    pub width: u32,
    pub height: u32,
    pub top_left_origin: bool,
    /// Offset of the pixel section: the 18 header bytes plus the image ID field.
    pub data_offset: usize,
}

/// Parse a TGA header, rejecting anything outside the supported profile.
pub(crate) fn parse_header(data: &[u8]) -> Result<TgaHeader, TgaError> {
    if data.len() < HEADER_LEN {
        return Err(TgaError::MalformedHeader(data.len()));
    }
    let id_length = data[0] as usize;
    let color_map_type = data[1];
    let image_type = data[2];
    let width = u32::from(u16::from_le_bytes([data[12], data[13]]));
    let height = u32::from(u16::from_le_bytes([data[14], data[15]]));
    let pixel_depth = data[16];
    let descriptor = data[17];

    if color_map_type != 0 {
        return Err(TgaError::UnsupportedVariant(alloc::format!(
            "color map type {color_map_type} (only unmapped images are supported)"
        )));
    }
    if image_type != 2 {
        return Err(TgaError::UnsupportedVariant(alloc::format!(
            "image type {image_type} (only uncompressed true-color is supported)"
        )));
    }
    if pixel_depth != 32 {
        return Err(TgaError::UnsupportedVariant(alloc::format!(
            "pixel depth {pixel_depth} (only 32-bit BGRA is supported)"
        )));
    }
    // Bit 4 reverses column order; no known writer emits it.
    if descriptor & 0x10 != 0 {
        return Err(TgaError::UnsupportedVariant(
            "right-to-left pixel order".into(),
        ));
    }

    Ok(TgaHeader {
        width,
        height,
        top_left_origin: descriptor & 0x20 != 0,
        data_offset: HEADER_LEN + id_length,
    })
}

/// Locate the pixel section, validating that it is fully present.
fn pixel_section<'a>(data: &'a [u8], header: &TgaHeader) -> Result<(&'a [u8], usize), TgaError> {
    let too_large = || TgaError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    let input_bytes = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or_else(too_large)?;
    let end = header.data_offset.checked_add(input_bytes).ok_or_else(too_large)?;
    let pixel_data = data
        .get(header.data_offset..end)
        .ok_or(TgaError::TruncatedData {
            needed: input_bytes,
            actual: data.len().saturating_sub(header.data_offset),
        })?;
    Ok((pixel_data, input_bytes))
}

/// Decode the pixel section to RGBA, flipping bottom-up files to top-down rows.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &TgaHeader,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let (pixel_data, input_bytes) = pixel_section(data, header)?;
    if input_bytes == 0 {
        return Ok(Vec::new());
    }

    let h = header.height as usize;
    let row_bytes = header.width as usize * 4;
    let mut out = vec![0u8; input_bytes];
    for (out_row, dst) in out.chunks_exact_mut(row_bytes).enumerate() {
        if out_row % 16 == 0 {
            stop.check()?;
        }
        let src_row = if header.top_left_origin {
            out_row
        } else {
            h - 1 - out_row
        };
        swap_br_row(&pixel_data[src_row * row_bytes..][..row_bytes], dst);
    }

    Ok(out)
}

/// Decode the pixel section keeping the file's BGRA byte order.
///
/// Top-left-origin files borrow straight from the input; bottom-up files
/// allocate for the row flip only.
pub(crate) fn decode_pixels_native<'a>(
    data: &'a [u8],
    header: &TgaHeader,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, TgaError> {
    let (pixel_data, input_bytes) = pixel_section(data, header)?;
    if header.top_left_origin || input_bytes == 0 {
        return Ok(DecodeOutput::borrowed(
            pixel_data,
            header.width,
            header.height,
            PixelLayout::Bgra8,
        ));
    }

    let row_bytes = header.width as usize * 4;
    let mut out = Vec::with_capacity(input_bytes);
    for (row_idx, row) in pixel_data.chunks_exact(row_bytes).rev().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }
    Ok(DecodeOutput::owned(
        out,
        header.width,
        header.height,
        PixelLayout::Bgra8,
    ))
}
