use crate::error::TgaError;
use crate::pixel::PixelLayout;

/// Image metadata probed from a TGA header, without decoding pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Pixel layout as stored in the file (before any channel swizzle).
    pub native_layout: PixelLayout,
    /// Whether row 0 in the file is the visual top of the image.
    ///
    /// Decoding always returns top-down rows; this records what the file
    /// declared.
    pub top_left_origin: bool,
}

impl ImageInfo {
    /// Probe a byte slice for TGA header information.
    ///
    /// Validates the same single-profile header as decoding (uncompressed
    /// 32-bit true-color) but reads no pixel data and allocates nothing.
    pub fn from_bytes(data: &[u8]) -> Result<ImageInfo, TgaError> {
        crate::tga::probe_header(data)
    }
}
