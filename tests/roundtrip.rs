use enough::Unstoppable;
use zentga::*;

/// Build a raw 18-byte header with the given field values.
fn raw_header(color_map_type: u8, image_type: u8, w: u16, h: u16, depth: u8, desc: u8) -> Vec<u8> {
    let mut header = vec![0u8; 18];
    header[1] = color_map_type;
    header[2] = image_type;
    header[12..14].copy_from_slice(&w.to_le_bytes());
    header[14..16].copy_from_slice(&h.to_le_bytes());
    header[16] = depth;
    header[17] = desc;
    header
}

#[test]
fn tga_roundtrip_rgba8() {
    let w = 4;
    let h = 3;
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 4;
            if (x + y) % 2 == 0 {
                pixels[off] = 255;
                pixels[off + 1] = 0;
                pixels[off + 2] = 128;
                pixels[off + 3] = 200;
            } else {
                pixels[off] = 0;
                pixels[off + 1] = 200;
                pixels[off + 2] = 50;
                pixels[off + 3] = 255;
            }
        }
    }

    let encoded = encode_tga(&pixels, w as u32, h as u32, PixelLayout::Rgba8, Unstoppable).unwrap();
    assert_eq!(encoded.len(), 18 + w * h * 4);

    let decoded = decode_tga(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width, w as u32);
    assert_eq!(decoded.height, h as u32);
    assert_eq!(decoded.layout, PixelLayout::Rgba8);
    assert_eq!(decoded.pixels(), &pixels[..]);
    // RGBA decode cannot be zero-copy (BGRA→RGBA swizzle)
    assert!(!decoded.is_borrowed());
}

#[test]
fn header_template_is_fixed() {
    // Only bytes 12–15 (dimensions) vary between encoded files.
    let a = encode_tga(&[1, 2, 3, 4], 1, 1, PixelLayout::Rgba8, Unstoppable).unwrap();
    let b = encode_tga(&vec![0u8; 2 * 3 * 4], 2, 3, PixelLayout::Rgba8, Unstoppable).unwrap();

    let expected = raw_header(0, 2, 1, 1, 32, 0x28);
    assert_eq!(&a[..18], &expected[..]);

    assert_eq!(&a[..12], &b[..12]);
    assert_eq!(&a[16..18], &b[16..18]);
    assert_eq!(&b[12..16], &[2, 0, 3, 0]);
}

#[test]
fn channel_swap_single_pixel() {
    // RGBA [10, 20, 30, 255] must land in the file as BGRA [30, 20, 10, 255]
    let encoded = encode_tga(&[10, 20, 30, 255], 1, 1, PixelLayout::Rgba8, Unstoppable).unwrap();
    assert_eq!(&encoded[18..], &[30, 20, 10, 255]);

    let decoded = decode_tga(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &[10, 20, 30, 255]);
}

#[test]
fn zero_size_roundtrip() {
    let encoded = encode_tga(&[], 0, 0, PixelLayout::Rgba8, Unstoppable).unwrap();
    assert_eq!(encoded.len(), 18);

    let decoded = decode_tga(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width, 0);
    assert_eq!(decoded.height, 0);
    assert!(decoded.pixels().is_empty());
}

#[test]
fn zero_width_nonzero_height() {
    let encoded = encode_tga(&[], 0, 7, PixelLayout::Rgba8, Unstoppable).unwrap();
    assert_eq!(encoded.len(), 18);

    let decoded = decode_tga(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width, 0);
    assert_eq!(decoded.height, 7);
    assert!(decoded.pixels().is_empty());
}

#[test]
fn truncated_pixel_data_rejected() {
    // Valid 2x2 header, but fewer than the 16 required trailing bytes
    let mut data = encode_tga(&[0u8; 16], 2, 2, PixelLayout::Rgba8, Unstoppable).unwrap();
    data.truncate(18 + 15);

    match decode_tga(&data, Unstoppable).unwrap_err() {
        TgaError::TruncatedData { needed, actual } => {
            assert_eq!(needed, 16);
            assert_eq!(actual, 15);
        }
        other => panic!("expected TruncatedData, got {other:?}"),
    }
}

#[test]
fn color_mapped_rejected() {
    let data = raw_header(1, 1, 1, 1, 32, 0x28);
    match decode_tga(&data, Unstoppable).unwrap_err() {
        TgaError::UnsupportedVariant(_) => {}
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn image_type_1_rejected() {
    // Color-mapped image type with an otherwise plausible header
    let data = raw_header(0, 1, 1, 1, 32, 0x28);
    match decode_tga(&data, Unstoppable).unwrap_err() {
        TgaError::UnsupportedVariant(_) => {}
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn depth_24_rejected() {
    let mut data = raw_header(0, 2, 1, 1, 24, 0x20);
    data.extend_from_slice(&[0, 0, 0]);
    match decode_tga(&data, Unstoppable).unwrap_err() {
        TgaError::UnsupportedVariant(_) => {}
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn rle_rejected() {
    // Image type 10 is run-length-encoded true-color
    let data = raw_header(0, 10, 1, 1, 32, 0x28);
    match decode_tga(&data, Unstoppable).unwrap_err() {
        TgaError::UnsupportedVariant(_) => {}
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn short_input_rejected() {
    match decode_tga(&[0u8; 10], Unstoppable).unwrap_err() {
        TgaError::MalformedHeader(len) => assert_eq!(len, 10),
        other => panic!("expected MalformedHeader, got {other:?}"),
    }
    match decode_tga(&[], Unstoppable).unwrap_err() {
        TgaError::MalformedHeader(len) => assert_eq!(len, 0),
        other => panic!("expected MalformedHeader, got {other:?}"),
    }
}

#[test]
fn encode_buffer_size_mismatch_rejected() {
    // Too short
    match encode_tga(&[0u8; 7], 2, 1, PixelLayout::Rgba8, Unstoppable).unwrap_err() {
        TgaError::BufferSizeMismatch { expected, actual } => {
            assert_eq!(expected, 8);
            assert_eq!(actual, 7);
        }
        other => panic!("expected BufferSizeMismatch, got {other:?}"),
    }
    // Too long is a contract violation too, not a silent truncation
    assert!(encode_tga(&[0u8; 9], 2, 1, PixelLayout::Rgba8, Unstoppable).is_err());
}

#[test]
fn encode_oversized_dimensions_rejected() {
    match encode_tga(&[], 70_000, 1, PixelLayout::Rgba8, Unstoppable).unwrap_err() {
        TgaError::DimensionsTooLarge { width, .. } => assert_eq!(width, 70_000),
        other => panic!("expected DimensionsTooLarge, got {other:?}"),
    }
}

#[test]
fn limits_reject_large() {
    let encoded = encode_tga(&[0u8; 16], 2, 2, PixelLayout::Rgba8, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = decode_tga_with_limits(&encoded, &limits, Unstoppable);
    assert!(result.is_err());
    match result.unwrap_err() {
        TgaError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn native_decode_is_zero_copy() {
    let pixels = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let encoded = encode_tga(&pixels, 2, 1, PixelLayout::Bgra8, Unstoppable).unwrap();

    let decoded = decode_tga_native(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Bgra8);
    assert_eq!(decoded.pixels(), &pixels[..]);
    assert!(decoded.is_borrowed(), "top-left native decode should borrow");
}

#[test]
fn into_owned_works() {
    let encoded = encode_tga(&[9u8, 8, 7, 6], 1, 1, PixelLayout::Bgra8, Unstoppable).unwrap();

    let decoded = decode_tga_native(&encoded, Unstoppable).unwrap();
    assert!(decoded.is_borrowed());

    let owned = decoded.into_owned();
    assert!(!owned.is_borrowed());
    assert_eq!(owned.pixels(), &[9, 8, 7, 6]);
}

#[test]
fn image_info_probe() {
    let encoded = encode_tga(&vec![255u8; 8], 1, 2, PixelLayout::Rgba8, Unstoppable).unwrap();

    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 1);
    assert_eq!(info.height, 2);
    assert_eq!(info.native_layout, PixelLayout::Bgra8);
    assert!(info.top_left_origin);
}

#[test]
fn image_info_rejects_what_decode_rejects() {
    assert!(ImageInfo::from_bytes(&[0u8; 10]).is_err());
    assert!(ImageInfo::from_bytes(&raw_header(0, 3, 1, 1, 32, 0x28)).is_err());
    assert!(ImageInfo::from_bytes(&raw_header(0, 2, 1, 1, 16, 0x28)).is_err());
}
