//! Raw RGBA payloads for image entries.
//!
//! Image entries are stored as `width: u32 LE`, `height: u32 LE` followed by
//! `width * height` RGBA pixels.

use std::io::Cursor;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use image::{ImageFormat, RgbaImage};

use crate::error::DecodeError;

pub const IMAGE_SUFFIX: &[u8] = b".png";

const DIMENSIONS_LEN: usize = 8;

#[inline]
pub fn is_image(name: &[u8]) -> bool {
    name.ends_with(IMAGE_SUFFIX)
}

/// Load an image file and pack it as a canonical raw payload.
pub fn canonicalize_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, DecodeError> {
    let image = image::open(path.as_ref())?.into_rgba8();
    Ok(canonicalize(image))
}

/// Pack an image as a raw payload. Fully transparent pixels are forced to
/// `(0, 0, 0, 0)` so invisible colour noise never reaches the compressed
/// stream.
pub fn canonicalize(mut image: RgbaImage) -> Vec<u8> {
    for pixel in image.pixels_mut() {
        if pixel.0[3] == 0 {
            pixel.0 = [0, 0, 0, 0];
        }
    }

    let (width, height) = image.dimensions();
    let raw = image.into_raw();
    let mut out = vec![0u8; DIMENSIONS_LEN];
    LittleEndian::write_u32(&mut out[..4], width);
    LittleEndian::write_u32(&mut out[4..DIMENSIONS_LEN], height);
    out.extend_from_slice(&raw);
    out
}

/// Rebuild an image from a raw payload.
pub fn decanonicalize(data: &[u8]) -> Result<RgbaImage, DecodeError> {
    if data.len() < DIMENSIONS_LEN {
        return Err(DecodeError::ImageHeader { len: data.len() });
    }

    let width = LittleEndian::read_u32(&data[..4]);
    let height = LittleEndian::read_u32(&data[4..DIMENSIONS_LEN]);
    let pixels = &data[DIMENSIONS_LEN..];

    let expected = u64::from(width) * u64::from(height) * 4;
    if expected != pixels.len() as u64 {
        return Err(DecodeError::ImageSize {
            width,
            height,
            len: pixels.len(),
        });
    }

    RgbaImage::from_raw(width, height, pixels.to_vec()).ok_or(DecodeError::ImageSize {
        width,
        height,
        len: pixels.len(),
    })
}

/// Rebuild an image from a raw payload and encode it as PNG.
pub fn raw_to_png(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let image = decanonicalize(data)?;
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
