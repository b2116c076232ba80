use std::sync::atomic::{AtomicU64, Ordering};

use image::GenericImageView;

/// Longest edge kept for gallery textures.
pub const MAX_PHOTO_EDGE: u32 = 1024;

static PREVIEW_SEQ: AtomicU64 = AtomicU64::new(1);

/// Decoded RGBA8 pixels, ready to become a texture on the main thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// A photo and the gallery key it belongs to.
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    pub source: String,
    pub pixels: PhotoPixels,
}

pub fn decode_photo(bytes: &[u8]) -> Result<PhotoPixels, image::ImageError> {
    let mut img = image::load_from_memory(bytes)?;
    let (w, h) = img.dimensions();
    if w > MAX_PHOTO_EDGE || h > MAX_PHOTO_EDGE {
        img = img.thumbnail(MAX_PHOTO_EDGE, MAX_PHOTO_EDGE);
    }
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PhotoPixels {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Unique gallery key for a photo that only exists locally.
pub fn preview_key(file_name: &str) -> String {
    let seq = PREVIEW_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("preview:{seq}:{file_name}")
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([231, 84, 128, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}
