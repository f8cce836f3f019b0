// SPDX-License-Identifier: MPL-2.0
//! Raster asset loading.

use crate::error::Result;
use std::path::Path;

/// Decoded RGBA pixels for one raster asset.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data (width × height × 4 bytes).
    pub pixels: Vec<u8>,
}

impl ImageData {
    /// Wraps raw RGBA pixels. The buffer length must be `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len() as u64, u64::from(width) * u64::from(height) * 4);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Converts the pixels into an Iced image handle.
    pub fn to_handle(&self) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_rgba(self.width, self.height, self.pixels.clone())
    }
}

/// Loads and decodes a raster asset into RGBA pixels.
///
/// Runs on a blocking path; callers wrap it in a task and route the result
/// back as a message.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let decoded = image_rs::open(path.as_ref())?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_stores_dimensions() {
        let data = ImageData::from_rgba(2, 3, vec![0_u8; 2 * 3 * 4]);
        assert_eq!(data.width, 2);
        assert_eq!(data.height, 3);
        assert_eq!(data.pixels.len(), 24);
    }

    #[test]
    fn load_image_missing_file_errors() {
        let result = load_image("definitely/not/a/real/asset.png");
        assert!(result.is_err());
    }
}
