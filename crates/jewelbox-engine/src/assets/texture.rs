use std::path::Path;

use super::AssetError;

/// RGBA8 pixels ready for `Queue::write_texture`.
///
/// Rows are stored bottom-up so that `v = 0` in the shaders addresses the bottom
/// of the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    pub const BYTES_PER_PIXEL: u32 = 4;

    /// Converts a decoded image to RGBA8 and flips it vertically.
    pub fn from_image(image: image::DynamicImage) -> Self {
        let mut rgba = image.to_rgba8();
        image::imageops::flip_vertical_in_place(&mut rgba);
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            pixels: rgba.into_raw(),
        }
    }

    /// Two-tone checkerboard with `cells` squares per side.
    pub fn checkerboard(size: u32, cells: u32) -> Self {
        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let light = [230, 196, 92, 255];
        let dark = [120, 86, 30, 255];

        let mut pixels = Vec::with_capacity((size * size * Self::BYTES_PER_PIXEL) as usize);
        for y in 0..size {
            for x in 0..size {
                let on = ((x / cell) + (y / cell)) % 2 == 0;
                pixels.extend_from_slice(if on { &light } else { &dark });
            }
        }

        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        self.width * Self::BYTES_PER_PIXEL
    }
}

/// Decodes an image file into bottom-up RGBA8.
pub fn load_texture(path: &Path) -> Result<TextureData, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let texture = TextureData::from_image(image);
    log::info!(
        "loaded {}: {}x{}",
        path.display(),
        texture.width,
        texture.height
    );
    Ok(texture)
}

/// Like [`load_texture`], but rejects images wider or taller than
/// `max_dimension` (the device's 2D texture limit).
pub fn load_texture_within(path: &Path, max_dimension: u32) -> Result<TextureData, AssetError> {
    let texture = load_texture(path)?;
    if texture.width > max_dimension || texture.height > max_dimension {
        return Err(AssetError::TextureTooLarge {
            path: path.to_path_buf(),
            width: texture.width,
            height: texture.height,
            max: max_dimension,
        });
    }
    Ok(texture)
}

/// Loads a texture that fits `max_dimension`, or logs the failure and falls
/// back to a checkerboard.
pub fn load_texture_or_checkerboard(path: &Path, max_dimension: u32) -> TextureData {
    match load_texture_within(path, max_dimension) {
        Ok(texture) => texture,
        Err(e) => {
            log::error!("{:#}", anyhow::Error::from(e));
            log::warn!("using a procedural checkerboard texture instead");
            TextureData::checkerboard(CHECKERBOARD_SIZE.min(max_dimension), 8)
        }
    }
}

const CHECKERBOARD_SIZE: u32 = 256;
