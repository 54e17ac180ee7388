use std::path::PathBuf;

/// Errors raised while loading demo assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse OBJ from {origin}")]
    Obj {
        origin: String,
        #[source]
        source: tobj::LoadError,
    },

    #[error("OBJ from {origin} contains no triangles")]
    EmptyMesh { origin: String },

    #[error("failed to decode image {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} is {width}x{height}, larger than the {max}px texture limit", path.display())]
    TextureTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max: u32,
    },
}
