//! Asset loading: OBJ meshes (via `tobj`) and textures (via `image`).
//!
//! Loading happens once at startup. The `*_or_*` helpers implement the demos'
//! only recovery policy: log the failure and carry on with a stand-in.

mod error;
mod mesh;
mod texture;

pub use error::AssetError;
pub use mesh::{MeshData, load_mesh, load_mesh_or_empty};
pub use texture::{TextureData, load_texture, load_texture_or_checkerboard, load_texture_within};
