//! Fixed-layout uniform blocks.
//!
//! Field order and offsets must match the WGSL structs in the demo shaders.

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;
use crate::params::FrameParams;

/// Coin demos (32 bytes):
///
///  offset  0  zoom        f32
///  offset  4  theta       f32
///  offset  8  thickness   f32
///  offset 12  intensity   f32
///  offset 16  resolution  vec2<f32>
///  offset 24  _pad        vec2<f32>
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct CoinUniforms {
    pub zoom: f32,
    pub theta: f32,
    pub thickness: f32,
    pub intensity: f32,
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

impl CoinUniforms {
    pub fn from_params(params: &FrameParams, viewport: Viewport) -> Self {
        Self {
            zoom: params.zoom.value(),
            theta: params.theta,
            thickness: params.thickness.value(),
            intensity: params.intensity.value(),
            resolution: viewport.as_array(),
            _pad: [0.0; 2],
        }
    }
}

/// Mesh demos (32 bytes):
///
///  offset  0  zoom            f32
///  offset  4  theta           f32
///  offset  8  intensity       f32
///  offset 12  sample_count    u32   (N², 1 when anti-aliasing is off)
///  offset 16  resolution      vec2<f32>
///  offset 24  triangle_count  u32
///  offset 28  _pad            u32
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct MeshUniforms {
    pub zoom: f32,
    pub theta: f32,
    pub intensity: f32,
    pub sample_count: u32,
    pub resolution: [f32; 2],
    pub triangle_count: u32,
    pub _pad: u32,
}

impl MeshUniforms {
    /// `anti_aliased = false` pins the sample count to 1 whatever the slider says.
    pub fn from_params(
        params: &FrameParams,
        viewport: Viewport,
        triangle_count: u32,
        anti_aliased: bool,
    ) -> Self {
        let sample_count = if anti_aliased {
            params.subdivision_level().sample_count()
        } else {
            1
        };
        Self {
            zoom: params.zoom.value(),
            theta: params.theta,
            intensity: params.intensity.value(),
            sample_count,
            resolution: viewport.as_array(),
            triangle_count,
            _pad: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ScrollZoom, Slider};
    use std::mem::{offset_of, size_of};

    fn params() -> FrameParams {
        let mut p = FrameParams::new(
            ScrollZoom::new(12.0, 5.0, 100.0),
            Slider::new(0.01, 0.0, 0.1, 0.005),
            Slider::new(0.2, 0.01, 0.5, 0.01),
            Slider::new(20.0, 0.0, 50.0, 1.0),
            FrameParams::subdivision_slider(3),
        );
        p.theta = 1.5;
        p
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn coin_layout_is_fixed() {
        assert_eq!(size_of::<CoinUniforms>(), 32);
        assert_eq!(offset_of!(CoinUniforms, zoom), 0);
        assert_eq!(offset_of!(CoinUniforms, theta), 4);
        assert_eq!(offset_of!(CoinUniforms, thickness), 8);
        assert_eq!(offset_of!(CoinUniforms, intensity), 12);
        assert_eq!(offset_of!(CoinUniforms, resolution), 16);
    }

    #[test]
    fn mesh_layout_is_fixed() {
        assert_eq!(size_of::<MeshUniforms>(), 32);
        assert_eq!(offset_of!(MeshUniforms, intensity), 8);
        assert_eq!(offset_of!(MeshUniforms, sample_count), 12);
        assert_eq!(offset_of!(MeshUniforms, resolution), 16);
        assert_eq!(offset_of!(MeshUniforms, triangle_count), 24);
    }

    // ── marshaling ────────────────────────────────────────────────────────

    #[test]
    fn coin_scalars_are_in_order() {
        let u = CoinUniforms::from_params(&params(), Viewport::new(800.0, 600.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(&floats[..6], &[12.0, 1.5, 0.2, 20.0, 800.0, 600.0]);
    }

    #[test]
    fn mesh_sample_count_follows_subdivision() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(MeshUniforms::from_params(&params(), vp, 10, true).sample_count, 9);
        assert_eq!(MeshUniforms::from_params(&params(), vp, 10, false).sample_count, 1);
        assert_eq!(MeshUniforms::from_params(&params(), vp, 10, true).triangle_count, 10);
    }
}
