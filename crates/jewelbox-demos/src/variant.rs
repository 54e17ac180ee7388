//! The demo variants and their default parameters.

use std::path::{Path, PathBuf};

use jewelbox_engine::params::{FrameParams, ScrollZoom, Slider};
use jewelbox_engine::render::SamplerConfig;

/// Which demo to run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, clap::ValueEnum)]
pub enum Variant {
    /// Procedural gold coin.
    Coin,
    /// Coin with an image on both faces.
    TexturedCoin,
    /// Diamond mesh, not rotating.
    Diamond,
    /// Low-poly diamond mesh.
    DiamondLow,
    /// High-poly diamond mesh with jittered supersampling.
    DiamondHigh,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Coin => "coin",
            Variant::TexturedCoin => "textured coin",
            Variant::Diamond => "diamond",
            Variant::DiamondLow => "low-poly diamond",
            Variant::DiamondHigh => "high-poly diamond",
        }
    }

    /// Default configuration for this variant.
    pub fn config(self) -> VariantConfig {
        let intensity = Slider::new(20.0, 0.0, 50.0, 1.0);
        let spinning = Slider::new(0.01, 0.0, 0.1, 0.005);
        let no_thickness = Slider::fixed(0.0);
        let no_aa = Slider::fixed(1.0);

        let (params, geometry) = match self {
            Variant::Coin | Variant::TexturedCoin => {
                let params = FrameParams::new(
                    ScrollZoom::new(10.0, 5.0, 100.0),
                    spinning,
                    Slider::new(0.1, 0.01, 0.5, 0.01),
                    intensity,
                    no_aa,
                );
                let texture = (self == Variant::TexturedCoin).then(|| asset_path("coin.png"));
                (
                    params,
                    Geometry::Coin {
                        texture,
                        sampler: SamplerConfig::default(),
                    },
                )
            }
            Variant::Diamond => (
                FrameParams::new(
                    ScrollZoom::new(5.0, 1.0, 50.0),
                    Slider::fixed(0.0),
                    no_thickness,
                    intensity,
                    no_aa,
                ),
                Geometry::Mesh {
                    model: asset_path("diamond.obj"),
                    anti_aliased: false,
                },
            ),
            Variant::DiamondLow => (
                FrameParams::new(
                    ScrollZoom::new(5.0, 1.0, 50.0),
                    spinning,
                    no_thickness,
                    intensity,
                    no_aa,
                ),
                Geometry::Mesh {
                    model: asset_path("diamond_low.obj"),
                    anti_aliased: false,
                },
            ),
            Variant::DiamondHigh => (
                FrameParams::new(
                    ScrollZoom::new(5.0, 3.0, 100.0),
                    spinning,
                    no_thickness,
                    intensity,
                    FrameParams::subdivision_slider(2),
                ),
                Geometry::Mesh {
                    model: asset_path("diamond_high.obj"),
                    anti_aliased: true,
                },
            ),
        };

        VariantConfig {
            variant: self,
            params,
            geometry,
            seed: None,
        }
    }
}

/// What a variant draws and where its assets come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Coin {
        /// Face image; `None` draws the procedural face.
        texture: Option<PathBuf>,
        sampler: SamplerConfig,
    },
    Mesh {
        model: PathBuf,
        anti_aliased: bool,
    },
}

/// Everything needed to start a demo.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantConfig {
    pub variant: Variant,
    /// Initial parameters; `R` resets back to these.
    pub params: FrameParams,
    pub geometry: Geometry,
    /// Jitter RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl VariantConfig {
    pub fn title(&self) -> String {
        format!("jewelbox - {}", self.variant.name())
    }
}

fn asset_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(file)
}
