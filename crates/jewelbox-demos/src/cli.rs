//! Command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use jewelbox_engine::params::Slider;
use jewelbox_engine::render::{FilterMode, WrapMode};

use crate::variant::{Geometry, Variant, VariantConfig};

#[derive(Debug, Parser)]
#[command(name = "jewelbox", version, about = "Interactive GPU coin and diamond demos")]
pub struct Cli {
    /// Demo to run.
    #[arg(value_enum, default_value_t = Variant::Coin)]
    pub variant: Variant,

    /// OBJ model for the diamond variants.
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Face image for the textured coin.
    #[arg(long, value_name = "PATH")]
    pub texture: Option<PathBuf>,

    /// Rotation increment per frame, in radians.
    #[arg(long, value_name = "NUMBER")]
    pub speed: Option<String>,

    /// Coin thickness.
    #[arg(long, value_name = "NUMBER")]
    pub thickness: Option<String>,

    /// Light intensity.
    #[arg(long, value_name = "NUMBER")]
    pub intensity: Option<String>,

    /// Anti-aliasing samples per axis, a whole number (high-poly diamond only).
    #[arg(long, value_name = "N")]
    pub subdivision: Option<String>,

    /// Initial zoom (camera distance), clamped to the variant's range.
    #[arg(long, value_name = "NUMBER")]
    pub zoom: Option<f32>,

    /// Texture wrap mode.
    #[arg(long, value_enum, default_value_t = WrapArg::Repeat)]
    pub wrap: WrapArg,

    /// Texture filter mode.
    #[arg(long, value_enum, default_value_t = FilterArg::Linear)]
    pub filter: FilterArg,

    /// Seed for the jitter generator, for reproducible frames.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter in env_logger syntax, e.g. "debug" or "jewelbox_engine=debug".
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum WrapArg {
    Repeat,
    Clamp,
    Mirror,
}

impl From<WrapArg> for WrapMode {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::Repeat => WrapMode::Repeat,
            WrapArg::Clamp => WrapMode::ClampToEdge,
            WrapArg::Mirror => WrapMode::MirrorRepeat,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum FilterArg {
    Linear,
    Nearest,
}

impl From<FilterArg> for FilterMode {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Linear => FilterMode::Linear,
            FilterArg::Nearest => FilterMode::Nearest,
        }
    }
}

impl Cli {
    /// Builds the variant's configuration with command-line overrides applied.
    pub fn to_config(&self) -> Result<VariantConfig> {
        let mut config = self.variant.config();
        let params = &mut config.params;

        set_slider(&mut params.speed, self.speed.as_deref(), "--speed")?;
        set_slider(&mut params.thickness, self.thickness.as_deref(), "--thickness")?;
        set_slider(&mut params.intensity, self.intensity.as_deref(), "--intensity")?;
        if let Some(text) = self.subdivision.as_deref() {
            let level: u32 = text
                .trim()
                .parse()
                .with_context(|| format!("--subdivision expects a whole number, got {text:?}"))?;
            let text = level.to_string();
            set_slider(&mut params.subdivision, Some(text.as_str()), "--subdivision")?;
        }

        if let Some(zoom) = self.zoom {
            params.zoom.set(zoom);
        }

        match &mut config.geometry {
            Geometry::Coin { texture, sampler } => {
                if self.model.is_some() {
                    log::warn!("--model is ignored by the {} demo", self.variant.name());
                }
                if let Some(path) = &self.texture {
                    *texture = Some(path.clone());
                }
                sampler.wrap = self.wrap.into();
                sampler.filter = self.filter.into();
            }
            Geometry::Mesh { model, .. } => {
                if self.texture.is_some() {
                    log::warn!("--texture is ignored by the {} demo", self.variant.name());
                }
                if let Some(path) = &self.model {
                    *model = path.clone();
                }
            }
        }

        config.seed = self.seed;
        Ok(config)
    }
}

fn set_slider(slider: &mut Slider, text: Option<&str>, flag: &str) -> Result<()> {
    let Some(text) = text else { return Ok(()) };
    if slider.is_fixed() {
        log::warn!("{flag} has no effect on this demo");
        return Ok(());
    }
    slider
        .set_from_text(text)
        .with_context(|| format!("invalid value for {flag}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jewelbox").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_to_coin() {
        let cli = parse(&[]);
        assert_eq!(cli.variant, Variant::Coin);
        assert_eq!(cli.to_config().unwrap(), Variant::Coin.config());
    }

    #[test]
    fn variant_names_are_kebab_case() {
        assert_eq!(parse(&["textured-coin"]).variant, Variant::TexturedCoin);
        assert_eq!(parse(&["diamond-high"]).variant, Variant::DiamondHigh);
        assert!(Cli::try_parse_from(["jewelbox", "ruby"]).is_err());
    }

    #[test]
    fn slider_flags_set_values_from_text() {
        let cfg = parse(&["coin", "--speed", "0.05", "--thickness", "0.3", "--intensity", "35"])
            .to_config()
            .unwrap();
        assert_eq!(cfg.params.speed.value(), 0.05);
        assert_eq!(cfg.params.thickness.value(), 0.3);
        assert_eq!(cfg.params.intensity.value(), 35.0);
    }

    #[test]
    fn non_numeric_slider_flag_is_an_error() {
        let err = parse(&["coin", "--speed", "quick"]).to_config().unwrap_err();
        assert!(format!("{err:#}").contains("--speed"));
    }

    #[test]
    fn zoom_is_clamped_to_variant_range() {
        let cfg = parse(&["diamond-high", "--zoom", "1"]).to_config().unwrap();
        assert_eq!(cfg.params.zoom.value(), 3.0);
    }

    #[test]
    fn subdivision_applies_to_high_poly_only() {
        let cfg = parse(&["diamond-high", "--subdivision", "4"]).to_config().unwrap();
        assert_eq!(cfg.params.subdivision_level().get(), 4);

        let cfg = parse(&["diamond-low", "--subdivision", "4"]).to_config().unwrap();
        assert_eq!(cfg.params.subdivision_level().get(), 1);
    }

    #[test]
    fn fractional_subdivision_is_rejected() {
        let err = parse(&["diamond-high", "--subdivision", "2.5"]).to_config().unwrap_err();
        assert!(format!("{err:#}").contains("--subdivision"));

        let err = parse(&["diamond-high", "--subdivision", "two"]).to_config().unwrap_err();
        assert!(format!("{err:#}").contains("whole number"));
    }

    #[test]
    fn subdivision_above_max_is_clamped() {
        let cfg = parse(&["diamond-high", "--subdivision", "40"]).to_config().unwrap();
        assert_eq!(cfg.params.subdivision_level().get(), 8);
    }

    #[test]
    fn model_and_sampler_overrides() {
        let cfg = parse(&["diamond", "--model", "gem.obj"]).to_config().unwrap();
        assert_eq!(
            cfg.geometry,
            Geometry::Mesh {
                model: PathBuf::from("gem.obj"),
                anti_aliased: false
            }
        );

        let cfg = parse(&["textured-coin", "--wrap", "clamp", "--filter", "nearest"])
            .to_config()
            .unwrap();
        let Geometry::Coin { sampler, .. } = cfg.geometry else {
            panic!("expected coin geometry");
        };
        assert_eq!(sampler.wrap, WrapMode::ClampToEdge);
        assert_eq!(sampler.filter, FilterMode::Nearest);
    }

    #[test]
    fn seed_is_forwarded() {
        assert_eq!(parse(&["diamond-high", "--seed", "7"]).to_config().unwrap().seed, Some(7));
    }
}
