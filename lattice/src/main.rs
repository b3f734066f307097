//! Render a configured noise field to a grayscale PNG.
//!
//! ```text
//! lattice <settings.json5> [output.png]
//! ```
//!
//! The settings file holds every `NoiseSettings` field plus `width`, `height`
//! and `warp`.

use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{env, fs};

use anyhow::{Context, Result, bail};
use image::{GrayImage, ImageFormat};
use lattice_noise::{Float, NoiseGenerator, NoiseSettings, Vector2};
use rayon::prelude::*;
use serde::Deserialize;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

const DEFAULT_OUTPUT: &str = "noise.png";

/// Image dimensions and sampling options around the noise settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RenderSettings {
    width: u32,
    height: u32,
    /// Apply the fractal gradient perturb to each pixel before sampling.
    warp: bool,
    #[serde(flatten)]
    noise: NoiseSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            warp: false,
            noise: NoiseSettings::default(),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args_os().skip(1);
    let Some(settings_path) = args.next().map(PathBuf::from) else {
        bail!("usage: lattice <settings.json5> [output.png]");
    };
    let output = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    let settings = load_settings(&settings_path)?;
    let noise = settings
        .noise
        .build()
        .with_context(|| format!("invalid noise settings in {}", settings_path.display()))?;

    let start = Instant::now();
    let samples = render(&noise, settings.width, settings.height, settings.warp);
    tracing::info!(
        "Sampled {}x{} {:?} field in {:?}",
        settings.width,
        settings.height,
        noise.config().noise_type(),
        start.elapsed()
    );

    let image = to_image(&samples, settings.width, settings.height)?;
    image
        .save_with_format(&output, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!("Wrote {}", output.display());

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_settings(path: &Path) -> Result<RenderSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let settings: RenderSettings = serde_json5::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if settings.width == 0 || settings.height == 0 {
        bail!(
            "image must not be empty, got {}x{}",
            settings.width,
            settings.height
        );
    }
    Ok(settings)
}

/// Sample one value per pixel, rows in parallel. The generator is only read.
fn render(noise: &NoiseGenerator, width: u32, height: u32, warp: bool) -> Vec<Float> {
    (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).map(move |x| {
                let mut point = Vector2::new(x as Float, y as Float);
                if warp {
                    point = noise.gradient_perturb_fractal_2d(point);
                }
                noise.get_noise_2d(point.x, point.y)
            })
        })
        .collect()
}

/// Stretch the finite sample range onto `0..=255`. Non-finite samples map to 0.
fn to_image(samples: &[Float], width: u32, height: u32) -> Result<GrayImage> {
    let (min, max) = samples
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((Float::INFINITY, Float::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    tracing::info!("Sample range [{min}, {max}]");

    let span = max - min;
    let pixels = samples
        .iter()
        .map(|&v| {
            if !v.is_finite() || span <= 0.0 {
                0
            } else {
                ((v - min) / span * 255.0).round() as u8
            }
        })
        .collect();

    GrayImage::from_raw(width, height, pixels).context("sample count does not match image size")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_settings_flatten_noise_fields() {
        let settings: RenderSettings = serde_json5::from_str(
            "{ width: 8, warp: true, seed: 3, noise_type: 'value_fractal' }",
        )
        .expect("valid json5");
        assert_eq!(settings.width, 8);
        assert_eq!(settings.height, 512);
        assert!(settings.warp);
        assert_eq!(settings.noise.seed, 3);
    }

    #[test]
    fn image_spans_full_range() {
        let image = to_image(&[-0.5, 0.0, 0.5, Float::NAN], 2, 2).expect("sizes match");
        assert_eq!(image.as_raw(), &vec![0, 128, 255, 0]);
    }

    #[test]
    fn constant_field_is_black() {
        let image = to_image(&[0.25; 4], 2, 2).expect("sizes match");
        assert!(image.as_raw().iter().all(|&p| p == 0));
    }

    #[test]
    fn render_is_deterministic_across_threads() {
        let noise = NoiseSettings::default().build().expect("defaults are valid");
        assert_eq!(render(&noise, 16, 16, true), render(&noise, 16, 16, true));
    }
}
