//! `generate` command: one source image in, favicon and logo assets out.
//!
//! ```text
//! source ─► RGBA ─► strip background ─► crop ─► square canvas ─► ico + png
//!                   ([background])      ([crop])                 ([output])
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use crate::config::AssetConfig;
use crate::image::background::remove_background;
use crate::image::canvas::center_on_square;
use crate::image::crop::crop_to_content;
use crate::image::emit::{AssetReport, emit_assets};
use crate::image::open_image;
use crate::{debug, log};

/// Run the full pipeline and write every configured asset.
pub fn generate_assets(source: &Path, config: &AssetConfig) -> Result<AssetReport> {
    log!("generate"; "processing {}", source.display());

    let loaded = open_image(source)?;
    debug!("generate"; "decoded {}x{} {:?}", loaded.image.width(), loaded.image.height(), loaded.image.color());

    let canvas = prepare_canvas(loaded.image.to_rgba8(), config);
    let report = emit_assets(&canvas, &config.output)
        .with_context(|| format!("failed to write assets to {}", config.output.dir.display()))?;

    for asset in &report.assets {
        log!("emit"; "{} ({})", asset.path.display(), format_sizes(&asset.sizes));
    }
    log!("done"; "generated {} transparent assets", report.assets.len());

    Ok(report)
}

/// Strip, crop and square the source according to `config`.
pub fn prepare_canvas(mut img: RgbaImage, config: &AssetConfig) -> RgbaImage {
    if config.background.enable
        && let Some(removal) =
            remove_background(&mut img, config.background.tolerance, config.background.mode)
    {
        log!("background"; "detected background color: {}", format_color(removal.color));
        debug!("background"; "cleared {} pixels (tolerance {}, {:?})",
            removal.cleared, config.background.tolerance, config.background.mode);
    }

    if config.crop.enable {
        let (cropped, bounds) = crop_to_content(img);
        match bounds {
            Some(bounds) => log!("crop"; "cropped to content: {bounds}"),
            None => log!("crop"; "no visible content, keeping image as-is"),
        }
        img = cropped;
    }

    let canvas = center_on_square(&img);
    debug!("canvas"; "{}x{} centered on {}x{}", img.width(), img.height(), canvas.width(), canvas.height());
    canvas
}

fn format_color(color: Rgba<u8>) -> String {
    let [r, g, b, a] = color.0;
    format!("({r}, {g}, {b}, {a})")
}

fn format_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|s| format!("{s}x{s}"))
        .collect::<Vec<_>>()
        .join(", ")
}
