//! Write the icon and PNG renditions of the final canvas.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageFormat, RgbaImage};

use crate::config::OutputConfig;
use crate::config::section::output::MAX_ICO_SIZE;
use crate::debug;
use crate::image::error::AssetError;

/// One file written by [`emit_assets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    pub path: PathBuf,
    /// Square edge lengths stored in the file.
    pub sizes: Vec<u32>,
}

/// Everything written during one run, in write order.
#[derive(Debug, Default)]
pub struct AssetReport {
    pub assets: Vec<EmittedAsset>,
}

/// Write the multi-size icon followed by each PNG rendition.
///
/// Existing files are overwritten. A failure stops the run; files written
/// before it stay on disk.
pub fn emit_assets(canvas: &RgbaImage, output: &OutputConfig) -> Result<AssetReport, AssetError> {
    let filter = FilterType::from(output.filter);
    let mut report = AssetReport::default();

    let ico_path = output.ico_path();
    let ico_sizes = output.unique_ico_sizes();
    write_ico(canvas, &ico_sizes, filter, &ico_path)?;
    report.assets.push(EmittedAsset {
        path: ico_path,
        sizes: ico_sizes,
    });

    for target in &output.png {
        let path = output.dir.join(&target.name);
        write_png(canvas, target.size, filter, &path)?;
        report.assets.push(EmittedAsset {
            path,
            sizes: vec![target.size],
        });
    }

    Ok(report)
}

/// Resample `canvas` to `size` x `size`.
pub fn resize_square(canvas: &RgbaImage, size: u32, filter: FilterType) -> RgbaImage {
    if canvas.dimensions() == (size, size) {
        return canvas.clone();
    }
    debug!("emit"; "resampling {}x{} -> {size}x{size}", canvas.width(), canvas.height());
    imageops::resize(canvas, size, size, filter)
}

/// Encode an ICO holding one PNG-compressed frame per size.
///
/// `path` is the destination the bytes are meant for; it only labels errors.
pub fn encode_ico(
    canvas: &RgbaImage,
    sizes: &[u32],
    filter: FilterType,
    path: &Path,
) -> Result<Vec<u8>, AssetError> {
    if sizes.is_empty() {
        return Err(AssetError::InvalidSize(
            path.to_path_buf(),
            "icon needs at least one size".into(),
        ));
    }
    if let Some(size) = sizes.iter().find(|&&s| s == 0 || s > MAX_ICO_SIZE) {
        return Err(AssetError::InvalidSize(
            path.to_path_buf(),
            format!("icon frame {size} is outside 1..={MAX_ICO_SIZE}"),
        ));
    }

    let frames = sizes
        .iter()
        .map(|&size| {
            let frame = resize_square(canvas, size, filter);
            IcoFrame::as_png(frame.as_raw(), size, size, ExtendedColorType::Rgba8)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| AssetError::Encode(path.to_path_buf(), err))?;

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&frames)
        .map_err(|err| AssetError::Encode(path.to_path_buf(), err))?;
    Ok(bytes)
}

/// Encode `canvas` resampled to `size` x `size` as PNG.
pub fn encode_png(
    canvas: &RgbaImage,
    size: u32,
    filter: FilterType,
    path: &Path,
) -> Result<Vec<u8>, AssetError> {
    if size == 0 {
        return Err(AssetError::InvalidSize(
            path.to_path_buf(),
            "PNG size must be positive".into(),
        ));
    }

    let resized = resize_square(canvas, size, filter);
    let mut buffer = Cursor::new(Vec::new());
    resized
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|err| AssetError::Encode(path.to_path_buf(), err))?;
    Ok(buffer.into_inner())
}

fn write_ico(
    canvas: &RgbaImage,
    sizes: &[u32],
    filter: FilterType,
    path: &Path,
) -> Result<(), AssetError> {
    let bytes = encode_ico(canvas, sizes, filter, path)?;
    write_file(path, &bytes)
}

fn write_png(canvas: &RgbaImage, size: u32, filter: FilterType, path: &Path) -> Result<(), AssetError> {
    let bytes = encode_png(canvas, size, filter, path)?;
    write_file(path, &bytes)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| AssetError::Write(path.to_path_buf(), err))?;
    }
    fs::write(path, bytes).map_err(|err| AssetError::Write(path.to_path_buf(), err))
}
