//! Read-only image diagnostics.

use std::fmt;
use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageFormat};

use crate::image::error::AssetError;
use crate::image::load::open_image;

/// Pixel probed when the image carries alpha.
pub const ALPHA_PROBE: (u32, u32) = (10, 10);

/// Raw channel values of one pixel, in the image's own color type.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelValue {
    Int(Vec<u16>),
    Float(Vec<f32>),
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels: Vec<String> = match self {
            Self::Int(values) => values.iter().map(ToString::to_string).collect(),
            Self::Float(values) => values.iter().map(|v| format!("{v:.3}")).collect(),
        };
        match channels.as_slice() {
            [single] => write!(f, "{single}"),
            _ => write!(f, "({})", channels.join(", ")),
        }
    }
}

/// Result of the optional (10, 10) probe.
#[derive(Debug, Clone, PartialEq)]
pub enum AlphaProbe {
    /// Color type has no alpha channel; nothing was read.
    NoAlpha,
    /// Image has alpha but is too small to contain the probe pixel.
    OutOfBounds,
    Pixel(PixelValue),
}

/// What the inspector found out about an image.
#[derive(Debug, Clone)]
pub struct ImageReport {
    pub color: ColorType,
    pub format: Option<ImageFormat>,
    pub width: u32,
    pub height: u32,
    /// Pixel at (0, 0); `None` for an image without pixels.
    pub origin: Option<PixelValue>,
    pub probe: AlphaProbe,
}

impl ImageReport {
    /// Human-readable report lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Mode: {}", color_mode_name(self.color)),
            format!("Format: {}", format_name(self.format)),
            format!("Size: {}x{}", self.width, self.height),
        ];
        match &self.origin {
            Some(pixel) => lines.push(format!("Pixel at (0, 0): {pixel}")),
            None => lines.push("Image has no pixels.".to_string()),
        }

        let (px, py) = ALPHA_PROBE;
        match &self.probe {
            AlphaProbe::NoAlpha => lines.push("Image does NOT have alpha channel.".to_string()),
            AlphaProbe::OutOfBounds => {
                lines.push("Image has alpha channel info.".to_string());
                lines.push(format!("Pixel at ({px}, {py}): outside the image"));
            }
            AlphaProbe::Pixel(pixel) => {
                lines.push("Image has alpha channel info.".to_string());
                lines.push(format!("Pixel at ({px}, {py}): {pixel}"));
            }
        }
        lines
    }
}

/// Load an image and describe it.
pub fn inspect_image(path: &Path) -> Result<ImageReport, AssetError> {
    let loaded = open_image(path)?;
    Ok(describe(&loaded.image, loaded.format))
}

/// Describe an already decoded image.
pub fn describe(img: &DynamicImage, format: Option<ImageFormat>) -> ImageReport {
    let color = img.color();
    let (width, height) = img.dimensions();
    let origin = (width > 0 && height > 0).then(|| pixel_value(img, 0, 0));

    let probe = if !color.has_alpha() {
        AlphaProbe::NoAlpha
    } else if img.in_bounds(ALPHA_PROBE.0, ALPHA_PROBE.1) {
        AlphaProbe::Pixel(pixel_value(img, ALPHA_PROBE.0, ALPHA_PROBE.1))
    } else {
        AlphaProbe::OutOfBounds
    };

    ImageReport {
        color,
        format,
        width,
        height,
        origin,
        probe,
    }
}

/// Channel values at (x, y) without converting the color type.
fn pixel_value(img: &DynamicImage, x: u32, y: u32) -> PixelValue {
    fn ints<T: Copy + Into<u16>>(channels: &[T]) -> PixelValue {
        PixelValue::Int(channels.iter().map(|&c| c.into()).collect())
    }

    match img {
        DynamicImage::ImageLuma8(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageLumaA8(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageRgb8(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageRgba8(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageLuma16(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageLumaA16(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageRgb16(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageRgba16(buf) => ints(&buf.get_pixel(x, y).0),
        DynamicImage::ImageRgb32F(buf) => PixelValue::Float(buf.get_pixel(x, y).0.to_vec()),
        DynamicImage::ImageRgba32F(buf) => PixelValue::Float(buf.get_pixel(x, y).0.to_vec()),
        other => ints(&other.get_pixel(x, y).0),
    }
}

/// Short color mode name in the usual imaging-tool notation.
pub fn color_mode_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "L;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;32F",
        ColorType::Rgba32F => "RGBA;32F",
        _ => "unknown",
    }
}

fn format_name(format: Option<ImageFormat>) -> String {
    format
        .map(|f| format!("{f:?}").to_ascii_uppercase())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn opaque_rgb_skips_probe() {
        let img = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        let report = describe(&DynamicImage::ImageRgb8(img), Some(ImageFormat::Png));

        assert!(!report.color.has_alpha());
        assert_eq!(report.probe, AlphaProbe::NoAlpha);
        let lines = report.lines();
        assert!(lines.contains(&"Image does NOT have alpha channel.".to_string()));
        assert!(lines.contains(&"Pixel at (0, 0): (255, 255, 255)".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("Pixel at (10, 10)")));
    }

    #[test]
    fn rgba_reports_probe_pixel() {
        let mut img = RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 4]));
        img.put_pixel(10, 10, Rgba([0, 0, 0, 0]));
        let report = describe(&DynamicImage::ImageRgba8(img), None);

        assert_eq!(report.probe, AlphaProbe::Pixel(PixelValue::Int(vec![0, 0, 0, 0])));
        let lines = report.lines();
        assert_eq!(lines[0], "Mode: RGBA");
        assert_eq!(lines[1], "Format: unknown");
        assert!(lines.contains(&"Image has alpha channel info.".to_string()));
        assert!(lines.contains(&"Pixel at (10, 10): (0, 0, 0, 0)".to_string()));
    }

    #[test]
    fn small_rgba_does_not_read_outside() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        let report = describe(&DynamicImage::ImageRgba8(img), None);
        assert_eq!(report.probe, AlphaProbe::OutOfBounds);
    }

    #[test]
    fn grayscale_prints_single_value() {
        let img = GrayImage::from_pixel(3, 3, Luma([128]));
        let report = describe(&DynamicImage::ImageLuma8(img), None);
        assert_eq!(report.origin.unwrap().to_string(), "128");
        assert_eq!(color_mode_name(report.color), "L");
    }

    #[test]
    fn inspect_reads_format_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("upload.png");
        RgbImage::from_pixel(12, 12, Rgb([10, 20, 30]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let report = inspect_image(&path).unwrap();
        assert_eq!(report.format, Some(ImageFormat::Png));
        let lines = report.lines();
        assert_eq!(lines[0], "Mode: RGB");
        assert_eq!(lines[1], "Format: PNG");
    }

    #[test]
    fn inspect_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = inspect_image(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }
}
