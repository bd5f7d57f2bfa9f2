use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::image::error::AssetError;

/// A decoded source image together with the format sniffed from its bytes.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

/// Open an image, detecting the format from the file content rather than
/// the extension.
pub fn open_image(path: &Path) -> Result<LoadedImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| AssetError::Read(path.to_path_buf(), err))?;
    let format = reader.format();
    let image = reader
        .decode()
        .map_err(|err| AssetError::Decode(path.to_path_buf(), err))?;

    Ok(LoadedImage { image, format })
}
