//! Error type for loading, processing and writing assets.

use std::path::PathBuf;

use thiserror::Error;

/// Asset pipeline errors.
///
/// Each failing stage has its own variant so callers can tell a missing
/// source apart from an undecodable one or a failed write.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("source image `{}` not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read `{}`", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to decode `{}`", .0.display())]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("failed to encode `{}`", .0.display())]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("failed to write `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("invalid size for `{path}`: {1}", path = .0.display())]
    InvalidSize(PathBuf, String),
}
