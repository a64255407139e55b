//! Storage for uploaded recipe images.
//!
//! Images live under the configured media directory as `recipes/<random>.<ext>`; the
//! relative path is what gets stored on the recipe and what `/media/` serves.

use axum::body::Bytes;
use image::{ImageFormat, ImageReader};
use rand::{distr::Alphanumeric, Rng};
use std::{io::Cursor, path::PathBuf};

use crate::server::error::AppError;

/// Largest accepted upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const RECIPE_IMAGE_DIR: &str = "recipes";

/// An uploaded file as read from a multipart field.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writes a validated image to disk and returns its path relative to the media root.
    pub async fn save(&self, upload: &ImageUpload) -> Result<String, AppError> {
        let extension = image_extension(upload).map_err(AppError::BadRequest)?;

        let name: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        let relative = format!("{}/{}.{}", RECIPE_IMAGE_DIR, name, extension);

        tokio::fs::create_dir_all(self.root.join(RECIPE_IMAGE_DIR)).await?;
        tokio::fs::write(self.root.join(&relative), &upload.bytes).await?;

        tracing::debug!("Stored image {} ({} bytes)", relative, upload.bytes.len());

        Ok(relative)
    }

    /// Deletes a stored image. A file that is already gone is not an error.
    pub async fn remove(&self, relative: &str) -> Result<(), AppError> {
        // Only paths this store produced are removed
        if !relative.starts_with(RECIPE_IMAGE_DIR) || relative.contains("..") {
            return Ok(());
        }

        match tokio::fs::remove_file(self.root.join(relative)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Formats accepted for recipe images.
const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

const INVALID_IMAGE: &str =
    "Upload a valid image. The file you uploaded was either not an image or a corrupted image.";

/// Checks size and content and returns the file extension to store under.
///
/// The format is detected from the bytes and the image must decode; the content type
/// sent by the client is not trusted.
///
/// # Returns
/// - `Ok(extension)` - Accepted image type
/// - `Err(message)` - Form error message describing the rejection
pub fn image_extension(upload: &ImageUpload) -> Result<&'static str, String> {
    if upload.bytes.is_empty() {
        return Err("The submitted file is empty.".to_string());
    }
    if upload.bytes.len() > MAX_IMAGE_BYTES {
        return Err(format!(
            "Image files may be at most {} MiB.",
            MAX_IMAGE_BYTES / (1024 * 1024)
        ));
    }

    let reader = ImageReader::new(Cursor::new(&upload.bytes[..]))
        .with_guessed_format()
        .map_err(|_| INVALID_IMAGE.to_string())?;

    let format = match reader.format() {
        Some(format) if ALLOWED_FORMATS.contains(&format) => format,
        _ => return Err(INVALID_IMAGE.to_string()),
    };

    if let Err(err) = reader.decode() {
        tracing::debug!("Rejected undecodable {:?} upload: {}", format, err);
        return Err(INVALID_IMAGE.to_string());
    }

    Ok(match format {
        ImageFormat::Jpeg => "jpg",
        ImageFormat::Png => "png",
        ImageFormat::Gif => "gif",
        _ => "webp",
    })
}
