//! Startup check that the imaging backend can write PNG files.

use image::ImageFormat;

use crate::error::FrameError;

/// Fail unless `format` can be encoded by the compiled-in `image` codecs.
///
/// # Errors
///
/// Returns [`FrameError::MissingCapability`] with install guidance when the
/// encoder was not compiled in.
pub fn require_encoder(format: ImageFormat) -> Result<(), FrameError> {
    if format.writing_enabled() {
        return Ok(());
    }
    let (name, feature) = format_feature(format);
    Err(FrameError::MissingCapability { format: name, feature })
}

/// Check the PNG encoder used for every frame.
///
/// # Errors
///
/// See [`require_encoder`].
pub fn require_png() -> Result<(), FrameError> {
    require_encoder(ImageFormat::Png)
}

/// Display name and `image` crate feature for a format.
fn format_feature(format: ImageFormat) -> (&'static str, &'static str) {
    match format {
        ImageFormat::Png => ("PNG", "png"),
        ImageFormat::Jpeg => ("JPEG", "jpeg"),
        ImageFormat::WebP => ("WebP", "webp"),
        ImageFormat::Gif => ("GIF", "gif"),
        ImageFormat::Bmp => ("BMP", "bmp"),
        ImageFormat::Tiff => ("TIFF", "tiff"),
        _ => ("This image format", "default-formats"),
    }
}
