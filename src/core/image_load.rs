//! Image file validation and loading.
//!
//! Files come in through the open dialog, get validated in three steps
//! (extension, byte sniff, decode), and leave as a self-contained
//! [`LoadedImage`] with a base64 data URI. Runs under `spawn_blocking`;
//! nothing here touches the UI.

use base64::Engine as _;
use std::io::Cursor;
use std::path::Path;

use crate::state::LoadedImage;

#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("Not an image file: {0}")]
    NotAnImage(String),
    #[error("Could not read file: {0}")]
    UnreadableFile(#[from] std::io::Error),
    #[error("Could not decode image data")]
    DecodeFailed,
}

/// Validate and load an image file into a data-URI backed [`LoadedImage`].
pub fn load_image_file(path: &Path) -> Result<LoadedImage, ImageLoadError> {
    let display_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let is_image_ext = mime_guess::from_path(path)
        .first()
        .map(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .unwrap_or(false);
    if !is_image_ext {
        return Err(ImageLoadError::NotAnImage(display_name));
    }

    let bytes = std::fs::read(path)?;

    // the extension said image; make sure the bytes agree
    let format = image::guess_format(&bytes).map_err(|_| ImageLoadError::DecodeFailed)?;
    let (width, height) = image::ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|_| ImageLoadError::DecodeFailed)?
        .into_dimensions()
        .map_err(|_| ImageLoadError::DecodeFailed)?;

    let src = format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    );

    Ok(LoadedImage::new(src, width, height, display_name))
}

/// Recover natural dimensions from a data URI, for imported projects whose
/// wire format carries only the image source string.
pub fn dimensions_from_data_uri(src: &str) -> Option<(u32, u32)> {
    let payload = src.strip_prefix("data:")?.split_once(";base64,")?.1;
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload).ok()?;
    image::ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use uuid::Uuid;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::new(width, height);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn temp_file(name_suffix: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("panomark-{}-{}", Uuid::new_v4(), name_suffix));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_png() {
        let path = temp_file("ok.png", &png_bytes(4, 2));
        let loaded = load_image_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!((loaded.width, loaded.height), (4, 2));
        assert!(loaded.src.starts_with("data:image/png;base64,"));
        assert!(loaded.name.ends_with("ok.png"));
    }

    #[test]
    fn test_rejects_non_image_extension() {
        let path = temp_file("notes.txt", b"hello");
        let result = load_image_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ImageLoadError::NotAnImage(_))));
    }

    #[test]
    fn test_rejects_garbage_bytes_behind_image_extension() {
        let path = temp_file("fake.png", b"this is not a png");
        let result = load_image_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ImageLoadError::DecodeFailed)));
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let path = std::env::temp_dir().join(format!("panomark-missing-{}.png", Uuid::new_v4()));
        assert!(matches!(
            load_image_file(&path),
            Err(ImageLoadError::UnreadableFile(_))
        ));
    }

    #[test]
    fn test_dimensions_from_data_uri() {
        let path = temp_file("dims.png", &png_bytes(8, 4));
        let loaded = load_image_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(dimensions_from_data_uri(&loaded.src), Some((8, 4)));
        assert_eq!(dimensions_from_data_uri("https://example.com/img.png"), None);
        assert_eq!(dimensions_from_data_uri("data:image/png;base64,!!!"), None);
    }
}
