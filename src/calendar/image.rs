use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("No file selected")]
    EmptyPath,
    #[error("Not a file: {0}")]
    NotAFile(String),
}

/// Image bytes picked from disk, kept in memory for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalImage {
    pub handle: Uuid,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self {
            handle: Uuid::new_v4(),
            mime: mime_for_name(&file_name).to_string(),
            file_name,
            bytes,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ImageError::EmptyPath);
        }
        if !path.is_file() {
            return Err(ImageError::NotAFile(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!("Loaded image {} ({} bytes)", file_name, bytes.len());
        Ok(Self::new(file_name, bytes))
    }

    pub fn is_supported(&self) -> bool {
        self.mime.starts_with("image/")
    }

    pub fn size_label(&self) -> String {
        let len = self.bytes.len();
        if len >= 1024 * 1024 {
            format!("{:.1} MB", len as f64 / (1024.0 * 1024.0))
        } else if len >= 1024 {
            format!("{} KB", len / 1024)
        } else {
            format!("{} B", len)
        }
    }
}

fn mime_for_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn png_extension_is_supported() {
        let image = LocalImage::new("holiday.PNG", vec![0; 4]);
        assert_eq!(image.mime, "image/png");
        assert!(image.is_supported());
    }

    #[test]
    fn pdf_is_not_an_image() {
        let image = LocalImage::new("agenda.pdf", vec![]);
        assert!(!image.is_supported());
    }

    #[test]
    fn missing_extension_is_octet_stream() {
        let image = LocalImage::new("README", vec![]);
        assert_eq!(image.mime, "application/octet-stream");
    }

    #[test]
    fn each_image_gets_its_own_handle() {
        let a = LocalImage::new("a.png", vec![]);
        let b = LocalImage::new("a.png", vec![]);
        assert_ne!(a.handle, b.handle);
    }

    #[test]
    fn load_reads_bytes_and_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cat.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"jpegdata").unwrap();

        let image = LocalImage::load(&path).unwrap();

        assert_eq!(image.file_name, "cat.jpg");
        assert_eq!(image.mime, "image/jpeg");
        assert_eq!(image.bytes, b"jpegdata".to_vec());
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = LocalImage::load(dir.path().join("nope.png"));
        assert!(matches!(result, Err(ImageError::NotAFile(_))));
    }

    #[test]
    fn load_empty_path_fails() {
        assert!(matches!(LocalImage::load(""), Err(ImageError::EmptyPath)));
    }

    #[test]
    fn size_label_scales_units() {
        assert_eq!(LocalImage::new("a.png", vec![0; 10]).size_label(), "10 B");
        assert_eq!(LocalImage::new("a.png", vec![0; 2048]).size_label(), "2 KB");
    }
}
