// src/background.rs
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// An image embedded by content, ready to drop into CSS as a `data:` URL.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundImage {
    pub mime: String,
    pub base64: String,
}

impl BackgroundImage {
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime: mime.into(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// Read and encode the image. A missing or unreadable file is not fatal:
    /// the page renders without a background and shows a warning instead.
    pub fn load(path: &Path) -> Option<Self> {
        match std::fs::read(path) {
            Ok(bytes) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                tracing::info!(path = %path.display(), %mime, bytes = bytes.len(), "background image loaded");
                Some(Self::from_bytes(mime.essence_str(), &bytes))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "background image not available");
                None
            }
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn encodes_bytes_into_data_url() {
        let img = BackgroundImage::from_bytes("image/png", b"abc");
        assert_eq!(img.data_url(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn missing_file_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(BackgroundImage::load(&dir.path().join("missing.avif")), None);
    }

    #[test]
    fn mime_follows_extension() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"\x89PNG").unwrap();

        let img = BackgroundImage::load(file.path()).unwrap();
        assert_eq!(img.mime, "image/png");
        assert_eq!(img.base64, STANDARD.encode(b"\x89PNG"));
    }
}
