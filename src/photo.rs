// src/photo.rs
// Uploaded photo handling: data-URL parsing and base64 decoding

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{HeroError, Result};

/// Mime type assumed when the client sends bare base64 without a data-URL prefix
const DEFAULT_MIME: &str = "image/png";

/// A decoded photo upload
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    mime_type: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PhotoUpload {
    /// Parse `data:image/<type>;base64,<payload>` or bare base64.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(HeroError::InvalidPhoto("photo is empty".to_string()));
        }

        let (mime_type, payload) = match raw.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest.split_once(',').ok_or_else(|| {
                    HeroError::InvalidPhoto("data URL has no payload".to_string())
                })?;
                let mime = header.strip_suffix(";base64").ok_or_else(|| {
                    HeroError::InvalidPhoto("data URL is not base64-encoded".to_string())
                })?;
                (mime.to_ascii_lowercase(), payload)
            }
            None => (DEFAULT_MIME.to_string(), raw),
        };

        if !mime_type.starts_with("image/") {
            return Err(HeroError::InvalidPhoto(format!(
                "expected an image, got '{mime_type}'"
            )));
        }

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| HeroError::InvalidPhoto(format!("bad base64 payload: {e}")))?;
        if bytes.is_empty() {
            return Err(HeroError::InvalidPhoto("photo is empty".to_string()));
        }

        Ok(Self { mime_type, bytes })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    /// File extension for multipart uploads
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn encoded() -> String {
        STANDARD.encode(PNG_HEADER)
    }

    #[test]
    fn test_parse_data_url() {
        let photo = PhotoUpload::parse(&format!("data:image/jpeg;base64,{}", encoded())).unwrap();
        assert_eq!(photo.mime_type(), "image/jpeg");
        assert_eq!(photo.bytes(), PNG_HEADER);
        assert_eq!(photo.extension(), "jpg");
    }

    #[test]
    fn test_parse_bare_base64_assumes_png() {
        let photo = PhotoUpload::parse(&encoded()).unwrap();
        assert_eq!(photo.mime_type(), "image/png");
        assert_eq!(photo.len(), PNG_HEADER.len());
    }

    #[test]
    fn test_data_url_roundtrip() {
        let url = format!("data:image/webp;base64,{}", encoded());
        let photo = PhotoUpload::parse(&url).unwrap();
        assert_eq!(photo.to_data_url(), url);
    }

    #[test]
    fn test_rejects_non_image_mime() {
        let err = PhotoUpload::parse(&format!("data:text/plain;base64,{}", encoded())).unwrap_err();
        assert!(matches!(err, HeroError::InvalidPhoto(_)));
        assert!(err.to_string().contains("text/plain"));
    }

    #[test]
    fn test_rejects_non_base64_data_url() {
        let err = PhotoUpload::parse("data:image/png,rawbytes").unwrap_err();
        assert!(err.to_string().contains("not base64"));
    }

    #[test]
    fn test_rejects_garbage_payload() {
        assert!(PhotoUpload::parse("data:image/png;base64,@@@not-base64@@@").is_err());
        assert!(PhotoUpload::parse("   ").is_err());
        assert!(PhotoUpload::parse("data:image/png;base64").is_err());
    }

    #[test]
    fn test_debug_hides_bytes() {
        let photo = PhotoUpload::parse(&encoded()).unwrap();
        let debug = format!("{:?}", photo);
        assert!(debug.contains("len"));
        assert!(!debug.contains("137"));
    }
}
