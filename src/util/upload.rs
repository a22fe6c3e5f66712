//! Image upload policy: MIME allowlist and size ceiling.
//!
//! Uploads are held in per-request memory buffers and validated before
//! anything touches the database.

use thiserror::Error;

/// Hard ceiling on a single image upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed.")]
    UnsupportedType(String),

    #[error("File too large. Images must be 5MB or smaller.")]
    TooLarge(usize),
}

/// A validated in-memory image. Constructing one enforces the upload policy;
/// the buffer lives only for the duration of the request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadedImage {
    pub fn new(content_type: String, data: Vec<u8>) -> Result<Self, UploadError> {
        if !Self::allowed_type(&content_type) {
            return Err(UploadError::UnsupportedType(content_type));
        }
        if data.len() > MAX_IMAGE_BYTES {
            return Err(UploadError::TooLarge(data.len()));
        }
        Ok(UploadedImage { content_type, data })
    }

    pub fn allowed_type(content_type: &str) -> bool {
        ALLOWED_IMAGE_TYPES.contains(&content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_allowed_type() {
        for content_type in ALLOWED_IMAGE_TYPES {
            let image = UploadedImage::new(content_type.to_string(), vec![0u8; 16]);
            assert!(image.is_ok(), "{} should be accepted", content_type);
        }
    }

    #[test]
    fn test_rejects_disallowed_types() {
        for content_type in ["text/plain", "application/pdf", "image/svg+xml", ""] {
            let result = UploadedImage::new(content_type.to_string(), vec![0u8; 16]);
            assert!(
                matches!(result, Err(UploadError::UnsupportedType(_))),
                "{} should be rejected",
                content_type
            );
        }
    }

    #[test]
    fn test_rejects_oversized_image() {
        let result = UploadedImage::new("image/png".to_string(), vec![0u8; MAX_IMAGE_BYTES + 1]);
        assert!(matches!(result, Err(UploadError::TooLarge(_))));
    }

    #[test]
    fn test_accepts_image_at_exact_limit() {
        let result = UploadedImage::new("image/png".to_string(), vec![0u8; MAX_IMAGE_BYTES]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_type_checked_before_size() {
        let result =
            UploadedImage::new("text/plain".to_string(), vec![0u8; MAX_IMAGE_BYTES + 1]);
        assert!(matches!(result, Err(UploadError::UnsupportedType(_))));
    }

    #[test]
    fn test_error_messages() {
        let type_err = UploadError::UnsupportedType("text/plain".to_string());
        assert_eq!(
            type_err.to_string(),
            "Invalid file type. Only JPEG, PNG, GIF, and WebP are allowed."
        );

        let size_err = UploadError::TooLarge(MAX_IMAGE_BYTES + 1);
        assert_eq!(size_err.to_string(), "File too large. Images must be 5MB or smaller.");
    }
}
