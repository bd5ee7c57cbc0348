use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Media types a receipt attachment may declare.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// A chosen receipt file: its name and the media type it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentDescriptor {
    pub file_name: String,
    pub media_type: String,
}

impl AttachmentDescriptor {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("unsupported media type: {0:?}")]
    UnsupportedMediaType(String),
}

/// Accept a receipt iff its declared media type is one of the allowed
/// image types. The comparison is case-sensitive, and the file-name
/// extension is never consulted: the declared type is authoritative, so
/// a mismatched extension passes but a non-image declaration never does.
pub fn validate_attachment(descriptor: &AttachmentDescriptor) -> Result<(), AttachmentError> {
    if ALLOWED_MEDIA_TYPES.contains(&descriptor.media_type.as_str()) {
        Ok(())
    } else {
        Err(AttachmentError::UnsupportedMediaType(
            descriptor.media_type.clone(),
        ))
    }
}
