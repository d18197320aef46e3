//! Validation modules

pub mod upload;

pub use upload::{
    content_type_for_extension, validate_upload, ACCEPTED_EXTENSIONS, ALLOWED_CONTENT_TYPES,
    MAX_UPLOAD_SIZE_BYTES,
};
