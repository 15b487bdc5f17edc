// Upload intake: multipart parsing and the content validator that gates every upload route.

pub mod handlers;
pub mod multipart;
pub mod validator;

pub use multipart::parse_upload_form;
pub use validator::{sanitize_filename, validate, UploadCandidate};
