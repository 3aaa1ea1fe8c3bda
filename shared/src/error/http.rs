//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::TemplateNotFound | Self::CertificateNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            Self::AlreadyExists | Self::CertificateAlreadyRevoked | Self::TemplateArchived => {
                StatusCode::CONFLICT
            }

            // 410 Gone
            Self::CertificateRevoked => StatusCode::GONE,

            // 422 Unprocessable
            Self::ValidationFailed
            | Self::TemplateInvalid
            | Self::LayoutPatchRejected
            | Self::RequiredField
            | Self::ValueOutOfRange => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request
            Self::InvalidRequest | Self::InvalidFormat => StatusCode::BAD_REQUEST,

            // 500 Internal
            Self::Unknown
            | Self::TemplateDocumentCorrupt
            | Self::InternalError
            | Self::ConfigError
            | Self::QrRenderFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
