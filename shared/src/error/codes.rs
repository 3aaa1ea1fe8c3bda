//! Unified error codes for the Sigil platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Template errors
//! - 7xxx: Certificate errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Template ====================
    /// Template not found
    TemplateNotFound = 6001,
    /// Template failed structural validation
    TemplateInvalid = 6002,
    /// Template is archived and cannot be mutated
    TemplateArchived = 6003,
    /// Layout patch rejected by validation
    LayoutPatchRejected = 6004,
    /// Stored template document could not be decoded
    TemplateDocumentCorrupt = 6005,

    // ==================== 7xxx: Certificate ====================
    /// Certificate not found
    CertificateNotFound = 7001,
    /// Certificate has been revoked
    CertificateRevoked = 7002,
    /// Certificate is already revoked
    CertificateAlreadyRevoked = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
    /// QR code rendering failed
    QrRenderFailed = 9201,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Template
            ErrorCode::TemplateNotFound => "Template not found",
            ErrorCode::TemplateInvalid => "Template failed validation",
            ErrorCode::TemplateArchived => "Template is archived",
            ErrorCode::LayoutPatchRejected => "Layout patch rejected",
            ErrorCode::TemplateDocumentCorrupt => "Stored template document is corrupt",

            // Certificate
            ErrorCode::CertificateNotFound => "Certificate not found",
            ErrorCode::CertificateRevoked => "Certificate has been revoked",
            ErrorCode::CertificateAlreadyRevoked => "Certificate is already revoked",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::QrRenderFailed => "QR code rendering failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Template
            6001 => Ok(ErrorCode::TemplateNotFound),
            6002 => Ok(ErrorCode::TemplateInvalid),
            6003 => Ok(ErrorCode::TemplateArchived),
            6004 => Ok(ErrorCode::LayoutPatchRejected),
            6005 => Ok(ErrorCode::TemplateDocumentCorrupt),

            // Certificate
            7001 => Ok(ErrorCode::CertificateNotFound),
            7002 => Ok(ErrorCode::CertificateRevoked),
            7003 => Ok(ErrorCode::CertificateAlreadyRevoked),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),
            9201 => Ok(ErrorCode::QrRenderFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::TemplateNotFound.code(), 6001);
        assert_eq!(ErrorCode::CertificateRevoked.code(), 7002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(6002), Ok(ErrorCode::TemplateInvalid));
        assert_eq!(
            ErrorCode::try_from(7001),
            Ok(ErrorCode::CertificateNotFound)
        );
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(42), Err(InvalidErrorCode(42)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::TemplateInvalid).unwrap();
        assert_eq!(json, "6002");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("7002").unwrap();
        assert_eq!(code, ErrorCode::CertificateRevoked);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::TemplateNotFound,
            ErrorCode::LayoutPatchRejected,
            ErrorCode::CertificateAlreadyRevoked,
            ErrorCode::QrRenderFailed,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::TemplateNotFound.message(), "Template not found");
        assert_eq!(
            ErrorCode::CertificateRevoked.message(),
            "Certificate has been revoked"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::TemplateNotFound.to_string(), "6001");
    }
}
