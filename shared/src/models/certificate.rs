//! Certificate record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Issued certificate record
///
/// `id` doubles as the public verification identifier (the string encoded in
/// the QR code). `fingerprint_sha256` is a content hash of the issued record,
/// so a stored record that was tampered with no longer matches its own
/// fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub id: String,
    pub template_id: String,
    pub recipient_name: String,
    pub course_name: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub issued_at: DateTime<Utc>,
    #[serde(default)]
    pub revoked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoked_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoke_reason: Option<String>,
    pub fingerprint_sha256: String,
}

impl Certificate {
    /// Issue a new certificate from a creation payload.
    pub fn issue(data: CertificateCreate) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        let issued_at = Utc::now();
        let fingerprint_sha256 = fingerprint(
            &id,
            &data.template_id,
            &data.recipient_name,
            &data.course_name,
            &data.institution,
            issued_at,
        );
        Self {
            id,
            template_id: data.template_id,
            recipient_name: data.recipient_name,
            course_name: data.course_name,
            institution: data.institution,
            grade: data.grade,
            issued_at,
            revoked: false,
            revoked_at: None,
            revoke_reason: None,
            fingerprint_sha256,
        }
    }

    /// Recompute the fingerprint over the record's issuance fields.
    pub fn expected_fingerprint(&self) -> String {
        fingerprint(
            &self.id,
            &self.template_id,
            &self.recipient_name,
            &self.course_name,
            &self.institution,
            self.issued_at,
        )
    }

    /// Verify the stored fingerprint matches the record (case-insensitive).
    pub fn verify_fingerprint(&self) -> bool {
        self.fingerprint_sha256
            .eq_ignore_ascii_case(&self.expected_fingerprint())
    }

    /// Mark this certificate revoked.
    pub fn revoke(&mut self, reason: Option<String>) {
        self.revoked = true;
        self.revoked_at = Some(Utc::now());
        self.revoke_reason = reason;
    }
}

fn fingerprint(
    id: &str,
    template_id: &str,
    recipient_name: &str,
    course_name: &str,
    institution: &str,
    issued_at: DateTime<Utc>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    hasher.update(b"|");
    hasher.update(template_id.as_bytes());
    hasher.update(b"|");
    hasher.update(recipient_name.as_bytes());
    hasher.update(b"|");
    hasher.update(course_name.as_bytes());
    hasher.update(b"|");
    hasher.update(institution.as_bytes());
    hasher.update(b"|");
    hasher.update(issued_at.to_rfc3339().as_bytes());
    hex::encode(hasher.finalize())
}

/// Create certificate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateCreate {
    pub template_id: String,
    pub recipient_name: String,
    pub course_name: String,
    pub institution: String,
    #[serde(default)]
    pub grade: Option<String>,
}

/// Revoke certificate payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateRevoke {
    #[serde(default)]
    pub reason: Option<String>,
}

/// Verification verdict for a certificate lookup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerifyVerdict {
    Valid,
    Revoked,
    NotFound,
}

/// Public verification result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub verdict: VerifyVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
    pub checked_at: DateTime<Utc>,
}

impl VerifyResponse {
    pub fn valid(certificate: Certificate) -> Self {
        Self {
            verdict: VerifyVerdict::Valid,
            certificate: Some(certificate),
            checked_at: Utc::now(),
        }
    }

    pub fn revoked(certificate: Certificate) -> Self {
        Self {
            verdict: VerifyVerdict::Revoked,
            certificate: Some(certificate),
            checked_at: Utc::now(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            verdict: VerifyVerdict::NotFound,
            certificate: None,
            checked_at: Utc::now(),
        }
    }
}
