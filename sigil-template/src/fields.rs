//! Canonical field names for certificate templates
//!
//! Field names match the keys used in stored template documents, so they are
//! camelCase strings rather than Rust identifiers.

/// Layout fields every template must position.
pub const REQUIRED_LAYOUT_FIELDS: [&str; 7] = [
    "recipientName",
    "courseName",
    "issueDate",
    "certificateId",
    "institution",
    "signature",
    "qrCode",
];

/// Layout fields a template may position but is not required to.
pub const OPTIONAL_LAYOUT_FIELDS: [&str; 2] = ["grade", "logo"];

/// Layout fields that are positional only and never substitution targets.
pub const POSITIONAL_ONLY_FIELDS: [&str; 2] = ["signature", "qrCode"];

/// Styling keys every template must define.
///
/// `signatureName` and `signatureTitle` have no layout box of their own; they
/// style sub-elements of the `signature` region.
pub const REQUIRED_STYLING_KEYS: [&str; 7] = [
    "recipientName",
    "courseName",
    "issueDate",
    "certificateId",
    "institution",
    "signatureName",
    "signatureTitle",
];

/// Extract the field name from a `{{fieldName}}` variable token.
///
/// Returns `None` when the token is not well-formed, which callers treat the
/// same as a token naming an unknown field.
pub fn variable_field(token: &str) -> Option<&str> {
    let inner = token.strip_prefix("{{")?.strip_suffix("}}")?.trim();
    if inner.is_empty() { None } else { Some(inner) }
}

/// Whether a layout field is a valid substitution target.
pub fn is_substitutable(field: &str) -> bool {
    !POSITIONAL_ONLY_FIELDS.contains(&field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_field_well_formed() {
        assert_eq!(variable_field("{{recipientName}}"), Some("recipientName"));
        assert_eq!(variable_field("{{ grade }}"), Some("grade"));
    }

    #[test]
    fn test_variable_field_malformed() {
        assert_eq!(variable_field("recipientName"), None);
        assert_eq!(variable_field("{{recipientName}"), None);
        assert_eq!(variable_field("{{}}"), None);
    }

    #[test]
    fn test_positional_fields_not_substitutable() {
        assert!(!is_substitutable("qrCode"));
        assert!(!is_substitutable("signature"));
        assert!(is_substitutable("recipientName"));
        assert!(is_substitutable("grade"));
    }
}
