//! Template structural validation
//!
//! Pure functions over the template payload; no side effects. Each validator
//! returns one error per violation so callers see every problem in one pass.

use crate::error::ValidationError;
use crate::fields::{
    REQUIRED_LAYOUT_FIELDS, REQUIRED_STYLING_KEYS, is_substitutable, variable_field,
};
use crate::model::{BoundingBox, Template, TextStyle};
use std::collections::BTreeMap;

/// Warning-level diagnostic from variable validation.
///
/// Warnings never fail validation; strict callers may choose to treat them as
/// errors themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableWarning {
    /// A required substitutable layout field is not referenced by any variable.
    UnreferencedField(String),
}

/// Outcome of a successful variable validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableReport {
    pub warnings: Vec<VariableWarning>,
}

/// Check required-field presence and the canvas-bounds invariant.
///
/// Every coordinate and dimension must lie in [0, 100], and a box must not
/// extend past the right or bottom edge (`x + width <= 100`,
/// `y + height <= 100`).
pub fn validate_layout(
    layout: &BTreeMap<String, BoundingBox>,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for field in REQUIRED_LAYOUT_FIELDS {
        if !layout.contains_key(field) {
            errors.push(ValidationError::missing(field));
        }
    }

    for (field, bx) in layout {
        push_box_errors(&mut errors, field, bx);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn push_box_errors(errors: &mut Vec<ValidationError>, field: &str, bx: &BoundingBox) {
    let in_range = |v: f64| (0.0..=100.0).contains(&v);

    for (coord, value) in [
        ("x", bx.x),
        ("y", bx.y),
        ("width", bx.width),
        ("height", bx.height),
    ] {
        if !in_range(value) {
            errors.push(ValidationError::out_of_bounds(
                format!("{field}.{coord}"),
                value,
            ));
        }
    }

    // Extent checks only make sense once the individual values are sane.
    if in_range(bx.x) && in_range(bx.width) && bx.x + bx.width > 100.0 {
        errors.push(ValidationError::out_of_bounds(field, bx.x + bx.width));
    }
    if in_range(bx.y) && in_range(bx.height) && bx.y + bx.height > 100.0 {
        errors.push(ValidationError::out_of_bounds(field, bx.y + bx.height));
    }
}

/// Check required styling-key presence and per-style value domains.
///
/// Enumerated style values (font weight, alignment, transform) are enforced
/// by the type system at decode time; what remains checkable here is
/// `font_size` (positive and finite) and `color` (hex or named).
pub fn validate_styling(styling: &BTreeMap<String, TextStyle>) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for key in REQUIRED_STYLING_KEYS {
        if !styling.contains_key(key) {
            errors.push(ValidationError::missing(key));
        }
    }

    for (key, style) in styling {
        if !(style.font_size.is_finite() && style.font_size > 0.0) {
            errors.push(ValidationError::out_of_bounds(
                format!("{key}.fontSize"),
                style.font_size,
            ));
        }
        if !is_valid_color(&style.color) {
            errors.push(ValidationError::InvalidEnum {
                field: format!("{key}.color"),
                value: style.color.clone(),
                allowed: "#rgb/#rrggbb hex or alphabetic color name".to_string(),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_valid_color(color: &str) -> bool {
    if let Some(hex) = color.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic())
}

/// Check that every `{{fieldName}}` token names a substitutable layout field.
///
/// Positional-only fields (`signature`, `qrCode`) are not substitution
/// targets. A substitutable required field absent from `variables` is allowed
/// (partial use) but reported as a warning.
pub fn validate_variables(
    variables: &[String],
    layout: &BTreeMap<String, BoundingBox>,
) -> Result<VariableReport, Vec<ValidationError>> {
    let mut errors = Vec::new();

    for token in variables {
        let known = variable_field(token)
            .map(|field| layout.contains_key(field) && is_substitutable(field))
            .unwrap_or(false);
        if !known {
            errors.push(ValidationError::orphan(token.clone()));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut warnings = Vec::new();
    for field in REQUIRED_LAYOUT_FIELDS {
        if !is_substitutable(field) {
            continue;
        }
        let referenced = variables
            .iter()
            .any(|t| variable_field(t) == Some(field));
        if !referenced {
            warnings.push(VariableWarning::UnreferencedField(field.to_string()));
        }
    }

    Ok(VariableReport { warnings })
}

/// Run all three validators over a template and merge the error lists.
pub fn validate_template(template: &Template) -> Result<VariableReport, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_layout(&template.layout) {
        errors.extend(e);
    }
    if let Err(e) = validate_styling(&template.styling) {
        errors.extend(e);
    }
    let report = match validate_variables(&template.variables, &template.layout) {
        Ok(report) => report,
        Err(e) => {
            errors.extend(e);
            VariableReport::default()
        }
    };

    if errors.is_empty() { Ok(report) } else { Err(errors) }
}
