//! Layout-only partial updates
//!
//! A patch touches a subset of field names; each patched key fully replaces
//! the corresponding box (box-level replace, not per-coordinate merge).
//! Application is atomic: the merged layout is re-validated and the caller's
//! template is only replaced when validation passes.

use crate::error::ValidationError;
use crate::model::{BoundingBox, Template};
use crate::validate::{validate_layout, validate_variables};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Partial layout update, keyed by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LayoutPatch(pub BTreeMap<String, BoundingBox>);

impl LayoutPatch {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Apply a layout patch onto a template, returning the merged result.
///
/// Keys absent from the patch are untouched. On validation failure the input
/// template is left exactly as it was and the full error list is returned.
pub fn apply_layout_patch(
    template: &Template,
    patch: &LayoutPatch,
) -> Result<Template, Vec<ValidationError>> {
    let mut merged = template.clone();
    for (field, bx) in &patch.0 {
        merged.layout.insert(field.clone(), *bx);
    }

    let mut errors = Vec::new();
    if let Err(e) = validate_layout(&merged.layout) {
        errors.extend(e);
    }
    // A patch cannot remove layout keys, but re-checking keeps the
    // variables-subset invariant authoritative in one place.
    if let Err(e) = validate_variables(&merged.variables, &merged.layout) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        tracing::debug!(
            template_id = %template.id,
            violations = errors.len(),
            "layout patch rejected"
        );
        return Err(errors);
    }

    merged.touch();
    Ok(merged)
}
