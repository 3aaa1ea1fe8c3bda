//! Certificate template model
//!
//! A template positions named text fields on a canvas with percentage-based
//! bounding boxes and per-field text styling, plus an ordered list of
//! `{{fieldName}}` substitution variables consumed by the renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Template visual category
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    #[default]
    Modern,
    Professional,
    Artistic,
    Academic,
}

/// Canvas orientation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

/// Template lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    Active,
    #[default]
    Draft,
    Archived,
}

/// Font weight for a text field
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Light,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text case transform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Field bounding box, in percent of the canvas dimensions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Whether the box lies entirely within the canvas.
    ///
    /// All four values must be in [0, 100] and the box must not extend past
    /// the right or bottom edge. Non-finite values fail every comparison and
    /// are therefore rejected.
    pub fn in_bounds(&self) -> bool {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        in_range(self.x)
            && in_range(self.y)
            && in_range(self.width)
            && in_range(self.height)
            && self.x + self.width <= 100.0
            && self.y + self.height <= 100.0
    }
}

/// Text styling for a single field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: String,
    pub text_align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
}

/// Certificate template entity
///
/// `id` is assigned on creation and immutable thereafter. `layout` and
/// `styling` are independent mappings keyed by field name; `variables` keeps
/// its declared order, which drives document order in the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: TemplateCategory,
    pub orientation: Orientation,
    pub status: TemplateStatus,
    pub layout: BTreeMap<String, BoundingBox>,
    pub styling: BTreeMap<String, TextStyle>,
    pub variables: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Create a new draft template with a fresh id and timestamps.
    pub fn new(
        name: impl Into<String>,
        category: TemplateCategory,
        orientation: Orientation,
        layout: BTreeMap<String, BoundingBox>,
        styling: BTreeMap<String, TextStyle>,
        variables: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            category,
            orientation,
            status: TemplateStatus::default(),
            layout,
            styling,
            variables,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at` after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_in_bounds() {
        let bx = BoundingBox {
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 5.0,
        };
        assert!(bx.in_bounds());
    }

    #[test]
    fn test_box_extends_past_edge() {
        let bx = BoundingBox {
            x: 90.0,
            y: 0.0,
            width: 20.0,
            height: 5.0,
        };
        assert!(!bx.in_bounds());
    }

    #[test]
    fn test_box_rejects_non_finite() {
        let bx = BoundingBox {
            x: f64::NAN,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(!bx.in_bounds());

        let bx = BoundingBox {
            x: 0.0,
            y: 0.0,
            width: f64::INFINITY,
            height: 10.0,
        };
        assert!(!bx.in_bounds());
    }

    #[test]
    fn test_box_negative_coordinate() {
        let bx = BoundingBox {
            x: -1.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        assert!(!bx.in_bounds());
    }

    #[test]
    fn test_enum_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TemplateCategory::Academic).unwrap(),
            "\"academic\""
        );
        assert_eq!(
            serde_json::to_string(&FontWeight::Bold).unwrap(),
            "\"bold\""
        );
        assert_eq!(
            serde_json::from_str::<Orientation>("\"portrait\"").unwrap(),
            Orientation::Portrait
        );
    }
}
