//! Template document codec
//!
//! Templates persist as one JSON object per template. Serialization is
//! canonical: absent optional fields are omitted (never emitted as null), map
//! keys are in deterministic order, and `variables` keeps its declared order.
//! For every valid template `t`, `deserialize(&serialize(&t)?)? == t`.
//!
//! Decoding runs an explicit shape check over the raw document before the
//! typed decode, so malformed input fails with a precise
//! [`ParseError::MissingRequiredKey`] or [`ParseError::TypeMismatch`] naming
//! the offending key, and never yields a partially built template.

use crate::error::ParseError;
use crate::model::Template;
use serde_json::Value;

const REQUIRED_KEYS: [&str; 10] = [
    "id",
    "name",
    "category",
    "orientation",
    "status",
    "layout",
    "styling",
    "variables",
    "createdAt",
    "updatedAt",
];

const CATEGORY_VALUES: &str = "modern | professional | artistic | academic";
const ORIENTATION_VALUES: &str = "landscape | portrait";
const STATUS_VALUES: &str = "active | draft | archived";
const FONT_WEIGHT_VALUES: &str = "normal | bold | light";
const TEXT_ALIGN_VALUES: &str = "left | center | right";
const TEXT_TRANSFORM_VALUES: &str = "uppercase | lowercase | capitalize";

/// Serialize a template to its canonical document form.
pub fn serialize(template: &Template) -> Result<String, ParseError> {
    serde_json::to_string(template).map_err(|e| ParseError::InvalidDocument(e.to_string()))
}

/// Decode a stored template document. All-or-nothing.
pub fn deserialize(document: &str) -> Result<Template, ParseError> {
    let value: Value =
        serde_json::from_str(document).map_err(|e| ParseError::InvalidDocument(e.to_string()))?;

    check_document(&value)?;

    // The shape check above guarantees the typed decode succeeds for every
    // key it covers; anything residual is reported as a malformed document.
    serde_json::from_value(value).map_err(|e| ParseError::InvalidDocument(e.to_string()))
}

fn check_document(value: &Value) -> Result<(), ParseError> {
    let Some(obj) = value.as_object() else {
        return Err(ParseError::TypeMismatch {
            key: "$".to_string(),
            expected: "object".to_string(),
            actual: type_name(value).to_string(),
        });
    };

    for key in REQUIRED_KEYS {
        if !obj.contains_key(key) {
            return Err(ParseError::MissingRequiredKey(key.to_string()));
        }
    }

    check_string(&obj["id"], "id")?;
    check_string(&obj["name"], "name")?;
    if let Some(desc) = obj.get("description") {
        if !desc.is_null() {
            check_string(desc, "description")?;
        }
    }

    check_enum(&obj["category"], "category", CATEGORY_VALUES, category_ok)?;
    check_enum(
        &obj["orientation"],
        "orientation",
        ORIENTATION_VALUES,
        orientation_ok,
    )?;
    check_enum(&obj["status"], "status", STATUS_VALUES, status_ok)?;

    check_layout(&obj["layout"])?;
    check_styling(&obj["styling"])?;
    check_variables(&obj["variables"])?;

    check_timestamp(&obj["createdAt"], "createdAt")?;
    check_timestamp(&obj["updatedAt"], "updatedAt")?;

    Ok(())
}

fn check_layout(value: &Value) -> Result<(), ParseError> {
    let Some(layout) = value.as_object() else {
        return Err(mismatch("layout", "object", value));
    };

    for (field, bx) in layout {
        let key = format!("layout.{field}");
        let Some(bx) = bx.as_object() else {
            return Err(mismatch(&key, "object", bx));
        };
        for coord in ["x", "y", "width", "height"] {
            match bx.get(coord) {
                None => return Err(ParseError::MissingRequiredKey(format!("{key}.{coord}"))),
                Some(v) if !v.is_number() => {
                    return Err(mismatch(&format!("{key}.{coord}"), "number", v));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

fn check_styling(value: &Value) -> Result<(), ParseError> {
    let Some(styling) = value.as_object() else {
        return Err(mismatch("styling", "object", value));
    };

    for (field, style) in styling {
        let key = format!("styling.{field}");
        let Some(style) = style.as_object() else {
            return Err(mismatch(&key, "object", style));
        };

        for required in ["fontFamily", "fontSize", "fontWeight", "color", "textAlign"] {
            if !style.contains_key(required) {
                return Err(ParseError::MissingRequiredKey(format!("{key}.{required}")));
            }
        }

        check_string(&style["fontFamily"], &format!("{key}.fontFamily"))?;
        if !style["fontSize"].is_number() {
            return Err(mismatch(&format!("{key}.fontSize"), "number", &style["fontSize"]));
        }
        check_string(&style["color"], &format!("{key}.color"))?;
        check_enum(
            &style["fontWeight"],
            &format!("{key}.fontWeight"),
            FONT_WEIGHT_VALUES,
            |s| matches!(s, "normal" | "bold" | "light"),
        )?;
        check_enum(
            &style["textAlign"],
            &format!("{key}.textAlign"),
            TEXT_ALIGN_VALUES,
            |s| matches!(s, "left" | "center" | "right"),
        )?;
        if let Some(transform) = style.get("textTransform") {
            if !transform.is_null() {
                check_enum(
                    transform,
                    &format!("{key}.textTransform"),
                    TEXT_TRANSFORM_VALUES,
                    |s| matches!(s, "uppercase" | "lowercase" | "capitalize"),
                )?;
            }
        }
    }
    Ok(())
}

fn check_variables(value: &Value) -> Result<(), ParseError> {
    let Some(variables) = value.as_array() else {
        return Err(mismatch("variables", "array", value));
    };
    for (idx, token) in variables.iter().enumerate() {
        if !token.is_string() {
            return Err(mismatch(&format!("variables[{idx}]"), "string", token));
        }
    }
    Ok(())
}

fn check_timestamp(value: &Value, key: &str) -> Result<(), ParseError> {
    let Some(s) = value.as_str() else {
        return Err(mismatch(key, "RFC 3339 timestamp", value));
    };
    if chrono::DateTime::parse_from_rfc3339(s).is_err() {
        return Err(ParseError::TypeMismatch {
            key: key.to_string(),
            expected: "RFC 3339 timestamp".to_string(),
            actual: format!("\"{s}\""),
        });
    }
    Ok(())
}

fn check_string(value: &Value, key: &str) -> Result<(), ParseError> {
    if value.is_string() {
        Ok(())
    } else {
        Err(mismatch(key, "string", value))
    }
}

fn check_enum(
    value: &Value,
    key: &str,
    allowed: &str,
    ok: impl Fn(&str) -> bool,
) -> Result<(), ParseError> {
    match value.as_str() {
        Some(s) if ok(s) => Ok(()),
        Some(s) => Err(ParseError::TypeMismatch {
            key: key.to_string(),
            expected: format!("one of {allowed}"),
            actual: format!("\"{s}\""),
        }),
        None => Err(mismatch(key, &format!("one of {allowed}"), value)),
    }
}

fn category_ok(s: &str) -> bool {
    matches!(s, "modern" | "professional" | "artistic" | "academic")
}

fn orientation_ok(s: &str) -> bool {
    matches!(s, "landscape" | "portrait")
}

fn status_ok(s: &str) -> bool {
    matches!(s, "active" | "draft" | "archived")
}

fn mismatch(key: &str, expected: &str, actual: &Value) -> ParseError {
    ParseError::TypeMismatch {
        key: key.to_string(),
        expected: expected.to_string(),
        actual: type_name(actual).to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
