use sigil_template::{
    BoundingBox, FontWeight, Orientation, ParseError, Template, TemplateCategory, TemplateStatus,
    TextAlign, TextStyle, TextTransform, deserialize, serialize,
};
use std::collections::BTreeMap;

fn bx(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
    BoundingBox {
        x,
        y,
        width,
        height,
    }
}

fn style(font_size: f64) -> TextStyle {
    TextStyle {
        font_family: "Georgia".to_string(),
        font_size,
        font_weight: FontWeight::Normal,
        color: "#1f2937".to_string(),
        text_align: TextAlign::Center,
        text_transform: None,
    }
}

fn sample_template() -> Template {
    let mut layout = BTreeMap::new();
    layout.insert("recipientName".to_string(), bx(10.0, 35.0, 80.0, 10.0));
    layout.insert("courseName".to_string(), bx(10.0, 50.0, 80.0, 8.0));
    layout.insert("issueDate".to_string(), bx(10.0, 75.0, 25.0, 5.0));
    layout.insert("certificateId".to_string(), bx(65.0, 90.0, 30.0, 4.0));
    layout.insert("institution".to_string(), bx(10.0, 12.0, 80.0, 6.0));
    layout.insert("signature".to_string(), bx(60.0, 72.0, 25.0, 12.0));
    layout.insert("qrCode".to_string(), bx(5.0, 82.0, 12.0, 14.0));

    let mut styling = BTreeMap::new();
    for key in [
        "recipientName",
        "courseName",
        "issueDate",
        "certificateId",
        "institution",
        "signatureName",
        "signatureTitle",
    ] {
        styling.insert(key.to_string(), style(16.0));
    }

    let variables = vec![
        "{{recipientName}}".to_string(),
        "{{courseName}}".to_string(),
        "{{issueDate}}".to_string(),
        "{{certificateId}}".to_string(),
        "{{institution}}".to_string(),
    ];

    Template::new(
        "Classic Award",
        TemplateCategory::Academic,
        Orientation::Landscape,
        layout,
        styling,
        variables,
    )
}

#[test]
fn test_round_trip_identity() {
    let template = sample_template();
    let doc = serialize(&template).expect("serialize failed");
    let restored = deserialize(&doc).expect("deserialize failed");
    assert_eq!(restored, template);
}

#[test]
fn test_round_trip_with_optional_fields() {
    let mut template = sample_template();
    template.description = Some("Landscape academic certificate".to_string());
    template.status = TemplateStatus::Active;
    template.layout.insert("grade".to_string(), bx(40.0, 62.0, 20.0, 5.0));
    template.layout.insert("logo".to_string(), bx(5.0, 5.0, 15.0, 10.0));
    let mut grade_style = style(14.0);
    grade_style.text_transform = Some(TextTransform::Uppercase);
    template.styling.insert("grade".to_string(), grade_style);
    template.variables.push("{{grade}}".to_string());

    let doc = serialize(&template).expect("serialize failed");
    let restored = deserialize(&doc).expect("deserialize failed");
    assert_eq!(restored, template);
}

#[test]
fn test_variables_order_preserved() {
    let mut template = sample_template();
    // Deliberately not alphabetical and not layout order.
    template.variables = vec![
        "{{issueDate}}".to_string(),
        "{{recipientName}}".to_string(),
        "{{institution}}".to_string(),
        "{{courseName}}".to_string(),
        "{{certificateId}}".to_string(),
    ];

    let doc = serialize(&template).expect("serialize failed");
    let restored = deserialize(&doc).expect("deserialize failed");
    assert_eq!(restored.variables, template.variables);
}

#[test]
fn test_absent_optionals_are_omitted() {
    let template = sample_template();
    assert!(template.description.is_none());

    let doc = serialize(&template).expect("serialize failed");
    let value: serde_json::Value = serde_json::from_str(&doc).expect("invalid JSON emitted");
    let obj = value.as_object().expect("document is not an object");
    assert!(!obj.contains_key("description"));

    let recipient = &obj["styling"]["recipientName"];
    assert!(recipient.get("textTransform").is_none());
}

#[test]
fn test_missing_required_key() {
    let template = sample_template();
    let doc = serialize(&template).expect("serialize failed");
    let mut value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    value.as_object_mut().unwrap().remove("status");

    let err = deserialize(&value.to_string()).expect_err("decode should fail");
    assert_eq!(err, ParseError::MissingRequiredKey("status".to_string()));
}

#[test]
fn test_type_mismatch_reports_key() {
    let template = sample_template();
    let doc = serialize(&template).expect("serialize failed");
    let mut value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    value["styling"]["recipientName"]["fontSize"] = serde_json::Value::String("16".to_string());

    let err = deserialize(&value.to_string()).expect_err("decode should fail");
    match err {
        ParseError::TypeMismatch { key, expected, actual } => {
            assert_eq!(key, "styling.recipientName.fontSize");
            assert_eq!(expected, "number");
            assert_eq!(actual, "string");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_unknown_enum_value_rejected() {
    let template = sample_template();
    let doc = serialize(&template).expect("serialize failed");
    let mut value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    value["category"] = serde_json::Value::String("vintage".to_string());

    let err = deserialize(&value.to_string()).expect_err("decode should fail");
    match err {
        ParseError::TypeMismatch { key, actual, .. } => {
            assert_eq!(key, "category");
            assert_eq!(actual, "\"vintage\"");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_rejected() {
    let err = deserialize("{not json").expect_err("decode should fail");
    assert!(matches!(err, ParseError::InvalidDocument(_)));
}

#[test]
fn test_missing_box_coordinate() {
    let template = sample_template();
    let doc = serialize(&template).expect("serialize failed");
    let mut value: serde_json::Value = serde_json::from_str(&doc).unwrap();
    value["layout"]["qrCode"]
        .as_object_mut()
        .unwrap()
        .remove("height");

    let err = deserialize(&value.to_string()).expect_err("decode should fail");
    assert_eq!(
        err,
        ParseError::MissingRequiredKey("layout.qrCode.height".to_string())
    );
}
