use sigil_template::{
    BoundingBox, FontWeight, LayoutPatch, Orientation, Template, TemplateCategory, TextAlign,
    TextStyle, ValidationError, apply_layout_patch,
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

fn sample_template() -> Template {
    let mut layout = BTreeMap::new();
    for field in [
        "recipientName",
        "courseName",
        "issueDate",
        "certificateId",
        "institution",
        "signature",
        "qrCode",
    ] {
        layout.insert(field.to_string(), bx(10.0, 10.0, 20.0, 5.0));
    }

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
        styling.insert(
            key.to_string(),
            TextStyle {
                font_family: "Garamond".to_string(),
                font_size: 15.0,
                font_weight: FontWeight::Normal,
                color: "#111827".to_string(),
                text_align: TextAlign::Center,
                text_transform: None,
            },
        );
    }

    Template::new(
        "Patchable",
        TemplateCategory::Professional,
        Orientation::Landscape,
        layout,
        styling,
        vec!["{{recipientName}}".to_string(), "{{courseName}}".to_string()],
    )
}

fn patch_of(field: &str, bx: BoundingBox) -> LayoutPatch {
    let mut map = BTreeMap::new();
    map.insert(field.to_string(), bx);
    LayoutPatch(map)
}

#[test]
fn test_patch_replaces_box() {
    let template = sample_template();
    let patch = patch_of("qrCode", bx(80.0, 80.0, 15.0, 15.0));

    let patched = apply_layout_patch(&template, &patch).expect("patch should apply");
    assert_eq!(patched.layout["qrCode"], bx(80.0, 80.0, 15.0, 15.0));
}

#[test]
fn test_patch_isolation() {
    let template = sample_template();
    let patch = patch_of("qrCode", bx(80.0, 80.0, 15.0, 15.0));

    let patched = apply_layout_patch(&template, &patch).expect("patch should apply");
    for field in [
        "recipientName",
        "courseName",
        "issueDate",
        "certificateId",
        "institution",
        "signature",
    ] {
        assert_eq!(patched.layout[field], template.layout[field], "{field}");
    }
    assert_eq!(patched.styling, template.styling);
    assert_eq!(patched.variables, template.variables);
    assert_eq!(patched.id, template.id);
    assert_eq!(patched.created_at, template.created_at);
}

#[test]
fn test_patch_atomicity_on_out_of_bounds() {
    let template = sample_template();
    let before = template.clone();
    let patch = patch_of("signature", bx(200.0, 0.0, 1.0, 1.0));

    let errors = apply_layout_patch(&template, &patch).expect_err("patch should be rejected");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ValidationError::OutOfBounds { field, .. } if field == "signature.x"))
    );
    // Rejected patch leaves the base template untouched.
    assert_eq!(template, before);
    assert_eq!(template.layout["signature"], bx(10.0, 10.0, 20.0, 5.0));
}

#[test]
fn test_patch_collects_every_violation() {
    let template = sample_template();
    let mut map = BTreeMap::new();
    map.insert("signature".to_string(), bx(200.0, 0.0, 1.0, 1.0));
    map.insert("qrCode".to_string(), bx(0.0, 95.0, 10.0, 10.0));
    let patch = LayoutPatch(map);

    let errors = apply_layout_patch(&template, &patch).expect_err("patch should be rejected");
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_patch_may_add_optional_field() {
    let template = sample_template();
    let patch = patch_of("grade", bx(40.0, 60.0, 20.0, 5.0));

    let patched = apply_layout_patch(&template, &patch).expect("patch should apply");
    assert_eq!(patched.layout["grade"], bx(40.0, 60.0, 20.0, 5.0));
    assert_eq!(patched.layout.len(), template.layout.len() + 1);
}

#[test]
fn test_patch_refreshes_updated_at() {
    let template = sample_template();
    let patch = patch_of("qrCode", bx(80.0, 80.0, 15.0, 15.0));

    let patched = apply_layout_patch(&template, &patch).expect("patch should apply");
    assert!(patched.updated_at >= template.updated_at);
    assert_eq!(patched.created_at, template.created_at);
}
