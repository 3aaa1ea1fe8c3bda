use crate::config::Config;
use dashmap::DashMap;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Certificate;
use sigil_template::{
    BoundingBox, FontWeight, Orientation, Template, TemplateCategory, TemplateStatus, TextAlign,
    TextStyle, deserialize, serialize,
};
use std::collections::BTreeMap;

pub struct AppState {
    pub templates: TemplateStore,
    pub certificates: CertificateStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let templates = TemplateStore::new();
        // Seed a starter template so issuance works on a fresh instance.
        templates.insert(&starter_template())?;
        tracing::info!("Starter template ready");

        Ok(Self {
            templates,
            certificates: CertificateStore::new(),
            config,
        })
    }
}

/// Template storage
///
/// Templates persist as canonical serialized documents and round-trip
/// through the codec on every read and write. In-memory only; a durable
/// backend swaps in behind the same surface.
pub struct TemplateStore {
    docs: DashMap<String, String>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
        }
    }

    pub fn insert(&self, template: &Template) -> AppResult<()> {
        let doc = serialize(template)
            .map_err(|e| AppError::with_message(ErrorCode::InternalError, e.to_string()))?;
        self.docs.insert(template.id.clone(), doc);
        Ok(())
    }

    pub fn get(&self, id: &str) -> AppResult<Option<Template>> {
        let Some(doc) = self.docs.get(id) else {
            return Ok(None);
        };
        let template = deserialize(doc.value()).map_err(|e| {
            tracing::error!(template_id = %id, error = %e, "Stored template failed to decode");
            AppError::new(ErrorCode::TemplateDocumentCorrupt)
        })?;
        Ok(Some(template))
    }

    pub fn list(&self) -> AppResult<Vec<Template>> {
        let mut templates = Vec::with_capacity(self.docs.len());
        for entry in self.docs.iter() {
            let template = deserialize(entry.value()).map_err(|e| {
                tracing::error!(template_id = %entry.key(), error = %e, "Stored template failed to decode");
                AppError::new(ErrorCode::TemplateDocumentCorrupt)
            })?;
            templates.push(template);
        }
        templates.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(templates)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

/// Issued certificate storage, keyed by verification id.
pub struct CertificateStore {
    records: DashMap<String, Certificate>,
}

impl CertificateStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn insert(&self, certificate: Certificate) {
        self.records.insert(certificate.id.clone(), certificate);
    }

    pub fn get(&self, id: &str) -> Option<Certificate> {
        self.records.get(id).map(|r| r.value().clone())
    }

    pub fn list(&self) -> Vec<Certificate> {
        let mut certs: Vec<Certificate> = self.records.iter().map(|r| r.value().clone()).collect();
        certs.sort_by(|a, b| a.issued_at.cmp(&b.issued_at));
        certs
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn bx(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
    BoundingBox {
        x,
        y,
        width,
        height,
    }
}

fn text(font_family: &str, font_size: f64, font_weight: FontWeight) -> TextStyle {
    TextStyle {
        font_family: font_family.to_string(),
        font_size,
        font_weight,
        color: "#1f2937".to_string(),
        text_align: TextAlign::Center,
        text_transform: None,
    }
}

/// Built-in landscape template seeded on startup.
fn starter_template() -> Template {
    let mut layout = BTreeMap::new();
    layout.insert("institution".to_string(), bx(10.0, 8.0, 80.0, 6.0));
    layout.insert("recipientName".to_string(), bx(10.0, 34.0, 80.0, 12.0));
    layout.insert("courseName".to_string(), bx(10.0, 52.0, 80.0, 8.0));
    layout.insert("issueDate".to_string(), bx(10.0, 78.0, 25.0, 5.0));
    layout.insert("signature".to_string(), bx(62.0, 72.0, 26.0, 14.0));
    layout.insert("certificateId".to_string(), bx(62.0, 92.0, 33.0, 4.0));
    layout.insert("qrCode".to_string(), bx(5.0, 80.0, 12.0, 16.0));

    let mut styling = BTreeMap::new();
    styling.insert("institution".to_string(), text("Georgia", 20.0, FontWeight::Bold));
    styling.insert("recipientName".to_string(), text("Georgia", 34.0, FontWeight::Bold));
    styling.insert("courseName".to_string(), text("Georgia", 22.0, FontWeight::Normal));
    styling.insert("issueDate".to_string(), text("Helvetica", 13.0, FontWeight::Normal));
    styling.insert("certificateId".to_string(), text("Courier", 10.0, FontWeight::Light));
    styling.insert("signatureName".to_string(), text("Georgia", 14.0, FontWeight::Normal));
    styling.insert("signatureTitle".to_string(), text("Helvetica", 11.0, FontWeight::Light));

    let variables = vec![
        "{{recipientName}}".to_string(),
        "{{courseName}}".to_string(),
        "{{issueDate}}".to_string(),
        "{{certificateId}}".to_string(),
        "{{institution}}".to_string(),
    ];

    let mut template = Template::new(
        "Classic Landscape",
        TemplateCategory::Professional,
        Orientation::Landscape,
        layout,
        styling,
        variables,
    );
    template.description = Some("Built-in starter template".to_string());
    template.status = TemplateStatus::Active;
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CertificateCreate;
    use sigil_template::validate_template;

    #[test]
    fn test_starter_template_is_valid() {
        let template = starter_template();
        let report = validate_template(&template).expect("starter template must validate");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_template_store_round_trips_through_codec() {
        let store = TemplateStore::new();
        let template = starter_template();
        store.insert(&template).expect("insert failed");

        let loaded = store
            .get(&template.id)
            .expect("get failed")
            .expect("template missing");
        assert_eq!(loaded, template);
    }

    #[test]
    fn test_template_store_missing_id() {
        let store = TemplateStore::new();
        assert!(store.get("nope").expect("get failed").is_none());
    }

    #[test]
    fn test_certificate_store() {
        let store = CertificateStore::new();
        let cert = Certificate::issue(CertificateCreate {
            template_id: "tpl".to_string(),
            recipient_name: "Grace Hopper".to_string(),
            course_name: "Compilers".to_string(),
            institution: "Sigil Academy".to_string(),
            grade: None,
        });
        let id = cert.id.clone();
        store.insert(cert);

        assert_eq!(store.len(), 1);
        let loaded = store.get(&id).expect("certificate missing");
        assert_eq!(loaded.recipient_name, "Grace Hopper");
        assert!(store.get("unknown").is_none());
    }
}
