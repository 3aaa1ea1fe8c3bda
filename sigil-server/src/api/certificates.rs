//! Certificate issuance handlers (issuer-facing)

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{AppError, ErrorCode};
use shared::models::{Certificate, CertificateCreate, CertificateRevoke};
use sigil_template::TemplateStatus;
use std::sync::Arc;

use crate::state::AppState;

use super::ApiResult;

pub async fn list_certificates(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Certificate>> {
    Ok(Json(state.certificates.list()))
}

pub async fn issue_certificate(
    State(state): State<Arc<AppState>>,
    Json(data): Json<CertificateCreate>,
) -> ApiResult<Certificate> {
    let template = state
        .templates
        .get(&data.template_id)?
        .ok_or_else(|| AppError::new(ErrorCode::TemplateNotFound))?;

    if template.status != TemplateStatus::Active {
        return Err(AppError::invalid_request(format!(
            "template '{}' is not active",
            template.id
        )));
    }

    let certificate = Certificate::issue(data);
    tracing::info!(
        certificate_id = %certificate.id,
        template_id = %certificate.template_id,
        recipient = %certificate.recipient_name,
        "Certificate issued"
    );
    state.certificates.insert(certificate.clone());
    Ok(Json(certificate))
}

pub async fn revoke_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(data): Json<CertificateRevoke>,
) -> ApiResult<Certificate> {
    let mut certificate = state
        .certificates
        .get(&id)
        .ok_or_else(|| AppError::new(ErrorCode::CertificateNotFound))?;

    if certificate.revoked {
        return Err(AppError::new(ErrorCode::CertificateAlreadyRevoked));
    }

    certificate.revoke(data.reason);
    tracing::info!(certificate_id = %id, "Certificate revoked");
    state.certificates.insert(certificate.clone());
    Ok(Json(certificate))
}
