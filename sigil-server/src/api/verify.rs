//! Public verification handlers
//!
//! Anyone holding a certificate id (scanned from the QR code or typed in)
//! can look up its verdict. Lookups are real checks against the issued
//! record store, including an integrity check of the stored fingerprint.

use axum::Json;
use axum::extract::{Path, State};
use http::header;
use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use shared::error::{AppError, ErrorCode};
use shared::models::{Certificate, VerifyResponse};
use std::sync::Arc;

use crate::state::AppState;

use super::ApiResult;

pub async fn verify_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<VerifyResponse> {
    let response = verdict_for(state.certificates.get(&id))?;
    tracing::debug!(certificate_id = %id, verdict = ?response.verdict, "Verification lookup");
    Ok(Json(response))
}

pub async fn verify_qr(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<([(header::HeaderName, &'static str); 1], Vec<u8>), AppError> {
    // Only issued certificates get a QR code.
    if state.certificates.get(&id).is_none() {
        return Err(AppError::new(ErrorCode::CertificateNotFound));
    }

    let url = format!("{}/verify/{id}", state.config.public_base_url);
    let png = render_qr_png(&url)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// Map a store lookup to a public verdict.
///
/// A record whose stored fingerprint no longer matches its own content is
/// reported as a system error, not a verdict; it means the store itself is
/// damaged.
fn verdict_for(certificate: Option<Certificate>) -> Result<VerifyResponse, AppError> {
    let Some(certificate) = certificate else {
        return Ok(VerifyResponse::not_found());
    };

    if !certificate.verify_fingerprint() {
        tracing::error!(
            certificate_id = %certificate.id,
            "Certificate record failed integrity check"
        );
        return Err(AppError::internal("certificate record failed integrity check"));
    }

    if certificate.revoked {
        Ok(VerifyResponse::revoked(certificate))
    } else {
        Ok(VerifyResponse::valid(certificate))
    }
}

const QR_CELL_SIZE: u32 = 8;
const QR_QUIET_ZONE: u32 = 4; // in cells

/// Render a QR code for the given data as a PNG image.
fn render_qr_png(data: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::with_error_correction_level(data, EcLevel::M).map_err(|e| {
        AppError::with_message(ErrorCode::QrRenderFailed, format!("QR encoding failed: {e}"))
    })?;

    let size = code.width() as u32;
    let px = (size + 2 * QR_QUIET_ZONE) * QR_CELL_SIZE;
    let mut img = GrayImage::from_pixel(px, px, Luma([255u8]));

    for qy in 0..size {
        for qx in 0..size {
            if code[(qx as usize, qy as usize)] != Color::Dark {
                continue;
            }
            let base_x = (qx + QR_QUIET_ZONE) * QR_CELL_SIZE;
            let base_y = (qy + QR_QUIET_ZONE) * QR_CELL_SIZE;
            for cy in 0..QR_CELL_SIZE {
                for cx in 0..QR_CELL_SIZE {
                    img.put_pixel(base_x + cx, base_y + cy, Luma([0u8]));
                }
            }
        }
    }

    let mut png = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png),
        image::ImageFormat::Png,
    )
    .map_err(|e| {
        AppError::with_message(ErrorCode::QrRenderFailed, format!("PNG encoding failed: {e}"))
    })?;
    Ok(png)
}
