//! Template CRUD handlers
//!
//! Create and update validate through the template core and return every
//! violation at once; layout-only updates go through the atomic patch
//! applier. Templates are archived on delete, never erased.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use sigil_template::{
    BoundingBox, LayoutPatch, Orientation, Template, TemplateCategory, TemplateStatus, TextStyle,
    ValidationError, apply_layout_patch, validate_template,
};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::state::AppState;

use super::ApiResult;

/// Create template payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: TemplateCategory,
    #[serde(default)]
    pub orientation: Orientation,
    pub layout: BTreeMap<String, BoundingBox>,
    pub styling: BTreeMap<String, TextStyle>,
    #[serde(default)]
    pub variables: Vec<String>,
}

/// Update template payload (whole-template patch)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<TemplateCategory>,
    pub orientation: Option<Orientation>,
    pub status: Option<TemplateStatus>,
    pub layout: Option<BTreeMap<String, BoundingBox>>,
    pub styling: Option<BTreeMap<String, TextStyle>>,
    pub variables: Option<Vec<String>>,
}

pub async fn list_templates(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Template>> {
    Ok(Json(state.templates.list()?))
}

pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Template> {
    let template = state
        .templates
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::TemplateNotFound))?;
    Ok(Json(template))
}

pub async fn create_template(
    State(state): State<Arc<AppState>>,
    Json(data): Json<TemplateCreate>,
) -> ApiResult<Template> {
    let mut template = Template::new(
        data.name,
        data.category,
        data.orientation,
        data.layout,
        data.styling,
        data.variables,
    );
    template.description = data.description;

    let report = validate_template(&template)
        .map_err(|errors| invalid(ErrorCode::TemplateInvalid, errors))?;
    if !report.warnings.is_empty() {
        tracing::debug!(
            template_id = %template.id,
            warnings = ?report.warnings,
            "Template created with unreferenced substitutable fields"
        );
    }

    state.templates.insert(&template)?;
    tracing::info!(template_id = %template.id, name = %template.name, "Template created");
    Ok(Json(template))
}

pub async fn update_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(data): Json<TemplateUpdate>,
) -> ApiResult<Template> {
    let mut template = state
        .templates
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::TemplateNotFound))?;

    // Archived templates only accept a status change back out of archive.
    let unarchiving = matches!(data.status, Some(s) if s != TemplateStatus::Archived);
    if template.status == TemplateStatus::Archived && !unarchiving {
        return Err(AppError::new(ErrorCode::TemplateArchived));
    }

    if let Some(name) = data.name {
        template.name = name;
    }
    if let Some(description) = data.description {
        template.description = Some(description);
    }
    if let Some(category) = data.category {
        template.category = category;
    }
    if let Some(orientation) = data.orientation {
        template.orientation = orientation;
    }
    if let Some(status) = data.status {
        template.status = status;
    }
    if let Some(layout) = data.layout {
        template.layout = layout;
    }
    if let Some(styling) = data.styling {
        template.styling = styling;
    }
    if let Some(variables) = data.variables {
        template.variables = variables;
    }

    validate_template(&template).map_err(|errors| invalid(ErrorCode::TemplateInvalid, errors))?;

    template.touch();
    state.templates.insert(&template)?;
    Ok(Json(template))
}

pub async fn patch_template_layout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<LayoutPatch>,
) -> ApiResult<Template> {
    let template = state
        .templates
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::TemplateNotFound))?;

    if template.status == TemplateStatus::Archived {
        return Err(AppError::new(ErrorCode::TemplateArchived));
    }
    if patch.is_empty() {
        return Err(AppError::invalid_request("Layout patch contains no fields"));
    }

    let patched = apply_layout_patch(&template, &patch)
        .map_err(|errors| invalid(ErrorCode::LayoutPatchRejected, errors))?;

    state.templates.insert(&patched)?;
    Ok(Json(patched))
}

pub async fn archive_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Template>, AppError> {
    let mut template = state
        .templates
        .get(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::TemplateNotFound))?;

    template.status = TemplateStatus::Archived;
    template.touch();
    state.templates.insert(&template)?;
    tracing::info!(template_id = %id, "Template archived");
    Ok(ApiResponse::success(template))
}

/// Collect validator violations into a response-level error.
fn invalid(code: ErrorCode, errors: Vec<ValidationError>) -> AppError {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    AppError::new(code)
        .with_detail(
            "violations",
            serde_json::to_value(&errors).unwrap_or_default(),
        )
        .with_detail("messages", serde_json::Value::from(messages))
}
