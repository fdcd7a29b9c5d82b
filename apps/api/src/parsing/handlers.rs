//! Axum route handlers for resume upload, structuring and retrieval.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry, SkillSet};
use crate::parsing::analysis::{analyze_record, RecordAnalysis};
use crate::parsing::extractor::{declared_type, ensure_sufficient_text};
use crate::parsing::structure;
use crate::state::AppState;
use crate::store::StoredResume;

const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadMetadata {
    pub filename: String,
    pub file_type: String,
    pub extracted_text_length: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub data: StoredResume,
    pub metadata: UploadMetadata,
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// A file pulled out of a multipart body.
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Reads the `file` field of a multipart upload; other fields are skipped.
pub async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("unknown").to_string();
        let content_type = declared_type(field.content_type(), Some(&file_name));
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

async fn current_resume(state: &AppState) -> Result<std::sync::Arc<StoredResume>, AppError> {
    state.store.get().await.ok_or_else(AppError::no_resume)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/upload
///
/// Extracts text from a PDF, DOCX or plain-text upload, structures it and
/// replaces the stored resume.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload = read_file_field(&mut multipart).await?;
    let text = state
        .extractor
        .extract(upload.bytes, &upload.content_type)
        .await?;

    let stored = state.store.save(structure(&text)).await;
    info!(
        "Stored resume from '{}' ({}, {} chars)",
        upload.file_name,
        upload.content_type,
        text.len()
    );

    Ok(Json(UploadResponse {
        success: true,
        message: "Resume uploaded and parsed successfully".to_string(),
        data: stored.as_ref().clone(),
        metadata: UploadMetadata {
            filename: upload.file_name,
            file_type: upload.content_type,
            extracted_text_length: text.len(),
        },
    }))
}

/// POST /api/v1/resume/parse
///
/// Structures already-extracted text and replaces the stored resume. Text
/// under the extraction minimum is rejected, as for uploads.
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<DataResponse<StoredResume>>, AppError> {
    let text = ensure_sufficient_text(request.text)?;
    let stored = state.store.save(structure(&text)).await;
    Ok(DataResponse::ok(stored.as_ref().clone()))
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<StoredResume>>, AppError> {
    let stored = current_resume(&state).await?;
    Ok(DataResponse::ok(stored.as_ref().clone()))
}

/// GET /api/v1/resume/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<SkillSet>>, AppError> {
    let stored = current_resume(&state).await?;
    Ok(DataResponse::ok(stored.record.skills.clone()))
}

/// GET /api/v1/resume/experience
pub async fn handle_get_experience(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ExperienceEntry>>>, AppError> {
    let stored = current_resume(&state).await?;
    Ok(DataResponse::ok(stored.record.experience.clone()))
}

/// GET /api/v1/resume/education
pub async fn handle_get_education(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<EducationEntry>>>, AppError> {
    let stored = current_resume(&state).await?;
    Ok(DataResponse::ok(stored.record.education.clone()))
}

/// GET /api/v1/resume/contact
pub async fn handle_get_contact(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<ContactInfo>>, AppError> {
    let stored = current_resume(&state).await?;
    Ok(DataResponse::ok(stored.record.contact.clone()))
}

/// GET /api/v1/resume/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<RecordAnalysis>>, AppError> {
    let stored = current_resume(&state).await?;
    Ok(DataResponse::ok(analyze_record(&stored.record)))
}

/// DELETE /api/v1/resume
///
/// Succeeds whether or not a resume was stored.
pub async fn handle_delete_resume(State(state): State<AppState>) -> Json<MessageResponse> {
    if state.store.clear().await {
        info!("Cleared stored resume");
    }
    Json(MessageResponse {
        success: true,
        message: "Resume data cleared successfully".to_string(),
    })
}
