use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub raw_text: String,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    let limit = state.config.max_input_bytes;
    if req.raw_text.len() > limit {
        return Err(AppError::Validation(format!(
            "raw_text is {} bytes; the limit is {limit}",
            req.raw_text.len()
        )));
    }

    let parser = state.parser.clone();
    let profile = tokio::task::spawn_blocking(move || parser.parse(&req.raw_text))
        .await
        .map_err(|e| anyhow::anyhow!("parser task failed: {e}"))?;

    let id = Uuid::new_v4();
    info!("Parsed résumé {id}");
    Ok(Json(ParsedResume { id, profile }))
}
