//! Kanji/word reference lookups.

use crate::error::AppError;
use crate::service::{KanjiService, Lookup};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_words(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(KanjiService::list_words(&state.pool).await?))
}

pub async fn read_word(
    State(state): State<AppState>,
    Path(written): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let word = Lookup::resolve_word(&state.pool, &written).await?;
    Ok(Json(KanjiService::word_detail(&state.pool, &word).await?))
}

pub async fn read_kanji(
    State(state): State<AppState>,
    Path(glyph): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kanji = Lookup::resolve_kanji(&state.pool, &glyph).await?;
    Ok(Json(kanji.detail()))
}
