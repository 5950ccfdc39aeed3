//! Handlers for the song catalog service.

use axum::extract::{Path, State};
use axum::Json;
use campusdb_db::models::song::{NewSong, Song, SongCast};
use campusdb_db::repositories::SongRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Count-plus-records payload for the catalog listing.
#[derive(Debug, Serialize)]
pub struct SongCatalog {
    pub total: usize,
    pub songs: Vec<Song>,
}

/// Records-only payload for the filtered listings.
#[derive(Debug, Serialize)]
pub struct SongList {
    pub songs: Vec<Song>,
}

/// GET /songs
///
/// Total count plus all songs. Two sequential store calls; no snapshot is
/// taken between them.
pub async fn catalog(State(state): State<AppState>) -> AppResult<Json<SongCatalog>> {
    let total = SongRepo::count(&state.store)?;
    let songs = SongRepo::list(&state.store)?;
    Ok(Json(SongCatalog { total, songs }))
}

/// GET /songs/director/{director}
pub async fn by_director(
    State(state): State<AppState>,
    Path(director): Path<String>,
) -> AppResult<Json<SongList>> {
    let songs = SongRepo::by_director(&state.store, &director)?;
    Ok(Json(SongList { songs }))
}

/// GET /songs/director/{director}/singer/{singer}
pub async fn by_director_and_singer(
    State(state): State<AppState>,
    Path((director, singer)): Path<(String, String)>,
) -> AppResult<Json<SongList>> {
    let songs = SongRepo::by_director_and_singer(&state.store, &director, &singer)?;
    Ok(Json(SongList { songs }))
}

/// GET /songs/film/{film}/singer/{singer}
pub async fn by_film_and_singer(
    State(state): State<AppState>,
    Path((film, singer)): Path<(String, String)>,
) -> AppResult<Json<SongList>> {
    let songs = SongRepo::by_film_and_singer(&state.store, &film, &singer)?;
    Ok(Json(SongList { songs }))
}

/// POST /song
///
/// Add a song to the catalog.
pub async fn create(
    State(state): State<AppState>,
    Json(song): Json<NewSong>,
) -> AppResult<String> {
    let id = SongRepo::create(&state.store, &song)?;
    tracing::info!(%id, songname = %song.songname, "Song added");
    Ok("New song added successfully".into())
}

/// DELETE /song/{id}
///
/// Delete a song by id. An unknown or malformed id still confirms success.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<String> {
    let report = SongRepo::delete_by_id(&state.store, &id)?;
    tracing::info!(id = %id, deleted = report.deleted, "Song deleted");
    Ok("Song deleted successfully".into())
}

/// PUT /song/{id}
///
/// Set the actor/actress on a song. Only the provided cast fields are
/// written; an unknown or malformed id still confirms success.
pub async fn set_cast(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(cast): Json<SongCast>,
) -> AppResult<String> {
    let report = SongRepo::set_cast(&state.store, &id, &cast)?;
    tracing::info!(id = %id, matched = report.matched, modified = report.modified, "Song cast updated");
    Ok("Song updated successfully".into())
}
