//! Integration tests for the song catalog service.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::Router;
use campusdb_api::state::AppState;
use campusdb_api::{router, seed};
use campusdb_db::repositories::SongRepo;
use campusdb_db::Store;
use common::{body_json, body_text, get, send};
use serde_json::json;

fn songs_app() -> (Router, AppState, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState { store: Arc::new(Store::open(dir.path()).unwrap()) };
    (router::build_songs_app(state.clone()), state, dir)
}

fn seeded_songs_app() -> (Router, AppState, tempfile::TempDir) {
    let (app, state, dir) = songs_app();
    SongRepo::seed(&state.store, &seed::songs()).unwrap();
    (app, state, dir)
}

async fn catalog_total(app: &Router) -> u64 {
    body_json(get(app, "/songs").await).await["total"].as_u64().unwrap()
}

// ---------------------------------------------------------------------------
// Test: GET /songs returns the count and every record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_reports_total_and_songs() {
    let (app, _state, _dir) = seeded_songs_app();
    let json = body_json(get(&app, "/songs").await).await;

    assert_eq!(json["total"], 5);
    let songs = json["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 5);
    assert_eq!(songs[0]["Songname"], "Tum Hi Ho");
    assert!(songs[0]["id"].is_string());
    // Cast fields are absent until set.
    assert!(songs[0].get("Actor").is_none());
}

// ---------------------------------------------------------------------------
// Test: POST /song grows the catalog by one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creating_a_song_grows_the_catalog() {
    let (app, _state, _dir) = seeded_songs_app();

    let payload = json!({
        "Songname": "Mitwa",
        "Film": "Kabhi Alvida Naa Kehna",
        "Singer": "Shafqat Amanat Ali",
        "Director": "Shankar-Ehsaan-Loy",
        "Actor": "Shah Rukh Khan",
        "Actress": "Rani Mukerji",
    });
    let response = send(&app, Method::POST, "/song", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "New song added successfully");

    let json = body_json(get(&app, "/songs").await).await;
    assert_eq!(json["total"], 6);
    let added = json["songs"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(added["Songname"], "Mitwa");
    assert_eq!(added["Actor"], "Shah Rukh Khan");
    assert_eq!(added["Actress"], "Rani Mukerji");
}

// ---------------------------------------------------------------------------
// Test: director and compound listings filter by equality
// ---------------------------------------------------------------------------

#[tokio::test]
async fn director_listing_returns_matching_songs() {
    let (app, _state, _dir) = seeded_songs_app();
    let json = body_json(get(&app, "/songs/director/A.R.%20Rahman").await).await;

    let songs = json["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 2);
    assert!(songs.iter().all(|s| s["Director"] == "A.R. Rahman"));
}

#[tokio::test]
async fn director_and_singer_listing_requires_both() {
    let (app, _state, _dir) = seeded_songs_app();

    let json =
        body_json(get(&app, "/songs/director/A.R.%20Rahman/singer/Sukhwinder%20Singh").await).await;
    assert_eq!(json["songs"].as_array().unwrap().len(), 2);

    // Director and singer from different records match nothing.
    let json = body_json(get(&app, "/songs/director/Mithoon/singer/Sonu%20Nigam").await).await;
    assert_eq!(json["songs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn film_and_singer_listing_requires_both() {
    let (app, _state, _dir) = seeded_songs_app();
    let json = body_json(get(&app, "/songs/film/Dil%20Se/singer/Sukhwinder%20Singh").await).await;

    let songs = json["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["Songname"], "Chaiyya Chaiyya");
}

// ---------------------------------------------------------------------------
// Test: DELETE /song/{id} removes the record; unknown ids succeed silently
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_a_song_removes_it() {
    let (app, _state, _dir) = seeded_songs_app();
    let json = body_json(get(&app, "/songs").await).await;
    let id = json["songs"][1]["id"].as_str().unwrap().to_string();

    let response = send(&app, Method::DELETE, &format!("/song/{id}"), None).await;
    assert_eq!(body_text(response).await, "Song deleted successfully");

    let json = body_json(get(&app, "/songs").await).await;
    assert_eq!(json["total"], 4);
    assert!(json["songs"].as_array().unwrap().iter().all(|s| s["id"] != id.as_str()));
}

#[tokio::test]
async fn deleting_an_unknown_id_is_a_silent_noop() {
    let (app, _state, _dir) = seeded_songs_app();

    let response =
        send(&app, Method::DELETE, "/song/00000000-0000-0000-0000-000000000000", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Song deleted successfully");
    assert_eq!(catalog_total(&app).await, 5);
}

#[tokio::test]
async fn deleting_a_malformed_id_is_a_silent_noop() {
    let (app, _state, _dir) = seeded_songs_app();

    let response = send(&app, Method::DELETE, "/song/not-a-store-id", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Song deleted successfully");
    assert_eq!(catalog_total(&app).await, 5);
}

// ---------------------------------------------------------------------------
// Test: PUT /song/{id} writes the cast fields and nothing else
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cast_update_touches_only_actor_and_actress() {
    let (app, _state, _dir) = seeded_songs_app();
    let json = body_json(get(&app, "/songs").await).await;
    let id = json["songs"][0]["id"].as_str().unwrap().to_string();

    let payload = json!({ "Actor": "Aditya Roy Kapur", "Actress": "Shraddha Kapoor" });
    let response = send(&app, Method::PUT, &format!("/song/{id}"), Some(payload)).await;
    assert_eq!(body_text(response).await, "Song updated successfully");

    let json = body_json(get(&app, "/songs").await).await;
    let updated = &json["songs"][0];
    assert_eq!(updated["Actor"], "Aditya Roy Kapur");
    assert_eq!(updated["Actress"], "Shraddha Kapoor");
    assert_eq!(updated["Songname"], "Tum Hi Ho");
    assert_eq!(updated["Singer"], "Arijit Singh");
    assert_eq!(updated["Director"], "Mithoon");
}

#[tokio::test]
async fn cast_update_with_partial_body_leaves_the_rest_absent() {
    let (app, _state, _dir) = seeded_songs_app();
    let json = body_json(get(&app, "/songs").await).await;
    let id = json["songs"][0]["id"].as_str().unwrap().to_string();

    let response =
        send(&app, Method::PUT, &format!("/song/{id}"), Some(json!({ "Actor": "Hrithik" }))).await;
    assert_eq!(body_text(response).await, "Song updated successfully");

    let json = body_json(get(&app, "/songs").await).await;
    assert_eq!(json["songs"][0]["Actor"], "Hrithik");
    assert!(json["songs"][0].get("Actress").is_none());
}
