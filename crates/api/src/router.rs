//! Shared router builders.
//!
//! Both binaries and the integration tests build their app through these
//! functions, so everyone runs the exact same route table and middleware
//! stack.

use axum::http::HeaderName;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{marks, songs};
use crate::state::AppState;

/// Route table for the student marks service.
///
/// ```text
/// GET    /total         count of mark records (text)
/// GET    /list          all mark records (JSON)
/// GET    /dsbda         names with DSBDA > 20 (JSON)
/// PUT    /update/{rn}   add 10 to all marks for a roll number (text)
/// GET    /allsubjects   names with every mark > 25 (JSON)
/// GET    /mathsscience  names with WAD < 40 or CC < 40 (JSON)
/// DELETE /remove/{rn}   delete one record by roll number (text)
/// GET    /tabular       all mark records (HTML table)
/// ```
pub fn marks_routes() -> Router<AppState> {
    Router::new()
        .route("/total", get(marks::total))
        .route("/list", get(marks::list))
        .route("/dsbda", get(marks::dsbda))
        .route("/update/{rn}", put(marks::increment_marks))
        .route("/allsubjects", get(marks::all_subjects))
        .route("/mathsscience", get(marks::maths_science))
        .route("/remove/{rn}", delete(marks::remove))
        .route("/tabular", get(marks::tabular))
}

/// Route table for the song catalog service.
///
/// ```text
/// GET    /songs                                       count + all songs (JSON)
/// GET    /songs/director/{director}                   songs by director (JSON)
/// GET    /songs/director/{director}/singer/{singer}   director + singer (JSON)
/// GET    /songs/film/{film}/singer/{singer}           film + singer (JSON)
/// POST   /song                                        add a song (text)
/// DELETE /song/{id}                                   delete a song (text)
/// PUT    /song/{id}                                   set actor/actress (text)
/// ```
pub fn songs_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", get(songs::catalog))
        .route("/songs/director/{director}", get(songs::by_director))
        .route(
            "/songs/director/{director}/singer/{singer}",
            get(songs::by_director_and_singer),
        )
        .route("/songs/film/{film}/singer/{singer}", get(songs::by_film_and_singer))
        .route("/song", post(songs::create))
        .route("/song/{id}", delete(songs::delete).put(songs::set_cast))
}

/// Apply the shared middleware stack and state to a route table.
///
/// Applied bottom-up: request ID assignment, request/response tracing,
/// request ID propagation, panic recovery.
pub fn build_app(routes: Router<AppState>, state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    routes
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// The full marks-api application.
pub fn build_marks_app(state: AppState) -> Router {
    build_app(marks_routes(), state)
}

/// The full songs-api application.
pub fn build_songs_app(state: AppState) -> Router {
    build_app(songs_routes(), state)
}
