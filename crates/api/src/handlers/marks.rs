//! Handlers for the student marks service.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use campusdb_db::models::mark::{fields, MarkName, StudentMark};
use campusdb_db::repositories::MarkRepo;

use crate::error::AppResult;
use crate::html;
use crate::state::AppState;

/// Threshold for the single-subject DSBDA listing (strictly above).
const DSBDA_THRESHOLD: i64 = 20;
/// Threshold every subject must exceed for the all-subjects listing.
const ALL_SUBJECTS_THRESHOLD: i64 = 25;
/// A mark below this counts as failing for the maths/science listing.
const FAILING_THRESHOLD: i64 = 40;
/// Amount added to each subject mark by the increment endpoint.
const MARK_INCREMENT: i64 = 10;

/// GET /total
///
/// Total count of mark records, as plain text.
pub async fn total(State(state): State<AppState>) -> AppResult<String> {
    let count = MarkRepo::count(&state.store)?;
    Ok(format!("Total count of documents: {count}"))
}

/// GET /list
///
/// All mark records as a JSON array.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StudentMark>>> {
    Ok(Json(MarkRepo::list(&state.store)?))
}

/// GET /dsbda
///
/// Names of students with more than 20 marks in DSBDA.
pub async fn dsbda(State(state): State<AppState>) -> AppResult<Json<Vec<MarkName>>> {
    let names = MarkRepo::names_with_mark_above(&state.store, fields::DSBDA, DSBDA_THRESHOLD)?;
    Ok(Json(names))
}

/// PUT /update/{rn}
///
/// Add 10 to all five subject marks of every record with the given roll
/// number. A roll number that matches nothing still confirms success.
pub async fn increment_marks(
    State(state): State<AppState>,
    Path(roll_no): Path<String>,
) -> AppResult<String> {
    let report = MarkRepo::add_to_all_marks(&state.store, &roll_no, MARK_INCREMENT)?;
    tracing::info!(
        roll_no = %roll_no,
        matched = report.matched,
        modified = report.modified,
        "Marks incremented",
    );
    Ok("Marks updated successfully".into())
}

/// GET /allsubjects
///
/// Names of students with more than 25 marks in every subject.
pub async fn all_subjects(State(state): State<AppState>) -> AppResult<Json<Vec<MarkName>>> {
    let names = MarkRepo::names_above_in_all(&state.store, ALL_SUBJECTS_THRESHOLD)?;
    Ok(Json(names))
}

/// GET /mathsscience
///
/// Names of students below 40 in WAD or CC. One failing subject is enough;
/// this has always been a disjunction despite the route's wording.
pub async fn maths_science(State(state): State<AppState>) -> AppResult<Json<Vec<MarkName>>> {
    let names =
        MarkRepo::names_below_in_either(&state.store, fields::WAD, fields::CC, FAILING_THRESHOLD)?;
    Ok(Json(names))
}

/// DELETE /remove/{rn}
///
/// Delete the first record with the given roll number. A roll number that
/// matches nothing still confirms success.
pub async fn remove(
    State(state): State<AppState>,
    Path(roll_no): Path<String>,
) -> AppResult<String> {
    let report = MarkRepo::remove_by_roll_no(&state.store, &roll_no)?;
    tracing::info!(roll_no = %roll_no, deleted = report.deleted, "Mark record removed");
    Ok("Document removed successfully".into())
}

/// GET /tabular
///
/// All mark records as an HTML table.
pub async fn tabular(State(state): State<AppState>) -> AppResult<Html<String>> {
    let marks = MarkRepo::list(&state.store)?;
    Ok(Html(html::marks_table(&marks)))
}
