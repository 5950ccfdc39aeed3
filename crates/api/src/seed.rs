//! Startup seeding.
//!
//! Each service inserts a fixed set of sample records when its store handle
//! is ready. Seeding runs on every process start with no existence check, so
//! restarting a service duplicates the seed set; it also runs concurrently
//! with the HTTP listener, so early requests may observe a partially-seeded
//! collection.

use std::sync::Arc;

use campusdb_db::models::mark::StudentMark;
use campusdb_db::models::song::NewSong;
use campusdb_db::repositories::{MarkRepo, SongRepo};
use campusdb_db::Store;

/// Sample mark records inserted at marks-api startup.
pub fn student_marks() -> Vec<StudentMark> {
    let mark = |name: &str, roll_no, [wad, cc, dsbda, cns, ai]: [i64; 5]| StudentMark {
        name: name.into(),
        roll_no,
        wad,
        cc,
        dsbda,
        cns,
        ai,
    };
    vec![
        mark("Asha Kulkarni", 101, [45, 52, 61, 48, 55]),
        mark("Rohan Deshmukh", 102, [35, 42, 19, 30, 28]),
        mark("Priya Nair", 103, [72, 38, 24, 51, 66]),
        mark("Imran Shaikh", 104, [28, 31, 26, 27, 29]),
        mark("Sneha Patil", 105, [55, 61, 20, 44, 58]),
    ]
}

/// Sample songs inserted at songs-api startup.
pub fn songs() -> Vec<NewSong> {
    let song = |songname: &str, film: &str, singer: &str, director: &str| NewSong {
        songname: songname.into(),
        film: film.into(),
        singer: singer.into(),
        director: director.into(),
        actor: None,
        actress: None,
    };
    vec![
        song("Tum Hi Ho", "Aashiqui 2", "Arijit Singh", "Mithoon"),
        song("Kal Ho Naa Ho", "Kal Ho Naa Ho", "Sonu Nigam", "Shankar-Ehsaan-Loy"),
        song("Chaiyya Chaiyya", "Dil Se", "Sukhwinder Singh", "A.R. Rahman"),
        song("Jai Ho", "Slumdog Millionaire", "Sukhwinder Singh", "A.R. Rahman"),
        song("Tujhe Dekha To", "Dilwale Dulhania Le Jayenge", "Lata Mangeshkar", "Jatin-Lalit"),
    ]
}

pub async fn seed_marks(store: Arc<Store>) {
    match MarkRepo::seed(&store, &student_marks()) {
        Ok(count) => tracing::info!(count, "Seed documents inserted"),
        Err(err) => tracing::error!(error = %err, "Seeding failed"),
    }
}

pub async fn seed_songs(store: Arc<Store>) {
    match SongRepo::seed(&store, &songs()) {
        Ok(count) => tracing::info!(count, "Seed documents inserted"),
        Err(err) => tracing::error!(error = %err, "Seeding failed"),
    }
}
