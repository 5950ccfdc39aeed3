//! Song catalog records.

use serde::{Deserialize, Serialize};

pub mod fields {
    pub const SONGNAME: &str = "Songname";
    pub const FILM: &str = "Film";
    pub const SINGER: &str = "Singer";
    pub const DIRECTOR: &str = "Director";
    pub const ACTOR: &str = "Actor";
    pub const ACTRESS: &str = "Actress";
}

/// A stored song, including its store-assigned id.
///
/// `Actor`/`Actress` are absent until filled in by the cast update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    #[serde(rename = "Songname")]
    pub songname: String,
    #[serde(rename = "Film")]
    pub film: String,
    #[serde(rename = "Singer")]
    pub singer: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Actor", skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(rename = "Actress", skip_serializing_if = "Option::is_none")]
    pub actress: Option<String>,
}

/// Creation payload. Omitted optional fields are not stored at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSong {
    #[serde(rename = "Songname")]
    pub songname: String,
    #[serde(rename = "Film")]
    pub film: String,
    #[serde(rename = "Singer")]
    pub singer: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Actor", skip_serializing_if = "Option::is_none", default)]
    pub actor: Option<String>,
    #[serde(rename = "Actress", skip_serializing_if = "Option::is_none", default)]
    pub actress: Option<String>,
}

/// Cast patch payload: only the provided fields are written.
#[derive(Debug, Clone, Deserialize)]
pub struct SongCast {
    #[serde(rename = "Actor", default)]
    pub actor: Option<String>,
    #[serde(rename = "Actress", default)]
    pub actress: Option<String>,
}
