//! Repository for the `music` collection.

use std::sync::Arc;

use bson::Bson;

use crate::collection::Collection;
use crate::document::{Document, DocumentId};
use crate::error::StoreError;
use crate::models::song::{fields, NewSong, Song, SongCast};
use crate::query::{DeleteReport, Filter, FindOptions, UpdateDoc, UpdateReport};
use crate::store::Store;

/// Collection holding the song catalog.
pub const COLLECTION: &str = "music";

/// Query and update operations over the song catalog.
pub struct SongRepo;

impl SongRepo {
    fn collection(store: &Store) -> Arc<Collection> {
        store.collection(COLLECTION)
    }

    /// Total number of songs.
    pub fn count(store: &Store) -> Result<usize, StoreError> {
        Self::collection(store).count(&Filter::All)
    }

    /// All songs, in stored order.
    pub fn list(store: &Store) -> Result<Vec<Song>, StoreError> {
        Self::find(store, Filter::All)
    }

    /// Insert one song, returning its assigned id.
    pub fn create(store: &Store, song: &NewSong) -> Result<DocumentId, StoreError> {
        Self::collection(store).insert_one(bson::to_document(song)?)
    }

    /// Insert the given songs as a batch, returning how many went in.
    pub fn seed(store: &Store, songs: &[NewSong]) -> Result<usize, StoreError> {
        let batch = songs.iter().map(bson::to_document).collect::<Result<Vec<_>, _>>()?;
        let ids = Self::collection(store).insert_many(batch)?;
        Ok(ids.len())
    }

    /// Songs by the given music director.
    pub fn by_director(store: &Store, director: &str) -> Result<Vec<Song>, StoreError> {
        Self::find(store, Filter::eq(fields::DIRECTOR, director))
    }

    /// Songs by the given director, sung by the given singer.
    pub fn by_director_and_singer(
        store: &Store,
        director: &str,
        singer: &str,
    ) -> Result<Vec<Song>, StoreError> {
        Self::find(
            store,
            Filter::And(vec![
                Filter::eq(fields::DIRECTOR, director),
                Filter::eq(fields::SINGER, singer),
            ]),
        )
    }

    /// Songs from the given film, sung by the given singer.
    pub fn by_film_and_singer(
        store: &Store,
        film: &str,
        singer: &str,
    ) -> Result<Vec<Song>, StoreError> {
        Self::find(
            store,
            Filter::And(vec![Filter::eq(fields::FILM, film), Filter::eq(fields::SINGER, singer)]),
        )
    }

    /// Write the provided cast fields onto the song with the given id.
    ///
    /// Only `Actor`/`Actress` are touched; the rest of the record is left as
    /// stored. An unknown or malformed id matches nothing.
    pub fn set_cast(store: &Store, id: &str, cast: &SongCast) -> Result<UpdateReport, StoreError> {
        let Ok(id) = id.parse::<DocumentId>() else {
            return Ok(UpdateReport::default());
        };
        let mut set = Vec::new();
        if let Some(actor) = &cast.actor {
            set.push((fields::ACTOR.to_string(), Bson::String(actor.clone())));
        }
        if let Some(actress) = &cast.actress {
            set.push((fields::ACTRESS.to_string(), Bson::String(actress.clone())));
        }
        Self::collection(store).update_by_id(&id, &UpdateDoc { set, inc: vec![] })
    }

    /// Delete the song with the given id. An unknown or malformed id deletes
    /// nothing.
    pub fn delete_by_id(store: &Store, id: &str) -> Result<DeleteReport, StoreError> {
        let Ok(id) = id.parse::<DocumentId>() else {
            return Ok(DeleteReport::default());
        };
        Self::collection(store).delete_by_id(&id)
    }

    fn find(store: &Store, filter: Filter) -> Result<Vec<Song>, StoreError> {
        Self::collection(store)
            .find(&filter, &FindOptions::default())?
            .into_iter()
            .map(Self::song_from_document)
            .collect()
    }

    fn song_from_document(doc: Document) -> Result<Song, StoreError> {
        let mut data = doc.data;
        data.insert("id", doc.id.to_string());
        bson::from_document(data).map_err(StoreError::from)
    }
}
