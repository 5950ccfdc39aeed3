//! Repository for the `studentmarks` collection.

use std::sync::Arc;

use bson::Bson;

use crate::collection::Collection;
use crate::error::StoreError;
use crate::models::mark::{fields, MarkName, StudentMark};
use crate::query::{CmpOp, DeleteReport, Filter, FindOptions, UpdateDoc, UpdateReport};
use crate::store::Store;

/// Collection holding student mark records.
pub const COLLECTION: &str = "studentmarks";

/// Query and update operations over student marks.
pub struct MarkRepo;

impl MarkRepo {
    fn collection(store: &Store) -> Arc<Collection> {
        store.collection(COLLECTION)
    }

    /// Total number of mark records.
    pub fn count(store: &Store) -> Result<usize, StoreError> {
        Self::collection(store).count(&Filter::All)
    }

    /// All mark records, in stored order.
    pub fn list(store: &Store) -> Result<Vec<StudentMark>, StoreError> {
        Self::collection(store)
            .find(&Filter::All, &FindOptions::default())?
            .into_iter()
            .map(|doc| bson::from_document(doc.data).map_err(StoreError::from))
            .collect()
    }

    /// Insert the given records as a batch, returning how many went in.
    pub fn seed(store: &Store, marks: &[StudentMark]) -> Result<usize, StoreError> {
        let batch = marks.iter().map(bson::to_document).collect::<Result<Vec<_>, _>>()?;
        let ids = Self::collection(store).insert_many(batch)?;
        Ok(ids.len())
    }

    /// Names of students whose mark in `field` is strictly above `threshold`.
    pub fn names_with_mark_above(
        store: &Store,
        field: &str,
        threshold: i64,
    ) -> Result<Vec<MarkName>, StoreError> {
        let filter = Filter::cmp(field, CmpOp::Gt, threshold);
        Self::find_names(store, filter)
    }

    /// Names of students above `threshold` in every subject.
    pub fn names_above_in_all(store: &Store, threshold: i64) -> Result<Vec<MarkName>, StoreError> {
        let filter = Filter::And(
            fields::SUBJECTS.iter().map(|f| Filter::cmp(*f, CmpOp::Gt, threshold)).collect(),
        );
        Self::find_names(store, filter)
    }

    /// Names of students below `threshold` in at least one of the two fields.
    ///
    /// This is a disjunction: one failing subject is enough.
    pub fn names_below_in_either(
        store: &Store,
        first: &str,
        second: &str,
        threshold: i64,
    ) -> Result<Vec<MarkName>, StoreError> {
        let filter = Filter::Or(vec![
            Filter::cmp(first, CmpOp::Lt, threshold),
            Filter::cmp(second, CmpOp::Lt, threshold),
        ]);
        Self::find_names(store, filter)
    }

    /// Add `delta` to all five subject marks of every record with the given
    /// roll number.
    pub fn add_to_all_marks(
        store: &Store,
        roll_no: &str,
        delta: i64,
    ) -> Result<UpdateReport, StoreError> {
        let update = UpdateDoc {
            set: vec![],
            inc: fields::SUBJECTS.iter().map(|f| ((*f).to_string(), delta)).collect(),
        };
        Self::collection(store).update_many(&Self::roll_no_filter(roll_no), &update)
    }

    /// Delete the first record with the given roll number.
    pub fn remove_by_roll_no(store: &Store, roll_no: &str) -> Result<DeleteReport, StoreError> {
        Self::collection(store).delete_one(&Self::roll_no_filter(roll_no))
    }

    fn find_names(store: &Store, filter: Filter) -> Result<Vec<MarkName>, StoreError> {
        Self::collection(store)
            .find(&filter, &FindOptions::project([fields::NAME]))?
            .into_iter()
            .map(|doc| bson::from_document(doc.data).map_err(StoreError::from))
            .collect()
    }

    /// Roll numbers arrive as raw path strings. Integer input compares as a
    /// number; anything else becomes a string equality, which never matches
    /// the numeric field, so the operation is a silent no-op.
    fn roll_no_filter(raw: &str) -> Filter {
        let value = match raw.trim().parse::<i64>() {
            Ok(n) => Bson::Int64(n),
            Err(_) => Bson::String(raw.to_string()),
        };
        Filter::eq(fields::ROLL_NO, value)
    }
}
