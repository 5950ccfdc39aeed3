//! A named collection of documents.
//!
//! Documents live in an insertion-ordered map, so find results come back in
//! the order records were stored. Every mutation appends to the shared
//! operation log before touching memory; an append failure aborts the
//! operation and surfaces to the caller.
//!
//! Locking: writers take the document map lock first, then the log lock.
//! Per-document writes are serialized by the map lock; there is no
//! transaction spanning documents or collections.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};

use crate::document::{Document, DocumentId};
use crate::error::StoreError;
use crate::query::{
    apply_update, eval_filter, project_fields, DeleteReport, Filter, FindOptions, UpdateDoc,
    UpdateReport,
};
use crate::wal::{doc_to_bytes, Wal, WalOp, WalRecord};

pub struct Collection {
    name: String,
    wal: Arc<Mutex<Wal>>,
    docs: RwLock<IndexMap<DocumentId, bson::Document>>,
}

impl Collection {
    pub(crate) fn new(name: &str, wal: Arc<Mutex<Wal>>) -> Self {
        Self { name: name.to_string(), wal, docs: RwLock::new(IndexMap::new()) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply a replayed operation directly to memory, bypassing the log.
    pub(crate) fn apply_replayed(&self, op: WalOp, id: DocumentId, data: Option<bson::Document>) {
        let mut docs = self.docs.write();
        match op {
            WalOp::Insert | WalOp::Update => {
                if let Some(data) = data {
                    docs.insert(id, data);
                }
            }
            WalOp::Delete => {
                docs.shift_remove(&id);
            }
        }
    }

    pub fn count(&self, filter: &Filter) -> Result<usize, StoreError> {
        Ok(self.docs.read().values().filter(|d| eval_filter(d, filter)).count())
    }

    pub fn find(&self, filter: &Filter, opts: &FindOptions) -> Result<Vec<Document>, StoreError> {
        let docs = self.docs.read();
        let mut out = Vec::new();
        for (id, data) in docs.iter() {
            if !eval_filter(data, filter) {
                continue;
            }
            let data = match &opts.projection {
                Some(fields) => project_fields(data, fields),
                None => data.clone(),
            };
            out.push(Document { id: *id, data });
        }
        Ok(out)
    }

    pub fn insert_one(&self, data: bson::Document) -> Result<DocumentId, StoreError> {
        let mut docs = self.docs.write();
        let id = DocumentId::new();
        self.wal.lock().append(&WalRecord {
            op: WalOp::Insert,
            collection: self.name.clone(),
            id,
            data: Some(doc_to_bytes(&data)?),
        })?;
        docs.insert(id, data);
        Ok(id)
    }

    pub fn insert_many(&self, batch: Vec<bson::Document>) -> Result<Vec<DocumentId>, StoreError> {
        let mut docs = self.docs.write();
        let mut wal = self.wal.lock();
        let mut ids = Vec::with_capacity(batch.len());
        for data in batch {
            let id = DocumentId::new();
            wal.append(&WalRecord {
                op: WalOp::Insert,
                collection: self.name.clone(),
                id,
                data: Some(doc_to_bytes(&data)?),
            })?;
            docs.insert(id, data);
            ids.push(id);
        }
        Ok(ids)
    }

    /// Update every document matching `filter`.
    pub fn update_many(
        &self,
        filter: &Filter,
        update: &UpdateDoc,
    ) -> Result<UpdateReport, StoreError> {
        let mut docs = self.docs.write();
        let mut wal = self.wal.lock();
        let mut report = UpdateReport::default();
        for (id, data) in docs.iter_mut() {
            if !eval_filter(data, filter) {
                continue;
            }
            report.matched += 1;
            let mut updated = data.clone();
            if apply_update(&mut updated, update) {
                wal.append(&WalRecord {
                    op: WalOp::Update,
                    collection: self.name.clone(),
                    id: *id,
                    data: Some(doc_to_bytes(&updated)?),
                })?;
                *data = updated;
                report.modified += 1;
            }
        }
        Ok(report)
    }

    /// Update the document with the given id, if it exists.
    pub fn update_by_id(
        &self,
        id: &DocumentId,
        update: &UpdateDoc,
    ) -> Result<UpdateReport, StoreError> {
        let mut docs = self.docs.write();
        let Some(data) = docs.get_mut(id) else {
            return Ok(UpdateReport::default());
        };
        let mut report = UpdateReport { matched: 1, modified: 0 };
        let mut updated = data.clone();
        if apply_update(&mut updated, update) {
            self.wal.lock().append(&WalRecord {
                op: WalOp::Update,
                collection: self.name.clone(),
                id: *id,
                data: Some(doc_to_bytes(&updated)?),
            })?;
            *data = updated;
            report.modified = 1;
        }
        Ok(report)
    }

    /// Delete the first document matching `filter`, if any.
    pub fn delete_one(&self, filter: &Filter) -> Result<DeleteReport, StoreError> {
        let mut docs = self.docs.write();
        let Some(id) = docs.iter().find(|(_, d)| eval_filter(d, filter)).map(|(id, _)| *id) else {
            return Ok(DeleteReport::default());
        };
        self.wal.lock().append(&WalRecord {
            op: WalOp::Delete,
            collection: self.name.clone(),
            id,
            data: None,
        })?;
        docs.shift_remove(&id);
        Ok(DeleteReport { deleted: 1 })
    }

    /// Delete the document with the given id, if it exists.
    pub fn delete_by_id(&self, id: &DocumentId) -> Result<DeleteReport, StoreError> {
        let mut docs = self.docs.write();
        if !docs.contains_key(id) {
            return Ok(DeleteReport::default());
        }
        self.wal.lock().append(&WalRecord {
            op: WalOp::Delete,
            collection: self.name.clone(),
            id: *id,
            data: None,
        })?;
        docs.shift_remove(id);
        Ok(DeleteReport { deleted: 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::CmpOp;
    use crate::store::Store;
    use bson::doc;

    fn store() -> (Store, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        (Store::open(dir.path()).unwrap(), dir)
    }

    #[test]
    fn find_preserves_insertion_order() {
        let (store, _dir) = store();
        let col = store.collection("studentmarks");
        for n in [3_i64, 1, 2] {
            col.insert_one(doc! { "RollNo": n }).unwrap();
        }
        let rolls: Vec<i64> = col
            .find(&Filter::All, &FindOptions::default())
            .unwrap()
            .iter()
            .map(|d| d.data.get_i64("RollNo").unwrap())
            .collect();
        assert_eq!(rolls, vec![3, 1, 2]);
    }

    #[test]
    fn update_many_reports_matched_and_modified() {
        let (store, _dir) = store();
        let col = store.collection("studentmarks");
        col.insert_one(doc! { "RollNo": 101_i64, "WAD": 25_i64 }).unwrap();
        col.insert_one(doc! { "RollNo": 101_i64, "WAD": 30_i64 }).unwrap();
        col.insert_one(doc! { "RollNo": 102_i64, "WAD": 40_i64 }).unwrap();

        let filter = Filter::eq("RollNo", 101_i64);
        let update = UpdateDoc { set: vec![], inc: vec![("WAD".into(), 10)] };
        let report = col.update_many(&filter, &update).unwrap();
        assert_eq!(report, UpdateReport { matched: 2, modified: 2 });

        let untouched = col.find(&Filter::eq("RollNo", 102_i64), &FindOptions::default()).unwrap();
        assert_eq!(untouched[0].data.get_i64("WAD").unwrap(), 40);
    }

    #[test]
    fn delete_one_removes_only_the_first_match() {
        let (store, _dir) = store();
        let col = store.collection("studentmarks");
        col.insert_one(doc! { "RollNo": 101_i64, "Name": "first" }).unwrap();
        col.insert_one(doc! { "RollNo": 101_i64, "Name": "second" }).unwrap();

        let report = col.delete_one(&Filter::eq("RollNo", 101_i64)).unwrap();
        assert_eq!(report.deleted, 1);

        let rest = col.find(&Filter::All, &FindOptions::default()).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].data.get_str("Name").unwrap(), "second");
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let (store, _dir) = store();
        let col = store.collection("music");
        col.insert_one(doc! { "Songname": "X" }).unwrap();

        let report = col.delete_by_id(&DocumentId::new()).unwrap();
        assert_eq!(report.deleted, 0);
        assert_eq!(col.count(&Filter::All).unwrap(), 1);
    }

    #[test]
    fn update_by_id_patches_without_touching_other_fields() {
        let (store, _dir) = store();
        let col = store.collection("music");
        let id = col.insert_one(doc! { "Songname": "X", "Singer": "Y" }).unwrap();

        let update = UpdateDoc {
            set: vec![("Actor".into(), bson::Bson::String("A".into()))],
            inc: vec![],
        };
        let report = col.update_by_id(&id, &update).unwrap();
        assert_eq!(report, UpdateReport { matched: 1, modified: 1 });

        let docs = col.find(&Filter::All, &FindOptions::default()).unwrap();
        assert_eq!(docs[0].data.get_str("Songname").unwrap(), "X");
        assert_eq!(docs[0].data.get_str("Actor").unwrap(), "A");
    }

    #[test]
    fn projection_applies_per_document() {
        let (store, _dir) = store();
        let col = store.collection("studentmarks");
        col.insert_one(doc! { "Name": "Asha", "RollNo": 101_i64, "DSBDA": 61_i64 }).unwrap();

        let found = col
            .find(
                &Filter::cmp("DSBDA", CmpOp::Gt, 20_i64),
                &FindOptions::project(["Name"]),
            )
            .unwrap();
        assert_eq!(found[0].data, doc! { "Name": "Asha" });
    }
}
