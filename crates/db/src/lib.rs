//! Embedded document store for the CampusDB services.
//!
//! Documents are flat BSON maps grouped into named, insertion-ordered
//! collections. Every mutation is appended to a write-ahead log before it is
//! applied in memory, and the log is replayed when a store is reopened, so
//! acknowledged writes survive process restarts.
//!
//! The `models` and `repositories` modules sit on top of the engine: models
//! are the typed record shapes the HTTP layer serves, repositories translate
//! each endpoint's intent into a filter or update template and issue exactly
//! one collection operation.

pub mod collection;
pub mod document;
pub mod error;
pub mod models;
pub mod query;
pub mod repositories;
pub mod store;
mod wal;

pub use collection::Collection;
pub use document::{Document, DocumentId};
pub use error::StoreError;
pub use query::{CmpOp, DeleteReport, Filter, FindOptions, UpdateDoc, UpdateReport};
pub use store::Store;
