//! Request handlers, one per route.
//!
//! Each handler builds a filter or update through the corresponding
//! repository in `campusdb_db`, makes a single store call, and renders the
//! result; failures map to the generic server error via
//! [`AppError`](crate::error::AppError).

pub mod marks;
pub mod songs;
