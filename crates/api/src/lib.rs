//! CampusDB HTTP layer.
//!
//! Two structurally identical services share this crate: `marks-api` serves
//! student mark records, `songs-api` serves the song catalog. The building
//! blocks (config, state, error mapping, routers, seeding) are exposed so the
//! integration tests and both binary entrypoints use the same code.

pub mod config;
pub mod error;
pub mod handlers;
pub mod html;
pub mod router;
pub mod seed;
pub mod state;
