//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`gallery`, `upload`, `ui`) so each component
//! depends on a small focused model. All transitions are plain methods with
//! no I/O, so they are tested natively; `util::gallery_actions` owns the
//! async glue that feeds them network results.

pub mod gallery;
pub mod ui;
pub mod upload;
