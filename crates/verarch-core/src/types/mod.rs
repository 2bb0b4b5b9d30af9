//! Validated types used throughout the verification engine.

mod rel_path;

pub use rel_path::RelPath;
