//! Byte-exact archive verification against a reference directory tree.
//!
//! `verarch-core` checks that the contents of an archive (zip, tar, tar.gz)
//! or a directory tree match a reference directory byte for byte, and reports
//! a three-way reconciliation: entries identical on disk, entries that differ,
//! and reference files never produced by the source.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use verarch_core::NoopSink;
//! use verarch_core::VerifyConfig;
//! use verarch_core::sources::ZipSource;
//! use verarch_core::verify;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut source = ZipSource::open("release.zip")?;
//! let config = VerifyConfig::default();
//! let mut sink = NoopSink;
//! let report = verify(&mut source, Path::new("staging"), &config, &mut sink)?;
//! println!("{} entries matched", report.entries_matched);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod compare;
pub mod config;
pub mod error;
pub mod event;
pub mod report;
pub mod sources;
pub mod types;
pub mod verify;

// Re-export main API types
pub use config::VerifyConfig;
pub use error::Result;
pub use error::VerifyError;
pub use event::Event;
pub use event::EventSink;
pub use event::NoopSink;
pub use report::VerifyReport;
pub use types::RelPath;
pub use verify::verify;
