/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! tanabib processor
//!
//! Turns bibliographic records into a Tana paste outline. Each record becomes
//! a source node tagged by its item type, with a fixed set of fields chosen
//! per type: contributors filtered by role, dates linked to day nodes, tags
//! written as topics.
//!
//! # Example
//!
//! ```rust
//! use tanabib_processor::{Exporter, Record, ItemType};
//!
//! let mut record = Record::new(ItemType::Book);
//! record.title = Some("Kindred".to_string());
//!
//! let mut lines = Vec::new();
//! Exporter::default().export([record], &mut lines).unwrap();
//! assert_eq!(
//!     lines,
//!     vec![
//!         "%%tana%%",
//!         "- Kindred #[[book]]",
//!         "  - Title:: Kindred",
//!         "  - Source Status:: [[📚 To Read]]",
//!     ]
//! );
//! ```

pub mod contributors;
pub mod error;
pub mod exporter;
pub mod io;
pub mod markup;
pub mod schema;
pub mod sink;
pub mod writers;

pub use contributors::{filter_contributors, CreatorGroup};
pub use error::ExportError;
pub use exporter::{ExportSummary, Exporter};
pub use markup::{MarkupError, Vocabulary};
pub use schema::{schema_for, Schema, Step};
pub use sink::{LineSink, WriteSink};
pub use writers::FieldWriter;

// Re-export the record model for convenience
pub use tanabib_core::{Contributor, ExportConfig, ItemType, Record, Tag};
