/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core types for tanabib.
//!
//! A [`Record`] is one bibliographic item as exported by Zotero. The
//! [`vocab`] module names every tag, field and status the Tana export can
//! emit, and [`ExportConfig`] carries the user's adjustments to them.

pub mod config;
pub mod record;
pub mod vocab;

pub use config::{ConfigError, ExportConfig, InitialStatus, NodeIds};
pub use record::{Contributor, ItemType, NumOrStr, Record, Tag};
pub use vocab::{Field, Medium, RelationTag, SourceStatus};
