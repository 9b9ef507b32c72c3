/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use tanabib_core::ConfigError;
use tanabib_date::DateError;
use thiserror::Error;

use crate::markup::MarkupError;

/// Everything that can stop an export.
///
/// Missing fields are never errors. Any of these aborts the whole run; lines
/// already written to the sink stay there.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("{field} of {record}: {source}")]
    Date {
        field: &'static str,
        record: String,
        #[source]
        source: DateError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0} records: {1}")]
    ParseError(String, String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
