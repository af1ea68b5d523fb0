//! Statement rendering strategies
//!
//! A [`StatementFormatter`] turns a [`StatementSnapshot`] into text. Callers pick
//! one by identifier through [`resolve_formatter`]; the identifier table is
//! fixed and anything outside it is rejected with
//! [`StatementError::UnsupportedFormat`].

mod html;
mod json;
mod plain;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use plain::PlainTextFormatter;

use crate::domain::StatementSnapshot;
use crate::error::{Result, StatementError};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Rendering strategy for a statement snapshot
pub trait StatementFormatter: Send + Sync {
    /// Canonical identifier this formatter is registered under
    fn format_id(&self) -> &'static str;

    fn render(&self, snapshot: &StatementSnapshot) -> Result<String>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementFormat {
    PlainText,
    Html,
    Json,
}

impl StatementFormat {
    /// Identifier table, canonical names first
    pub const IDENTIFIERS: &'static [(&'static str, StatementFormat)] = &[
        ("string", StatementFormat::PlainText),
        ("html", StatementFormat::Html),
        ("json", StatementFormat::Json),
        ("text", StatementFormat::PlainText),
        ("plain", StatementFormat::PlainText),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementFormat::PlainText => "string",
            StatementFormat::Html => "html",
            StatementFormat::Json => "json",
        }
    }

    pub fn formatter(&self) -> Box<dyn StatementFormatter> {
        match self {
            StatementFormat::PlainText => Box::new(PlainTextFormatter),
            StatementFormat::Html => Box::new(HtmlFormatter),
            StatementFormat::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatementFormat {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::IDENTIFIERS
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(wanted))
            .map(|(_, format)| *format)
            .ok_or_else(|| StatementError::unsupported_format(s))
    }
}

/// Resolve a format identifier such as `"string"` or `"html"` to its formatter.
pub fn resolve_formatter(identifier: &str) -> Result<Box<dyn StatementFormatter>> {
    let format = identifier.parse::<StatementFormat>()?;
    debug!(identifier, format = %format, "Resolved statement formatter");
    Ok(format.formatter())
}
