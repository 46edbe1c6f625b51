//! Edits to the separator and the numeric fields.
//!
//! Numeric fields hold whatever the user typed. An empty or unparsable value
//! is ignored and the setting keeps its previous value.

use crate::commands::{AppContext, CmdResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    MinLen,
    MaxLen,
    WordCount,
}

pub fn set_separator(ctx: &mut AppContext, value: String) -> CmdResult {
    ctx.config.separator = value;
    CmdResult::default()
}

pub fn set_numeric(ctx: &mut AppContext, field: NumericField, raw: &str) -> CmdResult {
    let Some(value) = parse_field(raw) else {
        tracing::debug!(?field, raw, "ignoring unparsable value");
        return CmdResult::default();
    };

    match field {
        NumericField::MinLen => ctx.config.min_len = value,
        NumericField::MaxLen => ctx.config.max_len = value,
        NumericField::WordCount => ctx.config.word_count = value,
    }
    CmdResult::default()
}

fn parse_field(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}
