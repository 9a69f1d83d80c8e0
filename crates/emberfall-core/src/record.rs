//! Comma-delimited save records
//!
//! A record is a single line of the form `<kind>,<field>,...,<value>`. The
//! final field takes everything after the last expected delimiter, so only
//! the leading fields must be free of commas.

/// Field separator used by every record
pub const DELIMITER: char = ',';

/// Errors raised while decoding a record or a save file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("malformed record '{record}': expected {expected} fields, found {found}")]
    MissingField {
        record: String,
        expected: usize,
        found: usize,
    },

    #[error("field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown record kind '{0}'")]
    UnknownKind(String),

    #[error("field '{field}' is out of range: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("expected {expected} lines, found {found}")]
    MissingLine { expected: usize, found: usize },
}

/// Split a record into exactly `fields` parts.
///
/// The last part keeps any further delimiters untouched.
pub fn split_record(record: &str, fields: usize) -> Result<Vec<&str>, FormatError> {
    let parts: Vec<&str> = record.splitn(fields, DELIMITER).collect();
    if parts.len() < fields {
        return Err(FormatError::MissingField {
            record: record.to_string(),
            expected: fields,
            found: parts.len(),
        });
    }
    Ok(parts)
}

/// Join fields with the record delimiter
pub fn join_record(fields: &[&str]) -> String {
    let mut record = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            record.push(DELIMITER);
        }
        record.push_str(field);
    }
    record
}

/// The kind token in front of the first delimiter, if there is one
pub fn record_kind(record: &str) -> Option<&str> {
    record.split_once(DELIMITER).map(|(kind, _)| kind)
}

/// Reject text that would not survive a record or line round trip.
///
/// The delimiter and line breaks are refused; anything else passes.
pub fn check_text(field: &'static str, value: &str) -> Result<(), FormatError> {
    match value.chars().find(|&c| c == DELIMITER || c == '\n' || c == '\r') {
        Some(c) => Err(FormatError::InvalidValue {
            field,
            reason: format!("contains {:?}", c),
        }),
        None => Ok(()),
    }
}

/// Parse a non-negative integer field, ignoring surrounding whitespace
pub fn parse_number(field: &'static str, value: &str) -> Result<u32, FormatError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| FormatError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
