//! Bijective base-26 column labels.
//!
//! Spreadsheet columns count A=1, B=2, ..., Z=26, AA=27, AB=28, ...
//! This is a positional numeral system with digits 1-26 and no zero digit,
//! which is why both conversions subtract 1 before each division by 26.

use thiserror::Error;

/// Errors from column label conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Invalid character '{ch}' in column label: {label}")]
    InvalidLabel { label: String, ch: char },

    #[error("Column label too large: {0}")]
    LabelOverflow(String),

    #[error("Invalid column index: {0}")]
    InvalidIndex(i64),
}

/// Decode a column label into its one-based index (A=1, Z=26, AA=27).
///
/// Case-insensitive. The empty label decodes to 0.
pub fn label_to_index(label: &str) -> Result<i64, LabelError> {
    let mut index: i64 = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(LabelError::InvalidLabel {
                label: label.to_string(),
                ch,
            });
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as i64 + 1;
        index = index
            .checked_mul(26)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| LabelError::LabelOverflow(label.to_string()))?;
    }
    Ok(index)
}

/// Encode a one-based column index as a label (1 -> "A", 26 -> "Z", 27 -> "AA").
///
/// Zero encodes to the empty string; negative indices are rejected.
pub fn index_to_label(index: i64) -> Result<String, LabelError> {
    if index < 0 {
        return Err(LabelError::InvalidIndex(index));
    }
    let mut label = String::new();
    let mut n = index;
    while n > 0 {
        n -= 1;
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    Ok(label)
}
