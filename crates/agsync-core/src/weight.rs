//! Scraped weight text to catalog weight conversion.
//!
//! The supplier renders weights as free text such as `"2.5kg"` or
//! `"0.75 KG"`. Only kilogram values are applied; anything else is rejected
//! and the caller drops the weight update for that record.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static KG_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)kg").expect("valid kg marker regex"));

/// Unit accepted by the catalog's variant `weight_unit` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
}

impl WeightUnit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightParseError {
    #[error("weight \"{raw}\" has no kg unit marker")]
    MissingUnit { raw: String },

    #[error("weight \"{raw}\" is not a number of kilograms")]
    InvalidNumber { raw: String },
}

/// Parses scraped weight text into kilograms.
///
/// The `kg` marker is matched case-insensitively and every occurrence is
/// removed; the remaining text, trimmed, must parse as a finite,
/// non-negative `f64`.
///
/// # Errors
///
/// - [`WeightParseError::MissingUnit`] when no `kg` marker is present.
/// - [`WeightParseError::InvalidNumber`] when the remainder is not a number.
pub fn parse_weight(raw: &str) -> Result<Weight, WeightParseError> {
    if !KG_MARKER_RE.is_match(raw) {
        return Err(WeightParseError::MissingUnit {
            raw: raw.to_owned(),
        });
    }

    let numeric = KG_MARKER_RE.replace_all(raw, "");
    let value = numeric
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| WeightParseError::InvalidNumber {
            raw: raw.to_owned(),
        })?;

    Ok(Weight {
        value,
        unit: WeightUnit::Kilograms,
    })
}
