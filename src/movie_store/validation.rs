//! Validation for movie submissions.
//!
//! Turns a raw `MovieSubmission` into a normalized `MovieRecord`, or fails
//! with the full list of field violations. Pure function of its input; no
//! store access and no framework types.

use super::models::{MovieRecord, MovieSubmission, YearValue};
use chrono::{Datelike, Utc};
use thiserror::Error;
use url::Url;

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1888;

/// A single field violation.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FieldError {
    #[error("field '{field}' is required but was empty")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be an integer, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("year must be between {min} and {max}, got {value}")]
    YearOutOfRange { min: i32, max: i32, value: i64 },

    #[error("field '{field}' must be an absolute URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
}

impl FieldError {
    /// Name of the field this violation is about.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::MissingField { field } => field,
            FieldError::NotAnInteger { field, .. } => field,
            FieldError::YearOutOfRange { .. } => "year",
            FieldError::InvalidUrl { field, .. } => field,
        }
    }
}

/// Validation failure carrying every field violation in the submission.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("invalid movie submission ({} field violations)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a raw submission into a normalized record.
///
/// All violations are collected and reported together. The year upper
/// bound tracks the wall clock, so releases announced for next year are
/// accepted. Empty or whitespace-only optional fields normalize to absent.
pub fn validate_submission(submission: MovieSubmission) -> ValidationResult<MovieRecord> {
    let mut errors = Vec::new();
    let max_year = Utc::now().year() + 1;

    let title = normalize(submission.title);
    if title.is_none() {
        errors.push(FieldError::MissingField { field: "title" });
    }

    let year = match submission.year {
        Some(YearValue::Int(value)) => check_year_range(value, max_year, &mut errors),
        Some(YearValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                errors.push(FieldError::MissingField { field: "year" });
                None
            } else {
                match text.parse::<i64>() {
                    Ok(value) => check_year_range(value, max_year, &mut errors),
                    Err(_) => {
                        errors.push(FieldError::NotAnInteger {
                            field: "year",
                            value: text.to_string(),
                        });
                        None
                    }
                }
            }
        }
        None => {
            errors.push(FieldError::MissingField { field: "year" });
            None
        }
    };

    let poster_url = match normalize(submission.poster_url) {
        Some(raw) => match Url::parse(&raw) {
            Ok(url) if url.has_host() => Some(raw),
            _ => {
                errors.push(FieldError::InvalidUrl {
                    field: "poster_url",
                    value: raw,
                });
                None
            }
        },
        None => None,
    };

    match (title, year) {
        (Some(title), Some(year)) if errors.is_empty() => Ok(MovieRecord {
            title,
            year,
            director: normalize(submission.director),
            synopsis: normalize(submission.synopsis),
            poster_url,
            source: normalize(submission.source),
            source_id: normalize(submission.source_id),
        }),
        _ => Err(ValidationError { errors }),
    }
}

fn check_year_range(value: i64, max_year: i32, errors: &mut Vec<FieldError>) -> Option<i32> {
    if value < MIN_YEAR as i64 || value > max_year as i64 {
        errors.push(FieldError::YearOutOfRange {
            min: MIN_YEAR,
            max: max_year,
            value,
        });
        None
    } else {
        Some(value as i32)
    }
}

/// Empty and whitespace-only optional fields count as absent.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
