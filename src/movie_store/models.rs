//! Movie catalog models.
//!
//! `Movie` is the stored entity, `MovieRecord` is the validated field set
//! before an id is assigned, and `MovieSubmission` is the raw input shape
//! shared by the JSON API and the HTML form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated movie record, without its id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    pub director: Option<String>,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub source: Option<String>,
    pub source_id: Option<String>,
}

/// A stored movie: a validated record plus its server-generated id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub director: Option<String>,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub source: Option<String>,
    pub source_id: Option<String>,
}

impl Movie {
    pub fn from_record(id: Uuid, record: MovieRecord) -> Self {
        Movie {
            id,
            title: record.title,
            year: record.year,
            director: record.director,
            synopsis: record.synopsis,
            poster_url: record.poster_url,
            source: record.source,
            source_id: record.source_id,
        }
    }
}

/// A year as submitted: the JSON API sends integers, the HTML form sends
/// text. Parsing and range checking happen in validation.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Int(i64),
    Text(String),
}

/// Raw, unvalidated field values from a JSON body or form-encoded fields.
///
/// Every field is optional at this level so that missing-field errors are
/// reported by the validator rather than by request deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MovieSubmission {
    pub title: Option<String>,
    pub year: Option<YearValue>,
    pub director: Option<String>,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub source: Option<String>,
    pub source_id: Option<String>,
}
