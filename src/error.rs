//! All error types for the resmap crate.
//!
//! These are returned from all fallible operations (parsing, conversion,
//! format resolution).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("invalid exclude pattern: {0}")]
    InvalidPattern(String),

    #[error("unknown format `{0}`")]
    UnknownFormat(String),
}
