#![forbid(unsafe_code)]
//! Convert Android-style resource XML into a structured value map.
//!
//! A `<resources>` document converts into a nested mapping of
//! `group -> name -> value`, where the group derives from each element's
//! type (`string`, `bool`, `integer`, custom types, and a collapsed `array`
//! group for `*-array` types). Trailing XML comments can be captured as
//! per-value metadata, and resources can be dropped by wildcard name
//! pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use resmap::{Options, convert};
//!
//! let xml = r#"
//! <resources>
//!     <string name="app_name">Example</string><!-- shown in launcher -->
//!     <bool name="debug">false</bool>
//!     <string-array name="planets">
//!         <item>Mercury</item>
//!         <item>Venus</item>
//!     </string-array>
//! </resources>
//! "#;
//!
//! let map = convert(xml, &Options::new().with_comments(true))?;
//! assert_eq!(map["string"]["app_name"], "Example");
//! assert_eq!(map["string"]["app_name"].comment(), Some("shown in launcher"));
//! assert_eq!(map["bool"]["debug"].as_bool(), Some(false));
//! assert_eq!(map["array"]["planets"].as_array().unwrap().len(), 2);
//! # Ok::<(), resmap::Error>(())
//! ```
//!
//! # Features
//!
//! - Type dispatch through an injectable converter registry; unregistered
//!   types pass through as plain text
//! - `*-array` flattening into ordered value sequences
//! - Trailing-comment capture without changing value semantics
//! - Shell-style wildcard exclusion by resource name
//! - Accumulation into a caller-supplied map across multiple documents
//! - Named output formatters (`json` built in, externals registrable)

pub mod converters;
pub mod document;
pub mod engine;
pub mod error;
pub mod exclude;
pub mod format;
pub mod options;
pub mod value;

// Re-export most used types for easy consumption
pub use crate::{
    converters::ConverterRegistry,
    document::{ResourceDocument, ResourceElement},
    engine::{Converter, Group, ResourceMap, convert, convert_into},
    error::Error,
    format::{FormatFn, FormatRegistry, resolve_format},
    options::Options,
    value::Value,
};
