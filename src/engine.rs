//! The conversion engine.
//!
//! Walks the top-level elements of a parsed [`ResourceDocument`], classifies
//! each by type, applies exclusion, dispatches text through the converter
//! registry, flattens arrays, optionally attaches trailing comments, and
//! accumulates everything into a [`ResourceMap`].
//!
//! Classification is deliberately permissive: elements with no derivable
//! type or no `name` attribute are skipped without error, and unregistered
//! types pass their text through unconverted. Downstream consumers rely on
//! partially-annotated resource files converting without complaint.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{
    converters::ConverterRegistry,
    document::{self, ResourceDocument},
    error::Error,
    exclude::Matcher,
    options::Options,
    value::Value,
};

/// One output group: resource name to converted value.
pub type Group = BTreeMap<String, Value>;

/// The conversion result: group name to group.
///
/// Groups are created lazily on first use. A map can be passed back into
/// [`Converter::convert_into`] to accumulate results across documents.
pub type ResourceMap = BTreeMap<String, Group>;

/// Converts resource documents into a [`ResourceMap`].
///
/// Owns the converter registry so tests and embedders can inject custom
/// converters.
///
/// # Example
///
/// ```rust
/// use resmap::{Converter, Options};
///
/// let xml = r#"<resources><bool name="debug">true</bool></resources>"#;
/// let map = Converter::new().convert_str(xml, &Options::new())?;
/// assert_eq!(map["bool"]["debug"].as_bool(), Some(true));
/// # Ok::<(), resmap::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    registry: ConverterRegistry,
}

impl Converter {
    /// Creates a converter with the built-in registry (`bool`, `integer`,
    /// `string`).
    pub fn new() -> Self {
        Self {
            registry: ConverterRegistry::new(),
        }
    }

    /// Creates a converter with a caller-supplied registry.
    pub fn with_registry(registry: ConverterRegistry) -> Self {
        Self { registry }
    }

    /// Converts an XML string into a fresh [`ResourceMap`].
    pub fn convert_str(&self, xml: &str, options: &Options) -> Result<ResourceMap, Error> {
        let mut map = ResourceMap::new();
        self.convert_into(xml, options, &mut map)?;
        Ok(map)
    }

    /// Converts an XML string into an existing map, extending it in place.
    ///
    /// Groups and names already present stay untouched unless the new
    /// document writes the same `(group, name)` pair, in which case the new
    /// value wins.
    pub fn convert_into(
        &self,
        xml: &str,
        options: &Options,
        map: &mut ResourceMap,
    ) -> Result<(), Error> {
        let document = ResourceDocument::parse(xml)?;
        self.apply(&document, options, map)
    }

    /// Drains a reader to memory (decoding to UTF-8), then converts.
    pub fn convert_reader<R: Read>(
        &self,
        reader: R,
        options: &Options,
    ) -> Result<ResourceMap, Error> {
        let xml = document::drain_to_string(reader)?;
        self.convert_str(&xml, options)
    }

    /// Converts byte content, decoding to UTF-8 first.
    pub fn convert_bytes(&self, bytes: &[u8], options: &Options) -> Result<ResourceMap, Error> {
        self.convert_reader(std::io::Cursor::new(bytes), options)
    }

    /// Reads and converts a resource file.
    pub fn convert_file<P: AsRef<Path>>(
        &self,
        path: P,
        options: &Options,
    ) -> Result<ResourceMap, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        self.convert_reader(file, options)
    }

    fn apply(
        &self,
        document: &ResourceDocument,
        options: &Options,
        map: &mut ResourceMap,
    ) -> Result<(), Error> {
        let exclude = match options.exclude.as_deref() {
            Some(pattern) => Some(Matcher::compile(pattern)?),
            None => None,
        };

        for element in document.elements() {
            let Some(effective_type) = element.effective_type() else {
                continue;
            };

            // "string-array" lands in group "array" with base type "string".
            let (group, base_type) = match effective_type.strip_suffix("-array") {
                Some(base) => ("array", base),
                None => (effective_type, effective_type),
            };

            // Unnamed elements have nowhere to be stored; skip them.
            let Some(name) = element.name() else {
                continue;
            };

            if let Some(matcher) = &exclude {
                if matcher.matches(name) {
                    continue;
                }
            }

            let value = if group == "array" {
                Value::Array(
                    element
                        .items()
                        .iter()
                        .map(|item| self.registry.convert(base_type, item))
                        .collect(),
                )
            } else {
                self.registry.convert(base_type, element.text())
            };

            let value = match element.trailing_comment() {
                Some(comment) if options.include_comments => value.with_comment(comment),
                _ => value,
            };

            map.entry(group.to_string())
                .or_default()
                .insert(name.to_string(), value);
        }

        Ok(())
    }
}

/// Converts an XML string with a default [`Converter`].
pub fn convert(xml: &str, options: &Options) -> Result<ResourceMap, Error> {
    Converter::new().convert_str(xml, options)
}

/// Converts an XML string into an existing map with a default [`Converter`].
pub fn convert_into(xml: &str, options: &Options, map: &mut ResourceMap) -> Result<(), Error> {
    Converter::new().convert_into(xml, options, map)
}
