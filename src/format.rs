//! Output format resolution for downstream consumers.
//!
//! The conversion path never formats anything itself; callers that want a
//! textual rendering of a [`ResourceMap`] resolve a formatter by name. The
//! built-in set covers `json`; anything else must be registered on a
//! [`FormatRegistry`] first.

use std::collections::HashMap;

use crate::{engine::ResourceMap, error::Error};

/// Renders a [`ResourceMap`] to text.
pub type FormatFn = fn(&ResourceMap) -> Result<String, Error>;

/// Resolves format names, built-ins first, then registered externals.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    external: HashMap<String, FormatFn>,
}

impl FormatRegistry {
    /// Creates a registry with no external formatters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an external formatter under `name`.
    ///
    /// Built-ins always win; registering a built-in name has no effect on
    /// resolution.
    pub fn register(&mut self, name: impl Into<String>, format: FormatFn) {
        self.external.insert(name.into(), format);
    }

    /// Resolves `name` to a formatter, or [`Error::UnknownFormat`] when
    /// neither the built-ins nor the registered externals know it.
    pub fn resolve(&self, name: &str) -> Result<FormatFn, Error> {
        builtin(name)
            .or_else(|| self.external.get(name).copied())
            .ok_or_else(|| Error::UnknownFormat(name.to_string()))
    }
}

/// Resolves a built-in formatter by name.
///
/// Shorthand for callers that never register externals.
pub fn resolve_format(name: &str) -> Result<FormatFn, Error> {
    FormatRegistry::new().resolve(name)
}

fn builtin(name: &str) -> Option<FormatFn> {
    match name {
        "json" => Some(format_json),
        _ => None,
    }
}

/// Pretty-printed JSON. Comments do not survive: a commented value
/// serializes as its plain value.
fn format_json(map: &ResourceMap) -> Result<String, Error> {
    let mut out = serde_json::to_string_pretty(map)?;
    out.push('\n');
    Ok(out)
}
