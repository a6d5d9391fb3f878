//! Wildcard exclusion matching.
//!
//! Compiles a shell-style wildcard pattern (`*` matches any run of
//! characters, `?` matches exactly one) into an anchored regex used to drop
//! resources from the output by name.

use regex::Regex;

use crate::error::Error;

/// A compiled name-matching predicate.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compiles a wildcard pattern into a matcher.
    ///
    /// The pattern must match the whole resource name: `tmp_*` matches
    /// `tmp_foo` but not `foo_tmp`.
    pub fn compile(pattern: &str) -> Result<Self, Error> {
        let mut source = String::with_capacity(pattern.len() + 8);
        source.push('^');
        for ch in pattern.chars() {
            match ch {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                ch => source.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| Error::InvalidPattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Whether `name` matches the pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
