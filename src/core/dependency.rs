//! Declared native dependencies of an extension.

use std::fmt;

/// Ordered list of vcpkg port names required by the extension.
///
/// Parsed once per build from a space-separated ledger. Names are trimmed
/// and empty fragments skipped; duplicates are kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    names: Vec<String>,
}

impl DependencySet {
    pub fn new(names: Vec<String>) -> Self {
        DependencySet { names }
    }

    /// Parse a space-separated declaration such as `"eigen3 fmt zlib\n"`.
    pub fn parse(declaration: &str) -> Self {
        let names = declaration
            .split(' ')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        DependencySet { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}
