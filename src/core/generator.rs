//! CMake generator classification.

use serde::Serialize;

/// Generator names that bake the configuration in at configure time.
const SINGLE_CONFIG_MARKERS: [&str; 2] = ["NMake", "Ninja"];

/// Legacy generator names that carry the architecture ("Visual Studio 15 2017 Win64").
const ARCH_MARKERS: [&str; 2] = ["ARM", "Win64"];

/// A requested CMake generator and what its name implies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratorDescriptor {
    /// Generator name; empty means "let CMake pick"
    pub name: String,
    /// Whether the configuration is chosen at configure time
    pub is_single_config: bool,
    /// Whether the name already encodes an architecture
    pub has_arch_in_name: bool,
}

impl GeneratorDescriptor {
    /// Classify a generator by name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let is_single_config = SINGLE_CONFIG_MARKERS.iter().any(|m| name.contains(m));
        let has_arch_in_name = ARCH_MARKERS.iter().any(|m| name.contains(m));

        GeneratorDescriptor {
            name,
            is_single_config,
            has_arch_in_name,
        }
    }

    /// No generator was requested.
    pub fn is_auto(&self) -> bool {
        self.name.is_empty()
    }
}
