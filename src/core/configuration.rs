//! Build configuration (CMAKE_BUILD_TYPE).

use std::fmt;

use serde::Serialize;

/// Debug or Release, selected by the front end's debug flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BuildConfiguration {
    Debug,
    #[default]
    Release,
}

impl BuildConfiguration {
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            BuildConfiguration::Debug
        } else {
            BuildConfiguration::Release
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Release => "Release",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
