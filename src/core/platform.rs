//! Host platform description: OS family, platform tag, compiler family.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::ExtBuildError;

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    /// Detect the family of the running host.
    pub fn host() -> Self {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == OsFamily::Windows
    }

    /// Path separator used when writing paths for this family.
    pub fn path_separator(self) -> char {
        match self {
            OsFamily::Windows => '\\',
            OsFamily::Unix => '/',
        }
    }

    /// Executable suffix (`.exe` on Windows).
    pub fn exe_suffix(self) -> &'static str {
        match self {
            OsFamily::Windows => ".exe",
            OsFamily::Unix => "",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Windows => write!(f, "windows"),
            OsFamily::Unix => write!(f, "unix"),
        }
    }
}

/// Compiler family, named the way Python packaging front ends name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerFamily {
    /// Visual C++ (cl.exe), driven through multi-config IDE generators.
    Msvc,
    /// Any Unix-style compiler driver (gcc, clang, cc).
    Unix,
    /// MinGW gcc on Windows.
    Mingw,
}

impl CompilerFamily {
    /// Default compiler family for the running host.
    pub fn host_default() -> Self {
        if cfg!(windows) {
            CompilerFamily::Msvc
        } else {
            CompilerFamily::Unix
        }
    }

    pub fn is_msvc(self) -> bool {
        self == CompilerFamily::Msvc
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompilerFamily::Msvc => "msvc",
            CompilerFamily::Unix => "unix",
            CompilerFamily::Mingw => "mingw32",
        }
    }
}

impl FromStr for CompilerFamily {
    type Err = ExtBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "msvc" => Ok(CompilerFamily::Msvc),
            "unix" | "gcc" | "clang" => Ok(CompilerFamily::Unix),
            "mingw32" | "mingw" => Ok(CompilerFamily::Mingw),
            _ => Err(ExtBuildError::InvalidCompiler(s.to_string())),
        }
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual Studio generator platform, selected with `cmake -A`.
///
/// Only these four platform tags have a mapping; anything else on the
/// multi-config MSVC path is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VsPlatform {
    Win32,
    X64,
    Arm,
    Arm64,
}

impl VsPlatform {
    /// Map a packaging platform tag (`win-amd64`, ...) to a generator platform.
    pub fn from_plat_name(plat_name: &str) -> Option<Self> {
        match plat_name {
            "win32" => Some(VsPlatform::Win32),
            "win-amd64" => Some(VsPlatform::X64),
            "win-arm32" => Some(VsPlatform::Arm),
            "win-arm64" => Some(VsPlatform::Arm64),
            _ => None,
        }
    }

    /// The token CMake expects after `-A`.
    pub fn as_str(self) -> &'static str {
        match self {
            VsPlatform::Win32 => "Win32",
            VsPlatform::X64 => "x64",
            VsPlatform::Arm => "ARM",
            VsPlatform::Arm64 => "ARM64",
        }
    }
}

impl fmt::Display for VsPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything about the host that steers argument synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformDescriptor {
    /// Operating system family
    pub os: OsFamily,
    /// Packaging platform tag (win32, win-amd64, linux-x86_64, ...)
    pub plat_name: String,
    /// Active compiler family
    pub compiler: CompilerFamily,
}

impl PlatformDescriptor {
    pub fn new(os: OsFamily, plat_name: impl Into<String>, compiler: CompilerFamily) -> Self {
        PlatformDescriptor {
            os,
            plat_name: plat_name.into(),
            compiler,
        }
    }

    /// Describe the running host with its default compiler.
    pub fn host() -> Self {
        PlatformDescriptor::new(
            OsFamily::host(),
            host_plat_name(),
            CompilerFamily::host_default(),
        )
    }

    /// Replace the platform tag.
    pub fn with_plat_name(mut self, plat_name: impl Into<String>) -> Self {
        self.plat_name = plat_name.into();
        self
    }

    /// Replace the compiler family.
    pub fn with_compiler(mut self, compiler: CompilerFamily) -> Self {
        self.compiler = compiler;
        self
    }
}

/// Platform tag for the running host, in packaging notation.
pub fn host_plat_name() -> String {
    let arch = std::env::consts::ARCH;
    match std::env::consts::OS {
        "windows" => match arch {
            "x86" => "win32".to_string(),
            "x86_64" => "win-amd64".to_string(),
            "arm" => "win-arm32".to_string(),
            "aarch64" => "win-arm64".to_string(),
            other => format!("win-{}", other),
        },
        "macos" => format!("macosx-{}", arch),
        os => format!("{}-{}", os, arch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vs_platform_table() {
        assert_eq!(VsPlatform::from_plat_name("win32"), Some(VsPlatform::Win32));
        assert_eq!(VsPlatform::from_plat_name("win-amd64").unwrap().as_str(), "x64");
        assert_eq!(VsPlatform::from_plat_name("win-arm32").unwrap().as_str(), "ARM");
        assert_eq!(VsPlatform::from_plat_name("win-arm64").unwrap().as_str(), "ARM64");
        assert_eq!(VsPlatform::from_plat_name("linux-x86_64"), None);
        assert_eq!(VsPlatform::from_plat_name("zorbx"), None);
    }

    #[test]
    fn test_compiler_family_parse() {
        assert_eq!("msvc".parse::<CompilerFamily>().unwrap(), CompilerFamily::Msvc);
        assert_eq!("MSVC".parse::<CompilerFamily>().unwrap(), CompilerFamily::Msvc);
        assert_eq!("unix".parse::<CompilerFamily>().unwrap(), CompilerFamily::Unix);
        assert_eq!("mingw32".parse::<CompilerFamily>().unwrap(), CompilerFamily::Mingw);
        assert!("borland".parse::<CompilerFamily>().is_err());
    }

    #[test]
    fn test_path_separator() {
        assert_eq!(OsFamily::Windows.path_separator(), '\\');
        assert_eq!(OsFamily::Unix.path_separator(), '/');
    }

    #[test]
    fn test_host_plat_name_is_not_empty() {
        assert!(!host_plat_name().is_empty());
    }
}
