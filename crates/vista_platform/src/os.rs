//! Operating system identification

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PlatformError;

/// Identifier of the operating system the application runs under
///
/// Displays as a lowercase name (`"ios"`, `"android"`, ...), which is the
/// string shown to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformOs {
    Ios,
    Android,
    Macos,
    Windows,
    Linux,
    Web,
}

impl PlatformOs {
    /// All known identifiers
    pub const ALL: [PlatformOs; 6] = [
        PlatformOs::Ios,
        PlatformOs::Android,
        PlatformOs::Macos,
        PlatformOs::Windows,
        PlatformOs::Linux,
        PlatformOs::Web,
    ];

    /// The identifier for the compiled target
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            PlatformOs::Ios
        } else if cfg!(target_os = "android") {
            PlatformOs::Android
        } else if cfg!(target_os = "macos") {
            PlatformOs::Macos
        } else if cfg!(target_os = "windows") {
            PlatformOs::Windows
        } else if cfg!(target_arch = "wasm32") {
            PlatformOs::Web
        } else {
            PlatformOs::Linux
        }
    }

    /// Lowercase name of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformOs::Ios => "ios",
            PlatformOs::Android => "android",
            PlatformOs::Macos => "macos",
            PlatformOs::Windows => "windows",
            PlatformOs::Linux => "linux",
            PlatformOs::Web => "web",
        }
    }

    /// Whether this is a phone/tablet platform
    pub fn is_mobile(&self) -> bool {
        matches!(self, PlatformOs::Ios | PlatformOs::Android)
    }
}

impl fmt::Display for PlatformOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformOs {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PlatformOs::ALL
            .into_iter()
            .find(|os| os.as_str() == name)
            .ok_or_else(|| PlatformError::Unsupported(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(PlatformOs::Ios.to_string(), "ios");
        assert_eq!(PlatformOs::Macos.to_string(), "macos");
    }

    #[test]
    fn test_parse_known_names() {
        for os in PlatformOs::ALL {
            assert_eq!(os.as_str().parse::<PlatformOs>().unwrap(), os);
        }
        assert_eq!(" Android ".parse::<PlatformOs>().unwrap(), PlatformOs::Android);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "beos".parse::<PlatformOs>().unwrap_err();
        assert!(matches!(err, PlatformError::Unsupported(ref name) if name == "beos"));
    }

    #[test]
    fn test_current_matches_target() {
        let os = PlatformOs::current();
        if cfg!(target_os = "macos") {
            assert_eq!(os, PlatformOs::Macos);
        } else if cfg!(target_os = "windows") {
            assert_eq!(os, PlatformOs::Windows);
        } else if cfg!(target_os = "linux") {
            assert_eq!(os, PlatformOs::Linux);
        }
        assert!(!os.is_mobile() || cfg!(any(target_os = "ios", target_os = "android")));
    }
}
