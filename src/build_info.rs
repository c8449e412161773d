//! Build information module
//!
//! Compile-time build number and timestamp, embedded by `build.rs`.

use serde::Serialize;

use crate::units::{DisplaySystem, UNIT_ALIASES};

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("MENUPLAN_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("MENUPLAN_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// `str::parse` is not const, so digits are folded by hand
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build information structure for serialization
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Startup banner lines for a service rendering in `default_system`
pub fn startup_banner(default_system: DisplaySystem) -> Vec<String> {
    let info = BuildInfo::current();
    vec![
        format!("menuplan {} (build {}, {})", info.version, info.build_number, info.build_timestamp),
        format!(
            "units: {} aliases -> g/ml | default display: {}",
            UNIT_ALIASES.len(),
            default_system
        ),
    ]
}

/// Print the startup banner to stderr
pub fn print_startup_banner(default_system: DisplaySystem) {
    for line in startup_banner(default_system) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("1234"), Some(1234));
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("12a"), None);
    }

    #[test]
    fn test_banner_names_display_system_and_alias_count() {
        let banner = startup_banner(DisplaySystem::Imperial);
        assert_eq!(banner.len(), 2);
        assert!(banner[0].starts_with("menuplan "));
        assert!(banner[1].contains("default display: imperial"));
        assert!(banner[1].contains(&format!("{} aliases", UNIT_ALIASES.len())));
    }

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "menuplan");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
