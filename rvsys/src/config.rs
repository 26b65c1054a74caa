use std::{fs::File, io::Read, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Macro name the RISC-V listing uses for every record.
pub const DEFAULT_MACRO_NAME: &str = "SYSCALL";

/// Settings used when reading a `SYSCALL(n,"name","proto")` listing.
/// Please use [`ListingConfigBuilder`] if you want to build it from code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Identifier in front of the opening parenthesis of each record.
    pub macro_name: String,
    /// Skip empty (or whitespace only) lines instead of rejecting them.
    pub allow_blank_lines: bool,
    /// Skip lines starting with `//` instead of rejecting them.
    pub allow_comments: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { macro_name: DEFAULT_MACRO_NAME.to_string(), allow_blank_lines: false, allow_comments: false }
    }
}

impl ListingConfig {
    /// A config that skips blank lines and `//` comments, for hand-maintained listings.
    pub fn lenient() -> Self {
        ListingConfigBuilder::new().with_blank_lines(true).with_comments(true).get()
    }

    /// Read a config from a JSON file. Missing fields take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).with_context(|| format!("open listing config {:?}", path))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).with_context(|| format!("read listing config {:?}", path))?;
        Self::from_json_slice(&bytes).with_context(|| format!("parse listing config {:?}", path))
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let config = serde_json::from_slice(bytes)?;
        log::debug!("listing config: {:?}", config);
        Ok(config)
    }
}

/// `ListingConfigBuilder` is a convenience builder to create a `ListingConfig` from code.
pub struct ListingConfigBuilder {
    config: ListingConfig,
}

impl ListingConfigBuilder {
    pub fn new() -> Self {
        Self { config: Default::default() }
    }

    pub fn with_macro_name(mut self, macro_name: impl Into<String>) -> Self {
        self.config.macro_name = macro_name.into();
        self
    }

    pub fn with_blank_lines(mut self, allow: bool) -> Self {
        self.config.allow_blank_lines = allow;
        self
    }

    pub fn with_comments(mut self, allow: bool) -> Self {
        self.config.allow_comments = allow;
        self
    }

    /// Retrieves the configuration built
    pub fn get(self) -> ListingConfig {
        self.config
    }
}

impl Default for ListingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let c = ListingConfig::default();
        assert_eq!(c.macro_name, "SYSCALL");
        assert!(!c.allow_blank_lines);
        assert!(!c.allow_comments);
    }

    #[test]
    fn json_fills_missing_fields() {
        let c = ListingConfig::from_json_slice(br#"{ "allow_comments": true }"#).unwrap();
        assert_eq!(c.macro_name, DEFAULT_MACRO_NAME);
        assert!(c.allow_comments);
        assert!(!c.allow_blank_lines);
    }

    #[test]
    fn builder_sets_fields() {
        let c = ListingConfigBuilder::new().with_macro_name("__SYSCALL").with_blank_lines(true).get();
        assert_eq!(c.macro_name, "__SYSCALL");
        assert!(c.allow_blank_lines);
        assert!(!c.allow_comments);
        assert_eq!(ListingConfig::lenient(), ListingConfigBuilder::new().with_blank_lines(true).with_comments(true).get());
    }

    #[test]
    fn json_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("rvsys-config-{}.json", std::process::id()));
        let c = ListingConfig::lenient();
        std::fs::write(&path, serde_json::to_vec(&c).unwrap()).unwrap();
        let read = ListingConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read, c);
    }

    #[test]
    fn missing_json_file_is_an_error() {
        let err = ListingConfig::from_json_file("/nonexistent/rvsys.json").unwrap_err();
        assert!(format!("{:#}", err).contains("open listing config"));
    }
}
