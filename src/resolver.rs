use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEBUG_CONFIG: &str = "DEBUG";
pub const RELEASE_CONFIG: &str = "RELEASE";

const DEBUG_FRAMEWORK: &str = "../../lib/mac/debug/LottieExporterPlugin.framework";
const DEBUG_INSTALL_DIR: &str = "/Users/ranawat/Perforce/ranawat_animate_newMBP/main/flashpro/src/Flash/lib/mac/debug/Adobe Animate Prerelease.app/Contents/Frameworks";

const RELEASE_FRAMEWORK: &str = "../../lib/mac/release/LottieExporterPlugin.framework";
const RELEASE_INSTALL_DIR: &str = "/Users/ranawat/Perforce/ranawat_animate_newMBP/main/flashpro/src/Flash/lib/mac/release/Adobe Animate Prerelease.app/Contents/Frameworks";

/// A build output bundle and the directory it gets copied into.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfigPathEntry {
    pub source: String,
    pub destination: String,
}

impl ConfigPathEntry {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> ConfigPathEntry {
        ConfigPathEntry {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for ConfigPathEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" -> \"{}\"", self.source, self.destination)
    }
}

/// Configuration name to copy paths. Names are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathTable(HashMap<String, Vec<ConfigPathEntry>>);

impl PathTable {
    pub fn builtin() -> PathTable {
        let mut table = HashMap::new();
        table.insert(
            DEBUG_CONFIG.to_string(),
            vec![ConfigPathEntry::new(DEBUG_FRAMEWORK, DEBUG_INSTALL_DIR)],
        );
        table.insert(
            RELEASE_CONFIG.to_string(),
            vec![ConfigPathEntry::new(RELEASE_FRAMEWORK, RELEASE_INSTALL_DIR)],
        );
        PathTable(table)
    }

    pub fn get(&self, config: &str) -> Option<&[ConfigPathEntry]> {
        self.0.get(config).map(Vec::as_slice)
    }

    pub fn lookup(&self, config: &str) -> Option<Vec<ConfigPathEntry>> {
        self.0.get(config).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names = self.0.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in `other` replace any list registered under the same name.
    pub fn extend(mut self, other: PathTable) -> PathTable {
        self.0.extend(other.0);
        self
    }
}

impl From<HashMap<String, Vec<ConfigPathEntry>>> for PathTable {
    fn from(val: HashMap<String, Vec<ConfigPathEntry>>) -> PathTable {
        PathTable(val)
    }
}

impl fmt::Display for PathTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for name in self.names() {
            write!(f, "\n{}:", name)?;
            for entry in self.get(name).unwrap_or_default() {
                write!(f, "\n    {}", entry)?
            }
        }
        Ok(())
    }
}

/// Copy paths for a build configuration, or `None` if the name is unknown.
pub fn resolve(config: &str) -> Option<Vec<ConfigPathEntry>> {
    PathTable::builtin().lookup(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_debug() {
        let entries = resolve("DEBUG").expect("DEBUG should resolve");

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].source,
            "../../lib/mac/debug/LottieExporterPlugin.framework"
        );
        assert!(entries[0].destination.starts_with('/'));
        assert!(entries[0]
            .destination
            .ends_with("/debug/Adobe Animate Prerelease.app/Contents/Frameworks"));
    }

    #[test]
    fn test_resolve_release() {
        let entries = resolve("RELEASE").expect("RELEASE should resolve");

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].source,
            "../../lib/mac/release/LottieExporterPlugin.framework"
        );
        assert!(entries[0].destination.starts_with('/'));
        assert!(entries[0]
            .destination
            .ends_with("/release/Adobe Animate Prerelease.app/Contents/Frameworks"));
    }

    #[test]
    fn test_resolve_unknown() {
        for config in [
            "", "debug", "Debug", "release", "Release", " DEBUG", "DEBUG ", "PROFILE", "garbage",
        ] {
            assert!(resolve(config).is_none(), "{:?} should not resolve", config);
        }
    }

    #[test]
    fn test_resolve_is_repeatable() {
        assert_eq!(resolve("DEBUG"), resolve("DEBUG"));
        assert_eq!(resolve("RELEASE"), resolve("RELEASE"));
        assert_ne!(resolve("DEBUG"), resolve("RELEASE"));
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(PathTable::builtin().names(), ["DEBUG", "RELEASE"]);
        assert!(PathTable::default().is_empty());
    }

    #[test]
    fn test_extend_replaces_by_name() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "DEBUG".to_string(),
            vec![
                ConfigPathEntry::new("a.framework", "/tmp/one"),
                ConfigPathEntry::new("b.framework", "/tmp/two"),
            ],
        );
        overrides.insert(
            "PROFILE".to_string(),
            vec![ConfigPathEntry::new("c.framework", "/tmp/three")],
        );

        let table = PathTable::builtin().extend(overrides.into());

        assert_eq!(table.names(), ["DEBUG", "PROFILE", "RELEASE"]);
        let debug = table.get("DEBUG").unwrap();
        assert_eq!(debug.len(), 2);
        assert_eq!(debug[1], ConfigPathEntry::new("b.framework", "/tmp/two"));
        assert_eq!(table.lookup("RELEASE"), resolve("RELEASE"));

        // the fixed table is untouched
        assert_eq!(resolve("DEBUG").unwrap().len(), 1);
        assert!(resolve("PROFILE").is_none());
    }
}
