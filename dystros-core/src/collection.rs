//! Sets of collections rooted in one directory.

use std::path::{Path, PathBuf};

use crate::error::{DystrosError, DystrosResult};
use crate::extract::{Components, extract_events, extract_todos};
use crate::loader::{CalendarFiles, gather_calendars};

/// Root directory plus the kinds (subdirectory names) to read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    pub inputdir: PathBuf,
    pub kinds: Vec<String>,
}

impl CollectionConfig {
    pub fn new(inputdir: impl Into<PathBuf>, kinds: Vec<String>) -> Self {
        CollectionConfig {
            inputdir: inputdir.into(),
            kinds,
        }
    }

    /// Build from the `--inputdir` / `--kind` option values.
    ///
    /// `kind` is a comma-separated list; blank entries are dropped. A leading
    /// `~` in `inputdir` is expanded.
    pub fn from_options(inputdir: Option<&str>, kind: &str) -> DystrosResult<Self> {
        let inputdir = inputdir
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DystrosError::Config("No input directory set".into()))?;

        let kinds: Vec<String> = kind
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        if kinds.is_empty() {
            return Err(DystrosError::Config(format!(
                "No collection kinds in '{}'",
                kind
            )));
        }

        let inputdir = PathBuf::from(shellexpand::tilde(inputdir).into_owned());

        Ok(CollectionConfig { inputdir, kinds })
    }
}

/// Set of iCalendar collections.
#[derive(Debug, Clone)]
pub struct CollectionSet {
    config: CollectionConfig,
}

impl CollectionSet {
    pub fn new(inputdir: impl Into<PathBuf>, kinds: Vec<String>) -> Self {
        Self::from_config(CollectionConfig::new(inputdir, kinds))
    }

    pub fn from_config(config: CollectionConfig) -> Self {
        CollectionSet { config }
    }

    pub fn from_options(inputdir: Option<&str>, kind: &str) -> DystrosResult<Self> {
        CollectionConfig::from_options(inputdir, kind).map(Self::from_config)
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn inputdir(&self) -> &Path {
        &self.config.inputdir
    }

    /// One directory per configured kind, in configuration order.
    pub fn collection_paths(&self) -> Vec<PathBuf> {
        self.config
            .kinds
            .iter()
            .map(|kind| self.config.inputdir.join(kind))
            .collect()
    }

    pub fn calendars(&self) -> CalendarFiles {
        gather_calendars(self.collection_paths())
    }

    /// All VEVENTs across the collections.
    pub fn events(&self) -> Components<CalendarFiles> {
        extract_events(self.calendars())
    }

    /// All VTODOs across the collections.
    pub fn todos(&self) -> Components<CalendarFiles> {
        extract_todos(self.calendars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options_splits_kinds() {
        let config = CollectionConfig::from_options(Some("/srv/dav"), "calendar, tasks,,").unwrap();

        assert_eq!(config.inputdir, PathBuf::from("/srv/dav"));
        assert_eq!(config.kinds, vec!["calendar".to_string(), "tasks".to_string()]);
    }

    #[test]
    fn test_from_options_requires_inputdir() {
        let err = CollectionConfig::from_options(None, "calendar").unwrap_err();
        assert!(matches!(err, DystrosError::Config(_)));

        let err = CollectionConfig::from_options(Some("  "), "calendar").unwrap_err();
        assert!(matches!(err, DystrosError::Config(_)));
    }

    #[test]
    fn test_from_options_requires_a_kind() {
        let err = CollectionConfig::from_options(Some("/srv/dav"), " , ").unwrap_err();
        assert!(matches!(err, DystrosError::Config(_)));
    }

    #[test]
    fn test_from_options_expands_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = CollectionConfig::from_options(Some("~/dav"), "calendar").unwrap();
        assert_eq!(config.inputdir, home.join("dav"));
    }

    #[test]
    fn test_collection_paths_follow_kind_order() {
        let set = CollectionSet::new("/root", vec!["tasks".into(), "calendar".into()]);

        assert_eq!(
            set.collection_paths(),
            vec![PathBuf::from("/root/tasks"), PathBuf::from("/root/calendar")]
        );
    }
}
