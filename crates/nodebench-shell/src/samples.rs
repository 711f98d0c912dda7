//! Samples menu population from the samples directory.
//!
//! Reflects a two-level directory tree: graph files at the top level of
//! the samples directory, then one level of subdirectories with their own
//! graph files. Read-only; no invariants beyond reflecting current
//! contents at read time.

use std::path::{Path, PathBuf};

use nodebench_core::constants::GRAPH_FILE_EXTENSION;
use nodebench_core::error::CatalogError;

/// One entry of the samples menu.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMenuItem {
    /// Display label (file stem or directory name).
    pub label: String,
    /// Path of the sample to open; `None` for directory headers.
    pub path: Option<PathBuf>,
    /// Sub-menu entries for directory headers.
    pub children: Vec<SampleMenuItem>,
}

impl SampleMenuItem {
    /// A leaf entry opening a sample file.
    fn sample(path: PathBuf) -> Self {
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            label,
            path: Some(path),
            children: Vec::new(),
        }
    }

    /// A directory header with child entries.
    fn directory(label: String, children: Vec<SampleMenuItem>) -> Self {
        Self {
            label,
            path: None,
            children,
        }
    }
}

/// The "Samples" sub-menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SamplesMenu {
    /// Top-level entries: files first, then directory headers.
    pub items: Vec<SampleMenuItem>,
}

impl SamplesMenu {
    /// Build the menu from the samples directory.
    ///
    /// A missing directory yields an empty menu; an unreadable one is an
    /// error. Entries are sorted by label so the menu is stable across
    /// platforms.
    pub fn scan(dir: &Path) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Ok(Self::default());
        }

        let mut items = Self::graph_files_in(dir)?;
        let mut dirs: Vec<PathBuf> = Self::read_entries(dir)?
            .into_iter()
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();

        for sub in dirs {
            let label = sub
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let children = Self::graph_files_in(&sub)?;
            items.push(SampleMenuItem::directory(label, children));
        }

        Ok(Self { items })
    }

    /// Leaf entries for this menu and all sub-menus, flattened.
    pub fn sample_paths(&self) -> Vec<&Path> {
        let mut paths = Vec::new();
        for item in &self.items {
            if let Some(path) = &item.path {
                paths.push(path.as_path());
            }
            for child in &item.children {
                if let Some(path) = &child.path {
                    paths.push(path.as_path());
                }
            }
        }
        paths
    }

    fn read_entries(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
        let entries = std::fs::read_dir(dir).map_err(|source| CatalogError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::DirectoryUnreadable {
                path: dir.to_path_buf(),
                source,
            })?;
            paths.push(entry.path());
        }
        Ok(paths)
    }

    fn graph_files_in(dir: &Path) -> Result<Vec<SampleMenuItem>, CatalogError> {
        let mut files: Vec<PathBuf> = Self::read_entries(dir)?
            .into_iter()
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(GRAPH_FILE_EXTENSION))
            })
            .collect();
        files.sort();
        Ok(files.into_iter().map(SampleMenuItem::sample).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_yields_empty_menu() {
        let menu = SamplesMenu::scan(Path::new("/no/such/samples/dir")).unwrap();
        assert!(menu.items.is_empty());
    }
}
