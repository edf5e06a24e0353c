//! Installed typelibs.
//!
//! The catalog plays the role of the typelib files on disk: every installed
//! typelib lives in a search directory under a `Namespace-Version` file name.
//! Loading picks typelibs from the catalog according to a search path.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use gibridge_core::Typelib;
use rustc_hash::FxHashMap;

/// One installed typelib file.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Namespace named by the file.
    pub namespace: String,
    /// Version named by the file.
    pub version: String,
    pub typelib: Typelib,
}

/// Typelibs installed per search directory.
#[derive(Debug, Default)]
pub struct TypelibCatalog {
    dirs: FxHashMap<PathBuf, Vec<CatalogEntry>>,
}

impl TypelibCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `typelib` in `dir` under its own namespace and version.
    pub fn install(&mut self, dir: impl Into<PathBuf>, typelib: Typelib) {
        let namespace = typelib.namespace().to_owned();
        let version = typelib.version().to_owned();
        self.install_as(dir, &namespace, &version, typelib);
    }

    /// Install `typelib` in `dir` under an explicit file name. A typelib
    /// already installed under the same name is replaced.
    pub fn install_as(&mut self, dir: impl Into<PathBuf>, namespace: &str, version: &str, typelib: Typelib) {
        let entries = self.dirs.entry(dir.into()).or_default();
        entries.retain(|e| !(e.namespace == namespace && e.version == version));
        entries.push(CatalogEntry {
            namespace: namespace.to_owned(),
            version: version.to_owned(),
            typelib,
        });
    }

    /// Find the typelib for `namespace` in `dirs`.
    ///
    /// With a version, the first directory holding that exact version wins.
    /// Without one, the highest version across all directories wins, ties
    /// going to the earlier directory.
    pub fn find(&self, dirs: &[PathBuf], namespace: &str, version: Option<&str>) -> Option<CatalogEntry> {
        let candidates = dirs
            .iter()
            .filter_map(|dir| self.dirs.get(dir))
            .flat_map(|entries| entries.iter().filter(|e| e.namespace == namespace));

        match version {
            Some(version) => candidates.into_iter().find(|e| e.version == version).cloned(),
            None => candidates
                .into_iter()
                .fold(None::<&CatalogEntry>, |best, entry| match best {
                    Some(best) if compare_versions(&entry.version, &best.version) != Ordering::Greater => {
                        Some(best)
                    }
                    _ => Some(entry),
                })
                .cloned(),
        }
    }

    /// Versions of `namespace` installed in `dir`.
    pub fn versions(&self, dir: &Path, namespace: &str) -> Vec<String> {
        self.dirs
            .get(dir)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.namespace == namespace)
                    .map(|e| e.version.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Compare dotted version strings component by component, numerically where
/// both components are numbers.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}
