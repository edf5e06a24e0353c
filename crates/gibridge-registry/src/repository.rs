//! Repository - the set of loaded namespaces.
//!
//! [`Repository`] loads typelibs from its [`TypelibCatalog`] according to a
//! search path, keeps every loaded typelib for its own lifetime, and answers
//! lookups across all loaded namespaces. Descriptors it hands out resolve
//! references into other namespaces through the repository and keep it
//! alive.
//!
//! # Loading
//!
//! - Without a version, the highest installed version is chosen.
//! - Dependencies are loaded before the namespace is registered; a failed
//!   dependency leaves the namespace unloaded.
//! - Requiring a loaded namespace at another version is an error.
//!
//! # Thread Safety
//!
//! A repository is a cheap `Arc` handle. Loaded state, configuration and
//! catalog are each behind a `parking_lot::RwLock`; no lock is held while
//! a dependency is being loaded.
//!
//! # Example
//!
//! ```
//! use gibridge_registry::Repository;
//! use gibridge_core::TypelibBuilder;
//! use gibridge_core::typelib::defs::StructDef;
//!
//! let repository = Repository::new();
//! let typelib = TypelibBuilder::new("Demo", "1.0")
//!     .with_entry(StructDef::new("Point"))
//!     .build()
//!     .unwrap();
//! repository.install("/typelibs", typelib);
//! repository.prepend_search_path("/typelibs");
//!
//! repository.require("Demo", None).unwrap();
//! assert!(repository.find_by_name("Demo", "Point").is_some());
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gibridge_core::{BaseInfo, EntryResolver, GType, Quark, RepositoryError, Typelib};
use log::{debug, warn};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::catalog::{CatalogEntry, TypelibCatalog};
use crate::config::RepositoryConfig;
use crate::dependency_graph::DependencyGraph;

#[derive(Default)]
struct LoadedState {
    typelibs: FxHashMap<String, Typelib>,
    /// Namespaces in load order.
    order: Vec<String>,
    graph: DependencyGraph,
}

struct RepositoryInner {
    config: RwLock<RepositoryConfig>,
    catalog: RwLock<TypelibCatalog>,
    state: RwLock<LoadedState>,
}

impl EntryResolver for RepositoryInner {
    fn resolve_entry(&self, namespace: &str, name: &str) -> Option<BaseInfo> {
        self.state.read().typelibs.get(namespace)?.find_by_name(name)
    }
}

/// Handle on a set of loaded namespaces.
#[derive(Clone)]
pub struct Repository {
    inner: Arc<RepositoryInner>,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository {
    /// An empty repository with an empty search path.
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::default())
    }

    pub fn with_config(config: RepositoryConfig) -> Self {
        Self {
            inner: Arc::new(RepositoryInner {
                config: RwLock::new(config),
                catalog: RwLock::new(TypelibCatalog::new()),
                state: RwLock::new(LoadedState::default()),
            }),
        }
    }

    // ==========================================================================
    // Catalog and search path
    // ==========================================================================

    /// Install `typelib` in the search directory `dir`.
    pub fn install(&self, dir: impl Into<PathBuf>, typelib: Typelib) {
        self.inner.catalog.write().install(dir, typelib);
    }

    /// Install `typelib` in `dir` under an explicit `Namespace-Version` name.
    pub fn install_as(&self, dir: impl Into<PathBuf>, namespace: &str, version: &str, typelib: Typelib) {
        self.inner.catalog.write().install_as(dir, namespace, version, typelib);
    }

    pub fn search_path(&self) -> Vec<PathBuf> {
        self.inner.config.read().search_path.clone()
    }

    /// Put `dir` in front of the search path.
    pub fn prepend_search_path(&self, dir: impl Into<PathBuf>) {
        self.inner.config.write().search_path.insert(0, dir.into());
    }

    // ==========================================================================
    // Loading
    // ==========================================================================

    /// Load `namespace` (and its dependencies) from the search path.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn require(&self, namespace: &str, version: Option<&str>) -> Result<Typelib, RepositoryError> {
        let dirs = self.search_path();
        self.load(namespace, version, &dirs, &mut Vec::new())
    }

    /// Load `namespace` from `dir` only. Its dependencies are searched in
    /// `dir` first, then on the search path.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn require_private(
        &self,
        dir: impl AsRef<Path>,
        namespace: &str,
        version: Option<&str>,
    ) -> Result<Typelib, RepositoryError> {
        let private = [dir.as_ref().to_path_buf()];
        if let Some(typelib) = self.loaded(namespace, version)? {
            return Ok(typelib);
        }
        let entry = self.locate(namespace, version, &private)?;

        let mut dirs = private.to_vec();
        dirs.extend(self.search_path());
        self.register(entry.typelib, &dirs, &mut Vec::new())
    }

    fn load(
        &self,
        namespace: &str,
        version: Option<&str>,
        dirs: &[PathBuf],
        loading: &mut Vec<String>,
    ) -> Result<Typelib, RepositoryError> {
        if let Some(typelib) = self.loaded(namespace, version)? {
            return Ok(typelib);
        }
        let entry = self.locate(namespace, version, dirs)?;
        self.register(entry.typelib, dirs, loading)
    }

    /// The loaded typelib of `namespace`, checking for a version conflict.
    fn loaded(&self, namespace: &str, version: Option<&str>) -> Result<Option<Typelib>, RepositoryError> {
        let state = self.inner.state.read();
        let Some(typelib) = state.typelibs.get(namespace) else {
            return Ok(None);
        };
        match version {
            Some(requested) if requested != typelib.version() => Err(RepositoryError::NamespaceVersionConflict {
                namespace: namespace.to_owned(),
                requested: requested.to_owned(),
                loaded: typelib.version().to_owned(),
            }),
            _ => Ok(Some(typelib.clone())),
        }
    }

    fn locate(
        &self,
        namespace: &str,
        version: Option<&str>,
        dirs: &[PathBuf],
    ) -> Result<CatalogEntry, RepositoryError> {
        let catalog = self.inner.catalog.read();
        let Some(entry) = catalog.find(dirs, namespace, version) else {
            let installed: Vec<String> = dirs.iter().flat_map(|dir| catalog.versions(dir, namespace)).collect();
            debug!("no typelib for {namespace} {version:?} on search path, installed: {installed:?}");
            return Err(RepositoryError::TypelibNotFound {
                namespace: namespace.to_owned(),
                version: version.map(str::to_owned),
            });
        };
        drop(catalog);
        if entry.typelib.namespace() != namespace {
            return Err(RepositoryError::NamespaceMismatch {
                requested: namespace.to_owned(),
                found: entry.typelib.namespace().to_owned(),
            });
        }
        Ok(entry)
    }

    /// Load the dependencies of `typelib`, then register it.
    fn register(&self, typelib: Typelib, dirs: &[PathBuf], loading: &mut Vec<String>) -> Result<Typelib, RepositoryError> {
        let namespace = typelib.namespace().to_owned();
        debug!("loading namespace {namespace}-{}", typelib.version());

        loading.push(namespace.clone());
        let mut edges = Vec::new();
        for dependency in typelib.dependencies() {
            let Some((name, version)) = dependency.split_once('-') else {
                warn!("namespace {namespace} has malformed dependency '{dependency}'");
                continue;
            };
            edges.push(name.to_owned());
            if loading.iter().any(|n| n == name) {
                continue;
            }
            debug!("loading dependency {dependency} of {namespace}");
            if let Err(err) = self.load(name, Some(version), dirs, loading) {
                loading.pop();
                return Err(RepositoryError::LibraryNotFound {
                    namespace,
                    dependency: dependency.clone(),
                    reason: err.to_string(),
                });
            }
        }
        loading.pop();

        let mut state = self.inner.state.write();
        if let Some(existing) = state.typelibs.get(&namespace) {
            return Ok(existing.clone());
        }
        state.graph.add_namespace(&namespace);
        for name in &edges {
            state.graph.add_dependency(&namespace, name);
        }
        state.typelibs.insert(namespace.clone(), typelib.clone());
        state.order.push(namespace);
        Ok(typelib)
    }

    // ==========================================================================
    // Queries
    // ==========================================================================

    /// Whether `namespace` is loaded, at `version` if one is given.
    pub fn is_registered(&self, namespace: &str, version: Option<&str>) -> bool {
        self.inner
            .state
            .read()
            .typelibs
            .get(namespace)
            .is_some_and(|t| version.is_none_or(|v| v == t.version()))
    }

    /// Loaded namespaces in load order.
    pub fn loaded_namespaces(&self) -> Vec<String> {
        self.inner.state.read().order.clone()
    }

    pub fn typelib(&self, namespace: &str) -> Option<Typelib> {
        self.inner.state.read().typelibs.get(namespace).cloned()
    }

    pub fn version(&self, namespace: &str) -> Option<String> {
        self.typelib(namespace).map(|t| t.version().to_owned())
    }

    /// Number of top-level entries of a loaded namespace.
    pub fn n_infos(&self, namespace: &str) -> Option<usize> {
        self.typelib(namespace).map(|t| t.n_entries())
    }

    /// Top-level entry `index` of a loaded namespace.
    pub fn info(&self, namespace: &str, index: usize) -> Option<BaseInfo> {
        self.typelib(namespace)?.entry(index).map(|info| self.bind(info))
    }

    pub fn find_by_name(&self, namespace: &str, name: &str) -> Option<BaseInfo> {
        self.typelib(namespace)?.find_by_name(name).map(|info| self.bind(info))
    }

    /// Registered type with `gtype` in any loaded namespace.
    pub fn find_by_gtype(&self, gtype: GType) -> Option<BaseInfo> {
        let found = {
            let state = self.inner.state.read();
            state
                .order
                .iter()
                .filter_map(|namespace| state.typelibs.get(namespace))
                .find_map(|typelib| typelib.find_by_gtype(gtype))
        };
        found.map(|info| self.bind(info))
    }

    /// Enum owning the error `domain` in any loaded namespace.
    pub fn find_by_error_domain(&self, domain: Quark) -> Option<BaseInfo> {
        let found = {
            let state = self.inner.state.read();
            state
                .order
                .iter()
                .filter_map(|namespace| state.typelibs.get(namespace))
                .find_map(|typelib| typelib.find_by_error_domain(domain))
        };
        found.map(|info| self.bind(info))
    }

    fn bind(&self, info: BaseInfo) -> BaseInfo {
        info.with_resolver(self.inner.clone())
    }

    /// Every namespace `namespace` depends on, directly or not, as sorted
    /// `Name-Version` strings.
    pub fn dependencies(&self, namespace: &str) -> Option<Vec<String>> {
        let state = self.inner.state.read();
        let names = state.graph.transitive(namespace)?;
        Some(
            names
                .into_iter()
                .filter_map(|name| {
                    let typelib = state.typelibs.get(&name)?;
                    Some(format!("{name}-{}", typelib.version()))
                })
                .collect(),
        )
    }

    /// Dependencies declared by the namespace itself.
    pub fn immediate_dependencies(&self, namespace: &str) -> Option<Vec<String>> {
        self.typelib(namespace).map(|t| t.dependencies().to_vec())
    }
}
