//! Loaded typelibs.
//!
//! A [`Typelib`] is the immutable metadata of one namespace at one version:
//! a blob arena holding every descriptor, a directory of top-level entries,
//! lookup indexes and the symbol table of its native code. Typelibs are
//! cheap to clone and shared by every descriptor handle created from them.
//!
//! References to entries of other namespaces are resolved lazily through an
//! [`EntryResolver`] carried by the descriptor handle, normally the
//! repository that handed the handle out. Handles taken straight from a
//! typelib carry none and read such references as unresolved.

pub(crate) mod blob;
mod builder;
pub mod defs;
mod symbols;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::gtype::GType;
use crate::info::BaseInfo;
use crate::quark::Quark;

pub use blob::{ArrayShape, BlobId, EntryRef};
pub(crate) use blob::Blob;
pub use builder::TypelibBuilder;
pub use symbols::{SharedLibrary, SymbolTable};

/// Resolves entries of other namespaces.
pub trait EntryResolver: Send + Sync {
    /// Find the top-level entry `name` of `namespace`, if it is loaded.
    fn resolve_entry(&self, namespace: &str, name: &str) -> Option<BaseInfo>;
}

pub(crate) struct TypelibData {
    pub namespace: String,
    pub version: String,
    pub dependencies: Vec<String>,
    pub shared_libraries: Vec<String>,
    pub blobs: Vec<Blob>,
    pub directory: Vec<BlobId>,
    pub by_name: FxHashMap<String, BlobId>,
    pub by_gtype: FxHashMap<GType, BlobId>,
    pub by_error_domain: FxHashMap<Quark, BlobId>,
    pub symbols: SymbolTable,
}

/// The metadata of one namespace at one version.
#[derive(Clone)]
pub struct Typelib(Arc<TypelibData>);

impl Typelib {
    pub(crate) fn from_data(data: TypelibData) -> Self {
        Typelib(Arc::new(data))
    }

    pub fn namespace(&self) -> &str {
        &self.0.namespace
    }

    pub fn version(&self) -> &str {
        &self.0.version
    }

    /// Immediate dependencies as `Name-Version` strings.
    pub fn dependencies(&self) -> &[String] {
        &self.0.dependencies
    }

    pub fn shared_libraries(&self) -> &[String] {
        &self.0.shared_libraries
    }

    /// Number of top-level entries.
    pub fn n_entries(&self) -> usize {
        self.0.directory.len()
    }

    /// Top-level entry at `index`.
    pub fn entry(&self, index: usize) -> Option<BaseInfo> {
        self.0.directory.get(index).map(|id| BaseInfo::from_blob(self.clone(), *id, None))
    }

    /// Top-level entry named `name`.
    pub fn find_by_name(&self, name: &str) -> Option<BaseInfo> {
        self.0.by_name.get(name).map(|id| BaseInfo::from_blob(self.clone(), *id, None))
    }

    /// Registered type whose GType is `gtype`.
    pub fn find_by_gtype(&self, gtype: GType) -> Option<BaseInfo> {
        self.0.by_gtype.get(&gtype).map(|id| BaseInfo::from_blob(self.clone(), *id, None))
    }

    /// Enum whose error domain is `domain`.
    pub fn find_by_error_domain(&self, domain: Quark) -> Option<BaseInfo> {
        self.0
            .by_error_domain
            .get(&domain)
            .map(|id| BaseInfo::from_blob(self.clone(), *id, None))
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.0.symbols
    }

    /// Address of `symbol` in this typelib's native code.
    pub fn symbol(&self, symbol: &str) -> Option<usize> {
        self.0.symbols.resolve(symbol)
    }

    /// Check if both values are the same loaded typelib.
    pub fn ptr_eq(&self, other: &Typelib) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn blob(&self, id: BlobId) -> &Blob {
        &self.0.blobs[id.index()]
    }
}

impl fmt::Debug for Typelib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typelib")
            .field("namespace", &self.0.namespace)
            .field("version", &self.0.version)
            .field("entries", &self.0.directory.len())
            .finish()
    }
}
