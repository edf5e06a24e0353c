//! Namespace loading for gibridge.
//!
//! - [`Repository`]: loads typelibs and answers lookups across loaded namespaces
//! - [`TypelibCatalog`]: the installed typelibs, per search directory
//! - [`RepositoryConfig`]: search path configuration
//! - [`Repository::global`]: the process-wide default repository

mod catalog;
mod config;
mod dependency_graph;
mod global;
mod repository;

pub use catalog::{CatalogEntry, TypelibCatalog, compare_versions};
pub use config::{RepositoryConfig, TYPELIB_PATH_ENV};
pub use dependency_graph::DependencyGraph;
pub use repository::Repository;
