//! gibridge - host bindings for introspection repositories.
//!
//! This crate turns repository metadata into values an embedding host can
//! navigate dynamically. Four userdata kinds are handed out:
//!
//! - `gi.info` ([`InfoHandle`]): one descriptor, read through named properties
//! - `gi.infos` ([`InfoCollection`]): the members of one relation
//! - `gi.namespace` ([`NamespaceHandle`]): a loaded namespace
//! - `gi.resolver` ([`SymbolResolver`]): native symbol lookup
//!
//! [`Gi`] is the entry table tying them together.
//!
//! # Example
//!
//! ```
//! use gibridge::prelude::*;
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
//! let gi = Gi::new(repository);
//! let loaded = gi.require(&[Value::from("Demo")]).unwrap();
//! let demo = &loaded[0];
//! let point = index_value(demo, &Value::from("Point")).unwrap();
//! assert!(gi.isinfo(&point));
//! assert_eq!(index_value(&point, &Value::from("type")).unwrap(), Value::from("struct"));
//! ```

pub mod bridge;
pub mod error;
pub mod info_handle;
pub mod infos;
pub mod namespace;
pub mod object;
pub mod resolver;
pub mod value;

pub use bridge::{Gi, index_value, len_value};
pub use error::{HostError, HostResult};
pub use info_handle::InfoHandle;
pub use infos::InfoCollection;
pub use namespace::NamespaceHandle;
pub use object::{HostObject, ObjectKind};
pub use resolver::SymbolResolver;
pub use value::{Table, TableKey, Value};

pub mod prelude {
    pub use crate::bridge::{Gi, index_value, len_value};
    pub use crate::error::{HostError, HostResult};
    pub use crate::info_handle::InfoHandle;
    pub use crate::infos::InfoCollection;
    pub use crate::namespace::NamespaceHandle;
    pub use crate::object::{HostObject, ObjectKind};
    pub use crate::resolver::SymbolResolver;
    pub use crate::value::{Table, TableKey, Value};
    pub use gibridge_registry::{Repository, RepositoryConfig};
}
