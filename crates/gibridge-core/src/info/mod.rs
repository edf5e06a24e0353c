//! Reference-counted descriptor handles.
//!
//! A [`BaseInfo`] points at one descriptor of a loaded typelib. Cloning a
//! handle takes a new reference on the descriptor node and dropping it
//! releases exactly that reference; the typelib stays alive as long as any
//! handle into it exists.
//!
//! A handle may carry an [`EntryResolver`] for references into other
//! namespaces. Nested and followed handles inherit it, so a handle keeps
//! the repository it came from alive.
//!
//! Accessors are grouped by descriptor kind across the submodules. They
//! return `None` when asked of a descriptor of another kind.

mod callable;
mod member;
mod registered;
mod relation;
mod type_info;

use std::fmt;
use std::sync::Arc;

pub use relation::Relation;

use crate::tags::InfoType;
use crate::typelib::{Blob, BlobId, EntryRef, EntryResolver, Typelib};

/// What a handle points at.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Blob(BlobId),
    /// A cross-namespace reference whose namespace is not loaded.
    Unresolved { namespace: String, name: String },
}

struct InfoNode {
    typelib: Typelib,
    target: Target,
    container: Option<BaseInfo>,
    resolver: Option<Arc<dyn EntryResolver>>,
}

/// Handle on one descriptor.
#[derive(Clone)]
pub struct BaseInfo {
    node: Arc<InfoNode>,
}

impl BaseInfo {
    pub(crate) fn from_blob(typelib: Typelib, id: BlobId, container: Option<BaseInfo>) -> Self {
        let resolver = container.as_ref().and_then(|c| c.node.resolver.clone());
        Self::with_target(typelib, Target::Blob(id), container, resolver)
    }

    fn unresolved(typelib: Typelib, namespace: &str, name: &str) -> Self {
        Self::with_target(
            typelib,
            Target::Unresolved {
                namespace: namespace.to_owned(),
                name: name.to_owned(),
            },
            None,
            None,
        )
    }

    fn with_target(
        typelib: Typelib,
        target: Target,
        container: Option<BaseInfo>,
        resolver: Option<Arc<dyn EntryResolver>>,
    ) -> Self {
        Self {
            node: Arc::new(InfoNode {
                typelib,
                target,
                container,
                resolver,
            }),
        }
    }

    /// The same descriptor, resolving references into other namespaces
    /// through `resolver`.
    pub fn with_resolver(&self, resolver: Arc<dyn EntryResolver>) -> BaseInfo {
        Self::with_target(
            self.node.typelib.clone(),
            self.node.target.clone(),
            self.node.container.clone(),
            Some(resolver),
        )
    }

    /// The descriptor kind.
    pub fn info_type(&self) -> InfoType {
        match self.blob() {
            Some(blob) => blob.info_type(),
            None => InfoType::Unresolved,
        }
    }

    /// Descriptor name; `None` for type descriptors.
    pub fn name(&self) -> Option<&str> {
        match &self.node.target {
            Target::Blob(id) => self.node.typelib.blob(*id).header().map(|h| h.name.as_str()),
            Target::Unresolved { name, .. } => Some(name),
        }
    }

    /// Namespace the descriptor belongs to.
    pub fn namespace(&self) -> &str {
        match &self.node.target {
            Target::Blob(_) => self.node.typelib.namespace(),
            Target::Unresolved { namespace, .. } => namespace,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        self.blob()
            .and_then(Blob::header)
            .is_some_and(|header| header.deprecated)
    }

    /// The descriptor this one is nested in, if any.
    pub fn container(&self) -> Option<BaseInfo> {
        self.node.container.clone()
    }

    /// The typelib the descriptor was read from.
    pub fn typelib(&self) -> &Typelib {
        &self.node.typelib
    }

    /// Number of live references on this descriptor node.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.node)
    }

    /// Namespace followed by the names of the container chain and this
    /// descriptor, joined with dots. Type descriptors contribute no name.
    pub fn full_name(&self) -> String {
        let mut names = Vec::new();
        let mut current = Some(self.clone());
        while let Some(info) = current {
            if info.info_type() != InfoType::Type
                && let Some(name) = info.name()
            {
                names.push(name.to_owned());
            }
            current = info.container();
        }

        let mut full = self.namespace().to_owned();
        for name in names.iter().rev() {
            full.push('.');
            full.push_str(name);
        }
        full
    }

    /// Descriptor identity: same blob of the same typelib, or the same
    /// unresolved namespace and name.
    pub fn equal(&self, other: &BaseInfo) -> bool {
        match (&self.node.target, &other.node.target) {
            (Target::Blob(a), Target::Blob(b)) => a == b && self.node.typelib.ptr_eq(&other.node.typelib),
            (a @ Target::Unresolved { .. }, b @ Target::Unresolved { .. }) => a == b,
            _ => false,
        }
    }

    pub(crate) fn blob(&self) -> Option<&Blob> {
        match &self.node.target {
            Target::Blob(id) => Some(self.node.typelib.blob(*id)),
            Target::Unresolved { .. } => None,
        }
    }

    /// A descriptor nested in this one.
    pub(crate) fn child(&self, id: BlobId) -> BaseInfo {
        BaseInfo::from_blob(self.node.typelib.clone(), id, Some(self.clone()))
    }

    /// Follow a reference to a top-level entry.
    pub(crate) fn follow(&self, reference: &EntryRef) -> BaseInfo {
        let typelib = &self.node.typelib;
        let resolver = self.node.resolver.clone();
        match reference {
            EntryRef::Local(id) => Self::with_target(typelib.clone(), Target::Blob(*id), None, resolver),
            EntryRef::External { namespace, name } => resolver
                .and_then(|resolver| {
                    let entry = resolver.resolve_entry(namespace, name)?;
                    Some(entry.with_resolver(resolver))
                })
                .unwrap_or_else(|| {
                    log::trace!("entry {namespace}.{name} is not loaded");
                    BaseInfo::unresolved(typelib.clone(), namespace, name)
                }),
        }
    }
}

impl PartialEq for BaseInfo {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for BaseInfo {}

impl fmt::Debug for BaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BaseInfo({} {})", self.info_type(), self.full_name())
    }
}
