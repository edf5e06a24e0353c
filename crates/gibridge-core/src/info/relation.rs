//! Ordered groups of related descriptors.

use super::BaseInfo;
use crate::typelib::{Blob, BlobId, EntryRef};

/// A group of descriptors related to a container descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Fields,
    Methods,
    Args,
    Values,
    Interfaces,
    Prerequisites,
    VFuncs,
    Constants,
    Properties,
    Signals,
}

impl Relation {
    pub const ALL: [Relation; 10] = [
        Relation::Fields,
        Relation::Methods,
        Relation::Args,
        Relation::Values,
        Relation::Interfaces,
        Relation::Prerequisites,
        Relation::VFuncs,
        Relation::Constants,
        Relation::Properties,
        Relation::Signals,
    ];

    /// Parse a host-facing property name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|relation| relation.as_str() == name)
    }

    /// The host-facing property name of the group.
    pub const fn as_str(self) -> &'static str {
        match self {
            Relation::Fields => "fields",
            Relation::Methods => "methods",
            Relation::Args => "args",
            Relation::Values => "values",
            Relation::Interfaces => "interfaces",
            Relation::Prerequisites => "prerequisites",
            Relation::VFuncs => "vfuncs",
            Relation::Constants => "constants",
            Relation::Properties => "properties",
            Relation::Signals => "signals",
        }
    }
}

enum Members<'a> {
    /// Descriptors nested in the container.
    Nested(&'a [BlobId]),
    /// References to other top-level entries.
    Referenced(&'a [EntryRef]),
}

impl Members<'_> {
    fn len(&self) -> usize {
        match self {
            Members::Nested(ids) => ids.len(),
            Members::Referenced(refs) => refs.len(),
        }
    }
}

impl BaseInfo {
    fn members(&self, relation: Relation) -> Option<Members<'_>> {
        use Members::{Nested, Referenced};

        let blob = self.blob()?;
        let members = match (relation, blob) {
            (Relation::Fields, Blob::Struct(b)) => Nested(&b.fields),
            (Relation::Fields, Blob::Union(b)) => Nested(&b.fields),
            (Relation::Fields, Blob::Object(b)) => Nested(&b.fields),

            (Relation::Methods, Blob::Struct(b)) => Nested(&b.methods),
            (Relation::Methods, Blob::Union(b)) => Nested(&b.methods),
            (Relation::Methods, Blob::Enum(b) | Blob::Flags(b)) => Nested(&b.methods),
            (Relation::Methods, Blob::Object(b)) => Nested(&b.methods),
            (Relation::Methods, Blob::Interface(b)) => Nested(&b.methods),

            (Relation::Args, blob) => Nested(&blob.callable()?.args),
            (Relation::Values, Blob::Enum(b) | Blob::Flags(b)) => Nested(&b.values),
            (Relation::Interfaces, Blob::Object(b)) => Referenced(&b.interfaces),
            (Relation::Prerequisites, Blob::Interface(b)) => Referenced(&b.prerequisites),

            (Relation::VFuncs, Blob::Object(b)) => Nested(&b.vfuncs),
            (Relation::VFuncs, Blob::Interface(b)) => Nested(&b.vfuncs),
            (Relation::Constants, Blob::Object(b)) => Nested(&b.constants),
            (Relation::Constants, Blob::Interface(b)) => Nested(&b.constants),
            (Relation::Properties, Blob::Object(b)) => Nested(&b.properties),
            (Relation::Properties, Blob::Interface(b)) => Nested(&b.properties),
            (Relation::Signals, Blob::Object(b)) => Nested(&b.signals),
            (Relation::Signals, Blob::Interface(b)) => Nested(&b.signals),

            _ => return None,
        };
        Some(members)
    }

    /// Number of descriptors in `relation`, or `None` when this kind of
    /// descriptor has no such group.
    pub fn n_related(&self, relation: Relation) -> Option<usize> {
        self.members(relation).map(|members| members.len())
    }

    /// The descriptor at `index` in `relation`.
    pub fn related(&self, relation: Relation, index: usize) -> Option<BaseInfo> {
        match self.members(relation)? {
            Members::Nested(ids) => ids.get(index).map(|id| self.child(*id)),
            Members::Referenced(refs) => refs.get(index).map(|r| self.follow(r)),
        }
    }
}
