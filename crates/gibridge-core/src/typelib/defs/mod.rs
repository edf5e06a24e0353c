//! Definitions used to build a typelib.
//!
//! Definitions are plain owned values assembled with `with_*` builder
//! methods and handed to [`TypelibBuilder`](super::TypelibBuilder), which
//! validates them and flattens them into the blob arena.
//!
//! # Example
//!
//! ```
//! use gibridge_core::typelib::defs::{EnumDef, StructDef, FieldDef, TypeDef};
//! use gibridge_core::TypeTag;
//!
//! let point = StructDef::new("Point")
//!     .with_size(8, 4)
//!     .with_field(FieldDef::new("x", TypeDef::basic(TypeTag::Int32), 0, 4))
//!     .with_field(FieldDef::new("y", TypeDef::basic(TypeTag::Int32), 4, 4));
//! assert_eq!(point.fields.len(), 2);
//!
//! let color = EnumDef::new("Color").with_value("red", 0).with_value("green", 1);
//! assert_eq!(color.values.len(), 2);
//! ```

mod callable;
mod compound;
mod member;
mod type_def;

pub use callable::{CallableDef, CallableKind};
pub use compound::{EnumDef, InterfaceDef, ObjectDef, StructDef, UnionDef};
pub use member::{ArgDef, ConstantDef, FieldDef, PropertyDef, ValueDef};
pub use type_def::TypeDef;

/// Name of a top-level entry, optionally qualified with its namespace.
///
/// Parsed from `"Name"` (same namespace) or `"Namespace.Name"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Target namespace; `None` means the namespace being built.
    pub namespace: Option<String>,
    /// Target entry name.
    pub name: String,
}

impl Reference {
    /// Reference an entry of the namespace being built.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }

    /// Reference an entry of another namespace.
    pub fn external(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for Reference {
    fn from(value: &str) -> Self {
        match value.split_once('.') {
            Some((namespace, name)) => Reference::external(namespace, name),
            None => Reference::local(value),
        }
    }
}

impl From<String> for Reference {
    fn from(value: String) -> Self {
        Reference::from(value.as_str())
    }
}

/// A top-level entry of a typelib.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryDef {
    Function(CallableDef),
    Callback(CallableDef),
    Struct(StructDef),
    Union(UnionDef),
    Enum(EnumDef),
    Object(ObjectDef),
    Interface(InterfaceDef),
    Constant(ConstantDef),
}

impl EntryDef {
    /// The entry's name.
    pub fn name(&self) -> &str {
        match self {
            EntryDef::Function(def) | EntryDef::Callback(def) => &def.name,
            EntryDef::Struct(def) => &def.name,
            EntryDef::Union(def) => &def.name,
            EntryDef::Enum(def) => &def.name,
            EntryDef::Object(def) => &def.name,
            EntryDef::Interface(def) => &def.name,
            EntryDef::Constant(def) => &def.name,
        }
    }
}

impl From<CallableDef> for EntryDef {
    fn from(def: CallableDef) -> Self {
        match def.kind {
            CallableKind::Callback => EntryDef::Callback(def),
            _ => EntryDef::Function(def),
        }
    }
}

impl From<StructDef> for EntryDef {
    fn from(def: StructDef) -> Self {
        EntryDef::Struct(def)
    }
}

impl From<UnionDef> for EntryDef {
    fn from(def: UnionDef) -> Self {
        EntryDef::Union(def)
    }
}

impl From<EnumDef> for EntryDef {
    fn from(def: EnumDef) -> Self {
        EntryDef::Enum(def)
    }
}

impl From<ObjectDef> for EntryDef {
    fn from(def: ObjectDef) -> Self {
        EntryDef::Object(def)
    }
}

impl From<InterfaceDef> for EntryDef {
    fn from(def: InterfaceDef) -> Self {
        EntryDef::Interface(def)
    }
}

impl From<ConstantDef> for EntryDef {
    fn from(def: ConstantDef) -> Self {
        EntryDef::Constant(def)
    }
}
