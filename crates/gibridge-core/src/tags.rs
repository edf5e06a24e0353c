//! Closed tag enumerations of the introspection format.
//!
//! Every enumeration here has a fixed raw discriminant matching the typelib
//! encoding, decoded with `num_enum`. The host-facing names are exposed via
//! `as_str()`.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The kind of a descriptor.
///
/// Kinds are mutually exclusive: a descriptor has exactly one `InfoType`.
/// The lattice relationships (a function is also callable, flags are also an
/// enum) are answered by the predicate methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum InfoType {
    Function = 1,
    Callback = 2,
    Struct = 3,
    Enum = 5,
    Flags = 6,
    Object = 7,
    Interface = 8,
    Constant = 9,
    Union = 11,
    Value = 12,
    Signal = 13,
    VFunc = 14,
    Property = 15,
    Field = 16,
    Arg = 17,
    Type = 18,
    Unresolved = 19,
}

impl InfoType {
    /// Kinds in the order the `type` property tests them.
    pub const PRIORITY: [InfoType; 17] = [
        InfoType::Function,
        InfoType::Callback,
        InfoType::Struct,
        InfoType::Enum,
        InfoType::Flags,
        InfoType::Object,
        InfoType::Interface,
        InfoType::Constant,
        InfoType::Union,
        InfoType::Value,
        InfoType::Signal,
        InfoType::VFunc,
        InfoType::Property,
        InfoType::Field,
        InfoType::Arg,
        InfoType::Type,
        InfoType::Unresolved,
    ];

    /// Decode a raw kind discriminant.
    ///
    /// # Panics
    ///
    /// Panics when `raw` is not a known kind. A descriptor without a kind means
    /// the metadata itself is corrupt, which is not recoverable.
    pub fn from_raw(raw: u16) -> Self {
        match Self::try_from(raw) {
            Ok(kind) => kind,
            Err(_) => panic!("descriptor has invalid info type {raw}"),
        }
    }

    /// The host-facing tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            InfoType::Function => "function",
            InfoType::Callback => "callback",
            InfoType::Struct => "struct",
            InfoType::Enum => "enum",
            InfoType::Flags => "flags",
            InfoType::Object => "object",
            InfoType::Interface => "interface",
            InfoType::Constant => "constant",
            InfoType::Union => "union",
            InfoType::Value => "value",
            InfoType::Signal => "signal",
            InfoType::VFunc => "vfunc",
            InfoType::Property => "property",
            InfoType::Field => "field",
            InfoType::Arg => "arg",
            InfoType::Type => "type",
            InfoType::Unresolved => "unresolved",
        }
    }

    /// Functions, callbacks, signals and vfuncs.
    pub const fn is_callable(self) -> bool {
        matches!(
            self,
            InfoType::Function | InfoType::Callback | InfoType::Signal | InfoType::VFunc
        )
    }

    /// Types that carry a GType: structs, unions, enums, flags, objects and interfaces.
    pub const fn is_registered_type(self) -> bool {
        matches!(
            self,
            InfoType::Struct
                | InfoType::Union
                | InfoType::Enum
                | InfoType::Flags
                | InfoType::Object
                | InfoType::Interface
        )
    }

    /// Enums and flags share the enum shape.
    pub const fn is_enum(self) -> bool {
        matches!(self, InfoType::Enum | InfoType::Flags)
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type tag of a type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum TypeTag {
    Void = 0,
    Boolean = 1,
    Int8 = 2,
    Uint8 = 3,
    Int16 = 4,
    Uint16 = 5,
    Int32 = 6,
    Uint32 = 7,
    Int64 = 8,
    Uint64 = 9,
    Float = 10,
    Double = 11,
    GType = 12,
    Utf8 = 13,
    Filename = 14,
    Array = 15,
    Interface = 16,
    GList = 17,
    GSList = 18,
    GHash = 19,
    Error = 20,
    Unichar = 21,
}

impl TypeTag {
    /// The canonical tag name.
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Void => "void",
            TypeTag::Boolean => "gboolean",
            TypeTag::Int8 => "gint8",
            TypeTag::Uint8 => "guint8",
            TypeTag::Int16 => "gint16",
            TypeTag::Uint16 => "guint16",
            TypeTag::Int32 => "gint32",
            TypeTag::Uint32 => "guint32",
            TypeTag::Int64 => "gint64",
            TypeTag::Uint64 => "guint64",
            TypeTag::Float => "gfloat",
            TypeTag::Double => "gdouble",
            TypeTag::GType => "GType",
            TypeTag::Utf8 => "utf8",
            TypeTag::Filename => "filename",
            TypeTag::Array => "array",
            TypeTag::Interface => "interface",
            TypeTag::GList => "GList",
            TypeTag::GSList => "GSList",
            TypeTag::GHash => "GHashTable",
            TypeTag::Error => "GError",
            TypeTag::Unichar => "gunichar",
        }
    }

    /// Basic tags are the scalar and string tags; unichar counts as basic.
    pub const fn is_basic(self) -> bool {
        (self as u8) < (TypeTag::Array as u8) || matches!(self, TypeTag::Unichar)
    }

    /// Number of element-type parameters a type with this tag carries.
    pub const fn param_count(self) -> usize {
        match self {
            TypeTag::Array | TypeTag::GList | TypeTag::GSList => 1,
            TypeTag::GHash => 2,
            _ => 0,
        }
    }

    /// Tags that can only be used as enum storage.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            TypeTag::Int8
                | TypeTag::Uint8
                | TypeTag::Int16
                | TypeTag::Uint16
                | TypeTag::Int32
                | TypeTag::Uint32
                | TypeTag::Int64
                | TypeTag::Uint64
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage kind of an array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ArrayType {
    C = 0,
    Array = 1,
    PtrArray = 2,
    ByteArray = 3,
}

impl ArrayType {
    /// The host-facing tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            ArrayType::C => "c",
            ArrayType::Array => "array",
            ArrayType::PtrArray => "ptr_array",
            ArrayType::ByteArray => "byte_array",
        }
    }
}

/// Direction of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Direction {
    In = 0,
    Out = 1,
    InOut = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_type_priority_covers_every_kind_once() {
        let mut seen = rustc_hash::FxHashSet::default();
        for kind in InfoType::PRIORITY {
            assert!(seen.insert(kind), "{kind} listed twice");
        }
        assert_eq!(seen.len(), 17);
    }

    #[test]
    fn info_type_decodes_raw_values() {
        assert_eq!(InfoType::from_raw(1), InfoType::Function);
        assert_eq!(InfoType::from_raw(19), InfoType::Unresolved);
        assert_eq!(u16::from(InfoType::Field), 16);
    }

    #[test]
    #[should_panic(expected = "invalid info type")]
    fn info_type_rejects_unknown_raw_value() {
        InfoType::from_raw(10);
    }

    #[test]
    fn info_type_lattice() {
        assert!(InfoType::Function.is_callable());
        assert!(InfoType::Signal.is_callable());
        assert!(!InfoType::Struct.is_callable());
        assert!(InfoType::Flags.is_enum());
        assert!(InfoType::Flags.is_registered_type());
        assert!(!InfoType::Value.is_registered_type());
    }

    #[test]
    fn type_tag_names() {
        assert_eq!(TypeTag::Int32.as_str(), "gint32");
        assert_eq!(TypeTag::GHash.as_str(), "GHashTable");
        assert_eq!(TypeTag::Utf8.to_string(), "utf8");
    }

    #[test]
    fn type_tag_basic() {
        assert!(TypeTag::Void.is_basic());
        assert!(TypeTag::Filename.is_basic());
        assert!(TypeTag::Unichar.is_basic());
        assert!(!TypeTag::Array.is_basic());
        assert!(!TypeTag::Interface.is_basic());
        assert!(!TypeTag::Error.is_basic());
    }

    #[test]
    fn type_tag_param_counts() {
        assert_eq!(TypeTag::Array.param_count(), 1);
        assert_eq!(TypeTag::GSList.param_count(), 1);
        assert_eq!(TypeTag::GHash.param_count(), 2);
        assert_eq!(TypeTag::Utf8.param_count(), 0);
    }

    #[test]
    fn array_type_tags() {
        assert_eq!(ArrayType::C.as_str(), "c");
        assert_eq!(ArrayType::try_from(3u8).ok(), Some(ArrayType::ByteArray));
        assert!(ArrayType::try_from(4u8).is_err());
    }
}
