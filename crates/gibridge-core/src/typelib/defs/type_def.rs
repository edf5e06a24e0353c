//! Type descriptor definitions.

use super::Reference;
use crate::tags::{ArrayType, TypeTag};
use crate::typelib::blob::ArrayShape;

/// Definition of a type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub tag: TypeTag,
    pub is_pointer: bool,
    /// Element types: one for arrays and lists, two for hash tables.
    pub params: Vec<TypeDef>,
    /// Target of an interface-tagged type.
    pub interface: Option<Reference>,
    /// Array details of an array-tagged type.
    pub array: Option<ArrayShape>,
}

impl TypeDef {
    /// A basic (scalar or string) type. Strings are passed by pointer.
    pub fn basic(tag: TypeTag) -> Self {
        Self {
            tag,
            is_pointer: matches!(tag, TypeTag::Utf8 | TypeTag::Filename),
            params: Vec::new(),
            interface: None,
            array: None,
        }
    }

    pub fn void() -> Self {
        Self::basic(TypeTag::Void)
    }

    pub fn utf8() -> Self {
        Self::basic(TypeTag::Utf8)
    }

    /// A type referring to another entry (struct, object, enum, callback, ...).
    pub fn interface(target: impl Into<Reference>) -> Self {
        Self {
            tag: TypeTag::Interface,
            is_pointer: false,
            params: Vec::new(),
            interface: Some(target.into()),
            array: None,
        }
    }

    /// A C array of `element`.
    pub fn array(element: TypeDef) -> Self {
        Self {
            tag: TypeTag::Array,
            is_pointer: true,
            params: vec![element],
            interface: None,
            array: Some(ArrayShape::default()),
        }
    }

    pub fn list(element: TypeDef) -> Self {
        Self::container(TypeTag::GList, vec![element])
    }

    pub fn slist(element: TypeDef) -> Self {
        Self::container(TypeTag::GSList, vec![element])
    }

    pub fn hash(key: TypeDef, value: TypeDef) -> Self {
        Self::container(TypeTag::GHash, vec![key, value])
    }

    pub fn error() -> Self {
        Self::container(TypeTag::Error, Vec::new())
    }

    fn container(tag: TypeTag, params: Vec<TypeDef>) -> Self {
        Self {
            tag,
            is_pointer: true,
            params,
            interface: None,
            array: None,
        }
    }

    /// Set whether the value is passed by pointer.
    pub fn with_pointer(mut self, is_pointer: bool) -> Self {
        self.is_pointer = is_pointer;
        self
    }

    /// Change the storage kind of an array type.
    pub fn with_array_type(mut self, array_type: ArrayType) -> Self {
        if let Some(array) = self.array.as_mut() {
            array.array_type = array_type;
        }
        self
    }

    /// Mark an array type as zero-terminated.
    pub fn zero_terminated(mut self) -> Self {
        if let Some(array) = self.array.as_mut() {
            array.zero_terminated = true;
        }
        self
    }

    /// Point an array type at the argument holding its length.
    pub fn with_length(mut self, arg_index: u32) -> Self {
        if let Some(array) = self.array.as_mut() {
            array.length = Some(arg_index);
        }
        self
    }

    /// Give an array type a fixed element count.
    pub fn with_fixed_size(mut self, size: usize) -> Self {
        if let Some(array) = self.array.as_mut() {
            array.fixed_size = Some(size);
        }
        self
    }
}
