//! Accessors of type descriptors.

use super::BaseInfo;
use crate::tags::{ArrayType, TypeTag};
use crate::typelib::blob::{ArrayShape, TypeBlob};
use crate::typelib::Blob;

impl BaseInfo {
    fn type_blob(&self) -> Option<&TypeBlob> {
        match self.blob()? {
            Blob::Type(b) => Some(b),
            _ => None,
        }
    }

    fn array_shape(&self) -> Option<&ArrayShape> {
        self.type_blob()?.array.as_ref()
    }

    pub fn tag(&self) -> Option<TypeTag> {
        Some(self.type_blob()?.tag)
    }

    pub fn is_pointer(&self) -> Option<bool> {
        Some(self.type_blob()?.is_pointer)
    }

    /// Number of element-type parameters.
    pub fn n_params(&self) -> Option<usize> {
        Some(self.type_blob()?.params.len())
    }

    /// Element type parameter `index`.
    pub fn param_type(&self, index: usize) -> Option<BaseInfo> {
        let id = *self.type_blob()?.params.get(index)?;
        Some(self.child(id))
    }

    /// Entry an interface-tagged type refers to.
    pub fn interface(&self) -> Option<BaseInfo> {
        let reference = self.type_blob()?.interface.as_ref()?;
        Some(self.follow(reference))
    }

    pub fn array_type(&self) -> Option<ArrayType> {
        Some(self.array_shape()?.array_type)
    }

    pub fn is_zero_terminated(&self) -> Option<bool> {
        Some(self.array_shape()?.zero_terminated)
    }

    /// Index of the argument carrying the array length.
    pub fn array_length_index(&self) -> Option<u32> {
        self.array_shape()?.length
    }

    pub fn array_fixed_size(&self) -> Option<usize> {
        self.array_shape()?.fixed_size
    }
}
