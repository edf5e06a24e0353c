//! Accessors of members: arguments, constants, properties and fields.

use super::BaseInfo;
use crate::flags::{FieldFlags, ParamFlags};
use crate::tags::Direction;
use crate::transfer::Transfer;
use crate::typelib::Blob;

impl BaseInfo {
    /// Type descriptor of an argument, constant, property or field.
    pub fn type_info(&self) -> Option<BaseInfo> {
        let id = match self.blob()? {
            Blob::Arg(b) => b.type_info,
            Blob::Constant(b) => b.type_info,
            Blob::Property(b) => b.type_info,
            Blob::Field(b) => b.type_info,
            _ => return None,
        };
        Some(self.child(id))
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.blob()? {
            Blob::Arg(b) => Some(b.direction),
            _ => None,
        }
    }

    /// Whether an `out` argument is allocated by the caller.
    pub fn is_caller_allocates(&self) -> Option<bool> {
        match self.blob()? {
            Blob::Arg(b) => Some(b.caller_allocates),
            _ => None,
        }
    }

    /// Ownership transfer of an argument or property.
    pub fn ownership_transfer(&self) -> Option<Transfer> {
        match self.blob()? {
            Blob::Arg(b) => Some(b.transfer),
            Blob::Property(b) => Some(b.transfer),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> Option<bool> {
        match self.blob()? {
            Blob::Arg(b) => Some(b.optional),
            _ => None,
        }
    }

    pub fn may_be_null(&self) -> Option<bool> {
        match self.blob()? {
            Blob::Arg(b) => Some(b.nullable),
            _ => None,
        }
    }

    pub fn property_flags(&self) -> Option<ParamFlags> {
        match self.blob()? {
            Blob::Property(b) => Some(b.flags),
            _ => None,
        }
    }

    pub fn field_flags(&self) -> Option<FieldFlags> {
        match self.blob()? {
            Blob::Field(b) => Some(b.flags),
            _ => None,
        }
    }

    /// Byte size of a field.
    pub fn field_size(&self) -> Option<usize> {
        match self.blob()? {
            Blob::Field(b) => Some(b.size),
            _ => None,
        }
    }

    /// Byte offset of a field inside its record.
    pub fn field_offset(&self) -> Option<usize> {
        match self.blob()? {
            Blob::Field(b) => Some(b.offset),
            _ => None,
        }
    }
}
