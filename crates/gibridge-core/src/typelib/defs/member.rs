//! Member definitions: arguments, fields, properties, constants and enum values.

use super::TypeDef;
use crate::flags::{FieldFlags, ParamFlags};
use crate::tags::Direction;
use crate::transfer::Transfer;

/// Definition of a callable argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDef {
    pub name: String,
    pub type_def: TypeDef,
    pub direction: Direction,
    pub transfer: Transfer,
    pub caller_allocates: bool,
    pub optional: bool,
    pub nullable: bool,
}

impl ArgDef {
    /// An `in` argument with no ownership transfer.
    pub fn new(name: impl Into<String>, type_def: TypeDef) -> Self {
        Self {
            name: name.into(),
            type_def,
            direction: Direction::In,
            transfer: Transfer::Nothing,
            caller_allocates: false,
            optional: false,
            nullable: false,
        }
    }

    pub fn out(mut self) -> Self {
        self.direction = Direction::Out;
        self
    }

    pub fn inout(mut self) -> Self {
        self.direction = Direction::InOut;
        self
    }

    /// Mark an `out` argument as allocated by the caller.
    pub fn caller_allocates(mut self) -> Self {
        self.caller_allocates = true;
        self
    }

    pub fn with_transfer(mut self, transfer: Transfer) -> Self {
        self.transfer = transfer;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Definition of a struct, union or object field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub type_def: TypeDef,
    pub flags: FieldFlags,
    /// Byte offset inside the containing record.
    pub offset: usize,
    /// Byte size of the field.
    pub size: usize,
}

impl FieldDef {
    /// A readable and writable field.
    pub fn new(name: impl Into<String>, type_def: TypeDef, offset: usize, size: usize) -> Self {
        Self {
            name: name.into(),
            type_def,
            flags: FieldFlags::IS_READABLE | FieldFlags::IS_WRITABLE,
            offset,
            size,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.flags = FieldFlags::IS_READABLE;
        self
    }

    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Definition of an object or interface property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    pub name: String,
    pub type_def: TypeDef,
    pub flags: ParamFlags,
    pub transfer: Transfer,
    pub deprecated: bool,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, type_def: TypeDef, flags: ParamFlags) -> Self {
        Self {
            name: name.into(),
            type_def,
            flags,
            transfer: Transfer::Nothing,
            deprecated: false,
        }
    }

    pub fn with_transfer(mut self, transfer: Transfer) -> Self {
        self.transfer = transfer;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Definition of a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDef {
    pub name: String,
    pub type_def: TypeDef,
    pub deprecated: bool,
}

impl ConstantDef {
    pub fn new(name: impl Into<String>, type_def: TypeDef) -> Self {
        Self {
            name: name.into(),
            type_def,
            deprecated: false,
        }
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// A named member of an enum or flags type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDef {
    pub name: String,
    pub value: i64,
    pub deprecated: bool,
}

impl ValueDef {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            deprecated: false,
        }
    }
}
