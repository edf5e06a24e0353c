//! Registered type definitions: structs, unions, enums, objects and interfaces.

use super::{CallableDef, ConstantDef, FieldDef, PropertyDef, Reference, ValueDef};
use crate::tags::TypeTag;

// ============================================================================
// Records
// ============================================================================

/// Definition of a struct (record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub name: String,
    pub gtype_name: Option<String>,
    pub size: usize,
    pub alignment: usize,
    /// Whether this is the class or interface struct of another type.
    pub is_gtype_struct: bool,
    pub fields: Vec<FieldDef>,
    pub methods: Vec<CallableDef>,
    pub deprecated: bool,
}

impl StructDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gtype_name: None,
            size: 0,
            alignment: 1,
            is_gtype_struct: false,
            fields: Vec::new(),
            methods: Vec::new(),
            deprecated: false,
        }
    }

    pub fn with_gtype(mut self, gtype_name: impl Into<String>) -> Self {
        self.gtype_name = Some(gtype_name.into());
        self
    }

    pub fn with_size(mut self, size: usize, alignment: usize) -> Self {
        self.size = size;
        self.alignment = alignment;
        self
    }

    pub fn gtype_struct(mut self) -> Self {
        self.is_gtype_struct = true;
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: CallableDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Definition of a union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDef {
    pub name: String,
    pub gtype_name: Option<String>,
    pub size: usize,
    pub alignment: usize,
    pub fields: Vec<FieldDef>,
    pub methods: Vec<CallableDef>,
    pub deprecated: bool,
}

impl UnionDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gtype_name: None,
            size: 0,
            alignment: 1,
            fields: Vec::new(),
            methods: Vec::new(),
            deprecated: false,
        }
    }

    pub fn with_gtype(mut self, gtype_name: impl Into<String>) -> Self {
        self.gtype_name = Some(gtype_name.into());
        self
    }

    pub fn with_size(mut self, size: usize, alignment: usize) -> Self {
        self.size = size;
        self.alignment = alignment;
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: CallableDef) -> Self {
        self.methods.push(method);
        self
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Definition of an enum or flags type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    pub name: String,
    pub gtype_name: Option<String>,
    pub is_flags: bool,
    /// Integral storage tag.
    pub storage: TypeTag,
    pub values: Vec<ValueDef>,
    pub methods: Vec<CallableDef>,
    /// Error domain name, for enums that enumerate error codes.
    pub error_domain: Option<String>,
    pub deprecated: bool,
}

impl EnumDef {
    /// An enum stored as `gint32`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gtype_name: None,
            is_flags: false,
            storage: TypeTag::Int32,
            values: Vec::new(),
            methods: Vec::new(),
            error_domain: None,
            deprecated: false,
        }
    }

    /// A flags type stored as `guint32`.
    pub fn flags(name: impl Into<String>) -> Self {
        Self {
            is_flags: true,
            storage: TypeTag::Uint32,
            ..Self::new(name)
        }
    }

    pub fn with_gtype(mut self, gtype_name: impl Into<String>) -> Self {
        self.gtype_name = Some(gtype_name.into());
        self
    }

    pub fn with_storage(mut self, storage: TypeTag) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(ValueDef::new(name, value));
        self
    }

    pub fn with_method(mut self, method: CallableDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_error_domain(mut self, domain: impl Into<String>) -> Self {
        self.error_domain = Some(domain.into());
        self
    }
}

// ============================================================================
// Classes
// ============================================================================

/// Definition of an object (class) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    pub name: String,
    pub gtype_name: Option<String>,
    pub parent: Option<Reference>,
    pub type_struct: Option<Reference>,
    pub interfaces: Vec<Reference>,
    pub fields: Vec<FieldDef>,
    pub vfuncs: Vec<CallableDef>,
    pub methods: Vec<CallableDef>,
    pub constants: Vec<ConstantDef>,
    pub properties: Vec<PropertyDef>,
    pub signals: Vec<CallableDef>,
    pub deprecated: bool,
}

impl ObjectDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gtype_name: None,
            parent: None,
            type_struct: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            vfuncs: Vec::new(),
            methods: Vec::new(),
            constants: Vec::new(),
            properties: Vec::new(),
            signals: Vec::new(),
            deprecated: false,
        }
    }

    pub fn with_gtype(mut self, gtype_name: impl Into<String>) -> Self {
        self.gtype_name = Some(gtype_name.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<Reference>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_type_struct(mut self, type_struct: impl Into<Reference>) -> Self {
        self.type_struct = Some(type_struct.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<Reference>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_vfunc(mut self, vfunc: CallableDef) -> Self {
        self.vfuncs.push(vfunc);
        self
    }

    pub fn with_method(mut self, method: CallableDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constant(mut self, constant: ConstantDef) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_signal(mut self, signal: CallableDef) -> Self {
        self.signals.push(signal);
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

/// Definition of an interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDef {
    pub name: String,
    pub gtype_name: Option<String>,
    pub type_struct: Option<Reference>,
    pub prerequisites: Vec<Reference>,
    pub vfuncs: Vec<CallableDef>,
    pub methods: Vec<CallableDef>,
    pub constants: Vec<ConstantDef>,
    pub properties: Vec<PropertyDef>,
    pub signals: Vec<CallableDef>,
    pub deprecated: bool,
}

impl InterfaceDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gtype_name: None,
            type_struct: None,
            prerequisites: Vec::new(),
            vfuncs: Vec::new(),
            methods: Vec::new(),
            constants: Vec::new(),
            properties: Vec::new(),
            signals: Vec::new(),
            deprecated: false,
        }
    }

    pub fn with_gtype(mut self, gtype_name: impl Into<String>) -> Self {
        self.gtype_name = Some(gtype_name.into());
        self
    }

    pub fn with_type_struct(mut self, type_struct: impl Into<Reference>) -> Self {
        self.type_struct = Some(type_struct.into());
        self
    }

    pub fn with_prerequisite(mut self, prerequisite: impl Into<Reference>) -> Self {
        self.prerequisites.push(prerequisite.into());
        self
    }

    pub fn with_vfunc(mut self, vfunc: CallableDef) -> Self {
        self.vfuncs.push(vfunc);
        self
    }

    pub fn with_method(mut self, method: CallableDef) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constant(mut self, constant: ConstantDef) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_signal(mut self, signal: CallableDef) -> Self {
        self.signals.push(signal);
        self
    }
}
