//! Flattened descriptor records stored in a typelib.
//!
//! A typelib is an arena of blobs. Top-level entries occupy the first slots
//! of the arena in directory order; nested records (fields, arguments, type
//! descriptors, ...) follow and are referenced by [`BlobId`].

use crate::flags::{FieldFlags, FunctionFlags, ParamFlags, SignalFlags, VFuncFlags};
use crate::tags::{ArrayType, Direction, InfoType, TypeTag};
use crate::transfer::Transfer;

/// Index of a blob inside its typelib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlobId(pub(crate) u32);

impl BlobId {
    /// Position of the blob in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A reference to a top-level entry, either in the same typelib or in
/// another namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    /// Entry of the same typelib.
    Local(BlobId),
    /// Entry of another namespace, resolved through the repository.
    External {
        /// Target namespace.
        namespace: String,
        /// Target entry name.
        name: String,
    },
}

/// Fields shared by every named blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub name: String,
    pub deprecated: bool,
}

/// GType registration data of a registered type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Registration {
    pub type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CallableBlob {
    pub header: Header,
    pub args: Vec<BlobId>,
    pub return_type: BlobId,
    pub caller_owns: Transfer,
    pub may_return_null: bool,
    pub throws: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FunctionBlob {
    pub callable: CallableBlob,
    pub symbol: String,
    pub flags: FunctionFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SignalBlob {
    pub callable: CallableBlob,
    pub flags: SignalFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VFuncBlob {
    pub callable: CallableBlob,
    pub flags: VFuncFlags,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StructBlob {
    pub header: Header,
    pub registration: Registration,
    pub size: usize,
    pub alignment: usize,
    pub is_gtype_struct: bool,
    pub fields: Vec<BlobId>,
    pub methods: Vec<BlobId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnionBlob {
    pub header: Header,
    pub registration: Registration,
    pub size: usize,
    pub alignment: usize,
    pub fields: Vec<BlobId>,
    pub methods: Vec<BlobId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumBlob {
    pub header: Header,
    pub registration: Registration,
    pub storage: TypeTag,
    pub values: Vec<BlobId>,
    pub methods: Vec<BlobId>,
    pub error_domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ObjectBlob {
    pub header: Header,
    pub registration: Registration,
    pub parent: Option<EntryRef>,
    pub class_struct: Option<EntryRef>,
    pub interfaces: Vec<EntryRef>,
    pub fields: Vec<BlobId>,
    pub vfuncs: Vec<BlobId>,
    pub methods: Vec<BlobId>,
    pub constants: Vec<BlobId>,
    pub properties: Vec<BlobId>,
    pub signals: Vec<BlobId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InterfaceBlob {
    pub header: Header,
    pub registration: Registration,
    pub iface_struct: Option<EntryRef>,
    pub prerequisites: Vec<EntryRef>,
    pub vfuncs: Vec<BlobId>,
    pub methods: Vec<BlobId>,
    pub constants: Vec<BlobId>,
    pub properties: Vec<BlobId>,
    pub signals: Vec<BlobId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConstantBlob {
    pub header: Header,
    pub type_info: BlobId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValueBlob {
    pub header: Header,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PropertyBlob {
    pub header: Header,
    pub type_info: BlobId,
    pub flags: ParamFlags,
    pub transfer: Transfer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldBlob {
    pub header: Header,
    pub type_info: BlobId,
    pub flags: FieldFlags,
    pub size: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgBlob {
    pub header: Header,
    pub type_info: BlobId,
    pub direction: Direction,
    pub transfer: Transfer,
    pub caller_allocates: bool,
    pub optional: bool,
    pub nullable: bool,
}

/// Array-specific part of a type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayShape {
    /// Storage kind.
    pub array_type: ArrayType,
    /// Whether the array ends with a zero element.
    pub zero_terminated: bool,
    /// Index of the argument holding the length, if any.
    pub length: Option<u32>,
    /// Fixed element count, if any.
    pub fixed_size: Option<usize>,
}

impl Default for ArrayShape {
    fn default() -> Self {
        Self {
            array_type: ArrayType::C,
            zero_terminated: false,
            length: None,
            fixed_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TypeBlob {
    pub tag: TypeTag,
    pub is_pointer: bool,
    pub params: Vec<BlobId>,
    pub interface: Option<EntryRef>,
    pub array: Option<ArrayShape>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Blob {
    Function(FunctionBlob),
    Callback(CallableBlob),
    Struct(StructBlob),
    Union(UnionBlob),
    Enum(EnumBlob),
    Flags(EnumBlob),
    Object(ObjectBlob),
    Interface(InterfaceBlob),
    Constant(ConstantBlob),
    Value(ValueBlob),
    Signal(SignalBlob),
    VFunc(VFuncBlob),
    Property(PropertyBlob),
    Field(FieldBlob),
    Arg(ArgBlob),
    Type(TypeBlob),
}

impl Blob {
    pub fn info_type(&self) -> InfoType {
        match self {
            Blob::Function(_) => InfoType::Function,
            Blob::Callback(_) => InfoType::Callback,
            Blob::Struct(_) => InfoType::Struct,
            Blob::Union(_) => InfoType::Union,
            Blob::Enum(_) => InfoType::Enum,
            Blob::Flags(_) => InfoType::Flags,
            Blob::Object(_) => InfoType::Object,
            Blob::Interface(_) => InfoType::Interface,
            Blob::Constant(_) => InfoType::Constant,
            Blob::Value(_) => InfoType::Value,
            Blob::Signal(_) => InfoType::Signal,
            Blob::VFunc(_) => InfoType::VFunc,
            Blob::Property(_) => InfoType::Property,
            Blob::Field(_) => InfoType::Field,
            Blob::Arg(_) => InfoType::Arg,
            Blob::Type(_) => InfoType::Type,
        }
    }

    /// Name and deprecation; `None` for type descriptors.
    pub fn header(&self) -> Option<&Header> {
        match self {
            Blob::Function(b) => Some(&b.callable.header),
            Blob::Callback(b) => Some(&b.header),
            Blob::Struct(b) => Some(&b.header),
            Blob::Union(b) => Some(&b.header),
            Blob::Enum(b) | Blob::Flags(b) => Some(&b.header),
            Blob::Object(b) => Some(&b.header),
            Blob::Interface(b) => Some(&b.header),
            Blob::Constant(b) => Some(&b.header),
            Blob::Value(b) => Some(&b.header),
            Blob::Signal(b) => Some(&b.callable.header),
            Blob::VFunc(b) => Some(&b.callable.header),
            Blob::Property(b) => Some(&b.header),
            Blob::Field(b) => Some(&b.header),
            Blob::Arg(b) => Some(&b.header),
            Blob::Type(_) => None,
        }
    }

    pub fn callable(&self) -> Option<&CallableBlob> {
        match self {
            Blob::Function(b) => Some(&b.callable),
            Blob::Callback(b) => Some(b),
            Blob::Signal(b) => Some(&b.callable),
            Blob::VFunc(b) => Some(&b.callable),
            _ => None,
        }
    }

    pub fn registration(&self) -> Option<&Registration> {
        match self {
            Blob::Struct(b) => Some(&b.registration),
            Blob::Union(b) => Some(&b.registration),
            Blob::Enum(b) | Blob::Flags(b) => Some(&b.registration),
            Blob::Object(b) => Some(&b.registration),
            Blob::Interface(b) => Some(&b.registration),
            _ => None,
        }
    }
}
