//! Building typelibs from definitions.
//!
//! [`TypelibBuilder`] validates a set of [`EntryDef`]s and flattens them into
//! the blob arena of a [`Typelib`]. Top-level entries keep the order in which
//! they were added.

use log::debug;
use rustc_hash::FxHashMap;

use super::blob::*;
use super::defs::*;
use super::symbols::SymbolTable;
use super::{Typelib, TypelibData};
use crate::error::TypelibError;
use crate::gtype::GType;
use crate::quark::Quark;
use crate::tags::TypeTag;

/// Builder for a [`Typelib`].
///
/// # Example
///
/// ```
/// use gibridge_core::typelib::TypelibBuilder;
/// use gibridge_core::typelib::defs::{CallableDef, StructDef};
///
/// let typelib = TypelibBuilder::new("Demo", "1.0")
///     .with_dependency("GLib", "2.0")
///     .with_entry(StructDef::new("Point").with_size(8, 4))
///     .with_entry(CallableDef::function("init", "demo_init"))
///     .build()
///     .unwrap();
///
/// assert_eq!(typelib.namespace(), "Demo");
/// assert_eq!(typelib.n_entries(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TypelibBuilder {
    namespace: String,
    version: String,
    dependencies: Vec<String>,
    shared_libraries: Vec<String>,
    symbols: FxHashMap<String, usize>,
    entries: Vec<EntryDef>,
}

impl TypelibBuilder {
    pub fn new(namespace: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            version: version.into(),
            dependencies: Vec::new(),
            shared_libraries: Vec::new(),
            symbols: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Declare an immediate dependency on `namespace` at `version`.
    pub fn with_dependency(self, namespace: &str, version: &str) -> Self {
        self.with_raw_dependency(format!("{namespace}-{version}"))
    }

    /// Declare a dependency from its raw `Name-Version` string.
    pub fn with_raw_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    /// Name a shared library implementing this namespace.
    pub fn with_shared_library(mut self, name: impl Into<String>) -> Self {
        self.shared_libraries.push(name.into());
        self
    }

    /// Register a symbol address directly, bypassing the shared libraries.
    pub fn with_symbol(mut self, name: impl Into<String>, address: usize) -> Self {
        self.symbols.insert(name.into(), address);
        self
    }

    pub fn with_entry(mut self, entry: impl Into<EntryDef>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Validate the definitions and build the typelib.
    pub fn build(self) -> Result<Typelib, TypelibError> {
        if self.namespace.is_empty()
            || self.namespace.contains(['.', '-'])
            || self.namespace.contains(char::is_whitespace)
        {
            return Err(TypelibError::InvalidNamespace(self.namespace));
        }
        if self.version.is_empty() || self.version.contains('-') {
            return Err(TypelibError::InvalidVersion {
                namespace: self.namespace,
                version: self.version,
            });
        }

        let mut by_name = FxHashMap::default();
        for (index, entry) in self.entries.iter().enumerate() {
            let id = BlobId(index as u32);
            if by_name.insert(entry.name().to_owned(), id).is_some() {
                return Err(TypelibError::DuplicateEntry {
                    namespace: self.namespace,
                    name: entry.name().to_owned(),
                });
            }
        }

        let mut lowering = Lowering {
            namespace: &self.namespace,
            names: &by_name,
            blobs: vec![None; self.entries.len()],
        };
        let mut by_gtype = FxHashMap::default();
        let mut by_error_domain = FxHashMap::default();
        for (index, entry) in self.entries.iter().enumerate() {
            let blob = lowering.entry(entry)?;
            let id = BlobId(index as u32);
            if let Some(type_name) = blob.registration().and_then(|r| r.type_name.as_deref()) {
                by_gtype.insert(GType::from_name(type_name), id);
            }
            if let Blob::Enum(EnumBlob {
                error_domain: Some(domain),
                ..
            }) = &blob
            {
                by_error_domain.insert(Quark::intern(domain), id);
            }
            lowering.blobs[index] = Some(blob);
        }

        let blobs: Vec<Blob> = lowering.blobs.into_iter().flatten().collect();
        let directory = (0..self.entries.len() as u32).map(BlobId).collect();
        debug!(
            "built typelib {}-{} with {} entries ({} blobs)",
            self.namespace,
            self.version,
            self.entries.len(),
            blobs.len()
        );

        Ok(Typelib::from_data(TypelibData {
            symbols: SymbolTable::new(self.symbols, self.shared_libraries.clone()),
            namespace: self.namespace,
            version: self.version,
            dependencies: self.dependencies,
            shared_libraries: self.shared_libraries,
            blobs,
            directory,
            by_name,
            by_gtype,
            by_error_domain,
        }))
    }
}

/// Where a callable is being placed.
#[derive(Clone, Copy)]
enum Slot {
    TopLevel,
    Method,
    Signal,
    VFunc,
}

struct Lowering<'a> {
    namespace: &'a str,
    names: &'a FxHashMap<String, BlobId>,
    blobs: Vec<Option<Blob>>,
}

impl Lowering<'_> {
    fn push(&mut self, blob: Blob) -> BlobId {
        let id = BlobId(self.blobs.len() as u32);
        self.blobs.push(Some(blob));
        id
    }

    fn reference(&self, reference: &Reference) -> Result<EntryRef, TypelibError> {
        match reference.namespace.as_deref() {
            Some(namespace) if namespace != self.namespace => Ok(EntryRef::External {
                namespace: namespace.to_owned(),
                name: reference.name.clone(),
            }),
            _ => self
                .names
                .get(&reference.name)
                .map(|id| EntryRef::Local(*id))
                .ok_or_else(|| TypelibError::UnknownEntry {
                    namespace: self.namespace.to_owned(),
                    name: reference.name.clone(),
                }),
        }
    }

    fn references(&self, references: &[Reference]) -> Result<Vec<EntryRef>, TypelibError> {
        references.iter().map(|r| self.reference(r)).collect()
    }

    fn optional_reference(&self, reference: Option<&Reference>) -> Result<Option<EntryRef>, TypelibError> {
        reference.map(|r| self.reference(r)).transpose()
    }

    fn entry(&mut self, entry: &EntryDef) -> Result<Blob, TypelibError> {
        Ok(match entry {
            EntryDef::Function(def) | EntryDef::Callback(def) => self.callable_blob(def, Slot::TopLevel)?,
            EntryDef::Struct(def) => Blob::Struct(StructBlob {
                header: header(&def.name, def.deprecated),
                registration: registration(&def.gtype_name),
                size: def.size,
                alignment: def.alignment,
                is_gtype_struct: def.is_gtype_struct,
                fields: self.fields(&def.fields)?,
                methods: self.callables(&def.methods, Slot::Method)?,
            }),
            EntryDef::Union(def) => Blob::Union(UnionBlob {
                header: header(&def.name, def.deprecated),
                registration: registration(&def.gtype_name),
                size: def.size,
                alignment: def.alignment,
                fields: self.fields(&def.fields)?,
                methods: self.callables(&def.methods, Slot::Method)?,
            }),
            EntryDef::Enum(def) => self.enum_blob(def)?,
            EntryDef::Object(def) => Blob::Object(ObjectBlob {
                header: header(&def.name, def.deprecated),
                registration: registration(&def.gtype_name),
                parent: self.optional_reference(def.parent.as_ref())?,
                class_struct: self.optional_reference(def.type_struct.as_ref())?,
                interfaces: self.references(&def.interfaces)?,
                fields: self.fields(&def.fields)?,
                vfuncs: self.callables(&def.vfuncs, Slot::VFunc)?,
                methods: self.callables(&def.methods, Slot::Method)?,
                constants: self.constants(&def.constants)?,
                properties: self.properties(&def.properties)?,
                signals: self.callables(&def.signals, Slot::Signal)?,
            }),
            EntryDef::Interface(def) => Blob::Interface(InterfaceBlob {
                header: header(&def.name, def.deprecated),
                registration: registration(&def.gtype_name),
                iface_struct: self.optional_reference(def.type_struct.as_ref())?,
                prerequisites: self.references(&def.prerequisites)?,
                vfuncs: self.callables(&def.vfuncs, Slot::VFunc)?,
                methods: self.callables(&def.methods, Slot::Method)?,
                constants: self.constants(&def.constants)?,
                properties: self.properties(&def.properties)?,
                signals: self.callables(&def.signals, Slot::Signal)?,
            }),
            EntryDef::Constant(def) => self.constant_blob(def)?,
        })
    }

    fn enum_blob(&mut self, def: &EnumDef) -> Result<Blob, TypelibError> {
        if !def.storage.is_integral() {
            return Err(TypelibError::InvalidStorage {
                name: def.name.clone(),
                tag: def.storage.as_str(),
            });
        }
        let values = def
            .values
            .iter()
            .map(|value| {
                self.push(Blob::Value(ValueBlob {
                    header: header(&value.name, value.deprecated),
                    value: value.value,
                }))
            })
            .collect();
        let blob = EnumBlob {
            header: header(&def.name, def.deprecated),
            registration: registration(&def.gtype_name),
            storage: def.storage,
            values,
            methods: self.callables(&def.methods, Slot::Method)?,
            error_domain: def.error_domain.clone(),
        };
        Ok(if def.is_flags { Blob::Flags(blob) } else { Blob::Enum(blob) })
    }

    fn type_blob(&mut self, def: &TypeDef) -> Result<BlobId, TypelibError> {
        let expected = def.tag.param_count();
        if def.params.len() != expected {
            return Err(TypelibError::ParamCount {
                tag: def.tag.as_str(),
                expected,
                found: def.params.len(),
            });
        }
        let interface = match (def.tag, def.interface.as_ref()) {
            (TypeTag::Interface, Some(target)) => Some(self.reference(target)?),
            (TypeTag::Interface, None) => return Err(TypelibError::MissingInterface),
            _ => None,
        };
        let array = match def.tag {
            TypeTag::Array => Some(def.array.unwrap_or_default()),
            _ => None,
        };
        let params = def
            .params
            .iter()
            .map(|param| self.type_blob(param))
            .collect::<Result<_, _>>()?;
        Ok(self.push(Blob::Type(TypeBlob {
            tag: def.tag,
            is_pointer: def.is_pointer,
            params,
            interface,
            array,
        })))
    }

    fn callables(&mut self, defs: &[CallableDef], slot: Slot) -> Result<Vec<BlobId>, TypelibError> {
        defs.iter()
            .map(|def| {
                let blob = self.callable_blob(def, slot)?;
                Ok(self.push(blob))
            })
            .collect()
    }

    fn callable_blob(&mut self, def: &CallableDef, slot: Slot) -> Result<Blob, TypelibError> {
        let callable = CallableBlob {
            header: header(&def.name, def.deprecated),
            return_type: self.type_blob(&def.return_type)?,
            args: self.args(&def.args)?,
            caller_owns: def.caller_owns,
            may_return_null: def.may_return_null,
            throws: def.throws,
        };
        match (&def.kind, slot) {
            (CallableKind::Function { symbol, flags }, Slot::TopLevel | Slot::Method) => {
                Ok(Blob::Function(FunctionBlob {
                    callable,
                    symbol: symbol.clone(),
                    flags: *flags,
                }))
            }
            (CallableKind::Callback, Slot::TopLevel) => Ok(Blob::Callback(callable)),
            (CallableKind::Signal { flags }, Slot::Signal) => Ok(Blob::Signal(SignalBlob {
                callable,
                flags: *flags,
            })),
            (CallableKind::VFunc { flags, offset }, Slot::VFunc) => Ok(Blob::VFunc(VFuncBlob {
                callable,
                flags: *flags,
                offset: *offset,
            })),
            (kind, _) => Err(TypelibError::MisplacedCallable {
                name: def.name.clone(),
                kind: kind.as_str(),
            }),
        }
    }

    fn args(&mut self, defs: &[ArgDef]) -> Result<Vec<BlobId>, TypelibError> {
        defs.iter()
            .map(|def| {
                let type_info = self.type_blob(&def.type_def)?;
                Ok(self.push(Blob::Arg(ArgBlob {
                    header: header(&def.name, false),
                    type_info,
                    direction: def.direction,
                    transfer: def.transfer,
                    caller_allocates: def.caller_allocates,
                    optional: def.optional,
                    nullable: def.nullable,
                })))
            })
            .collect()
    }

    fn fields(&mut self, defs: &[FieldDef]) -> Result<Vec<BlobId>, TypelibError> {
        defs.iter()
            .map(|def| {
                let type_info = self.type_blob(&def.type_def)?;
                Ok(self.push(Blob::Field(FieldBlob {
                    header: header(&def.name, false),
                    type_info,
                    flags: def.flags,
                    size: def.size,
                    offset: def.offset,
                })))
            })
            .collect()
    }

    fn properties(&mut self, defs: &[PropertyDef]) -> Result<Vec<BlobId>, TypelibError> {
        defs.iter()
            .map(|def| {
                let type_info = self.type_blob(&def.type_def)?;
                Ok(self.push(Blob::Property(PropertyBlob {
                    header: header(&def.name, def.deprecated),
                    type_info,
                    flags: def.flags,
                    transfer: def.transfer,
                })))
            })
            .collect()
    }

    fn constants(&mut self, defs: &[ConstantDef]) -> Result<Vec<BlobId>, TypelibError> {
        defs.iter()
            .map(|def| {
                let blob = self.constant_blob(def)?;
                Ok(self.push(blob))
            })
            .collect()
    }

    fn constant_blob(&mut self, def: &ConstantDef) -> Result<Blob, TypelibError> {
        Ok(Blob::Constant(ConstantBlob {
            header: header(&def.name, def.deprecated),
            type_info: self.type_blob(&def.type_def)?,
        }))
    }
}

fn header(name: &str, deprecated: bool) -> Header {
    Header {
        name: name.to_owned(),
        deprecated,
    }
}

fn registration(gtype_name: &Option<String>) -> Registration {
    Registration {
        type_name: gtype_name.clone(),
    }
}
