//! `gi.info` userdata: property access on a single descriptor.
//!
//! A property name is resolved through ordered checks. The first check that
//! applies to the descriptor answers; a name that nothing answers reads as
//! nil.
//!
//! 1. `type`
//! 2. the `is_<kind>` predicates
//! 3. `name`, `namespace`, `fullname`, `deprecated`, `container` (not for
//!    type descriptors)
//! 4. `typeinfo` for args, constants, properties and fields
//! 5. member collections (`fields`, `methods`, `args`, ...)
//! 6. kind-specific scalars

use std::any::Any;

use gibridge_core::{
    BaseInfo, Direction, FIELD_FLAG_NAMES, FUNCTION_FLAG_NAMES, InfoType, Relation, SIGNAL_FLAG_NAMES,
    TypeTag, VFUNC_FLAG_NAMES,
};
use log::trace;

use crate::error::HostResult;
use crate::infos::InfoCollection;
use crate::object::{HostObject, ObjectKind, check_string};
use crate::value::{Table, Value};

/// Host handle on one descriptor. Holds one reference on it.
#[derive(Debug, Clone)]
pub struct InfoHandle {
    info: BaseInfo,
}

impl InfoHandle {
    pub fn new(info: BaseInfo) -> Self {
        Self { info }
    }

    /// Wrap an optional descriptor; `None` becomes nil.
    pub fn value(info: Option<BaseInfo>) -> Value {
        match info {
            Some(info) => Value::userdata(InfoHandle::new(info)),
            None => Value::Nil,
        }
    }

    pub fn info(&self) -> &BaseInfo {
        &self.info
    }

    /// Read the property `name`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn property(&self, name: &str) -> Value {
        let info = &self.info;
        let kind = info.info_type();

        if name == "type" {
            return Value::from(kind.as_str());
        }
        if let Some(matches) = kind_predicate(kind, name) {
            return Value::Boolean(matches);
        }
        if kind != InfoType::Type
            && let Some(value) = self.common(name)
        {
            return value;
        }
        if name == "typeinfo"
            && let Some(type_info) = info.type_info()
        {
            return InfoHandle::value(Some(type_info));
        }
        if let Some(relation) = Relation::from_name(name)
            && let Some(collection) = InfoCollection::new(info.clone(), relation)
        {
            return Value::userdata(collection);
        }

        let specific = match kind {
            kind if kind.is_registered_type() => self.registered(name),
            kind if kind.is_callable() => self.callable(name),
            InfoType::Value if name == "value" => info.value().map(Value::Integer),
            InfoType::Arg => self.arg(name),
            InfoType::Property => self.property_member(name),
            InfoType::Field => self.field(name),
            InfoType::Type => self.type_descriptor(name),
            _ => None,
        };

        specific.unwrap_or_else(|| {
            trace!("no property '{name}' on {kind} info");
            Value::Nil
        })
    }

    fn common(&self, name: &str) -> Option<Value> {
        let info = &self.info;
        let value = match name {
            "name" => info.name().map(Value::from).unwrap_or_default(),
            "namespace" => Value::from(info.namespace()),
            "fullname" => Value::from(info.full_name()),
            "deprecated" => Value::Boolean(info.is_deprecated()),
            "container" => InfoHandle::value(info.container()),
            _ => return None,
        };
        Some(value)
    }

    fn registered(&self, name: &str) -> Option<Value> {
        let info = &self.info;
        if name == "gtype" {
            let gtype = info.gtype()?;
            return Some(if gtype.is_none() {
                Value::Nil
            } else {
                Value::LightUserdata(gtype.address())
            });
        }
        if name == "type_name" {
            return info.type_name().map(Value::from);
        }

        match (info.info_type(), name) {
            (InfoType::Struct, "is_gtype_struct") => info.is_gtype_struct().map(Value::Boolean),
            (InfoType::Struct | InfoType::Union, "size") => info.size().and_then(usize_value),
            (InfoType::Struct | InfoType::Union, "alignment") => info.alignment().and_then(usize_value),
            (InfoType::Object, "parent") => Some(InfoHandle::value(info.parent())),
            (InfoType::Object | InfoType::Interface, "type_struct") => Some(InfoHandle::value(info.type_struct())),
            (InfoType::Enum | InfoType::Flags, "storage") => info.storage_type().map(|tag| Value::from(tag.as_str())),
            (InfoType::Enum | InfoType::Flags, "error_domain") => Some(
                info.error_domain_quark()
                    .map(|quark| Value::Integer(i64::from(quark.0)))
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    fn callable(&self, name: &str) -> Option<Value> {
        let info = &self.info;
        match name {
            "return_type" => Some(InfoHandle::value(info.return_type())),
            "return_transfer" => info.caller_owns().map(|transfer| Value::from(transfer.as_tag())),
            "may_return_null" => info.may_return_null().map(Value::Boolean),
            "throws" => info.can_throw().map(Value::Boolean),
            "offset" => info.vfunc_offset().map(|offset| Value::Integer(i64::from(offset))),
            "flags" => match info.info_type() {
                InfoType::Function => {
                    let flags = info.function_flags()?;
                    Some(flag_table(FUNCTION_FLAG_NAMES.iter().map(|(flag, name)| (flags.contains(*flag), *name))))
                }
                InfoType::Signal => {
                    let flags = info.signal_flags()?;
                    Some(flag_table(SIGNAL_FLAG_NAMES.iter().map(|(flag, name)| (flags.contains(*flag), *name))))
                }
                InfoType::VFunc => {
                    let flags = info.vfunc_flags()?;
                    Some(flag_table(VFUNC_FLAG_NAMES.iter().map(|(flag, name)| (flags.contains(*flag), *name))))
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn arg(&self, name: &str) -> Option<Value> {
        let info = &self.info;
        match name {
            "direction" => {
                let direction = match info.direction()? {
                    Direction::In => "in",
                    Direction::Out if info.is_caller_allocates() == Some(true) => "out-caller-alloc",
                    Direction::Out => "out",
                    Direction::InOut => "inout",
                };
                Some(Value::from(direction))
            }
            "transfer" => info.ownership_transfer().map(|transfer| Value::from(transfer.as_tag())),
            "optional" => {
                let optional = info.is_optional()? || info.may_be_null()?;
                Some(Value::Boolean(optional))
            }
            _ => None,
        }
    }

    fn property_member(&self, name: &str) -> Option<Value> {
        let info = &self.info;
        match name {
            "flags" => info.property_flags().map(|flags| Value::Integer(i64::from(flags.bits()))),
            "transfer" => info.ownership_transfer().map(|transfer| Value::from(transfer.as_tag())),
            _ => None,
        }
    }

    fn field(&self, name: &str) -> Option<Value> {
        let info = &self.info;
        match name {
            "flags" => {
                let flags = info.field_flags()?;
                Some(flag_table(FIELD_FLAG_NAMES.iter().map(|(flag, name)| (flags.contains(*flag), *name))))
            }
            "size" => info.field_size().and_then(usize_value),
            "offset" => info.field_offset().and_then(usize_value),
            _ => None,
        }
    }

    fn type_descriptor(&self, name: &str) -> Option<Value> {
        let info = &self.info;
        let tag = info.tag()?;
        match name {
            "tag" => Some(Value::from(tag.as_str())),
            "is_basic" => Some(Value::Boolean(tag.is_basic())),
            "is_pointer" => info.is_pointer().map(Value::Boolean),
            "params" => {
                let count = info.n_params()?;
                if count == 0 {
                    return None;
                }
                let mut params = Table::new();
                for index in 0..count {
                    params.push(InfoHandle::value(info.param_type(index)));
                }
                Some(Value::Table(params))
            }
            "interface" if tag == TypeTag::Interface => Some(InfoHandle::value(info.interface())),
            "array_type" if tag == TypeTag::Array => info.array_type().map(|kind| Value::from(kind.as_str())),
            "is_zero_terminated" if tag == TypeTag::Array => info.is_zero_terminated().map(Value::Boolean),
            "array_length" => info.array_length_index().map(|index| Value::Integer(i64::from(index))),
            "fixed_size" => info.array_fixed_size().and_then(usize_value),
            _ => None,
        }
    }
}

/// Answer an `is_<kind>` predicate, or `None` when `name` is not one.
fn kind_predicate(kind: InfoType, name: &str) -> Option<bool> {
    let tested = name.strip_prefix("is_")?;
    match tested {
        "callable" => Some(kind.is_callable()),
        "registered_type" => Some(kind.is_registered_type()),
        "enum" => Some(kind.is_enum()),
        _ => InfoType::PRIORITY
            .into_iter()
            .find(|candidate| candidate.as_str() == tested)
            .map(|candidate| candidate == kind),
    }
}

/// A table holding `true` under the name of every set flag.
fn flag_table<'a>(flags: impl Iterator<Item = (bool, &'a str)>) -> Value {
    let mut table = Table::new();
    for (set, name) in flags {
        if set {
            table.set(name, true);
        }
    }
    Value::Table(table)
}

/// Sizes and offsets beyond the host integer range read as nil.
fn usize_value(n: usize) -> Option<Value> {
    i64::try_from(n).ok().map(Value::Integer)
}

impl HostObject for InfoHandle {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Info
    }

    fn index(&self, key: &Value) -> HostResult<Value> {
        let name = check_string(key, 2, "index")?;
        Ok(self.property(&name))
    }

    fn equals(&self, other: &dyn HostObject) -> bool {
        other
            .as_any()
            .downcast_ref::<InfoHandle>()
            .is_some_and(|other| self.info.equal(&other.info))
    }

    fn describe(&self) -> String {
        format!("{} {}", self.info.info_type(), self.info.full_name())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
