//! Host objects: the userdata kinds the bridge hands out.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use crate::error::{HostError, HostResult};
use crate::value::Value;

/// The four userdata kinds. Each has its own host type name, which is what
/// `isinfo` and the host's type checks compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Info,
    Infos,
    Namespace,
    Resolver,
}

impl ObjectKind {
    pub const fn type_name(self) -> &'static str {
        match self {
            ObjectKind::Info => "gi.info",
            ObjectKind::Infos => "gi.infos",
            ObjectKind::Namespace => "gi.namespace",
            ObjectKind::Resolver => "gi.resolver",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A userdata object living in the host.
///
/// `index` implements `object[key]`, `len` implements `#object`. Objects that
/// do not support length return `None`.
pub trait HostObject: Send + Sync {
    fn kind(&self) -> ObjectKind;

    fn index(&self, key: &Value) -> HostResult<Value>;

    fn len(&self) -> Option<usize> {
        None
    }

    /// `object == other`, only called when both have the same kind.
    fn equals(&self, _other: &dyn HostObject) -> bool {
        false
    }

    /// Short text for debugging output.
    fn describe(&self) -> String {
        self.kind().type_name().to_owned()
    }

    fn as_any(&self) -> &dyn Any;
}

/// Coerce an argument to a string the way the host's string checks do:
/// strings pass through, integers are converted.
pub fn check_string<'a>(value: &'a Value, position: usize, function: &'static str) -> HostResult<Cow<'a, str>> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s)),
        Value::Integer(i) => Ok(Cow::Owned(i.to_string())),
        other => Err(HostError::type_mismatch(position, function, "string", other.type_name())),
    }
}

/// Like [`check_string`], but nil is accepted and yields `None`.
pub fn opt_string<'a>(value: Option<&'a Value>, position: usize, function: &'static str) -> HostResult<Option<Cow<'a, str>>> {
    match value {
        None | Some(Value::Nil) => Ok(None),
        Some(value) => check_string(value, position, function).map(Some),
    }
}
