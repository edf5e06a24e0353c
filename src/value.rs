//! Host value model.
//!
//! [`Value`] is what crosses the boundary to the embedding host: scalars,
//! strings, light pointers, tables and opaque userdata objects. Userdata are
//! reference counted; dropping the last `Value` holding one finalises it.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::object::{HostObject, ObjectKind};

/// A dynamically-typed host value.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Boolean(bool),
    Integer(i64),
    String(String),
    /// A raw address carried without ownership.
    LightUserdata(usize),
    Table(Table),
    UserData(Arc<dyn HostObject>),
}

impl Value {
    /// Wrap a host object.
    pub fn userdata(object: impl HostObject + 'static) -> Self {
        Value::UserData(Arc::new(object))
    }

    /// The host's name for this value's type, as used in argument errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "number",
            Value::String(_) => "string",
            Value::LightUserdata(_) | Value::UserData(_) => "userdata",
            Value::Table(_) => "table",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_light_userdata(&self) -> Option<usize> {
        match self {
            Value::LightUserdata(address) => Some(*address),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn HostObject> {
        match self {
            Value::UserData(object) => Some(object.as_ref()),
            _ => None,
        }
    }

    /// Downcast a userdata value to a concrete host object.
    pub fn downcast<T: HostObject + 'static>(&self) -> Option<&T> {
        self.as_object()?.as_any().downcast_ref::<T>()
    }

    /// Kind of a userdata value.
    pub fn object_kind(&self) -> Option<ObjectKind> {
        self.as_object().map(HostObject::kind)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::LightUserdata(a), Value::LightUserdata(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => a == b,
            (Value::UserData(a), Value::UserData(b)) => {
                Arc::ptr_eq(a, b) || (a.kind() == b.kind() && a.equals(b.as_ref()))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::LightUserdata(address) => write!(f, "lightuserdata({address:#x})"),
            Value::Table(table) => table.fmt(f),
            Value::UserData(object) => write!(f, "{}: {:?}", object.kind().type_name(), object.describe()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

// ============================================================================
// Tables
// ============================================================================

/// Key of a host table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableKey {
    Integer(i64),
    String(String),
}

impl From<i64> for TableKey {
    fn from(value: i64) -> Self {
        TableKey::Integer(value)
    }
}

impl From<&str> for TableKey {
    fn from(value: &str) -> Self {
        TableKey::String(value.to_owned())
    }
}

impl From<String> for TableKey {
    fn from(value: String) -> Self {
        TableKey::String(value)
    }
}

/// A host table with integer and string keys.
#[derive(Clone, Default, PartialEq)]
pub struct Table {
    entries: FxHashMap<TableKey, Value>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`. Setting nil removes the key.
    pub fn set(&mut self, key: impl Into<TableKey>, value: impl Into<Value>) {
        let key = key.into();
        match value.into() {
            Value::Nil => {
                self.entries.remove(&key);
            }
            value => {
                self.entries.insert(key, value);
            }
        }
    }

    /// Append at position `len() + 1`.
    pub fn push(&mut self, value: impl Into<Value>) {
        let next = self.len() as i64 + 1;
        self.set(next, value);
    }

    pub fn get(&self, key: impl Into<TableKey>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Length of the sequence part: the number of consecutive integer keys
    /// starting at 1.
    pub fn len(&self) -> usize {
        let mut n = 0;
        while self.entries.contains_key(&TableKey::Integer(n as i64 + 1)) {
            n += 1;
        }
        n
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys, sequence or not.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TableKey, &Value)> {
        self.entries.iter()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
