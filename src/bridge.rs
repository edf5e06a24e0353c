//! The `gi` entry table.
//!
//! [`Gi`] is what the host binds as its introspection module. It exposes
//! `require` and `isinfo` as callable entries and resolves other keys
//! through [`Gi::index`]:
//!
//! - light pointer: registered type with that GType
//! - integer: enum owning that error-domain quark
//! - string: an already loaded namespace (never loads)

use gibridge_core::{GType, InfoType, Quark};
use gibridge_registry::Repository;
use log::{debug, trace};

use crate::error::{HostError, HostResult};
use crate::info_handle::InfoHandle;
use crate::namespace::NamespaceHandle;
use crate::object::{ObjectKind, check_string, opt_string};
use crate::value::{Table, Value};

#[derive(Clone)]
pub struct Gi {
    repository: Repository,
}

impl Gi {
    /// Bridge over an explicit repository.
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Bridge over the process-wide repository.
    pub fn global() -> Self {
        Self::new(Repository::global().clone())
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// `require(namespace [, version [, search_dir]])`.
    ///
    /// Returns the namespace handle on success. A load failure is not raised;
    /// it comes back as `false, message, code`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn require(&self, args: &[Value]) -> HostResult<Vec<Value>> {
        let namespace = check_string(args.first().unwrap_or(&Value::Nil), 1, "require")?;
        let version = opt_string(args.get(1), 2, "require")?;
        let search_dir = opt_string(args.get(2), 3, "require")?;

        let loaded = match &search_dir {
            Some(dir) => self
                .repository
                .require_private(&**dir, &namespace, version.as_deref()),
            None => self.repository.require(&namespace, version.as_deref()),
        };

        match loaded {
            Ok(typelib) => Ok(vec![Value::userdata(NamespaceHandle::new(
                self.repository.clone(),
                typelib.namespace(),
            ))]),
            Err(err) => {
                debug!("require '{namespace}' failed: {err}");
                Ok(vec![
                    Value::Boolean(false),
                    Value::from(err.to_string()),
                    Value::Integer(err.code()),
                ])
            }
        }
    }

    /// Whether `value` is a `gi.info` userdata.
    pub fn isinfo(&self, value: &Value) -> bool {
        value.object_kind() == Some(ObjectKind::Info)
    }

    /// `gi[key]`.
    pub fn index(&self, key: &Value) -> HostResult<Value> {
        match key {
            Value::LightUserdata(address) => {
                let gtype = GType::from_address(*address);
                if gtype == GType::INVALID {
                    return Ok(Value::Nil);
                }
                Ok(InfoHandle::value(self.repository.find_by_gtype(gtype)))
            }
            Value::Integer(quark) => {
                let info = u32::try_from(*quark)
                    .ok()
                    .filter(|quark| *quark != 0)
                    .and_then(|quark| self.repository.find_by_error_domain(Quark(quark)));
                Ok(InfoHandle::value(info))
            }
            key => {
                let namespace = check_string(key, 2, "index")?;
                if self.repository.is_registered(&namespace, None) {
                    Ok(Value::userdata(NamespaceHandle::new(self.repository.clone(), namespace)))
                } else {
                    trace!("namespace '{namespace}' is not loaded");
                    Ok(Value::Nil)
                }
            }
        }
    }

    /// Call the entry `name` of the table.
    pub fn call(&self, name: &str, args: &[Value]) -> HostResult<Vec<Value>> {
        match name {
            "require" => self.require(args),
            "isinfo" => Ok(vec![Value::Boolean(self.isinfo(args.first().unwrap_or(&Value::Nil)))]),
            other => Err(HostError::NotCallable(other.to_owned())),
        }
    }

    /// Address of the native function stored under `name` in a host type
    /// table.
    ///
    /// The entry is either a `gi.info` for a function, resolved through its
    /// typelib's symbols, or a light pointer taken as is.
    pub fn load_function(&self, table: &Table, name: &str) -> Option<usize> {
        match table.get(name)? {
            Value::LightUserdata(address) => Some(*address),
            value => {
                let info = value.downcast::<InfoHandle>()?.info();
                if info.info_type() != InfoType::Function {
                    return None;
                }
                info.typelib().symbol(info.symbol()?)
            }
        }
    }
}

/// `target[key]` for any host value.
pub fn index_value(target: &Value, key: &Value) -> HostResult<Value> {
    match target {
        Value::UserData(object) => object.index(key),
        Value::Table(table) => Ok(match key {
            Value::Integer(i) => table.get(*i).cloned().unwrap_or_default(),
            Value::String(s) => table.get(s.as_str()).cloned().unwrap_or_default(),
            _ => Value::Nil,
        }),
        other => Err(HostError::NotIndexable(other.type_name())),
    }
}

/// `#target` for any host value that has a length.
pub fn len_value(target: &Value) -> Option<usize> {
    match target {
        Value::String(s) => Some(s.len()),
        Value::Table(table) => Some(table.len()),
        Value::UserData(object) => object.len(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_entry_is_not_callable() {
        let gi = Gi::new(Repository::new());
        assert_eq!(
            gi.call("load", &[]).unwrap_err(),
            HostError::NotCallable("load".into())
        );
    }

    #[test]
    fn invalid_gtype_reads_nil() {
        let gi = Gi::new(Repository::new());
        assert_eq!(gi.index(&Value::LightUserdata(0)).unwrap(), Value::Nil);
        assert_eq!(gi.index(&Value::Integer(-5)).unwrap(), Value::Nil);
        assert!(gi.index(&Value::Boolean(true)).is_err());
    }

    #[test]
    fn index_plain_values() {
        let mut table = Table::new();
        table.set("k", 1i64);
        assert_eq!(index_value(&Value::Table(table), &Value::from("k")).unwrap(), Value::Integer(1));
        assert_eq!(
            index_value(&Value::Integer(1), &Value::from("k")).unwrap_err(),
            HostError::NotIndexable("number")
        );
        assert_eq!(len_value(&Value::from("abc")), Some(3));
        assert_eq!(len_value(&Value::Nil), None);
    }
}
