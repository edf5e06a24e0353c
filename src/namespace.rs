//! `gi.namespace` userdata: one loaded namespace.

use std::any::Any;

use gibridge_registry::Repository;

use crate::error::HostResult;
use crate::info_handle::InfoHandle;
use crate::object::{HostObject, ObjectKind, check_string};
use crate::resolver::SymbolResolver;
use crate::value::{Table, Value};

#[derive(Clone)]
pub struct NamespaceHandle {
    repository: Repository,
    namespace: String,
}

impl NamespaceHandle {
    pub fn new(repository: Repository, namespace: impl Into<String>) -> Self {
        Self {
            repository,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Every transitive dependency as `name -> version`.
    pub fn dependencies(&self) -> Table {
        let mut table = Table::new();
        for dependency in self.repository.dependencies(&self.namespace).unwrap_or_default() {
            if let Some((name, version)) = dependency.split_once('-') {
                table.set(name, version);
            }
        }
        table
    }

    fn field(&self, name: &str) -> Value {
        match name {
            "dependencies" => Value::Table(self.dependencies()),
            "version" => self.repository.version(&self.namespace).map(Value::from).unwrap_or_default(),
            "name" => Value::from(self.namespace.as_str()),
            "resolve" => match self.repository.typelib(&self.namespace) {
                Some(typelib) => Value::userdata(SymbolResolver::new(typelib)),
                None => Value::Nil,
            },
            name => InfoHandle::value(self.repository.find_by_name(&self.namespace, name)),
        }
    }
}

impl HostObject for NamespaceHandle {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Namespace
    }

    fn index(&self, key: &Value) -> HostResult<Value> {
        match key {
            Value::Integer(n) => {
                let info = n
                    .checked_sub(1)
                    .and_then(|index| usize::try_from(index).ok())
                    .and_then(|index| self.repository.info(&self.namespace, index));
                Ok(InfoHandle::value(info))
            }
            key => {
                let name = check_string(key, 2, "index")?;
                Ok(self.field(&name))
            }
        }
    }

    fn len(&self) -> Option<usize> {
        Some(self.repository.n_infos(&self.namespace).unwrap_or(0))
    }

    fn equals(&self, other: &dyn HostObject) -> bool {
        other
            .as_any()
            .downcast_ref::<NamespaceHandle>()
            .is_some_and(|other| self.namespace == other.namespace)
    }

    fn describe(&self) -> String {
        self.namespace.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
