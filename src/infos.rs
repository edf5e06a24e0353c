//! `gi.infos` userdata: a read-only sequence of related descriptors.

use std::any::Any;

use gibridge_core::{BaseInfo, Relation};

use crate::error::{HostError, HostResult};
use crate::info_handle::InfoHandle;
use crate::object::{HostObject, ObjectKind, check_string};
use crate::value::Value;

/// The members of one relation of a container descriptor.
///
/// Items are materialised on each access, nothing is cached. The collection
/// keeps its container alive.
#[derive(Debug, Clone)]
pub struct InfoCollection {
    container: BaseInfo,
    relation: Relation,
    count: usize,
}

impl InfoCollection {
    /// `None` when the container's kind has no such relation.
    pub fn new(container: BaseInfo, relation: Relation) -> Option<Self> {
        let count = container.n_related(relation)?;
        Some(Self {
            container,
            relation,
            count,
        })
    }

    pub fn container(&self) -> &BaseInfo {
        &self.container
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Item at 1-based `ordinal`.
    pub fn get(&self, ordinal: i64) -> HostResult<Value> {
        if ordinal < 1 || ordinal as u64 > self.count as u64 {
            return Err(HostError::bad_argument(2, "index", "out of bounds"));
        }
        let index = (ordinal - 1) as usize;
        Ok(InfoHandle::value(self.container.related(self.relation, index)))
    }

    /// First item called `name`, by linear scan.
    pub fn find(&self, name: &str) -> Option<BaseInfo> {
        (0..self.count)
            .filter_map(|index| self.container.related(self.relation, index))
            .find(|item| item.name() == Some(name))
    }
}

impl HostObject for InfoCollection {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Infos
    }

    fn index(&self, key: &Value) -> HostResult<Value> {
        match key {
            Value::Integer(ordinal) => self.get(*ordinal),
            key => {
                let name = check_string(key, 2, "index")?;
                Ok(InfoHandle::value(self.find(&name)))
            }
        }
    }

    fn len(&self) -> Option<usize> {
        Some(self.count)
    }

    fn describe(&self) -> String {
        format!("{} of {}", self.relation.as_str(), self.container.full_name())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
