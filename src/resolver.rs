//! `gi.resolver` userdata: symbol addresses of one typelib.

use std::any::Any;

use gibridge_core::Typelib;

use crate::error::HostResult;
use crate::object::{HostObject, ObjectKind, check_string};
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct SymbolResolver {
    typelib: Typelib,
}

impl SymbolResolver {
    pub fn new(typelib: Typelib) -> Self {
        Self { typelib }
    }

    pub fn resolve(&self, symbol: &str) -> Option<usize> {
        self.typelib.symbol(symbol)
    }
}

impl HostObject for SymbolResolver {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Resolver
    }

    fn index(&self, key: &Value) -> HostResult<Value> {
        let symbol = check_string(key, 2, "index")?;
        Ok(self.resolve(&symbol).map(Value::LightUserdata).unwrap_or_default())
    }

    fn equals(&self, other: &dyn HostObject) -> bool {
        other
            .as_any()
            .downcast_ref::<SymbolResolver>()
            .is_some_and(|other| self.typelib.ptr_eq(&other.typelib))
    }

    fn describe(&self) -> String {
        format!("resolver for {}", self.typelib.namespace())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
