//! Callable definitions: functions, callbacks, signals and virtual functions.

use super::{ArgDef, TypeDef};
use crate::flags::{FunctionFlags, SignalFlags, VFuncFlags};
use crate::transfer::Transfer;

/// What kind of callable a [`CallableDef`] describes, with its kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallableKind {
    Function { symbol: String, flags: FunctionFlags },
    Callback,
    Signal { flags: SignalFlags },
    VFunc { flags: VFuncFlags, offset: Option<u32> },
}

impl CallableKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CallableKind::Function { .. } => "function",
            CallableKind::Callback => "callback",
            CallableKind::Signal { .. } => "signal",
            CallableKind::VFunc { .. } => "vfunc",
        }
    }
}

/// Definition of a callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableDef {
    pub name: String,
    pub kind: CallableKind,
    pub args: Vec<ArgDef>,
    pub return_type: TypeDef,
    /// Transfer of the return value.
    pub caller_owns: Transfer,
    pub may_return_null: bool,
    pub throws: bool,
    pub deprecated: bool,
}

impl CallableDef {
    fn new(name: impl Into<String>, kind: CallableKind) -> Self {
        Self {
            name: name.into(),
            kind,
            args: Vec::new(),
            return_type: TypeDef::void(),
            caller_owns: Transfer::Nothing,
            may_return_null: false,
            throws: false,
            deprecated: false,
        }
    }

    /// A free function bound to `symbol`.
    pub fn function(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::new(
            name,
            CallableKind::Function {
                symbol: symbol.into(),
                flags: FunctionFlags::empty(),
            },
        )
    }

    /// An instance method bound to `symbol`.
    pub fn method(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::function(name, symbol).with_flags(FunctionFlags::IS_METHOD)
    }

    /// A constructor bound to `symbol`.
    pub fn constructor(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::function(name, symbol).with_flags(FunctionFlags::IS_CONSTRUCTOR)
    }

    pub fn callback(name: impl Into<String>) -> Self {
        Self::new(name, CallableKind::Callback)
    }

    pub fn signal(name: impl Into<String>, flags: SignalFlags) -> Self {
        Self::new(name, CallableKind::Signal { flags })
    }

    /// A virtual function at `offset` in its class struct.
    pub fn vfunc(name: impl Into<String>, flags: VFuncFlags, offset: Option<u32>) -> Self {
        Self::new(name, CallableKind::VFunc { flags, offset })
    }

    /// Add function flags. Has no effect on callables that are not functions.
    pub fn with_flags(mut self, extra: FunctionFlags) -> Self {
        if let CallableKind::Function { flags, .. } = &mut self.kind {
            *flags |= extra;
        }
        self
    }

    pub fn with_arg(mut self, arg: ArgDef) -> Self {
        self.args.push(arg);
        self
    }

    pub fn returning(mut self, return_type: TypeDef) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn with_return_transfer(mut self, transfer: Transfer) -> Self {
        self.caller_owns = transfer;
        self
    }

    pub fn nullable_return(mut self) -> Self {
        self.may_return_null = true;
        self
    }

    pub fn throws(mut self) -> Self {
        self.throws = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}
