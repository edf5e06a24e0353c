//! Accessors of callables: functions, callbacks, signals and vfuncs.

use super::BaseInfo;
use crate::flags::{FunctionFlags, SignalFlags, VFuncFlags};
use crate::transfer::Transfer;
use crate::typelib::Blob;

impl BaseInfo {
    /// Type descriptor of the return value.
    pub fn return_type(&self) -> Option<BaseInfo> {
        let callable = self.blob()?.callable()?;
        Some(self.child(callable.return_type))
    }

    /// Ownership transfer of the return value.
    pub fn caller_owns(&self) -> Option<Transfer> {
        Some(self.blob()?.callable()?.caller_owns)
    }

    pub fn may_return_null(&self) -> Option<bool> {
        Some(self.blob()?.callable()?.may_return_null)
    }

    pub fn can_throw(&self) -> Option<bool> {
        Some(self.blob()?.callable()?.throws)
    }

    pub fn function_flags(&self) -> Option<FunctionFlags> {
        match self.blob()? {
            Blob::Function(b) => Some(b.flags),
            _ => None,
        }
    }

    /// Native symbol of a function.
    pub fn symbol(&self) -> Option<&str> {
        match self.blob()? {
            Blob::Function(b) => Some(&b.symbol),
            _ => None,
        }
    }

    pub fn signal_flags(&self) -> Option<SignalFlags> {
        match self.blob()? {
            Blob::Signal(b) => Some(b.flags),
            _ => None,
        }
    }

    pub fn vfunc_flags(&self) -> Option<VFuncFlags> {
        match self.blob()? {
            Blob::VFunc(b) => Some(b.flags),
            _ => None,
        }
    }

    /// Offset of a vfunc in its class struct, when known.
    pub fn vfunc_offset(&self) -> Option<u32> {
        match self.blob()? {
            Blob::VFunc(b) => b.offset,
            _ => None,
        }
    }
}
