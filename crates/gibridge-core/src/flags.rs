//! Flag sets carried by descriptors.
//!
//! Bit values match the native flag enumerations so raw masks can be
//! exchanged with the host unchanged.

use bitflags::bitflags;

bitflags! {
    /// Flags of a function descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionFlags: u32 {
        const IS_METHOD = 1 << 0;
        const IS_CONSTRUCTOR = 1 << 1;
        const IS_GETTER = 1 << 2;
        const IS_SETTER = 1 << 3;
        const WRAPS_VFUNC = 1 << 4;
    }
}

bitflags! {
    /// Emission flags of a signal descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SignalFlags: u32 {
        const RUN_FIRST = 1 << 0;
        const RUN_LAST = 1 << 1;
        const RUN_CLEANUP = 1 << 2;
        const NO_RECURSE = 1 << 3;
        const DETAILED = 1 << 4;
        const ACTION = 1 << 5;
        const NO_HOOKS = 1 << 6;
        const MUST_COLLECT = 1 << 7;
        const DEPRECATED = 1 << 8;
    }
}

bitflags! {
    /// Access flags of a field descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldFlags: u32 {
        const IS_READABLE = 1 << 0;
        const IS_WRITABLE = 1 << 1;
    }
}

bitflags! {
    /// Flags of a property descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParamFlags: u32 {
        const READABLE = 1 << 0;
        const WRITABLE = 1 << 1;
        const READWRITE = Self::READABLE.bits() | Self::WRITABLE.bits();
        const CONSTRUCT = 1 << 2;
        const CONSTRUCT_ONLY = 1 << 3;
        const LAX_VALIDATION = 1 << 4;
        const STATIC_NAME = 1 << 5;
        const STATIC_NICK = 1 << 6;
        const STATIC_BLURB = 1 << 7;
        const EXPLICIT_NOTIFY = 1 << 30;
        const DEPRECATED = 1 << 31;
    }
}

bitflags! {
    /// Flags of a virtual function descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct VFuncFlags: u32 {
        const MUST_CHAIN_UP = 1 << 0;
        const MUST_OVERRIDE = 1 << 1;
        const MUST_NOT_OVERRIDE = 1 << 2;
    }
}

/// Host-facing names of the function flags, in reporting order.
pub const FUNCTION_FLAG_NAMES: [(FunctionFlags, &str); 5] = [
    (FunctionFlags::IS_METHOD, "is_method"),
    (FunctionFlags::IS_CONSTRUCTOR, "is_constructor"),
    (FunctionFlags::IS_GETTER, "is_getter"),
    (FunctionFlags::IS_SETTER, "is_setter"),
    (FunctionFlags::WRAPS_VFUNC, "wraps_vfunc"),
];

/// Host-facing names of the signal flags, in reporting order.
pub const SIGNAL_FLAG_NAMES: [(SignalFlags, &str); 7] = [
    (SignalFlags::RUN_FIRST, "run_first"),
    (SignalFlags::RUN_LAST, "run_last"),
    (SignalFlags::RUN_CLEANUP, "run_cleanup"),
    (SignalFlags::NO_RECURSE, "no_recurse"),
    (SignalFlags::DETAILED, "detailed"),
    (SignalFlags::ACTION, "action"),
    (SignalFlags::NO_HOOKS, "no_hooks"),
];

/// Host-facing names of the field flags, in reporting order.
pub const FIELD_FLAG_NAMES: [(FieldFlags, &str); 2] = [
    (FieldFlags::IS_READABLE, "is_readable"),
    (FieldFlags::IS_WRITABLE, "is_writable"),
];

/// Host-facing names of the vfunc flags, in reporting order.
pub const VFUNC_FLAG_NAMES: [(VFuncFlags, &str); 3] = [
    (VFuncFlags::MUST_CHAIN_UP, "must_chain_up"),
    (VFuncFlags::MUST_OVERRIDE, "must_override"),
    (VFuncFlags::MUST_NOT_OVERRIDE, "must_not_override"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_bit_values() {
        assert_eq!(FunctionFlags::WRAPS_VFUNC.bits(), 16);
        assert_eq!(SignalFlags::NO_HOOKS.bits(), 64);
        assert_eq!(ParamFlags::READWRITE.bits(), 3);
        assert_eq!(ParamFlags::CONSTRUCT_ONLY.bits(), 8);
    }

    #[test]
    fn name_tables_are_disjoint_bits() {
        let mut mask = 0;
        for (flag, _) in FUNCTION_FLAG_NAMES {
            assert_eq!(mask & flag.bits(), 0);
            mask |= flag.bits();
        }
        assert_eq!(mask, FunctionFlags::all().bits());
    }

    #[test]
    fn unknown_bits_are_dropped() {
        let flags = FieldFlags::from_bits_truncate(0xff);
        assert_eq!(flags, FieldFlags::IS_READABLE | FieldFlags::IS_WRITABLE);
    }
}
