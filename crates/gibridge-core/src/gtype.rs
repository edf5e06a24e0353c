//! Deterministic runtime type identity for registered types.
//!
//! [`GType`] is the identity a registered type (struct, union, enum, flags,
//! object, interface) carries in the native type system. Identities are
//! derived from the GType name, so the same name always maps to the same
//! value and lookups never depend on registration order.
//!
//! # Examples
//!
//! ```
//! use gibridge_core::GType;
//!
//! let widget = GType::from_name("GtkWidget");
//! assert_eq!(widget, GType::from_name("GtkWidget"));
//! assert!(widget.is_valid());
//! assert!(!GType::INVALID.is_valid());
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every derived identity.
const TYPE_DOMAIN: u64 = 0x2fac10b63a6cc57c;

/// Upper bound of the fundamental type range.
///
/// Derived identities are always placed above this value so they never
/// collide with [`GType::INVALID`] or [`GType::NONE`].
pub const FUNDAMENTAL_MAX: usize = 255 << 2;

/// Runtime type identity of a registered type.
///
/// Pointer-sized, like the native type id, so it can travel through the host
/// as a light pointer value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct GType(pub usize);

impl GType {
    /// The invalid type id.
    pub const INVALID: GType = GType(0);

    /// The "no type" id, used by registered types that have no GType.
    pub const NONE: GType = GType(1 << 2);

    /// Derive the identity for a GType name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        let raw = (TYPE_DOMAIN ^ xxh64(name.as_bytes(), 0)) as usize;
        if raw <= FUNDAMENTAL_MAX {
            GType(raw + FUNDAMENTAL_MAX + 1)
        } else {
            GType(raw)
        }
    }

    /// Rebuild an identity from a raw light-pointer address.
    #[inline]
    pub const fn from_address(address: usize) -> Self {
        GType(address)
    }

    /// The identity as a raw light-pointer address.
    #[inline]
    pub const fn address(self) -> usize {
        self.0
    }

    /// Check that this is neither [`GType::INVALID`] nor [`GType::NONE`].
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0 && self.0 != Self::NONE.0
    }

    /// Check if this is [`GType::NONE`].
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl fmt::Debug for GType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GType({:#x})", self.0)
    }
}

impl fmt::Display for GType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
