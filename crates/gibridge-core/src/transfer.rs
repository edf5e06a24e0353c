//! Ownership-transfer modes.
//!
//! Maps the transfer enumeration to the three symbolic tags the host sees
//! (`none`, `container`, `full`) and back.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Who releases a value passed across the native boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Transfer {
    /// The receiver owns nothing.
    #[default]
    Nothing = 0,
    /// The receiver owns the container but not its elements.
    Container = 1,
    /// The receiver owns the value and everything in it.
    Everything = 2,
}

impl Transfer {
    /// All modes, in discriminant order.
    pub const ALL: [Transfer; 3] = [Transfer::Nothing, Transfer::Container, Transfer::Everything];

    /// The symbolic tag.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Transfer::Nothing => "none",
            Transfer::Container => "container",
            Transfer::Everything => "full",
        }
    }

    /// Parse a symbolic tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "none" => Some(Transfer::Nothing),
            "container" => Some(Transfer::Container),
            "full" => Some(Transfer::Everything),
            _ => None,
        }
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
