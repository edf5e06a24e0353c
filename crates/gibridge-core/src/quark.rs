//! Process-wide string quarks.
//!
//! A [`Quark`] is a small non-zero integer uniquely associated with a string
//! for the lifetime of the process. Error domains are identified by quarks,
//! which is how the host looks up the enum owning an error domain.

use std::fmt;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

#[derive(Default)]
struct QuarkTable {
    by_name: FxHashMap<String, Quark>,
    names: Vec<String>,
}

lazy_static! {
    static ref QUARKS: RwLock<QuarkTable> = RwLock::new(QuarkTable::default());
}

/// An interned string identity. Zero is never a valid quark.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Quark(pub u32);

impl Quark {
    /// Intern `name`, returning its quark. Repeated calls return the same value.
    pub fn intern(name: &str) -> Self {
        if let Some(quark) = Self::lookup(name) {
            return quark;
        }

        let mut table = QUARKS.write();
        if let Some(quark) = table.by_name.get(name) {
            return *quark;
        }
        table.names.push(name.to_owned());
        let quark = Quark(table.names.len() as u32);
        table.by_name.insert(name.to_owned(), quark);
        quark
    }

    /// Look up the quark of `name` without interning it.
    pub fn lookup(name: &str) -> Option<Self> {
        QUARKS.read().by_name.get(name).copied()
    }

    /// The string this quark was interned from.
    pub fn as_string(self) -> Option<String> {
        let index = (self.0 as usize).checked_sub(1)?;
        QUARKS.read().names.get(index).cloned()
    }
}

impl fmt::Debug for Quark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_string() {
            Some(name) => write!(f, "Quark({} {name:?})", self.0),
            None => write!(f, "Quark({})", self.0),
        }
    }
}
