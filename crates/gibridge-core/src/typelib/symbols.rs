//! Symbol lookup for a typelib's native code.
//!
//! A typelib names the shared libraries that implement it. They are opened
//! lazily on the first lookup through `dlopen` and queried with `dlsym`.
//! A typelib without shared libraries resolves against the running program.
//! Addresses registered directly on the typelib take precedence.

use std::ffi::{CString, c_void};

use log::{trace, warn};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// A shared library opened with `dlopen`.
///
/// Handles are never closed: like loaded typelibs, native code stays mapped
/// for the lifetime of the process.
#[derive(Debug)]
pub struct SharedLibrary {
    handle: *mut c_void,
    name: String,
}

// SAFETY: a dlopen handle is an opaque token; dlsym is thread-safe.
unsafe impl Send for SharedLibrary {}
unsafe impl Sync for SharedLibrary {}

impl SharedLibrary {
    /// Open a shared library by file name or path.
    pub fn open(name: &str) -> Option<Self> {
        let path = CString::new(name).ok()?;
        // SAFETY: `path` is a valid NUL-terminated string.
        let handle = unsafe { libc::dlopen(path.as_ptr(), libc::RTLD_LAZY | libc::RTLD_GLOBAL) };
        if handle.is_null() {
            warn!("failed to open shared library '{name}'");
            return None;
        }
        Some(Self {
            handle,
            name: name.to_owned(),
        })
    }

    /// A handle on the running program and everything it has loaded.
    pub fn this_program() -> Option<Self> {
        // SAFETY: a null path asks for the main program handle.
        let handle = unsafe { libc::dlopen(std::ptr::null(), libc::RTLD_LAZY) };
        if handle.is_null() {
            return None;
        }
        Some(Self {
            handle,
            name: "<program>".to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Address of `symbol`, if the library exports it.
    pub fn symbol(&self, symbol: &str) -> Option<usize> {
        let symbol = CString::new(symbol).ok()?;
        // SAFETY: `handle` came from dlopen and `symbol` is NUL-terminated.
        let address = unsafe { libc::dlsym(self.handle, symbol.as_ptr()) };
        (!address.is_null()).then_some(address as usize)
    }
}

/// Symbols known to one typelib.
#[derive(Debug, Default)]
pub struct SymbolTable {
    registered: FxHashMap<String, usize>,
    library_names: Vec<String>,
    opened: Mutex<Option<Vec<SharedLibrary>>>,
}

impl SymbolTable {
    pub(crate) fn new(registered: FxHashMap<String, usize>, library_names: Vec<String>) -> Self {
        Self {
            registered,
            library_names,
            opened: Mutex::new(None),
        }
    }

    /// Resolve `symbol` to an address.
    pub fn resolve(&self, symbol: &str) -> Option<usize> {
        if let Some(address) = self.registered.get(symbol) {
            trace!("symbol '{symbol}' resolved from registered table");
            return Some(*address);
        }

        let mut opened = self.opened.lock();
        let libraries = opened.get_or_insert_with(|| self.open_libraries());
        let found = libraries
            .iter()
            .find_map(|library| Some((library.name(), library.symbol(symbol)?)));
        match found {
            Some((library, address)) => {
                trace!("symbol '{symbol}' resolved in '{library}' to {address:#x}");
                Some(address)
            }
            None => {
                trace!("symbol '{symbol}' not found");
                None
            }
        }
    }

    fn open_libraries(&self) -> Vec<SharedLibrary> {
        if self.library_names.is_empty() {
            return SharedLibrary::this_program().into_iter().collect();
        }
        self.library_names
            .iter()
            .filter_map(|name| SharedLibrary::open(name))
            .collect()
    }
}
