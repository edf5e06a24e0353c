//! Core data model for gibridge.
//!
//! This crate holds everything needed to describe and navigate introspection
//! metadata:
//!
//! - [`typelib`]: the per-namespace metadata container, its builder and
//!   symbol tables
//! - [`BaseInfo`]: reference-counted handles on individual descriptors
//! - tag enums ([`InfoType`], [`TypeTag`], [`ArrayType`], [`Direction`]),
//!   [`Transfer`] and the flag sets
//! - runtime identities: [`GType`] and [`Quark`]
//! - error types ([`TypelibError`], [`RepositoryError`])

pub mod error;
pub mod flags;
pub mod gtype;
pub mod info;
pub mod quark;
pub mod tags;
pub mod transfer;
pub mod typelib;

pub use error::{RepositoryError, TypelibError};
pub use flags::{
    FIELD_FLAG_NAMES, FUNCTION_FLAG_NAMES, FieldFlags, FunctionFlags, ParamFlags,
    SIGNAL_FLAG_NAMES, SignalFlags, VFUNC_FLAG_NAMES, VFuncFlags,
};
pub use gtype::GType;
pub use info::{BaseInfo, Relation};
pub use quark::Quark;
pub use tags::{ArrayType, Direction, InfoType, TypeTag};
pub use transfer::Transfer;
pub use typelib::{EntryResolver, Typelib, TypelibBuilder};
