//! Shared fixture for the integration tests.
//!
//! Installs two namespaces in a private repository:
//!
//! - `Base-1.0`: an object type and an error enum
//! - `Demo-2.0`: depends on `Base-1.0`; a struct with three fields, an
//!   object deriving from `Base.Object`, a flags type and a few functions

#![allow(dead_code)]

use gibridge::prelude::*;
use gibridge_core::tags::TypeTag;
use gibridge_core::typelib::defs::*;
use gibridge_core::{FunctionFlags, ParamFlags, SignalFlags, Transfer, Typelib, TypelibBuilder, VFuncFlags};

pub const TYPELIB_DIR: &str = "/fixture/typelibs";

pub fn base_typelib() -> Typelib {
    TypelibBuilder::new("Base", "1.0")
        .with_entry(
            ObjectDef::new("Object")
                .with_gtype("BaseObject")
                .with_type_struct("ObjectClass")
                .with_method(CallableDef::method("ref", "base_object_ref").returning(TypeDef::interface("Object"))),
        )
        .with_entry(StructDef::new("ObjectClass").with_gtype("BaseObjectClass").gtype_struct())
        .with_entry(
            EnumDef::new("FileError")
                .with_gtype("BaseFileError")
                .with_value("exist", 0)
                .with_value("noent", 2)
                .with_error_domain("base-file-error-quark"),
        )
        .with_symbol("base_object_ref", 0x1000)
        .build()
        .expect("base typelib")
}

pub fn demo_typelib() -> Typelib {
    TypelibBuilder::new("Demo", "2.0")
        .with_dependency("Base", "1.0")
        .with_symbol("demo_rect_area", 0x2000)
        .with_symbol("demo_init", 0x2010)
        .with_entry(
            StructDef::new("Rect")
                .with_gtype("DemoRect")
                .with_size(16, 4)
                .with_field(FieldDef::new("x", TypeDef::basic(TypeTag::Int32), 0, 4))
                .with_field(FieldDef::new("y", TypeDef::basic(TypeTag::Int32), 4, 4))
                .with_field(FieldDef::new("size", TypeDef::basic(TypeTag::Int64), 8, 8).read_only())
                .with_method(
                    CallableDef::method("area", "demo_rect_area")
                        .returning(TypeDef::basic(TypeTag::Int64)),
                )
                .with_method(CallableDef::constructor("new", "demo_rect_new").returning(TypeDef::interface("Rect"))),
        )
        .with_entry(
            ObjectDef::new("Window")
                .with_gtype("DemoWindow")
                .with_parent("Base.Object")
                .with_interface("Drawable")
                .with_property(
                    PropertyDef::new("title", TypeDef::utf8(), ParamFlags::READWRITE | ParamFlags::CONSTRUCT)
                        .with_transfer(Transfer::Everything),
                )
                .with_signal(CallableDef::signal("closed", SignalFlags::RUN_LAST))
                .with_vfunc(CallableDef::vfunc("draw", VFuncFlags::MUST_OVERRIDE, Some(3)))
                .with_method(
                    CallableDef::method("set_geometry", "demo_window_set_geometry")
                        .with_arg(ArgDef::new("rect", TypeDef::interface("Rect")))
                        .with_arg(ArgDef::new("out_rect", TypeDef::interface("Rect")).out().caller_allocates())
                        .with_arg(
                            ArgDef::new("names", TypeDef::array(TypeDef::utf8()).with_length(3))
                                .with_transfer(Transfer::Container),
                        )
                        .with_arg(ArgDef::new("count", TypeDef::basic(TypeTag::Int32)).inout().optional()),
                ),
        )
        .with_entry(InterfaceDef::new("Drawable").with_gtype("DemoDrawable").with_prerequisite("Base.Object"))
        .with_entry(
            EnumDef::flags("Options")
                .with_gtype("DemoOptions")
                .with_value("none", 0)
                .with_value("fast", 1)
                .with_value("safe", 2),
        )
        .with_entry(
            CallableDef::function("init", "demo_init")
                .with_arg(ArgDef::new("table", TypeDef::hash(TypeDef::utf8(), TypeDef::basic(TypeTag::Int32))))
                .with_arg(ArgDef::new("items", TypeDef::list(TypeDef::interface("Rect"))).nullable())
                .with_return_transfer(Transfer::Everything)
                .returning(TypeDef::array(TypeDef::basic(TypeTag::Uint8)).with_fixed_size(4).zero_terminated()),
        )
        .with_entry(CallableDef::callback("DrawFunc").with_arg(ArgDef::new("window", TypeDef::interface("Window"))))
        .with_entry(ConstantDef::new("MAX_SIZE", TypeDef::basic(TypeTag::Int32)).deprecated())
        .with_entry(
            CallableDef::function("shutdown", "demo_shutdown")
                .with_flags(FunctionFlags::WRAPS_VFUNC),
        )
        .build()
        .expect("demo typelib")
}

/// A repository with both fixture namespaces installed on its search path.
pub fn repository() -> Repository {
    let repository = Repository::new();
    repository.install(TYPELIB_DIR, base_typelib());
    repository.install(TYPELIB_DIR, demo_typelib());
    repository.prepend_search_path(TYPELIB_DIR);
    repository
}

/// A bridge with `Demo` already required.
pub fn loaded() -> (Gi, Value) {
    let gi = Gi::new(repository());
    let mut results = gi.require(&[Value::from("Demo")]).expect("require arguments");
    assert_eq!(results.len(), 1, "require failed: {results:?}");
    let namespace = results.remove(0);
    (gi, namespace)
}

/// `target[key]`, panicking on argument errors.
pub fn get(target: &Value, key: impl Into<Value>) -> Value {
    index_value(target, &key.into()).expect("index")
}

/// Every item of a collection, by ordinal.
pub fn items(collection: &Value) -> Vec<Value> {
    let count = len_value(collection).expect("collection length");
    (1..=count as i64).map(|i| get(collection, i)).collect()
}
