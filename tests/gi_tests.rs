//! The `gi` entry table: loading, global lookups, namespaces and symbols.

mod common;

use common::{TYPELIB_DIR, get, loaded, repository};
use gibridge::prelude::*;
use gibridge_core::typelib::defs::{CallableDef, StructDef};
use gibridge_core::{Quark, TypelibBuilder};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// require
// =============================================================================

#[test]
fn test_require_returns_namespace() {
    init_logging();
    let (gi, demo) = loaded();
    assert_eq!(demo.object_kind(), Some(ObjectKind::Namespace));
    assert_eq!(get(&demo, "name"), Value::from("Demo"));
    assert_eq!(get(&demo, "version"), Value::from("2.0"));
    assert!(gi.repository().is_registered("Base", Some("1.0")));
}

#[test]
fn test_require_unknown_namespace() {
    init_logging();
    let gi = Gi::new(repository());
    let results = gi.require(&[Value::from("Test")]).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], Value::Boolean(false));
    assert!(!results[1].as_str().unwrap().is_empty());
    assert_ne!(results[2].as_integer().unwrap(), 0);
    assert!(!gi.repository().is_registered("Test", None));
}

#[test]
fn test_require_twice_yields_equal_lookups() {
    let gi = Gi::new(repository());
    let first = gi.require(&[Value::from("Demo")]).unwrap().remove(0);
    let second = gi.require(&[Value::from("Demo"), Value::from("2.0")]).unwrap().remove(0);
    assert_eq!(len_value(&first), len_value(&second));
    assert_eq!(get(&first, "Window"), get(&second, "Window"));
    assert_eq!(get(&get(&first, "Rect"), "fields"), get(&get(&first, "Rect"), "fields"));
    assert!(gi.isinfo(&get(&second, "Rect")));
}

#[test]
fn test_require_version_conflict() {
    let (gi, _demo) = loaded();
    let results = gi.require(&[Value::from("Demo"), Value::from("3.0")]).unwrap();
    assert_eq!(results[0], Value::Boolean(false));
    assert_eq!(results[2], Value::Integer(3));
}

#[test]
fn test_require_missing_dependency() {
    let repository = Repository::new();
    repository.install(
        TYPELIB_DIR,
        TypelibBuilder::new("Orphan", "1.0")
            .with_dependency("Nowhere", "9.0")
            .build()
            .unwrap(),
    );
    repository.prepend_search_path(TYPELIB_DIR);
    let gi = Gi::new(repository);
    let results = gi.require(&[Value::from("Orphan")]).unwrap();
    assert_eq!(results[0], Value::Boolean(false));
    assert!(results[1].as_str().unwrap().contains("Nowhere-9.0"));
    assert_eq!(results[2], Value::Integer(4));
    assert_eq!(gi.index(&Value::from("Orphan")).unwrap(), Value::Nil);
}

#[test]
fn test_require_from_private_dir() {
    let repository = Repository::new();
    repository.install(
        "/private",
        TypelibBuilder::new("Hidden", "1.0")
            .with_entry(StructDef::new("Secret"))
            .build()
            .unwrap(),
    );
    let gi = Gi::new(repository);

    let missing = gi.require(&[Value::from("Hidden")]).unwrap();
    assert_eq!(missing[0], Value::Boolean(false));
    assert_eq!(missing[2], Value::Integer(1));

    let found = gi
        .require(&[Value::from("Hidden"), Value::Nil, Value::from("/private")])
        .unwrap();
    assert_eq!(found.len(), 1);
    assert!(gi.isinfo(&get(&found[0], "Secret")));
}

#[test]
fn test_require_argument_checks() {
    let gi = Gi::new(repository());
    let err = gi.require(&[]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #1 to 'require' (string expected, got nil)");
    let err = gi.require(&[Value::from("Demo"), Value::Boolean(true)]).unwrap_err();
    assert!(matches!(err, HostError::BadArgument { position: 2, .. }));
}

// =============================================================================
// isinfo and call
// =============================================================================

#[test]
fn test_isinfo_only_for_info_handles() {
    let (gi, demo) = loaded();
    let rect = get(&demo, "Rect");
    assert!(gi.isinfo(&rect));
    assert!(!gi.isinfo(&demo));
    assert!(!gi.isinfo(&get(&rect, "fields")));
    assert!(!gi.isinfo(&get(&demo, "resolve")));
    assert!(!gi.isinfo(&Value::Nil));
    assert!(!gi.isinfo(&Value::from("Rect")));
    assert!(!gi.isinfo(&Value::Table(Table::new())));
}

#[test]
fn test_call_entry_points() {
    let (gi, demo) = loaded();
    let rect = get(&demo, "Rect");
    assert_eq!(gi.call("isinfo", &[rect]).unwrap(), [Value::Boolean(true)]);
    assert_eq!(gi.call("isinfo", &[]).unwrap(), [Value::Boolean(false)]);
    let results = gi.call("require", &[Value::from("Base")]).unwrap();
    assert_eq!(results[0].object_kind(), Some(ObjectKind::Namespace));
}

// =============================================================================
// Global lookup
// =============================================================================

#[test]
fn test_index_by_gtype() {
    let (gi, demo) = loaded();
    let window = get(&demo, "Window");
    let gtype = get(&window, "gtype");
    assert_eq!(gi.index(&gtype).unwrap(), window);

    let parent_gtype = get(&get(&window, "parent"), "gtype");
    assert_eq!(get(&gi.index(&parent_gtype).unwrap(), "fullname"), Value::from("Base.Object"));

    assert_eq!(gi.index(&Value::LightUserdata(0)).unwrap(), Value::Nil);
    assert_eq!(gi.index(&Value::LightUserdata(0xdead_beef)).unwrap(), Value::Nil);
}

#[test]
fn test_index_by_error_domain() {
    let (gi, _demo) = loaded();
    let quark = Quark::lookup("base-file-error-quark").unwrap();
    let error = gi.index(&Value::Integer(i64::from(quark.0))).unwrap();
    assert_eq!(get(&error, "fullname"), Value::from("Base.FileError"));
    assert_eq!(get(&error, "error_domain"), Value::Integer(i64::from(quark.0)));
    assert_eq!(gi.index(&Value::Integer(0)).unwrap(), Value::Nil);
}

#[test]
fn test_index_by_namespace_never_loads() {
    let gi = Gi::new(repository());
    assert_eq!(gi.index(&Value::from("Demo")).unwrap(), Value::Nil);
    assert!(!gi.repository().is_registered("Demo", None));

    gi.require(&[Value::from("Demo")]).unwrap();
    let demo = gi.index(&Value::from("Demo")).unwrap();
    assert_eq!(demo.object_kind(), Some(ObjectKind::Namespace));
    assert_eq!(gi.index(&Value::from("Base")).unwrap().object_kind(), Some(ObjectKind::Namespace));
}

// =============================================================================
// Namespaces and symbols
// =============================================================================

#[test]
fn test_namespace_enumeration() {
    let (_gi, demo) = loaded();
    let count = len_value(&demo).unwrap();
    assert_eq!(count, 8);
    assert_eq!(get(&get(&demo, 1i64), "name"), Value::from("Rect"));
    assert_eq!(get(&get(&demo, count as i64), "name"), Value::from("shutdown"));
    assert_eq!(get(&demo, 0i64), Value::Nil);
    assert_eq!(get(&demo, count as i64 + 1), Value::Nil);
    assert_eq!(get(&demo, "NoSuchEntry"), Value::Nil);
}

#[test]
fn test_namespace_dependencies() {
    let (_gi, demo) = loaded();
    let deps = get(&demo, "dependencies");
    let deps = deps.as_table().unwrap();
    assert_eq!(deps.entry_count(), 1);
    assert_eq!(deps.get("Base"), Some(&Value::from("1.0")));
}

#[test]
fn test_resolver_symbols() {
    let (_gi, demo) = loaded();
    let resolve = get(&demo, "resolve");
    assert_eq!(resolve.object_kind(), Some(ObjectKind::Resolver));
    assert_eq!(get(&resolve, "demo_init"), Value::LightUserdata(0x2010));
    let malloc = get(&resolve, "malloc");
    assert!(malloc.as_light_userdata().is_some_and(|address| address != 0));
    assert_eq!(get(&resolve, "gibridge_symbol_that_does_not_exist"), Value::Nil);
}

#[test]
fn test_load_function() {
    let (gi, demo) = loaded();
    let rect = get(&demo, "Rect");
    let mut table = Table::new();
    table.set("area", get(&get(&rect, "methods"), "area"));
    table.set("raw", Value::LightUserdata(0x4242));
    table.set("type", rect.clone());
    table.set("new", get(&get(&rect, "methods"), "new"));

    assert_eq!(gi.load_function(&table, "area"), Some(0x2000));
    assert_eq!(gi.load_function(&table, "raw"), Some(0x4242));
    assert_eq!(gi.load_function(&table, "type"), None);
    assert_eq!(gi.load_function(&table, "missing"), None);
    // demo_rect_new is neither registered nor exported by the running program.
    assert_eq!(gi.load_function(&table, "new"), None);
}

#[test]
fn test_load_function_ignores_callbacks() {
    let repository = Repository::new();
    repository.install(
        TYPELIB_DIR,
        TypelibBuilder::new("Cb", "1.0")
            .with_entry(CallableDef::callback("Notify"))
            .build()
            .unwrap(),
    );
    repository.prepend_search_path(TYPELIB_DIR);
    let gi = Gi::new(repository);
    let cb = gi.require(&[Value::from("Cb")]).unwrap().remove(0);

    let mut table = Table::new();
    table.set("notify", get(&cb, "Notify"));
    assert_eq!(gi.load_function(&table, "notify"), None);
}

#[test]
fn test_global_bridge_shares_repository() {
    let a = Gi::global();
    let b = Gi::global();
    assert_eq!(a.index(&Value::from("GibridgeNeverLoaded")).unwrap(), Value::Nil);
    assert_eq!(a.repository().loaded_namespaces(), b.repository().loaded_namespaces());
}
