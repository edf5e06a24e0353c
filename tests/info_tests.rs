//! Property surface of `gi.info` handles and `gi.infos` collections.

mod common;

use common::{get, items, loaded};
use gibridge::prelude::*;
use gibridge_core::{InfoType, Transfer};

const TYPE_TAGS: [&str; 17] = [
    "function",
    "callback",
    "struct",
    "enum",
    "flags",
    "object",
    "interface",
    "constant",
    "union",
    "value",
    "signal",
    "vfunc",
    "property",
    "field",
    "arg",
    "type",
    "unresolved",
];

/// Every handle reachable from `root` through collections and nested
/// handles. Cross references (`interface`, `parent`) are not followed.
fn reachable(root: &Value) -> Vec<Value> {
    let mut found = vec![];
    let mut queue = vec![root.clone()];
    while let Some(info) = queue.pop() {
        for relation in ["fields", "methods", "args", "values", "vfuncs", "properties", "signals", "constants"] {
            let collection = get(&info, relation);
            if !collection.is_nil() {
                queue.extend(items(&collection));
            }
        }
        for nested in ["typeinfo", "return_type"] {
            let value = get(&info, nested);
            if !value.is_nil() {
                queue.push(value);
            }
        }
        let params = get(&info, "params");
        if let Some(params) = params.as_table() {
            queue.extend((1..=params.len() as i64).filter_map(|i| params.get(i).cloned()));
        }
        found.push(info);
    }
    found
}

fn all_infos() -> Vec<Value> {
    let (_gi, demo) = loaded();
    let count = len_value(&demo).unwrap();
    (1..=count as i64)
        .flat_map(|i| reachable(&get(&demo, i)))
        .collect()
}

// =============================================================================
// Kind properties
// =============================================================================

#[test]
fn test_type_and_predicates_agree() {
    let infos = all_infos();
    assert!(infos.len() > 30);
    for info in &infos {
        let tag = get(info, "type");
        let tag = tag.as_str().expect("type is a string");
        assert!(TYPE_TAGS.contains(&tag), "unknown tag {tag}");
        assert_eq!(get(info, format!("is_{tag}")), Value::Boolean(true), "{info:?}");

        let matching: Vec<_> = TYPE_TAGS
            .iter()
            .filter(|candidate| get(info, format!("is_{candidate}")) == Value::Boolean(true))
            .collect();
        match tag {
            "flags" => assert_eq!(matching, [&"enum", &"flags"]),
            _ => assert_eq!(matching, [&tag]),
        }
    }
}

#[test]
fn test_lattice_predicates() {
    let (_gi, demo) = loaded();
    let window = get(&demo, "Window");
    let signal = get(&get(&window, "signals"), 1i64);
    assert_eq!(get(&signal, "is_callable"), Value::Boolean(true));
    assert_eq!(get(&signal, "is_function"), Value::Boolean(false));
    assert_eq!(get(&window, "is_registered_type"), Value::Boolean(true));
    assert_eq!(get(&window, "is_callable"), Value::Boolean(false));
    assert_eq!(get(&get(&demo, "Options"), "is_enum"), Value::Boolean(true));
    assert_eq!(get(&get(&demo, "MAX_SIZE"), "is_registered_type"), Value::Boolean(false));
}

#[test]
fn test_universal_properties() {
    let (_gi, demo) = loaded();
    let rect = get(&demo, "Rect");
    let area = get(&get(&rect, "methods"), "area");
    assert_eq!(get(&area, "name"), Value::from("area"));
    assert_eq!(get(&area, "namespace"), Value::from("Demo"));
    assert_eq!(get(&area, "fullname"), Value::from("Demo.Rect.area"));
    assert_eq!(get(&area, "deprecated"), Value::Boolean(false));
    assert_eq!(get(&area, "container"), rect);
    assert_eq!(get(&rect, "container"), Value::Nil);
    assert_eq!(get(&get(&demo, "MAX_SIZE"), "deprecated"), Value::Boolean(true));
}

#[test]
fn test_unknown_properties_are_nil() {
    let (_gi, demo) = loaded();
    let rect = get(&demo, "Rect");
    assert_eq!(get(&rect, "no_such_property"), Value::Nil);
    assert_eq!(get(&rect, "signals"), Value::Nil);
    assert_eq!(get(&rect, "is_zero_terminated"), Value::Nil);
    assert!(index_value(&rect, &Value::Boolean(true)).is_err());
}

// =============================================================================
// Collections
// =============================================================================

#[test]
fn test_collection_bounds() {
    let infos = all_infos();
    let mut checked = 0;
    for info in &infos {
        for relation in ["fields", "methods", "args", "values"] {
            let collection = get(info, relation);
            let Some(count) = len_value(&collection) else {
                continue;
            };
            for i in 1..=count as i64 {
                assert!(gibridge::Gi::new(Repository::new()).isinfo(&get(&collection, i)));
            }
            for bad in [0, count as i64 + 1] {
                let err = index_value(&collection, &Value::Integer(bad)).unwrap_err();
                assert_eq!(err.to_string(), "bad argument #2 to 'index' (out of bounds)");
            }
            checked += 1;
        }
    }
    assert!(checked > 5);
}

#[test]
fn test_collection_name_lookup_matches_first_ordinal() {
    let (_gi, demo) = loaded();
    let window = get(&demo, "Window");
    let method = get(&get(&window, "methods"), "set_geometry");
    let args = get(&method, "args");
    for item in items(&args) {
        let name = get(&item, "name");
        let name = name.as_str().unwrap();
        let first = items(&args)
            .into_iter()
            .find(|candidate| get(candidate, "name").as_str() == Some(name))
            .unwrap();
        assert_eq!(get(&args, name), first);
    }
    assert_eq!(get(&args, "missing"), Value::Nil);
}

#[test]
fn test_struct_fields() {
    let (_gi, demo) = loaded();
    let rect = get(&demo, "Rect");
    assert_eq!(get(&rect, "size"), Value::Integer(16));
    let fields = get(&rect, "fields");
    assert_eq!(len_value(&fields), Some(3));

    let expected = [("x", 0, 4), ("y", 4, 4), ("size", 8, 8)];
    let fields_by_ordinal = items(&fields);
    for (field, (name, offset, size)) in fields_by_ordinal.iter().zip(expected) {
        assert_eq!(get(field, "name"), Value::from(name));
        assert_eq!(get(field, "offset"), Value::Integer(offset));
        assert_eq!(get(field, "size"), Value::Integer(size));
    }
    assert_ne!(fields_by_ordinal[0], fields_by_ordinal[1]);
    assert_ne!(fields_by_ordinal[1], fields_by_ordinal[2]);
    assert!(index_value(&fields, &Value::Integer(4)).is_err());

    let flags = get(&fields_by_ordinal[2], "flags");
    assert_eq!(flags.as_table().unwrap().get("is_readable"), Some(&Value::Boolean(true)));
    assert_eq!(flags.as_table().unwrap().get("is_writable"), None);
}

// =============================================================================
// Callables
// =============================================================================

#[test]
fn test_function_flags() {
    let (_gi, demo) = loaded();
    let methods = get(&get(&demo, "Rect"), "methods");

    let area = get(&methods, "area");
    let flags = get(&area, "flags");
    let flags = flags.as_table().unwrap();
    assert_eq!(flags.get("is_method"), Some(&Value::Boolean(true)));
    for absent in ["is_constructor", "is_getter", "is_setter", "wraps_vfunc"] {
        assert_eq!(flags.get(absent), None);
    }

    let new = get(&methods, "new");
    let flags = get(&new, "flags");
    assert_eq!(flags.as_table().unwrap().get("is_constructor"), Some(&Value::Boolean(true)));
    assert_eq!(flags.as_table().unwrap().get("is_method"), None);

    let shutdown = get(&get(&demo, "shutdown"), "flags");
    assert_eq!(shutdown.as_table().unwrap().get("wraps_vfunc"), Some(&Value::Boolean(true)));
}

#[test]
fn test_signal_and_vfunc() {
    let (_gi, demo) = loaded();
    let window = get(&demo, "Window");
    let closed = get(&get(&window, "signals"), "closed");
    assert_eq!(get(&closed, "type"), Value::from("signal"));
    let flags = get(&closed, "flags");
    assert_eq!(flags.as_table().unwrap().get("run_last"), Some(&Value::Boolean(true)));
    assert_eq!(flags.as_table().unwrap().entry_count(), 1);

    let draw = get(&get(&window, "vfuncs"), 1i64);
    assert_eq!(get(&draw, "type"), Value::from("vfunc"));
    let flags = get(&draw, "flags");
    assert_eq!(flags.as_table().unwrap().get("must_override"), Some(&Value::Boolean(true)));
    assert_eq!(flags.as_table().unwrap().entry_count(), 1);
    assert_eq!(get(&draw, "offset"), Value::Integer(3));
    assert_eq!(len_value(&get(&draw, "args")), Some(0));
}

#[test]
fn test_return_type_and_transfer() {
    let (_gi, demo) = loaded();
    let init = get(&demo, "init");
    assert_eq!(get(&init, "return_transfer"), Value::from("full"));

    let ret = get(&init, "return_type");
    assert_eq!(get(&ret, "tag"), Value::from("array"));
    assert_eq!(get(&ret, "array_type"), Value::from("c"));
    assert_eq!(get(&ret, "is_zero_terminated"), Value::Boolean(true));
    assert_eq!(get(&ret, "fixed_size"), Value::Integer(4));
    assert_eq!(get(&ret, "array_length"), Value::Nil);
    assert_eq!(get(&ret, "is_pointer"), Value::Boolean(true));
    let params = get(&ret, "params");
    let element = params.as_table().unwrap().get(1i64).unwrap().clone();
    assert_eq!(get(&element, "tag"), Value::from("guint8"));
    assert_eq!(get(&element, "is_basic"), Value::Boolean(true));
}

#[test]
fn test_arg_properties() {
    let (_gi, demo) = loaded();
    let window = get(&demo, "Window");
    let args = get(&get(&get(&window, "methods"), "set_geometry"), "args");

    let rect = get(&args, "rect");
    assert_eq!(get(&rect, "direction"), Value::from("in"));
    assert_eq!(get(&rect, "transfer"), Value::from("none"));
    assert_eq!(get(&rect, "optional"), Value::Boolean(false));
    let typeinfo = get(&rect, "typeinfo");
    assert_eq!(get(&typeinfo, "tag"), Value::from("interface"));
    assert_eq!(get(&get(&typeinfo, "interface"), "name"), Value::from("Rect"));

    assert_eq!(get(&get(&args, "out_rect"), "direction"), Value::from("out-caller-alloc"));

    let names = get(&args, "names");
    assert_eq!(get(&names, "transfer"), Value::from("container"));
    assert_eq!(get(&get(&names, "typeinfo"), "array_length"), Value::Integer(3));

    let count = get(&args, "count");
    assert_eq!(get(&count, "direction"), Value::from("inout"));
    assert_eq!(get(&count, "optional"), Value::Boolean(true));

    let items_arg = get(&get(&get(&demo, "init"), "args"), "items");
    assert_eq!(get(&items_arg, "optional"), Value::Boolean(true));
}

#[test]
fn test_container_type_params() {
    let (_gi, demo) = loaded();
    let args = get(&get(&demo, "init"), "args");
    let table = get(&get(&args, "table"), "typeinfo");
    assert_eq!(get(&table, "tag"), Value::from("GHashTable"));
    assert_eq!(get(&table, "params").as_table().map(Table::len), Some(2));
    assert_eq!(get(&table, "array_type"), Value::Nil);

    let list = get(&get(&args, "items"), "typeinfo");
    assert_eq!(get(&list, "tag"), Value::from("GList"));
    assert_eq!(get(&list, "params").as_table().map(Table::len), Some(1));
}

// =============================================================================
// Registered types
// =============================================================================

#[test]
fn test_object_relations() {
    let (_gi, demo) = loaded();
    let window = get(&demo, "Window");
    assert!(get(&window, "gtype").as_light_userdata().is_some());

    let parent = get(&window, "parent");
    assert_eq!(get(&parent, "fullname"), Value::from("Base.Object"));
    let class = get(&parent, "type_struct");
    assert_eq!(get(&class, "is_gtype_struct"), Value::Boolean(true));

    let interfaces = get(&window, "interfaces");
    assert_eq!(get(&get(&interfaces, 1i64), "name"), Value::from("Drawable"));

    let title = get(&get(&window, "properties"), "title");
    assert_eq!(get(&title, "flags"), Value::Integer(1 | 2 | 4));
    assert_eq!(get(&title, "transfer"), Value::from("full"));

    let drawable = get(&demo, "Drawable");
    let prerequisites = get(&drawable, "prerequisites");
    assert_eq!(get(&prerequisites, 1i64), parent);
}

#[test]
fn test_references_outlive_the_bridge() {
    let (gi, demo) = loaded();
    let window = get(&demo, "Window");
    let before = get(&get(&window, "parent"), "type");
    drop(gi);
    drop(demo);

    let parent = get(&window, "parent");
    assert_eq!(get(&parent, "type"), before);
    assert_eq!(get(&parent, "type"), Value::from("object"));
    assert_eq!(get(&get(&get(&window, "interfaces"), 1i64), "type"), Value::from("interface"));
    assert_eq!(get(&get(&parent, "type_struct"), "fullname"), Value::from("Base.ObjectClass"));
}

#[test]
fn test_flags_type() {
    let (_gi, demo) = loaded();
    let options = get(&demo, "Options");
    assert_eq!(get(&options, "type"), Value::from("flags"));
    assert_eq!(get(&options, "storage"), Value::from("guint32"));
    assert_eq!(get(&options, "error_domain"), Value::Nil);
    let values = get(&options, "values");
    assert_eq!(get(&get(&values, "safe"), "value"), Value::Integer(2));
    assert_eq!(len_value(&get(&options, "methods")), Some(0));
}

#[test]
fn test_gtype_only_on_registered_types() {
    let (gi, demo) = loaded();
    let init = get(&demo, "init");
    assert_eq!(get(&init, "gtype"), Value::Nil);

    let rect = get(&demo, "Rect");
    let gtype = get(&rect, "gtype");
    assert!(gtype.as_light_userdata().is_some());
    assert_eq!(gi.index(&gtype).unwrap(), rect);
}

// =============================================================================
// Handles
// =============================================================================

#[test]
fn test_transfer_tags_are_bijective() {
    let mut tags: Vec<_> = Transfer::ALL.iter().map(|t| t.as_tag()).collect();
    for transfer in Transfer::ALL {
        assert_eq!(Transfer::from_tag(transfer.as_tag()), Some(transfer));
    }
    tags.sort();
    tags.dedup();
    assert_eq!(tags, ["container", "full", "none"]);
    assert_eq!(Transfer::from_tag("borrowed"), None);
}

#[test]
fn test_dropping_handles_releases_references() {
    let (_gi, demo) = loaded();
    let rect = get(&demo, "Rect");
    let info = rect.downcast::<InfoHandle>().unwrap().info().clone();
    let baseline = info.ref_count();

    let fields = get(&rect, "fields");
    let field = get(&fields, 1i64);
    assert!(info.ref_count() > baseline);
    drop(field);
    drop(fields);
    assert_eq!(info.ref_count(), baseline);
    assert_eq!(info.info_type(), InfoType::Struct);
}
