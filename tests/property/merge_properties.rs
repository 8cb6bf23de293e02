//! Property-based tests for merge invariants

use bindsync::document::{ConfigDocument, ModuleEntry, KEY_FIELD};
use bindsync::merge::{apply_binds, strip_key_bindings};
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[A-Z]{1,6}".prop_map(Value::String),
    ]
}

fn entry() -> impl Strategy<Value = ModuleEntry> {
    let mapping = prop::collection::btree_map(
        prop_oneof![Just(KEY_FIELD.to_string()), "[a-z]{1,5}"],
        leaf(),
        0..4,
    )
    .prop_map(|fields| ModuleEntry::Mapping(fields.into_iter().collect::<Map<String, Value>>()));
    prop_oneof![4 => mapping, 1 => leaf().prop_map(ModuleEntry::Opaque)]
}

fn document() -> impl Strategy<Value = ConfigDocument> {
    prop::collection::btree_map("[a-f]{1,2}", entry(), 0..6)
        .prop_map(|modules| modules.into_iter().collect::<ConfigDocument>())
}

fn names(doc: &ConfigDocument) -> BTreeSet<String> {
    doc.module_names().map(str::to_string).collect()
}

proptest! {
    #[test]
    fn strip_is_idempotent(target in document()) {
        let mut once = target.clone();
        strip_key_bindings(&mut once);
        let mut twice = once.clone();
        strip_key_bindings(&mut twice);
        prop_assert_eq!(&once, &twice);
        for (_, entry) in once.modules() {
            prop_assert!(entry.key_binding().is_none());
        }
    }

    #[test]
    fn copied_keys_match_source(source in document(), target in document()) {
        let merged = apply_binds(&source, target.clone());
        for (name, source_entry) in source.modules() {
            if let (Some(binding), true) = (source_entry.key_binding(), target.contains_module(name)) {
                prop_assert_eq!(merged.module(name).unwrap().key_binding(), Some(binding));
            }
        }
    }

    #[test]
    fn module_set_is_preserved(source in document(), target in document()) {
        let merged = apply_binds(&source, target.clone());
        prop_assert_eq!(names(&merged), names(&target));
        for name in names(&source).difference(&names(&target)) {
            prop_assert!(!merged.contains_module(name));
        }
    }

    #[test]
    fn other_fields_are_untouched(source in document(), target in document()) {
        let merged = apply_binds(&source, target.clone());
        for (name, before) in target.modules() {
            let after = merged.module(name).unwrap();
            if let ModuleEntry::Mapping(fields) = before {
                for (field, value) in fields.iter().filter(|(f, _)| f.as_str() != KEY_FIELD) {
                    prop_assert_eq!(after.field(field), Some(value));
                }
            }
        }
    }

    #[test]
    fn target_only_modules_lose_their_key(source in document(), target in document()) {
        let merged = apply_binds(&source, target.clone());
        for (name, entry) in merged.modules() {
            let restored = source
                .module(name)
                .and_then(ModuleEntry::key_binding)
                .is_some();
            if !restored {
                prop_assert!(entry.key_binding().is_none());
                prop_assert_eq!(entry.is_mapping(), target.module(name).unwrap().is_mapping());
            }
        }
    }
}
