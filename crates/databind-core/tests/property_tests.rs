//! Property-Based Tests for Databind
//!
//! Uses proptest over generated JSON documents:
//! 1. Every extracted path resolves against the document it came from
//! 2. Parents are listed before their descendants
//! 3. Resolution is total and deterministic for arbitrary path strings
//! 4. Mappings and substitution never lose or invent data

use databind_core::mapping::{apply_multi_mapping, apply_single_mapping, MultiMapping, SingleMapping};
use databind_core::template::{substitute, ContentField};
use databind_core::value::{BoundValue, PropertyBag};
use databind_core::{extract_field_paths, FieldPath, PathResolver};
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Object keys that are addressable: no delimiters, never all digits.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,6}".prop_map(|s| s)
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z {}]{0,8}".prop_map(Value::String),
    ]
}

fn json_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(5, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((key_strategy(), inner), 0..5)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

/// Documents with an object or array at the top level.
fn document_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(json_strategy(), 0..4).prop_map(Value::Array),
        prop::collection::vec((key_strategy(), json_strategy()), 0..6)
            .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
    ]
}

fn resolvers() -> [PathResolver; 2] {
    [PathResolver::new(), PathResolver::with_location_summary()]
}

// ============================================================================
// Extraction
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn extracted_paths_always_resolve(doc in document_strategy()) {
        let paths = extract_field_paths(&doc);
        for resolver in resolvers() {
            for path in &paths {
                prop_assert!(
                    resolver.resolve(&doc, path).is_some(),
                    "path {} did not resolve", path
                );
            }
        }
    }

    #[test]
    fn parents_precede_children(doc in document_strategy()) {
        let paths = extract_field_paths(&doc);
        for (i, parent) in paths.iter().enumerate() {
            for (j, child) in paths.iter().enumerate() {
                if parent.is_prefix_of(child) {
                    prop_assert!(i < j, "{} listed after {}", parent, child);
                }
            }
        }
    }

    #[test]
    fn extraction_never_enumerates_past_first_element(doc in document_strategy()) {
        for path in extract_field_paths(&doc) {
            prop_assert!(!path.as_str().contains("[1]"));
        }
    }

    #[test]
    fn extraction_is_deterministic(doc in document_strategy()) {
        prop_assert_eq!(extract_field_paths(&doc), extract_field_paths(&doc));
    }
}

// ============================================================================
// Resolution
// ============================================================================

proptest! {
    #[test]
    fn resolve_is_total_and_deterministic(doc in json_strategy(), path in ".{0,24}") {
        for resolver in resolvers() {
            let first = resolver.resolve(&doc, &path).map(|v| v.into_owned());
            let second = resolver.resolve(&doc, &path).map(|v| v.into_owned());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn delimiter_only_paths_resolve_to_root(doc in json_strategy(), path in "[.\\[\\]]{0,6}") {
        let resolved = PathResolver::new().resolve(&doc, &path).map(|v| v.into_owned());
        prop_assert_eq!(resolved, Some(doc));
    }
}

// ============================================================================
// Mapping
// ============================================================================

proptest! {
    #[test]
    fn unresolved_single_bindings_keep_base(
        doc in json_strategy(),
        base in prop::collection::btree_map(key_strategy(), any::<i64>(), 0..5),
        props in prop::collection::vec(key_strategy(), 0..5),
    ) {
        let base: PropertyBag = base.into_iter().map(|(k, v)| (k, BoundValue::from(v))).collect();
        // `#` never appears in generated keys.
        let mapping: SingleMapping = props
            .into_iter()
            .map(|p| (p, FieldPath::from("#missing")))
            .collect();

        let out = apply_single_mapping(&PathResolver::new(), &base, &mapping, &doc);
        prop_assert_eq!(out, base);
    }

    #[test]
    fn unresolved_multi_bindings_add_nothing(
        doc in json_strategy(),
        props in prop::collection::vec(key_strategy(), 0..5),
    ) {
        let mapping: MultiMapping = props
            .into_iter()
            .map(|p| (p, vec![FieldPath::from("#a"), FieldPath::from("#b")]))
            .collect();

        let out = apply_multi_mapping(&PathResolver::new(), &PropertyBag::new(), &mapping, &doc);
        prop_assert!(out.is_empty());
    }

    #[test]
    fn extracted_single_bindings_always_bind(doc in document_strategy()) {
        let mapping: SingleMapping = extract_field_paths(&doc)
            .into_iter()
            .map(|p| (p.to_string(), p))
            .collect();

        let out = apply_single_mapping(&PathResolver::new(), &PropertyBag::new(), &mapping, &doc);
        prop_assert_eq!(out.len(), mapping.len());
        prop_assert!(out.values().all(|v| !matches!(v, BoundValue::List(_))));
    }
}

// ============================================================================
// Template substitution
// ============================================================================

proptest! {
    #[test]
    fn no_fields_leaves_template_unchanged(template in ".{0,40}", doc in json_strategy()) {
        prop_assert_eq!(substitute(&PathResolver::new(), &template, &[], &doc), template);
    }

    #[test]
    fn unresolved_fields_leave_template_unchanged(
        template in "[a-z{} ]{0,40}",
        labels in prop::collection::vec("[a-z]{1,4}", 0..4),
    ) {
        let fields: Vec<ContentField> = labels
            .into_iter()
            .map(|label| ContentField::new(label, "#missing"))
            .collect();
        let out = substitute(&PathResolver::new(), &template, &fields, &json!({}));
        prop_assert_eq!(out, template);
    }

    #[test]
    fn metacharacter_labels_substitute_literally(
        label in "[a-z+*.()?$^|\\\\\\[\\]]{1,8}",
        before in "[a-z ]{0,8}",
        after in "[a-z ]{0,8}",
    ) {
        let template = format!("{before}{{{{{label}}}}}{after}{{{{{label}}}}}");
        let doc = json!({"v": "X"});
        let out = substitute(&PathResolver::new(), &template, &[ContentField::new(label, "v")], &doc);
        prop_assert_eq!(out, format!("{before}X{after}X"));
    }
}
