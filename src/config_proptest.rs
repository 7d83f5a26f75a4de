//! Property-based tests for the CI configuration model.
//!
//! These tests use proptest to generate random top-level mappings and verify
//! that the classification invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{is_rule_key, CiConfig, GLOBAL_KEYS};
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value};
    use std::collections::HashMap;

    /// Arbitrary top-level keys: plain names, dotted anchors, rule-ish
    /// names, and the global keys themselves.
    fn arb_key() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z][a-z0-9_-]{0,15}",
            "\\.[a-z][a-z0-9_-]{0,15}",
            "\\.rules:[a-z][a-z0-9_-]{0,10}",
            "\\.[a-z]{1,8}template",
            proptest::sample::select(GLOBAL_KEYS.to_vec()).prop_map(str::to_string),
        ]
    }

    fn mapping_from(keys: HashMap<String, i64>) -> Mapping {
        let mut merged = Mapping::new();
        for (key, value) in keys {
            merged.insert(Value::String(key), Value::Number(value.into()));
        }
        merged
    }

    proptest! {
        /// Property: anchors, jobs, and global keys partition the entry
        /// key set into three disjoint classes.
        #[test]
        fn classification_partitions_entries(keys in proptest::collection::hash_map(arb_key(), any::<i64>(), 0..24)) {
            let config = CiConfig::from_merged(mapping_from(keys));

            let mut classified = 0usize;
            for key in config.entries().iter().filter_map(|(k, _)| k.as_str()) {
                let in_anchors = config.anchors().get(Value::String(key.to_string())).is_some();
                let in_jobs = config.jobs().get(Value::String(key.to_string())).is_some();
                let in_global = GLOBAL_KEYS.contains(&key);

                let classes = usize::from(in_anchors) + usize::from(in_jobs) + usize::from(in_global);
                prop_assert_eq!(classes, 1, "key '{}' is in {} classes", key, classes);
                classified += 1;
            }
            prop_assert_eq!(classified, config.entries().len());
        }

        /// Property: non-string top-level keys never survive into entries,
        /// so the three-way classification stays total.
        #[test]
        fn non_string_keys_never_survive(
            keys in proptest::collection::hash_map(arb_key(), any::<i64>(), 0..12),
            nums in proptest::collection::vec(any::<i64>(), 0..6),
        ) {
            let mut merged = mapping_from(keys);
            for n in &nums {
                merged.insert(Value::Number((*n).into()), Value::Null);
            }

            let config = CiConfig::from_merged(merged);
            for (key, _) in config.entries() {
                prop_assert!(key.as_str().is_some(), "non-string key survived: {:?}", key);
            }
        }

        /// Property: the reserved `default` key never survives into entries,
        /// anchors, or jobs.
        #[test]
        fn default_key_never_in_entries(keys in proptest::collection::hash_map(arb_key(), any::<i64>(), 0..24)) {
            let config = CiConfig::from_merged(mapping_from(keys));
            let default = Value::String("default".to_string());
            prop_assert!(config.entries().get(&default).is_none());
            prop_assert!(config.anchors().get(&default).is_none());
            prop_assert!(config.jobs().get(&default).is_none());
        }

        /// Property: declared rules are exactly the rule-predicate filter
        /// of the anchor keys.
        #[test]
        fn declared_rules_match_predicate(keys in proptest::collection::hash_map(arb_key(), any::<i64>(), 0..24)) {
            let config = CiConfig::from_merged(mapping_from(keys));

            for rule in config.declared_rules() {
                prop_assert!(is_rule_key(rule));
                prop_assert!(config.anchors().get(Value::String(rule.clone())).is_some());
            }
            for key in config.anchors().iter().filter_map(|(k, _)| k.as_str()) {
                prop_assert_eq!(is_rule_key(key), config.declared_rules().contains(key));
            }
        }

        /// Property: unused and orphaned rules are disjoint, unused is a
        /// subset of declared, orphaned is a subset of used.
        #[test]
        fn rule_set_algebra(keys in proptest::collection::hash_map(arb_key(), any::<i64>(), 0..24)) {
            let config = CiConfig::from_merged(mapping_from(keys));
            let unused = config.unused_rules();
            let orphaned = config.orphaned_rules();

            prop_assert!(unused.is_disjoint(&orphaned));
            prop_assert!(unused.is_subset(config.declared_rules()));
            prop_assert!(orphaned.is_subset(config.used_rules()));
        }
    }
}
