//! # CI Configuration Model
//!
//! This module loads the root GitLab CI configuration document and the
//! documents it includes, merges them into a single flat mapping, and exposes
//! derived read-only views over the result.
//!
//! ## Key Components
//!
//! - **`CiConfig`**: the merged configuration model. Built once from the root
//!   document's `include` list (or directly from a pre-merged mapping via
//!   [`CiConfig::from_merged`]); immutable after construction. All derived
//!   views are computed in the constructor.
//!
//! - **`GLOBAL_KEYS`**: the fixed set of structural top-level keys that are
//!   neither jobs nor anchors.
//!
//! - **`is_rule_key`**: the rule-name predicate shared by the declared-rules
//!   view and the `extends` scan.
//!
//! ## Classification
//!
//! After extracting the reserved `default` entry, every remaining top-level
//! key falls into exactly one of three classes:
//!
//! - **anchors**: keys starting with `.`, reusable fragments referenced via
//!   `extends` rather than executed directly;
//! - **global keys**: members of [`GLOBAL_KEYS`];
//! - **jobs**: everything else.
//!
//! Loading is fail-fast: a missing root file, malformed YAML, or a missing
//! `include` field is an [`Error::ConfigLoad`], never a partial model.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::warn;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// Top-level keys that are structural, not job or anchor definitions.
pub const GLOBAL_KEYS: [&str; 5] = ["default", "include", "workflow", "variables", "stages"];

/// Whether a key names a rule fragment.
///
/// Rule fragments follow two naming conventions: the `.rules:` prefix for
/// fragments named by condition, and the `template` suffix for generic
/// templates reused as rules. Both are recognized identically by the
/// declared-rules view and the `extends` scan.
///
/// # Examples
///
/// ```
/// use ci_audit::config::is_rule_key;
///
/// assert!(is_rule_key(".rules:build-only"));
/// assert!(is_rule_key(".before_script_template"));
/// assert!(!is_rule_key(".common-setup"));
/// ```
pub fn is_rule_key(key: &str) -> bool {
    key.starts_with(".rules:") || key.ends_with("template")
}

/// The merged CI configuration and its derived views.
///
/// Construct with [`CiConfig::load`] (root document plus includes) or
/// [`CiConfig::from_merged`] (pre-merged mapping). The model is never
/// mutated after construction; every view is computed once and borrowed
/// thereafter.
#[derive(Debug, Clone)]
pub struct CiConfig {
    defaults: Mapping,
    entries: Mapping,
    anchors: Mapping,
    jobs: Mapping,
    declared_rules: BTreeSet<String>,
    used_rules: BTreeSet<String>,
}

impl CiConfig {
    /// Load the root configuration document at `root_path` and merge the
    /// documents listed under its `include` field.
    ///
    /// Include paths are resolved relative to `repo_root` and merged in
    /// listed order, last write winning on key collision. The root document
    /// itself contributes only the `include` list; its other keys are
    /// expected to live in the included files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigLoad`] if the root or any included document is
    /// missing or malformed, or if the root document has no `include`
    /// sequence. Rule-consistency analysis over a partial model would be
    /// meaningless, so there is no degraded mode.
    pub fn load(repo_root: &Path, root_path: &Path) -> Result<Self> {
        let root_doc = read_document(root_path)?;

        let include = root_doc
            .get(Value::String("include".to_string()))
            .ok_or_else(|| Error::ConfigLoad {
                path: root_path.display().to_string(),
                message: "missing 'include' field".to_string(),
            })?;
        let include_paths = include.as_sequence().ok_or_else(|| Error::ConfigLoad {
            path: root_path.display().to_string(),
            message: "'include' must be a sequence of file paths".to_string(),
        })?;

        let mut merged = Mapping::new();
        for item in include_paths {
            let rel_path = item.as_str().ok_or_else(|| Error::ConfigLoad {
                path: root_path.display().to_string(),
                message: "'include' entries must be strings".to_string(),
            })?;
            let included = read_document(&repo_root.join(rel_path))?;
            for (key, value) in included {
                merged.insert(key, value);
            }
        }

        Ok(Self::from_merged(merged))
    }

    /// Build the model directly from an already-merged top-level mapping.
    ///
    /// Extracts the reserved `default` entry and computes all derived views.
    /// Non-string top-level keys are dropped with a warning; every surviving
    /// entry key belongs to exactly one of the anchor, job, or global-key
    /// classes.
    pub fn from_merged(mut merged: Mapping) -> Self {
        let defaults = match merged.remove(Value::String("default".to_string())) {
            Some(Value::Mapping(map)) => map,
            Some(other) => {
                warn!(
                    "'default' entry is not a mapping (found {}), ignoring",
                    yaml_type_name(&other)
                );
                Mapping::new()
            }
            None => Mapping::new(),
        };

        merged.retain(|key, _| {
            if key.as_str().is_some() {
                true
            } else {
                warn!("dropping non-string top-level key: {:?}", key);
                false
            }
        });

        let mut anchors = Mapping::new();
        let mut jobs = Mapping::new();
        for (key, value) in &merged {
            // retain above guarantees string keys
            let name = key.as_str().unwrap_or_default();
            if name.starts_with('.') {
                anchors.insert(key.clone(), value.clone());
            } else if !GLOBAL_KEYS.contains(&name) {
                jobs.insert(key.clone(), value.clone());
            }
        }

        let declared_rules = anchors
            .iter()
            .filter_map(|(key, _)| key.as_str())
            .filter(|name| is_rule_key(name))
            .map(str::to_string)
            .collect();

        let mut used_rules = BTreeSet::new();
        for value in merged.values() {
            let Value::Mapping(entry) = value else {
                continue;
            };
            for name in extends_names(entry.get(Value::String("extends".to_string()))) {
                if is_rule_key(&name) {
                    used_rules.insert(name);
                }
            }
        }

        Self {
            defaults,
            entries: merged,
            anchors,
            jobs,
            declared_rules,
            used_rules,
        }
    }

    /// The value of the reserved `default` entry; empty when absent.
    pub fn defaults(&self) -> &Mapping {
        &self.defaults
    }

    /// The merged top-level mapping, `default` removed.
    pub fn entries(&self) -> &Mapping {
        &self.entries
    }

    /// Entries whose key starts with `.`: reusable fragments.
    pub fn anchors(&self) -> &Mapping {
        &self.anchors
    }

    /// Entries that are neither anchors nor global keys.
    pub fn jobs(&self) -> &Mapping {
        &self.jobs
    }

    /// Anchor keys matching the rule-name predicate.
    pub fn declared_rules(&self) -> &BTreeSet<String> {
        &self.declared_rules
    }

    /// Rule names referenced via `extends` anywhere in the entries.
    ///
    /// Not necessarily a subset of [`declared_rules`](Self::declared_rules):
    /// an `extends` may reference a rule that no anchor declares.
    pub fn used_rules(&self) -> &BTreeSet<String> {
        &self.used_rules
    }

    /// Declared rules never referenced by any `extends`.
    pub fn unused_rules(&self) -> BTreeSet<String> {
        self.declared_rules
            .difference(&self.used_rules)
            .cloned()
            .collect()
    }

    /// Rules referenced by some `extends` but declared by no anchor.
    pub fn orphaned_rules(&self) -> BTreeSet<String> {
        self.used_rules
            .difference(&self.declared_rules)
            .cloned()
            .collect()
    }
}

/// Read and parse one configuration document as a top-level mapping.
fn read_document(path: &Path) -> Result<Mapping> {
    let text = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_yaml::from_str(&text).map_err(|e| Error::ConfigLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Normalize an `extends` value into a list of names.
///
/// A scalar string becomes a one-element list, a sequence keeps its string
/// elements, and anything else (absent, null, unexpected types) contributes
/// nothing.
fn extends_names(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(name)) => vec![name.clone()],
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Human-readable type name for a YAML value, for log messages.
fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Sequence(_) => "Sequence",
        Value::Mapping(_) => "Mapping",
        Value::Tagged(_) => "Tagged",
    }
}
