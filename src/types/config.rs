use anyhow::{Context, Result, bail};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Hierarchical key/value configuration backed by a YAML mapping.
///
/// Keys containing `/` address nested mappings, so `parts/violino/clef`
/// reads `parts -> violino -> clef`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    root: Mapping,
}

impl Config {
    pub fn new() -> Self {
        Self {
            root: Mapping::new(),
        }
    }

    pub fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let value: Value = serde_yaml::from_str(yaml).context("Failed to parse YAML")?;
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(root) => Ok(Self { root }),
            _ => bail!("Configuration root must be a mapping"),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn mapping(&self) -> &Mapping {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    pub fn get_plain(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn get_str(&self, path: &str) -> Option<String> {
        self.get(path).and_then(value_to_string)
    }

    /// Assign a value at a slash-delimited path, creating intermediate
    /// mappings as needed. Non-mapping intermediates are replaced.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let mut segments: Vec<&str> = path.split('/').collect();
        let leaf = segments.pop().unwrap_or(path);

        let mut current = &mut self.root;
        for segment in segments {
            current = child_mapping(current, segment);
        }
        current.insert(Value::String(leaf.to_string()), value.into());
    }

    pub fn namespace_mut(&mut self, key: &str) -> &mut Mapping {
        child_mapping(&mut self.root, key)
    }

    /// Recursively merge `other` into `self`. Nested mappings are merged,
    /// any other value in `other` replaces the existing one.
    pub fn deep_merge(&mut self, other: &Config) {
        merge_mappings(&mut self.root, &other.root);
    }
}

fn child_mapping<'m>(parent: &'m mut Mapping, key: &str) -> &'m mut Mapping {
    let entry = parent
        .entry(Value::String(key.to_string()))
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    if !entry.is_mapping() {
        *entry = Value::Mapping(Mapping::new());
    }
    match entry {
        Value::Mapping(m) => m,
        _ => unreachable!(),
    }
}

fn merge_mappings(target: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        if let (Some(Value::Mapping(existing)), Value::Mapping(incoming)) =
            (target.get_mut(key), value)
        {
            merge_mappings(existing, incoming);
            continue;
        }
        target.insert(key.clone(), value.clone());
    }
}

/// Render a scalar YAML value as plain text. Collections and null have no
/// textual form.
pub fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => value_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
