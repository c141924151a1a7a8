use crate::types::config::{Config, value_to_string};
use serde_yaml::Value;

pub const MACROS_NAMESPACE: &str = "macros";

/// Named macro patterns, read from and written to the `macros` mapping of a
/// config. Names are matched by their text, so a YAML key `16` answers to
/// `"16"`.
#[derive(Debug)]
pub struct MacroRegistry<'a> {
    config: &'a mut Config,
}

impl<'a> MacroRegistry<'a> {
    pub fn new(config: &'a mut Config) -> Self {
        Self { config }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        let macros = self.config.get_plain(MACROS_NAMESPACE)?.as_mapping()?;
        macros
            .iter()
            .find(|(key, _)| value_to_string(key).as_deref() == Some(name))
            .and_then(|(_, pattern)| value_to_string(pattern))
    }

    pub fn register(&mut self, name: &str, pattern: &str) {
        let macros = self.config.namespace_mut(MACROS_NAMESPACE);
        let key = macros
            .keys()
            .find(|key| value_to_string(key).as_deref() == Some(name))
            .cloned()
            .unwrap_or_else(|| Value::String(name.to_string()));
        macros.insert(key, Value::String(pattern.to_string()));
    }

    pub fn len(&self) -> usize {
        self.config
            .get_plain(MACROS_NAMESPACE)
            .and_then(Value::as_mapping)
            .map_or(0, |macros| macros.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
