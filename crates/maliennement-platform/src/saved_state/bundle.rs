use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// String key/value bundle handed to save and restore callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveBundle {
    entries: BTreeMap<String, String>,
}

impl SaveBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let mut bundle = SaveBundle::new();
        assert!(bundle.is_empty());

        bundle.put_string("webview", "blob");
        assert_eq!(bundle.get_string("webview"), Some("blob"));
        assert!(bundle.contains_key("webview"));
        assert_eq!(bundle.len(), 1);
        assert!(bundle.get_string("missing").is_none());
    }

    #[test]
    fn put_overwrites() {
        let mut bundle = SaveBundle::new();
        bundle.put_string("k", "a");
        bundle.put_string("k", "b");
        assert_eq!(bundle.get_string("k"), Some("b"));
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut bundle = SaveBundle::new();
        bundle.put_string("k", "v");
        assert_eq!(serde_json::to_string(&bundle).unwrap(), r#"{"k":"v"}"#);
    }
}
