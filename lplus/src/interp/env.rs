//! Variable store

use std::collections::HashMap;

/// Flat, process-wide namespace of integer variables.
///
/// No scoping and no deletion: a name is created by its first declaration and
/// overwritten by every later one.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: HashMap::new(),
        }
    }

    /// Unconditional overwrite
    pub fn set(&mut self, name: impl Into<String>, value: i64) {
        self.bindings.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings ordered by name
    pub fn sorted(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
