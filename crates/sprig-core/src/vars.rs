//! Shared style/variable definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One shared style or variable definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDef {
    /// Human-readable variable name (e.g. `brand/600`).
    pub name: String,
    /// Raw value as reported by the extractor.
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Side table of shared definitions, keyed by identifier.
///
/// The pipeline passes this through without deep inspection; it is kept in
/// insertion order so emitted metadata stays stable across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalVars(IndexMap<String, VarDef>);

impl GlobalVars {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a definition by identifier.
    pub fn get(&self, id: &str) -> Option<&VarDef> {
        self.0.get(id)
    }

    /// Insert a definition.
    pub fn insert(&mut self, id: impl Into<String>, def: VarDef) {
        self.0.insert(id.into(), def);
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &VarDef)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut vars = GlobalVars::new();
        vars.insert(
            "c1",
            VarDef {
                name: "brand/600".to_string(),
                value: serde_json::json!("#7F56D9"),
            },
        );

        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("c1").unwrap().name, "brand/600");
        assert!(vars.get("missing").is_none());
    }
}
