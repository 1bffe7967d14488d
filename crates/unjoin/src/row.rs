use crate::{Result, Value};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One result-set row: an ordered mapping from column name to scalar value.
///
/// A row distinguishes a column it does not carry from a null cell: [`get`]
/// returns `None` for the former and `Some(&Value::Null)` for the latter.
/// Rows are never mutated by the engine.
///
/// [`get`]: Row::get
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value, replacing any previous one. Chainable.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    /// Reads the value under `prefix + column`.
    pub fn get_prefixed(&self, prefix: &str, column: &str) -> Option<&Value> {
        if prefix.is_empty() {
            self.get(column)
        } else {
            self.get(&format!("{prefix}{column}"))
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Builds a row from a JSON object of scalar cells.
    pub fn from_json(src: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(cells) = src else {
            return Err(anyhow::anyhow!("a row must be a JSON object").into());
        };

        let mut columns = IndexMap::with_capacity(cells.len());
        for (name, value) in cells {
            columns.insert(name, Value::try_from(value)?);
        }

        Ok(Self { columns })
    }
}

impl From<IndexMap<String, Value>> for Row {
    fn from(columns: IndexMap<String, Value>) -> Self {
        Self { columns }
    }
}

impl<C: Into<String>, V: Into<Value>> FromIterator<(C, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}
