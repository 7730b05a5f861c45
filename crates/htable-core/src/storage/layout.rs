//! Column layouts
//!
//! A layout file declares the columns of a table in TOML:
//!
//! ```toml
//! [[columns]]
//! id = "name"
//! label = "Name"
//! fields = ["first_name", "last_name"]
//! sortable = true
//!
//! [[columns]]
//! id = "email"
//! label = "E-mail"
//! ```

use super::Result;
use super::config::read_file;
use crate::error::StorageError;
use crate::table::{Column, Handler, Record};
use crate::utils::validation::validate_column_id;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One declared column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Fields rendered as separate cells; defaults to the field named `id`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(default)]
    pub sortable: bool,
}

impl ColumnDef {
    pub fn to_column<R: Record + 'static>(&self) -> Column<R> {
        let handler = if self.fields.is_empty() {
            Handler::field()
        } else {
            Handler::fields(self.fields.iter().cloned())
        };
        Column::new(self.id.clone(), self.label.clone(), handler, self.sortable)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

impl Layout {
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let layout: Layout = toml::from_str(content).map_err(|e| StorageError::LayoutParseError {
            message: format!("Failed to parse layout: {}", e),
        })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject empty or repeated column ids.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for def in &self.columns {
            validate_column_id(&def.id).map_err(|e| StorageError::LayoutParseError {
                message: e.to_string(),
            })?;
            if !seen.insert(def.id.as_str()) {
                return Err(StorageError::LayoutParseError {
                    message: format!("Duplicate column id '{}'", def.id),
                });
            }
        }
        Ok(())
    }

    pub fn to_columns<R: Record + 'static>(&self) -> Vec<Column<R>> {
        self.columns.iter().map(|def| def.to_column()).collect()
    }
}
