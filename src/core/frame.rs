//! In-memory tabular data: an ordered list of named, equal-length columns

use std::collections::HashSet;

use crate::core::errors::{Result, TranslationError};

/// A named column of string cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column label
    pub name: String,
    /// Cells, one per row
    pub values: Vec<String>,
}

impl Column {
    /// Column called `name` holding `values`
    pub fn new<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered collection of named columns
///
/// Rows correspond positionally across columns. `Clone` produces a fully
/// independent duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Build a frame, rejecting ragged columns and duplicate names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let n_rows = first.values.len();
            if let Some(bad) = columns.iter().find(|c| c.values.len() != n_rows) {
                return Err(TranslationError::InvalidFrame {
                    message: format!(
                        "column '{}' has {} rows, expected {}",
                        bad.name,
                        bad.values.len(),
                        n_rows
                    ),
                });
            }
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TranslationError::InvalidFrame {
                    message: format!("duplicate column name '{}'", column.name),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Frame with no columns
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a frame from a header and row-major records
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let mut columns: Vec<Column> = header
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TranslationError::InvalidFrame {
                    message: format!(
                        "row {} has {} fields, expected {}",
                        index,
                        row.len(),
                        columns.len()
                    ),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        Self::new(columns)
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column labels in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// First column called `name`
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Mutable access to the first column called `name`
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Number of columns
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows; zero for a frame without columns
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Row-major copy of the cells
    pub fn rows(&self) -> Vec<Vec<&str>> {
        (0..self.n_rows())
            .map(|row| self.columns.iter().map(|c| c.values[row].as_str()).collect())
            .collect()
    }

    /// Replace the header; the count must match
    ///
    /// Names are not checked for uniqueness here, since the translation
    /// service may map two names onto the same text.
    pub fn set_column_names(&mut self, names: Vec<String>) -> Result<()> {
        if names.len() != self.columns.len() {
            return Err(TranslationError::InvalidFrame {
                message: format!(
                    "expected {} column names, got {}",
                    self.columns.len(),
                    names.len()
                ),
            });
        }

        for (column, name) in self.columns.iter_mut().zip(names) {
            column.name = name;
        }
        Ok(())
    }

    /// Replace every value of column `name`; the length must match
    pub fn replace_values(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        let column = self
            .column_mut(name)
            .ok_or_else(|| TranslationError::ColumnNotFound {
                column: name.to_string(),
            })?;

        if values.len() != column.values.len() {
            return Err(TranslationError::InvalidFrame {
                message: format!(
                    "column '{}' has {} rows, got {} replacement values",
                    name,
                    column.values.len(),
                    values.len()
                ),
            });
        }

        column.values = values;
        Ok(())
    }
}
