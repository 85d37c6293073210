//! Static schema descriptor for a loaded dataset.
//!
//! Column types are derived once from the storage dtype polars chose while
//! reading the source, never by scanning cell values.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer, floating point or decimal numbers
    Numeric,
    /// Strings and categoricals
    Text,
    /// Booleans
    Boolean,
    /// Dates, datetimes, times and durations
    Temporal,
    /// Anything else (nested, binary, null-typed)
    Other,
}

impl ColumnKind {
    /// Classify a polars dtype.
    pub fn from_dtype(dtype: &DataType) -> Self {
        match dtype {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::Decimal(..) => ColumnKind::Numeric,
            DataType::String | DataType::Categorical(..) | DataType::Enum(..) => ColumnKind::Text,
            DataType::Boolean => ColumnKind::Boolean,
            DataType::Date | DataType::Datetime(..) | DataType::Time | DataType::Duration(..) => {
                ColumnKind::Temporal
            }
            _ => ColumnKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Temporal => "temporal",
            ColumnKind::Other => "other",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema entry for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    pub kind: ColumnKind,
    /// Concrete storage type, e.g. `i64` or `str`.
    pub dtype: String,
}

/// Ordered column name → type mapping, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    columns: Vec<ColumnSchema>,
}

impl SchemaDescriptor {
    /// Build the descriptor from a frame's column dtypes.
    pub fn from_frame(df: &DataFrame) -> Self {
        let columns = df
            .get_columns()
            .iter()
            .map(|col| ColumnSchema {
                name: col.name().to_string(),
                kind: ColumnKind::from_dtype(col.dtype()),
                dtype: col.dtype().to_string(),
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column's type tag by name.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }
}

/// Renders as `{title: text, budget: numeric}`. Names that would make the
/// listing ambiguous are single-quoted, e.g. `{'cast, crew': text}`.
impl fmt::Display for SchemaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_name(f, &col.name)?;
            write!(f, ": {}", col.kind)?;
        }
        f.write_str("}")
    }
}

fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if name.contains([',', ':', '{', '}', '\'']) {
        write!(f, "'{}'", name.replace('\'', "''"))
    } else {
        f.write_str(name)
    }
}
