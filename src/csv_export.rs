//! CSV projection of suggestion records
//!
//! The output column set is data, not code: a [`Column`] names a source
//! path into the record (a top-level field, or a leaf inside a nested
//! container) and the label to print in the header. [`to_csv`] projects a
//! sequence of JSON records through a column list into CSV text.
//!
//! The default column set keeps the legacy header labelling: both
//! coordinate columns carry the container key `geo_position` instead of
//! `latitude`/`longitude`, which downstream consumers of `result.csv`
//! rely on.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a column's value comes from inside a record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPath {
    /// A top-level field of the record
    Field(String),
    /// A leaf inside a nested container object
    Nested {
        /// Key of the container object on the record
        container: String,
        /// Key of the value inside the container
        leaf: String,
    },
}

/// One output column: a source path plus the header label to print
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header label for this column
    pub label: String,
    /// Source path resolved against each record
    pub path: ColumnPath,
}

impl Column {
    /// Column for a top-level field, labelled with the field name
    pub fn field(name: &str) -> Self {
        Self {
            label: name.to_string(),
            path: ColumnPath::Field(name.to_string()),
        }
    }

    /// Column for a nested `container.leaf` value with an explicit label
    pub fn nested(container: &str, leaf: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            path: ColumnPath::Nested {
                container: container.to_string(),
                leaf: leaf.to_string(),
            },
        }
    }

    /// The default column set: `_id`, `name`, `type`, latitude, longitude
    ///
    /// The coordinate columns are labelled `geo_position` (the container
    /// key), the header existing consumers expect.
    pub fn default_set() -> Vec<Column> {
        vec![
            Column::field("_id"),
            Column::field("name"),
            Column::field("type"),
            Column::nested("geo_position", "latitude", "geo_position"),
            Column::nested("geo_position", "longitude", "geo_position"),
        ]
    }
}

/// Resolve a column path against one record
///
/// Returns `None` when the field, the container, or the leaf is absent, or
/// when the record or container is not an object. A missing `geo_position`
/// container therefore renders as empty cells instead of failing the row.
fn lookup<'a>(record: &'a Value, path: &ColumnPath) -> Option<&'a Value> {
    match path {
        ColumnPath::Field(name) => record.get(name),
        ColumnPath::Nested { container, leaf } => record.get(container)?.get(leaf),
    }
}

/// Render one cell value
///
/// Strings print without quotes, numbers and booleans in their JSON text
/// form, absent or null values as the empty string.
fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Serialize records to CSV text: one header line plus one line per record
///
/// Rows never fail on missing fields. Cells that contain the separator or a
/// line break are quoted by the writer; well-formed suggestion data is
/// emitted verbatim.
pub fn to_csv(records: &[Value], columns: &[Column]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|c| c.label.as_str()))
        .map_err(|e| Error::Csv(e.to_string()))?;

    for record in records {
        writer
            .write_record(columns.iter().map(|c| render(lookup(record, &c.path))))
            .map_err(|e| Error::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))
}
