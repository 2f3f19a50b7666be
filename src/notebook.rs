use std::fmt;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use crate::errors::NotebookError;

// @module: Notebook document model and JSON round-trip

/// Cell category as stored in the `cell_type` field.
///
/// Unknown categories are preserved verbatim so a rewrite never loses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CellKind {
    // @kind: Executable code cell
    Code,
    // @kind: Prose cell
    Markdown,
    // @kind: Raw passthrough cell
    Raw,
    // @kind: Anything else, kept as-is
    Other(String),
}

impl From<String> for CellKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "code" => Self::Code,
            "markdown" => Self::Markdown,
            "raw" => Self::Raw,
            _ => Self::Other(value),
        }
    }
}

impl From<CellKind> for String {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Code => "code".to_string(),
            CellKind::Markdown => "markdown".to_string(),
            CellKind::Raw => "raw".to_string(),
            CellKind::Other(value) => value,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::Markdown => write!(f, "markdown"),
            Self::Raw => write!(f, "raw"),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One cell of a notebook.
///
/// Only the fields this tool interprets are named; everything else a cell
/// carries (`id`, `metadata`, ...) round-trips through `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    // @field: Cell category
    pub cell_type: CellKind,

    // @field: Text fragments, logically one concatenated string
    #[serde(default, deserialize_with = "string_or_fragments")]
    pub source: Vec<String>,

    // @field: Computed output artifacts, opaque to this tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Value>>,

    // @field: Execution order marker; outer None = key absent, Some(None) = JSON null
    #[serde(
        default,
        deserialize_with = "int_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_count: Option<Option<i64>>,

    // @field: Uninterpreted cell fields, preserved on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    /// Create a bare cell of the given kind with the given source fragments.
    pub fn new(cell_type: CellKind, source: Vec<String>) -> Self {
        Cell {
            cell_type,
            source,
            outputs: None,
            execution_count: None,
            extra: Map::new(),
        }
    }

    /// Concatenated source text of the cell.
    pub fn source_text(&self) -> String {
        self.source.concat()
    }

    pub fn is_code(&self) -> bool {
        self.cell_type == CellKind::Code
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellKind::Markdown
    }

    /// Number of output entries; absent and empty both count as zero.
    pub fn output_count(&self) -> usize {
        self.outputs.as_ref().map_or(0, Vec::len)
    }

    /// Whether the cell carries at least one output entry.
    pub fn has_outputs(&self) -> bool {
        self.output_count() > 0
    }
}

/// A notebook document: an ordered cell sequence plus metadata.
///
/// Cell order is reading order and is never changed by this tool. Top-level
/// fields that are not interpreted (`nbformat`, `nbformat_minor`, ...) are
/// kept in `extra` so a full-document rewrite re-serializes them as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    // @field: Ordered cell sequence
    pub cells: Vec<Cell>,

    // @field: Document metadata mapping
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,

    // @field: Uninterpreted top-level fields, preserved on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Notebook {
    /// Load a notebook from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NotebookError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| NotebookError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| NotebookError::ParseFailed(format!("{}: {}", path.display(), e)))
    }

    /// Write the notebook back to a JSON file.
    ///
    /// Uses one-space indentation and leaves non-ASCII characters unescaped,
    /// matching the format the upstream tooling produces.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), NotebookError> {
        let path = path.as_ref();
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        self.serialize(&mut serializer)
            .map_err(|e| NotebookError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        buffer.push(b'\n');

        fs::write(path, buffer)
            .map_err(|e| NotebookError::WriteFailed(format!("{}: {}", path.display(), e)))
    }

    /// Number of cells in the document.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Deserialize a `source` field that may be a single string or a fragment list.
fn string_or_fragments<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SourceVisitor;

    impl<'de> serde::de::Visitor<'de> for SourceVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(vec![value])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut fragments = Vec::new();
            while let Some(fragment) = seq.next_element::<String>()? {
                fragments.push(fragment);
            }
            Ok(fragments)
        }
    }

    deserializer.deserialize_any(SourceVisitor)
}

/// Deserialize an `execution_count` that is present, keeping null distinct
/// from an absent key (absence is handled by `#[serde(default)]`).
fn int_or_null<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}
