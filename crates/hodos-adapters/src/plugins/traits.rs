//! The [`GraphAlgorithm`] trait and its parameter/result types.
//!
//! Algorithms are addressed by name and invoked with a [`Parameters`]
//! bag of [`Value`]s. Results come back as a small table: a list of
//! column names plus one row of values per record, so callers can
//! consume any algorithm's output without knowing its concrete types.

use hodos_common::collections::HodosIndexMap;
use hodos_common::{Result, Value, VertexId};
use hodos_core::MatrixGraph;

/// The kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    /// A vertex index into the graph's rows.
    Vertex,
    /// An arbitrary 64-bit integer.
    Integer,
    /// A boolean flag.
    Boolean,
    /// A UTF-8 string.
    String,
}

/// Declares one parameter an algorithm accepts.
#[derive(Debug, Clone)]
pub struct ParameterDef {
    /// Name the parameter is looked up under.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Expected value kind.
    pub param_type: ParameterType,
    /// Whether execution fails when the parameter is absent.
    pub required: bool,
    /// Value assumed when an optional parameter is absent.
    pub default: Option<Value>,
}

/// A named bag of algorithm arguments.
///
/// # Examples
///
/// ```
/// use hodos_adapters::Parameters;
///
/// let params = Parameters::new()
///     .with("start", 0i64)
///     .with("verbose", true);
///
/// assert_eq!(params.get_vertex("start"), Some(0));
/// assert_eq!(params.get_bool("verbose"), Some(true));
/// assert_eq!(params.get_int("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: HodosIndexMap<String, Value>,
}

impl Parameters {
    /// Creates an empty parameter bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, replacing any previous value under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Looks up an integer parameter.
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int64)
    }

    /// Looks up a boolean parameter.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Looks up a string parameter.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Looks up an integer parameter as a vertex index.
    ///
    /// Negative values do not name a vertex and come back as `None`.
    #[must_use]
    pub fn get_vertex(&self, name: &str) -> Option<VertexId> {
        self.get_int(name).and_then(|v| usize::try_from(v).ok())
    }

    /// Number of parameters in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the bag holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A tabular algorithm result: named columns plus rows of [`Value`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl AlgorithmResult {
    /// Creates an empty result with the given column names.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row. The row must match the column count.
    pub fn add_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Column names, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the result holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A named graph algorithm invokable through the registry.
pub trait GraphAlgorithm: Send + Sync {
    /// Registry name, e.g. `"bfs"`.
    fn name(&self) -> &str;

    /// One-line description of what the algorithm computes.
    fn description(&self) -> &str;

    /// The parameters this algorithm accepts.
    fn parameters(&self) -> &[ParameterDef];

    /// Runs the algorithm against `graph`.
    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult>;
}
