use ndarray::{Array1, Array2, ArrayD, Axis, Ix1, Ix2, IxDyn};
use serde::{Serialize, Serializer};

use crate::eval::EvalError;

/// One cell of a results table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Array(ArrayD<f64>),
}

impl Value {
    pub fn vector(values: Vec<f64>) -> Self {
        Value::Array(Array1::from(values).into_dyn())
    }

    pub fn from_matrix(m: Array2<f64>) -> Self {
        Value::Array(m.into_dyn())
    }

    pub fn kind(&self) -> String {
        match self {
            Value::Text(_) => "text".to_string(),
            Value::Int(_) => "integer".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Array(a) => format!("array{:?}", a.shape()),
        }
    }

    /// Numeric view as an n-d array; scalars become 0-d arrays.
    pub fn as_numeric(&self) -> Option<ArrayD<f64>> {
        match self {
            Value::Int(v) => Some(ArrayD::from_elem(IxDyn(&[]), *v as f64)),
            Value::Float(v) => Some(ArrayD::from_elem(IxDyn(&[]), *v)),
            Value::Array(a) => Some(a.clone()),
            Value::Text(_) => None,
        }
    }

    /// Inverse of `as_numeric`: 0-d arrays collapse back to floats.
    pub fn from_numeric(a: ArrayD<f64>) -> Self {
        if a.ndim() == 0 {
            Value::Float(a.iter().next().copied().unwrap_or(f64::NAN))
        } else {
            Value::Array(a)
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Float(v) => float_json(*v),
            Value::Array(a) => {
                let data: Vec<f64> = a.iter().copied().collect();
                array_json(a.shape(), &data)
            }
        }
    }

    pub fn from_json(raw: &serde_json::Value) -> Result<Self, String> {
        match raw {
            serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
            serde_json::Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else {
                    n.as_f64()
                        .map(Value::Float)
                        .ok_or_else(|| format!("unrepresentable number {n}"))
                }
            }
            serde_json::Value::Null => Ok(Value::Float(f64::NAN)),
            serde_json::Value::Array(_) => {
                let mut shape = Vec::new();
                probe_shape(raw, &mut shape);
                let mut data = Vec::new();
                flatten_json(raw, &shape, 0, &mut data)?;
                ArrayD::from_shape_vec(IxDyn(&shape), data)
                    .map(Value::Array)
                    .map_err(|e| e.to_string())
            }
            serde_json::Value::Object(_) => Err("nested objects are not valid cells".to_string()),
        }
    }
}

fn float_json(v: f64) -> serde_json::Value {
    serde_json::Number::from_f64(v)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn array_json(shape: &[usize], data: &[f64]) -> serde_json::Value {
    match shape.split_first() {
        None => data.first().map(|v| float_json(*v)).unwrap_or(serde_json::Value::Null),
        Some((&n, rest)) => {
            let stride: usize = rest.iter().product();
            let items = (0..n)
                .map(|i| array_json(rest, &data[i * stride..(i + 1) * stride]))
                .collect();
            serde_json::Value::Array(items)
        }
    }
}

fn probe_shape(raw: &serde_json::Value, shape: &mut Vec<usize>) {
    if let serde_json::Value::Array(items) = raw {
        shape.push(items.len());
        if let Some(first) = items.first() {
            probe_shape(first, shape);
        }
    }
}

fn flatten_json(
    raw: &serde_json::Value,
    shape: &[usize],
    depth: usize,
    out: &mut Vec<f64>,
) -> Result<(), String> {
    match raw {
        serde_json::Value::Array(items) => {
            if depth >= shape.len() || items.len() != shape[depth] {
                return Err(format!("ragged array at depth {depth}"));
            }
            for item in items {
                flatten_json(item, shape, depth + 1, out)?;
            }
            Ok(())
        }
        serde_json::Value::Number(n) if depth == shape.len() => {
            out.push(n.as_f64().unwrap_or(f64::NAN));
            Ok(())
        }
        serde_json::Value::Null if depth == shape.len() => {
            out.push(f64::NAN);
            Ok(())
        }
        _ => Err(format!("non-numeric or ragged array element at depth {depth}")),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

/// Ordered rows under named columns. Row order encodes fold order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<(String, Vec<Value>)>) -> Result<Self, EvalError> {
        let mut table = Self::new();
        for (name, values) in columns {
            if table.has_column(&name) {
                return Err(EvalError::shape(
                    "table construction",
                    "unique column names",
                    format!("duplicate column {name}"),
                ));
            }
            table.push_column(&name, values)?;
        }
        Ok(table)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Result<&[Value], EvalError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| EvalError::MissingColumn(name.to_string()))
    }

    pub fn value(&self, row: usize, name: &str) -> Result<&Value, EvalError> {
        let col = self.column(name)?;
        col.get(row).ok_or_else(|| {
            EvalError::shape(
                format!("column {name}"),
                format!("row index < {}", self.n_rows),
                format!("row {row}"),
            )
        })
    }

    /// Adds a column, or replaces an existing one in place.
    pub fn push_column(&mut self, name: &str, values: Vec<Value>) -> Result<(), EvalError> {
        if !self.columns.is_empty() && values.len() != self.n_rows {
            return Err(EvalError::shape(
                format!("column {name}"),
                format!("{} rows", self.n_rows),
                format!("{} rows", values.len()),
            ));
        }
        self.n_rows = values.len();
        if let Some(existing) = self.columns.iter_mut().find(|c| c.name == name) {
            existing.values = values;
        } else {
            self.columns.push(Column {
                name: name.to_string(),
                values,
            });
        }
        Ok(())
    }

    /// Reads a cell as a 2-D (samples x features) matrix. 1-D cells become n x 1.
    pub fn matrix_at(&self, name: &str, row: usize) -> Result<Array2<f64>, EvalError> {
        let value = self.value(row, name)?;
        let context = format!("column {name}, row {row}");
        match value {
            Value::Array(a) => to_matrix(a.clone(), &context),
            other => Err(EvalError::shape(
                context,
                "1-d or 2-d numeric array",
                other.kind(),
            )),
        }
    }

    pub fn row_json(&self, row: usize) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        for col in &self.columns {
            if let Some(v) = col.values.get(row) {
                map.insert(col.name.clone(), v.to_json());
            }
        }
        map
    }
}

pub fn to_matrix(a: ArrayD<f64>, context: &str) -> Result<Array2<f64>, EvalError> {
    match a.ndim() {
        1 => a
            .into_dimensionality::<Ix1>()
            .map(|v| v.insert_axis(Axis(1)))
            .map_err(|e| EvalError::shape(context, "1-d array", e.to_string())),
        2 => a
            .into_dimensionality::<Ix2>()
            .map_err(|e| EvalError::shape(context, "2-d array", e.to_string())),
        _ => Err(EvalError::shape(
            context,
            "1-d or 2-d array",
            format!("{}-d array {:?}", a.ndim(), a.shape()),
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
