//! Block-model CSV reading.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReader, DataType}};
use serde_json::{json, Value};

use crate::block::Row;

/// Reads a block-model CSV file into flat records.
pub fn read_block_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    let df = CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))?;
    dataframe_rows(&df)
}

/// Reads block-model CSV text into flat records.
pub fn read_block_rows_str(csv: &str) -> Result<Vec<Row>> {
    let df = CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")?;
    dataframe_rows(&df)
}

/// Convert every DataFrame row into a record: numeric columns as numbers,
/// everything else as strings, nulls as `null`.
fn dataframe_rows(df: &DataFrame) -> Result<Vec<Row>> {
    let mut rows = vec![Row::new(); df.height()];

    for column in df.get_columns() {
        let name = column.name().to_string();
        for (row, value) in rows.iter_mut().zip(column_values(column)?) {
            row.insert(name.clone(), value);
        }
    }

    Ok(rows)
}

fn column_values(column: &Column) -> Result<Vec<Value>> {
    let values = match column.dtype() {
        DataType::Float64 | DataType::Float32
        | DataType::Int64 | DataType::Int32
        | DataType::UInt64 | DataType::UInt32 => {
            let cast = column.cast(&DataType::Float64)
                .with_context(|| format!("[io::csv::read] Column {} is not numeric", column.name()))?;
            cast.f64()?.into_iter()
                .map(|v| v.filter(|n| n.is_finite()).map_or(Value::Null, |n| json!(n)))
                .collect()
        }
        _ => {
            let cast = column.cast(&DataType::String)
                .with_context(|| format!("[io::csv::read] Column {} cannot be read as text", column.name()))?;
            cast.str()?.into_iter()
                .map(|v| v.map_or(Value::Null, |s| json!(s)))
                .collect()
        }
    };
    Ok(values)
}
