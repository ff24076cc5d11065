//! Columnar binary export.
//!
//! Compiled out when the `parquet` feature is disabled; the stub
//! reports the missing codec support as a dependency error.

#[cfg(feature = "parquet")]
pub use enabled::write_parquet;

#[cfg(not(feature = "parquet"))]
pub use disabled::write_parquet;

#[cfg(feature = "parquet")]
mod enabled {
    use std::fs::File;
    use std::path::Path;
    use std::sync::Arc;

    use arrow::array::{
        ArrayRef, BooleanBuilder, Date32Builder, Float64Builder, StringBuilder,
    };
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use chrono::NaiveDate;
    use parquet::arrow::ArrowWriter;
    use parquet::basic::Compression;
    use parquet::file::properties::WriterProperties;

    use crate::error::{Result, ScoutprepError};
    use crate::table::{Cell, Table};

    /// Days from 0001-01-01 (CE) to the Unix epoch.
    const EPOCH_DAYS_FROM_CE: i32 = 719_163;

    fn date_to_days(date: NaiveDate) -> i32 {
        use chrono::Datelike;
        date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
    }

    /// Pick the Arrow type for a column from its first non-missing
    /// cell. All-missing columns fall back to nullable strings.
    fn column_type(table: &Table, col: usize) -> DataType {
        for row in 0..table.row_count() {
            match table.get(row, col) {
                Some(Cell::Number(_)) => return DataType::Float64,
                Some(Cell::Date(_)) => return DataType::Date32,
                Some(Cell::Bool(_)) => return DataType::Boolean,
                Some(Cell::Text(_)) | Some(Cell::List(_)) => return DataType::Utf8,
                _ => continue,
            }
        }
        DataType::Utf8
    }

    fn build_array(table: &Table, col: usize, ty: &DataType) -> ArrayRef {
        let rows = table.row_count();
        match ty {
            DataType::Float64 => {
                let mut builder = Float64Builder::with_capacity(rows);
                for row in 0..rows {
                    match table.get(row, col) {
                        Some(Cell::Number(n)) => builder.append_value(*n),
                        _ => builder.append_null(),
                    }
                }
                Arc::new(builder.finish())
            }
            DataType::Date32 => {
                let mut builder = Date32Builder::with_capacity(rows);
                for row in 0..rows {
                    match table.get(row, col) {
                        Some(Cell::Date(d)) => builder.append_value(date_to_days(*d)),
                        _ => builder.append_null(),
                    }
                }
                Arc::new(builder.finish())
            }
            DataType::Boolean => {
                let mut builder = BooleanBuilder::with_capacity(rows);
                for row in 0..rows {
                    match table.get(row, col) {
                        Some(Cell::Bool(b)) => builder.append_value(*b),
                        _ => builder.append_null(),
                    }
                }
                Arc::new(builder.finish())
            }
            _ => {
                let mut builder = StringBuilder::new();
                for row in 0..rows {
                    match table.get(row, col) {
                        Some(Cell::Missing) | None => builder.append_null(),
                        Some(cell) => builder.append_value(cell.render()),
                    }
                }
                Arc::new(builder.finish())
            }
        }
    }

    /// Write the table as a Snappy-compressed Parquet file, no index
    /// column. Column types are inferred from the cells.
    pub fn write_parquet(table: &Table, path: &Path) -> Result<()> {
        let fields: Vec<Field> = table
            .headers()
            .iter()
            .enumerate()
            .map(|(col, name)| Field::new(name, column_type(table, col), true))
            .collect();
        let schema = Arc::new(Schema::new(fields));

        let columns: Vec<ArrayRef> = schema
            .fields()
            .iter()
            .enumerate()
            .map(|(col, field)| build_array(table, col, field.data_type()))
            .collect();

        let batch = RecordBatch::try_new(schema.clone(), columns).map_err(|e| {
            ScoutprepError::Columnar(format!("failed to assemble record batch: {}", e))
        })?;

        let file = File::create(path).map_err(|e| ScoutprepError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();

        let mut writer = ArrowWriter::try_new(file, schema, Some(props))
            .map_err(|e| ScoutprepError::Dependency(format!("parquet writer unavailable: {}", e)))?;
        writer
            .write(&batch)
            .map_err(|e| ScoutprepError::Columnar(e.to_string()))?;
        writer
            .close()
            .map_err(|e| ScoutprepError::Columnar(e.to_string()))?;

        Ok(())
    }

}

#[cfg(not(feature = "parquet"))]
mod disabled {
    use std::path::Path;

    use crate::error::{Result, ScoutprepError};
    use crate::table::Table;

    /// Columnar export requires the `parquet` feature.
    pub fn write_parquet(_table: &Table, _path: &Path) -> Result<()> {
        Err(ScoutprepError::Dependency(
            "parquet support not enabled; rebuild with --features parquet".to_string(),
        ))
    }
}
