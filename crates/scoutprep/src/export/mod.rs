//! Final table serialization.
//!
//! Both outputs render cells through the same formatting path, so the
//! delimited and columnar files carry identical logical content. The
//! two writes are not transactional: a columnar failure leaves the
//! delimited file already on disk.

mod csv_out;
mod parquet_out;

pub use csv_out::write_csv;
pub use parquet_out::write_parquet;
