//! Pipeline transform stages.
//!
//! Each stage mutates the table in place, either appending derived
//! columns or (dedup only) dropping rows. Stage order is fixed by the
//! pipeline; stages that depend on optional columns degrade to no-ops
//! when those columns are absent.

pub mod dedup;
pub mod flags;
pub mod keys;
pub mod numeric;
pub mod positions;
pub mod temporal;
