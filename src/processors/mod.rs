//! Frame-level translation and CSV import/export

pub mod csv_io;
pub mod frame;
