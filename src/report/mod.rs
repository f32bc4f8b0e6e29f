pub mod charts;
pub mod csv_export;
pub mod tables;
