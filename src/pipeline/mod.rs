pub mod aggregation;
pub mod ranking;
pub mod summary;
