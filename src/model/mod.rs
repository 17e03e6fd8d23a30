pub mod areas;
pub mod config;
pub mod metric;
pub mod table;
