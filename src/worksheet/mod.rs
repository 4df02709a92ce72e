//! Worksheet table support.

pub mod table_style_info;

pub use table_style_info::{TableStyleInfo, TableStyleOptions};
