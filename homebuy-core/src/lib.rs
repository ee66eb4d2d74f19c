pub mod calculations;
pub mod models;
pub mod parse;
pub mod table;

pub use calculations::{PropertyProjection, project};
pub use models::*;
pub use table::{ComparisonTable, TableError};
