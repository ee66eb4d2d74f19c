mod fields;
mod global_variables;
mod property_input;

pub use fields::{GlobalField, InputField, NumericField, UnknownFieldError};
pub use global_variables::GlobalFinancialVariables;
pub use property_input::{PropertyInput, ValidationError};
