pub mod convert;
pub mod support;
pub mod types;
pub mod validation;
