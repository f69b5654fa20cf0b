pub mod builder;
pub mod fill;
