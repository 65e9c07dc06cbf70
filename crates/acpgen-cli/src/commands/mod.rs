//! Command implementations.

mod generate;

pub use generate::GenerateCommand;
