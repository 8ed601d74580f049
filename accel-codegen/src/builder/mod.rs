//! Building blocks for multi-line Swift fragments.

mod code_builder;

pub use code_builder::CodeBuilder;
