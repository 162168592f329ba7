//! Parser module — annotation primitives and the record builder on top.

pub mod records;
pub mod tags;

pub use records::parse_file;
