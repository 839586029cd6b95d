pub mod commands;
pub mod fields;
pub mod parser;
