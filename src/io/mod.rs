//! File ingestion and output for the command line.
pub mod colors;
pub mod csv;
pub mod json;
pub mod string_file;
