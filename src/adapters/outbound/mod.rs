pub mod append_file;

pub use append_file::*;
