pub mod in_memory;
pub mod line_reader;
