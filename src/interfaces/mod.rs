//! Adapters that move data in and out of the machine in external formats.

pub mod csv;
