//! Tablesmith CLI Library
//!
//! Model file loading and the database-free commands. The CLI tool (main.rs) uses this
//! library.

pub mod commands;
pub mod model_file;
