//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Spawning external programs (the editor) with error handling
//! - `io` - File I/O with consistent error handling
//! - `validation` - Input validation helpers

pub mod command;
pub mod io;
pub mod validation;
