//! Functions that wrap platform functionality such as file access.
mod fileio;

pub use fileio::*;
