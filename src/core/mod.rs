// warnscan - core/mod.rs
//
// Core business logic layer: pure logic over strings and bytes.
// Must NOT touch the filesystem; I/O is owned by the app layer.

pub mod encoding;
pub mod model;
pub mod parser;
pub mod pattern;
pub mod profile;
