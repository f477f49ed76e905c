// warnscan - app/mod.rs
//
// Application layer: filesystem orchestration around the core scanner.
// Dependencies: core layer.

pub mod locate;
pub mod profile_mgr;
pub mod report;
