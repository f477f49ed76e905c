// warnscan - lib.rs
//
// Library entry point. warnscan is a library crate: the embedding
// static-analysis host calls `app::report` / `app::locate` /
// `app::profile_mgr` and owns everything beyond the returned warnings.

pub mod app;
pub mod core;
pub mod util;
