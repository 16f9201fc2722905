//! CLI commands for pathmark

pub mod dispatch;
pub mod io;
pub mod mark;
pub mod path;
pub mod report;
